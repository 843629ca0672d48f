use crate::stats::labels::display_label;
use serde_json::{Map, Value};
use tracing::debug;

/// `last_month.languages` exactly as the endpoint delivers it, in document order.
pub type RawCategories = Map<String, Value>;

/// Display label to whole seconds, kept in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: Vec<(&'static str, i64)>,
}

impl CategoryMap {
    /// Overwrites the magnitude of an existing label in place.
    pub fn insert(&mut self, label: &'static str, seconds: i64) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = seconds,
            None => self.entries.push((label, seconds)),
        }
    }

    pub fn get(&self, label: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == label)
            .map(|(_, seconds)| *seconds)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feeds the labels back in as raw keys.
    pub fn to_raw(&self) -> RawCategories {
        self.entries
            .iter()
            .map(|(label, seconds)| (label.to_string(), Value::from(*seconds)))
            .collect()
    }
}

/// Loose numeric coercion for values that may arrive as numbers or strings.
///
/// Blank strings, `null` and `false` count as zero, `true` as one. Arrays,
/// objects and anything that does not parse to a finite number fail.
/// Strings are read as decimal only, so `0x`/`0o`/`0b` literals and
/// `Infinity` are rejected.
pub fn coerce_magnitude(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse::<f64>().ok()?
            }
        }
        Value::Bool(flag) => f64::from(u8::from(*flag)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => return None,
    };

    number.is_finite().then_some(number)
}

/// Whole seconds, truncated toward zero. `None` outside the `i64` range.
pub fn whole_seconds(number: f64) -> Option<i64> {
    // 2^63 is exact in f64, unlike i64::MAX.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let truncated = number.trunc();
    (-LIMIT..LIMIT).contains(&truncated).then_some(truncated as i64)
}

pub fn normalize(raw: &RawCategories) -> CategoryMap {
    let mut normalized = CategoryMap::default();

    for (key, value) in raw {
        let Some(number) = coerce_magnitude(value) else {
            debug!(key = %key, value = %value, "Dropping category, value is not numeric");
            continue;
        };

        let Some(seconds) = whole_seconds(number) else {
            debug!(key = %key, value = %value, "Dropping category, value is out of range");
            continue;
        };
        if seconds == 0 {
            debug!(key = %key, "Dropping category with zero duration");
            continue;
        }

        let Some(label) = display_label(key) else {
            debug!(key = %key, "Dropping unrecognized category");
            continue;
        };

        normalized.insert(label, seconds);
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawCategories {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn filters_relabels_and_coerces() {
        let input = raw(json!({
            "python": "120",
            "unknownkey": "5",
            "css": "0",
            "json": 300
        }));

        let output = normalize(&input);

        assert_eq!(
            output.iter().collect::<Vec<_>>(),
            vec![("Python", 120), ("JSON", 300)]
        );
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(normalize(&RawCategories::new()).is_empty());
    }

    #[test]
    fn output_is_not_a_valid_input() {
        let first = normalize(&raw(json!({ "python": 120, "json": "300" })));
        assert_eq!(first.len(), 2);

        assert!(normalize(&first.to_raw()).is_empty());
    }

    #[test]
    fn keeps_document_order_of_survivors() {
        let input = raw(json!({
            "yaml": 3,
            "css": 1,
            "markdown": 2
        }));

        let labels: Vec<_> = normalize(&input).iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["YAML", "CSS", "Markdown"]);
    }

    #[test]
    fn empty_key_becomes_unknown_unless_zero() {
        assert_eq!(normalize(&raw(json!({ "": 42 }))).get("Unknown"), Some(42));
        assert!(normalize(&raw(json!({ "": "0" }))).is_empty());
    }

    #[test]
    fn unparseable_values_are_dropped() {
        let input = raw(json!({
            "python": "soon",
            "json": [1, 2],
            "xml": { "seconds": 5 },
            "html": "NaN",
            "toml": " 15 "
        }));

        let output = normalize(&input);
        assert_eq!(output.iter().collect::<Vec<_>>(), vec![("TOML", 15)]);
    }

    #[test]
    fn coercion_follows_loose_number_rules() {
        assert_eq!(coerce_magnitude(&json!("")), Some(0.0));
        assert_eq!(coerce_magnitude(&json!("   ")), Some(0.0));
        assert_eq!(coerce_magnitude(&Value::Null), Some(0.0));
        assert_eq!(coerce_magnitude(&json!(true)), Some(1.0));
        assert_eq!(coerce_magnitude(&json!(false)), Some(0.0));
        assert_eq!(coerce_magnitude(&json!("1e3")), Some(1000.0));
        assert_eq!(coerce_magnitude(&json!("12.75")), Some(12.75));
        assert_eq!(coerce_magnitude(&json!("inf")), None);
        assert_eq!(coerce_magnitude(&json!([])), None);
    }

    #[test]
    fn fractions_below_one_second_are_dropped() {
        let output = normalize(&raw(json!({ "python": "0.4", "json": 61.9 })));
        assert_eq!(output.iter().collect::<Vec<_>>(), vec![("JSON", 61)]);
    }

    #[test]
    fn magnitudes_beyond_i64_are_dropped_not_clamped() {
        let output = normalize(&raw(json!({ "json": 1e300, "xml": "-1e19", "html": "  -3 " })));

        assert_eq!(output.iter().collect::<Vec<_>>(), vec![("HTML", -3)]);
    }

    #[test]
    fn whole_seconds_respects_i64_bounds() {
        assert_eq!(whole_seconds(-9_223_372_036_854_775_808.0), Some(i64::MIN));
        assert_eq!(whole_seconds(9_223_372_036_854_774_784.0), Some(9_223_372_036_854_774_784));
        assert_eq!(whole_seconds(9_223_372_036_854_775_808.0), None);
        assert_eq!(whole_seconds(-12.9), Some(-12));
    }

    #[test]
    fn non_decimal_literals_are_rejected() {
        assert_eq!(coerce_magnitude(&json!("0x10")), None);
        assert_eq!(coerce_magnitude(&json!("0b11")), None);
        assert_eq!(coerce_magnitude(&json!("Infinity")), None);
    }

    #[test]
    fn negative_values_survive_normalization() {
        assert_eq!(normalize(&raw(json!({ "ini": -30 }))).get("INI"), Some(-30));
    }

    #[test]
    fn colliding_labels_keep_the_last_value_in_the_first_position() {
        let mut map = CategoryMap::default();
        map.insert("Python", 10);
        map.insert("JSON", 20);
        map.insert("Python", 30);

        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("Python", 30), ("JSON", 20)]
        );
    }
}
