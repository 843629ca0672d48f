pub mod client;
pub mod labels;
pub mod normalize;

use crate::app::App;
use crate::error::Error;
use crate::stats::normalize::{CategoryMap, normalize};
use crate::util::time::try_format_duration;
use serde::Serialize;
use tracing::{error, warn};

/// One rendered row of the statistics card.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub seconds: i64,
    pub formatted: String,
}

/// Formats every entry, skipping the ones the formatter rejects.
pub fn stat_lines(categories: &CategoryMap) -> Vec<StatLine> {
    categories
        .iter()
        .filter_map(|(label, seconds)| match try_format_duration(seconds) {
            Ok(formatted) => Some(StatLine {
                label,
                seconds,
                formatted,
            }),
            Err(e) => {
                warn!("Skipping {label}: {e}");
                None
            }
        })
        .collect()
}

pub async fn fetch_stats(app: &App) -> Result<Vec<StatLine>, Error> {
    let raw = client::fetch_languages(&app.https, &app.api_url).await?;
    Ok(stat_lines(&normalize(&raw)))
}

/// `None` leaves the card in its placeholder state.
pub async fn load_stats(app: &App) -> Option<Vec<StatLine>> {
    match fetch_stats(app).await {
        Ok(lines) => Some(lines),
        Err(e) => {
            error!("Error fetching statistics: {e}");
            None
        }
    }
}
