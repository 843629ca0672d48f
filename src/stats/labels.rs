/// Raw language identifiers the statistics endpoint reports, paired with the
/// name shown on the page.
pub const DISPLAY_LABELS: &[(&str, &str)] = &[
    ("", "Unknown"),
    ("Log", "Log"),
    ("css", "CSS"),
    ("dockercompose", "Docker Compose"),
    ("html", "HTML"),
    ("ignore", "Ignore"),
    ("ini", "INI"),
    ("javascript", "Javascript"),
    ("javascriptreact", "Javascript with React"),
    ("json", "JSON"),
    ("jsonc", "JSONC"),
    ("markdown", "Markdown"),
    ("plaintext", "Plain Text"),
    ("powershell", "PowerShell"),
    ("prisma", "Prisma"),
    ("properties", "Properties"),
    ("python", "Python"),
    ("shellscript", "Shell Script"),
    ("toml", "TOML"),
    ("typescript", "Typescript"),
    ("typescriptreact", "Typescript with React"),
    ("xml", "XML"),
    ("yaml", "YAML"),
];

pub fn display_label(key: &str) -> Option<&'static str> {
    DISPLAY_LABELS
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, label)| *label)
}
