use crate::domain::values::language::Language;
use crate::domain::values::theme::Theme;
use serde::{Deserialize, Serialize};

/// User preferences. Unknown or missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub language: Language,
    pub theme: Theme,
}

/// A partial change; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
}

impl AppSettings {
    pub fn apply(self, update: SettingsUpdate) -> Self {
        Self {
            language: update.language.unwrap_or(self.language),
            theme: update.theme.unwrap_or(self.theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.language, Language::Mr);
        assert_eq!(s.theme, Theme::Indigo);
    }

    #[test]
    fn test_partial_blob_fills_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"language": "en"}"#).unwrap();
        assert_eq!(s.language, Language::En);
        assert_eq!(s.theme, Theme::Indigo);
    }

    #[test]
    fn test_apply_merges() {
        let s = AppSettings::default().apply(SettingsUpdate {
            language: None,
            theme: Some(Theme::Amber),
        });
        assert_eq!(s.language, Language::Mr);
        assert_eq!(s.theme, Theme::Amber);
    }
}
