//! Process configuration read from `FICUS_*` environment variables.
//!
//! User preferences (language, theme) are not configuration; they live in the
//! database and are managed through the `settings` command.

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: Option<String>,
    pub admin_pin: Option<String>,
    /// Phone number (international format, digits only) license requests are sent to.
    pub support_whatsapp: Option<String>,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: "./ficus.db".into(),
            gemini_api_key: None,
            gemini_base_url: None,
            admin_pin: None,
            support_whatsapp: None,
            log_format: LogFormat::Text,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: non_empty_var("FICUS_DB").unwrap_or(defaults.db_path),
            gemini_api_key: non_empty_var("FICUS_GEMINI_API_KEY"),
            gemini_base_url: non_empty_var("FICUS_GEMINI_BASE_URL"),
            admin_pin: non_empty_var("FICUS_ADMIN_PIN"),
            support_whatsapp: non_empty_var("FICUS_SUPPORT_WHATSAPP"),
            log_format: match non_empty_var("FICUS_LOG_FORMAT") {
                Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
                _ => LogFormat::Text,
            },
        }
    }

    /// In-memory database with everything else unset.
    pub fn in_memory() -> Self {
        Self {
            db_path: ":memory:".into(),
            ..Self::default()
        }
    }
}
