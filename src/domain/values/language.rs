use crate::domain::values::translations::{Translations, EN, HI, MR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Mr,
    Hi,
    En,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Mr, Language::Hi, Language::En];

    pub fn translations(&self) -> &'static Translations {
        match self {
            Language::Mr => &MR,
            Language::Hi => &HI,
            Language::En => &EN,
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Mr => "मराठी",
            Language::Hi => "हिन्दी",
            Language::En => "English",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Mr => write!(f, "mr"),
            Language::Hi => write!(f, "hi"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mr" | "marathi" => Ok(Language::Mr),
            "hi" | "hindi" => Ok(Language::Hi),
            "en" | "english" => Ok(Language::En),
            _ => Err(format!("Unknown language: {s} (expected mr, hi or en)")),
        }
    }
}
