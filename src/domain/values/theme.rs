use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Indigo,
    Sky,
    Emerald,
    Rose,
    Violet,
    Amber,
}

/// Accent colors applied for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub primary: &'static str,
    pub hover: &'static str,
    pub secondary: &'static str,
    pub glow: &'static str,
    pub shadow: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Indigo,
        Theme::Sky,
        Theme::Emerald,
        Theme::Rose,
        Theme::Violet,
        Theme::Amber,
    ];

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Indigo => Palette {
                primary: "#4f46e5",
                hover: "#4338ca",
                secondary: "#f5f7ff",
                glow: "rgba(79, 70, 229, 0.2)",
                shadow: "rgba(79, 70, 229, 0.1)",
            },
            Theme::Sky => Palette {
                primary: "#0284c7",
                hover: "#0369a1",
                secondary: "#f0f9ff",
                glow: "rgba(2, 132, 199, 0.2)",
                shadow: "rgba(2, 132, 199, 0.1)",
            },
            Theme::Emerald => Palette {
                primary: "#059669",
                hover: "#047857",
                secondary: "#f0fdf4",
                glow: "rgba(5, 150, 105, 0.2)",
                shadow: "rgba(5, 150, 105, 0.1)",
            },
            Theme::Rose => Palette {
                primary: "#e11d48",
                hover: "#be123c",
                secondary: "#fff1f2",
                glow: "rgba(225, 29, 72, 0.2)",
                shadow: "rgba(225, 29, 72, 0.1)",
            },
            Theme::Violet => Palette {
                primary: "#7c3aed",
                hover: "#6d28d9",
                secondary: "#f5f3ff",
                glow: "rgba(124, 58, 237, 0.2)",
                shadow: "rgba(124, 58, 237, 0.1)",
            },
            Theme::Amber => Palette {
                primary: "#d97706",
                hover: "#b45309",
                secondary: "#fffbeb",
                glow: "rgba(217, 119, 6, 0.2)",
                shadow: "rgba(217, 119, 6, 0.1)",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Indigo => "indigo",
            Theme::Sky => "sky",
            Theme::Emerald => "emerald",
            Theme::Rose => "rose",
            Theme::Violet => "violet",
            Theme::Amber => "amber",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown theme: {s}"))
    }
}
