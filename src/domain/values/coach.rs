use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const COACH_SYSTEM_INSTRUCTION: &str = "You are the \"Ficus Trading Psychologist\". Your role is to guide traders through their emotional ups and downs.
Focus on:
1. Trading Discipline (Risk management, sticking to plans).
2. Emotion Control (Dealing with FOMO, Revenge Trading, Greed).
3. Rule Enforcement: Remind them of rules used by legendary traders like Mark Minervini, Paul Tudor Jones, and Jesse Livermore.
Respond in the language the user is using (Marathi, Hindi, or English).
Keep your responses empathetic, firm about rules, and highly professional.
If they mention a loss, analyze their psychology and suggest ways to regain discipline.";

pub const COACH_TEMPERATURE: f64 = 0.8;
pub const THINKING_BUDGET: u32 = 15_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachMode {
    #[default]
    Fast,
    Thinking,
}

impl fmt::Display for CoachMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachMode::Fast => write!(f, "fast"),
            CoachMode::Thinking => write!(f, "thinking"),
        }
    }
}

impl FromStr for CoachMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" => Ok(CoachMode::Fast),
            "thinking" => Ok(CoachMode::Thinking),
            _ => Err(format!("Unknown coach mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// What the coach port receives.
#[derive(Debug, Clone)]
pub struct CoachRequest {
    pub prompt: String,
    pub system_instruction: &'static str,
    pub mode: CoachMode,
}
