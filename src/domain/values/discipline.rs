//! Pre-trade readiness check.
//!
//! A trade can be journaled only after the routine is complete, at least
//! [`MIN_BIASES`] cognitive biases are acknowledged and the focus
//! calibration round was passed.

use crate::domain::values::language::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_BIASES: usize = 2;

/// Pops needed within [`FOCUS_ROUND`] to pass the focus calibration.
pub const FOCUS_TARGET: u32 = 10;
pub const FOCUS_ROUND: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOutcome {
    Success,
    Fail,
}

impl FocusOutcome {
    pub fn from_score(score: u32) -> Self {
        if score >= FOCUS_TARGET {
            FocusOutcome::Success
        } else {
            FocusOutcome::Fail
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreTradeChecklist {
    pub routine: Vec<ChecklistItem>,
    pub biases: Vec<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateFailure {
    RoutineIncomplete,
    TooFewBiases,
    NotFocused,
}

impl GateFailure {
    pub fn message(&self, language: Language) -> &'static str {
        let t = language.translations();
        match self {
            GateFailure::RoutineIncomplete => t.routine_incomplete,
            GateFailure::TooFewBiases => t.biases_needed,
            GateFailure::NotFocused => t.focus_needed,
        }
    }
}

impl PreTradeChecklist {
    /// Fresh, unchecked routine in the given language.
    pub fn for_language(language: Language) -> Self {
        let routine = language
            .translations()
            .routine_items
            .iter()
            .enumerate()
            .map(|(i, text)| ChecklistItem {
                id: i.to_string(),
                text: (*text).to_string(),
                checked: false,
            })
            .collect();
        Self {
            routine,
            biases: Vec::new(),
            focused: false,
        }
    }

    pub fn check_all(&mut self) {
        for item in &mut self.routine {
            item.checked = true;
        }
    }

    /// Toggles a routine item by id. Returns `false` when the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.routine.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    pub fn acknowledge_bias(&mut self, bias: &str) {
        let bias = bias.trim();
        if !bias.is_empty() && !self.biases.iter().any(|b| b.eq_ignore_ascii_case(bias)) {
            self.biases.push(bias.to_string());
        }
    }

    pub fn record_focus(&mut self, score: u32) -> FocusOutcome {
        let outcome = FocusOutcome::from_score(score);
        self.focused = self.focused || outcome == FocusOutcome::Success;
        outcome
    }

    pub fn routine_progress(&self) -> f64 {
        if self.routine.is_empty() {
            return 0.0;
        }
        let done = self.routine.iter().filter(|i| i.checked).count();
        done as f64 / self.routine.len() as f64 * 100.0
    }

    /// First unmet requirement, if any.
    pub fn evaluate(&self) -> Result<(), GateFailure> {
        if self.routine.is_empty() || self.routine.iter().any(|i| !i.checked) {
            return Err(GateFailure::RoutineIncomplete);
        }
        if self.biases.len() < MIN_BIASES {
            return Err(GateFailure::TooFewBiases);
        }
        if !self.focused {
            return Err(GateFailure::NotFocused);
        }
        Ok(())
    }

    pub fn can_journal(&self) -> bool {
        self.evaluate().is_ok()
    }
}
