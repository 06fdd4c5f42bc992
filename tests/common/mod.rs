//! Shared test helpers.
#![allow(dead_code)]

use ficus::config::Config;
use ficus::domain::entities::trade::NewTrade;
use ficus::domain::error::DomainError;
use ficus::domain::ports::coach_provider::CoachProvider;
use ficus::domain::values::coach::CoachRequest;
use ficus::domain::values::discipline::PreTradeChecklist;
use ficus::domain::values::license::{derive_key, DEFAULT_SALT};
use ficus::infrastructure::coach::noop::NoopCoach;
use ficus::Ficus;
use std::sync::{Arc, Mutex};

pub const ADMIN_PIN: &str = "2468";

pub fn config() -> Config {
    Config {
        admin_pin: Some(ADMIN_PIN.into()),
        support_whatsapp: Some("919800000000".into()),
        ..Config::in_memory()
    }
}

pub fn setup() -> Ficus {
    Ficus::with_providers(&config(), Arc::new(NoopCoach)).unwrap()
}

/// Unlocked app for `system_id`.
pub fn setup_unlocked(system_id: &str) -> Ficus {
    let app = setup();
    app.unlock(system_id, &derive_key(system_id, DEFAULT_SALT))
        .unwrap();
    app
}

pub fn ready_checklist(app: &Ficus) -> PreTradeChecklist {
    let mut checklist = app.checklist();
    checklist.check_all();
    checklist.acknowledge_bias("FOMO");
    checklist.acknowledge_bias("Greed");
    checklist.record_focus(10);
    checklist
}

pub fn new_trade(symbol: &str, qty: i64, entry_price: f64) -> NewTrade {
    NewTrade {
        segment: "NIFTY".into(),
        symbol: symbol.into(),
        qty,
        entry_price,
        sl_price: entry_price * 0.95,
        target_price: entry_price * 1.1,
    }
}

/// Replies with fixed text and records the prompts it received.
pub struct CannedCoach {
    pub reply: String,
    pub seen: Mutex<Vec<CoachRequest>>,
}

impl CannedCoach {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl CoachProvider for CannedCoach {
    async fn generate(&self, request: &CoachRequest) -> Result<String, DomainError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

pub struct FailingCoach;

#[async_trait::async_trait]
impl CoachProvider for FailingCoach {
    async fn generate(&self, _request: &CoachRequest) -> Result<String, DomainError> {
        Err(DomainError::Coach("connection refused".into()))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
