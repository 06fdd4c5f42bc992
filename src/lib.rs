pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::admin::{AdminUseCase, IssuedLicense};
use crate::application::coach::CoachUseCase;
use crate::application::diary::DiaryUseCase;
use crate::application::mentors::MentorUseCase;
use crate::application::session::{LicenseRequest, SessionUseCase};
use crate::application::settings::SettingsUseCase;
use crate::application::stats::StatsUseCase;
use crate::application::trade::TradeUseCase;
use crate::config::Config;
use crate::domain::entities::diary_entry::DiaryEntry;
use crate::domain::entities::mentor::Mentor;
use crate::domain::entities::trade::{NewTrade, TradeEntry};
use crate::domain::error::DomainError;
use crate::domain::ports::coach_provider::CoachProvider;
use crate::domain::ports::diary_repository::DiaryRepository;
use crate::domain::ports::kv_store::KvStore;
use crate::domain::ports::trade_repository::TradeRepository;
use crate::domain::values::coach::{ChatMessage, CoachMode};
use crate::domain::values::discipline::PreTradeChecklist;
use crate::domain::values::license::SystemId;
use crate::domain::values::settings::{AppSettings, SettingsUpdate};
use crate::domain::values::streak::Streak;
use crate::domain::values::trade_stats::TradeStats;
use crate::infrastructure::coach::gemini::GeminiCoach;
use crate::infrastructure::coach::noop::NoopCoach;
use crate::infrastructure::sqlite::diary_repo::SqliteDiaryRepo;
use crate::infrastructure::sqlite::kv_store::SqliteKvStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct Ficus {
    session_uc: SessionUseCase,
    admin_uc: AdminUseCase,
    settings_uc: SettingsUseCase,
    trade_uc: TradeUseCase,
    stats_uc: StatsUseCase,
    diary_uc: DiaryUseCase,
    mentor_uc: MentorUseCase,
    coach_uc: CoachUseCase,
    support_whatsapp: Option<String>,
}

fn open_connection(db_path: &str) -> Result<Connection, DomainError> {
    let conn = Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    // Each `:memory:` connection is its own database, so every connection
    // gets the schema.
    run_migrations(&conn)?;
    Ok(conn)
}

impl Ficus {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let coach: Arc<dyn CoachProvider> = match &config.gemini_api_key {
            Some(key) => Arc::new(GeminiCoach::new(key.clone(), config.gemini_base_url.clone())),
            None => Arc::new(NoopCoach),
        };
        Self::with_providers(config, coach)
    }

    pub fn with_providers(config: &Config, coach: Arc<dyn CoachProvider>) -> Result<Self, DomainError> {
        let trade_repo: Arc<dyn TradeRepository> =
            Arc::new(SqliteTradeRepo::new(open_connection(&config.db_path)?));
        let diary_repo: Arc<dyn DiaryRepository> =
            Arc::new(SqliteDiaryRepo::new(open_connection(&config.db_path)?));
        let kv: Arc<dyn KvStore> = Arc::new(SqliteKvStore::new(open_connection(&config.db_path)?));

        tracing::debug!(db = %config.db_path, coach = coach.name(), "ficus initialized");

        Ok(Self {
            session_uc: SessionUseCase::new(kv.clone()),
            admin_uc: AdminUseCase::new(config.admin_pin.clone()),
            settings_uc: SettingsUseCase::new(kv.clone()),
            trade_uc: TradeUseCase::new(trade_repo.clone()),
            stats_uc: StatsUseCase::new(trade_repo),
            diary_uc: DiaryUseCase::new(diary_repo),
            mentor_uc: MentorUseCase::new(kv),
            coach_uc: CoachUseCase::new(coach),
            support_whatsapp: config.support_whatsapp.clone(),
        })
    }

    // Settings
    pub fn settings(&self) -> AppSettings {
        self.settings_uc.load()
    }

    pub fn update_settings(&self, update: SettingsUpdate) -> Result<AppSettings, DomainError> {
        self.settings_uc.update(update)
    }

    // Licensing
    pub fn unlock(&self, system_id: &str, license_key: &str) -> Result<SystemId, DomainError> {
        self.session_uc
            .unlock(system_id, license_key, self.settings().language)
    }

    pub fn lock(&self) -> Result<(), DomainError> {
        self.session_uc.lock()
    }

    pub fn session(&self) -> Result<SystemId, DomainError> {
        self.session_uc.current()
    }

    pub fn license_request(&self, system_id: &str) -> Result<LicenseRequest, DomainError> {
        self.session_uc.request(
            system_id,
            self.settings().language,
            self.support_whatsapp.as_deref(),
        )
    }

    pub fn admin_issue(&self, pin: &str, message: &str) -> Result<IssuedLicense, DomainError> {
        self.admin_uc.issue(pin, message, self.settings().language)
    }

    pub fn streak(&self, now: DateTime<Utc>) -> Result<Streak, DomainError> {
        let sid = self.session()?;
        self.session_uc.streak(&sid, now)
    }

    // Journal
    pub fn checklist(&self) -> PreTradeChecklist {
        PreTradeChecklist::for_language(self.settings().language)
    }

    /// A checklist filled in from command-line answers. Routine items are
    /// confirmed either all at once or one id at a time.
    pub fn prepare_checklist(
        &self,
        routine_done: bool,
        checked: &[String],
        biases: &[String],
        focus_score: Option<u32>,
    ) -> Result<PreTradeChecklist, DomainError> {
        let mut checklist = self.checklist();
        if routine_done {
            checklist.check_all();
        } else {
            let ids: BTreeSet<&str> = checked.iter().map(|id| id.trim()).collect();
            for id in ids {
                if !checklist.toggle(id) {
                    return Err(DomainError::InvalidInput(format!("Unknown routine item: {id}")));
                }
            }
        }
        for bias in biases {
            checklist.acknowledge_bias(bias);
        }
        if let Some(score) = focus_score {
            checklist.record_focus(score);
        }
        Ok(checklist)
    }

    pub fn trade_add(&self, input: NewTrade, checklist: &PreTradeChecklist) -> Result<TradeEntry, DomainError> {
        self.session()?;
        self.trade_uc.add(input, checklist, self.settings().language)
    }

    pub fn trade_close(
        &self,
        id: &str,
        exit_price: f64,
        emotion: String,
        image: Option<String>,
    ) -> Result<TradeEntry, DomainError> {
        self.session()?;
        self.trade_uc.close(id, exit_price, emotion, image)
    }

    pub fn trade_list(&self, limit: Option<usize>, closed: Option<bool>) -> Result<Vec<TradeEntry>, DomainError> {
        self.session()?;
        self.trade_uc.list(limit, closed)
    }

    pub fn trade_delete(&self, id: &str) -> Result<(), DomainError> {
        self.session()?;
        self.trade_uc.delete(id)
    }

    pub fn stats<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Result<TradeStats, DomainError> {
        self.session()?;
        self.stats_uc.stats(now, tz)
    }

    pub fn diary_add(&self, text: String) -> Result<DiaryEntry, DomainError> {
        self.session()?;
        self.diary_uc.add(text)
    }

    pub fn diary_list(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>, DomainError> {
        self.session()?;
        self.diary_uc.list(limit)
    }

    pub fn mentor_add(&self, name: &str, lesson: &str) -> Result<Mentor, DomainError> {
        let sid = self.session()?;
        self.mentor_uc.add(&sid, name, lesson)
    }

    pub fn mentor_list(&self) -> Result<Vec<Mentor>, DomainError> {
        let sid = self.session()?;
        self.mentor_uc.list(&sid)
    }

    pub fn mentor_delete(&self, id: &str) -> Result<(), DomainError> {
        let sid = self.session()?;
        self.mentor_uc.delete(&sid, id)
    }

    // Coach
    pub async fn ask_coach(&self, prompt: &str, mode: CoachMode) -> Result<String, DomainError> {
        self.session()?;
        Ok(self.coach_uc.ask(prompt, self.settings().language, mode).await)
    }

    pub async fn coach_session(&self, prompt: &str, mode: CoachMode) -> Result<Vec<ChatMessage>, DomainError> {
        self.session()?;
        Ok(self
            .coach_uc
            .converse(prompt, self.settings().language, mode)
            .await)
    }
}
