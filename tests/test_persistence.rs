mod common;

use common::{config, ready_checklist, new_trade};
use ficus::config::Config;
use ficus::domain::values::language::Language;
use ficus::domain::values::license::{derive_key, DEFAULT_SALT};
use ficus::domain::values::settings::SettingsUpdate;
use ficus::domain::values::theme::Theme;
use ficus::infrastructure::coach::noop::NoopCoach;
use ficus::Ficus;
use rusqlite::{params, Connection};
use std::sync::Arc;
use tempfile::TempDir;

fn on_disk(dir: &TempDir) -> Config {
    Config {
        db_path: dir.path().join("ficus.db").to_string_lossy().into_owned(),
        ..config()
    }
}

fn open(config: &Config) -> Ficus {
    Ficus::with_providers(config, Arc::new(NoopCoach)).unwrap()
}

fn write_raw(config: &Config, key: &str, value: &str) {
    let conn = Connection::open(&config.db_path).unwrap();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value, "2024-01-01T00:00:00Z"],
    )
    .unwrap();
}

#[test]
fn test_settings_default() {
    let dir = TempDir::new().unwrap();
    let app = open(&on_disk(&dir));
    let settings = app.settings();
    assert_eq!(settings.language, Language::Mr);
    assert_eq!(settings.theme, Theme::Indigo);
}

#[test]
fn test_state_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = on_disk(&dir);
    let trade_id = {
        let app = open(&config);
        app.update_settings(SettingsUpdate {
            language: Some(Language::Hi),
            theme: Some(Theme::Emerald),
        })
        .unwrap();
        app.unlock("TRADER-01", &derive_key("TRADER-01", DEFAULT_SALT))
            .unwrap();
        app.diary_add("Patience paid off".into()).unwrap();
        app.mentor_add("Paul Tudor Jones", "Defense first").unwrap();
        let checklist = ready_checklist(&app);
        app.trade_add(new_trade("NIFTY", 50, 100.0), &checklist)
            .unwrap()
            .id
    };

    let app = open(&config);
    let settings = app.settings();
    assert_eq!(settings.language, Language::Hi);
    assert_eq!(settings.theme, Theme::Emerald);
    assert_eq!(app.session().unwrap().as_str(), "TRADER-01");
    assert_eq!(app.diary_list(None).unwrap()[0].text, "Patience paid off");
    assert_eq!(app.mentor_list().unwrap()[0].name, "Paul Tudor Jones");
    assert_eq!(app.trade_list(None, None).unwrap()[0].id, trade_id);
}

#[test]
fn test_partial_settings_update_keeps_other_field() {
    let dir = TempDir::new().unwrap();
    let app = open(&on_disk(&dir));
    app.update_settings(SettingsUpdate {
        language: Some(Language::En),
        theme: None,
    })
    .unwrap();
    let settings = app
        .update_settings(SettingsUpdate {
            language: None,
            theme: Some(Theme::Rose),
        })
        .unwrap();
    assert_eq!(settings.language, Language::En);
    assert_eq!(settings.theme, Theme::Rose);
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = on_disk(&dir);
    let app = open(&config);
    write_raw(&config, "sentinel_settings", "{not json");
    let settings = app.settings();
    assert_eq!(settings.language, Language::Mr);
    assert_eq!(settings.theme, Theme::Indigo);
}

#[test]
fn test_malformed_mentors_read_as_empty() {
    let dir = TempDir::new().unwrap();
    let config = on_disk(&dir);
    let app = open(&config);
    app.unlock("TRADER-01", &derive_key("TRADER-01", DEFAULT_SALT))
        .unwrap();
    write_raw(&config, "ficus_mentors_TRADER-01", "[{\"broken\"");
    assert!(app.mentor_list().unwrap().is_empty());

    // the next add overwrites the broken value
    app.mentor_add("Jesse Livermore", "Sit tight").unwrap();
    assert_eq!(app.mentor_list().unwrap().len(), 1);
}

#[test]
fn test_tampered_session_locks() {
    let dir = TempDir::new().unwrap();
    let config = on_disk(&dir);
    let app = open(&config);
    app.unlock("TRADER-01", &derive_key("TRADER-01", DEFAULT_SALT))
        .unwrap();
    write_raw(
        &config,
        "ficus_session",
        r#"{"system_id":"TRADER-02","license_key":"KEY-0000-0000","unlocked_at":"2024-01-01T00:00:00Z"}"#,
    );
    assert!(app.session().is_err());
}
