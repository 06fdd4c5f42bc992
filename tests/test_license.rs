mod common;

use chrono::{Duration, Utc};
use common::{setup, setup_unlocked, ADMIN_PIN};
use ficus::domain::error::DomainError;
use ficus::domain::values::language::Language;
use ficus::domain::values::license::{derive_key, validate, DEFAULT_SALT, REQUEST_TOKEN_LEN};
use ficus::domain::values::settings::SettingsUpdate;

#[test]
fn test_starts_locked() {
    let app = setup();
    assert!(matches!(app.session(), Err(DomainError::Locked)));
    assert!(matches!(app.trade_list(None, None), Err(DomainError::Locked)));
    assert!(matches!(app.diary_list(None), Err(DomainError::Locked)));
    assert!(matches!(app.mentor_list(), Err(DomainError::Locked)));
}

#[test]
fn test_unlock_with_derived_key() {
    let app = setup();
    let key = derive_key("pc-01", DEFAULT_SALT);
    let sid = app.unlock("  pc-01 ", &key.to_lowercase()).unwrap();
    assert_eq!(sid.as_str(), "PC-01");
    assert_eq!(app.session().unwrap().as_str(), "PC-01");
}

#[test]
fn test_unlock_rejects_wrong_key() {
    let app = setup();
    let key = derive_key("PC-01", DEFAULT_SALT);
    let err = app.unlock("PC-02", &key).unwrap_err();
    assert!(matches!(err, DomainError::InvalidLicense(ref sid) if sid == "PC-02"));
    assert!(matches!(app.session(), Err(DomainError::Locked)));

    let err = app.unlock("PC-01", &format!("{key}X")).unwrap_err();
    assert!(matches!(err, DomainError::InvalidLicense(_)));
}

#[test]
fn test_unlock_requires_both_fields_localized() {
    let app = setup();
    app.update_settings(SettingsUpdate {
        language: Some(Language::En),
        theme: None,
    })
    .unwrap();
    match app.unlock("  ", "KEY-0000-0000") {
        Err(DomainError::InvalidInput(msg)) => {
            assert_eq!(msg, "Please fill both ID and License Key.")
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(app.unlock("PC-01", " "), Err(DomainError::InvalidInput(_))));
}

#[test]
fn test_lock_clears_session() {
    let app = setup_unlocked("TRADER-01");
    assert!(app.session().is_ok());
    app.lock().unwrap();
    assert!(matches!(app.session(), Err(DomainError::Locked)));
    // locking twice is harmless
    app.lock().unwrap();
}

#[test]
fn test_pinned_key() {
    assert_eq!(derive_key("ABC123", DEFAULT_SALT), "KEY-5A40-EE15");
    assert!(validate("abc123", "key-5a40-ee15"));
}

#[test]
fn test_license_request_message() {
    let app = setup();
    let request = app.license_request(" pc-01 ").unwrap();
    assert_eq!(request.system_id.as_str(), "PC-01");
    assert_eq!(request.token.len(), REQUEST_TOKEN_LEN);
    assert!(request.token.starts_with("REQ-"));
    assert!(request.message.contains("PC-01"));
    assert!(request.message.contains(&request.token));
    let url = request.share_url.unwrap();
    assert!(url.starts_with("https://wa.me/919800000000?text="));
}

#[test]
fn test_license_request_rejects_short_id() {
    let app = setup();
    assert!(matches!(app.license_request("x"), Err(DomainError::InvalidInput(_))));
    assert!(matches!(app.license_request(""), Err(DomainError::InvalidInput(_))));
}

#[test]
fn test_request_to_issue_to_unlock() {
    let user = setup();
    let request = user.license_request("desk-7").unwrap();

    let admin = setup();
    let issued = admin.admin_issue(ADMIN_PIN, &request.message).unwrap();
    assert_eq!(issued.system_id.as_str(), "DESK-7");
    assert!(issued.response.contains(&issued.license_key));

    user.unlock("desk-7", &issued.license_key).unwrap();
    assert_eq!(user.session().unwrap().as_str(), "DESK-7");
}

#[test]
fn test_admin_wrong_pin() {
    let app = setup();
    assert!(matches!(
        app.admin_issue("0000", "ID: PC-01"),
        Err(DomainError::Unauthorized(_))
    ));
}

#[test]
fn test_admin_rejects_invalid_id() {
    let app = setup();
    assert!(matches!(
        app.admin_issue(ADMIN_PIN, "ID: pc@01"),
        Err(DomainError::InvalidInput(_))
    ));
}

#[test]
fn test_streak_starts_at_one() {
    let app = setup_unlocked("TRADER-01");
    let now = Utc::now();
    let streak = app.streak(now).unwrap();
    assert_eq!(streak.days, 1);
    let later = app.streak(now + Duration::days(10)).unwrap();
    assert_eq!(later.days, 11);
    assert_eq!(later.started_at, streak.started_at);
}
