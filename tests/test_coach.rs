mod common;

use common::{config, setup, CannedCoach, FailingCoach};
use ficus::domain::error::DomainError;
use ficus::domain::values::coach::{ChatRole, CoachMode, COACH_SYSTEM_INSTRUCTION};
use ficus::domain::values::language::Language;
use ficus::domain::values::license::{derive_key, DEFAULT_SALT};
use ficus::domain::values::settings::SettingsUpdate;
use ficus::Ficus;
use std::sync::Arc;

fn unlocked_with(app: Ficus) -> Ficus {
    app.unlock("TRADER-01", &derive_key("TRADER-01", DEFAULT_SALT))
        .unwrap();
    app
}

#[tokio::test]
async fn test_coach_reply_passes_through() {
    let coach = Arc::new(CannedCoach::new("Stick to your stop-loss."));
    let app = unlocked_with(Ficus::with_providers(&config(), coach.clone()).unwrap());

    let reply = app
        .ask_coach("  I lost three trades today ", CoachMode::Thinking)
        .await
        .unwrap();
    assert_eq!(reply, "Stick to your stop-loss.");

    let seen = coach.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].prompt, "I lost three trades today");
    assert_eq!(seen[0].mode, CoachMode::Thinking);
    assert_eq!(seen[0].system_instruction, COACH_SYSTEM_INSTRUCTION);
}

#[tokio::test]
async fn test_coach_failure_falls_back() {
    let app = unlocked_with(Ficus::with_providers(&config(), Arc::new(FailingCoach)).unwrap());
    app.update_settings(SettingsUpdate {
        language: Some(Language::En),
        theme: None,
    })
    .unwrap();
    let reply = app.ask_coach("help", CoachMode::Fast).await.unwrap();
    assert_eq!(reply, Language::En.translations().coach_fallback);
}

#[tokio::test]
async fn test_coach_empty_reply_falls_back() {
    let app = unlocked_with(Ficus::with_providers(&config(), Arc::new(CannedCoach::new("  "))).unwrap());
    let reply = app.ask_coach("help", CoachMode::Fast).await.unwrap();
    assert_eq!(reply, Language::Mr.translations().coach_fallback);
}

#[tokio::test]
async fn test_coach_blank_prompt_skips_provider() {
    let coach = Arc::new(CannedCoach::new("unused"));
    let app = unlocked_with(Ficus::with_providers(&config(), coach.clone()).unwrap());
    let reply = app.ask_coach("   ", CoachMode::Fast).await.unwrap();
    assert_eq!(reply, Language::Mr.translations().coach_fallback);
    assert!(coach.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_coach_requires_unlock() {
    let app = setup();
    assert!(matches!(
        app.ask_coach("help", CoachMode::Fast).await,
        Err(DomainError::Locked)
    ));
}

#[tokio::test]
async fn test_coach_session_opens_with_greeting() {
    let app = unlocked_with(
        Ficus::with_providers(&config(), Arc::new(CannedCoach::new("Breathe, then review the plan."))).unwrap(),
    );
    app.update_settings(SettingsUpdate {
        language: Some(Language::En),
        theme: None,
    })
    .unwrap();

    let session = app.coach_session(" I feel like revenge trading ", CoachMode::Fast).await.unwrap();
    assert_eq!(session.len(), 3);
    assert_eq!(session[0].role, ChatRole::Model);
    assert_eq!(session[0].text, Language::En.translations().coach_intro);
    assert_eq!(session[1].role, ChatRole::User);
    assert_eq!(session[1].text, "I feel like revenge trading");
    assert_eq!(session[2].role, ChatRole::Model);
    assert_eq!(session[2].text, "Breathe, then review the plan.");
}

#[tokio::test]
async fn test_coach_session_falls_back_on_failure() {
    let app = unlocked_with(Ficus::with_providers(&config(), Arc::new(FailingCoach)).unwrap());
    let session = app.coach_session("help", CoachMode::Thinking).await.unwrap();
    assert_eq!(session[0].text, Language::Mr.translations().coach_intro);
    assert_eq!(session[2].text, Language::Mr.translations().coach_fallback);
}
