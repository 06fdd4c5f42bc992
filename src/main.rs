use chrono::{Datelike, Local, Utc};
use clap::Parser;
use ficus::cli::commands::{Cli, Commands};
use ficus::config::{Config, LogFormat};
use ficus::domain::entities::trade::NewTrade;
use ficus::domain::error::DomainError;
use ficus::domain::values::coach::CoachMode;
use ficus::domain::values::coach::ChatRole;
use ficus::domain::values::discipline::{FOCUS_ROUND, FOCUS_TARGET};
use ficus::domain::values::language::Language;
use ficus::domain::values::settings::SettingsUpdate;
use ficus::domain::values::theme::Theme;
use ficus::Ficus;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::from_env();
    init_tracing(config.log_format);

    let app = match Ficus::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing ficus: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(&app, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {}", user_message(&app, &*e));
        std::process::exit(1);
    }
}

/// Localizes the domain errors a user is expected to hit.
fn user_message(app: &Ficus, err: &(dyn std::error::Error + 'static)) -> String {
    let t = app.settings().language.translations();
    match err.downcast_ref::<DomainError>() {
        Some(DomainError::InvalidLicense(_)) => t.invalid_license.to_string(),
        _ => err.to_string(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run_command(app: &Ficus, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Unlock {
            system_id,
            license_key,
        } => {
            let sid = app.unlock(&system_id, &license_key)?;
            let t = app.settings().language.translations();
            println!("{} ({sid})", t.unlocked);
        }
        Commands::Lock => {
            app.lock()?;
            println!("Locked");
        }
        Commands::Status => {
            let settings = app.settings();
            let t = settings.language.translations();
            let affirmation = t
                .affirmations
                .get(Local::now().ordinal0() as usize % t.affirmations.len().max(1))
                .copied()
                .unwrap_or_default();
            let status = match app.session() {
                Ok(sid) => {
                    let streak = app.streak(Utc::now())?;
                    serde_json::json!({
                        "app": format!("{} · {}", t.app_title, t.subtitle),
                        "language": settings.language.native_name(),
                        "unlocked": true,
                        "system_id": sid,
                        "settings": settings,
                        "palette": settings.theme.palette(),
                        "streak": { "label": t.streak_label, "days": streak.days, "progress": streak.progress },
                        "affirmation": affirmation,
                    })
                }
                Err(DomainError::Locked) => serde_json::json!({
                    "app": format!("{} · {}", t.app_title, t.subtitle),
                    "language": settings.language.native_name(),
                    "unlocked": false,
                    "settings": settings,
                    "palette": settings.theme.palette(),
                }),
                Err(e) => return Err(e.into()),
            };
            print_json(&status)?;
        }
        Commands::Request { system_id } => {
            let request = app.license_request(&system_id)?;
            println!("{}", request.message);
            if let Some(url) = request.share_url {
                println!("\n{url}");
            }
        }
        Commands::AdminIssue { pin, message } => {
            let issued = app.admin_issue(&pin, &message)?;
            println!("{}", issued.response);
        }
        Commands::Settings { language, theme } => {
            let update = SettingsUpdate {
                language: language.map(|l| l.parse::<Language>()).transpose()?,
                theme: theme.map(|t| t.parse::<Theme>()).transpose()?,
            };
            let settings = if update.language.is_none() && update.theme.is_none() {
                app.settings()
            } else {
                app.update_settings(update)?
            };
            print_json(&settings)?;
        }
        Commands::Checklist { gate } => {
            let language = app.settings().language;
            let t = language.translations();
            let checklist = app.prepare_checklist(
                gate.routine_done,
                &gate.checked,
                &gate.biases,
                gate.focus_score,
            )?;
            let blocked_by = checklist.evaluate().err().map(|f| f.message(language));
            print_json(&serde_json::json!({
                "routine": checklist.routine,
                "routine_progress": checklist.routine_progress(),
                "biases": t.biases,
                "acknowledged": checklist.biases,
                "focus": { "target": FOCUS_TARGET, "seconds": FOCUS_ROUND.as_secs(), "passed": checklist.focused },
                "ready": checklist.can_journal(),
                "blocked_by": blocked_by,
            }))?;
        }
        Commands::TradeAdd { json, gate } => {
            let input: NewTrade = serde_json::from_str(&json)?;
            let checklist = app.prepare_checklist(
                gate.routine_done,
                &gate.checked,
                &gate.biases,
                gate.focus_score,
            )?;
            if checklist.focused && gate.focus_score.is_some() {
                println!("{}", app.settings().language.translations().mind_aligned);
            }
            let trade = app.trade_add(input, &checklist)?;
            print_json(&trade)?;
        }
        Commands::TradeClose {
            id,
            exit_price,
            emotion,
            image,
        } => {
            let trade = app.trade_close(&id, exit_price, emotion, image)?;
            print_json(&trade)?;
        }
        Commands::Trades { limit, closed } => {
            let trades = app.trade_list(Some(limit), closed)?;
            print_json(&trades)?;
        }
        Commands::TradeDelete { id } => {
            app.trade_delete(&id)?;
            println!("Trade {id} deleted");
        }
        Commands::Stats => {
            let stats = app.stats(Utc::now(), &Local)?;
            let t = app.settings().language.translations();
            let weekly: Vec<_> = stats
                .weekly_performance
                .iter()
                .zip(t.weekdays)
                .map(|(d, label)| {
                    serde_json::json!({ "day": label, "count": d.count, "win_rate": d.win_rate })
                })
                .collect();
            print_json(&serde_json::json!({
                "win_rate": stats.win_rate,
                "expectancy": stats.expectancy,
                "avg_win": stats.avg_win,
                "avg_loss": stats.avg_loss,
                "day_return": stats.day_return,
                "week_return": stats.week_return,
                "open_trades": stats.open_trades,
                "closed_trades": stats.closed_trades,
                "weekly_performance": weekly,
            }))?;
        }
        Commands::DiaryAdd { text } => {
            let entry = app.diary_add(text)?;
            print_json(&entry)?;
        }
        Commands::Diary { limit } => {
            let entries = app.diary_list(Some(limit))?;
            print_json(&entries)?;
        }
        Commands::MentorAdd { name, lesson } => {
            let mentor = app.mentor_add(&name, &lesson)?;
            print_json(&mentor)?;
        }
        Commands::Mentors => {
            let mentors = app.mentor_list()?;
            print_json(&mentors)?;
        }
        Commands::MentorDelete { id } => {
            app.mentor_delete(&id)?;
            println!("Mentor {id} deleted");
        }
        Commands::Coach { prompt, thinking } => {
            let mode = if thinking {
                CoachMode::Thinking
            } else {
                CoachMode::Fast
            };
            for message in app.coach_session(&prompt, mode).await? {
                match message.role {
                    ChatRole::User => println!("> {}\n", message.text),
                    ChatRole::Model => println!("{}\n", message.text),
                }
            }
        }
    }
    Ok(())
}
