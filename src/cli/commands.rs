use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ficus", about = "Trading discipline journal with offline license keys")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Answers to the pre-trade checklist.
#[derive(Args, Debug, Default)]
pub struct GateArgs {
    /// Confirm every routine item is done
    #[arg(long)]
    pub routine_done: bool,
    /// Confirm a single routine item by id (repeat for more)
    #[arg(long = "check")]
    pub checked: Vec<String>,
    /// Acknowledged cognitive bias (repeat for more)
    #[arg(long = "bias")]
    pub biases: Vec<String>,
    /// Score from the focus calibration round
    #[arg(long)]
    pub focus_score: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Unlock with a system ID and license key
    Unlock {
        system_id: String,
        license_key: String,
    },
    /// Lock the app again
    Lock,
    /// Show lock state, settings and discipline streak
    Status,
    /// Build a license request message for the admin
    Request {
        system_id: String,
    },
    /// Issue a license key from a pasted request message (admin only)
    AdminIssue {
        /// Admin PIN
        #[arg(long)]
        pin: String,
        /// The message received from the user
        message: String,
    },
    /// Show or change settings
    Settings {
        /// Language (mr, hi, en)
        #[arg(long)]
        language: Option<String>,
        /// Theme (indigo, sky, emerald, rose, violet, amber)
        #[arg(long)]
        theme: Option<String>,
    },
    /// Show the pre-trade routine and whether the given answers pass the gate
    Checklist {
        #[command(flatten)]
        gate: GateArgs,
    },
    /// Journal a new trade
    TradeAdd {
        /// JSON with segment, symbol, qty, entry_price, sl_price, target_price
        json: String,
        #[command(flatten)]
        gate: GateArgs,
    },
    /// Close an open trade
    TradeClose {
        /// Trade ID
        id: String,
        exit_price: f64,
        /// How the trade felt
        #[arg(long, default_value = "")]
        emotion: String,
        /// Screenshot (base64 or path)
        #[arg(long)]
        image: Option<String>,
    },
    /// List trades
    Trades {
        #[arg(long, default_value = "20")]
        limit: usize,
        /// true for closed trades only, false for open ones
        #[arg(long)]
        closed: Option<bool>,
    },
    /// Delete a trade
    TradeDelete {
        id: String,
    },
    /// Win rate, expectancy, returns and weekday performance
    Stats,
    /// Write a diary entry
    DiaryAdd {
        text: String,
    },
    /// Show diary entries
    Diary {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Save a mentor lesson
    MentorAdd {
        name: String,
        lesson: String,
    },
    /// List mentor lessons
    Mentors,
    /// Delete a mentor lesson
    MentorDelete {
        id: String,
    },
    /// Ask the trading coach
    Coach {
        prompt: String,
        /// Use the slower reasoning model
        #[arg(long)]
        thinking: bool,
    },
}
