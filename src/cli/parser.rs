use crate::core::export::ExportFormat;
use crate::db::StorageKind;
use crate::errors::AppError;
use crate::models::EventType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for staffclock
#[derive(Parser)]
#[command(
    name = "staffclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Staff time-clock: register in/out events, manage the roster and review attendance",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or a shared station)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Override the storage backend
    #[arg(global = true, long = "storage", value_enum)]
    pub storage: Option<StorageKind>,

    /// Admin passphrase for roster and log administration
    #[arg(
        global = true,
        long = "admin-pass",
        env = "STAFFCLOCK_ADMIN_PASS",
        hide_env_values = true
    )]
    pub admin_pass: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_event_type(s: &str) -> Result<EventType, String> {
    EventType::et_from_str(s).ok_or_else(|| {
        AppError::InvalidEventType(format!("expected 'in' or 'out', got '{s}'")).to_string()
    })
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Roster management
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },

    /// Register an IN or OUT event for a staff member
    Clock {
        /// in | out
        #[arg(value_parser = parse_event_type)]
        kind: EventType,

        /// Staff id (see `staff list`)
        staff_id: String,

        /// Image file to attach as photo evidence
        #[arg(long = "photo", value_name = "FILE")]
        photo: Option<String>,

        /// Latitude of the clock event
        #[arg(long = "lat", requires = "lng", allow_negative_numbers = true)]
        lat: Option<f64>,

        /// Longitude of the clock event
        #[arg(long = "lng", requires = "lat", allow_negative_numbers = true)]
        lng: Option<f64>,
    },

    /// Show attendance history (newest first) or clear it
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,

        #[arg(long = "staff", help = "Only events of this staff id")]
        staff: Option<String>,

        #[arg(long = "limit", short = 'n', help = "Show at most N events")]
        limit: Option<usize>,
    },

    /// Dashboard: presence counts and the daily histogram
    Summary,

    /// Narrative analysis of recent attendance
    Analyze,

    /// Verify cached presence against the log history
    Check {
        #[arg(long = "repair", help = "Rewrite mismatching presence (admin)")]
        repair: bool,
    },

    /// Export attendance history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Back up both storage slots
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StaffAction {
    /// List the roster (active members only unless --all)
    List {
        #[arg(long = "all", help = "Include inactive members")]
        all: bool,

        #[arg(long = "search", short = 's', help = "Filter by name or position")]
        search: Option<String>,
    },

    /// Register a new staff member (admin)
    Add { name: String, position: String },

    /// Mark a member active (admin)
    Activate { id: String },

    /// Mark a member inactive (admin)
    Deactivate { id: String },

    /// Flip a member between active and inactive (admin)
    Toggle { id: String },

    /// Delete a member; their history is kept (admin)
    Remove {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Delete every log entry (admin, irreversible)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },
}
