use crate::export::ExportFormat;
use crate::models::justification::{JustificationKind, JustificationStatus};
use crate::models::punch::PunchKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPonto
/// Time clock and hour-bank CLI backed by SQLite
#[derive(Parser)]
#[command(
    name = "rponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Time clock CLI: punches, lunch rules, weekly overtime and monthly hour bank using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Manage the database (migrations, integrity check, recalculation)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(
            long = "recalc",
            help = "Recompute stored hours of every punch record from its punches"
        )]
        recalc: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage employees
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Register a punch (entry, lunch-out, lunch-in, exit)
    Punch {
        /// Employee id or email
        employee: String,

        /// Punch kind; defaults to the next punch of the day
        #[arg(long, value_enum)]
        kind: Option<PunchKind>,

        /// Day of the punch (YYYY-MM-DD), default today
        #[arg(long)]
        date: Option<String>,

        /// Time of the punch (HH:MM), default now
        #[arg(long)]
        at: Option<String>,
    },

    /// Show a day's punches, next punch and live hours
    Status {
        /// Employee id or email
        employee: String,

        #[arg(long)]
        date: Option<String>,

        /// Reference time for in-progress hours (HH:MM), default now
        #[arg(long)]
        at: Option<String>,
    },

    /// Manager correction of a day's punches
    Correct {
        /// Employee id or email
        employee: String,

        /// Day to correct (YYYY-MM-DD)
        date: String,

        /// New entry time (HH:MM)
        #[arg(long)]
        entry: Option<String>,

        /// New lunch-out time (HH:MM, or "none" to clear)
        #[arg(long = "lunch-out")]
        lunch_out: Option<String>,

        /// New lunch-in time (HH:MM, or "none" to clear)
        #[arg(long = "lunch-in")]
        lunch_in: Option<String>,

        /// New exit time (HH:MM, or "none" to clear)
        #[arg(long)]
        exit: Option<String>,

        /// Manager performing the correction (id or email)
        #[arg(long)]
        by: String,

        #[arg(long, default_value = "")]
        reason: String,

        #[arg(long)]
        note: Option<String>,
    },

    /// Manage absence justifications
    Justify {
        #[command(subcommand)]
        action: JustifyAction,
    },

    /// Manage holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Weekly report (Monday to Sunday)
    Week {
        /// Employee id or email
        employee: String,

        /// Any day inside the week, default today
        #[arg(long)]
        date: Option<String>,
    },

    /// Monthly report with hour bank
    Month {
        /// Employee id or email
        employee: String,

        /// Month (YYYY-MM), default current month
        #[arg(long)]
        month: Option<String>,

        /// Reference day for the expected-hours cut-off, default today
        #[arg(long)]
        today: Option<String>,
    },

    /// Manager overview of every active employee
    Dashboard {
        #[arg(long)]
        date: Option<String>,
    },

    /// Export a monthly report
    Export {
        /// Employee id or email
        employee: String,

        /// Month (YYYY-MM), default current month
        #[arg(long)]
        month: Option<String>,

        /// Reference day for the expected-hours cut-off, default today
        #[arg(long)]
        today: Option<String>,

        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Output file path (absolute, or starting with ~/)
        #[arg(long)]
        file: String,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Add an employee; unset targets take the configured defaults
    Add {
        name: String,
        email: String,

        #[arg(long, default_value = "")]
        role: String,

        /// Weekly hour ceiling before overtime
        #[arg(long)]
        ceiling: Option<f64>,

        /// Expected hours on a normal day
        #[arg(long = "normal-hours")]
        normal_hours: Option<f64>,

        /// Expected hours on Sundays and holidays
        #[arg(long = "special-hours")]
        special_hours: Option<f64>,

        /// Days off per week
        #[arg(long = "days-off")]
        days_off: Option<u32>,

        #[arg(long)]
        manager: bool,
    },

    /// List employees
    List {
        /// Include inactive employees
        #[arg(long)]
        all: bool,
    },

    /// Edit an employee
    Edit {
        /// Employee id or email
        employee: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        ceiling: Option<f64>,

        #[arg(long = "normal-hours")]
        normal_hours: Option<f64>,

        #[arg(long = "special-hours")]
        special_hours: Option<f64>,

        #[arg(long = "days-off")]
        days_off: Option<u32>,

        #[arg(long)]
        manager: Option<bool>,

        #[arg(long)]
        active: Option<bool>,
    },
}

#[derive(Subcommand)]
pub enum JustifyAction {
    /// File a justification for an inclusive date range
    Add {
        /// Employee id or email
        employee: String,
        start: String,
        end: String,

        #[arg(long, value_enum)]
        kind: JustificationKind,

        #[arg(long = "desc", default_value = "")]
        description: String,

        /// Path of the supporting document
        #[arg(long = "file")]
        attachment: Option<String>,

        /// Creator (id or email); a manager approves on creation
        #[arg(long)]
        by: Option<String>,
    },

    /// Approve a pending justification
    Approve {
        id: i64,

        /// Manager id or email
        #[arg(long)]
        by: String,
    },

    /// Reject a pending justification
    Reject {
        id: i64,

        /// Manager id or email
        #[arg(long)]
        by: String,
    },

    /// List justifications
    List {
        #[arg(long, value_enum)]
        status: Option<JustificationStatus>,

        /// Employee id or email
        #[arg(long)]
        employee: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Add (or rename) a holiday
    Add { date: String, description: String },

    /// List holidays
    List {
        #[arg(long)]
        year: Option<i32>,
    },

    /// Delete a holiday
    Del { date: String },
}
