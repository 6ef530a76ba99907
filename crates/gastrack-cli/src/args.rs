use crate::types::{LogLevel, OutputFormat};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gastrack_runtime::EntryDraft;

#[derive(Parser)]
#[command(name = "gastrack")]
#[command(about = "Log refuels and track distance, km/L and fuel spending", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $GASTRACK_PATH, then the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Create the data directory, config and database")]
    Init,

    #[command(about = "Record a refuel")]
    Add {
        #[command(flatten)]
        entry: EntryArgs,
    },

    #[command(about = "Change fields of a recorded refuel")]
    Edit {
        #[arg(help = "Entry id or a unique prefix of it")]
        id: String,

        #[command(flatten)]
        entry: EntryArgs,
    },

    #[command(about = "Remove a recorded refuel")]
    Delete {
        #[arg(help = "Entry id or a unique prefix of it")]
        id: String,
    },

    #[command(about = "List refuels with distance and km/L, newest first")]
    History,

    #[command(about = "Show totals, averages and the efficiency trend")]
    Dashboard {
        #[arg(long, value_parser = parse_date, help = "Treat this date as today (YYYY-MM-DD)")]
        today: Option<NaiveDate>,
    },
}

/// Fields shared by `add` and `edit`; omitted values are derived or kept
#[derive(Debug, Clone, Default, Args)]
pub struct EntryArgs {
    #[arg(long, value_parser = parse_date, help = "Refuel date, YYYY-MM-DD (default: today)")]
    pub date: Option<NaiveDate>,

    #[arg(long, help = "Odometer reading in km")]
    pub odometer: Option<f64>,

    #[arg(long, help = "Price per liter")]
    pub price: Option<f64>,

    #[arg(long, help = "Liters filled")]
    pub liters: Option<f64>,

    #[arg(long, help = "Total paid")]
    pub total: Option<f64>,
}

impl EntryArgs {
    pub fn to_draft(&self) -> EntryDraft {
        EntryDraft {
            date: self.date,
            odometer: self.odometer,
            price_per_liter: self.price,
            liters: self.liters,
            total_cost: self.total,
        }
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, String> {
    gastrack_types::parse_entry_date(input).map_err(|e| e.to_string())
}
