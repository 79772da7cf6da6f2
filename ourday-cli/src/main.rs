mod commands;
mod config;
mod files;
mod nager;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ourday_core::Category;
use tracing_subscriber::EnvFilter;

use crate::commands::Session;

#[derive(Parser)]
#[command(name = "ourday")]
#[command(about = "A shared calendar for two: schedules, holidays and anniversaries")]
struct Cli {
    /// View as this user instead of the configured viewer_id
    #[arg(long = "as", global = true)]
    viewer: Option<String>,

    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with packed schedule bars
    Month {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,
    },
    /// List everything on the calendar, grouped by day
    Timeline {
        /// Show entries from this date (YYYY-MM-DD, default today)
        #[arg(long)]
        from: Option<String>,

        /// Show entries until this date (YYYY-MM-DD, default 30 days after --from)
        #[arg(long)]
        to: Option<String>,
    },
    /// List day-count milestones and yearly anniversaries
    Anniversaries,
    /// Public holidays
    Holidays {
        #[command(subcommand)]
        command: HolidayCommands,
    },
    /// Add a schedule as the current viewer
    Add {
        title: String,

        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last day (YYYY-MM-DD, default same as --start)
        #[arg(short, long)]
        end: Option<String>,

        /// mine, partner or shared, as seen by you
        #[arg(short, long, default_value = "mine")]
        category: Category,

        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Edit a schedule; unspecified fields keep their value
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        start: Option<String>,

        #[arg(short, long)]
        end: Option<String>,

        /// mine, partner or shared, as seen by you
        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a schedule
    Delete { id: String },
}

#[derive(Subcommand)]
enum HolidayCommands {
    /// Show cached holidays
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Fetch holidays from the network (default: this year through the horizon)
    Refresh {
        #[arg(long)]
        year: Vec<i32>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session::open(cli.viewer.as_deref())?;

    match cli.command {
        Commands::Month { year, month } => commands::month::run(session, year, month),
        Commands::Timeline { from, to } => {
            commands::timeline::run(session, from.as_deref(), to.as_deref())
        }
        Commands::Anniversaries => commands::anniversaries::run(session),
        Commands::Holidays { command } => match command {
            HolidayCommands::List { year } => commands::holidays::list(session, year),
            HolidayCommands::Refresh { year } => commands::holidays::refresh(session, year).await,
        },
        Commands::Add {
            title,
            start,
            end,
            category,
            description,
        } => commands::add::run(
            session,
            commands::add::AddArgs {
                title,
                start,
                end,
                category,
                description,
            },
        ),
        Commands::Edit {
            id,
            title,
            start,
            end,
            category,
            description,
        } => commands::edit::run(
            session,
            &id,
            commands::edit::EditArgs {
                title,
                start,
                end,
                category,
                description,
            },
        ),
        Commands::Delete { id } => commands::delete::run(session, &id),
    }
}
