mod app;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use app::App;
use commands::entries::{EntryArgs, EntryUpdateArgs};
use commands::list::{FilterArgs, SortArgs};

#[derive(Parser)]
#[command(name = "faithlog")]
#[command(about = "Personal faith journal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record a testimony, gratitude or prayer request
    Add(EntryArgs),
    /// Change fields of an existing entry
    Edit {
        /// Entry ID
        id: i64,
        #[command(flatten)]
        fields: EntryUpdateArgs,
    },
    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,
    },
    /// Show one entry in full
    Show {
        /// Entry ID
        id: i64,
    },
    /// List entries with optional filters and sorting
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        sort: SortArgs,
    },
    /// Summary counts, top people, trending tags and answered prayers
    Dashboard {
        /// Time period: today, week, month, or all
        #[arg(short, long, default_value = "all")]
        range: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Export matching entries to a PDF report
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Directory for the report (defaults to the configured export dir)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
    /// List every tag in use
    Tags,
    /// Data management commands
    Data {
        #[command(subcommand)]
        action: DataAction,
    },
    /// Language and data settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
    /// Show resolved configuration
    Config,
}

#[derive(Subcommand, Debug)]
enum DataAction {
    /// Export all entries to JSON or CSV
    Export {
        /// Output format: json or csv
        format: String,
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsAction {
    /// Show or set the interface language (en, es)
    Language {
        /// New language; omit to show the current one
        language: Option<String>,
    },
    /// Delete every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let mut app = App::open().await?;

    match cli.command {
        Commands::Add(args) => commands::entries::handle_add(&mut app, args).await,
        Commands::Edit { id, fields } => commands::entries::handle_edit(&mut app, id, fields).await,
        Commands::Delete { id } => commands::entries::handle_delete(&mut app, id).await,
        Commands::Show { id } => commands::entries::handle_show(&app, id),
        Commands::List { filter, sort } => commands::list::handle_list(&app, &filter, &sort),
        Commands::Dashboard { range, json } => {
            commands::dashboard::handle_dashboard(&app, &range, json)
        }
        Commands::Export { filter, output_dir } => {
            commands::export::handle_export(&app, &filter, output_dir)
        }
        Commands::Tags => commands::list::handle_tags(&app),
        Commands::Data { action } => match action {
            DataAction::Export { format, output } => {
                commands::data::handle_data_export(&app, &format, output)
            }
        },
        Commands::Settings { action } => match action {
            SettingsAction::Language { language } => {
                commands::settings::handle_language(&app, language.as_deref())
            }
            SettingsAction::Clear { yes } => commands::settings::handle_clear(&mut app, yes).await,
        },
        Commands::Config => commands::config::handle_config(&app),
    }
}
