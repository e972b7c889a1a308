mod commands;
mod echo;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scout_core::{ExportFormat, SortKey, Theme};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Browse, enrich, annotate and export startups
#[derive(Parser, Debug)]
#[command(name = "scout")]
#[command(author = "Scout Contributors")]
#[command(version)]
#[command(about = "Startup research from the terminal", long_about = None)]
struct Args {
    /// Directory for notes, lists, searches and cached enrichments
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the directory and manage custom companies
    #[command(subcommand)]
    Companies(CompaniesCommand),

    /// Summarize a company's website with the LLM and cache the result
    Enrich {
        /// Company id
        id: String,

        /// Use a running enrichment server instead of calling the LLM directly
        #[arg(long, value_name = "URL")]
        server: Option<String>,

        /// HTTP timeout in seconds for the website fetch (the server uses its own)
        #[arg(long, default_value = "15", value_name = "SECS", conflicts_with = "server")]
        timeout: u64,
    },

    /// Read or write the note attached to a company
    #[command(subcommand)]
    Note(NoteCommand),

    /// Curate and export company lists
    #[command(subcommand)]
    Lists(ListsCommand),

    /// Save and re-run directory searches
    #[command(subcommand)]
    Searches(SearchesCommand),

    /// Show or change the colour theme preference
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Subcommand, Debug)]
enum CompaniesCommand {
    /// List companies, filtered, sorted and paged
    List {
        /// Case-insensitive match on name or industry
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = scout_core::ALL)]
        industry: String,

        #[arg(long, default_value = scout_core::ALL)]
        stage: String,

        /// Sort column (name, industry, stage, location)
        #[arg(long, value_name = "KEY")]
        sort: Option<SortKey>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        #[arg(long, default_value = "1", value_name = "N")]
        page: usize,
    },

    /// Add a custom company
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        url: String,

        #[arg(long, default_value = "")]
        industry: String,

        #[arg(long, default_value = "")]
        stage: String,

        #[arg(long, default_value = "")]
        location: String,
    },

    /// Show a company profile with its note, enrichment and lists
    Show { id: String },
}

#[derive(Subcommand, Debug)]
enum NoteCommand {
    Show { id: String },
    Set { id: String, text: String },
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
enum ListsCommand {
    /// List all lists
    List,

    /// Show the companies in a list
    Show { id: String },

    /// Create a list, optionally with a first company
    Create {
        name: String,

        #[arg(long, value_name = "COMPANY_ID")]
        company: Option<String>,
    },

    /// Add a company to a list
    Add { list_id: String, company_id: String },

    /// Remove a company from a list
    Remove { list_id: String, company_id: String },

    /// Delete a list
    Delete { id: String },

    /// Export a list as CSV or JSON
    Export {
        id: String,

        /// Output format (csv, json)
        #[arg(short, long, default_value = "csv", value_name = "FORMAT")]
        format: ExportFormat,

        /// Output file (default: <list name>_export.<ext>)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum SearchesCommand {
    /// List saved searches, newest first
    List,

    /// Save a search
    Save {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = scout_core::ALL)]
        industry: String,

        #[arg(long, default_value = scout_core::ALL)]
        stage: String,
    },

    /// Delete a saved search
    Delete { id: String },

    /// Apply a saved search to the directory
    Run { id: String },
}

#[derive(Subcommand, Debug)]
enum ThemeCommand {
    Show,
    Set { theme: Theme },
    Toggle,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if let Err(e) = commands::run(args).await {
        echo::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
