use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use punchlist::models::Filter;
use punchlist::storage::Storage;
use punchlist::view::Controller;

#[derive(Parser)]
#[command(name = "punchlist")]
#[command(about = "Local to-do list with durable state")]
struct Cli {
    /// Keep the task list at this path instead of the platform data directory
    #[arg(long, global = true, value_name = "PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task to the front of the list
    Add {
        /// Task text; multiple words are joined with spaces
        text: Vec<String>,
    },
    /// Flip a task between active and completed
    Toggle {
        /// Id of the task to flip
        id: i64,
    },
    /// Delete a task
    Rm {
        /// Id of the task to delete
        id: i64,
    },
    /// Delete every completed task
    Clear,
    /// Show the task list
    List {
        /// Which tasks to show: all, active, or completed
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
}

/// Initialize tracing to stderr; stdout is the rendered list.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "punchlist=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let storage = match cli.store {
        Some(path) => Storage::open(path),
        None => Storage::open_default()?,
    };
    let mut controller = Controller::new(storage);
    let mut out = io::stdout();

    match cli.command {
        Some(Commands::Add { text }) => {
            let text = text.join(" ");
            // Blank input is rejected silently; nothing changed, nothing to show.
            if controller.add(&text)?.is_none() {
                return Ok(());
            }
            controller.render(Filter::All, &mut out)?;
        }
        Some(Commands::Toggle { id }) => {
            if !controller.toggle(id)? {
                println!("no such task: {}", id);
                return Ok(());
            }
            controller.render(Filter::All, &mut out)?;
        }
        Some(Commands::Rm { id }) => {
            if !controller.remove(id)? {
                println!("no such task: {}", id);
                return Ok(());
            }
            controller.render(Filter::All, &mut out)?;
        }
        Some(Commands::Clear) => {
            controller.clear_completed()?;
            controller.render(Filter::All, &mut out)?;
        }
        Some(Commands::List { filter }) => {
            let filter = Filter::from_str(&filter)
                .ok_or_else(|| anyhow::anyhow!("unknown filter: {}", filter))?;
            controller.render(filter, &mut out)?;
        }
        None => {
            // Default: show everything.
            controller.render(Filter::All, &mut out)?;
        }
    }

    Ok(())
}
