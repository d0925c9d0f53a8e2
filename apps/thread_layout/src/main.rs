mod report;
mod settings;
mod transcript;

use std::path::PathBuf;

use anyhow::Result;
use bubble_policy::ClusterRules;
use clap::{Parser, Subcommand};
use tracing::info;

use report::{describe_cluster, describe_item, ClusterRow, LayoutRow};
use settings::load_settings;
use transcript::load_thread;

#[derive(Parser, Debug)]
#[command(name = "thread-layout", about = "Show how a conversation thread groups into bubbles")]
struct Cli {
    /// Layout settings file; defaults to ./thread_layout.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Per-message bubble layout.
    Layout {
        thread: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Runs of merged bubbles.
    Clusters {
        thread: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings(cli.config.as_deref())?;
    let metrics = settings.metrics();
    let calendar = settings.calendar()?;
    let tz = *calendar.time_zone();
    info!(?settings, "loaded layout settings");

    match cli.command {
        Command::Layout { thread, json } => {
            let thread = load_thread(&thread)?;
            let rules = ClusterRules::new(thread.kind, calendar);
            let layouts = rules.layout_thread(&thread.messages, &metrics);

            for (message, layout) in thread.messages.iter().zip(&layouts) {
                if json {
                    let row = LayoutRow {
                        id: message.id,
                        sender: &message.sender,
                        layout,
                    };
                    println!("{}", serde_json::to_string(&row)?);
                } else {
                    println!("{}", describe_item(message, layout, &tz));
                }
            }
        }
        Command::Clusters { thread, json } => {
            let thread = load_thread(&thread)?;
            let rules = ClusterRules::new(thread.kind, calendar);

            for range in rules.clusters(&thread.messages) {
                let Some(first) = thread.messages.get(range.start) else {
                    continue;
                };
                if json {
                    let row = ClusterRow {
                        start: range.start,
                        end: range.end,
                        sender: &first.sender,
                        outgoing: first.is_outgoing,
                    };
                    println!("{}", serde_json::to_string(&row)?);
                } else if let Some(line) = describe_cluster(&thread.messages, &range) {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}
