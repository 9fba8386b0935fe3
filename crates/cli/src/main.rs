//! qrweave command-line entry point.
//!
//! Runs one artistic-QR workflow with the mock providers, streaming the
//! agent logs and protocol messages to the terminal as they happen.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use clap::Parser;
use color_eyre::eyre::eyre;
use colored::Colorize;
use qw_core::config::load_config;
use qw_core::workflow::WorkflowEngine;
use qw_protocol::agent_models::agent_roster;
use qw_protocol::ipc::Event;
use qw_protocol::trace_models::{LogEntry, LogKind};
use qw_protocol::workflow_models::ArtStyle;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

#[derive(Parser)]
#[command(name = "qrweave", version, about = "Multi-agent artistic QR code generator")]
struct Args {
    /// Text payload the decorative grid is derived from
    #[arg(long, default_value = "behnamshahbazi.com/qrwe")]
    payload: String,

    /// Art style: cyberpunk, abstract, nature, geometric, watercolor
    #[arg(long)]
    style: Option<ArtStyle>,

    /// Directory containing qrweave.toml
    #[arg(long, default_value = ".")]
    config: PathBuf,

    /// Write the generated image (BMP) to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the final result as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// List the workflow agents and exit
    #[arg(long)]
    agents: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.agents {
        for agent in agent_roster() {
            println!("{}", agent.name.bold());
            println!("  {}", agent.role);
            println!("  tools: {}", agent.tools.join(", "));
        }
        return Ok(());
    }

    let config = load_config(&args.config).await?;
    let style = args.style.unwrap_or(config.default_style);

    let (events_tx, events_rx) = mpsc::channel(256);
    let engine = WorkflowEngine::new(events_tx).with_renderer(config.renderer);

    let printer = tokio::spawn(async move {
        let mut events = ReceiverStream::new(events_rx);
        while let Some(event) = events.next().await {
            print_event(&event);
        }
    });

    let outcome = engine.run(&args.payload, style).await;
    // Dropping the engine closes the channel, ending the printer task.
    drop(engine);
    printer.await?;

    let result = outcome.map_err(|e| eyre!(e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        println!("{}", "Workflow complete".bold().green());
        println!("  payload:     {}", result.payload);
        println!("  style:       {}", result.style);
        println!("  readability: {}", result.metrics.readability);
        println!("  art score:   {}/10", result.metrics.art_score);
        println!("  tools:       {}", result.tools_used.join(", "));
        println!("  protocols:   {}", result.protocols_used.join(", "));
    }

    if let Some(path) = args.out {
        write_image(&result.image, &path)?;
        println!("  image:       {}", path.display());
    }

    Ok(())
}

fn print_event(event: &Event) {
    match event {
        Event::Log { entry, .. } => print_log(entry),
        Event::Protocol { message, .. } => {
            println!(
                "{} {} {} {}{} {}",
                format!("[{}]", message.timestamp.format("%H:%M:%S")).dimmed(),
                message.from.blue(),
                "→".dimmed(),
                message.to.green(),
                ":".dimmed(),
                message.message
            );
        }
        Event::StateChanged { state, .. } => {
            println!("{}", format!("-- state: {state:?}").dimmed());
        }
        // Agent activity and spans are visible through the log lines.
        _ => {}
    }
}

fn print_log(entry: &LogEntry) {
    let line = format!("{}: {}", entry.agent, entry.message);
    let colored_line = match entry.kind {
        LogKind::Error => line.red(),
        LogKind::Success => line.green(),
        LogKind::Trace => line.magenta(),
        LogKind::Ai => line.blue(),
        LogKind::Validation => line.cyan(),
        _ => line.normal(),
    };
    println!(
        "{} {}",
        format!("[{}]", entry.timestamp.format("%H:%M:%S")).dimmed(),
        colored_line
    );
}

fn write_image(data_uri: &str, path: &Path) -> color_eyre::Result<()> {
    let encoded = data_uri
        .strip_prefix("data:image/bmp;base64,")
        .ok_or_else(|| eyre!("unexpected image encoding"))?;
    let bytes = BASE64.decode(encoded)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
