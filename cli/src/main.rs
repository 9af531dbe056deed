use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use road_status_core::{ReportOutcome, RoadStatusService, UreqTransport};

mod settings;
mod telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "road-status",
    version,
    about = "Show the current status of TfL major roads"
)]
struct Cli {
    /// Comma-separated road ids such as A2 or A2,A20; empty for all roads.
    /// Prompts on stdin when omitted.
    roads: Option<String>,
    #[arg(long, value_name = "PATH", help = "Settings file (default: ./appsettings.json if present)")]
    config: Option<PathBuf>,
    #[arg(long, env = "ROAD_STATUS_API_URL", help = "Base URL of the Road API")]
    api_url: Option<String>,
    #[arg(long, env = "ROAD_STATUS_APP_KEY", hide_env_values = true, help = "API app key")]
    app_key: Option<String>,
    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ReportOutcome> {
    let file = match &cli.config {
        Some(path) => settings::load_settings(path, true)?,
        None => settings::load_settings(Path::new(settings::DEFAULT_SETTINGS_FILE), false)?,
    };
    let config = settings::resolve(file, cli.api_url, cli.app_key)?;
    tracing::debug!(?config, "resolved configuration");

    let road_ids = match cli.roads {
        Some(roads) => roads,
        None => prompt_for_roads()?,
    };

    let service = RoadStatusService::new(UreqTransport::new(), &config);
    let mut stdout = io::stdout().lock();
    let outcome = service.report_statuses(&road_ids, &mut stdout);
    stdout.flush().context("failed to flush stdout")?;
    Ok(outcome)
}

fn prompt_for_roads() -> anyhow::Result<String> {
    let mut out = io::stdout().lock();
    writeln!(out, "TfL Major Road Status Client")?;
    writeln!(out, "----------------------------\n")?;
    writeln!(
        out,
        "Please enter a major road or roads, such as 'A2' or 'A2,A20', to get each road's current status."
    )?;
    writeln!(out, "Or leave blank to return all major roads and their statuses")?;
    write!(out, "Road(s): ")?;
    out.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read road list from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
