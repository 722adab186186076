//! Line-driven shell over the project tracker.
//!
//! # Responsibility
//! - Mount the tracker page headlessly and drive it from stdin or a script.
//! - Print alerts to stderr and the rendered page or JSON to stdout.

mod commands;

use clap::Parser;
use commands::{parse_command, Command, CommandError, HELP};
use log::{info, warn};
use projtrack_core::{
    core_version, init_from_config, AlertSink, App, ProjectId, SubmitOutcome, TrackerConfig,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

#[derive(Debug, Parser)]
#[command(name = "projtrack", version, about = "Headless project tracker shell")]
struct Cli {
    /// Log level (trace|debug|info|warn|error); overrides PROJTRACK_LOG_LEVEL.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for log files; overrides PROJTRACK_LOG_DIR.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

struct StderrAlerts;

impl AlertSink for StderrAlerts {
    fn alert(&self, message: &str) {
        eprintln!("alert: {message}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = TrackerConfig::from_env().with_overrides(cli.log_level, cli.log_dir);
    if let Err(err) = init_from_config(&config) {
        eprintln!("projtrack: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli.script) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("projtrack: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(script: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::new(Rc::new(StderrAlerts))?;
    info!("event=cli_start module=cli status=ok version={}", core_version());

    let reader: Box<dyn BufRead> = match script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(&app, command)?,
            Err(CommandError::Empty) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
    Ok(())
}

fn execute(app: &App, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Add {
            title,
            description,
            people,
        } => {
            if let SubmitOutcome::Created(id) = app.submit(&title, &description, &people)? {
                println!("created {id}");
            }
        }
        Command::Move { id_prefix, target } => match resolve_id(app, &id_prefix) {
            Some(id) => {
                let outcome = app.drag_project(id, target)?;
                println!("{outcome:?} {id} -> {target}");
            }
            None => {
                warn!("event=cli_move_skipped module=cli reason=unresolved prefix={id_prefix}");
                eprintln!("no single project matches `{id_prefix}`");
            }
        },
        Command::Show => print!("{}", app.render_text()),
        Command::Json => println!("{}", serde_json::to_string_pretty(&app.snapshot())?),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
    Ok(())
}

/// Finds the one project whose id starts with `prefix`.
fn resolve_id(app: &App, prefix: &str) -> Option<ProjectId> {
    let prefix = prefix.to_ascii_lowercase();
    let mut matches = app
        .snapshot()
        .into_iter()
        .map(|project| project.id)
        .filter(|id| id.to_string().starts_with(&prefix));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Some(id),
        _ => None,
    }
}
