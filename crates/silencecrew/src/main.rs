//! `silencecrew` - filter crewmate chatter from the command line.
//!
//! Classifies single lines, replays recorded host events and edits the
//! settings file shared with the in-game filter.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod replay;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use silencecrew_core::config::{default_path, parse_bool};
use silencecrew_core::{
    ConfigSection, CrewFilter, FilterConfig, Ownership, SettingKey, SharedConfig, decide, normalize,
};

#[derive(Parser, Debug)]
#[command(name = "silencecrew", version, about = "Filter crewmate chatter while sailing")]
struct Arguments {
    /// Settings file (defaults to the platform config directory).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify one message and show whether it would be hidden.
    Check(CheckArguments),
    /// Run recorded host events through the filter, one JSON line per event.
    Replay(ReplayArguments),
    /// Show or edit settings.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args, Debug)]
struct CheckArguments {
    /// Message text; markup tags and case are ignored.
    message: String,
    /// Judge the message as coming from another player's crewmate.
    #[arg(long)]
    others: bool,
    /// Print the decision as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ReplayArguments {
    /// Event log; reads standard input when absent or `-`.
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print every setting grouped by section.
    Show,
    /// Print the settings file location.
    Path,
    /// Restore all defaults.
    Reset,
    /// Change one setting.
    Set {
        /// Setting key, e.g. filterOwnWarnings.
        key: SettingKey,
        /// true/false, on/off, yes/no or 1/0.
        value: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "silencecrew=info,silencecrew_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Arguments::parse();
    let settings_path = args.config.unwrap_or_else(default_path);

    match args.command {
        Commands::Check(check_arguments) => check(&settings_path, &check_arguments),
        Commands::Replay(replay_arguments) => run_replay(&settings_path, &replay_arguments),
        Commands::Config(config_command) => configure(&settings_path, config_command),
    }
}

fn load(path: &Path) -> Result<FilterConfig> {
    FilterConfig::load(path).with_context(|| format!("loading settings from {}", path.display()))
}

fn check(settings_path: &Path, args: &CheckArguments) -> Result<()> {
    let config = load(settings_path)?;
    let ownership = Ownership::from_is_own(!args.others);
    let decision = decide(&normalize(&args.message), ownership, &config);

    if args.json {
        println!("{}", serde_json::to_string(&decision)?);
        return Ok(());
    }

    println!("category:   {}", decision.category.display_name());
    println!("ownership:  {}", decision.ownership.as_str());
    println!("cargo full: {}", if decision.cargo_full { "yes" } else { "no" });
    println!("decision:   {}", if decision.suppress { "hide" } else { "show" });
    Ok(())
}

fn run_replay(settings_path: &Path, args: &ReplayArguments) -> Result<()> {
    let filter = CrewFilter::new(SharedConfig::new(load(settings_path)?));

    let input = match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading standard input")?;
            buffer
        }
    };

    let reports = replay::replay(&filter, &input)?;
    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }

    let hidden = reports.iter().filter(|r| r.outcome.is_suppressed()).count();
    info!("Replayed {} events, {} hidden", reports.len(), hidden);
    Ok(())
}

fn configure(settings_path: &Path, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = load(settings_path)?;
            for section in ConfigSection::ALL {
                println!("[{}]", section.display_name());
                for key in SettingKey::ALL.iter().filter(|key| key.section() == section) {
                    println!(
                        "  {:<28} {:<5}  {}",
                        key.key_name(),
                        config.get(*key),
                        key.display_name()
                    );
                }
            }
        }
        ConfigCommands::Path => println!("{}", settings_path.display()),
        ConfigCommands::Reset => FilterConfig::default().save(settings_path)?,
        ConfigCommands::Set { key, value } => {
            let mut config = load(settings_path)?;
            config.set(key, parse_bool(key, &value)?);
            config.save(settings_path)?;
        }
    }
    Ok(())
}
