//! Skill Helper - example script bundled with a Claude Code skill
//!
//! Prints the example lines and exits successfully.

use skill_helper::app::cli::{Cli, Commands, ConfigAction};
use skill_helper::app::config::Config;
use skill_helper::app::logging::{effective_level, init_logging};
use skill_helper::helper::write_example;
use skill_helper::skill::SkillLayout;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let command = cli.effective_command();

    // Only an explicit --config is fatal, and only for commands that read it.
    // `config init` and `config path` must work even when the file is broken.
    let strict = cli.config.is_some()
        && !matches!(
            command,
            Commands::Config {
                action: ConfigAction::Init { .. } | ConfigAction::Path
            }
        );

    // Load config before logging, since it carries the log settings
    let (config, ignored) = load_config(cli.config.as_deref(), strict)?;

    let level = effective_level(config.logging.level()?, cli.verbose);
    init_logging(level, config.logging.format)?;

    if let Some(err) = ignored {
        warn!(path = ?config_target(&cli), error = %err, "Ignoring invalid config, using defaults");
    } else {
        debug!(config = ?cli.config, "Configuration loaded");
    }
    log_skill_location();

    debug!(?command, "Dispatching command");

    match command {
        Commands::Run => run_example()?,
        Commands::Config { action } => run_config(action, &config, &config_target(&cli))?,
    }

    Ok(())
}

/// Load the explicit or default config.
///
/// When not `strict`, a load failure yields defaults plus the error for logging.
fn load_config(
    path: Option<&Path>,
    strict: bool,
) -> anyhow::Result<(Config, Option<skill_helper::Error>)> {
    let loaded = match path {
        Some(p) => Config::load(p),
        None => Config::load_default(),
    };

    match loaded {
        Ok(config) => Ok((config, None)),
        Err(e) if strict => Err(e.into()),
        Err(e) => Ok((Config::default(), Some(e))),
    }
}

/// The file `config` subcommands act on: `--config` if given, else the default
fn config_target(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(Config::default_path)
}

fn log_skill_location() {
    let layout = std::env::current_exe()
        .ok()
        .and_then(|exe| SkillLayout::from_script_path(&exe));

    match layout {
        Some(layout) => debug!(skill = %layout.name, dir = ?layout.skill_dir(), "Running inside skill"),
        None => debug!("Running outside a skill scripts directory"),
    }
}

fn run_example() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let ok = write_example(&mut out)?;
    debug!(ok, "Example helper finished");
    Ok(())
}

fn run_config(action: ConfigAction, config: &Config, config_path: &Path) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match action {
        ConfigAction::Show => {
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config already exists at {:?}. Use --force to overwrite.",
                    config_path
                );
            }

            Config::default().save(config_path)?;
            info!("Wrote default config to {:?}", config_path);
            writeln!(out, "Created config at {}", config_path.display())?;
        }
    }

    Ok(())
}
