//! Cupcake order flow entry point

use chrono::{Local, NaiveDate};
use clap::Parser;
use cupcake::cli::{Cli, Commands};
use cupcake::config::{CupcakeConfig, fallback_paths, find_config_file};
use cupcake::error::{Error, Result};
use cupcake::menu::framework::terminal::Terminal;
use cupcake::observability::init_observability;
use cupcake::script::{parse_script, run_actions};
use cupcake::MenuApplication;
use cupcake_order::{OrderNavigationController, Screen};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};

macro_rules! bootstrap_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

/// Application launcher utilities
struct ApplicationLauncher;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match ApplicationLauncher::launch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            bootstrap_error!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

impl ApplicationLauncher {
    fn launch(cli: Cli) -> Result<()> {
        match cli.command {
            Some(Commands::Test { ref config_file }) => {
                Self::test_config_file(config_file.as_deref().or(cli.config.as_deref()))
            }
            Some(Commands::Run {
                ref script,
                json,
                expect,
            }) => {
                let config = Self::load_config(cli.config.as_deref())?;
                let _guard = init_observability(&config.observability)?;
                Self::run_script(&config, script, json, expect)
            }
            Some(Commands::Menu) | None => {
                let config = Self::load_config(cli.config.as_deref())?;
                let _guard = init_observability(&config.observability)?;
                Self::run_menu(&config, cli.debug)
            }
        }
    }

    /// Load and validate the configuration, falling back to defaults when no file exists
    fn load_config(provided: Option<&Path>) -> Result<CupcakeConfig> {
        let config = match find_config_file(provided)? {
            Some(path) => CupcakeConfig::from_file(&path)?,
            None => CupcakeConfig::default(),
        };

        if let Err(errors) = config.validate() {
            return Err(Error::config_validation(errors.join("; ")));
        }

        Ok(config)
    }

    fn new_controller(config: &CupcakeConfig, today: NaiveDate) -> OrderNavigationController {
        OrderNavigationController::new(config.order.options_for(today))
    }

    /// Check that a configuration file parses and validates
    fn test_config_file(provided: Option<&Path>) -> Result<()> {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();

        let Some(config_path) = find_config_file(provided)? else {
            let searched: Vec<PathBuf> = fallback_paths();
            bootstrap_error!("No configuration file found! Searched:");
            for (i, path) in searched.iter().enumerate() {
                bootstrap_error!("  {}. {:?}", i + 1, path);
            }
            bootstrap_error!("Or specify a custom path with: cupcake test <path>");
            return Err(Error::custom("No configuration file found"));
        };

        let config = CupcakeConfig::from_file(&config_path)?;
        info!("✅ Configuration parsed: {:?}", config_path);

        match config.validate() {
            Ok(()) => {
                info!("✅ Configuration is valid");
                Ok(())
            }
            Err(errors) => {
                error!("❌ Configuration validation found problems:");
                for (i, err) in errors.iter().enumerate() {
                    error!("  {}. {}", i + 1, err);
                }
                Err(Error::config_validation(format!(
                    "{} problem(s) in {config_path:?}",
                    errors.len()
                )))
            }
        }
    }

    /// Drive a fresh order through a script and print the step reports
    fn run_script(
        config: &CupcakeConfig,
        script: &str,
        json: bool,
        expect: Option<Screen>,
    ) -> Result<()> {
        let today = Local::now().date_naive();
        let mut controller = Self::new_controller(config, today);
        let actions = parse_script(script, today)?;

        let reports = run_actions(&mut controller, &actions);
        if json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                println!("{}", report.describe());
            }
            println!("Final route: {}", controller.route_name());
        }

        if let Some(expected) = expect
            && controller.current_screen() != expected
        {
            return Err(Error::UnexpectedRoute {
                expected: expected.to_string(),
                actual: controller.route_name().to_string(),
            });
        }

        Ok(())
    }

    /// Interactive menu with Ctrl+C support
    fn run_menu(config: &CupcakeConfig, debug: bool) -> Result<()> {
        // Prompts read keys from stdin and draw on stderr
        if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
            return Err(Error::custom(
                "The interactive menu needs a terminal, use `cupcake run --script` instead",
            ));
        }

        let interrupted = Arc::new(AtomicBool::new(false));
        let interrupted_clone = interrupted.clone();
        ctrlc::set_handler(move || {
            interrupted_clone.store(true, Ordering::SeqCst);
        })?;

        Terminal::clear();

        let controller = Self::new_controller(config, Local::now().date_naive());
        let mut app = MenuApplication::new(controller, debug, interrupted);
        if let Err(e) = app.run() {
            warn!("menu stopped: {e:#}");
            return Err(e.into());
        }
        Ok(())
    }
}
