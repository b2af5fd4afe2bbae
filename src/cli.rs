//! Command line interface definition
use clap::{Parser, Subcommand};
use cupcake_order::Screen;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cupcake")]
#[command(version)]
#[command(about = "Cupcake order flow: interactive menu and scripted navigation runs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (defaults to ./cupcake.toml, then the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug mode
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive order menu (default)
    Menu,

    /// Run a comma separated action script and report the route after each step
    Run {
        /// Steps: one-cupcake, quantity:<n>, flavor:<name>, date:+<days>|YYYY-MM-DD, next, cancel, up
        #[arg(short, long)]
        script: String,

        /// Emit the step reports as JSON
        #[arg(long)]
        json: bool,

        /// Fail unless the flow ends on this route
        #[arg(long, value_parser = parse_route)]
        expect: Option<Screen>,
    },

    /// Test configuration file
    Test {
        /// Configuration file path (optional, defaults to the lookup order of --config)
        #[arg(index = 1)]
        config_file: Option<PathBuf>,
    },
}

fn parse_route(s: &str) -> Result<Screen, String> {
    s.parse()
        .map_err(|_| format!("unknown route '{s}', expected one of: Start, Flavor, Pickup, Summary"))
}
