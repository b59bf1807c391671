//! # nkconf demo application
//!
//! A sample CLI showing both ways of driving nkconf from a command line:
//! raw action strings (`action`) and clap subcommands (`config`).
//!
//! ```sh
//! cargo run --example nkconf_demo -- action help
//! cargo run --example nkconf_demo -- action server.port=8080
//! cargo run --example nkconf_demo -- action server.port-
//! cargo run --example nkconf_demo -- config set server.host localhost
//! cargo run --example nkconf_demo -- config list
//! cargo run --example nkconf_demo -- show server.port
//! RUST_LOG=nkconf=debug cargo run --example nkconf_demo -- action list
//! ```
//!
//! Files live in `~/.nk/nkconf-demo/config.json`, or `./config.json` when
//! the home file doesn't exist yet.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nkconf::{ConfigArgs, ConfigFile, ConsoleTerminal, NkconfError};

/// nkconf demo: edit a per-project JSON config.
#[derive(Parser, Debug)]
#[command(name = "nkconf-demo")]
struct Cli {
    /// Project directory under ~/.nk.
    #[arg(long, global = true, default_value = "nkconf-demo")]
    project: String,

    /// Config file name, without .json.
    #[arg(long, global = true, default_value = "config")]
    file_name: String,

    /// Disable colored output.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one raw action: help, list, section.name=value, section.name-.
    Action { action: String },
    /// Manage the configuration with subcommands.
    Config(ConfigArgs),
    /// Print one value, converted to a string.
    Show { key: String },
}

fn run(cli: Cli) -> Result<bool, NkconfError> {
    let terminal = if cli.plain {
        ConsoleTerminal::plain()
    } else {
        ConsoleTerminal::new()
    };
    let mut cfg = ConfigFile::builder()
        .project(&cli.project)
        .file_name(&cli.file_name)
        .terminal(terminal)
        .build()?;

    // A missing file is fine here: the first `set` creates it.
    cfg.load()?;

    match cli.command {
        Commands::Action { action } => cfg.execute_command(&action),
        Commands::Config(args) => {
            let action = args.into_action()?;
            cfg.handle(&action)
        }
        Commands::Show { key } => {
            println!("{}", cfg.store().as_string(&key, ""));
            Ok(true)
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nkconf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Config error:\n{e}");
            std::process::exit(2);
        }
    }
}
