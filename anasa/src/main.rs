use std::path::PathBuf;

use anasa::commands::{check_config::check_config, email::EmailCommand, serve::serve};
use anasa_utils::anasa_version;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let Cli { config, command } = Cli::parse();

    let command = match command {
        Command::Completion { shell } => {
            print_completion(shell);
            return Ok(());
        }
        Command::Serve => Invocation::Serve,
        Command::Email { command } => Invocation::Email(command),
        Command::CheckConfig { verbose } => Invocation::CheckConfig { verbose },
    };

    init_tracing();

    let config = anasa_config::load_with(config.as_slice())?;

    match command {
        Invocation::Serve => serve(config).await,
        Invocation::Email(command) => command.invoke(config).await,
        Invocation::CheckConfig { verbose } => {
            check_config(&config, verbose);
            Ok(())
        }
    }
}

#[derive(Debug, Parser)]
#[command(version = anasa_version())]
struct Cli {
    /// Additional config file, applied after the default config and the files
    /// listed in ANASA_CONFIG. May be repeated.
    #[arg(short, long, global = true)]
    config: Vec<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the contact and newsletter relay endpoints
    #[command(aliases(["run", "start", "s"]))]
    Serve,
    /// Test email deliverability
    #[command(aliases(["e"]))]
    Email {
        #[command(subcommand)]
        command: EmailCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Commands that need the config.
enum Invocation {
    Serve,
    Email(EmailCommand),
    CheckConfig { verbose: bool },
}

fn print_completion(shell: Shell) {
    clap_complete::generate(
        shell,
        &mut Cli::command(),
        env!("CARGO_BIN_NAME"),
        &mut std::io::stdout(),
    );
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
