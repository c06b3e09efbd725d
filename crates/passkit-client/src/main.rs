use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use passkit_client::commands::{self, GenerateOptions};
use passkit_client::config::SERVER_URL_ENV;

const HELP_TEXT: &str = r#"
  Examples
    $ pk generate
    $ pk generate --length 24 --no-symbols
    $ pk generate --copy
    $ pk analyze
    $ pk analyze 'correct horse battery staple' --show
    $ pk --server http://10.0.0.2:8080 analyze
"#;

#[derive(Parser)]
#[command(
    name = "pk",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate and analyze passwords",
    after_help = HELP_TEXT
)]
struct Cli {
    /// Server URL (overrides the configured serverUrl)
    #[arg(long, global = true, env = SERVER_URL_ENV)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a password
    Generate(GenerateArgs),
    /// Analyze the strength of a password
    Analyze(AnalyzeArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Password length
    #[arg(short = 'l', long, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Leave out uppercase letters
    #[arg(long)]
    no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    no_lower: bool,

    /// Leave out numbers
    #[arg(long)]
    no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// Copy the generated password to the clipboard
    #[arg(short = 'y', long)]
    copy: bool,
}

#[derive(Args)]
struct AnalyzeArgs {
    /// Password to analyze (prompted without echo when omitted)
    password: Option<String>,

    /// Echo the analyzed password in the result
    #[arg(short = 's', long)]
    show: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let server = cli.server.as_deref();

    let result = match cli.command {
        Command::Generate(args) => {
            let options = GenerateOptions {
                length: args.length,
                no_upper: args.no_upper,
                no_lower: args.no_lower,
                no_numbers: args.no_numbers,
                no_symbols: args.no_symbols,
                copy: args.copy,
            };
            commands::generate(server, &options).await
        }
        Command::Analyze(args) => commands::analyze(server, args.password, args.show).await,
    };

    if let Err(e) = result {
        if !e.is_reported() {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
        std::process::exit(1);
    }
}
