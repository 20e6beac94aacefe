//! pashu - terminal driver for the P.A.S.H.U. breed-identification flow.
//!
//! # Commands
//!
//! - `pashu run` - Walk through the flow with interactive menus
//! - `pashu script <file>` - Drive the flow from a command script
//! - `pashu identify <image>` - Classify one image with the mock classifier
//! - `pashu catalog` - List the breeds the mock classifier draws from
//! - `pashu vets` / `pashu schemes` - Show the reference directory
//! - `pashu locales check` - Audit the translation tables
//! - `pashu config show` - Print the effective configuration
//! - `pashu completions` - Generate shell completions

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pashu_config::AppConfig;
use pashu_core::{Flow, FlowBuilder};
use pashu_i18n::Language;
use pashu_log::{Format, Level, LogConfig};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod error;
mod render;

use commands::{catalog, config, directory, locales, run, script};
use error::CliResult;

/// P.A.S.H.U. - livestock breed identification
#[derive(Parser)]
#[command(name = "pashu")]
#[command(version)]
#[command(about = "🐄 Terminal driver for the P.A.S.H.U. breed-identification flow")]
#[command(propagate_version = true)]
#[command(after_help = format!(
    "{}\n  {} pashu run\n  {} pashu --lang hi run\n  {} pashu --instant script demo.pashu\n  {} pashu identify cow.jpg --seed 7",
    "Examples:".bright_cyan().bold(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
    "$".dimmed(),
))]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    settings: Settings,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Overrides applied on top of the loaded configuration.
#[derive(Args, Debug, Default)]
struct Settings {
    /// Configuration file (TOML, JSON or .env)
    #[arg(short, long, global = true, env = "PASHU_CONFIG")]
    config: Option<PathBuf>,

    /// Start in this language (en, hi)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Skip the simulated login and recognition delays
    #[arg(long, global = true)]
    instant: bool,

    /// Seed for reproducible breed selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Breed catalog (JSON array) for the mock classifier
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the flow with interactive menus
    #[command(alias = "r")]
    Run,

    /// Drive the flow from a command script (`-` reads stdin)
    #[command(alias = "s")]
    Script {
        /// Script file
        file: PathBuf,

        /// Print the final screen when the script ends
        #[arg(long)]
        show: bool,
    },

    /// Classify one image with the mock classifier
    #[command(alias = "i")]
    Identify {
        /// Image file
        image: PathBuf,
    },

    /// List the breed catalog
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List veterinary contacts
    Vets {
        /// Only clinics with emergency service
        #[arg(long)]
        emergency: bool,
    },

    /// List government schemes
    Schemes,

    /// Audit and inspect translation tables
    Locales {
        #[command(subcommand)]
        command: LocalesCommands,
    },

    /// Show or check configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum LocalesCommands {
    /// Report keys missing from any language
    Check {
        /// Directory of `<code>.json` overrides
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Print one key in every language
    Show {
        /// Message key, e.g. `getStarted` or `scheme.rashtriyaGokulMission.title`
        key: String,

        /// Directory of `<code>.json` overrides
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Validate a configuration file
    Check {
        /// File to check
        file: PathBuf,
    },
}

// =============================================================================
// HELPERS
// =============================================================================

fn print_mini_banner() {
    println!(
        "\n  {} {} {}\n",
        "🐄".bright_yellow(),
        "P.A.S.H.U.".bright_white().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

/// Create a spinner progress indicator.
fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn success(msg: &str) {
    println!("  {} {}", "✓".green().bold(), msg.green());
}

fn warn(msg: &str) {
    println!("  {} {}", "⚠".yellow().bold(), msg.yellow());
}

fn init_logging(verbose: bool) {
    let config = LogConfig::from_env();
    let config = if verbose {
        config.with_level(Level::Debug).with_format(Format::Compact)
    } else if std::env::var_os("PASHU_LOG_LEVEL").is_none() {
        config.with_level(Level::Warn)
    } else {
        config
    };
    pashu_log::init_with(config);
}

/// Load the configuration and apply command-line overrides.
fn load_config(settings: &Settings) -> CliResult<AppConfig> {
    let mut config = AppConfig::load(settings.config.as_deref())?;

    if let Some(code) = &settings.lang {
        config.default_language = Language::parse(code)?;
    }
    if settings.instant {
        config.login_latency_ms = 0;
        config.recognition_latency_ms = 0;
    }
    if let Some(seed) = settings.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

async fn build_flow(settings: &Settings, config: &AppConfig) -> CliResult<Flow> {
    let mut builder = FlowBuilder::from_config(config)?;
    if settings.catalog.is_some() {
        builder = builder.with_catalog(catalog::load(settings.catalog.as_deref()).await?);
    }
    Ok(builder.build())
}

async fn execute(cli: Cli) -> CliResult<()> {
    let settings = cli.settings;

    match cli.command {
        Commands::Run => {
            print_mini_banner();
            let config = load_config(&settings)?;
            let mut flow = build_flow(&settings, &config).await?;
            run::run(&mut flow).await
        }

        Commands::Script { file, show } => {
            let config = load_config(&settings)?;
            let mut flow = build_flow(&settings, &config).await?;
            script::run(&mut flow, &file).await?;
            if show {
                render::print_screen(&flow);
            }
            Ok(())
        }

        Commands::Identify { image } => {
            let config = load_config(&settings)?;
            catalog::identify(&config, settings.catalog.as_deref(), &image).await
        }

        Commands::Catalog { json } => catalog::list(settings.catalog.as_deref(), json).await,

        Commands::Vets { emergency } => {
            let config = load_config(&settings)?;
            let i18n = locales::load(config.locales_dir.as_deref())?;
            directory::vets(&i18n, config.default_language, emergency)
        }

        Commands::Schemes => {
            let config = load_config(&settings)?;
            let i18n = locales::load(config.locales_dir.as_deref())?;
            directory::schemes(&i18n, config.default_language)
        }

        Commands::Locales { command } => match command {
            LocalesCommands::Check { dir } => locales::check(dir.as_deref()),
            LocalesCommands::Show { key, dir } => locales::show(dir.as_deref(), &key),
        },

        Commands::Config { command } => match command {
            ConfigCommands::Show { json } => config::show(&load_config(&settings)?, json),
            ConfigCommands::Check { file } => config::check(&file),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "pashu", &mut io::stdout());
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose);

    if let Err(e) = execute(cli).await {
        eprintln!("\n  {} {}\n", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
