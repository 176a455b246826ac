use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use crypto_icons::commands::{
    self, config::ConfigOptions, init::InitOptions, update::UpdateOptions, EditOptions,
    IconSelection,
};
use crypto_icons::scaffold::Framework;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crypto-next-icons", version)]
#[command(about = "Generate and maintain crypto icon lookup tables for web projects")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the crypto icons structure in your project
    Init {
        /// Target directory (default: from config or ./src/components/crypto-icons)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Framework the generated component targets
        #[arg(short, long, value_enum, default_value_t = Framework::Next)]
        framework: Framework,
    },
    /// Configure default settings
    Config {
        /// Set default target directory
        #[arg(short, long)]
        dir: Option<String>,

        /// Set default image base path
        #[arg(short, long)]
        image_path: Option<String>,

        /// Set CSS class for dark mode detection (default: dark)
        #[arg(short = 'c', long)]
        dark_mode_class: Option<String>,

        /// Reset configuration to defaults
        #[arg(short, long)]
        reset: bool,
    },
    /// Add crypto icons
    Add {
        #[command(flatten)]
        icons: IconArgs,

        /// Target directory (default: from config or ./src/components/crypto-icons)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Remove crypto icons
    Remove {
        #[command(flatten)]
        icons: IconArgs,

        /// Target directory (default: from config or ./src/components/crypto-icons)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Point image helpers at the hosted image CDN
    Update {
        /// Target directory (default: from config or ./src/components/crypto-icons)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct IconArgs {
    /// Token icons
    #[arg(short, long, num_args = 1..)]
    token: Vec<String>,

    /// Wallet icons
    #[arg(short, long, num_args = 1..)]
    wallet: Vec<String>,

    /// System icons
    #[arg(short, long, num_args = 1..)]
    system: Vec<String>,
}

impl From<IconArgs> for IconSelection {
    fn from(args: IconArgs) -> Self {
        Self {
            token: args.token,
            wallet: args.wallet,
            system: args.system,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("{} {e:#}", "Error:".red());
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(command: Commands) -> Result<()> {
    let project_root = std::env::current_dir()?;

    match command {
        Commands::Init { dir, framework } => {
            commands::init::run(&project_root, &InitOptions { dir, framework })
        }
        Commands::Config {
            dir,
            image_path,
            dark_mode_class,
            reset,
        } => commands::config::run(
            &project_root,
            &ConfigOptions {
                dir,
                image_path,
                dark_mode_class,
                reset,
            },
        ),
        Commands::Add { icons, dir } => commands::add::run(
            &project_root,
            &EditOptions {
                selection: icons.into(),
                dir,
            },
        ),
        Commands::Remove { icons, dir } => commands::remove::run(
            &project_root,
            &EditOptions {
                selection: icons.into(),
                dir,
            },
        ),
        Commands::Update { dir } => commands::update::run(&project_root, &UpdateOptions { dir }),
    }
}
