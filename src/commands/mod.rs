//! Command implementations for the `crypto-next-icons` CLI.
//!
//! Every command takes the project root explicitly instead of reading the
//! working directory, so the same code runs against a temporary project in
//! tests.

/// Icon additions: `crypto-next-icons add`.
pub mod add;

/// Settings management: `crypto-next-icons config`.
///
/// Direct flag updates, `--reset`, or an interactive prompt.
pub mod config;

/// Project scaffolding: `crypto-next-icons init`.
pub mod init;

/// Icon removals: `crypto-next-icons remove`.
pub mod remove;

/// Switch the image helpers to the hosted image CDN: `crypto-next-icons update`.
pub mod update;

use crate::category::Category;
use crate::next_config::RemotePatternOutcome;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Icon names requested per category, in command-line order
#[derive(Debug, Clone, Default)]
pub struct IconSelection {
    pub token: Vec<String>,
    pub wallet: Vec<String>,
    pub system: Vec<String>,
}

impl IconSelection {
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.wallet.is_empty() && self.system.is_empty()
    }

    /// Non-empty categories in group order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        [
            (Category::Token, self.token.as_slice()),
            (Category::Wallet, self.wallet.as_slice()),
            (Category::System, self.system.as_slice()),
        ]
        .into_iter()
        .filter(|(_, names)| !names.is_empty())
    }
}

/// Options shared by `add` and `remove`
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub selection: IconSelection,
    pub dir: Option<PathBuf>,
}

/// `path` relative to the project root when it lies inside it
pub(crate) fn display_path(project_root: &Path, path: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

pub(crate) fn print_usage(verb: &str) {
    println!("Usage examples:");
    println!("{}", format!("  crypto-next-icons {verb} --token BTC ETH").dimmed());
    println!(
        "{}",
        format!("  crypto-next-icons {verb} --wallet MetaMask TrustWallet").dimmed()
    );
    println!(
        "{}",
        format!("  crypto-next-icons {verb} --system Ethereum Polygon").dimmed()
    );
}

pub(crate) fn report_remote_pattern(project_root: &Path, outcome: &RemotePatternOutcome) {
    match outcome {
        RemotePatternOutcome::Created(path) => println!(
            "{} Created {} with the image host in images.remotePatterns",
            "✓".green(),
            display_path(project_root, path).cyan()
        ),
        RemotePatternOutcome::AlreadyPresent(path) => println!(
            "{} Image host already present in {}",
            "·".dimmed(),
            display_path(project_root, path)
        ),
        RemotePatternOutcome::Patched(path) => println!(
            "{} Added the image host to images.remotePatterns in {}",
            "✓".green(),
            display_path(project_root, path).cyan()
        ),
        RemotePatternOutcome::ManualInstructions { path, snippet } => {
            println!(
                "{} Could not update {} automatically. Add this to images.remotePatterns:",
                "!".yellow(),
                display_path(project_root, path)
            );
            println!("  {}", snippet.dimmed());
        }
    }
}
