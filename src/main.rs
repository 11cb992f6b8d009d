//! subnote - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use git2::Repository;
use tracing_subscriber::EnvFilter;

use subnote::config::HookConfig;
use subnote::hook::{CommitContext, MessageSource, run_hook};
use subnote::install::install_hook;

/// Record submodule changes in commit messages.
#[derive(Parser, Debug)]
#[command(name = "subnote")]
#[command(about = "A prepare-commit-msg hook that records submodule changes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run as the prepare-commit-msg hook (invoked by git)
    Hook {
        /// File holding the draft commit message
        message_file: PathBuf,

        /// Source of the draft (message, template, merge, squash, commit)
        source: Option<String>,

        /// Commit being amended when the source is "commit"
        commit: Option<String>,
    },

    /// Install the hook into the current repository's .git/hooks
    Install {
        /// Overwrite an existing prepare-commit-msg hook
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // A hook's stdout belongs to git; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Hook {
            message_file,
            source,
            commit,
        } => {
            let repo = Repository::open_from_env()
                .context("Not a git repository. subnote must be invoked by git as a hook.")?;

            let ctx = CommitContext {
                message_file,
                source: source.as_deref().and_then(MessageSource::parse),
                commit_ref: commit,
            };
            let config = HookConfig::from_env();

            run_hook(&repo, &ctx, &config)
                .context("Failed to update the commit message")?;
        }

        Command::Install { force } => {
            let repo = Repository::discover(".")
                .context("Not a git repository. Run subnote install from within a git repository.")?;

            let hook_path = install_hook(&repo, force)?;
            println!("Installed prepare-commit-msg hook at {}", hook_path.display());
        }
    }

    Ok(())
}
