// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! scratch - disposable development environment manager CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_delete;
mod cmd_list;
mod cmd_new;
mod prompt;

use cmd_delete::CmdDelete;
use cmd_list::CmdList;
use cmd_new::CmdNew;

#[derive(Parser)]
#[clap(
    name = "scratch",
    about = "Disposable local development environments",
    version,
    long_about = "Create, list, and delete named throwaway development environments"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Create and provision a new environment
    New(CmdNew),

    /// List registered environments
    List(CmdList),

    /// Delete environments and their directories
    Delete(CmdDelete),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::New(mut cmd) => cmd.run(),
            Command::List(mut cmd) => cmd.run(),
            Command::Delete(mut cmd) => cmd.run(),
        }
    }
}

/// Open the registry database under the user's config directory.
fn open_registry() -> Result<scratch::Registry<scratch::SqliteStore>> {
    let db_path = scratch::paths::config_dir()?.join(scratch::REGISTRY_FILENAME);
    let store = scratch::SqliteStore::open(db_path)?;
    Ok(scratch::Registry::new(store))
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
