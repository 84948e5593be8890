// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `scratch list` command.

use clap::Args;
use colored::Colorize;
use miette::Result;

/// List registered environments
#[derive(Debug, Args)]
pub struct CmdList {
    /// Print bare environment directories, one per line
    #[clap(short = 'd', long)]
    directories: bool,
}

impl CmdList {
    pub fn run(&mut self) -> Result<i32> {
        let registry = crate::open_registry()?;
        let entries = registry.list()?;

        // Entries whose directory has gone missing are warned about by the
        // listing itself and skipped here.
        if self.directories {
            for entry in entries.iter().filter(|entry| entry.on_disk) {
                println!("{}", entry.spec.path.display());
            }
            return Ok(0);
        }

        if entries.is_empty() {
            println!("No environments registered");
            return Ok(0);
        }

        for entry in entries.iter().filter(|entry| entry.on_disk) {
            println!(
                "{} ({}) - {}",
                entry.spec.name.bold(),
                entry.spec.spec_type.to_string().cyan(),
                entry.spec.path.display().to_string().dimmed()
            );
        }

        Ok(0)
    }
}
