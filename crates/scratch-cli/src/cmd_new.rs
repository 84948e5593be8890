// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `scratch new` command.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use colored::Colorize;
use miette::Result;
use scratch::{Spec, SpecType};

/// Create and provision a new environment
#[derive(Debug, Args)]
pub struct CmdNew {
    /// Name for the new environment
    name: String,

    /// Environment type to provision
    #[clap(short = 't', long = "type", default_value = "python")]
    spec_type: String,

    /// Directory to create the environment under, instead of the default
    /// data directory
    #[clap(short = 'd', long = "dir")]
    dir: Option<PathBuf>,

    /// Program used to open the environment folder once created
    #[clap(long, default_value = "code")]
    open: String,

    /// Do not open the environment folder after creation
    #[clap(long)]
    no_open: bool,
}

impl CmdNew {
    pub fn run(&mut self) -> Result<i32> {
        if self.name.trim().is_empty() {
            return Err(
                scratch::Error::ValidationFailed("Environment name must not be empty".to_string())
                    .into(),
            );
        }
        let spec_type = SpecType::from_str(&self.spec_type)?;

        let base_dir = match &self.dir {
            Some(dir) => std::path::absolute(dir)
                .map_err(|e| miette::miette!("Cannot resolve directory {:?}: {}", dir, e))?,
            None => scratch::paths::data_dir()?,
        };

        let spec = Spec::new(self.name.clone(), spec_type, &base_dir);
        let registry = crate::open_registry()?;
        registry.create(&spec)?;

        println!(
            "Created environment {} at {}",
            spec.id().green().bold(),
            spec.path.display()
        );

        if !self.no_open {
            // Opening the folder is best-effort; the environment is already
            // created and registered.
            if let Err(err) = scratch::process::open_folder(&self.open, &spec.path) {
                tracing::warn!("Could not open the environment folder: {err}");
            }
        }

        Ok(0)
    }
}
