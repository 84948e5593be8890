// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `scratch delete` command.

use std::str::FromStr;

use clap::Args;
use miette::Result;
use scratch::{DeleteOutcome, Spec, SpecType, spec_id};

use crate::prompt;

#[cfg(test)]
#[path = "./cmd_delete_test.rs"]
mod cmd_delete_test;

/// Delete environments and their directories
#[derive(Debug, Args)]
pub struct CmdDelete {
    /// Full identifier (type:name) of the environment to delete
    #[clap(long)]
    id: Option<String>,

    /// Name of the environment to delete
    #[clap(short = 'n', long)]
    name: Option<String>,

    /// Environment type the named environment was created with
    #[clap(short = 't', long = "type", default_value = "python")]
    spec_type: String,

    /// Delete every registered environment
    #[clap(long)]
    all: bool,

    /// Skip confirmation prompts
    #[clap(short = 'f', long)]
    force: bool,
}

/// What one invocation has been asked to delete.
#[derive(Debug, PartialEq, Eq)]
enum Target {
    All,
    Key(String),
}

impl CmdDelete {
    pub fn run(&mut self) -> Result<i32> {
        // Flag validation happens before the registry is even opened.
        let target = self.target()?;
        let registry = crate::open_registry()?;

        let force = self.force;
        let confirm = move |spec: &Spec| {
            if force {
                return Ok(true);
            }
            prompt::confirm(&format!("Delete {spec}?"))
        };

        match target {
            Target::All => registry.delete_all(confirm)?,
            Target::Key(key) => match registry.delete(&key, confirm)? {
                DeleteOutcome::Deleted => println!("Deleted {key}"),
                DeleteOutcome::Declined => {}
            },
        }

        Ok(0)
    }

    /// Resolve the flag combination into a single delete target.
    ///
    /// Exactly one of `--id`, `--name`, or `--all` must be given.
    fn target(&self) -> scratch::Result<Target> {
        if self.all {
            if self.id.is_some() || self.name.is_some() {
                return Err(scratch::Error::ValidationFailed(
                    "Cannot combine --all with --id or --name".to_string(),
                ));
            }
            return Ok(Target::All);
        }
        match (&self.id, &self.name) {
            (Some(_), Some(_)) => Err(scratch::Error::ValidationFailed(
                "Specify either --id or --name, not both".to_string(),
            )),
            (Some(id), None) => Ok(Target::Key(id.clone())),
            (None, Some(name)) => {
                let spec_type = SpecType::from_str(&self.spec_type)?;
                Ok(Target::Key(spec_id(spec_type, name)))
            }
            (None, None) => Err(scratch::Error::ValidationFailed(
                "Specify --id, --name, or --all".to_string(),
            )),
        }
    }
}
