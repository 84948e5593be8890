// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Interactive yes/no confirmation on standard input.

use std::io::{BufRead, Write};

#[cfg(test)]
#[path = "./prompt_test.rs"]
mod prompt_test;

/// One parsed confirmation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Unrecognized,
}

/// Interpret one line of user input.
pub fn parse_answer(line: &str) -> Answer {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Answer::Yes,
        "n" | "no" => Answer::No,
        _ => Answer::Unrecognized,
    }
}

/// Ask `question` on standard output and read lines from standard input
/// until one parses as yes or no.
///
/// Fails when stdin closes before a recognized answer arrives.
pub fn confirm(question: &str) -> scratch::Result<bool> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{question} [y/n]: ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "stdin closed before an answer was given",
            )
            .into());
        };
        match parse_answer(&line?) {
            Answer::Yes => return Ok(true),
            Answer::No => return Ok(false),
            Answer::Unrecognized => println!("Please answer 'y' or 'n'"),
        }
    }
}
