// Copyright (c) Contributors to the langmeta project.
// SPDX-License-Identifier: Apache-2.0

//! langmeta - Static Language Ecosystem Profile CLI

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_show;

use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "langmeta",
    about = "Static Language Ecosystem Profile",
    version,
    long_about = "Print the tooling and conventions profile of the Python ecosystem"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Option<Command>,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Display the language profile (the default)
    Show(CmdShow),
}

impl Opt {
    fn run(self) -> Result<i32> {
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        // stdout carries the rendered profile only
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        match self.cmd {
            Some(Command::Show(mut cmd)) => cmd.run(),
            None => CmdShow::default().run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
