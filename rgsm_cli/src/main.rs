//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

// This is the CLI version of RGSM.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use simplelog::{ColorChoice, CombinedLogger, LevelFilter, SimpleLogger, TerminalMode, TermLogger, WriteLogger};

use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

mod commands;

const PROGRAM_NAME: &str = "Rusted Game Save Manager - CLI Version";

//---------------------------------------------------------------------------//
//                          CLI Definition
//---------------------------------------------------------------------------//

#[derive(Parser)]
#[command(name = PROGRAM_NAME, version, author, about = "CLI Version of RGSM. Ready to automate the most boring parts of your save wrangling.")]
struct Cli {

    /// Print information about every step of the process.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {

    /// Identify the game and release a save file belongs to.
    Detect {

        /// Path of the save to identify.
        file: PathBuf,
    },

    /// Print the contents of a save file: format, slot name and section sizes.
    Info {

        /// Path of the save to inspect.
        file: PathBuf,
    },

    /// Load a save file and write it back out, regenerating padding and checksum.
    Resave {

        /// Path of the save to load.
        input: PathBuf,

        /// Path to write the new save to.
        output: PathBuf,
    },
}

//---------------------------------------------------------------------------//
//                          Main loop
//---------------------------------------------------------------------------//

fn main() {

    // In Release Builds, initialize the logger so we get messages in the terminal and
    // recorded to disk.
    if !cfg!(debug_assertions) {
        if CombinedLogger::init(
            vec![
                TermLogger::new(LevelFilter::Info, simplelog::Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(LevelFilter::Info, simplelog::Config::default(), File::create("rgsm_cli.log").unwrap()),
            ]
        ).is_err() {
            eprintln!("Logger initialization failed. The program will work, but it may not log properly.");
        }
    }

    // Simplelog's terminal logger does not work properly with custom terminals, like the
    // one in Sublime Text. So, for debug builds, we use the plain one instead.
    else if SimpleLogger::init(LevelFilter::Info, simplelog::Config::default()).is_err() {
        eprintln!("Logger initialization failed. The program will work, but it may not log properly.");
    }

    let cli = Cli::parse();
    let result: Result<()> = match cli.command {
        Commands::Detect { file } => commands::detect(cli.verbose, &file),
        Commands::Info { file } => commands::info(cli.verbose, &file),
        Commands::Resave { input, output } => commands::resave(cli.verbose, &input, &output),
    };

    if let Err(error) = result {
        error!("{error}");
        exit(1);
    }
}
