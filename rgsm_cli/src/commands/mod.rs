//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the command functions of the tool.
//!
//! All commands work on "whatever save you throw at them": the file gets probed against
//! every supported game, in release order, and the first one that recognizes it wins.

use anyhow::{anyhow, Result};
use log::info;

use std::io::Cursor;
use std::path::Path;

use rgsm_lib::format::SaveParams;
use rgsm_lib::games::gta3::Gta3Save;
use rgsm_lib::games::types::SystemTime;
use rgsm_lib::games::vice::ViceCitySave;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// A save of any of the supported games, paired with its detected params.
enum AnySave {
    Gta3(Gta3Save, SaveParams),
    ViceCity(ViceCitySave, SaveParams),
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl AnySave {

    /// This function tries to load the provided file as a save of each supported game.
    fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;

        if let Ok(format) = Gta3Save::detect_format(&data) {
            let params = SaveParams::new(format);
            let save = Gta3Save::read(&mut Cursor::new(data.as_slice()), &params)?;
            return Ok(Self::Gta3(save, params));
        }

        if let Ok(format) = ViceCitySave::detect_format(&data) {
            let params = SaveParams::new(format);
            let save = ViceCitySave::read(&mut Cursor::new(data.as_slice()), &params)?;
            return Ok(Self::ViceCity(save, params));
        }

        Err(anyhow!("File not recognized as a save of any supported game: {}.", path.to_string_lossy()))
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Gta3(_, _) => "GTA III",
            Self::ViceCity(_, _) => "GTA Vice City",
        }
    }

    fn params(&self) -> &SaveParams {
        match self {
            Self::Gta3(_, params) |
            Self::ViceCity(_, params) => params,
        }
    }

    /// Name shown in the save slot. GTA III reuses the last mission passed for it.
    fn slot_name(&self) -> &str {
        match self {
            Self::Gta3(save, _) => save.simple_vars().last_mission_passed_name(),
            Self::ViceCity(save, _) => save.simple_vars().save_name(),
        }
    }

    /// Timestamp of the save. Only the PC and Xbox releases store one.
    fn time_last_saved(&self) -> Option<SystemTime> {
        let time = match self {
            Self::Gta3(save, _) => save.simple_vars().save_time(),
            Self::ViceCity(save, _) => save.simple_vars().time_last_saved(),
        };

        if time.year() == 0 { None } else { Some(time) }
    }

    fn sections(&self) -> Vec<(&'static str, u64)> {
        match self {
            Self::Gta3(save, params) => save.sections(params),
            Self::ViceCity(save, params) => save.sections(params),
        }
    }
}

//---------------------------------------------------------------------------//
//                           Command Variants
//---------------------------------------------------------------------------//

/// This function identifies which game and release the provided save belongs to.
pub fn detect(verbose: bool, path: &Path) -> Result<()> {
    if verbose {
        info!("Detecting the format of the save at {}.", path.to_string_lossy());
    }

    // Detection only needs the raw bytes, so don't bother parsing the blocks.
    let data = std::fs::read(path)?;

    if let Ok(format) = Gta3Save::detect_format(&data) {
        println!("GTA III - {format}");
        return Ok(());
    }

    if let Ok(format) = ViceCitySave::detect_format(&data) {
        println!("GTA Vice City - {format}");
        return Ok(());
    }

    Err(anyhow!("File not recognized as a save of any supported game: {}.", path.to_string_lossy()))
}

/// This function prints the contents of the provided save: game, format, slot name,
/// timestamp and the size of every section.
pub fn info(verbose: bool, path: &Path) -> Result<()> {
    if verbose {
        info!("Loading the save at {}.", path.to_string_lossy());
    }

    let save = AnySave::load(path)?;

    println!("Game: {}", save.title());
    println!("Format: {}", save.params().format());
    println!("Name: {}", save.slot_name());

    if let Some(time) = save.time_last_saved() {
        println!("Saved: {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            time.year(), time.month(), time.day(), time.hour(), time.minute(), time.second());
    }

    println!("Sections:");
    for (name, size) in save.sections() {
        println!("  {name}: {size} bytes");
    }

    Ok(())
}

/// This function loads the provided save and writes it back out to a new path, with the
/// tail padding and checksum trailer regenerated.
pub fn resave(verbose: bool, input: &Path, output: &Path) -> Result<()> {
    if verbose {
        info!("Resaving {} to {}.", input.to_string_lossy(), output.to_string_lossy());
    }

    let save = AnySave::load(input)?;
    let written = match &save {
        AnySave::Gta3(save, params) => save.save(output, params)?,
        AnySave::ViceCity(save, params) => save.save(output, params)?,
    };

    if verbose {
        info!("Written {written} bytes as a {} save.", save.title());
    }

    Ok(())
}
