//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the support for GTA III saves.
//!
//! A GTA III save is 20 blocks in a fixed order, padded to a fixed total of game data and
//! closed by the checksum trailer. The first block holds the [`SimpleVariables`] followed
//! by the script section; the car generators block is fully modelled, and the rest are
//! kept as opaque [`Dummy`] payloads so saves round-trip byte-identical.
//!
//! Format detection follows the game's own layout quirks: the position of the file id and
//! the `SCR\0` script tag identify the platform family, and the size of the second block
//! disambiguates the releases that share those positions.

use getset::{Getters, MutGetters, Setters};
use log::warn;
use memchr::memmem;

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

use crate::binary::{ReadBytes, WriteBytes};
use crate::container::{BlockReader, BlockWriter, TRAILER_SIZE};
use crate::error::{Result, RgsmError};
use crate::format::{SaveFormat, SaveParams};
use crate::save::{Dummy, SaveData};

pub use self::car_generator::{CarGenerator, CarGeneratorData, MAX_CAR_GENERATORS};
pub use self::simple_vars::SimpleVariables;

pub mod car_generator;
pub mod simple_vars;

#[cfg(test)] mod gta3_test;

/// Amount of game data bytes in one save, padding included, trailer excluded.
pub const SIZE_OF_ONE_GAME: u64 = 201729;

/// File id the game looks for on load. The japanese release uses its own.
pub const FILE_ID: u32 = 0x31401;
pub const FILE_ID_JP: u32 = 0x31400;

/// Names of the game sections, in the order their blocks appear in the file. The first two
/// share a block.
pub const SECTIONS: [&str; 21] = [
    "SimpleVars",
    "Scripts",
    "PedPool",
    "Garages",
    "VehiclePool",
    "ObjectPool",
    "Paths",
    "Cranes",
    "Pickups",
    "PhoneInfo",
    "RestartPoints",
    "RadarBlips",
    "Zones",
    "Gangs",
    "CarGenerators",
    "ParticleObjects",
    "AudioScriptObjects",
    "PlayerInfo",
    "Stats",
    "Streaming",
    "PedTypeInfo",
];

const BUFFER_SIZE: usize = 55000;
const BUFFER_SIZE_PS2: usize = 50000;

/// Named formats of all the GTA III releases we can tell apart.
pub mod formats {
    use crate::format::{Platform, RegionFlags, SaveFormat};

    pub const PC: SaveFormat = SaveFormat::new(Platform::Pc, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    pub const PS2_NAEU: SaveFormat = SaveFormat::new(Platform::Ps2, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    pub const PS2_AU: SaveFormat = SaveFormat::new(Platform::Ps2, RegionFlags::AUSTRALIA);
    pub const PS2_JP: SaveFormat = SaveFormat::new(Platform::Ps2, RegionFlags::JAPAN);
    pub const XBOX: SaveFormat = SaveFormat::new(Platform::Xbox, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    pub const ANDROID: SaveFormat = SaveFormat::new(Platform::Android, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    pub const IOS: SaveFormat = SaveFormat::new(Platform::Ios, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
}

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// A full GTA III save.
#[derive(Clone, Debug, Default, PartialEq, Getters, MutGetters, Setters)]
#[getset(get = "pub", get_mut = "pub", set = "pub")]
pub struct Gta3Save {
    simple_vars: SimpleVariables,
    scripts: Dummy,
    ped_pool: Dummy,
    garages: Dummy,
    vehicle_pool: Dummy,
    object_pool: Dummy,
    paths: Dummy,
    cranes: Dummy,
    pickups: Dummy,
    phone_info: Dummy,
    restart_points: Dummy,
    radar_blips: Dummy,
    zones: Dummy,
    gangs: Dummy,
    car_generators: CarGeneratorData,
    particle_objects: Dummy,
    audio_script_objects: Dummy,
    player_info: Dummy,
    stats: Dummy,
    streaming: Dummy,
    ped_type_info: Dummy,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl Gta3Save {

    /// This function returns the work buffer size the game uses on the provided platform.
    pub fn buffer_size(format: &SaveFormat) -> usize {
        if format.is_ps2() {
            BUFFER_SIZE_PS2
        } else {
            BUFFER_SIZE
        }
    }

    /// This function tries to identify which GTA III release the provided save belongs to.
    ///
    /// It works the same way the game does: scan for the file id and the `SCR\0` script
    /// tag, whose positions depend on the layout of the first block, then disambiguate
    /// overlapping layouts by the size of the second block. Truncated or garbage data
    /// fails with [`RgsmError::FormatNotRecognized`].
    pub fn detect_format(data: &[u8]) -> Result<SaveFormat> {
        // The japanese release has its own file id, so the regular one may be missing.
        let file_id = memmem::find(data, &FILE_ID.to_le_bytes());
        let file_id_jp = memmem::find(data, &FILE_ID_JP.to_le_bytes());
        let scr = memmem::find(data, b"SCR\0").ok_or(RgsmError::FormatNotRecognized)?;

        // Size of the second block. Blocks can't be trusted yet at this point, so any
        // read failure just means we can't recognize the data.
        let mut cursor = Cursor::new(data);
        let block_1_size = Self::second_block_size(&mut cursor).map_err(|_| RgsmError::FormatNotRecognized)?;

        if scr == 0xB0 && file_id == Some(0x04) {
            return Ok(formats::PS2_AU);
        }

        if scr == 0xB8 {
            if file_id_jp == Some(0x04) {
                return Ok(formats::PS2_JP);
            }

            if file_id == Some(0x04) {
                return Ok(formats::PS2_NAEU);
            }

            if file_id == Some(0x34) {
                return match block_1_size {
                    0x648 => Ok(formats::IOS),
                    0x64C => Ok(formats::ANDROID),
                    _ => Err(RgsmError::FormatNotRecognized),
                };
            }
        }

        if scr == 0xC4 && file_id == Some(0x44) {
            return match block_1_size {
                0x624 => Ok(formats::PC),
                0x628 => Ok(formats::XBOX),
                _ => Err(RgsmError::FormatNotRecognized),
            };
        }

        Err(RgsmError::FormatNotRecognized)
    }

    /// This function tries to read a full save from the provided data.
    pub fn read<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self> {
        let mut reader = BlockReader::new(data, Self::buffer_size(params.format()), params);

        // The first block holds the simple vars and the script section back to back. The
        // simple vars go unprefixed; the scripts carry their own length prefix like every
        // other object.
        let payload = reader.read_block()?;
        let mut cursor = Cursor::new(payload.as_slice());
        let simple_vars = SimpleVariables::decode(&mut cursor, params)?;
        let scripts_size = cursor.read_u32()? as usize;
        let scripts = Dummy::decode(&mut cursor, scripts_size)?;

        let ped_pool = reader.read_dummy()?;
        let garages = reader.read_dummy()?;
        let vehicle_pool = reader.read_dummy()?;
        let object_pool = reader.read_dummy()?;
        let paths = reader.read_dummy()?;
        let cranes = reader.read_dummy()?;
        let pickups = reader.read_dummy()?;
        let phone_info = reader.read_dummy()?;
        let restart_points = reader.read_dummy()?;
        let radar_blips = reader.read_dummy()?;
        let zones = reader.read_dummy()?;
        let gangs = reader.read_dummy()?;
        let car_generators = reader.read_object(params)?;
        let particle_objects = reader.read_dummy()?;
        let audio_script_objects = reader.read_dummy()?;
        let player_info = reader.read_dummy()?;
        let stats = reader.read_dummy()?;
        let streaming = reader.read_dummy()?;
        let ped_type_info = reader.read_dummy()?;

        // Consume the tail padding blocks, then the trailer. The game never verifies the
        // checksum on load, and neither do we.
        while reader.remaining()? > TRAILER_SIZE {
            reader.read_block()?;
        }

        // The game data total is fixed per title, low bit masked off because the nominal
        // size is odd. The game loads mismatching files fine, so it's only worth a warning.
        let expected = SIZE_OF_ONE_GAME & !1;
        if reader.payload_total() != expected {
            warn!("Unexpected amount of game data in the save: {} bytes, expected {}.", reader.payload_total(), expected);
        }

        reader.read_trailer()?;

        Ok(Self {
            simple_vars,
            scripts,
            ped_pool,
            garages,
            vehicle_pool,
            object_pool,
            paths,
            cranes,
            pickups,
            phone_info,
            restart_points,
            radar_blips,
            zones,
            gangs,
            car_generators,
            particle_objects,
            audio_script_objects,
            player_info,
            stats,
            streaming,
            ped_type_info,
        })
    }

    /// This function writes a full save to the provided destination, tail padding and
    /// checksum trailer included, and returns the amount of bytes written.
    pub fn write<W: WriteBytes>(&self, file: &mut W, params: &SaveParams) -> Result<u64> {
        let mut writer = BlockWriter::new(file, Self::buffer_size(params.format()), params);

        let mut first_block = Cursor::new(vec![]);
        self.simple_vars.encode(&mut first_block, params)?;
        first_block.write_u32(self.scripts.size() as u32)?;
        self.scripts.encode(&mut first_block)?;
        WriteBytes::align(&mut first_block, 4, params.padding())?;
        writer.write_block(&first_block.into_inner())?;

        writer.write_dummy(&self.ped_pool)?;
        writer.write_dummy(&self.garages)?;
        writer.write_dummy(&self.vehicle_pool)?;
        writer.write_dummy(&self.object_pool)?;
        writer.write_dummy(&self.paths)?;
        writer.write_dummy(&self.cranes)?;
        writer.write_dummy(&self.pickups)?;
        writer.write_dummy(&self.phone_info)?;
        writer.write_dummy(&self.restart_points)?;
        writer.write_dummy(&self.radar_blips)?;
        writer.write_dummy(&self.zones)?;
        writer.write_dummy(&self.gangs)?;
        writer.write_object(&self.car_generators, params)?;
        writer.write_dummy(&self.particle_objects)?;
        writer.write_dummy(&self.audio_script_objects)?;
        writer.write_dummy(&self.player_info)?;
        writer.write_dummy(&self.stats)?;
        writer.write_dummy(&self.streaming)?;
        writer.write_dummy(&self.ped_type_info)?;

        writer.pad_to_size(SIZE_OF_ONE_GAME, params.padding())?;
        writer.finish()
    }

    /// This function loads a save from disk, detecting its format on the way.
    pub fn load(path: &Path) -> Result<(Self, SaveParams)> {
        let data = std::fs::read(path)?;
        let format = Self::detect_format(&data)?;
        let params = SaveParams::new(format);
        let save = Self::read(&mut Cursor::new(data.as_slice()), &params)?;

        Ok((save, params))
    }

    /// This function writes a save to disk.
    pub fn save(&self, path: &Path, params: &SaveParams) -> Result<u64> {
        let mut file = BufWriter::new(File::create(path)?);
        let written = self.write(&mut file, params)?;
        file.flush()?;

        Ok(written)
    }

    /// This function returns the name and payload size of every section of this save, in
    /// block order.
    pub fn sections(&self, params: &SaveParams) -> Vec<(&'static str, u64)> {
        vec![
            (SECTIONS[0], self.simple_vars.size(params)),
            (SECTIONS[1], self.scripts.size()),
            (SECTIONS[2], self.ped_pool.size()),
            (SECTIONS[3], self.garages.size()),
            (SECTIONS[4], self.vehicle_pool.size()),
            (SECTIONS[5], self.object_pool.size()),
            (SECTIONS[6], self.paths.size()),
            (SECTIONS[7], self.cranes.size()),
            (SECTIONS[8], self.pickups.size()),
            (SECTIONS[9], self.phone_info.size()),
            (SECTIONS[10], self.restart_points.size()),
            (SECTIONS[11], self.radar_blips.size()),
            (SECTIONS[12], self.zones.size()),
            (SECTIONS[13], self.gangs.size()),
            (SECTIONS[14], self.car_generators.size(params)),
            (SECTIONS[15], self.particle_objects.size()),
            (SECTIONS[16], self.audio_script_objects.size()),
            (SECTIONS[17], self.player_info.size()),
            (SECTIONS[18], self.stats.size()),
            (SECTIONS[19], self.streaming.size()),
            (SECTIONS[20], self.ped_type_info.size()),
        ]
    }

    /// Size of the block after the first one, used to disambiguate releases.
    fn second_block_size<R: ReadBytes>(data: &mut R) -> Result<u32> {
        let first_block_size = data.read_u32()?;
        data.skip(first_block_size as i64)?;
        data.read_u32()
    }
}
