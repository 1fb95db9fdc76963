//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The car generators of a GTA III save: the parked cars the game spawns at fixed spots.
//!
//! The save always carries the full fixed-capacity array of generators, used or not, so
//! this block has the same size on every platform: a `CGN` tagged header, a 12-byte info
//! section, and 160 slots of 72 bytes each.

use getset::{CopyGetters, Getters, MutGetters, Setters};

use crate::binary::{ReadBytes, WriteBytes};
use crate::container::{self, TAG_HEADER_SIZE};
use crate::error::Result;
use crate::format::SaveParams;
use crate::games::types::Vector3d;
use crate::save::{self, SaveData};

/// Amount of car generator slots in a save.
pub const MAX_CAR_GENERATORS: usize = 160;

const TAG: &str = "CGN";
const INFO_SIZE: u32 = 12;
const ARRAY_SIZE: u32 = 0x2D00;
const TOTAL_SIZE: u64 = 0x2D1C;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// A single parked car spawn point.
#[derive(Clone, Copy, Debug, Default, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct CarGenerator {
    model: i32,
    position: Vector3d,
    angle: f32,
    color_1: i16,
    color_2: i16,
    force_spawn: bool,
    alarm_chance: u8,
    door_lock_chance: u8,
    min_delay: u16,
    max_delay: u16,
    timer: u32,
    vehicle_handle: i32,
    uses_remaining: i16,
    is_blocking: bool,
    vec_inf: Vector3d,
    vec_sup: Vector3d,
    area_size: f32,
}

/// The car generators block of a save.
#[derive(Clone, Debug, PartialEq, Getters, MutGetters, CopyGetters, Setters)]
pub struct CarGeneratorData {

    /// Amount of slots the game considers in use. Not necessarily the amount of
    /// non-default slots in the array.
    #[getset(get_copy = "pub", set = "pub")]
    number_of_car_generators: i32,

    #[getset(get_copy = "pub", set = "pub")]
    number_of_enabled_car_generators: i32,

    #[getset(get_copy = "pub", set = "pub")]
    process_counter: u8,

    #[getset(get_copy = "pub", set = "pub")]
    generate_even_if_player_is_close_counter: u8,

    /// The generator slots. On encode the list is truncated or padded with default slots
    /// to exactly [`MAX_CAR_GENERATORS`].
    #[getset(get = "pub", get_mut = "pub", set = "pub")]
    car_generators: Vec<CarGenerator>,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl Default for CarGeneratorData {
    fn default() -> Self {
        Self {
            number_of_car_generators: 0,
            number_of_enabled_car_generators: 0,
            process_counter: 0,
            generate_even_if_player_is_close_counter: 0,
            car_generators: vec![CarGenerator::default(); MAX_CAR_GENERATORS],
        }
    }
}

impl SaveData for CarGenerator {

    fn size(&self, _params: &SaveParams) -> u64 {
        72
    }

    fn decode<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self> {
        let mut generator = Self {
            model: data.read_i32()?,
            position: Vector3d::decode(data, params)?,
            angle: data.read_f32()?,
            color_1: data.read_i16()?,
            color_2: data.read_i16()?,
            force_spawn: data.read_bool(1)?,
            alarm_chance: data.read_u8()?,
            door_lock_chance: data.read_u8()?,
            ..Default::default()
        };
        data.align(4)?;

        generator.min_delay = data.read_u16()?;
        generator.max_delay = data.read_u16()?;
        generator.timer = data.read_u32()?;
        generator.vehicle_handle = data.read_i32()?;
        generator.uses_remaining = data.read_i16()?;
        generator.is_blocking = data.read_bool(1)?;
        data.align(4)?;

        generator.vec_inf = Vector3d::decode(data, params)?;
        generator.vec_sup = Vector3d::decode(data, params)?;
        generator.area_size = data.read_f32()?;

        Ok(generator)
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, params: &SaveParams) -> Result<()> {
        let padding = params.padding();

        buffer.write_i32(self.model)?;
        self.position.encode(buffer, params)?;
        buffer.write_f32(self.angle)?;
        buffer.write_i16(self.color_1)?;
        buffer.write_i16(self.color_2)?;
        buffer.write_bool(self.force_spawn, 1)?;
        buffer.write_u8(self.alarm_chance)?;
        buffer.write_u8(self.door_lock_chance)?;
        buffer.align(4, padding)?;

        buffer.write_u16(self.min_delay)?;
        buffer.write_u16(self.max_delay)?;
        buffer.write_u32(self.timer)?;
        buffer.write_i32(self.vehicle_handle)?;
        buffer.write_i16(self.uses_remaining)?;
        buffer.write_bool(self.is_blocking, 1)?;
        buffer.align(4, padding)?;

        self.vec_inf.encode(buffer, params)?;
        self.vec_sup.encode(buffer, params)?;
        buffer.write_f32(self.area_size)
    }
}

impl SaveData for CarGeneratorData {

    fn size(&self, _params: &SaveParams) -> u64 {
        TOTAL_SIZE
    }

    fn decode<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self> {
        let size = container::read_tag_header(data, TAG)?;
        debug_assert_eq!(size as u64, TOTAL_SIZE - TAG_HEADER_SIZE);

        let info_size = data.read_u32()?;
        debug_assert_eq!(info_size, INFO_SIZE);

        let number_of_car_generators = data.read_i32()?;
        let number_of_enabled_car_generators = data.read_i32()?;
        let process_counter = data.read_u8()?;
        let generate_even_if_player_is_close_counter = data.read_u8()?;
        data.read_i16()?;

        let array_size = data.read_u32()?;
        debug_assert_eq!(array_size, ARRAY_SIZE);

        let car_generators = save::read_array(data, MAX_CAR_GENERATORS, params)?;

        Ok(Self {
            number_of_car_generators,
            number_of_enabled_car_generators,
            process_counter,
            generate_even_if_player_is_close_counter,
            car_generators,
        })
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, params: &SaveParams) -> Result<()> {
        container::write_tag_header(buffer, TAG, (TOTAL_SIZE - TAG_HEADER_SIZE) as u32)?;

        buffer.write_u32(INFO_SIZE)?;
        buffer.write_i32(self.number_of_car_generators)?;
        buffer.write_i32(self.number_of_enabled_car_generators)?;
        buffer.write_u8(self.process_counter)?;
        buffer.write_u8(self.generate_even_if_player_is_close_counter)?;
        buffer.write_i16(0)?;

        buffer.write_u32(ARRAY_SIZE)?;
        save::write_array(buffer, &self.car_generators, MAX_CAR_GENERATORS, params)
    }
}
