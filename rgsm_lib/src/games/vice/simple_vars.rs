//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The simple variables of a GTA Vice City save: the loose globals the game dumps at the
//! start of the first block.
//!
//! Only the PC layouts are known: 0xE4 bytes on retail, 0xE8 on Steam, whose executable
//! slips a fixed marker after the camera position.

use getset::{CopyGetters, Getters, Setters};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::format::SaveParams;
use crate::games::types::{SystemTime, Vector3d};
use crate::save::{self, SaveData};

use super::SIZE_OF_ONE_GAME;

/// Character units of the fixed field holding the save name.
pub const NAME_LENGTH: usize = 24;

/// Amount of entries in the radio station position list.
pub const RADIO_STATION_COUNT: usize = 10;

/// Value of the marker the Steam executable writes after the camera position.
pub const STEAM_MARKER: i32 = 0x3DF5C2FD;

const SIZE_PC: u64 = 0xE4;
const SIZE_PC_STEAM: u64 = 0xE8;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// The loose global state of a GTA Vice City save.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters, Setters)]
pub struct SimpleVariables {

    /// Name shown in the save slot.
    #[getset(get = "pub", set = "pub")]
    save_name: String,

    #[getset(get_copy = "pub", set = "pub")]
    time_last_saved: SystemTime,

    #[getset(get_copy = "pub", set = "pub")]
    curr_level: u32,

    #[getset(get_copy = "pub", set = "pub")]
    camera_position: Vector3d,

    #[getset(get_copy = "pub", set = "pub")]
    milliseconds_per_game_minute: u32,

    #[getset(get_copy = "pub", set = "pub")]
    last_clock_tick: u32,

    #[getset(get_copy = "pub", set = "pub")]
    game_clock_hours: u8,

    #[getset(get_copy = "pub", set = "pub")]
    game_clock_minutes: u8,

    #[getset(get_copy = "pub", set = "pub")]
    curr_pad_mode: i16,

    #[getset(get_copy = "pub", set = "pub")]
    time_in_milliseconds: u32,

    #[getset(get_copy = "pub", set = "pub")]
    timer_time_scale: f32,

    #[getset(get_copy = "pub", set = "pub")]
    timer_time_step: f32,

    #[getset(get_copy = "pub", set = "pub")]
    timer_time_step_non_clipped: f32,

    #[getset(get_copy = "pub", set = "pub")]
    frame_counter: u32,

    #[getset(get_copy = "pub", set = "pub")]
    time_step: f32,

    #[getset(get_copy = "pub", set = "pub")]
    frames_per_update: f32,

    #[getset(get_copy = "pub", set = "pub")]
    time_scale: f32,

    #[getset(get_copy = "pub", set = "pub")]
    old_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    new_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    forced_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    weather_interpolation: f32,

    #[getset(get_copy = "pub", set = "pub")]
    weather_type_in_list: i32,

    #[getset(get_copy = "pub", set = "pub")]
    camera_car_zoom_indicator: f32,

    #[getset(get_copy = "pub", set = "pub")]
    camera_ped_zoom_indicator: f32,

    #[getset(get_copy = "pub", set = "pub")]
    curr_area: i32,

    #[getset(get_copy = "pub", set = "pub")]
    all_taxis_have_nitro: bool,

    #[getset(get_copy = "pub", set = "pub")]
    invert_look4_pad: bool,

    #[getset(get_copy = "pub", set = "pub")]
    extra_colour: i32,

    #[getset(get_copy = "pub", set = "pub")]
    extra_colour_on: bool,

    #[getset(get_copy = "pub", set = "pub")]
    extra_colour_interpolation: f32,

    /// Playback position of each radio station. On encode the list is truncated or padded
    /// with zeros to exactly [`RADIO_STATION_COUNT`] entries.
    #[getset(get = "pub", set = "pub")]
    radio_station_position_list: Vec<i32>,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl Default for SimpleVariables {
    fn default() -> Self {
        Self {
            save_name: String::new(),
            time_last_saved: SystemTime::default(),
            curr_level: 0,
            camera_position: Vector3d::default(),
            milliseconds_per_game_minute: 0,
            last_clock_tick: 0,
            game_clock_hours: 0,
            game_clock_minutes: 0,
            curr_pad_mode: 0,
            time_in_milliseconds: 0,
            timer_time_scale: 0.0,
            timer_time_step: 0.0,
            timer_time_step_non_clipped: 0.0,
            frame_counter: 0,
            time_step: 0.0,
            frames_per_update: 0.0,
            time_scale: 0.0,
            old_weather_type: 0,
            new_weather_type: 0,
            forced_weather_type: 0,
            weather_interpolation: 0.0,
            weather_type_in_list: 0,
            camera_car_zoom_indicator: 0.0,
            camera_ped_zoom_indicator: 0.0,
            curr_area: 0,
            all_taxis_have_nitro: false,
            invert_look4_pad: false,
            extra_colour: 0,
            extra_colour_on: false,
            extra_colour_interpolation: 0.0,
            radio_station_position_list: vec![0; RADIO_STATION_COUNT],
        }
    }
}

impl SaveData for SimpleVariables {

    fn size(&self, params: &SaveParams) -> u64 {
        if params.format().is_steam() {
            SIZE_PC_STEAM
        } else {
            SIZE_PC
        }
    }

    fn decode<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self> {
        let format = params.format();
        let mut vars = Self::default();

        vars.save_name = data.read_string_u16(NAME_LENGTH)?;
        vars.time_last_saved = SystemTime::decode(data, params)?;

        // Save size. Fixed (it doubles as the detection magic), so not worth keeping.
        data.read_i32()?;
        vars.curr_level = data.read_u32()?;
        vars.camera_position = Vector3d::decode(data, params)?;

        if format.is_steam() {
            let marker = data.read_i32()?;
            debug_assert_eq!(marker, STEAM_MARKER);
        }

        vars.milliseconds_per_game_minute = data.read_u32()?;
        vars.last_clock_tick = data.read_u32()?;
        vars.game_clock_hours = data.read_i32()? as u8;
        vars.game_clock_minutes = data.read_i32()? as u8;
        vars.curr_pad_mode = data.read_i16()?;
        data.align(4)?;

        vars.time_in_milliseconds = data.read_u32()?;
        vars.timer_time_scale = data.read_f32()?;
        vars.timer_time_step = data.read_f32()?;
        vars.timer_time_step_non_clipped = data.read_f32()?;
        vars.frame_counter = data.read_u32()?;
        vars.time_step = data.read_f32()?;
        vars.frames_per_update = data.read_f32()?;
        vars.time_scale = data.read_f32()?;
        vars.old_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.new_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.forced_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.weather_interpolation = data.read_f32()?;
        vars.weather_type_in_list = data.read_i32()?;
        vars.camera_car_zoom_indicator = data.read_f32()?;
        vars.camera_ped_zoom_indicator = data.read_f32()?;
        vars.curr_area = data.read_i32()?;
        vars.all_taxis_have_nitro = data.read_bool(1)?;
        data.align(4)?;
        vars.invert_look4_pad = data.read_bool(1)?;
        data.align(4)?;
        vars.extra_colour = data.read_i32()?;
        vars.extra_colour_on = data.read_bool(4)?;
        vars.extra_colour_interpolation = data.read_f32()?;
        vars.radio_station_position_list = save::read_array(data, RADIO_STATION_COUNT, params)?;

        Ok(vars)
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, params: &SaveParams) -> Result<()> {
        let format = params.format();
        let padding = params.padding();

        buffer.write_string_u16(&self.save_name, NAME_LENGTH, true)?;
        self.time_last_saved.encode(buffer, params)?;
        buffer.write_i32(SIZE_OF_ONE_GAME as i32)?;
        buffer.write_u32(self.curr_level)?;
        self.camera_position.encode(buffer, params)?;

        if format.is_steam() {
            buffer.write_i32(STEAM_MARKER)?;
        }

        buffer.write_u32(self.milliseconds_per_game_minute)?;
        buffer.write_u32(self.last_clock_tick)?;
        buffer.write_i32(self.game_clock_hours as i32)?;
        buffer.write_i32(self.game_clock_minutes as i32)?;
        buffer.write_i16(self.curr_pad_mode)?;
        buffer.align(4, padding)?;

        buffer.write_u32(self.time_in_milliseconds)?;
        buffer.write_f32(self.timer_time_scale)?;
        buffer.write_f32(self.timer_time_step)?;
        buffer.write_f32(self.timer_time_step_non_clipped)?;
        buffer.write_u32(self.frame_counter)?;
        buffer.write_f32(self.time_step)?;
        buffer.write_f32(self.frames_per_update)?;
        buffer.write_f32(self.time_scale)?;
        buffer.write_i16(self.old_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_i16(self.new_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_i16(self.forced_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_f32(self.weather_interpolation)?;
        buffer.write_i32(self.weather_type_in_list)?;
        buffer.write_f32(self.camera_car_zoom_indicator)?;
        buffer.write_f32(self.camera_ped_zoom_indicator)?;
        buffer.write_i32(self.curr_area)?;
        buffer.write_bool(self.all_taxis_have_nitro, 1)?;
        buffer.align(4, padding)?;
        buffer.write_bool(self.invert_look4_pad, 1)?;
        buffer.align(4, padding)?;
        buffer.write_i32(self.extra_colour)?;
        buffer.write_bool(self.extra_colour_on, 4)?;
        buffer.write_f32(self.extra_colour_interpolation)?;
        save::write_array(buffer, &self.radio_station_position_list, RADIO_STATION_COUNT, params)
    }
}
