//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! The simple variables of a GTA III save: the loose globals the game dumps at the start
//! of the first block.
//!
//! This is the most platform-dependant object of the save. Sizes per release:
//!
//! | Release | Size |
//! | ------- | ---- |
//! | PC, Xbox | 0xBC |
//! | PS2 (NA/EU and JP), Android, iOS | 0xB0 |
//! | PS2 (AU) | 0xA8 |
//!
//! The PS2 releases skip the save name and timestamp but dump the in-game preferences
//! (the console has no other place to keep them), and store the clock fields as whole
//! words. The australian release also drops two of the preference fields.

use getset::{CopyGetters, Getters, Setters};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::format::SaveParams;
use crate::games::types::{Date, SystemTime, Vector3d};
use crate::save::SaveData;

use super::{FILE_ID, FILE_ID_JP};

/// Character units of the fixed field holding the last mission passed name.
pub const NAME_LENGTH: usize = 24;

const SIZE_PC: u64 = 0xBC;
const SIZE_PS2: u64 = 0xB0;
const SIZE_PS2_AU: u64 = 0xA8;
const SIZE_MOBILE: u64 = 0xB0;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// The loose global state of a GTA III save.
#[derive(Clone, Debug, Default, PartialEq, Getters, CopyGetters, Setters)]
pub struct SimpleVariables {

    /// Name shown in the save slot. Not stored on PS2 (the memory card directory carries it).
    #[getset(get = "pub", set = "pub")]
    last_mission_passed_name: String,

    /// Timestamp of the save. Only stored on PC and Xbox.
    #[getset(get_copy = "pub", set = "pub")]
    save_time: SystemTime,

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
    controller_config: i16,

    #[getset(get_copy = "pub", set = "pub")]
    time_in_milliseconds: u32,

    #[getset(get_copy = "pub", set = "pub")]
    time_scale: f32,

    #[getset(get_copy = "pub", set = "pub")]
    time_step: f32,

    #[getset(get_copy = "pub", set = "pub")]
    time_step_non_clipped: f32,

    #[getset(get_copy = "pub", set = "pub")]
    frame_counter: u32,

    #[getset(get_copy = "pub", set = "pub")]
    time_step_2: f32,

    #[getset(get_copy = "pub", set = "pub")]
    frames_per_update: f32,

    #[getset(get_copy = "pub", set = "pub")]
    time_scale_2: f32,

    #[getset(get_copy = "pub", set = "pub")]
    old_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    new_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    forced_weather_type: i16,

    #[getset(get_copy = "pub", set = "pub")]
    weather_interpolation: f32,

    // In-game preferences, stored in the save only on PS2.
    #[getset(get_copy = "pub", set = "pub")]
    prefs_music_volume: i32,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_sfx_volume: i32,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_use_vibration: bool,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_stereo_mono: bool,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_radio_station: i32,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_brightness: i32,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_show_trails: bool,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_show_subtitles: bool,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_language: i32,

    #[getset(get_copy = "pub", set = "pub")]
    prefs_use_wide_screen: bool,

    #[getset(get_copy = "pub", set = "pub")]
    compile_date_and_time: Date,

    #[getset(get_copy = "pub", set = "pub")]
    weather_type_in_list: i32,

    #[getset(get_copy = "pub", set = "pub")]
    in_car_camera_mode: f32,

    #[getset(get_copy = "pub", set = "pub")]
    on_foot_camera_mode: f32,

    /// Only stored on the mobile releases.
    #[getset(get_copy = "pub", set = "pub")]
    is_quick_save: bool,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl SaveData for SimpleVariables {

    fn size(&self, params: &SaveParams) -> u64 {
        let format = params.format();
        if format.is_ps2_au() {
            SIZE_PS2_AU
        } else if format.is_ps2() {
            SIZE_PS2
        } else if format.is_mobile() {
            SIZE_MOBILE
        } else {
            SIZE_PC
        }
    }

    fn decode<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self> {
        let format = params.format();
        let mut vars = Self::default();

        if !format.is_ps2() {
            vars.last_mission_passed_name = data.read_string_u16(NAME_LENGTH)?;
            if format.is_pc() || format.is_xbox() {
                vars.save_time = SystemTime::decode(data, params)?;
            }
        }

        // File id. Fixed per region, so not worth keeping.
        data.read_u32()?;
        vars.curr_level = data.read_u32()?;
        vars.camera_position = Vector3d::decode(data, params)?;
        vars.milliseconds_per_game_minute = data.read_u32()?;
        vars.last_clock_tick = data.read_u32()?;

        if format.is_ps2() {
            vars.game_clock_hours = data.read_i32()? as u8;
            vars.game_clock_minutes = data.read_i32()? as u8;
            vars.controller_config = data.read_i32()? as i16;
        } else {
            vars.game_clock_hours = data.read_u8()?;
            data.align(4)?;
            vars.game_clock_minutes = data.read_u8()?;
            data.align(4)?;
            vars.controller_config = data.read_i16()?;
            data.align(4)?;
        }

        vars.time_in_milliseconds = data.read_u32()?;
        vars.time_scale = data.read_f32()?;
        vars.time_step = data.read_f32()?;
        vars.time_step_non_clipped = data.read_f32()?;
        vars.frame_counter = data.read_u32()?;
        vars.time_step_2 = data.read_f32()?;
        vars.frames_per_update = data.read_f32()?;
        vars.time_scale_2 = data.read_f32()?;
        vars.old_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.new_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.forced_weather_type = data.read_i16()?;
        data.align(4)?;
        vars.weather_interpolation = data.read_f32()?;

        if format.is_ps2() {
            vars.prefs_music_volume = data.read_i32()?;
            vars.prefs_sfx_volume = data.read_i32()?;
            if !format.is_australian() {
                vars.controller_config = data.read_i32()? as i16;
            }
            vars.prefs_use_vibration = data.read_bool(4)?;
            vars.prefs_stereo_mono = data.read_bool(4)?;
            vars.prefs_radio_station = data.read_i32()?;
            vars.prefs_brightness = data.read_i32()?;
            if !format.is_australian() {
                vars.prefs_show_trails = data.read_bool(4)?;
            }
            vars.prefs_show_subtitles = data.read_bool(4)?;
            vars.prefs_language = data.read_i32()?;
            vars.prefs_use_wide_screen = data.read_bool(4)?;
            vars.controller_config = data.read_i32()? as i16;
            vars.prefs_show_trails = data.read_bool(4)?;
        }

        vars.compile_date_and_time = Date::decode(data, params)?;
        vars.weather_type_in_list = data.read_i32()?;
        vars.in_car_camera_mode = data.read_f32()?;
        vars.on_foot_camera_mode = data.read_f32()?;

        if format.is_mobile() {
            vars.is_quick_save = data.read_bool(4)?;
        }

        Ok(vars)
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, params: &SaveParams) -> Result<()> {
        let format = params.format();
        let padding = params.padding();

        if !format.is_ps2() {
            buffer.write_string_u16(&self.last_mission_passed_name, NAME_LENGTH, true)?;
            if format.is_pc() || format.is_xbox() {
                self.save_time.encode(buffer, params)?;
            }
        }

        buffer.write_u32(if format.is_ps2_jp() { FILE_ID_JP } else { FILE_ID })?;
        buffer.write_u32(self.curr_level)?;
        self.camera_position.encode(buffer, params)?;
        buffer.write_u32(self.milliseconds_per_game_minute)?;
        buffer.write_u32(self.last_clock_tick)?;

        if format.is_ps2() {
            buffer.write_i32(self.game_clock_hours as i32)?;
            buffer.write_i32(self.game_clock_minutes as i32)?;
            buffer.write_i32(self.controller_config as i32)?;
        } else {
            buffer.write_u8(self.game_clock_hours)?;
            buffer.align(4, padding)?;
            buffer.write_u8(self.game_clock_minutes)?;
            buffer.align(4, padding)?;
            buffer.write_i16(self.controller_config)?;
            buffer.align(4, padding)?;
        }

        buffer.write_u32(self.time_in_milliseconds)?;
        buffer.write_f32(self.time_scale)?;
        buffer.write_f32(self.time_step)?;
        buffer.write_f32(self.time_step_non_clipped)?;
        buffer.write_u32(self.frame_counter)?;
        buffer.write_f32(self.time_step_2)?;
        buffer.write_f32(self.frames_per_update)?;
        buffer.write_f32(self.time_scale_2)?;
        buffer.write_i16(self.old_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_i16(self.new_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_i16(self.forced_weather_type)?;
        buffer.align(4, padding)?;
        buffer.write_f32(self.weather_interpolation)?;

        if format.is_ps2() {
            buffer.write_i32(self.prefs_music_volume)?;
            buffer.write_i32(self.prefs_sfx_volume)?;
            if !format.is_australian() {
                buffer.write_i32(self.controller_config as i32)?;
            }
            buffer.write_bool(self.prefs_use_vibration, 4)?;
            buffer.write_bool(self.prefs_stereo_mono, 4)?;
            buffer.write_i32(self.prefs_radio_station)?;
            buffer.write_i32(self.prefs_brightness)?;
            if !format.is_australian() {
                buffer.write_bool(self.prefs_show_trails, 4)?;
            }
            buffer.write_bool(self.prefs_show_subtitles, 4)?;
            buffer.write_i32(self.prefs_language)?;
            buffer.write_bool(self.prefs_use_wide_screen, 4)?;
            buffer.write_i32(self.controller_config as i32)?;
            buffer.write_bool(self.prefs_show_trails, 4)?;
        }

        self.compile_date_and_time.encode(buffer, params)?;
        buffer.write_i32(self.weather_type_in_list)?;
        buffer.write_f32(self.in_car_camera_mode)?;
        buffer.write_f32(self.on_foot_camera_mode)?;

        if format.is_mobile() {
            buffer.write_bool(self.is_quick_save, 4)?;
        }

        Ok(())
    }
}
