//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Small wire types shared between the games.

use getset::{CopyGetters, Setters};

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::Result;
use crate::format::SaveParams;
use crate::save::SaveData;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// Timestamp of the last save, in the layout of the Win32 `SYSTEMTIME` struct.
///
/// Only the PC and Xbox versions store it; the other platforms get it from their own
/// save metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct SystemTime {
    year: u16,
    month: u16,
    day_of_week: u16,
    day: u16,
    hour: u16,
    minute: u16,
    second: u16,
    milliseconds: u16,
}

/// A position in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct Vector3d {
    x: f32,
    y: f32,
    z: f32,
}

/// Build date of the game executable, dumped as six whole words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, CopyGetters, Setters)]
#[getset(get_copy = "pub", set = "pub")]
pub struct Date {
    second: u32,
    minute: u32,
    hour: u32,
    day: u32,
    month: u32,
    year: u32,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl SaveData for SystemTime {
    fn size(&self, _params: &SaveParams) -> u64 {
        16
    }

    fn decode<R: ReadBytes>(data: &mut R, _params: &SaveParams) -> Result<Self> {
        Ok(Self {
            year: data.read_u16()?,
            month: data.read_u16()?,
            day_of_week: data.read_u16()?,
            day: data.read_u16()?,
            hour: data.read_u16()?,
            minute: data.read_u16()?,
            second: data.read_u16()?,
            milliseconds: data.read_u16()?,
        })
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _params: &SaveParams) -> Result<()> {
        buffer.write_u16(self.year)?;
        buffer.write_u16(self.month)?;
        buffer.write_u16(self.day_of_week)?;
        buffer.write_u16(self.day)?;
        buffer.write_u16(self.hour)?;
        buffer.write_u16(self.minute)?;
        buffer.write_u16(self.second)?;
        buffer.write_u16(self.milliseconds)
    }
}

impl SaveData for Vector3d {
    fn size(&self, _params: &SaveParams) -> u64 {
        12
    }

    fn decode<R: ReadBytes>(data: &mut R, _params: &SaveParams) -> Result<Self> {
        Ok(Self {
            x: data.read_f32()?,
            y: data.read_f32()?,
            z: data.read_f32()?,
        })
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _params: &SaveParams) -> Result<()> {
        buffer.write_f32(self.x)?;
        buffer.write_f32(self.y)?;
        buffer.write_f32(self.z)
    }
}

impl SaveData for Date {
    fn size(&self, _params: &SaveParams) -> u64 {
        24
    }

    fn decode<R: ReadBytes>(data: &mut R, _params: &SaveParams) -> Result<Self> {
        Ok(Self {
            second: data.read_u32()?,
            minute: data.read_u32()?,
            hour: data.read_u32()?,
            day: data.read_u32()?,
            month: data.read_u32()?,
            year: data.read_u32()?,
        })
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _params: &SaveParams) -> Result<()> {
        buffer.write_u32(self.second)?;
        buffer.write_u32(self.minute)?;
        buffer.write_u32(self.hour)?;
        buffer.write_u32(self.day)?;
        buffer.write_u32(self.month)?;
        buffer.write_u32(self.year)
    }
}
