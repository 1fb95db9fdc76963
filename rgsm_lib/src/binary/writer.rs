//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`WriteBytes`] trait, to write known types as bytes.

use byteorder::{LittleEndian, WriteBytesExt};
use rand::{thread_rng, RngCore};

use std::io::{Seek, Write};

use crate::error::{Result, RgsmError};

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// Contents of the filler bytes emitted when aligning or padding the data being written.
///
/// The games themselves leave whatever garbage was in their work buffers as padding, so
/// all of these modes produce valid saves. [`Padding::Zeros`] is the default.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Padding {

    /// Fill with null bytes.
    #[default]
    Zeros,

    /// Fill with random bytes.
    Random,

    /// Fill with the provided sequence, repeated and truncated as needed.
    Pattern(Vec<u8>),
}

impl Padding {

    /// This function returns `len` filler bytes, built according to the selected mode.
    pub fn bytes(&self, len: usize) -> Vec<u8> {
        match self {
            Self::Zeros => vec![0; len],
            Self::Random => {
                let mut data = vec![0; len];
                thread_rng().fill_bytes(&mut data);
                data
            }
            Self::Pattern(sequence) if !sequence.is_empty() => {
                sequence.iter().copied().cycle().take(len).collect()
            }

            // An empty pattern degrades to zeros.
            Self::Pattern(_) => vec![0; len],
        }
    }
}

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily write all kind of save data to a destination that implements
/// [`Write`] + [`Seek`]. Seek is needed because alignment depends on the cursor position.
pub trait WriteBytes: Write + Seek {

    /// This function tries to write a bool over `byte_count` bytes to `self`.
    ///
    /// The first byte is 1 or 0, and the rest (if any) are always 0.
    ///
    /// It may fail if `byte_count` is 0, or `self` cannot be written to.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_bool(true, 4).is_ok());
    /// assert_eq!(data.into_inner(), vec![1, 0, 0, 0]);
    /// ```
    fn write_bool(&mut self, value: bool, byte_count: usize) -> Result<()> {
        if byte_count == 0 {
            return Err(RgsmError::InvalidBoolWidth);
        }

        WriteBytes::write_u8(self, value as u8)?;
        self.write_all(&vec![0; byte_count - 1]).map_err(From::from)
    }

    /// This function tries to write an u8 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_u8(10).is_ok());
    /// assert_eq!(data.into_inner(), vec![10]);
    /// ```
    fn write_u8(&mut self, value: u8) -> Result<()> {
        WriteBytesExt::write_u8(self, value).map_err(From::from)
    }

    /// This function tries to write an u16 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_u16(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1]);
    /// ```
    fn write_u16(&mut self, value: u16) -> Result<()> {
        WriteBytesExt::write_u16::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an u32 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_u32(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1, 0, 0]);
    /// ```
    fn write_u32(&mut self, value: u32) -> Result<()> {
        WriteBytesExt::write_u32::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an u64 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_u64(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1, 0, 0, 0, 0, 0, 0]);
    /// ```
    fn write_u64(&mut self, value: u64) -> Result<()> {
        WriteBytesExt::write_u64::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an i8 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_i8(-2).is_ok());
    /// assert_eq!(data.into_inner(), vec![254]);
    /// ```
    fn write_i8(&mut self, value: i8) -> Result<()> {
        WriteBytesExt::write_i8(self, value).map_err(From::from)
    }

    /// This function tries to write an i16 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_i16(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1]);
    /// ```
    fn write_i16(&mut self, value: i16) -> Result<()> {
        WriteBytesExt::write_i16::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an i32 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_i32(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1, 0, 0]);
    /// ```
    fn write_i32(&mut self, value: i32) -> Result<()> {
        WriteBytesExt::write_i32::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an i64 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_i64(258).is_ok());
    /// assert_eq!(data.into_inner(), vec![2, 1, 0, 0, 0, 0, 0, 0]);
    /// ```
    fn write_i64(&mut self, value: i64) -> Result<()> {
        WriteBytesExt::write_i64::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write a f32 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_f32(1.0).is_ok());
    /// assert_eq!(data.into_inner(), vec![0, 0, 128, 63]);
    /// ```
    fn write_f32(&mut self, value: f32) -> Result<()> {
        WriteBytesExt::write_f32::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write a f64 value to `self`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_f64(1.0).is_ok());
    /// assert_eq!(data.into_inner(), vec![0, 0, 0, 0, 0, 0, 240, 63]);
    /// ```
    fn write_f64(&mut self, value: f64) -> Result<()> {
        WriteBytesExt::write_f64::<LittleEndian>(self, value).map_err(From::from)
    }

    /// This function tries to write an 8-bit character to `self`.
    ///
    /// It may fail if the character doesn't fit in a single byte.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_char_u8('A').is_ok());
    /// assert!(data.write_char_u8('Ꮅ').is_err());
    /// assert_eq!(data.into_inner(), vec![65]);
    /// ```
    fn write_char_u8(&mut self, value: char) -> Result<()> {
        if value as u32 > u8::MAX as u32 {
            return Err(RgsmError::UnsupportedCharacter);
        }

        WriteBytes::write_u8(self, value as u8)
    }

    /// This function tries to write an UTF-16 character to `self`.
    ///
    /// It may fail if the character is outside the Basic Multilingual Plane, as it would need
    /// a surrogate pair, which the games don't support.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_char_u16('A').is_ok());
    /// assert!(data.write_char_u16('🚗').is_err());
    /// assert_eq!(data.into_inner(), vec![65, 0]);
    /// ```
    fn write_char_u16(&mut self, value: char) -> Result<()> {
        if value as u32 > u16::MAX as u32 {
            return Err(RgsmError::UnsupportedCharacter);
        }

        WriteBytes::write_u16(self, value as u16)
    }

    /// This function tries to write an 8-bit string into a fixed-size field of `size` bytes.
    ///
    /// Strings too long for the field get truncated, and short ones get the field zero-filled
    /// after them. If `zero_terminate` is true, the last byte of the field is reserved for the
    /// terminator, so at most `size - 1` characters of the string are written.
    ///
    /// It may fail if the string contains characters that don't fit in a single byte.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_string_u8("Wako", 6, true).is_ok());
    /// assert_eq!(data.into_inner(), vec![87, 97, 107, 111, 0, 0]);
    /// ```
    fn write_string_u8(&mut self, value: &str, size: usize, zero_terminate: bool) -> Result<()> {
        if value.chars().any(|character| character as u32 > u8::MAX as u32) {
            return Err(RgsmError::UnsupportedCharacter);
        }

        let max_len = if zero_terminate { size.saturating_sub(1) } else { size };
        let mut data = value.chars()
            .take(max_len)
            .map(|character| character as u8)
            .collect::<Vec<_>>();
        data.resize(size, 0);

        self.write_all(&data).map_err(From::from)
    }

    /// This function tries to write an 8-bit string to `self`, followed by a null terminator.
    ///
    /// It may fail if the string contains characters that don't fit in a single byte.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_string_u8_0terminated("Wako").is_ok());
    /// assert_eq!(data.into_inner(), vec![87, 97, 107, 111, 0]);
    /// ```
    fn write_string_u8_0terminated(&mut self, value: &str) -> Result<()> {
        WriteBytes::write_string_u8(self, value, value.chars().count() + 1, true)
    }

    /// This function tries to write an UTF-16 string into a fixed-size field of `size`
    /// character units (so `size * 2` bytes).
    ///
    /// Truncation, zero-fill and terminator reservation work the same as in
    /// [`write_string_u8`](WriteBytes::write_string_u8), just with 2-byte units.
    ///
    /// It may fail if the string contains characters outside the Basic Multilingual Plane.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_string_u16("Wako", 6, true).is_ok());
    /// assert_eq!(data.into_inner(), vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0, 0, 0]);
    /// ```
    fn write_string_u16(&mut self, value: &str, size: usize, zero_terminate: bool) -> Result<()> {
        if value.chars().any(|character| character as u32 > u16::MAX as u32) {
            return Err(RgsmError::UnsupportedCharacter);
        }

        let max_len = if zero_terminate { size.saturating_sub(1) } else { size };
        let mut units = value.encode_utf16()
            .take(max_len)
            .collect::<Vec<_>>();
        units.resize(size, 0);

        units.iter().try_for_each(|unit| WriteBytes::write_u16(self, *unit))
    }

    /// This function tries to write an UTF-16 string to `self`, followed by a null terminator.
    ///
    /// It may fail if the string contains characters outside the Basic Multilingual Plane.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::WriteBytes;
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_string_u16_0terminated("Wako").is_ok());
    /// assert_eq!(data.into_inner(), vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0]);
    /// ```
    fn write_string_u16_0terminated(&mut self, value: &str) -> Result<()> {
        WriteBytes::write_string_u16(self, value, value.chars().count() + 1, true)
    }

    /// This function writes `len` filler bytes to `self`, built according to the provided
    /// [`Padding`] mode.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::{Padding, WriteBytes};
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_padding(5, &Padding::Pattern(vec![1, 2])).is_ok());
    /// assert_eq!(data.into_inner(), vec![1, 2, 1, 2, 1]);
    /// ```
    fn write_padding(&mut self, len: usize, padding: &Padding) -> Result<()> {
        self.write_all(&padding.bytes(len)).map_err(From::from)
    }

    /// This function advances the cursor to the next multiple of `word_size` (from the start
    /// of the data), filling the gap with padding bytes. If the cursor is already aligned,
    /// it does nothing.
    ///
    /// `word_size` must be a power of two.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::{Padding, WriteBytes};
    ///
    /// let mut data = Cursor::new(vec![]);
    /// assert!(data.write_u8(5).is_ok());
    /// assert!(data.align(4, &Padding::Zeros).is_ok());
    /// assert_eq!(data.into_inner(), vec![5, 0, 0, 0]);
    /// ```
    fn align(&mut self, word_size: u64, padding: &Padding) -> Result<u64> {
        let pos = self.stream_position()?;
        if word_size < 2 {
            return Ok(pos);
        }

        let aligned = (pos + word_size - 1) & !(word_size - 1);
        if aligned != pos {
            WriteBytes::write_padding(self, (aligned - pos) as usize, padding)?;
        }

        Ok(aligned)
    }
}

// Automatic implementation for anything that implements `Write + Seek`.
impl<W: Write + Seek> WriteBytes for W {}
