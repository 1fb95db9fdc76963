//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module with the [`ReadBytes`] trait, to read bytes to known types.

use byteorder::{LittleEndian, ReadBytesExt};
use encoding_rs::UTF_16LE;
use itertools::Itertools;

use std::io::{Read, Seek, SeekFrom};

use crate::error::{Result, RgsmError};

//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// This trait allow us to easily read all kind of save data from a source that implements [`Read`] + [`Seek`].
pub trait ReadBytes: Read + Seek {

    /// This function returns the lenght of the data we're reading.
    ///
    /// Extracted from the nightly std.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data);
    /// let len = cursor.len().unwrap();
    /// assert_eq!(len, 4);
    /// ```
    fn len(&mut self) -> Result<u64> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;
        // Avoid seeking a third time when we were already at the end of the
        // stream. The branch is usually way cheaper than a seek operation.
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }
        Ok(len)
    }

    /// This function returns if the data is empty.
    ///
    /// It's slightly faster than checking for len == 0.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![];
    /// let mut cursor = Cursor::new(data);
    /// assert!(ReadBytes::is_empty(&mut cursor).unwrap());
    /// ```
    fn is_empty(&mut self) -> Result<bool> {
        self.len().map(|len| len == 0)
    }

    /// This function returns the amount of bytes specified in the `size` argument as a [`Vec<u8>`].
    ///
    /// If `rewind` is true, the cursor will be reset to its original position once the data is returned.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data.to_vec());
    /// let data_read = cursor.read_slice(4, false).unwrap();
    /// assert_eq!(data, data_read);
    /// ```
    fn read_slice(&mut self, size: usize, rewind: bool) -> Result<Vec<u8>> {
        let mut data = vec![0; size];

        // If len is 0, just return.
        if size == 0 {
            return Ok(data)
        }

        self.read_exact(&mut data)?;

        if rewind {
            self.seek(SeekFrom::Current(-(size as i64)))?;
        }

        Ok(data)
    }

    /// This function tries to read a bool stored over `byte_count` bytes from `self`.
    ///
    /// The games dump in-memory bools as-is, so depending on the field a bool can take 1, 2
    /// or 4 bytes, and any non-zero bit in any of them makes it true.
    ///
    /// It may fail if `byte_count` is 0, or there are not enough bytes to read the value.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![0, 0, 0, 0, 1, 0];
    /// let mut cursor = Cursor::new(data);
    ///
    /// assert_eq!(cursor.read_bool(4).unwrap(), false);
    /// assert_eq!(cursor.read_bool(2).unwrap(), true);
    /// ```
    fn read_bool(&mut self, byte_count: usize) -> Result<bool> {
        if byte_count == 0 {
            return Err(RgsmError::InvalidBoolWidth);
        }

        let data = self.read_slice(byte_count, false)?;
        Ok(data.iter().any(|byte| *byte != 0))
    }

    /// This function tries to read an u8 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_u8().unwrap(), 10);
    /// ```
    fn read_u8(&mut self) -> Result<u8> {
        ReadBytesExt::read_u8(self).map_err(From::from)
    }

    /// This function tries to read an u16 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_u16().unwrap(), 10);
    /// ```
    fn read_u16(&mut self) -> Result<u16> {
        ReadBytesExt::read_u16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an u32 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_u32().unwrap(), 10);
    /// ```
    fn read_u32(&mut self) -> Result<u32> {
        ReadBytesExt::read_u32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an u64 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 0, 0, 0, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_u64().unwrap(), 10);
    /// ```
    fn read_u64(&mut self) -> Result<u64> {
        ReadBytesExt::read_u64::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an i8 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![254];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_i8().unwrap(), -2);
    /// ```
    fn read_i8(&mut self) -> Result<i8> {
        ReadBytesExt::read_i8(self).map_err(From::from)
    }

    /// This function tries to read an i16 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_i16().unwrap(), 10);
    /// ```
    fn read_i16(&mut self) -> Result<i16> {
        ReadBytesExt::read_i16::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an i32 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_i32().unwrap(), 10);
    /// ```
    fn read_i32(&mut self) -> Result<i32> {
        ReadBytesExt::read_i32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an i64 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![10, 0, 0, 0, 0, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_i64().unwrap(), 10);
    /// ```
    fn read_i64(&mut self) -> Result<i64> {
        ReadBytesExt::read_i64::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read a f32 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![0, 0, 128, 63];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_f32().unwrap(), 1.0);
    /// ```
    fn read_f32(&mut self) -> Result<f32> {
        ReadBytesExt::read_f32::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read a f64 value from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value or `self` cannot be read.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![0, 0, 0, 0, 0, 0, 240, 63];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_f64().unwrap(), 1.0);
    /// ```
    fn read_f64(&mut self) -> Result<f64> {
        ReadBytesExt::read_f64::<LittleEndian>(self).map_err(From::from)
    }

    /// This function tries to read an 8-bit character from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![65];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_char_u8().unwrap(), 'A');
    /// ```
    fn read_char_u8(&mut self) -> Result<char> {
        ReadBytes::read_u8(self).map(char::from)
    }

    /// This function tries to read an UTF-16 character from `self`.
    ///
    /// It may fail if there are not enough bytes to read the value, or the code unit read is
    /// part of a surrogate pair, which the games don't support.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![65, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_char_u16().unwrap(), 'A');
    /// ```
    fn read_char_u16(&mut self) -> Result<char> {
        let unit = ReadBytes::read_u16(self)?;
        char::from_u32(unit as u32).ok_or(RgsmError::UnsupportedCharacter)
    }

    /// This function tries to read an 8-bit string from a fixed-size field of `size` bytes.
    ///
    /// The whole field is consumed, but the value returned ends at the first null byte found
    /// in it. This is how every fixed-size string field in the saves works.
    ///
    /// It may fail if there are not enough bytes to read the whole field, or the field
    /// contains invalid characters.
    ///
    /// ```rust
    /// use std::io::{Cursor, Seek};
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![87, 97, 107, 111, 0, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    ///
    /// assert_eq!(cursor.read_string_u8(8).unwrap(), "Wako");
    /// assert_eq!(cursor.stream_position().unwrap(), 8);
    /// ```
    fn read_string_u8(&mut self, size: usize) -> Result<String> {
        let mut data = self.read_slice(size, false)?;
        if let Some(null_pos) = memchr::memchr(0, &data) {
            data.truncate(null_pos);
        }

        String::from_utf8(data).map_err(|_| RgsmError::UnsupportedCharacter)
    }

    /// This function tries to read an 8-bit string from `self`, continuing until a null byte is found.
    ///
    /// It may fail if no null byte is found before the data ends.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![87, 97, 107, 111, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_string_u8_0terminated().unwrap(), "Wako");
    /// ```
    fn read_string_u8_0terminated(&mut self) -> Result<String> {
        let mut data = vec![];

        // Read in small chunks until we find the terminator, then seek back to just after it.
        loop {
            let mut chunk = vec![0; 64];
            let bytes_read = self.read(&mut chunk)?;
            if bytes_read == 0 {
                return Err(RgsmError::IOError(std::io::Error::from(std::io::ErrorKind::UnexpectedEof)));
            }

            match memchr::memchr(0, &chunk[..bytes_read]) {
                Some(null_pos) => {
                    self.seek(SeekFrom::Current(null_pos as i64 + 1 - bytes_read as i64))?;
                    data.extend_from_slice(&chunk[..null_pos]);
                    break;
                }
                None => data.extend_from_slice(&chunk[..bytes_read]),
            }
        }

        String::from_utf8(data).map_err(|_| RgsmError::UnsupportedCharacter)
    }

    /// This function tries to read an UTF-16 string from a fixed-size field of `size` character
    /// units (so `size * 2` bytes).
    ///
    /// The whole field is consumed, but the value returned ends at the first null unit found
    /// in it.
    ///
    /// It may fail if there are not enough bytes to read the whole field, or the field
    /// contains characters the games don't support.
    ///
    /// ```rust
    /// use std::io::{Cursor, Seek};
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    ///
    /// assert_eq!(cursor.read_string_u16(6).unwrap(), "Wako");
    /// assert_eq!(cursor.stream_position().unwrap(), 12);
    /// ```
    fn read_string_u16(&mut self, size: usize) -> Result<String> {
        let data = self.read_slice(size * 2, false)?;
        let null_pos = data.iter()
            .tuples()
            .position(|(first, second)| *first == 0 && *second == 0)
            .map(|pos| pos * 2)
            .unwrap_or(data.len());

        let (string, _, had_errors) = UTF_16LE.decode(&data[..null_pos]);
        if had_errors {
            return Err(RgsmError::UnsupportedCharacter);
        }

        Ok(string.to_string())
    }

    /// This function tries to read an UTF-16 string from `self`, continuing until a null
    /// character unit is found.
    ///
    /// It may fail if no null unit is found before the data ends, or the string contains
    /// characters the games don't support.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0];
    /// let mut cursor = Cursor::new(data);
    /// assert_eq!(cursor.read_string_u16_0terminated().unwrap(), "Wako");
    /// ```
    fn read_string_u16_0terminated(&mut self) -> Result<String> {
        let mut units = vec![];
        loop {
            let unit = ReadBytes::read_u16(self)?;
            if unit == 0 {
                break;
            }
            units.push(unit);
        }

        String::from_utf16(&units).map_err(|_| RgsmError::UnsupportedCharacter)
    }

    /// This function advances the cursor to the next multiple of `word_size` (from the start
    /// of the data), skipping the padding bytes in between. If the cursor is already aligned,
    /// it does nothing.
    ///
    /// `word_size` must be a power of two.
    ///
    /// ```rust
    /// use std::io::{Cursor, Seek};
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 0, 0, 0, 2];
    /// let mut cursor = Cursor::new(data);
    ///
    /// assert_eq!(cursor.read_u8().unwrap(), 1);
    /// cursor.align(4).unwrap();
    /// assert_eq!(cursor.stream_position().unwrap(), 4);
    /// ```
    fn align(&mut self, word_size: u64) -> Result<u64> {
        let pos = self.stream_position()?;
        if word_size < 2 {
            return Ok(pos);
        }

        let aligned = (pos + word_size - 1) & !(word_size - 1);
        if aligned != pos {
            self.seek(SeekFrom::Start(aligned))?;
        }

        Ok(aligned)
    }

    /// This function skips the amount of bytes provided, without reading them.
    ///
    /// ```rust
    /// use std::io::Cursor;
    ///
    /// use rgsm_lib::binary::ReadBytes;
    ///
    /// let data = vec![1, 2, 3, 4];
    /// let mut cursor = Cursor::new(data);
    ///
    /// cursor.skip(3).unwrap();
    /// assert_eq!(cursor.read_u8().unwrap(), 4);
    /// ```
    fn skip(&mut self, amount: i64) -> Result<u64> {
        self.seek(SeekFrom::Current(amount)).map_err(From::from)
    }
}

// Automatic implementation for anything that implements `Read + Seek`.
impl<R: Read + Seek> ReadBytes for R {}
