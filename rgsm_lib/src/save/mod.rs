//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the [`SaveData`] trait, implemented by every structured object
//! that lives inside a save file, plus the helpers to (de)serialize them and the
//! fixed-capacity arrays the games use.
//!
//! The wire layout of an object depends on the platform the save belongs to, so every
//! operation takes the [`SaveParams`] of the save being processed. An object's
//! [`size`](SaveData::size) must always match the amount of bytes its
//! [`decode`](SaveData::decode)/[`encode`](SaveData::encode) consume/produce for the same
//! params; [`to_bytes`] and [`from_bytes`] check that in debug and test builds.

use std::any::type_name;
use std::io::Cursor;

use crate::binary::{ReadBytes, WriteBytes};
use crate::error::{Result, RgsmError};
use crate::format::SaveParams;


//---------------------------------------------------------------------------//
//                            Trait Definition
//---------------------------------------------------------------------------//

/// Trait for all structured objects that can be read from/written to a save file.
pub trait SaveData: Sized {

    /// This function returns the size in bytes this object takes on the wire, for the
    /// provided params.
    fn size(&self, params: &SaveParams) -> u64;

    /// This function tries to decode an object of this type from the provided data.
    fn decode<R: ReadBytes>(data: &mut R, params: &SaveParams) -> Result<Self>;

    /// This function tries to encode this object into the provided buffer.
    fn encode<W: WriteBytes>(&self, buffer: &mut W, params: &SaveParams) -> Result<()>;
}

//---------------------------------------------------------------------------//
//                              Free functions
//---------------------------------------------------------------------------//

/// This function encodes the provided object into a byte vector.
///
/// In debug and test builds, it fails with [`RgsmError::LayoutSizeMismatch`] if the bytes
/// produced don't match the size the object reports. The check is elided in release builds.
pub fn to_bytes<T: SaveData>(object: &T, params: &SaveParams) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::with_capacity(object.size(params) as usize));
    object.encode(&mut buffer, params)?;

    let data = buffer.into_inner();
    if cfg!(debug_assertions) && data.len() as u64 != object.size(params) {
        return Err(RgsmError::LayoutSizeMismatch(type_name::<T>(), data.len() as u64, object.size(params)));
    }

    Ok(data)
}

/// This function decodes an object of the requested type from the provided bytes.
///
/// In debug and test builds, it fails with [`RgsmError::LayoutSizeMismatch`] if the bytes
/// consumed don't match the size the decoded object reports. The check is elided in
/// release builds.
pub fn from_bytes<T: SaveData>(data: &[u8], params: &SaveParams) -> Result<T> {
    let mut cursor = Cursor::new(data);
    let object = T::decode(&mut cursor, params)?;

    if cfg!(debug_assertions) && cursor.position() != object.size(params) {
        return Err(RgsmError::LayoutSizeMismatch(type_name::<T>(), cursor.position(), object.size(params)));
    }

    Ok(object)
}

/// This function decodes exactly `count` consecutive objects from the provided data.
pub fn read_array<T: SaveData, R: ReadBytes>(data: &mut R, count: usize, params: &SaveParams) -> Result<Vec<T>> {
    (0..count).map(|_| T::decode(data, params)).collect()
}

/// This function encodes the provided objects into a fixed-capacity array of `count` slots.
///
/// If there are more objects than slots, the extra ones are dropped. If there are less,
/// the remaining slots are filled with default-valued objects. The bytes produced are
/// always exactly `count` elements worth of data.
pub fn write_array<T: SaveData + Default, W: WriteBytes>(buffer: &mut W, objects: &[T], count: usize, params: &SaveParams) -> Result<()> {
    for object in objects.iter().take(count) {
        object.encode(buffer, params)?;
    }

    let filler = T::default();
    for _ in objects.len().min(count)..count {
        filler.encode(buffer, params)?;
    }

    Ok(())
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

/// Opaque stand-in for the sections of a save we don't model yet.
///
/// It keeps the raw payload bytes around so saves round-trip byte-identical even when
/// most of their blocks are not decoded into structured objects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dummy {
    data: Vec<u8>,
}

impl Dummy {

    /// This function builds a Dummy from raw payload bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
        }
    }

    /// This function reads `size` raw bytes from the provided data into a Dummy.
    ///
    /// Unlike [`SaveData::decode`], it needs the size upfront: an opaque payload carries
    /// no layout to derive it from.
    pub fn decode<R: ReadBytes>(data: &mut R, size: usize) -> Result<Self> {
        Ok(Self {
            data: data.read_slice(size, false)?,
        })
    }

    /// This function writes the raw bytes of this Dummy back, untouched.
    pub fn encode<W: WriteBytes>(&self, buffer: &mut W) -> Result<()> {
        buffer.write_all(&self.data).map_err(From::from)
    }

    /// This function returns the size in bytes of this Dummy's payload.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// This function returns the raw bytes of this Dummy.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

// Primitives can appear as elements of the games' fixed-capacity arrays.
impl SaveData for i32 {
    fn size(&self, _params: &SaveParams) -> u64 {
        4
    }

    fn decode<R: ReadBytes>(data: &mut R, _params: &SaveParams) -> Result<Self> {
        data.read_i32()
    }

    fn encode<W: WriteBytes>(&self, buffer: &mut W, _params: &SaveParams) -> Result<()> {
        buffer.write_i32(*self)
    }
}
