//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the outer block framing shared by all the save files, in the shape
//! of the [`BlockReader`] and [`BlockWriter`] structs.
//!
//! A save file is, from the outside in:
//!
//! | Section | Size | Explanation |
//! | ------- | ---- | ----------- |
//! | **Block** (repeated) | 4 + n | A 4-byte length header, followed by that many payload bytes. |
//! | **Tail padding** | Variable | More blocks, with filler payloads, until the file hits the exact total size its game expects. |
//! | **Checksum** | 4 | Running sum of every byte written before it, headers and payloads alike, wrapping on overflow. |
//!
//! The games stream blocks through a bounded work buffer (its size depends on game and
//! platform), and their debug builds refuse blocks that don't fit in it. Both structs here
//! keep that behaviour behind the `block_size_checks` param: when checks are lenient, an
//! oversized payload is staged through the buffer in bounded pieces instead of being
//! rejected, which keeps the bytes on the wire identical either way.
//!
//! Inside a block, each object carries its own 4-byte length prefix and is padded to a
//! 4-byte boundary; the only unprefixed object is the simple variables section leading the
//! first block. Some objects additionally nest tagged sub-sections inside their payload (a
//! 4-byte ASCII tag, then a 4-byte length); [`read_tag_header`] and [`write_tag_header`]
//! deal with those.

use log::warn;

use std::io::Cursor;

use crate::binary::{Padding, ReadBytes, WriteBytes};
use crate::error::{Result, RgsmError};
use crate::format::SaveParams;
use crate::save::{self, Dummy, SaveData};


/// Size of the length header preceding each block's payload.
pub const BLOCK_HEADER_SIZE: u64 = 4;

/// Size of the checksum trailer at the end of a save file.
pub const TRAILER_SIZE: u64 = 4;

/// Size of a nested tagged header (4-byte tag + 4-byte length).
pub const TAG_HEADER_SIZE: u64 = 8;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// Writer for the outer block framing of a save file.
///
/// Keeps the bounded work buffer and the running checksum as explicit state, so the
/// objects being written stay plain data.
pub struct BlockWriter<'a, W: WriteBytes> {
    file: &'a mut W,
    work: Vec<u8>,
    buffer_size: usize,
    strict: bool,
    padding: Padding,
    checksum: u32,
    payload_total: u64,
    bytes_written: u64,
}

/// Reader for the outer block framing of a save file.
pub struct BlockReader<'a, R: ReadBytes> {
    file: &'a mut R,
    work: Vec<u8>,
    buffer_size: usize,
    strict: bool,
    payload_total: u64,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl<'a, W: WriteBytes> BlockWriter<'a, W> {

    /// This function builds a new writer over the provided file, with a work buffer of
    /// `buffer_size` bytes and the block size check policy from the params.
    pub fn new(file: &'a mut W, buffer_size: usize, params: &SaveParams) -> Self {
        let buffer_size = buffer_size.max(1);
        Self {
            file,
            work: vec![0; buffer_size],
            buffer_size,
            strict: *params.block_size_checks(),
            padding: params.padding().clone(),
            checksum: 0,
            payload_total: 0,
            bytes_written: 0,
        }
    }

    /// This function writes a block (length header + payload) to the file, returning the
    /// payload size.
    ///
    /// Payloads bigger than the work buffer fail with [`RgsmError::BlockSizeExceeded`]
    /// under strict checks; otherwise they're staged through the buffer in bounded pieces,
    /// producing the same bytes a single write would.
    pub fn write_block(&mut self, payload: &[u8]) -> Result<u64> {
        if payload.len() > self.buffer_size {
            if self.strict {
                return Err(RgsmError::BlockSizeExceeded(payload.len() as u32, self.buffer_size));
            }

            warn!("Block of {} bytes exceeds the work buffer size of {} bytes. Splitting it.", payload.len(), self.buffer_size);
        }

        let header = (payload.len() as u32).to_le_bytes();
        self.file.write_all(&header)?;
        self.checksum = header.iter().fold(self.checksum, |sum, byte| sum.wrapping_add(*byte as u32));
        self.bytes_written += BLOCK_HEADER_SIZE;

        for chunk in payload.chunks(self.buffer_size) {
            self.work[..chunk.len()].copy_from_slice(chunk);

            let staged = &self.work[..chunk.len()];
            self.file.write_all(staged)?;
            self.checksum = staged.iter().fold(self.checksum, |sum, byte| sum.wrapping_add(*byte as u32));
            self.bytes_written += staged.len() as u64;
        }

        self.payload_total += payload.len() as u64;
        Ok(payload.len() as u64)
    }

    /// This function encodes the provided object and writes it as a block of its own,
    /// inner length prefix and alignment included, returning the payload size.
    pub fn write_object<T: SaveData>(&mut self, object: &T, params: &SaveParams) -> Result<u64> {
        let payload = self.frame(&save::to_bytes(object, params)?);
        self.write_block(&payload)
    }

    /// This function writes the raw bytes of a [`Dummy`] as a block of its own, inner
    /// length prefix and alignment included.
    pub fn write_dummy(&mut self, dummy: &Dummy) -> Result<u64> {
        let payload = self.frame(dummy.data());
        self.write_block(&payload)
    }

    /// This function writes filler blocks until the accumulated payload reaches the total
    /// size the game expects for one save, leaving just the trailer to be written.
    ///
    /// Each filler block is capped at the work buffer size, and degenerate remainders of 4
    /// bytes or less are skipped, like the games do.
    pub fn pad_to_size(&mut self, total_size: u64, padding: &Padding) -> Result<()> {
        // The cap at buffer size means big gaps take several blocks. Four rounds is
        // always enough for the sizes the games use.
        for _ in 0..4 {
            let remaining = total_size.saturating_sub(self.payload_total + TRAILER_SIZE);
            let mut size = (remaining + 3) & !3;
            if size > self.buffer_size as u64 {
                size = self.buffer_size as u64;
            }

            if size > 4 {
                let filler = padding.bytes(size as usize);
                self.write_block(&filler)?;
            }
        }

        Ok(())
    }

    /// This function writes the checksum trailer and returns the total amount of bytes
    /// written to the file, trailer included.
    pub fn finish(self) -> Result<u64> {
        self.file.write_u32(self.checksum)?;
        Ok(self.bytes_written + TRAILER_SIZE)
    }

    /// This function returns the running checksum over everything written so far.
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// This function returns the accumulated payload size (block headers excluded).
    pub fn payload_total(&self) -> u64 {
        self.payload_total
    }

    /// Frames object bytes the way they go inside a block: length prefix first, then the
    /// data, padded to a 4-byte boundary.
    fn frame(&self, data: &[u8]) -> Vec<u8> {
        let mut payload = Vec::with_capacity(data.len() + 8);
        payload.extend_from_slice(&(data.len() as u32).to_le_bytes());
        payload.extend_from_slice(data);

        let aligned = (payload.len() + 3) & !3;
        payload.extend(self.padding.bytes(aligned - payload.len()));
        payload
    }
}

impl<'a, R: ReadBytes> BlockReader<'a, R> {

    /// This function builds a new reader over the provided file, with a work buffer of
    /// `buffer_size` bytes and the block size check policy from the params.
    pub fn new(file: &'a mut R, buffer_size: usize, params: &SaveParams) -> Self {
        let buffer_size = buffer_size.max(1);
        Self {
            file,
            work: vec![0; buffer_size],
            buffer_size,
            strict: *params.block_size_checks(),
            payload_total: 0,
        }
    }

    /// This function reads the next block from the file and returns its payload.
    ///
    /// It fails with [`RgsmError::CorruptBlockSize`] if the length header points past the
    /// end of the file, and with [`RgsmError::BlockSizeExceeded`] if the payload doesn't
    /// fit in the work buffer and checks are strict. With lenient checks, oversized
    /// payloads are staged through the buffer in bounded pieces.
    pub fn read_block(&mut self) -> Result<Vec<u8>> {
        let size = self.file.read_u32()?;

        let remaining = self.file.len()? - self.file.stream_position()?;
        if size as u64 > remaining {
            return Err(RgsmError::CorruptBlockSize(size));
        }

        if size as usize > self.buffer_size {
            if self.strict {
                return Err(RgsmError::BlockSizeExceeded(size, self.buffer_size));
            }

            warn!("Block of {} bytes exceeds the work buffer size of {} bytes. Splitting it.", size, self.buffer_size);
        }

        let mut payload = Vec::with_capacity(size as usize);
        let mut pending = size as usize;
        while pending > 0 {
            let chunk = pending.min(self.buffer_size);
            self.file.read_exact(&mut self.work[..chunk])?;
            payload.extend_from_slice(&self.work[..chunk]);
            pending -= chunk;
        }

        self.payload_total += size as u64;
        Ok(payload)
    }

    /// This function reads the next block and decodes the object of the requested type
    /// inside it, skipping past its inner length prefix and alignment.
    pub fn read_object<T: SaveData>(&mut self, params: &SaveParams) -> Result<T> {
        let payload = self.read_block()?;
        let data = Self::unframe(&payload)?;
        save::from_bytes(data, params)
    }

    /// This function reads the next block and keeps the object inside it as an opaque
    /// [`Dummy`], skipping past its inner length prefix and alignment.
    pub fn read_dummy(&mut self) -> Result<Dummy> {
        let payload = self.read_block()?;
        let data = Self::unframe(&payload)?;
        Ok(Dummy::new(data.to_vec()))
    }

    /// This function returns the amount of bytes left in the file after the current position.
    pub fn remaining(&mut self) -> Result<u64> {
        Ok(self.file.len()? - self.file.stream_position()?)
    }

    /// This function reads the checksum trailer at the current position.
    ///
    /// The games never verify it on load, and neither do we; use [`verify_checksum`] if
    /// you need to.
    pub fn read_trailer(&mut self) -> Result<u32> {
        self.file.read_u32()
    }

    /// This function returns the accumulated payload size (block headers excluded).
    pub fn payload_total(&self) -> u64 {
        self.payload_total
    }

    /// Strips the inner length prefix of a block payload, returning the object bytes it
    /// frames. Any alignment bytes after them are dropped.
    fn unframe(payload: &[u8]) -> Result<&[u8]> {
        let mut cursor = Cursor::new(payload);
        let size = cursor.read_u32()? as usize;

        payload.get(4..4 + size).ok_or(RgsmError::CorruptBlockSize(size as u32))
    }
}

//---------------------------------------------------------------------------//
//                              Free functions
//---------------------------------------------------------------------------//

/// This function returns the wrapping sum of all the bytes in the provided data.
pub fn byte_sum(data: &[u8]) -> u32 {
    data.iter().fold(0, |sum, byte| sum.wrapping_add(*byte as u32))
}

/// This function recomputes the checksum of a full save file and compares it against its
/// trailer, returning if they match.
pub fn verify_checksum(data: &[u8]) -> bool {
    if data.len() < TRAILER_SIZE as usize {
        return false;
    }

    let (body, trailer) = data.split_at(data.len() - TRAILER_SIZE as usize);
    byte_sum(body) == u32::from_le_bytes([trailer[0], trailer[1], trailer[2], trailer[3]])
}

/// This function reads a nested tagged header (4-byte ASCII tag + 4-byte length) from the
/// provided data, checks the tag is the one expected, and returns the length.
pub fn read_tag_header<R: ReadBytes>(data: &mut R, expected_tag: &str) -> Result<u32> {
    let tag = data.read_string_u8(4)?;
    if tag != expected_tag {
        return Err(RgsmError::CorruptBlockHeader(expected_tag.to_owned(), tag));
    }

    data.read_u32()
}

/// This function writes a nested tagged header (4-byte ASCII tag + 4-byte length) to the
/// provided buffer.
pub fn write_tag_header<W: WriteBytes>(buffer: &mut W, tag: &str, size: u32) -> Result<()> {
    buffer.write_string_u8(tag, 4, true)?;
    buffer.write_u32(size)
}
