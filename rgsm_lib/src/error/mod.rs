//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Module containing the centralized [`Error`](RgsmError) type of this lib, and the
//! [`Result`] alias the entire lib uses.

use thiserror::Error;

/// Alias for the standard Result type, with the error type this lib uses by default.
pub type Result<T, E = RgsmError> = core::result::Result<T, E>;

/// Custom error type for all the errors this lib can return.
#[derive(Error, Debug)]
pub enum RgsmError {

    /// Error for when we try to decode or encode a bool of zero bytes.
    #[error("Tried to decode/encode a bool of zero bytes.")]
    InvalidBoolWidth,

    /// Error for when a character cannot be represented in the encoding of the field it belongs to.
    #[error("Unsupported character found while decoding/encoding a string.")]
    UnsupportedCharacter,

    /// Error for when a tagged block header doesn't contain the tag we expect.
    #[error("Corrupt block header: expected tag \"{0}\", found \"{1}\".")]
    CorruptBlockHeader(String, String),

    /// Error for when a block's size field points past the end of the file.
    #[error("Corrupt block header: a block of {0} bytes overruns the end of the file.")]
    CorruptBlockSize(u32),

    /// Error for when a block is bigger than the work buffer of its save format allows.
    #[error("Block of {0} bytes exceeds the maximum work buffer size of {1} bytes.")]
    BlockSizeExceeded(u32, usize),

    /// Error for when we cannot match the provided data against any known save format.
    #[error("The provided data doesn't match any known save format.")]
    FormatNotRecognized,

    /// Error for when the bytes an object produces/consumes don't match the size its layout reports.
    #[error("The serialized size of a {0} ({1} bytes) doesn't match the size its layout reports ({2} bytes).")]
    LayoutSizeMismatch(&'static str, u64, u64),

    /// Error for when an IO error takes place while reading or writing data.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}
