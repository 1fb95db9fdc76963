//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the traits [`ReadBytes`] and [`WriteBytes`], used to decode binary
//! data from the save files into usable data and encode it back to binary.
//!
//! All multibyte values are little-endian, on every platform the games shipped on.
//!
//! # Simple types
//!
//! | Type | Bytes | Binary Format | Example | Explanation |
//! | ---- | ----- | ------------- | ------- | ----------- |
//! | **bool (wide)** | n | ```01 00 00 00``` | true | Boolean stored over n bytes. It's true if any bit of any byte is set. The games use 1, 2 and 4 byte bools depending on the field. |
//! | **[u8]**  | 1    | ```05```            | 5       | Unsigned Integer. |
//! | **[u16]** | 2    | ```05 00```         | 5       | Unsigned Integer. |
//! | **[u32]** | 4    | ```05 00 00 00```   | 5       | Unsigned Integer. |
//! | **[u64]** | 8    | ```05 00 00 00 00 00 00 00``` | 5 | Unsigned Integer. |
//! | **[i8]**  | 1    | ```05```            | 5       | Signed Integer. |
//! | **[i16]** | 2    | ```05 00```         | 5       | Signed Integer. |
//! | **[i32]** | 4    | ```05 00 00 00```   | 5       | Signed Integer. |
//! | **[i64]** | 8    | ```05 00 00 00 00 00 00 00``` | 5 | Signed Integer. |
//! | **[f32]** | 4    | ```00 00 80 3F```   | 1.0     | Floating Point Value. |
//! | **[f64]** | 8    | ```00 00 00 00 00 00 F0 3F``` | 1.0 | Floating Point Value. |
//!
//! # String types
//!
//! Strings in the saves never carry their length on the wire. They're either zero-terminated,
//! or they fill a fixed-size field:
//!
//! | Type | Bytes | Binary Format | Example | Explanation |
//! | ---- | ----- | ------------- | ------- | ----------- |
//! | **StringU8 Fixed** | Fixed | ```48 65 6C 6C 6F 00 00 00``` | Hello (field of 8) | 8-bit string in a fixed-size field. The whole field is always consumed; the value ends at the first null. |
//! | **StringU16 Fixed** | Fixed * 2 | ```48 00 65 00 6C 00 6C 00 6F 00 00 00``` | Hello (field of 6) | Same as StringU8 Fixed, but each character unit is an UTF-16 code unit of 2 bytes. |
//! | **StringU8 0-Terminated** | Variable | ```48 65 6C 6C 6F 00``` | Hello | 8-bit string that continues until a 00 byte is found. |
//! | **StringU16 0-Terminated** | Variable | ```48 00 65 00 6C 00 6C 00 6F 00 00 00``` | Hello | Same as StringU8 0-Terminated, but with 2-byte character units. |
//!
//! # Alignment
//!
//! Structured objects inside the saves are dumps of in-memory structs, so fields are aligned
//! to their word size (4 bytes unless said otherwise). The bytes used to fill the gaps are
//! controlled by the [`Padding`] mode used on write, and skipped on read.

pub mod reader;
pub mod writer;

#[cfg(test)] mod reader_test;

pub use self::reader::ReadBytes;
pub use self::writer::{Padding, WriteBytes};
