//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This is the RGSM Lib, a library to decode/encode savegame files from the 3D-era GTA games.
//!
//! The lib is split in a few layers, from bottom to top:
//! - [`binary`]: cursor-level primitives (little-endian integers, wide bools, fixed and
//!   zero-terminated strings, alignment padding).
//! - [`save`]: the [`SaveData`](save::SaveData) trait, which every structured object in a
//!   save implements, plus fixed-capacity array helpers.
//! - [`format`]: immutable platform descriptors ([`SaveFormat`](format::SaveFormat)) and
//!   the serialization params threaded through every decode/encode call.
//! - [`container`]: the outer block framing of the save files, with its bounded work
//!   buffer and running byte-sum checksum.
//! - [`games`]: per-game save orchestrators (GTA III, Vice City) with format
//!   auto-detection.

pub mod binary;
pub mod container;
pub mod error;
pub mod format;
pub mod games;
pub mod save;
