//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the per-game save orchestrators, one submodule per supported game,
//! plus the small wire types they share.
//!
//! Each game module provides its save struct (like [`gta3::Gta3Save`]), the named
//! [`SaveFormat`](crate::format::SaveFormat) constants of the releases we know, and a
//! `detect_format` function to identify which of them a raw file belongs to.

pub mod gta3;
pub mod types;
pub mod vice;
