//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! This module contains the [`SaveFormat`] platform descriptor, and the [`SaveParams`]
//! struct threaded through every decode/encode call of the lib.
//!
//! A [`SaveFormat`] identifies the exact variant of a save file: the platform the game ran
//! on, and the region/storefront flags that alter the layout within a platform. Formats are
//! immutable: they're either built from the per-game constants (like
//! [`crate::games::gta3::formats`]) or returned by format detection, and only inspected
//! afterwards through their named predicates.

use bitflags::bitflags;
use getset::{Getters, Setters};

use std::fmt::{Display, Formatter};

use crate::binary::Padding;

#[cfg(test)] mod format_test;

//---------------------------------------------------------------------------//
//                            Enums & Structs
//---------------------------------------------------------------------------//

/// Platforms the 3D-era GTA games shipped on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    Pc,
    Ps2,
    Xbox,
}

bitflags! {

    /// Flags for the regional and storefront variants that alter a save's layout within a platform.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u32 {
        const JAPAN         = 0b0000_0001;
        const AUSTRALIA     = 0b0000_0010;
        const NORTH_AMERICA = 0b0000_0100;
        const EUROPE        = 0b0000_1000;
        const STEAM         = 0b0001_0000;
    }
}

/// Immutable descriptor of a save file's exact variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SaveFormat {
    platform: Platform,
    regions: RegionFlags,
}

/// Parameters threaded through every decode/encode call.
///
/// Everything a (de)serialization needs to know travels in here, so no codec state hides
/// in the objects being read or written.
#[derive(Clone, Debug, PartialEq, Getters, Setters)]
#[getset(get = "pub", set = "pub")]
pub struct SaveParams {

    /// The exact variant of the save being read/written.
    format: SaveFormat,

    /// Filler mode for alignment gaps and tail padding.
    padding: Padding,

    /// If true, blocks bigger than the format's work buffer are an error. The games
    /// themselves only enforce this in their debug builds, so we default to the same.
    block_size_checks: bool,
}

//---------------------------------------------------------------------------//
//                           Implementations
//---------------------------------------------------------------------------//

impl SaveFormat {

    /// This function creates a new descriptor from a platform and its region flags.
    pub const fn new(platform: Platform, regions: RegionFlags) -> Self {
        Self {
            platform,
            regions,
        }
    }

    /// This function returns the platform of this format.
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// This function returns the region flags of this format.
    pub const fn regions(&self) -> RegionFlags {
        self.regions
    }

    /// This function returns if this format belongs to the PC version of a game.
    pub fn is_pc(&self) -> bool {
        self.platform == Platform::Pc
    }

    /// This function returns if this format belongs to the PS2 version of a game.
    pub fn is_ps2(&self) -> bool {
        self.platform == Platform::Ps2
    }

    /// This function returns if this format belongs to the Xbox version of a game.
    pub fn is_xbox(&self) -> bool {
        self.platform == Platform::Xbox
    }

    /// This function returns if this format belongs to the Android version of a game.
    pub fn is_android(&self) -> bool {
        self.platform == Platform::Android
    }

    /// This function returns if this format belongs to the iOS version of a game.
    pub fn is_ios(&self) -> bool {
        self.platform == Platform::Ios
    }

    /// This function returns if this format belongs to one of the mobile versions of a game.
    pub fn is_mobile(&self) -> bool {
        self.is_android() || self.is_ios()
    }

    /// This function returns if this format belongs to a japanese release.
    pub fn is_japanese(&self) -> bool {
        self.regions.contains(RegionFlags::JAPAN)
    }

    /// This function returns if this format belongs to an australian release.
    pub fn is_australian(&self) -> bool {
        self.regions.contains(RegionFlags::AUSTRALIA)
    }

    /// This function returns if this format belongs to a Steam release.
    pub fn is_steam(&self) -> bool {
        self.regions.contains(RegionFlags::STEAM)
    }

    /// This function returns if this format is the japanese PS2 release.
    pub fn is_ps2_jp(&self) -> bool {
        self.is_ps2() && self.is_japanese()
    }

    /// This function returns if this format is the australian PS2 release.
    pub fn is_ps2_au(&self) -> bool {
        self.is_ps2() && self.is_australian()
    }

    /// This function returns if this format is the american/european PS2 release.
    pub fn is_ps2_naeu(&self) -> bool {
        self.is_ps2() && !self.is_japanese() && !self.is_australian()
    }
}

impl SaveParams {

    /// This function creates a new set of params for the provided format, with the
    /// default padding mode and block size check policy.
    pub fn new(format: SaveFormat) -> Self {
        Self {
            format,
            padding: Padding::default(),
            block_size_checks: !cfg!(debug_assertions),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Android => write!(f, "Android"),
            Self::Ios => write!(f, "iOS"),
            Self::Pc => write!(f, "PC"),
            Self::Ps2 => write!(f, "PS2"),
            Self::Xbox => write!(f, "Xbox"),
        }
    }
}

impl Display for SaveFormat {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let regions = [
            (RegionFlags::JAPAN, "Japan"),
            (RegionFlags::AUSTRALIA, "Australia"),
            (RegionFlags::NORTH_AMERICA, "North America"),
            (RegionFlags::EUROPE, "Europe"),
            (RegionFlags::STEAM, "Steam"),
        ];

        let names = regions.iter()
            .filter(|(flag, _)| self.regions.contains(*flag))
            .map(|(_, name)| *name)
            .collect::<Vec<_>>();

        if names.is_empty() {
            write!(f, "{}", self.platform)
        } else {
            write!(f, "{} ({})", self.platform, names.join("/"))
        }
    }
}
