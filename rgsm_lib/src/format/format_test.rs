//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`SaveFormat`] predicates.
//!
//! [`SaveFormat`]: crate::format::SaveFormat

use super::*;

/// Test for SaveFormat platform predicates.
#[test]
fn format_platform_predicates() {
    let format = SaveFormat::new(Platform::Ps2, RegionFlags::AUSTRALIA);
    assert!(format.is_ps2());
    assert!(format.is_ps2_au());
    assert!(!format.is_ps2_jp());
    assert!(!format.is_ps2_naeu());
    assert!(!format.is_pc());
    assert!(!format.is_mobile());

    let format = SaveFormat::new(Platform::Android, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    assert!(format.is_android());
    assert!(format.is_mobile());
    assert!(!format.is_ios());
}

/// Test for SaveFormat region predicates.
#[test]
fn format_region_predicates() {
    let format = SaveFormat::new(Platform::Pc, RegionFlags::STEAM);
    assert!(format.is_steam());
    assert!(!format.is_japanese());

    let format = SaveFormat::new(Platform::Ps2, RegionFlags::JAPAN);
    assert!(format.is_ps2_jp());
    assert!(!format.is_ps2_naeu());

    let format = SaveFormat::new(Platform::Ps2, RegionFlags::NORTH_AMERICA.union(RegionFlags::EUROPE));
    assert!(format.is_ps2_naeu());
}

/// Test for the default SaveParams of a format.
#[test]
fn params_defaults() {
    let params = SaveParams::new(SaveFormat::new(Platform::Pc, RegionFlags::NORTH_AMERICA));
    assert_eq!(*params.padding(), crate::binary::Padding::Zeros);
    assert!(params.format().is_pc());
}
