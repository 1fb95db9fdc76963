//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the GTA III save orchestrator.

use std::io::Cursor;

use crate::error::RgsmError;
use crate::format::SaveParams;
use crate::save::{Dummy, SaveData};

use super::*;

/// This function builds a minimal save whose layout matches what the game would produce:
/// the script section starts with its `SCR\0` tag, and the ped pool block has the size the
/// release being mimicked uses.
fn synthetic_save(ped_pool_size: usize) -> Gta3Save {
    let mut scripts = vec![0; 8];
    scripts[..4].copy_from_slice(b"SCR\0");

    let mut save = Gta3Save::default();
    save.set_scripts(Dummy::new(scripts));
    save.set_ped_pool(Dummy::new(vec![0; ped_pool_size]));
    save
}

fn to_file(save: &Gta3Save, params: &SaveParams) -> Vec<u8> {
    let mut file = Cursor::new(vec![]);
    save.write(&mut file, params).unwrap();
    file.into_inner()
}

/// Test for Gta3Save::detect_format() over the PC and Xbox layouts.
#[test]
fn detect_format_pc_and_xbox() {

    // The two layouts share the magic positions; only the ped pool block size tells them
    // apart (0x624 on PC, 0x628 on Xbox).
    let data = to_file(&synthetic_save(0x620), &SaveParams::new(formats::PC));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::PC);

    let data = to_file(&synthetic_save(0x624), &SaveParams::new(formats::XBOX));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::XBOX);
}

/// Test for Gta3Save::detect_format() over the PS2 layouts.
#[test]
fn detect_format_ps2() {
    let data = to_file(&synthetic_save(64), &SaveParams::new(formats::PS2_NAEU));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::PS2_NAEU);

    // The japanese release carries its own file id.
    let data = to_file(&synthetic_save(64), &SaveParams::new(formats::PS2_JP));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::PS2_JP);

    // The australian one drops two preference fields, which shifts the script tag.
    let data = to_file(&synthetic_save(64), &SaveParams::new(formats::PS2_AU));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::PS2_AU);
}

/// Test for Gta3Save::detect_format() over the mobile layouts.
#[test]
fn detect_format_mobile() {

    // Same magic positions on both; the ped pool block size tells them apart.
    let data = to_file(&synthetic_save(0x644), &SaveParams::new(formats::IOS));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::IOS);

    let data = to_file(&synthetic_save(0x648), &SaveParams::new(formats::ANDROID));
    assert_eq!(Gta3Save::detect_format(&data).unwrap(), formats::ANDROID);
}

/// Test for Gta3Save::detect_format() over data that is not a save.
#[test]
fn detect_format_unrecognized() {

    // Garbage, empty data and truncated saves must fail cleanly, never panic.
    assert!(matches!(Gta3Save::detect_format(&[]), Err(RgsmError::FormatNotRecognized)));
    assert!(matches!(Gta3Save::detect_format(&[0x55; 512]), Err(RgsmError::FormatNotRecognized)));
    assert!(matches!(Gta3Save::detect_format(b"SCR\0"), Err(RgsmError::FormatNotRecognized)));

    let data = to_file(&synthetic_save(0x620), &SaveParams::new(formats::PC));
    assert!(matches!(Gta3Save::detect_format(&data[..0x60]), Err(RgsmError::FormatNotRecognized)));
}

/// Test for a full write/read round trip.
#[test]
fn save_round_trip() {
    let params = SaveParams::new(formats::PC);

    let mut save = synthetic_save(0x620);
    save.simple_vars_mut().set_last_mission_passed_name("Give Me Liberty".to_owned());
    save.simple_vars_mut().set_game_clock_hours(23);
    save.set_gangs(Dummy::new(vec![1, 2, 3, 4]));

    let mut generator = CarGenerator::default();
    generator.set_model(90);
    generator.set_area_size(10.0);
    save.car_generators_mut().set_number_of_car_generators(1);
    save.car_generators_mut().car_generators_mut()[0] = generator;

    // 20 data blocks plus 4 padding blocks, whose payloads add up to one byte short of
    // the nominal game data size, plus the trailer.
    let data = to_file(&save, &params);
    assert_eq!(data.len() as u64, (SIZE_OF_ONE_GAME - 1) + 24 * 4 + 4);

    let read_back = Gta3Save::read(&mut Cursor::new(data.as_slice()), &params).unwrap();
    assert_eq!(read_back, save);

    // A second write must produce the exact same bytes.
    assert_eq!(to_file(&read_back, &params), data);
}

/// Test for the alignment closing the first block.
#[test]
fn first_block_alignment() {
    let params = SaveParams::new(formats::PC);

    // A script section of 6 bytes leaves the first block 2 bytes short of a word
    // boundary, so its header must report the aligned size.
    let mut save = synthetic_save(0x620);
    let mut scripts = vec![0; 6];
    scripts[..4].copy_from_slice(b"SCR\0");
    save.set_scripts(Dummy::new(scripts));

    let data = to_file(&save, &params);
    let first_block_size = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    assert_eq!(first_block_size, 0xBC + 4 + 8);

    let read_back = Gta3Save::read(&mut Cursor::new(data.as_slice()), &params).unwrap();
    assert_eq!(read_back, save);
}

/// Test for reading a save whose game data total doesn't match the expected constant.
#[test]
fn read_tolerates_wrong_game_data_total() {
    let params = SaveParams::new(formats::PC);
    let save = synthetic_save(0x620);

    // Wedge an extra filler block between the tail padding and the trailer. The data
    // total no longer matches the expected constant, which gets logged but must not
    // abort the load.
    let mut data = to_file(&save, &params);
    let trailer = data.split_off(data.len() - 4);
    data.extend_from_slice(&[8, 0, 0, 0]);
    data.extend_from_slice(&[0; 8]);
    data.extend_from_slice(&trailer);

    let read_back = Gta3Save::read(&mut Cursor::new(data.as_slice()), &params).unwrap();
    assert_eq!(read_back, save);
}

/// Test for the checksum trailer of a written save.
#[test]
fn save_checksum() {
    let params = SaveParams::new(formats::PC);
    let data = to_file(&synthetic_save(0x620), &params);
    assert!(crate::container::verify_checksum(&data));
}

/// Test for the per-release simple variables sizes.
#[test]
fn simple_vars_sizes() {
    let vars = SimpleVariables::default();
    assert_eq!(vars.size(&SaveParams::new(formats::PC)), 0xBC);
    assert_eq!(vars.size(&SaveParams::new(formats::XBOX)), 0xBC);
    assert_eq!(vars.size(&SaveParams::new(formats::PS2_NAEU)), 0xB0);
    assert_eq!(vars.size(&SaveParams::new(formats::PS2_JP)), 0xB0);
    assert_eq!(vars.size(&SaveParams::new(formats::PS2_AU)), 0xA8);
    assert_eq!(vars.size(&SaveParams::new(formats::ANDROID)), 0xB0);
    assert_eq!(vars.size(&SaveParams::new(formats::IOS)), 0xB0);
}

/// Test for the simple variables round trip over every release layout.
#[test]
fn simple_vars_round_trip() {
    let mut vars = SimpleVariables::default();
    vars.set_curr_level(2);
    vars.set_game_clock_hours(12);
    vars.set_game_clock_minutes(34);
    vars.set_prefs_brightness(180);
    vars.set_prefs_show_subtitles(true);

    for format in [formats::PC, formats::XBOX, formats::PS2_NAEU, formats::PS2_JP, formats::PS2_AU, formats::ANDROID, formats::IOS] {
        let params = SaveParams::new(format);
        let data = crate::save::to_bytes(&vars, &params).unwrap();
        let read_back: SimpleVariables = crate::save::from_bytes(&data, &params).unwrap();

        assert_eq!(read_back.curr_level(), vars.curr_level(), "{format:?}");
        assert_eq!(read_back.game_clock_hours(), vars.game_clock_hours(), "{format:?}");
        assert_eq!(read_back.game_clock_minutes(), vars.game_clock_minutes(), "{format:?}");

        // The preferences only survive on PS2.
        if format.is_ps2() {
            assert_eq!(read_back.prefs_brightness(), vars.prefs_brightness(), "{format:?}");
            assert_eq!(read_back.prefs_show_subtitles(), vars.prefs_show_subtitles(), "{format:?}");
        }
    }
}

/// Test for the car generators block round trip.
#[test]
fn car_generators_round_trip() {
    let params = SaveParams::new(formats::PC);

    let mut generator = CarGenerator::default();
    generator.set_model(110);
    generator.set_color_1(-1);
    generator.set_color_2(-1);
    generator.set_force_spawn(true);
    generator.set_min_delay(10);
    generator.set_max_delay(20);
    generator.set_uses_remaining(5);

    let mut data = CarGeneratorData::default();
    data.set_number_of_car_generators(1);
    data.set_number_of_enabled_car_generators(1);
    data.car_generators_mut()[0] = generator;

    assert_eq!(data.size(&params), 0x2D1C);

    let bytes = crate::save::to_bytes(&data, &params).unwrap();
    let read_back: CarGeneratorData = crate::save::from_bytes(&bytes, &params).unwrap();
    assert_eq!(read_back, data);
    assert_eq!(read_back.car_generators()[0], generator);
}

/// Test for Gta3Save::sections().
#[test]
fn sections_report() {
    let params = SaveParams::new(formats::PC);
    let save = synthetic_save(0x620);
    let sections = save.sections(&params);

    assert_eq!(sections.len(), SECTIONS.len());
    assert_eq!(sections[0], ("SimpleVars", 0xBC));
    assert_eq!(sections[1], ("Scripts", 8));
    assert_eq!(sections[2], ("PedPool", 0x620));
    assert_eq!(sections[14], ("CarGenerators", 0x2D1C));
}

/// Test for the disk-based Gta3Save::load()/save() pair.
#[test]
fn load_and_save_from_disk() {
    let params = SaveParams::new(formats::PC);
    let save = synthetic_save(0x620);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GTA3sf1.b");
    save.save(&path, &params).unwrap();

    let (read_back, read_params) = Gta3Save::load(&path).unwrap();
    assert_eq!(*read_params.format(), formats::PC);
    assert_eq!(read_back, save);
}
