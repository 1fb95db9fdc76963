//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the GTA Vice City save orchestrator.

use std::io::Cursor;

use crate::error::RgsmError;
use crate::format::SaveParams;
use crate::save::{Dummy, SaveData};

use super::simple_vars::{RADIO_STATION_COUNT, STEAM_MARKER};
use super::*;

/// This function builds a minimal save whose layout matches what the game would produce.
fn synthetic_save() -> ViceCitySave {
    let mut scripts = vec![0; 8];
    scripts[..4].copy_from_slice(b"SCR\0");

    let mut save = ViceCitySave::default();
    save.set_scripts(Dummy::new(scripts));
    save.set_ped_pool(Dummy::new(vec![0; 64]));
    save
}

fn to_file(save: &ViceCitySave, params: &SaveParams) -> Vec<u8> {
    let mut file = Cursor::new(vec![]);
    save.write(&mut file, params).unwrap();
    file.into_inner()
}

/// Test for ViceCitySave::detect_format() over the two PC layouts.
#[test]
fn detect_format_pc() {

    // The Steam marker in the simple variables shifts the script tag by 4 bytes.
    let data = to_file(&synthetic_save(), &SaveParams::new(formats::PC_RETAIL));
    assert_eq!(ViceCitySave::detect_format(&data).unwrap(), formats::PC_RETAIL);

    let data = to_file(&synthetic_save(), &SaveParams::new(formats::PC_STEAM));
    assert_eq!(ViceCitySave::detect_format(&data).unwrap(), formats::PC_STEAM);
}

/// Test for ViceCitySave::detect_format() over data that is not a save.
#[test]
fn detect_format_unrecognized() {

    // Garbage, empty data and truncated saves must fail cleanly, never panic.
    assert!(matches!(ViceCitySave::detect_format(&[]), Err(RgsmError::FormatNotRecognized)));
    assert!(matches!(ViceCitySave::detect_format(&[0x55; 512]), Err(RgsmError::FormatNotRecognized)));

    let data = to_file(&synthetic_save(), &SaveParams::new(formats::PC_RETAIL));
    assert!(matches!(ViceCitySave::detect_format(&data[..0x60]), Err(RgsmError::FormatNotRecognized)));
}

/// Test for a full write/read round trip, on both PC layouts.
#[test]
fn save_round_trip() {
    for format in [formats::PC_RETAIL, formats::PC_STEAM] {
        let params = SaveParams::new(format);

        let mut save = synthetic_save();
        save.simple_vars_mut().set_save_name("In The Beginning".to_owned());
        save.simple_vars_mut().set_curr_area(4);
        save.simple_vars_mut().set_all_taxis_have_nitro(true);
        save.set_set_pieces(Dummy::new(vec![5, 6, 7, 8]));

        let data = to_file(&save, &params);
        let read_back = ViceCitySave::read(&mut Cursor::new(data.as_slice()), &params).unwrap();
        assert_eq!(read_back, save);

        // A second write must produce the exact same bytes.
        assert_eq!(to_file(&read_back, &params), data);
    }
}

/// Test for reading a save whose game data total doesn't match the expected constant.
#[test]
fn read_tolerates_wrong_game_data_total() {
    let params = SaveParams::new(formats::PC_RETAIL);
    let save = synthetic_save();

    // Wedge an extra filler block between the tail padding and the trailer. The data
    // total no longer matches the expected constant, which gets logged but must not
    // abort the load.
    let mut data = to_file(&save, &params);
    let trailer = data.split_off(data.len() - 4);
    data.extend_from_slice(&[8, 0, 0, 0]);
    data.extend_from_slice(&[0; 8]);
    data.extend_from_slice(&trailer);

    let read_back = ViceCitySave::read(&mut Cursor::new(data.as_slice()), &params).unwrap();
    assert_eq!(read_back, save);
}

/// Test for the checksum trailer of a written save.
#[test]
fn save_checksum() {
    let params = SaveParams::new(formats::PC_RETAIL);
    let data = to_file(&synthetic_save(), &params);
    assert!(crate::container::verify_checksum(&data));
}

/// Test for the per-release simple variables sizes.
#[test]
fn simple_vars_sizes() {
    let vars = SimpleVariables::default();
    assert_eq!(vars.size(&SaveParams::new(formats::PC_RETAIL)), 0xE4);
    assert_eq!(vars.size(&SaveParams::new(formats::PC_STEAM)), 0xE8);
}

/// Test for the Steam marker in the simple variables.
#[test]
fn simple_vars_steam_marker() {
    let params = SaveParams::new(formats::PC_STEAM);
    let data = crate::save::to_bytes(&SimpleVariables::default(), &params).unwrap();

    // The marker sits right after the name, timestamp, save size, level and camera.
    let offset = 48 + 16 + 4 + 4 + 12;
    assert_eq!(&data[offset..offset + 4], &STEAM_MARKER.to_le_bytes());
}

/// Test for the radio station list being clamped to its fixed capacity.
#[test]
fn simple_vars_radio_station_list() {
    let params = SaveParams::new(formats::PC_RETAIL);

    // Extra entries get dropped on encode, missing ones get zero-filled.
    let mut vars = SimpleVariables::default();
    vars.set_radio_station_position_list((0..12).collect());

    let data = crate::save::to_bytes(&vars, &params).unwrap();
    let read_back: SimpleVariables = crate::save::from_bytes(&data, &params).unwrap();
    assert_eq!(read_back.radio_station_position_list(), &(0..10).collect::<Vec<i32>>());

    let mut vars = SimpleVariables::default();
    vars.set_radio_station_position_list(vec![7]);

    let data = crate::save::to_bytes(&vars, &params).unwrap();
    let read_back: SimpleVariables = crate::save::from_bytes(&data, &params).unwrap();
    assert_eq!(read_back.radio_station_position_list().len(), RADIO_STATION_COUNT);
    assert_eq!(read_back.radio_station_position_list()[0], 7);
    assert_eq!(read_back.radio_station_position_list()[1], 0);
}

/// Test for ViceCitySave::sections().
#[test]
fn sections_report() {
    let params = SaveParams::new(formats::PC_RETAIL);
    let save = synthetic_save();
    let sections = save.sections(&params);

    assert_eq!(sections.len(), SECTIONS.len());
    assert_eq!(sections[0], ("SimpleVars", 0xE4));
    assert_eq!(sections[1], ("Scripts", 8));
    assert_eq!(sections[2], ("PedPool", 64));
}

/// Test for the disk-based ViceCitySave::load()/save() pair.
#[test]
fn load_and_save_from_disk() {
    let params = SaveParams::new(formats::PC_STEAM);
    let save = synthetic_save();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GTAVCsf1.b");
    save.save(&path, &params).unwrap();

    let (read_back, read_params) = ViceCitySave::load(&path).unwrap();
    assert_eq!(*read_params.format(), formats::PC_STEAM);
    assert_eq!(read_back, save);
}
