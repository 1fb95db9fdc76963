//---------------------------------------------------------------------------//
// Copyright (c) 2017-2026 Ismael Gutiérrez González. All rights reserved.
//
// This file is part of the Rusted Game Save Manager (RGSM) project,
// which can be found here: https://github.com/Frodo45127/rgsm.
//
// This file is licensed under the MIT license, which can be found here:
// https://github.com/Frodo45127/rgsm/blob/master/LICENSE.
//---------------------------------------------------------------------------//

//! Tests for the [`ReadBytes`] trait.
//!
//! [`ReadBytes`]: crate::binary::ReadBytes

use std::io::{Cursor, Seek};

use super::ReadBytes;

//---------------------------------------------------------------------------//
//                          Normal Decoders
//---------------------------------------------------------------------------//

/// Test for ReadBytes::len().
#[test]
fn len() {

    // Check it returns the full length without moving the cursor.
    let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    cursor.skip(2).unwrap();
    assert_eq!(cursor.len().unwrap(), 4);
    assert_eq!(cursor.stream_position().unwrap(), 2);
}

/// Test for ReadBytes::read_slice().
#[test]
fn read_slice() {

    // Check the reader works without rewinding.
    let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    assert_eq!(cursor.read_slice(2, false).unwrap(), vec![1, 2]);
    assert_eq!(cursor.stream_position().unwrap(), 2);

    // Check the reader works rewinding.
    let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    assert_eq!(cursor.read_slice(2, true).unwrap(), vec![1, 2]);
    assert_eq!(cursor.stream_position().unwrap(), 0);

    // Check the reader fails when there are not enough bytes.
    let mut cursor = Cursor::new(vec![1, 2]);
    assert!(cursor.read_slice(4, false).is_err());
}

/// Test for ReadBytes::read_bool().
#[test]
fn read_bool() {

    // Any non-zero bit in any of the bytes makes the bool true, even past the first byte.
    let mut cursor = Cursor::new(vec![0, 0, 0, 0, 0, 1, 1, 0]);
    assert_eq!(cursor.read_bool(4).unwrap(), false);
    assert_eq!(cursor.read_bool(2).unwrap(), true);
    assert_eq!(cursor.read_bool(1).unwrap(), true);
    assert_eq!(cursor.read_bool(1).unwrap(), false);

    // Check the reader fails for a width of 0 bytes.
    let mut cursor = Cursor::new(vec![1]);
    assert!(cursor.read_bool(0).is_err());

    // Check the reader fails when there are not enough bytes.
    let mut cursor = Cursor::new(vec![1]);
    assert!(cursor.read_bool(2).is_err());
}

/// Test for ReadBytes::read_u8().
#[test]
fn read_u8() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![10]);
    assert_eq!(cursor.read_u8().unwrap(), 10);

    // Check the reader fails on empty data.
    let mut cursor = Cursor::new(vec![]);
    assert!(cursor.read_u8().is_err());
}

/// Test for ReadBytes::read_u16().
#[test]
fn read_u16() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![2, 1]);
    assert_eq!(cursor.read_u16().unwrap(), 258);

    // Check the reader fails when there are not enough bytes.
    let mut cursor = Cursor::new(vec![2]);
    assert!(cursor.read_u16().is_err());
}

/// Test for ReadBytes::read_u32().
#[test]
fn read_u32() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![2, 1, 0, 0]);
    assert_eq!(cursor.read_u32().unwrap(), 258);

    // Check the reader fails when there are not enough bytes.
    let mut cursor = Cursor::new(vec![2, 1]);
    assert!(cursor.read_u32().is_err());
}

/// Test for ReadBytes::read_u64().
#[test]
fn read_u64() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![2, 1, 0, 0, 0, 0, 0, 0]);
    assert_eq!(cursor.read_u64().unwrap(), 258);

    // Check the reader fails when there are not enough bytes.
    let mut cursor = Cursor::new(vec![2, 1, 0, 0]);
    assert!(cursor.read_u64().is_err());
}

/// Test for ReadBytes::read_i8().
#[test]
fn read_i8() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![254]);
    assert_eq!(cursor.read_i8().unwrap(), -2);
}

/// Test for ReadBytes::read_i16().
#[test]
fn read_i16() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![254, 254]);
    assert_eq!(cursor.read_i16().unwrap(), -258);
}

/// Test for ReadBytes::read_i32().
#[test]
fn read_i32() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![254, 254, 255, 255]);
    assert_eq!(cursor.read_i32().unwrap(), -258);
}

/// Test for ReadBytes::read_i64().
#[test]
fn read_i64() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![254, 254, 255, 255, 255, 255, 255, 255]);
    assert_eq!(cursor.read_i64().unwrap(), -258);
}

/// Test for ReadBytes::read_f32().
#[test]
fn read_f32() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![51, 51, 35, 65]);
    assert_eq!(cursor.read_f32().unwrap(), 10.2);
}

/// Test for ReadBytes::read_f64().
#[test]
fn read_f64() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![102, 102, 102, 102, 102, 102, 36, 64]);
    assert_eq!(cursor.read_f64().unwrap(), 10.2);
}

/// Test for ReadBytes::read_char_u8().
#[test]
fn read_char_u8() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![65]);
    assert_eq!(cursor.read_char_u8().unwrap(), 'A');
}

/// Test for ReadBytes::read_char_u16().
#[test]
fn read_char_u16() {

    // Check the reader works properly.
    let mut cursor = Cursor::new(vec![65, 0]);
    assert_eq!(cursor.read_char_u16().unwrap(), 'A');

    // Check the reader fails on a surrogate unit.
    let mut cursor = Cursor::new(vec![0x00, 0xD8]);
    assert!(cursor.read_char_u16().is_err());
}

//---------------------------------------------------------------------------//
//                          String Decoders
//---------------------------------------------------------------------------//

/// Test for ReadBytes::read_string_u8().
#[test]
fn read_string_u8() {

    // The whole field is consumed, but the value ends at the first null byte.
    let mut cursor = Cursor::new(vec![87, 97, 107, 111, 0, 33, 33, 33]);
    assert_eq!(cursor.read_string_u8(8).unwrap(), "Wako");
    assert_eq!(cursor.stream_position().unwrap(), 8);

    // A field with no null byte uses all its characters.
    let mut cursor = Cursor::new(vec![87, 97, 107, 111]);
    assert_eq!(cursor.read_string_u8(4).unwrap(), "Wako");

    // Check the reader fails when the field doesn't fit in the data.
    let mut cursor = Cursor::new(vec![87, 97]);
    assert!(cursor.read_string_u8(4).is_err());
}

/// Test for ReadBytes::read_string_u8_0terminated().
#[test]
fn read_string_u8_0terminated() {

    // Check the reader stops just after the terminator.
    let mut cursor = Cursor::new(vec![87, 97, 107, 111, 0, 33]);
    assert_eq!(cursor.read_string_u8_0terminated().unwrap(), "Wako");
    assert_eq!(cursor.stream_position().unwrap(), 5);

    // Check the reader fails when there is no terminator.
    let mut cursor = Cursor::new(vec![87, 97, 107, 111]);
    assert!(cursor.read_string_u8_0terminated().is_err());
}

/// Test for ReadBytes::read_string_u16().
#[test]
fn read_string_u16() {

    // The whole field is consumed, but the value ends at the first null unit.
    let mut cursor = Cursor::new(vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0, 33, 0]);
    assert_eq!(cursor.read_string_u16(6).unwrap(), "Wako");
    assert_eq!(cursor.stream_position().unwrap(), 12);

    // Check the reader fails when the field doesn't fit in the data.
    let mut cursor = Cursor::new(vec![87, 0]);
    assert!(cursor.read_string_u16(2).is_err());
}

/// Test for ReadBytes::read_string_u16_0terminated().
#[test]
fn read_string_u16_0terminated() {

    // Check the reader stops just after the terminator.
    let mut cursor = Cursor::new(vec![87, 0, 97, 0, 107, 0, 111, 0, 0, 0, 33, 0]);
    assert_eq!(cursor.read_string_u16_0terminated().unwrap(), "Wako");
    assert_eq!(cursor.stream_position().unwrap(), 10);

    // Check the reader fails when there is no terminator.
    let mut cursor = Cursor::new(vec![87, 0, 97, 0]);
    assert!(cursor.read_string_u16_0terminated().is_err());
}

//---------------------------------------------------------------------------//
//                          Cursor Manipulation
//---------------------------------------------------------------------------//

/// Test for ReadBytes::align().
#[test]
fn align() {

    // Check the cursor lands on the next multiple of the word size.
    let mut cursor = Cursor::new(vec![0; 16]);
    cursor.skip(1).unwrap();
    assert_eq!(cursor.align(4).unwrap(), 4);
    assert_eq!(cursor.stream_position().unwrap(), 4);

    // Check an aligned cursor doesn't move.
    assert_eq!(cursor.align(4).unwrap(), 4);
    assert_eq!(cursor.stream_position().unwrap(), 4);

    // Check a word size smaller than 2 is a no-op.
    cursor.skip(1).unwrap();
    assert_eq!(cursor.align(1).unwrap(), 5);

    // Check it works with other word sizes.
    assert_eq!(cursor.align(8).unwrap(), 8);
}

/// Test for ReadBytes::skip().
#[test]
fn skip() {

    // Check it works both forward and backwards.
    let mut cursor = Cursor::new(vec![1, 2, 3, 4]);
    cursor.skip(3).unwrap();
    assert_eq!(cursor.read_u8().unwrap(), 4);

    cursor.skip(-2).unwrap();
    assert_eq!(cursor.read_u8().unwrap(), 3);
}
