//! Synthetic `.covi` records for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use covi_core::records::force::layout::{FORCE_MARKER, FORCE_SAMPLE_COUNT};
use covi_core::records::pressure::layout::{HEIGHT_OFFSET, VALUES_OFFSET, WIDTH_OFFSET};

/// Pressure record with raw (unscaled) payload values.
pub fn pressure_record(height: i16, width: i16, raw: &[f64]) -> Vec<u8> {
    let mut bytes = vec![0u8; VALUES_OFFSET];
    bytes[HEIGHT_OFFSET..HEIGHT_OFFSET + 2].copy_from_slice(&height.to_be_bytes());
    bytes[WIDTH_OFFSET..WIDTH_OFFSET + 2].copy_from_slice(&width.to_be_bytes());
    for value in raw {
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    bytes
}

/// Force record whose samples are `base + i`, behind a junk header.
pub fn force_record(base: f64) -> Vec<u8> {
    let mut bytes = vec![0x11u8; 64];
    bytes.extend_from_slice(&FORCE_MARKER);
    for i in 0..FORCE_SAMPLE_COUNT {
        bytes.extend_from_slice(&(base + i as f64).to_be_bytes());
    }
    bytes.extend_from_slice(&[0u8; 16]);
    bytes
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) {
    fs::write(dir.join(name), bytes).expect("write fixture");
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(str::to_string)
        .collect()
}
