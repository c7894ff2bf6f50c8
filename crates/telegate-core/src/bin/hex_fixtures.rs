use std::fs;
use std::path::{Path, PathBuf};

use telegate_core::{f32_to_half, hex_dump};

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");

    let valid = build_frame(
        0xB1,
        1,
        &Timestamp {
            year: 2023,
            month: 6,
            day: 15,
            hour: 12,
            minute: 30,
            second: 0,
        },
        &[1.0],
    )?;
    let second = build_frame(
        0xB2,
        0x0102,
        &Timestamp {
            year: 2024,
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
            second: 5,
        },
        &[-2.0, 0.5],
    )?;

    write_fixture(
        &root.join("basic").join("input.hex"),
        "two valid frames",
        &[valid.clone(), second],
    )?;

    let mut bad_checksum = valid.clone();
    if let Some(last) = bad_checksum.last_mut() {
        *last = last.wrapping_add(1);
    }
    write_fixture(
        &root.join("checksum_error").join("input.hex"),
        "second frame's trailing checksum byte is corrupted",
        &[valid.clone(), bad_checksum],
    )?;

    let mut unknown_function = valid.clone();
    unknown_function[1] = 0xA1;
    let mut truncated = build_frame(
        0xB3,
        1,
        &Timestamp {
            year: 2023,
            month: 6,
            day: 15,
            hour: 12,
            minute: 30,
            second: 0,
        },
        &[-2.0],
    )?;
    // Declared payload of 4 bytes against 2 actually present.
    truncated[12] = 0x04;
    write_fixture(
        &root.join("mixed").join("input.hex"),
        "valid, unknown function code, truncated payload",
        &[valid, unknown_function, truncated],
    )?;

    Ok(())
}

struct Timestamp {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

fn build_frame(
    function: u8,
    gateway: u16,
    timestamp: &Timestamp,
    samples: &[f32],
) -> Result<Vec<u8>, String> {
    let mut payload = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let bits = f32_to_half(sample).map_err(|err| err.to_string())?;
        payload.extend_from_slice(&bits.to_be_bytes());
    }
    let checksum = payload
        .iter()
        .fold(0u8, |sum, byte| sum.wrapping_add(*byte));

    let mut frame = vec![0x00, function];
    frame.extend_from_slice(&gateway.to_be_bytes());
    frame.extend_from_slice(&timestamp.year.to_be_bytes());
    frame.push(timestamp.month);
    frame.push(timestamp.day);
    frame.push(timestamp.hour);
    frame.push(timestamp.minute);
    frame.push(timestamp.second);
    frame.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    frame.extend_from_slice(&payload);
    frame.push(checksum);
    Ok(frame)
}

fn write_fixture(path: &Path, comment: &str, frames: &[Vec<u8>]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create {}: {}", parent.display(), err))?;
    }

    let mut content = format!("# {comment}\n");
    for frame in frames {
        content.push_str(&hex_dump(frame));
        content.push('\n');
    }
    fs::write(path, content).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
