use std::net::SocketAddr;

use crate::TelemetryRecord;
use crate::codec::half::half_to_f32;

use super::checksum::payload_checksum;
use super::error::ParseFailure;
use super::layout;
use super::reader::{FrameReader, is_recognized_function};

/// Decode one complete telemetry frame into a [`TelemetryRecord`].
///
/// `frame` is `None` when the transport handed over no buffer at all; the
/// sender endpoint is supplied by the transport and absent for offline
/// inputs. The decode is a pure function of its arguments: no state is
/// retained between calls and the buffer is never mutated, so concurrent
/// calls over independent buffers are safe.
///
/// # Examples
/// ```
/// use telegate_core::decode_frame;
///
/// let frame = [
///     0x00, 0xB1, 0x00, 0x01, 0x07, 0xE7, 0x06, 0x0F, 0x0C, 0x1E, 0x00,
///     0x00, 0x02, 0x3C, 0x00, 0x3C,
/// ];
/// let record = decode_frame(Some(&frame), None)?;
/// assert_eq!(record.gateway_id, 1);
/// assert_eq!(record.samples, vec![1.0]);
/// # Ok::<(), telegate_core::ParseFailure>(())
/// ```
pub fn decode_frame(
    frame: Option<&[u8]>,
    sender: Option<SocketAddr>,
) -> Result<TelemetryRecord, ParseFailure> {
    let frame = frame.ok_or(ParseFailure::MissingBuffer)?;
    let reader = FrameReader::new(frame);

    let empty = ParseFailure::Empty {
        actual: reader.len(),
    };
    if reader.len() < layout::MIN_LEN {
        return Err(empty);
    }
    let function = reader.read_u8(layout::FUNC_CODE_OFFSET).ok_or(empty)?;
    if !is_recognized_function(function) {
        return Err(ParseFailure::UnknownFunction { value: function });
    }

    let header_too_short = ParseFailure::HeaderTooShort {
        needed: layout::HEADER_LEN,
        actual: reader.len(),
    };
    let gateway_id = reader
        .read_u16_be(layout::GATEWAY_ID_RANGE)
        .ok_or(header_too_short.clone())?;
    let year = reader
        .read_u16_be(layout::YEAR_RANGE)
        .ok_or(header_too_short.clone())?;
    let month = reader
        .read_u8(layout::MONTH_OFFSET)
        .ok_or(header_too_short.clone())?;
    let day = reader
        .read_u8(layout::DAY_OFFSET)
        .ok_or(header_too_short.clone())?;
    let hour = reader
        .read_u8(layout::HOUR_OFFSET)
        .ok_or(header_too_short.clone())?;
    let minute = reader
        .read_u8(layout::MINUTE_OFFSET)
        .ok_or(header_too_short.clone())?;
    let second = reader
        .read_u8(layout::SECOND_OFFSET)
        .ok_or(header_too_short.clone())?;
    let declared = reader
        .read_u16_be(layout::PAYLOAD_LEN_RANGE)
        .ok_or(header_too_short)? as usize;

    // Payload and the trailing checksum byte must both lie inside the frame.
    let truncated = ParseFailure::PayloadTruncated {
        declared,
        actual: reader.len(),
    };
    let needed = layout::PAYLOAD_OFFSET + declared + layout::CHECKSUM_LEN;
    if reader.len() < needed {
        return Err(truncated);
    }
    let payload = reader
        .read_slice(layout::PAYLOAD_OFFSET..layout::PAYLOAD_OFFSET + declared)
        .ok_or(truncated.clone())?;
    let stored = reader
        .read_u8(layout::PAYLOAD_OFFSET + declared)
        .ok_or(truncated)?;

    let computed = payload_checksum(payload);
    if computed != stored {
        return Err(ParseFailure::ChecksumMismatch { computed, stored });
    }

    let samples: Vec<f32> = payload
        .chunks_exact(layout::SAMPLE_LEN)
        .map(|pair| half_to_f32(u16::from_be_bytes([pair[0], pair[1]])))
        .collect();

    let (sender_ip, sender_port) = match sender {
        Some(addr) => (addr.ip().to_string(), addr.port()),
        None => (String::new(), 0),
    };

    Ok(TelemetryRecord {
        sender_ip,
        sender_port,
        function_code: format!("{function:02X}"),
        gateway_id,
        timestamp: format_timestamp(year, month, day, hour, minute, second),
        sample_count: samples.len(),
        samples,
    })
}

fn format_timestamp(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> String {
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}
