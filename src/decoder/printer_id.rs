//! `GS I n` (Transmit printer ID) replies.
//!
//! | n | Reply |
//! |---|-------|
//! | 0x01 / 0x31 | Model ID (1 byte) |
//! | 0x02 / 0x32 | Type ID (1 byte, capability bits) |
//! | 0x03 / 0x33 | Firmware version code (1 byte) |
//! | 0x21 | A-packet: type info |
//! | 0x23, 0x24, 0x60, 0x6E | A-packet: model specific (empty) |
//! | 0x41 | B-packet: firmware version name |
//! | 0x42 | B-packet: maker name |
//! | 0x43 | B-packet: model name |
//! | 0x44 | B-packet: serial number |
//! | 0x45 | B-packet: font of language (empty) |
//! | 0x6F, 0x70 | B-packet: model specific (empty) |
//!
//! ## Packet Framing
//!
//! ```text
//! A-packet:  3D 21 <payload...> 00
//! B-packet:  5F <payload...> 00      (payload <= 80 bytes)
//! ```

use super::dual_encoded;
use crate::error::DecodeError;
use crate::printer::DeviceInfo;

/// Longest identity string a B-packet can carry
pub const MAX_B_PACKET_PAYLOAD: usize = 80;

/// Wrap `payload` in an A-packet envelope.
pub fn a_packet(payload: &[u8]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(payload.len() + 3);
    packet.extend_from_slice(&[0x3D, 0x21]);
    packet.extend_from_slice(payload);
    packet.push(0x00);
    packet
}

/// Wrap `payload` in a B-packet envelope.
///
/// # Errors
///
/// [`DecodeError::PayloadTooLong`] when `payload` exceeds
/// [`MAX_B_PACKET_PAYLOAD`] bytes.
pub fn b_packet(payload: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if payload.len() > MAX_B_PACKET_PAYLOAD {
        return Err(DecodeError::PayloadTooLong { len: payload.len() });
    }

    let mut packet = Vec::with_capacity(payload.len() + 2);
    packet.push(0x5F);
    packet.extend_from_slice(payload);
    packet.push(0x00);
    Ok(packet)
}

/// Build the reply for printer ID type `n`.
pub(super) fn reply(info: &DeviceInfo, n: u8) -> Result<Vec<u8>, DecodeError> {
    if let Some(index) = dual_encoded(n, 4).filter(|&index| index > 0) {
        let byte = match index {
            1 => info.model_id,
            2 => info.capability_flags(),
            _ => info.firmware_version_code,
        };
        return Ok(vec![byte]);
    }

    match n {
        0x21 => {
            let peeler = if info.peeler_function_available { 0x01 } else { 0x00 };
            Ok(a_packet(&[info.capability_flags() | 0x40, 0x40, peeler | 0x40]))
        }
        // Model specific, nothing is documented for these
        0x23 | 0x24 | 0x60 | 0x6E => Ok(a_packet(&[])),
        0x41 => b_packet(info.firmware_version_name.as_bytes()),
        0x42 => b_packet(info.maker_name.as_bytes()),
        0x43 => b_packet(info.model_name.as_bytes()),
        0x44 => b_packet(info.serial_number.as_bytes()),
        0x45 | 0x6F | 0x70 => b_packet(&[]),
        _ => Err(DecodeError::InvalidArgument {
            command: "printer ID",
            value: usize::from(n),
        }),
    }
}
