//! # Device Identity
//!
//! What a device reports through `GS I` (printer ID) queries.
//!
//! [`DeviceInfo`] deserializes with per-field defaults, so a device profile
//! file only needs the fields it wants to change:
//!
//! ```
//! use escpos_emu::printer::DeviceInfo;
//!
//! let info: DeviceInfo = serde_json::from_str(r#"{ "serial_number": "A-42" }"#)?;
//! assert_eq!(info.serial_number, "A-42");
//! assert_eq!(info.firmware_version_name, "0.0.1");
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EmuError;

/// Immutable identity record, set once when a device is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub firmware_version_name: String,
    pub firmware_version_code: u8,
    pub maker_name: String,
    pub model_name: String,
    pub serial_number: String,
    pub model_id: u8,

    /// Identity only. The `GS I` font query (`0x45`) replies with an empty
    /// B-packet and does not report this name.
    pub font_name: String,

    pub multi_byte_character_supported: bool,
    pub auto_cutter_installed: bool,
    pub display_connected: bool,
    pub peeler_function_available: bool,
}

impl DeviceInfo {
    /// Load a (possibly partial) device profile from a JSON file.
    ///
    /// # Errors
    ///
    /// [`EmuError::Io`] if the file cannot be read, [`EmuError::Profile`] if
    /// it is not a valid profile.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EmuError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| EmuError::Profile(format!("{}: {}", path.display(), e)))
    }

    /// Capability bits shared by the type-ID reply and the A-packet type info.
    pub fn capability_flags(&self) -> u8 {
        let mut flags = 0;
        if self.multi_byte_character_supported {
            flags |= 0x01;
        }
        if self.auto_cutter_installed {
            flags |= 0x02;
        }
        if self.display_connected {
            flags |= 0x04;
        }
        flags
    }
}

impl Default for DeviceInfo {
    fn default() -> Self {
        Self {
            firmware_version_name: "0.0.1".to_string(),
            firmware_version_code: 12,
            maker_name: "Jantje19".to_string(),
            model_name: "NodeJS".to_string(),
            serial_number: "NODE".to_string(),
            model_id: 12,
            font_name: "Latin".to_string(),
            multi_byte_character_supported: false,
            auto_cutter_installed: true,
            display_connected: false,
            peeler_function_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        assert_eq!(DeviceInfo::default().capability_flags(), 0x02);
    }

    #[test]
    fn test_all_flags() {
        let info = DeviceInfo {
            multi_byte_character_supported: true,
            display_connected: true,
            ..Default::default()
        };
        assert_eq!(info.capability_flags(), 0x07);
    }

    #[test]
    fn test_missing_profile_file() {
        let err = DeviceInfo::from_json_file("/nonexistent/profile.json").unwrap_err();
        assert!(matches!(err, EmuError::Io(_)));
    }

    #[test]
    fn test_partial_profile() {
        let info: DeviceInfo =
            serde_json::from_str(r#"{ "model_name": "TM-T88", "display_connected": true }"#)
                .unwrap();
        assert_eq!(info.model_name, "TM-T88");
        assert!(info.display_connected);
        assert_eq!(info.maker_name, "Jantje19");
    }
}
