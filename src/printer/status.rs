//! Sensor readings returned by status queries (`GS r`).
//!
//! These are produced on demand and consumed immediately to build a reply
//! byte. Nothing here is persisted by the decoder.

/// Reading of a paper sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaperSensor {
    #[default]
    Present,
    NotPresent,
}

/// Paper near-end and end sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaperStatus {
    pub near_end_sensor: PaperSensor,
    pub end_sensor: PaperSensor,
}

impl PaperStatus {
    /// `GS r 1` reply: bits 0-1 near-end, bits 2-3 end.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.near_end_sensor == PaperSensor::NotPresent {
            byte |= 0x03;
        }
        if self.end_sensor == PaperSensor::NotPresent {
            byte |= 0x0C;
        }
        byte
    }
}

/// Signal level on the drawer kick-out connector (pin 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerLevel {
    #[default]
    Low,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerStatus {
    pub connector: DrawerLevel,
}

impl DrawerStatus {
    /// `GS r 2` reply: bit 0 set when the connector is high.
    pub fn to_byte(self) -> u8 {
        u8::from(self.connector == DrawerLevel::High)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InkDetection {
    #[default]
    Detected,
    NotDetected,
}

/// Ink near-end detection for both colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InkStatus {
    pub first_color: InkDetection,
    pub second_color: InkDetection,
}

impl InkStatus {
    /// `GS r 4` reply: bit 0 first color detected, bit 1 second color detected.
    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.first_color == InkDetection::Detected {
            byte |= 0x01;
        }
        if self.second_color == InkDetection::Detected {
            byte |= 0x02;
        }
        byte
    }
}

/// Drawer kick-out connector pin driven by `ESC p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerPin {
    Pin2,
    Pin5,
}

impl DrawerPin {
    /// Physical pin number on the connector
    pub fn number(self) -> u8 {
        match self {
            Self::Pin2 => 2,
            Self::Pin5 => 5,
        }
    }
}
