use alloc::string::String;
use core::fmt;

use super::{read_message, write_message, MESSAGE_TYPE, MMSI, REPEAT_INDICATOR};
use crate::core::{FieldDescriptor, FieldKind, FieldValue, MessageDescriptor};
use crate::error::{DeserializationError, SerializationError};
use crate::infra::codec::{
    bits::{BitReader, BitWriter},
    fields::{latitude_field, longitude_field},
    traits::{FieldAccess, FromBits, MessageData, ToBits},
};
use crate::protocol::lookups::{AtonType, EpfdType};

/// Reference point of the reported position, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimensions {
    pub to_bow: u16,
    pub to_stern: u16,
    pub to_port: u8,
    pub to_starboard: u8,
}

impl Dimensions {
    pub const fn new(to_bow: u16, to_stern: u16, to_port: u8, to_starboard: u8) -> Self {
        Self {
            to_bow,
            to_stern,
            to_port,
            to_starboard,
        }
    }
}

/// AIS message 21: Aids-to-Navigation report.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtonReport {
    pub repeat_indicator: u8,
    pub mmsi: u32,
    pub aton_type: AtonType,
    /// Up to 20 characters.
    pub name: String,
    /// `true` for high accuracy (< 10 m).
    pub position_accuracy: bool,
    /// Degrees, `None` when not available.
    pub longitude: Option<f64>,
    /// Degrees, `None` when not available.
    pub latitude: Option<f64>,
    pub dimensions: Dimensions,
    pub epfd: EpfdType,
    /// UTC second of the position fix, 60 and above carry special meanings.
    pub timestamp: u8,
    pub off_position: bool,
    /// Regional AtoN status bits.
    pub aton_status: u8,
    pub raim: bool,
    pub virtual_aton: bool,
    pub assigned_mode: bool,
    /// Characters beyond the first 20 of the name, up to 14 more.
    pub name_extension: String,
}

impl AtonReport {
    pub const NAME_CHARS: usize = 20;
    pub const NAME_EXTENSION_CHARS: usize = 14;
    /// "Time stamp not available".
    pub const TIMESTAMP_NOT_AVAILABLE: u8 = 60;

    pub fn new(mmsi: u32, aton_type: AtonType, name: &str) -> Self {
        Self {
            mmsi,
            aton_type,
            name: String::from(name),
            timestamp: Self::TIMESTAMP_NOT_AVAILABLE,
            ..Self::default()
        }
    }

    /// Name and extension joined.
    pub fn full_name(&self) -> String {
        let mut full = self.name.clone();
        full.push_str(&self.name_extension);
        full
    }
}

impl MessageData for AtonReport {
    const DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        id: 21,
        name: "Aids-to-navigation report",
        fields: &[
            MESSAGE_TYPE,
            REPEAT_INDICATOR,
            MMSI,
            FieldDescriptor::plain("aton_type", "Type of AtoN", FieldKind::Lookup, 5),
            FieldDescriptor::plain("name", "Name of AtoN", FieldKind::Text, 120),
            FieldDescriptor::plain("position_accuracy", "Position Accuracy", FieldKind::Flag, 1),
            longitude_field("longitude", "Longitude"),
            latitude_field("latitude", "Latitude"),
            FieldDescriptor::plain("to_bow", "Dimension A", FieldKind::Unsigned, 9),
            FieldDescriptor::plain("to_stern", "Dimension B", FieldKind::Unsigned, 9),
            FieldDescriptor::plain("to_port", "Dimension C", FieldKind::Unsigned, 6),
            FieldDescriptor::plain("to_starboard", "Dimension D", FieldKind::Unsigned, 6),
            FieldDescriptor::plain("epfd", "Type of EPFD", FieldKind::Lookup, 4),
            FieldDescriptor::plain("timestamp", "Time Stamp", FieldKind::Unsigned, 6),
            FieldDescriptor::plain("off_position", "Off-Position Indicator", FieldKind::Flag, 1),
            FieldDescriptor::plain("aton_status", "AtoN Status", FieldKind::Unsigned, 8),
            FieldDescriptor::plain("raim", "RAIM Flag", FieldKind::Flag, 1),
            FieldDescriptor::plain("virtual_aton", "Virtual AtoN Flag", FieldKind::Flag, 1),
            FieldDescriptor::plain("assigned_mode", "Assigned Mode Flag", FieldKind::Flag, 1),
            FieldDescriptor::spare(1),
            FieldDescriptor::plain(
                "name_extension",
                "Name of AtoN Extension",
                FieldKind::TrailingText,
                88,
            ),
        ],
    };
}

impl FieldAccess for AtonReport {
    fn field(&self, id: &'static str) -> Option<FieldValue> {
        match id {
            "msg_type" => Some(FieldValue::U8(Self::DESCRIPTOR.id)),
            "repeat_indicator" => Some(FieldValue::U8(self.repeat_indicator)),
            "mmsi" => Some(FieldValue::U32(self.mmsi)),
            "aton_type" => Some(FieldValue::U8(self.aton_type.into())),
            "name" => Some(FieldValue::Text(self.name.clone())),
            "position_accuracy" => Some(FieldValue::Bool(self.position_accuracy)),
            "longitude" => Some(FieldValue::Float(self.longitude)),
            "latitude" => Some(FieldValue::Float(self.latitude)),
            "to_bow" => Some(FieldValue::U16(self.dimensions.to_bow)),
            "to_stern" => Some(FieldValue::U16(self.dimensions.to_stern)),
            "to_port" => Some(FieldValue::U8(self.dimensions.to_port)),
            "to_starboard" => Some(FieldValue::U8(self.dimensions.to_starboard)),
            "epfd" => Some(FieldValue::U8(self.epfd.into())),
            "timestamp" => Some(FieldValue::U8(self.timestamp)),
            "off_position" => Some(FieldValue::Bool(self.off_position)),
            "aton_status" => Some(FieldValue::U8(self.aton_status)),
            "raim" => Some(FieldValue::Bool(self.raim)),
            "virtual_aton" => Some(FieldValue::Bool(self.virtual_aton)),
            "assigned_mode" => Some(FieldValue::Bool(self.assigned_mode)),
            "name_extension" => Some(FieldValue::Text(self.name_extension.clone())),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()> {
        match (id, value) {
            ("repeat_indicator", FieldValue::U8(v)) => self.repeat_indicator = v,
            ("mmsi", FieldValue::U32(v)) => self.mmsi = v,
            ("aton_type", FieldValue::U8(v)) => self.aton_type = AtonType::from(v),
            ("name", FieldValue::Text(v)) => self.name = v,
            ("position_accuracy", FieldValue::Bool(v)) => self.position_accuracy = v,
            ("longitude", FieldValue::Float(v)) => self.longitude = v,
            ("latitude", FieldValue::Float(v)) => self.latitude = v,
            ("to_bow", FieldValue::U16(v)) => self.dimensions.to_bow = v,
            ("to_stern", FieldValue::U16(v)) => self.dimensions.to_stern = v,
            ("to_port", FieldValue::U8(v)) => self.dimensions.to_port = v,
            ("to_starboard", FieldValue::U8(v)) => self.dimensions.to_starboard = v,
            ("epfd", FieldValue::U8(v)) => self.epfd = EpfdType::from(v),
            ("timestamp", FieldValue::U8(v)) => self.timestamp = v,
            ("off_position", FieldValue::Bool(v)) => self.off_position = v,
            ("aton_status", FieldValue::U8(v)) => self.aton_status = v,
            ("raim", FieldValue::Bool(v)) => self.raim = v,
            ("virtual_aton", FieldValue::Bool(v)) => self.virtual_aton = v,
            ("assigned_mode", FieldValue::Bool(v)) => self.assigned_mode = v,
            ("name_extension", FieldValue::Text(v)) => self.name_extension = v,
            _ => return None,
        }
        Some(())
    }
}

impl ToBits for AtonReport {
    fn write_bits(&self, writer: &mut BitWriter) -> Result<(), SerializationError> {
        write_message(self, writer)
    }
}

impl FromBits for AtonReport {
    fn read_bits(reader: &mut BitReader) -> Result<Self, DeserializationError> {
        read_message(reader)
    }
}

fn write_degrees(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(degrees) => writeln!(f, "{} (deg): {:.6}", label, degrees),
        None => writeln!(f, "{} (deg): not available", label),
    }
}

impl fmt::Display for AtonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AIS Message 21: Aids-to-navigation Report")?;
        writeln!(f, "Source ID: {}", self.mmsi)?;
        writeln!(f, "AtoN type: {}", u8::from(self.aton_type))?;
        writeln!(f, "AtoN name: {}{}", self.name, self.name_extension)?;
        writeln!(f, "Position accuracy: {}", self.position_accuracy as u8)?;
        write_degrees(f, "Latitude", self.latitude)?;
        write_degrees(f, "Longitude", self.longitude)?;
        writeln!(f, "Dimension A (m): {}", self.dimensions.to_bow)?;
        writeln!(f, "Dimension B (m): {}", self.dimensions.to_stern)?;
        writeln!(f, "Dimension C (m): {}", self.dimensions.to_port)?;
        writeln!(f, "Dimension D (m): {}", self.dimensions.to_starboard)?;
        writeln!(f, "EPF device type: {}", u8::from(self.epfd))?;
        writeln!(f, "Timestamp (s): {}", self.timestamp)?;
        writeln!(f, "Off-position flag: {}", self.off_position as u8)?;
        writeln!(f, "AtoN status bits: {:08b}", self.aton_status)?;
        writeln!(f, "RAIM flag: {}", self.raim as u8)?;
        writeln!(f, "Virtual flag: {}", self.virtual_aton as u8)?;
        write!(f, "Assigned mode flag: {}", self.assigned_mode as u8)
    }
}
