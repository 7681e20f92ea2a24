use crate::core::{ApplicationId, AsmDescriptor, FieldDescriptor, FieldKind, FieldValue};
use crate::infra::codec::traits::{AsmData, FieldAccess};
use crate::protocol::lookups::{LightStatus, RaconStatus};

/// Analogue voltage: 10 bits, 0.05 V steps.
const fn voltage(id: &'static str, name: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        id,
        name,
        kind: FieldKind::Scaled,
        bits_length: 10,
        scale: Some(20.0),
        not_available: None,
        limit: Some(51.15),
    }
}

/// AtoN monitoring data (FI 10), as sent under the UK/ROI (235) and
/// IALA (250) designated area codes.
#[derive(Debug, Clone, PartialEq)]
pub struct AtonMonitoring {
    /// 235 or 250.
    pub dac: u16,
    /// Volts.
    pub analogue_internal: f64,
    pub analogue_external_1: f64,
    pub analogue_external_2: f64,
    pub racon: RaconStatus,
    pub light: LightStatus,
    pub alarm: bool,
    /// Eight digital inputs, bit 7 first.
    pub digital_inputs: u8,
    pub off_position: bool,
}

impl AtonMonitoring {
    pub const DAC_UK: u16 = 235;
    pub const DAC_IALA: u16 = 250;
    pub const FI: u8 = 10;

    /// State of digital input `index` (0..=7).
    pub fn digital_input(&self, index: u8) -> bool {
        index < 8 && self.digital_inputs & (0x80 >> index) != 0
    }
}

impl Default for AtonMonitoring {
    fn default() -> Self {
        Self {
            dac: Self::DAC_IALA,
            analogue_internal: 0.0,
            analogue_external_1: 0.0,
            analogue_external_2: 0.0,
            racon: RaconStatus::default(),
            light: LightStatus::default(),
            alarm: false,
            digital_inputs: 0,
            off_position: false,
        }
    }
}

impl AsmData for AtonMonitoring {
    const DESCRIPTOR: AsmDescriptor = AsmDescriptor {
        dacs: &[AtonMonitoring::DAC_UK, AtonMonitoring::DAC_IALA],
        fi: AtonMonitoring::FI,
        name: "AtoN monitoring data",
        fields: &[
            voltage("analogue_internal", "Analogue (internal)"),
            voltage("analogue_external_1", "Analogue (external no. 1)"),
            voltage("analogue_external_2", "Analogue (external no. 2)"),
            FieldDescriptor::plain("racon", "RACON Status", FieldKind::Lookup, 2),
            FieldDescriptor::plain("light", "Light Status", FieldKind::Lookup, 2),
            FieldDescriptor::plain("alarm", "Health Alarm", FieldKind::Flag, 1),
            FieldDescriptor::plain("digital_inputs", "Digital Inputs", FieldKind::Unsigned, 8),
            FieldDescriptor::plain("off_position", "Off Position", FieldKind::Flag, 1),
            FieldDescriptor::spare(4),
        ],
    };

    fn application_id(&self) -> ApplicationId {
        ApplicationId::new(self.dac, Self::FI)
    }

    fn assign_application_id(&mut self, id: ApplicationId) {
        self.dac = id.dac;
    }
}

impl FieldAccess for AtonMonitoring {
    fn field(&self, id: &'static str) -> Option<FieldValue> {
        match id {
            "analogue_internal" => Some(FieldValue::Float(Some(self.analogue_internal))),
            "analogue_external_1" => Some(FieldValue::Float(Some(self.analogue_external_1))),
            "analogue_external_2" => Some(FieldValue::Float(Some(self.analogue_external_2))),
            "racon" => Some(FieldValue::U8(self.racon.into())),
            "light" => Some(FieldValue::U8(self.light.into())),
            "alarm" => Some(FieldValue::Bool(self.alarm)),
            "digital_inputs" => Some(FieldValue::U8(self.digital_inputs)),
            "off_position" => Some(FieldValue::Bool(self.off_position)),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()> {
        match (id, value) {
            ("analogue_internal", FieldValue::Float(Some(v))) => self.analogue_internal = v,
            ("analogue_external_1", FieldValue::Float(Some(v))) => self.analogue_external_1 = v,
            ("analogue_external_2", FieldValue::Float(Some(v))) => self.analogue_external_2 = v,
            ("racon", FieldValue::U8(v)) => self.racon = RaconStatus::from(v),
            ("light", FieldValue::U8(v)) => self.light = LightStatus::from(v),
            ("alarm", FieldValue::Bool(v)) => self.alarm = v,
            ("digital_inputs", FieldValue::U8(v)) => self.digital_inputs = v,
            ("off_position", FieldValue::Bool(v)) => self.off_position = v,
            _ => return None,
        }
        Some(())
    }
}
