use crate::core::{ApplicationId, AsmDescriptor, FieldDescriptor, FieldKind, FieldValue};
use crate::infra::codec::{
    bits::Bits,
    traits::{AsmData, FieldAccess},
};

/// Sample ASM (DAC 0, FI 1) used for link testing. The application data
/// carries no meaning but must be byte-aligned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleAsm {
    pub data: Bits,
}

impl SampleAsm {
    /// Application data length used when none is requested.
    pub const DEFAULT_DATA_BYTES: usize = 10;

    pub fn new(data: Bits) -> Self {
        Self { data }
    }

    /// `bytes` of zeroed application data.
    pub fn zeroed(bytes: usize) -> Self {
        Self {
            data: Bits::from_bytes(&alloc::vec![0u8; bytes]),
        }
    }

    /// Size of the application data, in whole bytes.
    pub fn data_bytes(&self) -> usize {
        self.data.len() / 8
    }
}

impl Default for SampleAsm {
    fn default() -> Self {
        Self::zeroed(Self::DEFAULT_DATA_BYTES)
    }
}

impl AsmData for SampleAsm {
    const DESCRIPTOR: AsmDescriptor = AsmDescriptor {
        dacs: &[0],
        fi: 1,
        name: "Sample ASM 1",
        fields: &[FieldDescriptor::plain(
            "data",
            "Application Data",
            FieldKind::Binary,
            8,
        )],
    };

    fn application_id(&self) -> ApplicationId {
        ApplicationId::new(0, 1)
    }
}

impl FieldAccess for SampleAsm {
    fn field(&self, id: &'static str) -> Option<FieldValue> {
        match id {
            "data" => Some(FieldValue::Bits(self.data.clone())),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()> {
        match id {
            "data" => {
                self.data = value.into_bits()?;
                Some(())
            }
            _ => None,
        }
    }
}
