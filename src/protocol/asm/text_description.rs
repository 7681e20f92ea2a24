use alloc::string::String;

use crate::core::{ApplicationId, AsmDescriptor, FieldDescriptor, FieldKind, FieldValue};
use crate::infra::codec::traits::{AsmData, FieldAccess};

/// Text description broadcast (DAC 1, FI 29): free six-bit text, optionally
/// linked to another ASM through its message linkage ID.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDescription {
    /// Message linkage ID, 0 when unused.
    pub linkage_id: u16,
    pub text: String,
}

impl TextDescription {
    /// Longest text the application carries.
    pub const MAX_CHARS: usize = 161;

    pub fn new(linkage_id: u16, text: &str) -> Self {
        Self {
            linkage_id,
            text: String::from(text),
        }
    }
}

impl AsmData for TextDescription {
    const DESCRIPTOR: AsmDescriptor = AsmDescriptor {
        dacs: &[1],
        fi: 29,
        name: "Text description",
        fields: &[
            FieldDescriptor::plain("linkage_id", "Message Linkage ID", FieldKind::Unsigned, 10),
            FieldDescriptor::plain(
                "text",
                "Text String",
                FieldKind::TrailingText,
                (TextDescription::MAX_CHARS * 6) as u16,
            ),
        ],
    };

    fn application_id(&self) -> ApplicationId {
        ApplicationId::new(1, 29)
    }
}

impl FieldAccess for TextDescription {
    fn field(&self, id: &'static str) -> Option<FieldValue> {
        match id {
            "linkage_id" => Some(FieldValue::U16(self.linkage_id)),
            "text" => Some(FieldValue::Text(self.text.clone())),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: &'static str, value: FieldValue) -> Option<()> {
        match (id, value) {
            ("linkage_id", FieldValue::U16(v)) => self.linkage_id = v,
            ("text", FieldValue::Text(v)) => self.text = v,
            _ => return None,
        }
        Some(())
    }
}
