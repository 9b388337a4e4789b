//! Field records stored in a [crate::FieldTable].

/// A single named field: fixed width, current value.
///
/// Only reachable through the owning table, so every mutation goes through
/// its range checks.
#[derive(Debug, Clone)]
pub(crate) struct Field {
    pub(crate) name: String,
    pub(crate) width: u8,
    pub(crate) value: u32,
}

impl Field {
    pub(crate) fn new(name: String, width: u8) -> Self {
        Field {
            name,
            width,
            value: 0,
        }
    }
}

/// Owned snapshot of one field, as returned by [crate::FieldTable::fields].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// Name the field was declared with.
    pub name: String,
    /// Number of bits the field occupies.
    pub width: u8,
    /// Position of the field's first bit in the packed buffer.
    pub offset_bits: usize,
    /// Current value; always below `2^width`.
    pub value: u32,
}

impl FieldInfo {
    /// One past the field's last bit.
    pub fn end_bits(&self) -> usize {
        self.offset_bits + self.width as usize
    }
}
