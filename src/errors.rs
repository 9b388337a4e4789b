//! Error types for declaring fields, setting values and decoding buffers.

use thiserror::Error;

/// Errors produced when declaring a field with [crate::FieldTable::add_field].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A field with this name is already declared.
    #[error("field '{0}' already exists")]
    FieldExists(String),
    /// Field width is 0 or greater than 32 bits.
    #[error("field '{name}' has invalid width {width}, expected 1..=32 bits")]
    InvalidFieldWidth { name: String, width: u8 },
}

/// Errors produced when assigning a value with [crate::FieldTable::set_value].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// No field with this name is declared.
    #[error("field '{0}' does not exist")]
    FieldNotExists(String),
    /// Value needs more bits than the field is wide.
    #[error("value {value} does not fit in the {width} bits of field '{name}'")]
    ValueOutOfRange { name: String, value: u64, width: u8 },
}

/// Errors produced when decoding a buffer with [crate::FieldTable::decode].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Buffer length in bits differs from the schema's total width.
    #[error("buffer holds {actual_bits} bits but the schema is {expected_bits} bits wide")]
    LengthMismatch {
        expected_bits: usize,
        actual_bits: usize,
    },
}

/// Any error this crate can produce.
///
/// Used where several operation families run in one go, such as building a
/// table from a definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
