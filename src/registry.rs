//! Field registry: the ordered schema of a header together with its current values.
//!
//! [FieldTable] is the plain, single-owner state. [Registry] wraps one in a
//! reader/writer lock so it can be shared between threads.

use std::collections::HashMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    bits::{self, MAX_BITS},
    codec,
    errors::{DecodeError, SchemaError, ValueError},
    field::{Field, FieldInfo},
};

/// Ordered set of named fields and their values.
///
/// Fields are append-only: the declaration order fixes each field's bit offset
/// and never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct FieldTable {
    fields: Vec<Field>,
    index: HashMap<String, usize>,
    total_bits: usize,
}

impl FieldTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a new field of `width` bits with value 0, placed after all existing fields.
    pub fn add_field(&mut self, name: impl Into<String>, width: u8) -> Result<(), SchemaError> {
        let name = name.into();

        if self.index.contains_key(&name) {
            return Err(SchemaError::FieldExists(name));
        }

        if width == 0 || width as usize > MAX_BITS {
            return Err(SchemaError::InvalidFieldWidth { name, width });
        }

        log::debug!(
            "Adding field '{name}' ({width} bits) at bit offset {}",
            self.total_bits
        );

        self.index.insert(name.clone(), self.fields.len());
        self.fields.push(Field::new(name, width));
        self.total_bits += width as usize;

        Ok(())
    }

    /// Overwrites the value of field `name`. `value` must fit in the field's width.
    pub fn set_value(&mut self, name: &str, value: u64) -> Result<(), ValueError> {
        let Some(&i) = self.index.get(name) else {
            return Err(ValueError::FieldNotExists(name.to_string()));
        };
        let field = &mut self.fields[i];

        if !bits::fits(value, field.width) {
            return Err(ValueError::ValueOutOfRange {
                name: name.to_string(),
                value,
                width: field.width,
            });
        }

        log::trace!("Setting field '{name}' to {value}");

        // `fits` bounds the value to at most 32 bits.
        field.value = value as u32;
        Ok(())
    }

    /// Current value of field `name`, or `None` if no such field is declared.
    pub fn get_value(&self, name: &str) -> Option<u32> {
        self.index.get(name).map(|&i| self.fields[i].value)
    }

    /// Packs all values into `ceil(total_bits / 8)` bytes, MSB-first.
    pub fn encode(&self) -> Vec<u8> {
        codec::encode(&self.fields, self.total_bits)
    }

    /// Replaces all values with those packed in `data`.
    ///
    /// `data` must be exactly [Self::total_bits] long. On error no value changes.
    pub fn decode(&mut self, data: &[u8]) -> Result<(), DecodeError> {
        let values = codec::decode(&self.fields, self.total_bits, data).inspect_err(|e| {
            log::debug!("Rejecting buffer: {e}");
        })?;

        for (field, value) in self.fields.iter_mut().zip(values) {
            log::trace!("Decoded field '{}' = {value}", field.name);
            field.value = value;
        }

        log::debug!(
            "Decoded {} fields from {} bytes",
            self.fields.len(),
            data.len()
        );

        Ok(())
    }

    /// Sum of all field widths.
    pub fn total_bits(&self) -> usize {
        self.total_bits
    }

    /// Length of the buffer produced by [Self::encode].
    pub fn byte_len(&self) -> usize {
        bits::byte_len(self.total_bits)
    }

    /// Whether the schema fills whole bytes, i.e. whether an encoded buffer can be decoded again.
    pub fn is_byte_aligned(&self) -> bool {
        self.total_bits % 8 == 0
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Snapshot of all fields in declaration order.
    pub fn fields(&self) -> Vec<FieldInfo> {
        let mut offset_bits = 0;

        self.fields
            .iter()
            .map(|field| {
                let info = FieldInfo {
                    name: field.name.clone(),
                    width: field.width,
                    offset_bits,
                    value: field.value,
                };
                offset_bits += field.width as usize;
                info
            })
            .collect()
    }
}

/// A [FieldTable] behind a reader/writer lock.
///
/// Mutating operations take the write lock, queries take the read lock. Each
/// call locks on its own; to make a sequence of calls atomic, hold the guard
/// from [Registry::write] (or [Registry::read]) for the whole sequence.
#[derive(Debug, Default)]
pub struct Registry {
    table: RwLock<FieldTable>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [FieldTable::add_field].
    pub fn add_field(&self, name: impl Into<String>, width: u8) -> Result<(), SchemaError> {
        self.table.write().add_field(name, width)
    }

    /// See [FieldTable::set_value].
    pub fn set_value(&self, name: &str, value: u64) -> Result<(), ValueError> {
        self.table.write().set_value(name, value)
    }

    /// See [FieldTable::get_value].
    pub fn get_value(&self, name: &str) -> Option<u32> {
        self.table.read().get_value(name)
    }

    /// See [FieldTable::encode].
    pub fn encode(&self) -> Vec<u8> {
        self.table.read().encode()
    }

    /// See [FieldTable::decode].
    pub fn decode(&self, data: &[u8]) -> Result<(), DecodeError> {
        self.table.write().decode(data)
    }

    pub fn total_bits(&self) -> usize {
        self.table.read().total_bits()
    }

    pub fn byte_len(&self) -> usize {
        self.table.read().byte_len()
    }

    pub fn is_byte_aligned(&self) -> bool {
        self.table.read().is_byte_aligned()
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    pub fn fields(&self) -> Vec<FieldInfo> {
        self.table.read().fields()
    }

    /// Locks the table for shared access until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, FieldTable> {
        self.table.read()
    }

    /// Locks the table for exclusive access until the guard is dropped.
    pub fn write(&self) -> RwLockWriteGuard<'_, FieldTable> {
        self.table.write()
    }

    /// Consumes the registry and returns the table.
    pub fn into_inner(self) -> FieldTable {
        self.table.into_inner()
    }
}

impl From<FieldTable> for Registry {
    fn from(table: FieldTable) -> Self {
        Registry {
            table: RwLock::new(table),
        }
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Registry::from(self.table.read().clone())
    }
}
