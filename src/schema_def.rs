//! Header layouts loaded from JSON.
//!
//! A [HeaderDef] lists the fields of a header in wire order with their widths
//! and, optionally, a starting value. Convert it with `try_from` into a
//! [FieldTable] or [Registry]; [FieldTable::to_def] goes the other way.
//!
//! ```
//! use bithead::schema_def::HeaderDef;
//! use bithead::FieldTable;
//!
//! let def: HeaderDef = serde_json::from_str(r#"{
//!     "fields": [
//!         { "name": "version", "width": 2, "value": 1 },
//!         { "name": "length", "width": 6 }
//!     ]
//! }"#).unwrap();
//!
//! let table = FieldTable::try_from(def).unwrap();
//! assert_eq!(table.encode(), vec![0b01_000000]);
//! ```

use serde::{Deserialize, Serialize};

use crate::{FieldTable, Registry, errors::Error};

/// A header layout: its fields in packing order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct HeaderDef {
    /// Fields, first one at bit 0.
    pub fields: Vec<FieldDef>,
}

/// One field of a [HeaderDef].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Unique field name.
    pub name: String,
    /// Width of the field in bits (1..=32).
    pub width: u8,
    /// Optional initial value; defaults to zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
}

impl TryFrom<HeaderDef> for FieldTable {
    type Error = Error;

    fn try_from(def: HeaderDef) -> Result<Self, Self::Error> {
        let mut table = FieldTable::new();

        for field in def.fields {
            table.add_field(field.name.as_str(), field.width)?;
            if let Some(value) = field.value {
                table.set_value(&field.name, value)?;
            }
        }

        Ok(table)
    }
}

impl TryFrom<HeaderDef> for Registry {
    type Error = Error;

    fn try_from(def: HeaderDef) -> Result<Self, Self::Error> {
        FieldTable::try_from(def).map(Registry::from)
    }
}

impl FieldTable {
    /// Describes this table, including its current values.
    pub fn to_def(&self) -> HeaderDef {
        HeaderDef {
            fields: self
                .fields()
                .into_iter()
                .map(|field| FieldDef {
                    name: field.name,
                    width: field.width,
                    value: Some(field.value as u64),
                })
                .collect(),
        }
    }
}
