//! # bithead
//!
//! A schema-driven codec for bit-packed wire headers.
//!
//! Declare named fields with an exact width in bits (1 to 32), set their values,
//! then encode them into a byte buffer where the fields follow each other
//! MSB-first with no padding between them. Decoding reads a buffer back into
//! the fields' values.
//!
//! Decoding requires the buffer to be exactly as long as the schema, so only
//! schemas whose widths add up to a multiple of 8 can be decoded from their own
//! encoded output.
//!
//! ## Example
//!
//! ```
//! use bithead::Registry;
//!
//! let header = Registry::new();
//! header.add_field("version", 2).unwrap();
//! header.add_field("ack", 1).unwrap();
//! header.add_field("length", 5).unwrap();
//!
//! header.set_value("version", 1).unwrap();
//! header.set_value("length", 17).unwrap();
//! assert_eq!(header.encode(), vec![0b01_0_10001]);
//!
//! header.decode(&[0b11_1_00010]).unwrap();
//! assert_eq!(header.get_value("version"), Some(3));
//! assert_eq!(header.get_value("length"), Some(2));
//! ```

mod bits;
mod codec;
pub mod dump;
pub mod errors;
pub mod field;
pub mod registry;
#[cfg(feature = "serde")]
pub mod schema_def;

pub use errors::{DecodeError, Error, SchemaError, ValueError};
pub use field::FieldInfo;
pub use registry::{FieldTable, Registry};
