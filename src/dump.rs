//! Human-readable bit dumps for debugging header layouts.
//!
//! Only uses the public [FieldTable] API.

use crate::FieldTable;

/// Every bit of `bytes`, MSB-first, separated by spaces.
pub fn dump_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 16);

    for (i, byte) in bytes.iter().enumerate() {
        for bit in (0..8).rev() {
            if i != 0 || bit != 7 {
                out.push(' ');
            }
            out.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
        }
    }

    out
}

/// One line per field: its index, width and the value's `width` low bits.
///
/// ```
/// use bithead::{FieldTable, dump::dump_fields};
///
/// let mut table = FieldTable::new();
/// table.add_field("version", 2).unwrap();
/// table.add_field("length", 5).unwrap();
/// table.set_value("length", 6).unwrap();
///
/// assert_eq!(dump_fields(&table), "00th(2 bit): 00\n01th(5 bit): 00110\n");
/// ```
pub fn dump_fields(table: &FieldTable) -> String {
    table
        .fields()
        .iter()
        .enumerate()
        .map(|(i, field)| {
            format!(
                "{i:02}th({} bit): {:0width$b}\n",
                field.width,
                field.value,
                width = field.width as usize
            )
        })
        .collect()
}
