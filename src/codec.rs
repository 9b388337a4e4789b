//! Packing of field values into bytes and back.
//!
//! Fields are laid out back to back in declaration order, each one taking the
//! low `width` bits of its value, MSB-first. The functions here hold no state;
//! [crate::FieldTable] calls them with its current fields.

use crate::{bits, errors::DecodeError, field::Field};

/// Packs the values of `fields` into `ceil(total_bits / 8)` bytes. Pad bits are zero.
pub(crate) fn encode(fields: &[Field], total_bits: usize) -> Vec<u8> {
    let mut out = vec![0u8; bits::byte_len(total_bits)];
    let mut offset = 0;

    for field in fields {
        let width = field.width as usize;
        bits::put_bits(&mut out, offset, width, field.value);
        offset += width;
    }

    debug_assert_eq!(offset, total_bits);
    out
}

/// Extracts one value per field from `data`, in declaration order.
///
/// `data` must be exactly `total_bits` long; a byte-padded buffer is rejected.
pub(crate) fn decode(
    fields: &[Field],
    total_bits: usize,
    data: &[u8],
) -> Result<Vec<u32>, DecodeError> {
    let actual_bits = data.len().saturating_mul(8);
    if actual_bits != total_bits {
        return Err(DecodeError::LengthMismatch {
            expected_bits: total_bits,
            actual_bits,
        });
    }

    let mut values = Vec::with_capacity(fields.len());
    let mut offset = 0;

    for field in fields {
        let width = field.width as usize;
        values.push(bits::get_bits(data, offset, width));
        offset += width;
    }

    Ok(values)
}
