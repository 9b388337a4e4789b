use bithead::{DecodeError, FieldTable, SchemaError, ValueError};
use proptest::prelude::*;

/// Widths whose sum is a multiple of 8, so the schema can round-trip.
fn aligned_widths() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=32, 1..12).prop_map(|mut widths| {
        let total: usize = widths.iter().map(|&w| w as usize).sum();
        let missing = (8 - total % 8) % 8;
        if missing != 0 {
            widths.push(missing as u8);
        }
        widths
    })
}

fn table_with(widths: &[u8]) -> FieldTable {
    let mut table = FieldTable::new();
    for (i, &width) in widths.iter().enumerate() {
        table.add_field(format!("f{i}"), width).unwrap();
    }
    table
}

fn max_value(width: u8) -> u64 {
    (1u64 << width) - 1
}

proptest! {
    #[test]
    fn prop_encode_length(widths in prop::collection::vec(1u8..=32, 0..16)) {
        let table = table_with(&widths);
        let total: usize = widths.iter().map(|&w| w as usize).sum();

        prop_assert_eq!(table.total_bits(), total);
        prop_assert_eq!(table.encode().len(), total.div_ceil(8));
        prop_assert!(table.encode().len() * 8 >= total);
    }

    #[test]
    fn prop_range_enforcement(width in 1u8..=32, value in any::<u64>()) {
        let mut table = table_with(&[width]);
        let result = table.set_value("f0", value);

        if value <= max_value(width) {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(table.get_value("f0"), Some(value as u32));
        } else {
            prop_assert_eq!(
                result,
                Err(ValueError::ValueOutOfRange { name: "f0".to_string(), value, width })
            );
            prop_assert_eq!(table.get_value("f0"), Some(0));
        }
    }

    #[test]
    fn prop_range_boundary(width in 1u8..=32) {
        let mut table = table_with(&[width]);
        prop_assert!(table.set_value("f0", max_value(width)).is_ok());
        prop_assert!(table.set_value("f0", max_value(width) + 1).is_err());
    }

    #[test]
    fn prop_duplicate_rejected(widths in prop::collection::vec(1u8..=32, 1..8), pick in any::<prop::sample::Index>(), width in 1u8..=32) {
        let mut table = table_with(&widths);
        let name = format!("f{}", pick.index(widths.len()));
        let before = table.fields();

        prop_assert_eq!(table.add_field(name.clone(), width), Err(SchemaError::FieldExists(name)));
        prop_assert_eq!(table.fields(), before);
    }

    #[test]
    fn prop_length_contract(widths in prop::collection::vec(1u8..=32, 0..8), len in 0usize..40, fill in any::<u8>()) {
        let mut table = table_with(&widths);
        for (i, &width) in widths.iter().enumerate() {
            table.set_value(&format!("f{i}"), max_value(width) / 2).unwrap();
        }
        let before = table.fields();
        let result = table.decode(&vec![fill; len]);

        if len * 8 == table.total_bits() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(DecodeError::LengthMismatch { expected_bits: table.total_bits(), actual_bits: len * 8 })
            );
            prop_assert_eq!(table.fields(), before);
        }
    }

    #[test]
    fn prop_roundtrip(
        (widths, values) in aligned_widths().prop_flat_map(|widths| {
            let values: Vec<_> = widths.iter().map(|&w| 0..=max_value(w)).collect();
            (Just(widths), values)
        })
    ) {
        let mut source = table_with(&widths);
        for (i, &value) in values.iter().enumerate() {
            source.set_value(&format!("f{i}"), value).unwrap();
        }

        let bytes = source.encode();
        let mut target = table_with(&widths);
        target.decode(&bytes).unwrap();

        prop_assert_eq!(target.fields(), source.fields());
        prop_assert_eq!(target.encode(), bytes);
    }
}
