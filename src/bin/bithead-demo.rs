//! Builds a small transport header, decodes a packet into it and prints the result.
//!
//! Set `RUST_LOG=debug` (or `trace`) to see what the registry does.

use bithead::{
    Error, Registry,
    dump::{dump_bytes, dump_fields},
};

const LAYOUT: &[(&str, u8)] = &[
    ("version", 2),
    ("MF", 1),
    ("ack", 1),
    ("resend", 1),
    ("reserve1", 3),
    ("length", 5),
    ("reserve2", 3),
    ("id", 7),
    ("check", 1),
];

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let header = Registry::new();
    for &(name, width) in LAYOUT {
        header.add_field(name, width)?;
    }
    header.set_value("version", 1)?;

    log::info!(
        "Header has {} fields over {} bits",
        header.len(),
        header.total_bits()
    );

    header.decode(&[0x80, 0x00, 0x00])?;

    print!("{}", dump_fields(&header.read()));

    let bytes = header.encode();
    println!("{bytes:?}");
    println!("dump byte: {}", dump_bytes(&bytes));

    Ok(())
}
