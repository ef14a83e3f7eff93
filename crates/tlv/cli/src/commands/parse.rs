//! Dump a hex payload

use anyhow::Context;
use tangem_tlv::{Dump, DumpConfig, Tlv};
use tracing::debug;

use crate::utils::{
    display::{Note, heading, note},
    value::parse_hex,
};

/// Parse `payload` and print one line per record
pub fn parse_command(payload: &str, raw: bool, indent: usize) -> anyhow::Result<()> {
    let bytes = parse_hex(payload).context("Payload is not valid hex")?;
    debug!(len = bytes.len(), "Parsing payload");

    let tlvs = Tlv::parse_all(&bytes).context("Failed to parse TLV payload")?;

    let config = DumpConfig::new()
        .with_indent(indent)
        .with_decode_values(!raw);

    println!("{}", heading("TLV records"));
    print!("{}", Dump::new(&tlvs).with_config(config));
    println!(
        "{}",
        note(Note::Info, &format!("{} records, {} bytes", tlvs.len(), bytes.len()))
    );

    if tlvs.iter().any(|tlv| tlv.tag().is_unknown()) {
        println!("{}", note(Note::Warning, "Payload contains unknown tags"));
    }

    Ok(())
}
