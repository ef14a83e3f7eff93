//! Encode a single record

use anyhow::bail;
use tangem_tlv::{TlvBuilder, ValueType};
use tracing::debug;

use crate::utils::{
    display::{Note, note, record_box},
    value::{parse_tag, parse_value},
};

/// Encode `value` for the tag named by `tag` and print the record bytes
pub fn encode_command(tag: &str, value: Option<&str>) -> anyhow::Result<()> {
    let tag = parse_tag(tag)?;
    let mut builder = TlvBuilder::new();

    match value {
        Some(text) => {
            let value = parse_value(tag, text)?;
            builder.append(tag, Some(value))?;
        }
        None if tag.value_type() == ValueType::Bool => {
            builder.append(tag, Some(true))?;
        }
        None => bail!("{tag} takes a {} value", tag.value_type()),
    }

    let Some(tlv) = builder.tlvs().first() else {
        println!("{}", note(Note::Info, "Flag is false, no record is sent"));
        return Ok(());
    };
    debug!(%tag, len = tlv.encoded_len(), "Encoded record");

    let value_shown = if tag.is_pin() {
        "<redacted>"
    } else {
        value.unwrap_or("true")
    };
    println!("{}", record_box(tlv, value_shown));
    println!("{}", note(Note::Done, "Record encoded"));

    Ok(())
}
