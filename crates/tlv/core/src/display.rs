//! Human readable rendering of record lists

use std::fmt;

use crate::{decoder::decode_value, tlv::Tlv, value::TlvValue};

/// Options for [`Dump`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Spaces before each line
    pub indent: usize,

    /// Render values per their declared type instead of raw hex
    pub decode_values: bool,

    /// Use uppercase digits for raw hex
    pub uppercase_hex: bool,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            decode_values: true,
            uppercase_hex: true,
        }
    }
}

impl DumpConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent width
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Set whether values are decoded
    pub const fn with_decode_values(mut self, decode_values: bool) -> Self {
        self.decode_values = decode_values;
        self
    }

    /// Set whether raw hex uses uppercase digits
    pub const fn with_uppercase_hex(mut self, uppercase_hex: bool) -> Self {
        self.uppercase_hex = uppercase_hex;
        self
    }
}

/// One line per record: name, code, length and value
///
/// PIN values are never shown. A value that cannot be decoded falls back to
/// raw hex marked as malformed.
#[derive(Debug, Clone)]
pub struct Dump<'a> {
    tlvs: &'a [Tlv],
    config: DumpConfig,
}

impl<'a> Dump<'a> {
    /// Dump `tlvs` with the default config
    pub fn new(tlvs: &'a [Tlv]) -> Self {
        Self {
            tlvs,
            config: DumpConfig::default(),
        }
    }

    /// Replace the config
    pub fn with_config(mut self, config: DumpConfig) -> Self {
        self.config = config;
        self
    }

    fn raw_hex(&self, bytes: &[u8]) -> String {
        if self.config.uppercase_hex {
            hex::encode_upper(bytes)
        } else {
            hex::encode(bytes)
        }
    }

    fn render_value(&self, tlv: &Tlv) -> String {
        if tlv.tag().is_pin() {
            return "<redacted>".to_string();
        }
        if !self.config.decode_values || tlv.tag().is_unknown() {
            return self.raw_hex(tlv.value());
        }
        match decode_value(tlv.tag(), tlv.value()) {
            Ok(TlvValue::Hex(_) | TlvValue::Bytes(_)) => self.raw_hex(tlv.value()),
            Ok(value) => value.to_string(),
            Err(_) => format!("{} (malformed)", self.raw_hex(tlv.value())),
        }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.config.indent);
        for tlv in self.tlvs {
            writeln!(
                f,
                "{indent}{} [{}]: {}",
                tlv.tag(),
                tlv.len(),
                self.render_value(tlv)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::Tag;

    fn sample() -> Vec<Tlv> {
        vec![
            Tlv::new(Tag::CardId, vec![0xCB, 0x22]).unwrap(),
            Tlv::new(Tag::Pin, vec![0xAB; 32]).unwrap(),
            Tlv::empty(Tag::IsActivated),
            Tlv::new(Tag::Firmware, b"4.12".to_vec()).unwrap(),
            Tlv::new(Tag::Status, vec![0x09]).unwrap(),
            Tlv::new(Tag::Unknown(0xEE), vec![0xBE, 0xEF]).unwrap(),
        ]
    }

    #[test]
    fn test_decoded_dump() {
        let tlvs = sample();
        assert_eq!(
            Dump::new(&tlvs).to_string(),
            "  CardId (0x01) [2]: CB22\n\
             \x20 Pin (0x10) [32]: <redacted>\n\
             \x20 IsActivated (0x3A) [0]: true\n\
             \x20 Firmware (0x80) [4]: \"4.12\"\n\
             \x20 Status (0x02) [1]: 09 (malformed)\n\
             \x20 Unknown (0xEE) [2]: BEEF\n"
        );
    }

    #[test]
    fn test_raw_dump() {
        let tlvs = sample();
        let config = DumpConfig::new()
            .with_indent(0)
            .with_decode_values(false)
            .with_uppercase_hex(false);
        let dump = Dump::new(&tlvs[2..]).with_config(config).to_string();
        assert_eq!(
            dump,
            "IsActivated (0x3A) [0]: \n\
             Firmware (0x80) [4]: 342e3132\n\
             Status (0x02) [1]: 09\n\
             Unknown (0xEE) [2]: beef\n"
        );
    }

    #[test]
    fn test_empty_dump() {
        assert_eq!(Dump::new(&[]).to_string(), "");
    }
}
