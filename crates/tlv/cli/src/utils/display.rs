//! Terminal rendering for tags, records and status lines

use colored::{ColoredString, Colorize};
use tangem_tlv::{Tag, Tlv};

/// Bytes per group in hex output
const HEX_GROUP: usize = 4;

/// Kind of a one-line status note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Note {
    /// Neutral information
    Info,
    /// Something the user should look at
    Warning,
    /// Command finished
    Done,
}

/// Bold, underlined heading
pub fn heading(title: &str) -> ColoredString {
    title.bold().underline()
}

/// Status line prefixed by a marker for its kind
pub fn note(kind: Note, message: &str) -> String {
    match kind {
        Note::Info => format!("ℹ️  {}", message.blue()),
        Note::Warning => format!("⚠️  {}", message.yellow().bold()),
        Note::Done => format!("✅ {}", message.green().bold()),
    }
}

/// `0x..` code column, highlighted when the code is not registered
pub fn tag_code(tag: Tag) -> ColoredString {
    let code = format!("0x{:02X}", tag.code());
    if tag.is_unknown() {
        code.yellow().bold()
    } else {
        code.bold()
    }
}

/// One registry line: code, name and value type
pub fn tag_row(tag: Tag) -> String {
    format!(
        "  {}  {:<30} {}",
        tag_code(tag),
        tag.name(),
        tag.value_type().to_string().dimmed()
    )
}

/// Uppercase hex split into groups of four bytes
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .chunks(HEX_GROUP)
        .map(hex::encode_upper)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Summary box for one encoded record
///
/// `value_shown` is the value as the user should see it, so PIN text can be
/// masked by the caller.
pub fn record_box(tlv: &Tlv, value_shown: &str) -> String {
    let form = if tlv.len() > 0xFE { "extended" } else { "short" };
    let payload = tlv.to_bytes();
    let header_len = tlv.encoded_len() - tlv.len();

    let rows = [
        ("Tag", format!("{} {}", tag_code(tlv.tag()), tlv.tag().name())),
        ("Type", tlv.tag().value_type().to_string()),
        ("Value", value_shown.to_string()),
        ("Length", format!("{} ({form} form)", tlv.len())),
        ("Header", hex_bytes(&payload[..header_len])),
        ("Bytes", hex_bytes(&payload[header_len..]).dimmed().to_string()),
    ];

    let mut out = heading("Encoded record").to_string();
    for (key, value) in rows {
        out.push_str(&format!("\n  {:<7} {value}", format!("{key}:").bold()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_hex_bytes_groups() {
        assert_eq!(hex_bytes(&[]), "");
        assert_eq!(hex_bytes(&[0xAB]), "AB");
        assert_eq!(
            hex_bytes(&[0xCB, 0x22, 0x00, 0x00, 0x00, 0x02, 0x73, 0x74, 0x01]),
            "CB220000 00027374 01"
        );
    }

    #[test]
    fn test_tag_row() {
        plain();
        assert_eq!(tag_code(Tag::CardId).to_string(), "0x01");
        assert_eq!(tag_code(Tag::Unknown(0xEE)).to_string(), "0xEE");
        let row = tag_row(Tag::IsActivated);
        assert!(row.starts_with("  0x3A  IsActivated "));
        assert!(row.ends_with("Bool"));
    }

    #[test]
    fn test_record_box_splits_header() {
        plain();
        let tlv = Tlv::new(Tag::CardId, vec![0xCB, 0x22]).unwrap();
        let out = record_box(&tlv, "CB22");
        assert!(out.contains("0x01 CardId"));
        assert!(out.contains("2 (short form)"));
        assert!(out.contains("Header: 0102"));
        assert!(out.contains("Bytes:  CB22"));

        let tlv = Tlv::new(Tag::IssuerData, vec![0; 300]).unwrap();
        let out = record_box(&tlv, "...");
        assert!(out.contains("300 (extended form)"));
        assert!(out.contains("Header: 32FF012C"));
    }

    #[test]
    fn test_note_markers() {
        plain();
        assert_eq!(note(Note::Done, "ok"), "✅ ok");
        assert_eq!(note(Note::Warning, "careful"), "⚠️  careful");
    }
}
