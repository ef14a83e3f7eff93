//! Reading tags and values from command-line text

use anyhow::{Context, anyhow};
use tangem_tlv::{
    CalendarDate, CardStatus, EllipticCurve, IssuerDataMode, ProductMask, SettingsMask,
    SigningMethodMask, Tag, TlvValue, ValueType,
};

/// Resolve a tag given by name or by `0x..` code
pub fn parse_tag(text: &str) -> anyhow::Result<Tag> {
    let text = text.trim();
    if let Some(code) = strip_hex_prefix(text) {
        let code = u8::from_str_radix(code, 16).with_context(|| format!("Invalid tag code {text}"))?;
        return Ok(Tag::by_code(code));
    }
    Tag::from_name(text).ok_or_else(|| anyhow!("Unknown tag name {text}"))
}

/// Hex bytes, ignoring whitespace and an optional `0x` prefix
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    let digits = strip_hex_prefix(&compact).unwrap_or(&compact);
    Ok(hex::decode(digits)?)
}

/// Read `text` as a value of the type `tag` declares
pub fn parse_value(tag: Tag, text: &str) -> anyhow::Result<TlvValue> {
    let value = match tag.value_type() {
        // PIN text is hashed as typed
        ValueType::HexString if tag.is_pin() => TlvValue::Hex(text.to_string()),
        ValueType::HexString => TlvValue::Hex(hex::encode_upper(parse_hex(text)?)),
        ValueType::Utf8String => TlvValue::Text(text.to_string()),
        ValueType::Uint => TlvValue::Int(i64::try_from(parse_int(text)?)?),
        ValueType::Bool => TlvValue::Bool(
            text.trim()
                .parse()
                .with_context(|| format!("Expected true or false for {tag}"))?,
        ),
        ValueType::ByteArray => TlvValue::Bytes(parse_hex(text)?),
        ValueType::EllipticCurve => TlvValue::Curve(
            EllipticCurve::from_name(text.trim())
                .ok_or_else(|| anyhow!("Unknown curve {text}"))?,
        ),
        ValueType::DateTime => TlvValue::Date(
            text.parse::<CalendarDate>()
                .with_context(|| format!("Expected YYYY-MM-DD for {tag}"))?,
        ),
        ValueType::ProductMask => {
            TlvValue::ProductMask(ProductMask::from_bits_retain(u8::try_from(parse_int(text)?)?))
        }
        ValueType::SettingsMask => TlvValue::SettingsMask(SettingsMask::from_bits_retain(
            u32::try_from(parse_int(text)?)?,
        )),
        ValueType::SigningMethod => TlvValue::SigningMethod(SigningMethodMask::from_bits_retain(
            u32::try_from(parse_int(text)?)?,
        )),
        ValueType::CardStatus => TlvValue::CardStatus(match CardStatus::from_name(text) {
            Some(status) => status,
            None => u8::try_from(parse_int(text)?)
                .ok()
                .and_then(CardStatus::from_code)
                .ok_or_else(|| anyhow!("Unknown card status {text}"))?,
        }),
        ValueType::IssuerDataMode => TlvValue::IssuerDataMode(match IssuerDataMode::from_name(text) {
            Some(mode) => mode,
            None => u8::try_from(parse_int(text)?)
                .ok()
                .and_then(IssuerDataMode::from_code)
                .ok_or_else(|| anyhow!("Unknown issuer data mode {text}"))?,
        }),
    };
    Ok(value)
}

/// Decimal, or hex with a `0x` prefix
fn parse_int(text: &str) -> anyhow::Result<u64> {
    let text = text.trim();
    let n = match strip_hex_prefix(text) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => text.parse(),
    };
    n.with_context(|| format!("Invalid integer {text}"))
}

fn strip_hex_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("0x").or_else(|| text.strip_prefix("0X"))
}
