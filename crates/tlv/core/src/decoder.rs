//! Record bytes to typed values

use tracing::trace;

use crate::{
    error::DecodeError,
    tag::{Tag, ValueType},
    tlv::Tlv,
    types::{
        CalendarDate, CardStatus, EllipticCurve, IssuerDataMode, ProductMask, SettingsMask,
        SigningMethodMask,
    },
    value::{FromTlvValue, TlvValue},
};

/// First record carrying `tag`
pub fn find(tlvs: &[Tlv], tag: Tag) -> Option<&Tlv> {
    tlvs.iter().find(|tlv| tlv.tag() == tag)
}

/// Decode the first record carrying `tag`
///
/// A missing Bool tag decodes to `false`; any other missing tag is
/// [`DecodeError::MissingTag`]. Later records with the same tag are ignored.
pub fn decode<T: FromTlvValue>(tlvs: &[Tlv], tag: Tag) -> Result<T, DecodeError> {
    let value = match find(tlvs, tag) {
        Some(tlv) => decode_value(tag, tlv.value())?,
        None if tag.value_type() == ValueType::Bool => TlvValue::Bool(false),
        None => return Err(DecodeError::MissingTag(tag)),
    };
    T::from_tlv_value(tag, value)
}

/// Like [`decode`], returning `None` when the tag is missing
pub fn decode_optional<T: FromTlvValue>(tlvs: &[Tlv], tag: Tag) -> Result<Option<T>, DecodeError> {
    match decode(tlvs, tag) {
        Ok(value) => Ok(Some(value)),
        Err(DecodeError::MissingTag(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Decode raw value bytes per the declared value type of `tag`
pub fn decode_value(tag: Tag, bytes: &[u8]) -> Result<TlvValue, DecodeError> {
    let value = match tag.value_type() {
        ValueType::HexString => TlvValue::Hex(hex::encode_upper(bytes)),
        ValueType::Utf8String => std::str::from_utf8(bytes)
            .map(|s| TlvValue::Text(s.to_owned()))
            .map_err(|_| DecodeError::malformed(tag, "invalid UTF-8"))?,
        ValueType::Uint => TlvValue::Int(read_int(tag, bytes)?),
        ValueType::Bool => TlvValue::Bool(true),
        ValueType::ByteArray => TlvValue::Bytes(bytes.to_vec()),
        ValueType::EllipticCurve => EllipticCurve::from_wire(bytes)
            .map(TlvValue::Curve)
            .ok_or(DecodeError::malformed(tag, "unknown curve"))?,
        ValueType::DateTime => CalendarDate::from_bytes(bytes)
            .map(TlvValue::Date)
            .ok_or(DecodeError::malformed(tag, "invalid date"))?,
        ValueType::ProductMask => u8::try_from(read_uint(tag, bytes)?)
            .ok()
            .and_then(ProductMask::from_bits)
            .map(TlvValue::ProductMask)
            .ok_or(DecodeError::malformed(tag, "unknown product flags"))?,
        ValueType::SettingsMask => u32::try_from(read_uint(tag, bytes)?)
            .ok()
            .and_then(SettingsMask::from_bits)
            .map(TlvValue::SettingsMask)
            .ok_or(DecodeError::malformed(tag, "unknown settings flags"))?,
        ValueType::SigningMethod => u32::try_from(read_uint(tag, bytes)?)
            .ok()
            .and_then(SigningMethodMask::from_bits)
            .map(TlvValue::SigningMethod)
            .ok_or(DecodeError::malformed(tag, "unknown signing method"))?,
        ValueType::CardStatus => u8::try_from(read_uint(tag, bytes)?)
            .ok()
            .and_then(CardStatus::from_code)
            .map(TlvValue::CardStatus)
            .ok_or(DecodeError::malformed(tag, "unknown card status"))?,
        ValueType::IssuerDataMode => u8::try_from(read_uint(tag, bytes)?)
            .ok()
            .and_then(IssuerDataMode::from_code)
            .map(TlvValue::IssuerDataMode)
            .ok_or(DecodeError::malformed(tag, "unknown issuer data mode"))?,
    };

    if !tag.is_pin() {
        trace!(%tag, value = %value, "Decoded TLV value");
    }
    Ok(value)
}

/// Big-endian unsigned integer, empty bytes reading as zero
fn read_uint(tag: Tag, bytes: &[u8]) -> Result<u64, DecodeError> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > 8 {
        return Err(DecodeError::malformed(tag, "integer too large"));
    }
    Ok(significant
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

fn read_int(tag: Tag, bytes: &[u8]) -> Result<i64, DecodeError> {
    i64::try_from(read_uint(tag, bytes)?).map_err(|_| DecodeError::malformed(tag, "integer too large"))
}
