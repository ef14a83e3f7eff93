//! Typed value to record bytes

use sha2::{Digest, Sha256};

use crate::{
    error::EncodeError,
    tag::{Tag, ValueType},
    tlv::Tlv,
    types::{ProductMask, SettingsMask, SigningMethodMask},
    value::TlvValue,
};

/// Encode `value` as a record for `tag`
///
/// The variant of `value` must match the tag's declared [`ValueType`].
/// Bool tags cannot be encoded here; their presence is managed by
/// [`TlvBuilder`](crate::TlvBuilder).
pub fn encode(tag: Tag, value: TlvValue) -> Result<Tlv, EncodeError> {
    let bytes = encode_value(tag, value)?;
    Ok(Tlv::new(tag, bytes)?)
}

/// Encode `value` into the raw value bytes for `tag`, without framing
pub fn encode_value(tag: Tag, value: TlvValue) -> Result<Vec<u8>, EncodeError> {
    match (tag.value_type(), value) {
        (ValueType::HexString, TlvValue::Hex(s)) if tag.is_pin() => {
            Ok(Sha256::digest(s.as_bytes()).to_vec())
        }
        (ValueType::HexString, TlvValue::Hex(s)) => {
            hex::decode(&s).map_err(|_| EncodeError::InvalidValue {
                tag,
                reason: "invalid hex string",
            })
        }
        (ValueType::Utf8String, TlvValue::Text(s)) => Ok(s.into_bytes()),
        (ValueType::Uint, TlvValue::Int(n)) => {
            let n = u64::try_from(n).map_err(|_| EncodeError::InvalidValue {
                tag,
                reason: "negative integer",
            })?;
            Ok(be_minimal(n))
        }
        (ValueType::Bool, TlvValue::Bool(_)) => Err(EncodeError::Unsupported { tag }),
        (ValueType::ByteArray, TlvValue::Bytes(bytes)) => Ok(bytes),
        (ValueType::EllipticCurve, TlvValue::Curve(curve)) => Ok(curve.to_wire()),
        (ValueType::DateTime, TlvValue::Date(date)) => Ok(date.to_bytes().to_vec()),
        (ValueType::ProductMask, TlvValue::ProductMask(mask)) => {
            ProductMask::from_bits(mask.bits())
                .map(|mask| vec![mask.bits()])
                .ok_or(EncodeError::InvalidValue {
                    tag,
                    reason: "unknown product flags",
                })
        }
        (ValueType::SettingsMask, TlvValue::SettingsMask(mask)) => {
            SettingsMask::from_bits(mask.bits())
                .map(|mask| be_minimal(mask.bits().into()))
                .ok_or(EncodeError::InvalidValue {
                    tag,
                    reason: "unknown settings flags",
                })
        }
        (ValueType::SigningMethod, TlvValue::SigningMethod(mask)) => {
            SigningMethodMask::from_bits(mask.bits())
                .map(|mask| be_minimal(mask.bits().into()))
                .ok_or(EncodeError::InvalidValue {
                    tag,
                    reason: "unknown signing method",
                })
        }
        (ValueType::CardStatus, TlvValue::CardStatus(status)) => {
            Ok(be_minimal(status.code().into()))
        }
        (ValueType::IssuerDataMode, TlvValue::IssuerDataMode(mode)) => Ok(vec![mode.code()]),
        _ => Err(EncodeError::TypeMismatch { tag }),
    }
}

/// Big-endian bytes of `n` without leading zeros, keeping one byte for zero
fn be_minimal(n: u64) -> Vec<u8> {
    let bytes = n.to_be_bytes();
    let skip = (n.leading_zeros() / 8).min(7) as usize;
    bytes[skip..].to_vec()
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;
    use crate::types::{
        CalendarDate, CardStatus, EllipticCurve, IssuerDataMode, Product, Setting, SigningMethod,
    };

    #[test]
    fn test_be_minimal() {
        assert_eq!(be_minimal(0), [0x00]);
        assert_eq!(be_minimal(0xFF), [0xFF]);
        assert_eq!(be_minimal(0x100), [0x01, 0x00]);
        assert_eq!(be_minimal(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(be_minimal(u64::MAX), [0xFF; 8]);
    }

    #[test]
    fn test_hex_string() {
        let tlv = encode(Tag::CardId, TlvValue::Hex("cb22000000027374".into())).unwrap();
        assert_eq!(tlv.value(), hex!("CB22000000027374"));
        assert_eq!(
            encode(Tag::CardId, TlvValue::Hex("XYZ".into())),
            Err(EncodeError::InvalidValue {
                tag: Tag::CardId,
                reason: "invalid hex string"
            })
        );
    }

    #[test]
    fn test_hex_string_rejects_whitespace() {
        for text in [" CB22", "CB22\n", "CB 22"] {
            assert_eq!(
                encode(Tag::CardId, TlvValue::Hex(text.into())),
                Err(EncodeError::InvalidValue {
                    tag: Tag::CardId,
                    reason: "invalid hex string"
                }),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_pin_is_hashed() {
        let tlv = encode(Tag::Pin, TlvValue::Hex("000000".into())).unwrap();
        assert_eq!(tlv.len(), 32);
        assert_eq!(tlv.value(), Sha256::digest(b"000000").as_slice());

        let pin2 = encode(Tag::Pin2, TlvValue::Hex("000".into())).unwrap();
        assert_eq!(pin2.value(), Sha256::digest(b"000").as_slice());
    }

    #[test]
    fn test_uint() {
        assert_eq!(encode_value(Tag::Health, TlvValue::Int(0)).unwrap(), [0x00]);
        assert_eq!(encode_value(Tag::MaxSignatures, TlvValue::Int(1000)).unwrap(), [0x03, 0xE8]);
        assert_eq!(
            encode_value(Tag::Pause, TlvValue::Int(-1)),
            Err(EncodeError::InvalidValue {
                tag: Tag::Pause,
                reason: "negative integer"
            })
        );
    }

    #[test]
    fn test_bool_is_unsupported() {
        assert_eq!(
            encode(Tag::IsActivated, TlvValue::Bool(true)),
            Err(EncodeError::Unsupported {
                tag: Tag::IsActivated
            })
        );
    }

    #[test]
    fn test_domain_values() {
        assert_eq!(
            encode_value(Tag::CurveId, TlvValue::Curve(EllipticCurve::Secp256k1)).unwrap(),
            b"secp256k1\\0"
        );
        assert_eq!(
            encode_value(
                Tag::ManufactureDateTime,
                TlvValue::Date(CalendarDate::new(2020, 12, 31).unwrap())
            )
            .unwrap(),
            [0x07, 0xE4, 0x0C, 0x1F]
        );
        assert_eq!(
            encode_value(Tag::ProductMask, TlvValue::ProductMask(Product::IdCard.into())).unwrap(),
            [0x04]
        );
        assert_eq!(
            encode_value(
                Tag::SettingsMask,
                TlvValue::SettingsMask(SettingsMask::new(&[Setting::IsReusable, Setting::UseNdef]))
            )
            .unwrap(),
            [0x02, 0x01]
        );
        assert_eq!(
            encode_value(
                Tag::SigningMethod,
                TlvValue::SigningMethod(SigningMethod::SignHash.into())
            )
            .unwrap(),
            [0x00]
        );
        assert_eq!(
            encode_value(Tag::Status, TlvValue::CardStatus(CardStatus::Loaded)).unwrap(),
            [0x02]
        );
        assert_eq!(
            encode_value(Tag::Mode, TlvValue::IssuerDataMode(IssuerDataMode::WriteExtraData))
                .unwrap(),
            [0x02]
        );
    }

    #[test]
    fn test_unknown_flag_bits() {
        assert_eq!(
            encode_value(
                Tag::SettingsMask,
                TlvValue::SettingsMask(SettingsMask::from_bits_retain(0x8000_0000))
            ),
            Err(EncodeError::InvalidValue {
                tag: Tag::SettingsMask,
                reason: "unknown settings flags"
            })
        );
        assert_eq!(
            encode_value(
                Tag::SigningMethod,
                TlvValue::SigningMethod(SigningMethodMask::from_bits_retain(0x09))
            ),
            Err(EncodeError::InvalidValue {
                tag: Tag::SigningMethod,
                reason: "unknown signing method"
            })
        );
    }

    #[test]
    fn test_type_mismatch() {
        assert_eq!(
            encode(Tag::Firmware, TlvValue::Int(1)),
            Err(EncodeError::TypeMismatch { tag: Tag::Firmware })
        );
        assert_eq!(
            encode(Tag::CardId, TlvValue::Text("CB22".into())),
            Err(EncodeError::TypeMismatch { tag: Tag::CardId })
        );
        assert_eq!(
            encode(Tag::Unknown(0xEE), TlvValue::Bytes(vec![1])).map(|tlv| tlv.to_bytes()),
            Ok(bytes::Bytes::from_static(&[0xEE, 0x01, 0x01]))
        );
    }

    #[test]
    fn test_value_too_long() {
        assert!(matches!(
            encode(Tag::IssuerData, TlvValue::Bytes(vec![0; 0x1_0000])),
            Err(EncodeError::Frame(_))
        ));
    }
}
