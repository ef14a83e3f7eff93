//! Decoded TLV values and conversions to and from plain Rust types

use std::fmt;

use bytes::Bytes;

use crate::{
    error::{DecodeError, EncodeError},
    tag::{Tag, ValueType},
    types::{
        CalendarDate, CardStatus, EllipticCurve, IssuerDataMode, ProductMask, SettingsMask,
        SigningMethod, SigningMethodMask,
    },
};

/// Value of a TLV record, in the representation its value type calls for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlvValue {
    /// Uppercase hex string
    Hex(String),
    /// UTF-8 text
    Text(String),
    /// Unsigned integer
    Int(i64),
    /// Flag
    Bool(bool),
    /// Opaque bytes
    Bytes(Vec<u8>),
    /// Curve
    Curve(EllipticCurve),
    /// Calendar date
    Date(CalendarDate),
    /// Product flags
    ProductMask(ProductMask),
    /// Settings flags
    SettingsMask(SettingsMask),
    /// Card status
    CardStatus(CardStatus),
    /// Signing method(s)
    SigningMethod(SigningMethodMask),
    /// Issuer data mode
    IssuerDataMode(IssuerDataMode),
}

impl TlvValue {
    /// Value type this variant is produced for
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Hex(_) => ValueType::HexString,
            Self::Text(_) => ValueType::Utf8String,
            Self::Int(_) => ValueType::Uint,
            Self::Bool(_) => ValueType::Bool,
            Self::Bytes(_) => ValueType::ByteArray,
            Self::Curve(_) => ValueType::EllipticCurve,
            Self::Date(_) => ValueType::DateTime,
            Self::ProductMask(_) => ValueType::ProductMask,
            Self::SettingsMask(_) => ValueType::SettingsMask,
            Self::CardStatus(_) => ValueType::CardStatus,
            Self::SigningMethod(_) => ValueType::SigningMethod,
            Self::IssuerDataMode(_) => ValueType::IssuerDataMode,
        }
    }

    /// String content of a hex or text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Hex(s) | Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Flag content
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Byte content
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Curve content
    pub const fn as_curve(&self) -> Option<EllipticCurve> {
        match self {
            Self::Curve(curve) => Some(*curve),
            _ => None,
        }
    }

    /// Date content
    pub const fn as_date(&self) -> Option<CalendarDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl fmt::Display for TlvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(s) => write!(f, "{s}"),
            Self::Text(s) => write!(f, "\"{s}\""),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Bytes(bytes) => write!(f, "{}", hex::encode_upper(bytes)),
            Self::Curve(curve) => write!(f, "{curve}"),
            Self::Date(date) => write!(f, "{date}"),
            Self::ProductMask(mask) => write!(f, "0x{:02X} ({mask})", mask.bits()),
            Self::SettingsMask(mask) => write!(f, "0x{:08X} ({mask})", mask.bits()),
            Self::CardStatus(status) => write!(f, "{status}"),
            Self::SigningMethod(mask) => write!(f, "0x{:02X} ({mask})", mask.bits()),
            Self::IssuerDataMode(mode) => write!(f, "{mode}"),
        }
    }
}

/// Conversion of plain Rust values into the [`TlvValue`] a tag expects
///
/// A value with no representation for the tag's [`ValueType`] is
/// [`EncodeError::TypeMismatch`]. A value of the right kind that does not fit
/// the wire form, such as an integer above `i64::MAX`, is
/// [`EncodeError::InvalidValue`].
pub trait ToTlvValue {
    /// Convert for `tag`
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError>;
}

impl ToTlvValue for TlvValue {
    fn to_tlv_value(self, _tag: Tag) -> Result<TlvValue, EncodeError> {
        Ok(self)
    }
}

impl ToTlvValue for String {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        match tag.value_type() {
            ValueType::HexString => Ok(TlvValue::Hex(self)),
            ValueType::Utf8String => Ok(TlvValue::Text(self)),
            _ => Err(EncodeError::TypeMismatch { tag }),
        }
    }
}

impl ToTlvValue for &str {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        self.to_owned().to_tlv_value(tag)
    }
}

impl ToTlvValue for &String {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        self.as_str().to_tlv_value(tag)
    }
}

impl ToTlvValue for bool {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        expect_type(tag, ValueType::Bool)?;
        Ok(TlvValue::Bool(self))
    }
}

impl ToTlvValue for Vec<u8> {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        expect_type(tag, ValueType::ByteArray)?;
        Ok(TlvValue::Bytes(self))
    }
}

impl ToTlvValue for &[u8] {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        self.to_vec().to_tlv_value(tag)
    }
}

impl<const N: usize> ToTlvValue for [u8; N] {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        self.to_vec().to_tlv_value(tag)
    }
}

impl ToTlvValue for Bytes {
    fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
        self.to_vec().to_tlv_value(tag)
    }
}

fn expect_type(tag: Tag, value_type: ValueType) -> Result<(), EncodeError> {
    if tag.value_type() == value_type {
        Ok(())
    } else {
        Err(EncodeError::TypeMismatch { tag })
    }
}

macro_rules! impl_to_tlv_value_for_int {
    ($($int:ty),+) => {
        $(
            impl ToTlvValue for $int {
                fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
                    let too_large = EncodeError::InvalidValue { tag, reason: "integer too large" };
                    let value = match tag.value_type() {
                        ValueType::Uint => TlvValue::Int(i64::try_from(self).map_err(|_| too_large)?),
                        ValueType::ProductMask => TlvValue::ProductMask(ProductMask::from_bits_retain(
                            u8::try_from(self).map_err(|_| too_large)?,
                        )),
                        ValueType::SettingsMask => TlvValue::SettingsMask(
                            SettingsMask::from_bits_retain(u32::try_from(self).map_err(|_| too_large)?),
                        ),
                        ValueType::SigningMethod => TlvValue::SigningMethod(
                            SigningMethodMask::from_bits_retain(u32::try_from(self).map_err(|_| too_large)?),
                        ),
                        ValueType::CardStatus => u8::try_from(self)
                            .ok()
                            .and_then(CardStatus::from_code)
                            .map(TlvValue::CardStatus)
                            .ok_or(EncodeError::InvalidValue { tag, reason: "unknown card status" })?,
                        ValueType::IssuerDataMode => u8::try_from(self)
                            .ok()
                            .and_then(IssuerDataMode::from_code)
                            .map(TlvValue::IssuerDataMode)
                            .ok_or(EncodeError::InvalidValue { tag, reason: "unknown issuer data mode" })?,
                        _ => return Err(EncodeError::TypeMismatch { tag }),
                    };
                    Ok(value)
                }
            }
        )+
    };
}

impl_to_tlv_value_for_int!(u8, u16, u32, u64, usize, i32, i64);

macro_rules! impl_to_tlv_value_for_domain {
    ($($ty:ty => $value_type:ident($variant:ident)),+ $(,)?) => {
        $(
            impl ToTlvValue for $ty {
                fn to_tlv_value(self, tag: Tag) -> Result<TlvValue, EncodeError> {
                    expect_type(tag, ValueType::$value_type)?;
                    Ok(TlvValue::$variant(self.into()))
                }
            }
        )+
    };
}

impl_to_tlv_value_for_domain! {
    EllipticCurve => EllipticCurve(Curve),
    CalendarDate => DateTime(Date),
    ProductMask => ProductMask(ProductMask),
    SettingsMask => SettingsMask(SettingsMask),
    CardStatus => CardStatus(CardStatus),
    SigningMethodMask => SigningMethod(SigningMethod),
    SigningMethod => SigningMethod(SigningMethod),
    IssuerDataMode => IssuerDataMode(IssuerDataMode),
}

/// Conversion of a decoded [`TlvValue`] into a plain Rust type
pub trait FromTlvValue: Sized {
    /// Convert the value decoded for `tag`
    fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError>;
}

impl FromTlvValue for TlvValue {
    fn from_tlv_value(_tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
        Ok(value)
    }
}

impl FromTlvValue for String {
    fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
        match value {
            TlvValue::Hex(s) | TlvValue::Text(s) => Ok(s),
            _ => Err(DecodeError::TypeMismatch { tag }),
        }
    }
}

impl FromTlvValue for bool {
    fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
        value.as_bool().ok_or(DecodeError::TypeMismatch { tag })
    }
}

impl FromTlvValue for Vec<u8> {
    fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
        match value {
            TlvValue::Bytes(bytes) => Ok(bytes),
            _ => Err(DecodeError::TypeMismatch { tag }),
        }
    }
}

macro_rules! impl_from_tlv_value_for_int {
    ($($int:ty),+) => {
        $(
            impl FromTlvValue for $int {
                fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
                    let n = value.as_int().ok_or(DecodeError::TypeMismatch { tag })?;
                    <$int>::try_from(n)
                        .map_err(|_| DecodeError::malformed(tag, "integer out of range"))
                }
            }
        )+
    };
}

impl_from_tlv_value_for_int!(u8, u16, u32, u64, usize, i32, i64);

macro_rules! impl_from_tlv_value_for_domain {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FromTlvValue for $ty {
                fn from_tlv_value(tag: Tag, value: TlvValue) -> Result<Self, DecodeError> {
                    match value {
                        TlvValue::$variant(inner) => Ok(inner),
                        _ => Err(DecodeError::TypeMismatch { tag }),
                    }
                }
            }
        )+
    };
}

impl_from_tlv_value_for_domain! {
    EllipticCurve => Curve,
    CalendarDate => Date,
    ProductMask => ProductMask,
    SettingsMask => SettingsMask,
    CardStatus => CardStatus,
    SigningMethodMask => SigningMethod,
    IssuerDataMode => IssuerDataMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Setting;

    #[test]
    fn test_strings_follow_value_type() {
        assert_eq!(
            "0A0B".to_tlv_value(Tag::Batch),
            Ok(TlvValue::Hex("0A0B".into()))
        );
        assert_eq!(
            "1.0".to_tlv_value(Tag::Firmware),
            Ok(TlvValue::Text("1.0".into()))
        );
        assert_eq!(
            "1.0".to_tlv_value(Tag::Health),
            Err(EncodeError::TypeMismatch { tag: Tag::Health })
        );
    }

    #[test]
    fn test_integers_follow_value_type() {
        assert_eq!(5u8.to_tlv_value(Tag::Health), Ok(TlvValue::Int(5)));
        assert_eq!(
            0x0201u32.to_tlv_value(Tag::SettingsMask),
            Ok(TlvValue::SettingsMask(SettingsMask::new(&[
                Setting::IsReusable,
                Setting::UseNdef
            ])))
        );
        assert_eq!(
            2u8.to_tlv_value(Tag::Status),
            Ok(TlvValue::CardStatus(CardStatus::Loaded))
        );
        assert_eq!(
            9u8.to_tlv_value(Tag::Status),
            Err(EncodeError::InvalidValue {
                tag: Tag::Status,
                reason: "unknown card status"
            })
        );
        assert_eq!(
            5u8.to_tlv_value(Tag::IssuerData),
            Err(EncodeError::TypeMismatch { tag: Tag::IssuerData })
        );
    }

    #[test]
    fn test_integer_too_large() {
        assert_eq!(
            u64::MAX.to_tlv_value(Tag::Health),
            Err(EncodeError::InvalidValue {
                tag: Tag::Health,
                reason: "integer too large"
            })
        );
        assert_eq!(
            0x100u16.to_tlv_value(Tag::ProductMask),
            Err(EncodeError::InvalidValue {
                tag: Tag::ProductMask,
                reason: "integer too large"
            })
        );
        assert_eq!(
            (i64::MAX as u64).to_tlv_value(Tag::Health),
            Ok(TlvValue::Int(i64::MAX))
        );
    }

    #[test]
    fn test_domain_values() {
        assert_eq!(
            SigningMethod::SignRaw.to_tlv_value(Tag::SigningMethod),
            Ok(TlvValue::SigningMethod(SigningMethodMask::single(SigningMethod::SignRaw)))
        );
        assert_eq!(
            EllipticCurve::Ed25519.to_tlv_value(Tag::Firmware),
            Err(EncodeError::TypeMismatch { tag: Tag::Firmware })
        );
        assert_eq!(
            true.to_tlv_value(Tag::CardId),
            Err(EncodeError::TypeMismatch { tag: Tag::CardId })
        );
    }

    #[test]
    fn test_from_tlv_value() {
        let tag = Tag::MaxSignatures;
        assert_eq!(u16::from_tlv_value(tag, TlvValue::Int(300)), Ok(300));
        assert_eq!(
            u8::from_tlv_value(tag, TlvValue::Int(300)),
            Err(DecodeError::malformed(tag, "integer out of range"))
        );
        assert_eq!(
            String::from_tlv_value(tag, TlvValue::Int(1)),
            Err(DecodeError::TypeMismatch { tag })
        );
        assert_eq!(i32::from_tlv_value(tag, TlvValue::Int(70_000)), Ok(70_000));
        assert_eq!(
            CardStatus::from_tlv_value(Tag::Status, TlvValue::CardStatus(CardStatus::Empty)),
            Ok(CardStatus::Empty)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(TlvValue::Bytes(vec![0xDE, 0xAD]).to_string(), "DEAD");
        assert_eq!(TlvValue::Text("Tangem".into()).to_string(), "\"Tangem\"");
        assert_eq!(
            TlvValue::SettingsMask(SettingsMask::new(&[Setting::UseCvc])).to_string(),
            "0x00000040 (Use CVC)"
        );
    }
}
