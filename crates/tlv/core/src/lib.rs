//! Tag-Length-Value codec for Tangem secure elements
//!
//! Every command sent to the card and every response it returns is a flat
//! concatenation of TLV records. Each record is addressed by a one-byte tag
//! whose declared [`ValueType`] fixes how its bytes are turned into a typed
//! [`TlvValue`] and back.
//!
//! ## Overview
//!
//! - [`Tag`] is the compiled-in registry of tag codes, names and value types
//! - [`Tlv`] is a single record together with the binary framing
//! - [`encoder`] turns typed values into record bytes
//! - [`decoder`] turns record bytes back into typed values
//! - [`TlvBuilder`] accumulates the records of a command
//! - [`Dump`] renders a record list for humans
//!
//! ```
//! use tangem_tlv::{Tag, Tlv, TlvBuilder, decode};
//!
//! let mut builder = TlvBuilder::new();
//! builder
//!     .append(Tag::CardId, Some("CB22000000027374"))?
//!     .append(Tag::IsActivated, Some(true))?
//!     .append(Tag::Firmware, None::<&str>)?;
//! let payload = builder.serialize();
//!
//! let tlvs = Tlv::parse_all(&payload)?;
//! let card_id: String = decode(&tlvs, Tag::CardId)?;
//! let activated: bool = decode(&tlvs, Tag::IsActivated)?;
//! assert_eq!(card_id, "CB22000000027374");
//! assert!(activated);
//! # Ok::<(), tangem_tlv::Error>(())
//! ```
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![forbid(unsafe_code)]
#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

// Re-export bytes for convenience
pub use bytes::Bytes;

pub mod builder;
pub mod decoder;
pub mod display;
pub mod encoder;
pub mod error;
pub mod tag;
pub mod tlv;
pub mod types;
pub mod value;

pub use builder::TlvBuilder;
pub use decoder::{decode, decode_optional, decode_value, find};
pub use display::{Dump, DumpConfig};
pub use encoder::{encode, encode_value};
pub use error::{DecodeError, EncodeError, Error, FrameError, Result};
pub use tag::{Tag, ValueType};
pub use tlv::{Tlv, TlvListExt};
pub use types::{
    CalendarDate, CardStatus, EllipticCurve, IssuerDataMode, Product, ProductMask, Setting,
    SettingsMask, SigningMethod, SigningMethodMask,
};
pub use value::{FromTlvValue, TlvValue, ToTlvValue};

/// Prelude module containing commonly used traits and types
pub mod prelude {
    pub use crate::{
        DecodeError, EncodeError, Error, FrameError, FromTlvValue, Tag, Tlv, TlvBuilder,
        TlvListExt, TlvValue, ToTlvValue, ValueType, decode, decode_optional,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let mut builder = TlvBuilder::new();
        builder.append(Tag::Health, Some(100u8)).unwrap();
        let tlvs = Tlv::parse_all(&builder.serialize()).unwrap();
        assert_eq!(tlvs.len(), 1);
        assert_eq!(tlvs[0].tag(), Tag::Health);
        assert_eq!(decode::<u8>(&tlvs, Tag::Health).unwrap(), 100);
    }
}
