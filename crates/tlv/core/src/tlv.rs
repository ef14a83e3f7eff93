//! Record framing
//!
//! A record is the tag byte, a length and the value bytes. Lengths up to
//! `0xFE` take one byte; longer values are announced by `0xFF` followed by a
//! big-endian `u16`. An empty value is written as a single `0x00` length byte.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::{error::FrameError, tag::Tag};

/// Marker announcing a two-byte length
const EXTENDED_LENGTH: u8 = 0xFF;

/// Single TLV record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tlv {
    tag: Tag,
    value: Bytes,
}

impl Tlv {
    /// Longest value that can be framed
    pub const MAX_VALUE_LEN: usize = 0xFFFF;

    /// Longest value framed with a one-byte length
    pub const MAX_SHORT_LEN: usize = 0xFE;

    /// Create a record, rejecting values longer than [`Self::MAX_VALUE_LEN`]
    pub fn new(tag: Tag, value: impl Into<Bytes>) -> Result<Self, FrameError> {
        let value = value.into();
        if value.len() > Self::MAX_VALUE_LEN {
            return Err(FrameError::ValueTooLong {
                tag,
                len: value.len(),
            });
        }
        Ok(Self { tag, value })
    }

    /// Create a record with an empty value
    pub const fn empty(tag: Tag) -> Self {
        Self {
            tag,
            value: Bytes::new(),
        }
    }

    /// Tag
    pub const fn tag(&self) -> Tag {
        self.tag
    }

    /// Value bytes
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Value bytes, consuming the record
    pub fn into_value(self) -> Bytes {
        self.value
    }

    /// Length of the value
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the value is empty
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Number of bytes the framed record takes
    pub fn encoded_len(&self) -> usize {
        let header = if self.value.len() > Self::MAX_SHORT_LEN {
            4
        } else {
            2
        };
        header + self.value.len()
    }

    /// Write the framed record
    pub fn write_to(&self, buf: &mut impl BufMut) {
        buf.put_u8(self.tag.code());
        let len = self.value.len();
        if len > Self::MAX_SHORT_LEN {
            buf.put_u8(EXTENDED_LENGTH);
            // Construction caps the value at 0xFFFF
            buf.put_u16(len as u16);
        } else {
            // Zero-length values still carry the 0x00 length byte
            buf.put_u8(len as u8);
        }
        buf.put_slice(&self.value);
    }

    /// Framed record bytes
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        self.write_to(&mut buf);
        buf.freeze()
    }

    /// Read the next record from `buf`
    ///
    /// Returns `Ok(None)` once `buf` is exhausted. A record cut short at any
    /// point after its tag byte is reported as [`FrameError::Truncated`].
    pub fn parse_one(buf: &mut impl Buf) -> Result<Option<Self>, FrameError> {
        if !buf.has_remaining() {
            return Ok(None);
        }

        let tag = Tag::by_code(buf.get_u8());
        let len = match take_u8(buf)? {
            EXTENDED_LENGTH => {
                if buf.remaining() < 2 {
                    return Err(FrameError::Truncated);
                }
                buf.get_u16() as usize
            }
            len => len as usize,
        };

        if buf.remaining() < len {
            trace!(%tag, len, remaining = buf.remaining(), "Value runs past end of stream");
            return Err(FrameError::Truncated);
        }

        let value = buf.copy_to_bytes(len);
        trace!(%tag, len, "Parsed TLV record");
        Ok(Some(Self { tag, value }))
    }

    /// Split a byte stream into records, in wire order
    ///
    /// Unknown tag codes are kept as [`Tag::Unknown`]. Any truncated record
    /// fails the whole parse.
    pub fn parse_all(data: &[u8]) -> Result<Vec<Self>, FrameError> {
        let mut buf = data;
        let mut tlvs = Vec::new();
        loop {
            match Self::parse_one(&mut buf) {
                Ok(Some(tlv)) => tlvs.push(tlv),
                Ok(None) => break,
                Err(err) => {
                    debug!(
                        error = %err,
                        parsed = tlvs.len(),
                        offset = data.len() - buf.len(),
                        "Failed to parse TLV stream"
                    );
                    return Err(err);
                }
            }
        }
        trace!(count = tlvs.len(), len = data.len(), "Parsed TLV stream");
        Ok(tlvs)
    }
}

fn take_u8(buf: &mut impl Buf) -> Result<u8, FrameError> {
    if buf.has_remaining() {
        Ok(buf.get_u8())
    } else {
        Err(FrameError::Truncated)
    }
}

/// Framing helpers for record lists
pub trait TlvListExt {
    /// Concatenated framed records
    fn to_bytes(&self) -> Bytes;

    /// Total framed length
    fn encoded_len(&self) -> usize;
}

impl TlvListExt for [Tlv] {
    fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        for tlv in self {
            tlv.write_to(&mut buf);
        }
        buf.freeze()
    }

    fn encoded_len(&self) -> usize {
        self.iter().map(Tlv::encoded_len).sum()
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_short_length() {
        let tlv = Tlv::new(Tag::CardId, hex!("CB22000000027374").to_vec()).unwrap();
        assert_eq!(tlv.to_bytes().as_ref(), hex!("0108CB22000000027374"));
        assert_eq!(tlv.encoded_len(), 10);
    }

    #[test]
    fn test_empty_value() {
        let tlv = Tlv::empty(Tag::IsActivated);
        assert_eq!(tlv.to_bytes().as_ref(), [0x3A, 0x00]);

        let parsed = Tlv::parse_all(&[0x3A, 0x00]).unwrap();
        assert_eq!(parsed, vec![tlv]);
        assert!(parsed[0].is_empty());
    }

    #[test]
    fn test_length_boundaries() {
        let at_short_limit = Tlv::new(Tag::IssuerData, vec![0xAA; 0xFE]).unwrap();
        let bytes = at_short_limit.to_bytes();
        assert_eq!(&bytes[..2], [0x32, 0xFE]);
        assert_eq!(bytes.len(), 2 + 0xFE);

        let first_extended = Tlv::new(Tag::IssuerData, vec![0xAA; 0xFF]).unwrap();
        let bytes = first_extended.to_bytes();
        assert_eq!(&bytes[..4], [0x32, 0xFF, 0x00, 0xFF]);
        assert_eq!(bytes.len(), first_extended.encoded_len());

        let largest = Tlv::new(Tag::IssuerData, vec![0; Tlv::MAX_VALUE_LEN]).unwrap();
        assert_eq!(&largest.to_bytes()[..4], [0x32, 0xFF, 0xFF, 0xFF]);

        for tlv in [at_short_limit, first_extended, largest] {
            assert_eq!(Tlv::parse_all(&tlv.to_bytes()).unwrap(), vec![tlv]);
        }
    }

    #[test]
    fn test_value_too_long() {
        assert_eq!(
            Tlv::new(Tag::IssuerData, vec![0; 0x1_0000]),
            Err(FrameError::ValueTooLong {
                tag: Tag::IssuerData,
                len: 0x1_0000
            })
        );
    }

    #[test]
    fn test_parse_sequence() {
        let data = hex!("0102AABB 3A00 8003312E30");
        let tlvs = Tlv::parse_all(&data).unwrap();
        assert_eq!(tlvs.len(), 3);
        assert_eq!(tlvs[0].tag(), Tag::CardId);
        assert_eq!(tlvs[0].value(), [0xAA, 0xBB]);
        assert_eq!(tlvs[1].tag(), Tag::IsActivated);
        assert_eq!(tlvs[2].tag(), Tag::Firmware);
        assert_eq!(tlvs[2].value(), b"1.0");
        assert_eq!(tlvs.to_bytes().as_ref(), data);
        assert_eq!(tlvs.encoded_len(), data.len());
    }

    #[test]
    fn test_parse_empty_stream() {
        assert_eq!(Tlv::parse_all(&[]).unwrap(), vec![]);
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let tlvs = Tlv::parse_all(&hex!("EE0201020100")).unwrap();
        assert_eq!(tlvs[0].tag(), Tag::Unknown(0xEE));
        assert_eq!(tlvs[0].value(), [0x01, 0x02]);
        assert_eq!(tlvs[1].tag(), Tag::CardId);
    }

    #[test]
    fn test_truncated() {
        // Missing length byte
        assert_eq!(Tlv::parse_all(&[0x01]), Err(FrameError::Truncated));
        // Value shorter than announced
        assert_eq!(Tlv::parse_all(&[0x01, 0x03, 0xAA]), Err(FrameError::Truncated));
        // Extended length cut short
        assert_eq!(Tlv::parse_all(&[0x32, 0xFF, 0x01]), Err(FrameError::Truncated));
        // Truncated record after a complete one
        assert_eq!(
            Tlv::parse_all(&[0x3A, 0x00, 0x80, 0x02, 0x31]),
            Err(FrameError::Truncated)
        );
    }
}
