//! Command payload accumulator

use tracing::{debug, trace};

use crate::{
    encoder::encode,
    error::EncodeError,
    tag::{Tag, ValueType},
    tlv::{Tlv, TlvListExt},
    value::{TlvValue, ToTlvValue},
};

/// Accumulates the records of a command in call order
///
/// ```
/// use tangem_tlv::{Tag, TlvBuilder};
///
/// let mut builder = TlvBuilder::new();
/// builder
///     .append(Tag::Pin, Some("000000"))?
///     .append(Tag::CardId, Some("CB22000000027374"))?
///     .append(Tag::Cvc, None::<&str>)?;
/// assert_eq!(builder.len(), 2);
/// # Ok::<(), tangem_tlv::EncodeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TlvBuilder {
    tlvs: Vec<Tlv>,
}

impl TlvBuilder {
    /// Create an empty builder
    pub const fn new() -> Self {
        Self { tlvs: Vec::new() }
    }

    /// Encode and append `value` for `tag`
    ///
    /// `None` appends nothing. Bool tags are expressed by presence: `true`
    /// appends an empty record and `false` appends nothing.
    pub fn append<T: ToTlvValue>(
        &mut self,
        tag: Tag,
        value: Option<T>,
    ) -> Result<&mut Self, EncodeError> {
        let Some(value) = value else {
            return Ok(self);
        };

        let tlv = match (tag.value_type(), value.to_tlv_value(tag)?) {
            (ValueType::Bool, TlvValue::Bool(true)) => Tlv::empty(tag),
            (ValueType::Bool, TlvValue::Bool(false)) => return Ok(self),
            (_, value) => encode(tag, value)?,
        };

        trace!(%tag, len = tlv.len(), "Appended TLV record");
        self.tlvs.push(tlv);
        Ok(self)
    }

    /// Append a record built elsewhere
    pub fn append_tlv(&mut self, tlv: Tlv) -> &mut Self {
        trace!(tag = %tlv.tag(), len = tlv.len(), "Appended TLV record");
        self.tlvs.push(tlv);
        self
    }

    /// Records accumulated so far
    pub fn tlvs(&self) -> &[Tlv] {
        &self.tlvs
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.tlvs.len()
    }

    /// Whether no record has been appended
    pub fn is_empty(&self) -> bool {
        self.tlvs.is_empty()
    }

    /// Concatenate the accumulated records into the command payload
    pub fn serialize(&self) -> Vec<u8> {
        let payload = self.tlvs.to_bytes().to_vec();
        debug!(count = self.tlvs.len(), len = payload.len(), "Serialized TLV payload");
        payload
    }
}
