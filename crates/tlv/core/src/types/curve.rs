use derive_more::Display;

/// Curve of the wallet key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EllipticCurve {
    /// secp256k1
    #[display("secp256k1")]
    Secp256k1,
    /// NIST P-256
    #[display("secp256r1")]
    Secp256r1,
    /// Ed25519
    #[display("ed25519")]
    Ed25519,
}

impl EllipticCurve {
    /// Every supported curve
    pub const ALL: &'static [Self] = &[Self::Secp256k1, Self::Secp256r1, Self::Ed25519];

    /// Terminator appended to the name on the wire: the two characters `\` and `0`
    pub const WIRE_SUFFIX: &'static [u8] = b"\\0";

    /// Canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "secp256r1",
            Self::Ed25519 => "ed25519",
        }
    }

    /// Look up a curve by canonical name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|curve| curve.name().eq_ignore_ascii_case(name))
    }

    /// Bytes written for this curve
    pub fn to_wire(&self) -> Vec<u8> {
        [self.name().as_bytes(), Self::WIRE_SUFFIX].concat()
    }

    /// Read a curve from its wire form
    ///
    /// The name may be followed by the `\0` terminator or by NUL bytes.
    pub fn from_wire(bytes: &[u8]) -> Option<Self> {
        let name = bytes.strip_suffix(Self::WIRE_SUFFIX).unwrap_or(bytes);
        let end = name.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        std::str::from_utf8(&name[..end])
            .ok()
            .and_then(Self::from_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_form() {
        assert_eq!(EllipticCurve::Secp256k1.to_wire(), b"secp256k1\\0".to_vec());
        assert_eq!(
            EllipticCurve::from_wire(b"ed25519\\0"),
            Some(EllipticCurve::Ed25519)
        );
        assert_eq!(
            EllipticCurve::from_wire(b"secp256r1\x00"),
            Some(EllipticCurve::Secp256r1)
        );
        assert_eq!(
            EllipticCurve::from_wire(b"secp256k1"),
            Some(EllipticCurve::Secp256k1)
        );
        assert_eq!(EllipticCurve::from_wire(b"curve25519\\0"), None);
        assert_eq!(EllipticCurve::from_wire(b""), None);
    }
}
