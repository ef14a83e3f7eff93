use std::fmt;

use derive_more::Display;

/// Way the wallet is allowed to sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum SigningMethod {
    /// Sign hashes
    #[display("sign hash")]
    SignHash = 0,
    /// Sign raw transactions
    #[display("sign raw tx")]
    SignRaw = 1,
    /// Sign hashes validated by the issuer
    #[display("sign hash validated by issuer")]
    SignHashSignedByIssuer = 2,
    /// Sign raw transactions validated by the issuer
    #[display("sign raw tx validated by issuer")]
    SignRawSignedByIssuer = 3,
    /// Sign hashes validated by the issuer and update issuer data
    #[display("sign hash validated by issuer and write issuer data")]
    SignHashSignedByIssuerAndUpdateIssuerData = 4,
    /// Sign raw transactions validated by the issuer and update issuer data
    #[display("sign raw tx validated by issuer and write issuer data")]
    SignRawSignedByIssuerAndUpdateIssuerData = 5,
    /// Point-of-sale signing
    #[display("sign POS")]
    SignPos = 6,
}

impl SigningMethod {
    /// Every method, in code order
    pub const ALL: &'static [Self] = &[
        Self::SignHash,
        Self::SignRaw,
        Self::SignHashSignedByIssuer,
        Self::SignRawSignedByIssuer,
        Self::SignHashSignedByIssuerAndUpdateIssuerData,
        Self::SignRawSignedByIssuerAndUpdateIssuerData,
        Self::SignPos,
    ];

    /// Method code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a method by code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::SignHash),
            1 => Some(Self::SignRaw),
            2 => Some(Self::SignHashSignedByIssuer),
            3 => Some(Self::SignRawSignedByIssuer),
            4 => Some(Self::SignHashSignedByIssuerAndUpdateIssuerData),
            5 => Some(Self::SignRawSignedByIssuerAndUpdateIssuerData),
            6 => Some(Self::SignPos),
            _ => None,
        }
    }
}

/// Signing method field as stored on the card
///
/// With bit `0x80` clear the value is the code of a single [`SigningMethod`].
/// With bit `0x80` set, bit `n` marks the method with code `n` as allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SigningMethodMask(u32);

impl SigningMethodMask {
    const MULTIPLE: u32 = 0x80;
    const METHOD_BITS: u32 = 0x7F;

    /// Mask allowing a single method
    pub const fn single(method: SigningMethod) -> Self {
        Self(method as u32)
    }

    /// Mask allowing several methods
    pub fn multiple(methods: &[SigningMethod]) -> Self {
        Self(
            methods
                .iter()
                .fold(Self::MULTIPLE, |bits, method| bits | 1 << method.code()),
        )
    }

    /// Validate raw bits, rejecting unknown method codes
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits & Self::MULTIPLE != 0 {
            if bits & !(Self::MULTIPLE | Self::METHOD_BITS) == 0 {
                Some(Self(bits))
            } else {
                None
            }
        } else if bits <= u8::MAX as u32 && SigningMethod::from_code(bits as u8).is_some() {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Keep raw bits as they are
    pub const fn from_bits_retain(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Whether the value lists several methods
    pub const fn is_multiple(&self) -> bool {
        self.0 & Self::MULTIPLE != 0
    }

    /// Whether the method is allowed
    pub const fn contains(&self, method: SigningMethod) -> bool {
        if self.is_multiple() {
            self.0 & (1 << method.code()) != 0
        } else {
            self.0 == method.code() as u32
        }
    }

    /// Allowed methods, in code order
    pub fn methods(&self) -> Vec<SigningMethod> {
        SigningMethod::ALL
            .iter()
            .copied()
            .filter(|method| self.contains(*method))
            .collect()
    }

    /// Method a terminal should use: the allowed method with the lowest code
    pub fn preferred(&self) -> Option<SigningMethod> {
        self.methods().into_iter().next()
    }
}

impl From<SigningMethod> for SigningMethodMask {
    fn from(method: SigningMethod) -> Self {
        Self::single(method)
    }
}

impl fmt::Display for SigningMethodMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<String> = self.methods().iter().map(ToString::to_string).collect();
        if methods.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", methods.join(", "))
        }
    }
}
