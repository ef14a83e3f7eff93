//! Tag registry
//!
//! Every tag the card understands is listed once in the `tags!` invocation
//! below, together with its one-byte code and the [`ValueType`] its bytes are
//! read as. Codes that are not listed resolve to [`Tag::Unknown`], whose
//! bytes are kept as an opaque byte array.

use std::fmt;

use derive_more::Display;

/// Semantic type of a tag's value, fixing how its bytes are encoded and decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ValueType {
    /// Raw bytes exposed as an uppercase hex string
    HexString,
    /// UTF-8 text
    Utf8String,
    /// Unsigned big-endian integer
    Uint,
    /// Flag carried by the presence of the record
    Bool,
    /// Opaque bytes
    ByteArray,
    /// Curve name
    EllipticCurve,
    /// Calendar date without time of day
    DateTime,
    /// Product flags, one byte
    ProductMask,
    /// Card settings flags
    SettingsMask,
    /// Card lifecycle status
    CardStatus,
    /// Allowed signing method(s)
    SigningMethod,
    /// Issuer extra data write mode
    IssuerDataMode,
}

macro_rules! tags {
    ($(
        $(#[$meta:meta])*
        $name:ident = $code:literal => $value_type:ident
    ),+ $(,)?) => {
        /// Tag of a TLV record
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Tag {
            $(
                $(#[$meta])*
                $name,
            )+
            /// Code missing from the registry
            Unknown(u8),
        }

        impl Tag {
            /// Every registered tag, in code order
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Resolve a code, falling back to [`Tag::Unknown`]
            pub const fn by_code(code: u8) -> Self {
                match code {
                    $($code => Self::$name,)+
                    other => Self::Unknown(other),
                }
            }

            /// One-byte wire code
            pub const fn code(&self) -> u8 {
                match self {
                    $(Self::$name => $code,)+
                    Self::Unknown(code) => *code,
                }
            }

            /// Canonical name
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)+
                    Self::Unknown(_) => "Unknown",
                }
            }

            /// Declared value type
            pub const fn value_type(&self) -> ValueType {
                match self {
                    $(Self::$name => ValueType::$value_type,)+
                    Self::Unknown(_) => ValueType::ByteArray,
                }
            }
        }
    };
}

tags! {
    /// Card identifier (8 bytes)
    CardId = 0x01 => HexString,
    /// Card lifecycle status
    Status = 0x02 => CardStatus,
    /// Card public key
    CardPublicKey = 0x03 => ByteArray,
    /// Signature of challenge and salt made with the card key
    CardSignature = 0x04 => ByteArray,
    /// Wallet curve
    CurveId = 0x05 => EllipticCurve,
    /// Hash algorithm identifier
    HashAlgId = 0x06 => Uint,
    /// Allowed signing methods
    SigningMethod = 0x07 => SigningMethod,
    /// Maximum number of signatures the wallet allows
    MaxSignatures = 0x08 => Uint,
    /// Delay before PIN2 is requested, in 10ms units
    PauseBeforePin2 = 0x09 => Uint,
    /// Card settings
    SettingsMask = 0x0A => SettingsMask,
    /// Chip UID
    Uid = 0x0B => HexString,
    /// Nested personalization data
    CardData = 0x0C => ByteArray,
    /// Remaining chip health
    Health = 0x0F => Uint,
    /// PIN1, sent as its SHA-256 hash
    Pin = 0x10 => HexString,
    /// PIN2, sent as its SHA-256 hash
    Pin2 = 0x11 => HexString,
    /// New PIN1 hash
    NewPin = 0x12 => ByteArray,
    /// New PIN2 hash
    NewPin2 = 0x13 => ByteArray,
    /// Terminal challenge
    Challenge = 0x16 => ByteArray,
    /// Card salt
    Salt = 0x17 => ByteArray,
    /// Validation counter
    ValidationCounter = 0x18 => Uint,
    /// Card verification code
    Cvc = 0x19 => Utf8String,
    /// Terminal session key share
    SessionKeyA = 0x1A => ByteArray,
    /// Card session key share
    SessionKeyB = 0x1B => ByteArray,
    /// Remaining security delay, in 10ms units
    Pause = 0x1C => Uint,
    /// Manufacturer name
    ManufacturerName = 0x20 => Utf8String,
    /// Issuer extra data write mode
    Mode = 0x23 => IssuerDataMode,
    /// Issuer extra data offset
    Offset = 0x24 => Uint,
    /// Issuer extra data size
    Size = 0x25 => Uint,
    /// Public key used to verify issuer data
    IssuerDataPublicKey = 0x30 => ByteArray,
    /// Public key used to verify issuer transaction signatures
    IssuerTransactionPublicKey = 0x31 => ByteArray,
    /// Issuer data
    IssuerData = 0x32 => ByteArray,
    /// Issuer signature over the issuer data
    IssuerDataSignature = 0x33 => ByteArray,
    /// Issuer signature over the transaction
    IssuerTransactionSignature = 0x34 => ByteArray,
    /// Issuer data counter
    IssuerDataCounter = 0x35 => Uint,
    /// Card has been activated
    IsActivated = 0x3A => Bool,
    /// Activation seed
    ActivationSeed = 0x3B => ByteArray,
    /// Firmware code page address
    CodePageAddress = 0x40 => ByteArray,
    /// Firmware code page count
    CodePageCount = 0x41 => ByteArray,
    /// Firmware code hash
    CodeHash = 0x42 => ByteArray,
    /// Concatenated hashes to sign
    TransactionOutHash = 0x50 => ByteArray,
    /// Size of each hash in `TransactionOutHash`
    TransactionOutHashSize = 0x51 => Uint,
    /// Raw transaction to sign
    TransactionOutRaw = 0x52 => ByteArray,
    /// Terminal signature over the transaction
    TerminalTransactionSignature = 0x57 => ByteArray,
    /// Terminal is linked to the card
    TerminalIsLinked = 0x58 => Bool,
    /// Terminal public key
    TerminalPublicKey = 0x5C => ByteArray,
    /// Wallet public key
    WalletPublicKey = 0x60 => ByteArray,
    /// Wallet signature
    WalletSignature = 0x61 => ByteArray,
    /// Remaining wallet signatures
    WalletRemainingSignatures = 0x62 => Uint,
    /// Number of hashes signed by the wallet
    WalletSignedHashes = 0x63 => Uint,
    /// Firmware version
    Firmware = 0x80 => Utf8String,
    /// Batch identifier
    Batch = 0x81 => HexString,
    /// Manufacture date
    ManufactureDateTime = 0x82 => DateTime,
    /// Issuer name
    IssuerName = 0x83 => Utf8String,
    /// Blockchain name
    BlockchainName = 0x84 => Utf8String,
    /// Manufacturer public key
    ManufacturerPublicKey = 0x85 => ByteArray,
    /// Manufacturer signature over the card ID
    CardIdManufacturerSignature = 0x86 => ByteArray,
    /// Product flags
    ProductMask = 0x8A => ProductMask,
    /// Token symbol
    TokenSymbol = 0xA0 => Utf8String,
    /// Token contract address
    TokenContractAddress = 0xA1 => Utf8String,
    /// Token decimals
    TokenDecimal = 0xA2 => Uint,
    /// Token name
    TokenName = 0xA3 => Utf8String,
    /// Note denomination
    Denomination = 0xC0 => Uint,
    /// Balance was validated by the card
    ValidatedBalance = 0xC1 => Bool,
    /// Date of the last signature
    LastSignDate = 0xC2 => DateTime,
    /// Human readable denomination
    DenominationText = 0xC3 => Utf8String,
    /// ID card holder name
    FullName = 0xD0 => Utf8String,
    /// ID card holder birthday
    Birthday = 0xD1 => Utf8String,
    /// ID card holder gender
    Gender = 0xD2 => Utf8String,
    /// ID card holder photo
    Photo = 0xD3 => ByteArray,
    /// ID card issue date
    IssueDate = 0xD4 => Utf8String,
    /// ID card expiry date
    ExpireDate = 0xD5 => Utf8String,
    /// Blockchain address trusted by the ID card
    TrustedAddress = 0xD6 => Utf8String,
}

impl Tag {
    /// Resolve a canonical name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(name))
    }

    /// Whether the value is PIN material, hashed before it reaches the wire
    pub const fn is_pin(&self) -> bool {
        matches!(self, Self::Pin | Self::Pin2)
    }

    /// Whether the code is missing from the registry
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<u8> for Tag {
    fn from(code: u8) -> Self {
        Self::by_code(code)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.code()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.code())
    }
}
