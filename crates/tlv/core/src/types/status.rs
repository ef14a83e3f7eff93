use derive_more::Display;

/// Lifecycle status reported by the card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum CardStatus {
    /// Card has not been personalized yet
    #[display("Not personalized")]
    NotPersonalized = 0,
    /// No wallet on the card
    Empty = 1,
    /// Wallet created
    Loaded = 2,
    /// Wallet purged
    Purged = 3,
}

impl CardStatus {
    /// Status code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a status by code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::NotPersonalized),
            1 => Some(Self::Empty),
            2 => Some(Self::Loaded),
            3 => Some(Self::Purged),
            _ => None,
        }
    }

    /// Look up a status by name, ignoring ASCII case and separators
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "notpersonalized" => Some(Self::NotPersonalized),
            "empty" => Some(Self::Empty),
            "loaded" => Some(Self::Loaded),
            "purged" => Some(Self::Purged),
            _ => None,
        }
    }
}
