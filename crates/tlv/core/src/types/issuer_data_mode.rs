use derive_more::Display;

/// Step of an issuer extra data read or write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum IssuerDataMode {
    /// Read extra data, or start writing it
    #[display("Read or start write")]
    ReadOrStartWrite = 1,
    /// Write one chunk of extra data
    #[display("Write extra data")]
    WriteExtraData = 2,
    /// Finish writing extra data
    #[display("Finalize extra data")]
    FinalizeExtraData = 3,
}

impl IssuerDataMode {
    /// Mode code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a mode by code
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::ReadOrStartWrite),
            2 => Some(Self::WriteExtraData),
            3 => Some(Self::FinalizeExtraData),
            _ => None,
        }
    }

    /// Look up a mode by name, ignoring ASCII case and separators
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "readorstartwrite" => Some(Self::ReadOrStartWrite),
            "writeextradata" => Some(Self::WriteExtraData),
            "finalizeextradata" => Some(Self::FinalizeExtraData),
            _ => None,
        }
    }
}
