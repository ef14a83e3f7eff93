//! Domain values carried by typed tags

/// Declares a flag enum and the bitmask container that holds a set of its flags.
macro_rules! flag_mask {
    (
        $(#[$flag_meta:meta])*
        flag $flag:ident;
        $(#[$mask_meta:meta])*
        mask $mask:ident($repr:ident);
        {
            $(
                $(#[$meta:meta])*
                $name:ident = $bit:literal => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$flag_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        pub enum $flag {
            $(
                $(#[$meta])*
                $name = $bit,
            )+
        }

        impl $flag {
            /// Every flag, in bit order
            pub const ALL: &'static [Self] = &[$(Self::$name),+];

            /// Bit of this flag within the mask
            pub const fn bit(self) -> $repr {
                self as $repr
            }

            /// Human readable label
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$name => $label,)+
                }
            }
        }

        $(#[$mask_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $mask($repr);

        impl $mask {
            /// Union of every known flag bit
            pub const KNOWN_BITS: $repr = 0 $(| $bit)+;

            /// Create a mask holding the given flags
            pub fn new(flags: &[$flag]) -> Self {
                Self(flags.iter().fold(0, |bits, flag| bits | flag.bit()))
            }

            /// Create a mask from raw bits, rejecting bits outside the known flags
            pub const fn from_bits(bits: $repr) -> Option<Self> {
                if bits & !Self::KNOWN_BITS == 0 {
                    Some(Self(bits))
                } else {
                    None
                }
            }

            /// Create a mask from raw bits, keeping unknown bits
            pub const fn from_bits_retain(bits: $repr) -> Self {
                Self(bits)
            }

            /// Raw bits
            pub const fn bits(&self) -> $repr {
                self.0
            }

            /// Whether the flag is set
            pub const fn contains(&self, flag: $flag) -> bool {
                self.0 & flag.bit() != 0
            }

            /// Set flags, in bit order
            pub fn flags(&self) -> impl Iterator<Item = $flag> + '_ {
                $flag::ALL.iter().copied().filter(|flag| self.contains(*flag))
            }
        }

        impl From<$flag> for $mask {
            fn from(flag: $flag) -> Self {
                Self(flag.bit())
            }
        }

        impl std::fmt::Display for $mask {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let labels: Vec<&str> = self.flags().map($flag::label).collect();
                if labels.is_empty() {
                    write!(f, "None")
                } else {
                    write!(f, "{}", labels.join(", "))
                }
            }
        }
    };
}

mod curve;
mod date;
mod issuer_data_mode;
mod product_mask;
mod settings_mask;
mod signing_method;
mod status;

pub use curve::EllipticCurve;
pub use date::{CalendarDate, InvalidDate};
pub use issuer_data_mode::IssuerDataMode;
pub use product_mask::{Product, ProductMask};
pub use settings_mask::{Setting, SettingsMask};
pub use signing_method::{SigningMethod, SigningMethodMask};
pub use status::CardStatus;
