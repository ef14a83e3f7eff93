flag_mask! {
    /// Product the card was personalized as
    flag Product;
    /// Set of [`Product`] flags, one byte on the wire
    mask ProductMask(u8);
    {
        /// Banknote
        Note = 0x01 => "Note",
        /// Tag
        Tag = 0x02 => "Tag",
        /// Identity card
        IdCard = 0x04 => "ID Card",
        /// Identity issuer card
        IdIssuer = 0x08 => "ID Issuer",
        /// Authentication card
        Authentication = 0x10 => "Authentication",
        /// One half of a twin card pair
        TwinCard = 0x20 => "Twin Card",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_mask() {
        let mask = ProductMask::new(&[Product::Note, Product::TwinCard]);
        assert_eq!(mask.bits(), 0x21);
        assert!(mask.contains(Product::Note));
        assert!(!mask.contains(Product::IdCard));
        assert_eq!(mask.to_string(), "Note, Twin Card");
    }

    #[test]
    fn test_unknown_bits_rejected() {
        assert_eq!(ProductMask::from_bits(0x04), Some(Product::IdCard.into()));
        assert_eq!(ProductMask::from_bits(0x40), None);
        assert_eq!(ProductMask::from_bits_retain(0x40).bits(), 0x40);
        assert_eq!(ProductMask::default().to_string(), "None");
    }
}
