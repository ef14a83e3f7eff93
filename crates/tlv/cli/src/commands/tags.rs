//! List the tag registry

use tangem_tlv::Tag;

use crate::utils::display::{heading, tag_row};

/// Print every known tag with its code and value type
pub fn tags_command() {
    println!("{}", heading("Known tags"));
    for tag in Tag::ALL {
        println!("{}", tag_row(*tag));
    }
}
