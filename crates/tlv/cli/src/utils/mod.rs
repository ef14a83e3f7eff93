//! Utility functions for the TLV CLI

pub mod display;
pub mod value;
