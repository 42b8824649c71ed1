//! Contains most common errors that may be encountered in decoding an H.264 bitstream
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Common decode errors
#[allow(clippy::module_name_repetitions)]
pub enum DecodeErrors {
    /// A read would cross the declared end of the bitstream buffer
    ExhaustedData,
    /// No entry in the named VLC table matches the bits under the cursor
    CodeNotFound(&'static str),
    /// A codeword prefix ran past the longest length the standard allows
    PrefixTooLong(String),
}
impl Debug for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::ExhaustedData => {
                write!(f, "Reached the end of the bitstream while bits were still expected")
            }
            Self::CodeNotFound(ref table) => {
                write!(f, "Error matching a {} codeword, no table entry fits the bitstream", table)
            }
            Self::PrefixTooLong(ref reason) => {
                write!(f, "Overlong codeword prefix. Reason:{}", reason)
            }
        }
    }
}
impl Display for DecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::ExhaustedData => {
                write!(f, "Reached the end of the bitstream while bits were still expected")
            }
            Self::CodeNotFound(ref table) => {
                write!(f, "Error matching a {} codeword, no table entry fits the bitstream", table)
            }
            Self::PrefixTooLong(ref reason) => {
                write!(f, "Overlong codeword prefix. Reason:{}", reason)
            }
        }
    }
}
impl Error for DecodeErrors {}
