#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always
)]
//! Variable length code parsing for H.264/AVC bitstreams.
//!
//! This crate is the entropy-reading core of an H.264 decoder: it takes an
//! RBSP byte buffer (emulation prevention bytes already stripped), a bit
//! offset, and hands back decoded syntax element values. Exp-Golomb in all
//! its flavours, fixed length codes, and the whole CAVLC residual family,
//! bit-exact against the tables in Rec. ITU-T H.264.
//!
//! What it deliberately does not do: NAL framing, slice and macroblock
//! state, CABAC, or any judgement about whether a decoded value makes
//! sense. Those belong to the layers above, this crate only promises that
//! the bits were read exactly where the standard says they are.
#[macro_use]
extern crate log;

pub use crate::bitstream::BitStream;
pub use crate::errors::DecodeErrors;

pub mod bitstream;
pub mod cavlc;
pub mod errors;
pub mod syntax;
mod tables;
