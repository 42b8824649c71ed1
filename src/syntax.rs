//! Syntax element reading, the `ue(v)`/`se(v)`/`u(v)`/`u(1)` entry points
//! and the rules that turn a raw `(len, info)` pair into decoded values.
//!
//! The extraction of a codeword and the meaning of a codeword are kept
//! separate on purpose. [`BitStream::get_vlc_symbol`] only knows how wide
//! the codeword is, a [`Mapping`] only knows arithmetic, and
//! [`SyntaxElement`] glues one of each together for a single decode.
use std::cmp::max;

use crate::bitstream::BitStream;
use crate::errors::DecodeErrors;
use crate::tables::{LEVRUN1, LEVRUN3, NCBP, NTAB1, NTAB3};

/// Rules mapping a raw Exp-Golomb `(len, info)` pair to semantic values.
///
/// `len` must be the full codeword width as returned by
/// [`BitStream::get_vlc_symbol`] and `info` the raw info word, so
/// `info < 2^(len / 2)`. Feeding a pair that no codeword can produce is a
/// caller bug.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mapping {
    /// Unsigned direct mapping, `value = 2^(len/2) + info - 1`
    Ue,
    /// Signed mapping, the sign rides in the parity of the unsigned value
    Se,
    /// Coded block pattern for intra coded macroblocks
    CbpIntra,
    /// Coded block pattern for inter coded macroblocks
    CbpInter,
    /// Level/run pair for 4x4 residual blocks
    LevRunInter,
    /// Level/run pair for 2x2 chroma DC blocks
    LevRunChromaDc,
}

impl Mapping {
    /// Apply the rule, producing `(value1, value2)`.
    ///
    /// For the scalar rules `value2` is zero. For the level/run rules
    /// `value1` is the signed level and `value2` the run. A coded block
    /// pattern index past the table is stream corruption and comes back as
    /// [`DecodeErrors::CodeNotFound`].
    pub fn map(self, len: usize, info: u32) -> Result<(i32, i32), DecodeErrors> {
        debug_assert!(
            u64::from(info) < (1_u64 << (len / 2)),
            "info word wider than the codeword allows"
        );

        match self {
            Mapping::Ue => Ok((linfo_ue(len, info) as i32, 0)),
            Mapping::Se => Ok((linfo_se(len, info), 0)),
            Mapping::CbpIntra => Ok((cbp_from_index(len, info, 0)?, 0)),
            Mapping::CbpInter => Ok((cbp_from_index(len, info, 1)?, 0)),
            Mapping::LevRunInter => Ok(linfo_levrun_inter(len, info)),
            Mapping::LevRunChromaDc => Ok(linfo_levrun_c2x2(len, info)),
        }
    }
}

/// `ue(v)` arithmetic. `len` is odd for every real codeword, so the
/// truncating division gives the prefix length exactly.
fn linfo_ue(len: usize, info: u32) -> u32 {
    (1_u32 << (len / 2)) + info - 1
}

/// `se(v)` arithmetic, the lsb of the unsigned value is the sign.
fn linfo_se(len: usize, info: u32) -> i32 {
    let n = linfo_ue(len, info);
    let value = ((n + 1) / 2) as i32;

    if n & 1 == 0 {
        -value
    } else {
        value
    }
}

/// Decode a ue index and translate it through the CBP table column.
fn cbp_from_index(len: usize, info: u32, column: usize) -> Result<i32, DecodeErrors> {
    let cbp_idx = linfo_ue(len, info) as usize;

    if cbp_idx >= NCBP.len() {
        return Err(DecodeErrors::CodeNotFound("coded_block_pattern"));
    }

    Ok(i32::from(NCBP[cbp_idx][column]))
}

/// Level/run rule for 4x4 residual blocks.
///
/// Codewords of 9 bits or less go through the small lookup table, wider
/// ones are computed. The sign of the level is the lsb of `info`, and a
/// codeword of length 1 is the end-of-block marker, forced to level 0.
fn linfo_levrun_inter(len: usize, info: u32) -> (i32, i32) {
    let mut level;
    let run;

    if len <= 9 {
        let l2 = max(0, (len as i32) / 2 - 1) as usize;
        let inf = (info / 2) as usize;

        level = i32::from(NTAB1[l2][inf][0]);
        run = i32::from(NTAB1[l2][inf][1]);
    } else {
        // past the table, split info into run and level offset
        let irun = ((info & 0x1e) >> 1) as usize;

        run = irun as i32;
        level = i32::from(LEVRUN1[irun]) + (info / 32) as i32 + (1 << (len / 2 - 5));
    }

    if info & 1 == 1 {
        level = -level;
    }
    if len == 1 {
        // EOB
        level = 0;
    }

    (level, run)
}

/// Level/run rule for 2x2 chroma DC blocks, same shape as the 4x4 rule
/// with the thresholds pulled in.
fn linfo_levrun_c2x2(len: usize, info: u32) -> (i32, i32) {
    let mut level;
    let run;

    if len <= 5 {
        let l2 = max(0, (len as i32) / 2 - 1) as usize;
        let inf = (info / 2) as usize;

        level = i32::from(NTAB3[l2][inf][0]);
        run = i32::from(NTAB3[l2][inf][1]);
    } else {
        let irun = ((info & 0x06) >> 1) as usize;

        run = irun as i32;
        level = i32::from(LEVRUN3[irun]) + (info / 8) as i32 + (1 << (len / 2 - 3));
    }

    if info & 1 == 1 {
        level = -level;
    }
    if len == 1 {
        // EOB
        level = 0;
    }

    (level, run)
}

/// The result of decoding one syntax element.
///
/// Lives for a single decode. `len` is the exact number of bits the decode
/// consumed, `inf` the raw bits, `value1`/`value2` whatever the mapping
/// made of them.
pub struct SyntaxElement {
    pub len: usize,
    pub inf: u32,
    pub value1: i32,
    pub value2: i32,
    pub mapping: Mapping,
}

impl SyntaxElement {
    pub const fn new(mapping: Mapping) -> SyntaxElement {
        SyntaxElement {
            len: 0,
            inf: 0,
            value1: 0,
            value2: 0,
            mapping,
        }
    }

    /// Read one Exp-Golomb codeword and run it through this element's
    /// mapping. The stream advances by exactly `self.len`.
    pub fn read_vlc(&mut self, stream: &mut BitStream) -> Result<(), DecodeErrors> {
        let (len, inf) = stream.get_vlc_symbol()?;

        self.len = len;
        self.inf = inf;

        let (value1, value2) = self.mapping.map(len, inf)?;

        self.value1 = value1;
        self.value2 = value2;

        Ok(())
    }

    /// Read `len` bits as a fixed length code. No mapping is applied, the
    /// raw bits are the value.
    pub fn read_flc(&mut self, len: usize, stream: &mut BitStream) -> Result<(), DecodeErrors> {
        assert!(len <= 32, "fixed length codes are at most 32 bits");

        self.inf = stream.get_bits(len)?;
        self.len = len;
        self.value1 = self.inf as i32;
        self.value2 = 0;

        Ok(())
    }
}

/// Read an `ue(v)` element, bump the stream's bits-consumed counter and
/// return the decoded value. `tag` only labels the trace line.
pub fn ue_v(tag: &str, stream: &mut BitStream) -> Result<u32, DecodeErrors> {
    let mut sym = SyntaxElement::new(Mapping::Ue);

    sym.read_vlc(stream)?;
    stream.add_used_bits(sym.len);

    trace!("{}: len={} info={} value={}", tag, sym.len, sym.inf, sym.value1);

    Ok(sym.value1 as u32)
}

/// Read an `se(v)` element, bump the stream's bits-consumed counter and
/// return the decoded signed value.
pub fn se_v(tag: &str, stream: &mut BitStream) -> Result<i32, DecodeErrors> {
    let mut sym = SyntaxElement::new(Mapping::Se);

    sym.read_vlc(stream)?;
    stream.add_used_bits(sym.len);

    trace!("{}: len={} info={} value={}", tag, sym.len, sym.inf, sym.value1);

    Ok(sym.value1)
}

/// Read `len` bits as an unsigned `u(v)` element and bump the stream's
/// bits-consumed counter.
pub fn u_v(len: usize, tag: &str, stream: &mut BitStream) -> Result<u32, DecodeErrors> {
    let mut sym = SyntaxElement::new(Mapping::Ue);

    sym.read_flc(len, stream)?;
    stream.add_used_bits(sym.len);

    trace!("{}: len={} info={} value={}", tag, sym.len, sym.inf, sym.value1);

    Ok(sym.inf)
}

/// Read a single `u(1)` flag bit.
pub fn u_1(tag: &str, stream: &mut BitStream) -> Result<u32, DecodeErrors> {
    u_v(1, tag, stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ue_shortest_and_next_codeword() {
        // 1 010 00000 -> ue 0 then ue 1
        let data = [0xa0];
        let mut stream = BitStream::new(&data);

        assert_eq!(ue_v("t", &mut stream).unwrap(), 0);
        assert_eq!(stream.bit_offset(), 1);
        assert_eq!(ue_v("t", &mut stream).unwrap(), 1);
        assert_eq!(stream.bit_offset(), 4);
        assert_eq!(stream.used_bits(), 4);
    }

    #[test]
    fn ue_codeword_with_set_info_bit() {
        // 1 011 0000 -> ue 0 then ue 2
        let data = [0xb0];
        let mut stream = BitStream::new(&data);

        assert_eq!(ue_v("t", &mut stream).unwrap(), 0);
        assert_eq!(ue_v("t", &mut stream).unwrap(), 2);
    }

    #[test]
    fn ue_longer_codewords() {
        // 00100 starts the byte -> ue 3
        let data = [0b0010_0110];
        let mut stream = BitStream::new(&data);

        assert_eq!(ue_v("t", &mut stream).unwrap(), 3);
        assert_eq!(stream.bit_offset(), 5);

        // 00011110 -> ue 14
        let data = [0b0001_1110];
        let mut stream = BitStream::new(&data);
        assert_eq!(ue_v("t", &mut stream).unwrap(), 14);
    }

    #[test]
    fn se_sign_alternation() {
        // codeNum 0..4 -> 0, 1, -1, 2, -2
        let cases: [(&[u8], i32); 5] = [
            (&[0b1000_0000], 0),
            (&[0b0100_0000], 1),
            (&[0b0110_0000], -1),
            (&[0b0010_0000], 2),
            (&[0b0010_1000], -2),
        ];

        for (data, expected) in cases {
            let mut stream = BitStream::new(data);
            assert_eq!(se_v("t", &mut stream).unwrap(), expected);
        }
    }

    #[test]
    fn se_pair_from_one_buffer() {
        // 010 1 0000 -> se 1 then se 0
        let data = [0x50, 0x00];
        let mut stream = BitStream::new(&data);

        assert_eq!(se_v("t", &mut stream).unwrap(), 1);
        assert_eq!(stream.bit_offset(), 3);
        assert_eq!(se_v("t", &mut stream).unwrap(), 0);

        // 00110 000 -> se 3
        let data = [0x30];
        let mut stream = BitStream::new(&data);
        assert_eq!(se_v("t", &mut stream).unwrap(), 3);
    }

    #[test]
    fn flc_reads_raw_bits() {
        let data = [0xde, 0xad];
        let mut stream = BitStream::new(&data);

        assert_eq!(u_v(16, "t", &mut stream).unwrap(), 0xdead);
        assert_eq!(stream.used_bits(), 16);

        let data = [0b1010_0000];
        let mut stream = BitStream::new(&data);
        assert_eq!(u_1("t", &mut stream).unwrap(), 1);
        assert_eq!(u_1("t", &mut stream).unwrap(), 0);
        assert_eq!(u_1("t", &mut stream).unwrap(), 1);
        assert_eq!(stream.used_bits(), 3);
    }

    #[test]
    fn cbp_translates_through_the_table() {
        // codeNum 0 -> intra 47, inter 0
        assert_eq!(Mapping::CbpIntra.map(1, 0).unwrap(), (47, 0));
        assert_eq!(Mapping::CbpInter.map(1, 0).unwrap(), (0, 0));
        // codeNum 2 -> intra 15, inter 1
        assert_eq!(Mapping::CbpIntra.map(3, 1).unwrap(), (15, 0));
        assert_eq!(Mapping::CbpInter.map(3, 1).unwrap(), (1, 0));
    }

    #[test]
    fn cbp_index_past_the_table_is_an_error() {
        // codeNum 48 -> len 11, info 17
        assert!(matches!(
            Mapping::CbpIntra.map(11, 17),
            Err(DecodeErrors::CodeNotFound("coded_block_pattern"))
        ));
    }

    #[test]
    fn levrun_eob_is_level_zero() {
        assert_eq!(Mapping::LevRunInter.map(1, 0).unwrap(), (0, 0));
        assert_eq!(Mapping::LevRunChromaDc.map(1, 0).unwrap(), (0, 0));
    }

    #[test]
    fn levrun_table_region() {
        // len 3, info 0 -> level 1, run 0; the lsb flips the sign
        assert_eq!(Mapping::LevRunInter.map(3, 0).unwrap(), (1, 0));
        assert_eq!(Mapping::LevRunInter.map(3, 1).unwrap(), (-1, 0));
        // len 9, info 14 -> NTAB1[3][7] = (4, 0)
        assert_eq!(Mapping::LevRunInter.map(9, 14).unwrap(), (4, 0));
        assert_eq!(Mapping::LevRunInter.map(9, 15).unwrap(), (-4, 0));
        // len 5, info 2 -> NTAB1[1][1] = (1, 2)
        assert_eq!(Mapping::LevRunInter.map(5, 2).unwrap(), (1, 2));
    }

    #[test]
    fn levrun_computed_region() {
        // len 11, info 3 -> run 1, level LEVRUN1[1] + 0 + 2^0 = 3, negative
        assert_eq!(Mapping::LevRunInter.map(11, 3).unwrap(), (-3, 1));
        // len 11, info 2 -> same magnitude, positive
        assert_eq!(Mapping::LevRunInter.map(11, 2).unwrap(), (3, 1));
    }

    #[test]
    fn levrun_chroma_dc_regions() {
        // len 5, info 2 -> NTAB3[1][1] = (1, 1)
        assert_eq!(Mapping::LevRunChromaDc.map(5, 2).unwrap(), (1, 1));
        // len 7, info 2 -> run 1, level LEVRUN3[1] + 0 + 2^0 = 2
        assert_eq!(Mapping::LevRunChromaDc.map(7, 2).unwrap(), (2, 1));
        assert_eq!(Mapping::LevRunChromaDc.map(7, 3).unwrap(), (-2, 1));
    }

    #[test]
    fn failed_reads_leave_used_bits_alone() {
        let data = [0x00];
        let mut stream = BitStream::new(&data);

        assert!(ue_v("t", &mut stream).is_err());
        assert_eq!(stream.used_bits(), 0);
        assert_eq!(stream.bit_offset(), 0);
    }
}
