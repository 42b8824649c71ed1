//! The CAVLC side of residual decoding: coeff_token, total_zeros,
//! run_before, the two level codes and the 4x4 intra prediction mode code.
//!
//! Apart from the level codes, everything here is "peek bits, walk a static
//! table, first match wins". The tables live in [`crate::tables`] and the
//! walk order is part of the contract: rows ascending, columns ascending,
//! because some codewords share prefixes with reserved holes and the first
//! real match disambiguates.
//!
//! A table miss means the stream is corrupt or not CAVLC at all. There is
//! no way to resynchronize in the middle of a symbol, so we hand the error
//! up and let the NAL layer decide what to salvage.
use crate::bitstream::{BitStream, MAX_CODE_PREFIX};
use crate::errors::DecodeErrors;
use crate::tables::{
    COEFF_TOKEN_CHROMA_DC_CODE, COEFF_TOKEN_CHROMA_DC_LEN, COEFF_TOKEN_CODE, COEFF_TOKEN_LEN,
    RUN_BEFORE_CODE, RUN_BEFORE_LEN, TOTAL_ZEROS_CHROMA_DC_CODE, TOTAL_ZEROS_CHROMA_DC_LEN,
    TOTAL_ZEROS_CODE, TOTAL_ZEROS_LEN,
};

/// Find the shortest table entry matching the bits under the cursor.
///
/// `lentab` and `codtab` are parallel, entries with a zero length are
/// reserved holes and skipped. On a match the stream advances by the
/// matched length and `(column, row)` comes back as `(value1, value2)`.
///
/// A peek that would cross the end of the buffer does not abort the scan,
/// shorter entries may still match. Only when nothing matched do we decide
/// between [`DecodeErrors::ExhaustedData`] (some candidate ran off the end)
/// and [`DecodeErrors::CodeNotFound`] (the bits are simply not in the
/// table).
fn code_from_bitstream_2d<const W: usize>(
    stream: &mut BitStream, lentab: &[[u8; W]], codtab: &[[u8; W]], name: &'static str,
) -> Result<(usize, usize), DecodeErrors> {
    let mut exhausted = false;

    for (j, (lens, codes)) in lentab.iter().zip(codtab.iter()).enumerate() {
        for i in 0..W {
            let len = usize::from(lens[i]);

            if len == 0 {
                // reserved hole
                continue;
            }

            match stream.show_bits(len) {
                Ok(bits) if bits == u32::from(codes[i]) => {
                    stream.advance(len);

                    return Ok((i, j));
                }
                Ok(_) => {}
                Err(DecodeErrors::ExhaustedData) => exhausted = true,
                Err(other) => return Err(other),
            }
        }
    }

    if exhausted {
        return Err(DecodeErrors::ExhaustedData);
    }

    error!("failed to find a {} codeword", name);

    Err(DecodeErrors::CodeNotFound(name))
}

/// Read a luma coeff_token, returning `(numCoeff, trailingOnes)`.
///
/// `vlcnum` is the table selector the slice decoder derives from the
/// neighbouring coefficient counts, 0..=2 pick a table, 3 switches to the
/// flat 6 bit code. Anything else is a caller bug.
pub fn read_coeff_token(
    stream: &mut BitStream, vlcnum: usize,
) -> Result<(u32, u32), DecodeErrors> {
    assert!(vlcnum <= 3, "coeff_token selector out of range: {}", vlcnum);

    if vlcnum == 3 {
        let code = stream.get_bits(6)?;

        let mut num_coeff = code >> 2;
        let mut trailing_ones = code & 3;

        if num_coeff == 0 && trailing_ones == 3 {
            // the (0, 3) pattern encodes an empty block
            trailing_ones = 0;
        } else {
            num_coeff += 1;
        }

        trace!(
            "coeff_token: vlc={} #c={} #t1={}",
            vlcnum, num_coeff, trailing_ones
        );

        return Ok((num_coeff, trailing_ones));
    }

    let (num_coeff, trailing_ones) = code_from_bitstream_2d(
        stream,
        &COEFF_TOKEN_LEN[vlcnum],
        &COEFF_TOKEN_CODE[vlcnum],
        "coeff_token",
    )?;

    trace!(
        "coeff_token: vlc={} #c={} #t1={}",
        vlcnum, num_coeff, trailing_ones
    );

    Ok((num_coeff as u32, trailing_ones as u32))
}

/// Read a chroma DC coeff_token, returning `(numCoeff, trailingOnes)`.
pub fn read_coeff_token_chroma_dc(stream: &mut BitStream) -> Result<(u32, u32), DecodeErrors> {
    let (num_coeff, trailing_ones) = code_from_bitstream_2d(
        stream,
        &COEFF_TOKEN_CHROMA_DC_LEN,
        &COEFF_TOKEN_CHROMA_DC_CODE,
        "coeff_token chroma DC",
    )?;

    Ok((num_coeff as u32, trailing_ones as u32))
}

/// Read a total_zeros value for a luma block.
///
/// `vlcnum` is `numCoeff - 1`, in 0..=14.
pub fn read_total_zeros(stream: &mut BitStream, vlcnum: usize) -> Result<u32, DecodeErrors> {
    assert!(vlcnum < 15, "total_zeros selector out of range: {}", vlcnum);

    let (total_zeros, _) = code_from_bitstream_2d(
        stream,
        std::slice::from_ref(&TOTAL_ZEROS_LEN[vlcnum]),
        std::slice::from_ref(&TOTAL_ZEROS_CODE[vlcnum]),
        "total_zeros",
    )?;

    Ok(total_zeros as u32)
}

/// Read a total_zeros value for a 2x2 chroma DC block.
///
/// `vlcnum` is `numCoeff - 1`, in 0..=2.
pub fn read_total_zeros_chroma_dc(
    stream: &mut BitStream, vlcnum: usize,
) -> Result<u32, DecodeErrors> {
    assert!(
        vlcnum < 3,
        "total_zeros chroma DC selector out of range: {}",
        vlcnum
    );

    let (total_zeros, _) = code_from_bitstream_2d(
        stream,
        std::slice::from_ref(&TOTAL_ZEROS_CHROMA_DC_LEN[vlcnum]),
        std::slice::from_ref(&TOTAL_ZEROS_CHROMA_DC_CODE[vlcnum]),
        "total_zeros chroma DC",
    )?;

    Ok(total_zeros as u32)
}

/// Read a run_before value.
///
/// `vlcnum` is `min(zeros_left - 1, 6)`, computed by the caller from the
/// zeros still unaccounted for. Row 6 is shared by every `zeros_left`
/// above 6.
pub fn read_run_before(stream: &mut BitStream, vlcnum: usize) -> Result<u32, DecodeErrors> {
    assert!(vlcnum <= 6, "run_before selector out of range: {}", vlcnum);

    let (run, _) = code_from_bitstream_2d(
        stream,
        std::slice::from_ref(&RUN_BEFORE_LEN[vlcnum]),
        std::slice::from_ref(&RUN_BEFORE_CODE[vlcnum]),
        "run_before",
    )?;

    Ok(run as u32)
}

/// Read a coefficient level with the VLC0 code, used while the running
/// suffix length is still zero.
///
/// The codeword is a unary prefix with two escape widths. A prefix past 16
/// cannot be produced by any encoder and is reported as malformed.
pub fn read_level_vlc0(stream: &mut BitStream) -> Result<i32, DecodeErrors> {
    let mut zeros = 0;

    while stream.show_bits_offset(zeros, 1)? == 0 {
        zeros += 1;

        if zeros > 15 {
            return Err(DecodeErrors::PrefixTooLong(format!(
                "level VLC0 prefix of {} zeros",
                zeros
            )));
        }
    }

    let mut len = zeros + 1;
    let sign;
    let mut level;

    if len < 15 {
        sign = (len - 1) & 1;
        level = ((len - 1) / 2 + 1) as i32;
    } else if len == 15 {
        // first escape, 4 extra bits
        let bits = stream.show_bits_offset(len, 4)?;

        len += 4;
        sign = (bits & 1) as usize;
        level = (((bits >> 1) & 0x7) + 8) as i32;
    } else {
        // second escape, 12 extra bits
        let bits = stream.show_bits_offset(len, 12)?;

        len += 12;
        sign = (bits & 1) as usize;
        level = (((bits >> 1) & 0x7ff) + 16) as i32;
    }

    if sign == 1 {
        level = -level;
    }

    stream.advance(len);

    Ok(level)
}

/// Read a coefficient level with the VLCN code for suffix selector
/// `vlc >= 1`.
///
/// The suffix length is `vlc - 1`, prefixes of 15 or more switch to the 11
/// bit escape. The zero prefix is capped, a run past the cap only occurs
/// in garbage input.
pub fn read_level_vlcn(stream: &mut BitStream, vlc: usize) -> Result<i32, DecodeErrors> {
    assert!(
        (1..=6).contains(&vlc),
        "level VLC selector out of range: {}",
        vlc
    );

    let shift = vlc - 1;
    let escape = (15 << shift) + 1;

    let mut num_prefix = 0;

    while stream.show_bits_offset(num_prefix, 1)? == 0 {
        num_prefix += 1;

        if num_prefix > MAX_CODE_PREFIX {
            return Err(DecodeErrors::PrefixTooLong(format!(
                "level VLCN prefix of {} zeros",
                num_prefix
            )));
        }
    }

    let mut len = num_prefix + 1;
    let mut level_abs;
    let sign;

    if num_prefix < 15 {
        level_abs = ((num_prefix << shift) + 1) as i32;

        if shift > 0 {
            let suffix = stream.show_bits_offset(len, shift)?;

            level_abs += suffix as i32;
            len += shift;
        }

        sign = stream.show_bits_offset(len, 1)?;
        len += 1;
    } else {
        // escape, the level rides in 11 bits past the prefix
        let suffix = stream.show_bits_offset(len, 11)?;

        level_abs = suffix as i32 + escape;
        len += 11;

        sign = stream.show_bits_offset(len, 1)?;
        len += 1;
    }

    stream.advance(len);

    if sign == 1 {
        level_abs = -level_abs;
    }

    Ok(level_abs)
}

/// Read a 4x4 intra prediction mode.
///
/// Returns -1 when the stream says "use the predicted mode", otherwise the
/// explicit mode in 0..=7.
pub fn read_intra4x4_pred_mode(stream: &mut BitStream) -> Result<i32, DecodeErrors> {
    let (len, info) = stream.get_vlc_symbol_intra_mode()?;

    let value = if len == 1 { -1 } else { info as i32 };

    trace!("intra4x4_pred_mode: len={} value={}", len, value);

    Ok(value)
}
