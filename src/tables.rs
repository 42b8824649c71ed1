//! Static VLC code tables.
//!
//! Every table in here is data straight out of Rec. ITU-T H.264,
//! reshaped only as far as giving each one an explicit `(row, column)`
//! layout. Zero entries in the length tables are reserved holes, the
//! matcher skips them. Do not "fix" anything here, a single wrong entry
//! desynchronizes every stream that touches it.

/// Level/run lookup for 4x4 residual codewords of width 9 bits or less.
///
/// Indexed by `[len / 2 - 1][info / 2]`, entry is `[level, run]`.
#[rustfmt::skip]
pub(crate) const NTAB1: [[[u8; 2]; 8]; 4] = [
    [[1, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0]],
    [[1, 1], [1, 2], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0], [0, 0]],
    [[2, 0], [1, 3], [1, 4], [1, 5], [0, 0], [0, 0], [0, 0], [0, 0]],
    [[3, 0], [2, 1], [2, 2], [1, 6], [1, 7], [1, 8], [1, 9], [4, 0]],
];

/// Base level per run for 4x4 codewords wider than 9 bits.
#[rustfmt::skip]
pub(crate) const LEVRUN1: [u8; 16] = [
    4, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0,
];

/// Level/run lookup for 2x2 chroma DC codewords of width 5 bits or less.
#[rustfmt::skip]
pub(crate) const NTAB3: [[[u8; 2]; 2]; 2] = [
    [[1, 0], [0, 0]],
    [[2, 0], [1, 1]],
];

/// Base level per run for 2x2 chroma DC codewords wider than 5 bits.
#[rustfmt::skip]
pub(crate) const LEVRUN3: [u8; 4] = [
    2, 1, 0, 0,
];

/// Coded block pattern for a decoded codeNum, column 0 intra, column 1
/// inter (Rec. ITU-T H.264 table 9-4).
#[rustfmt::skip]
pub(crate) const NCBP: [[u8; 2]; 48] = [
    [47,  0], [31, 16], [15,  1], [ 0,  2], [23,  4], [27,  8], [29, 32], [30,  3],
    [ 7,  5], [11, 10], [13, 12], [14, 15], [39, 47], [43,  7], [45, 11], [46, 13],
    [16, 14], [ 3,  6], [ 5,  9], [10, 31], [12, 35], [19, 37], [21, 42], [26, 44],
    [28, 33], [35, 34], [37, 36], [42, 40], [44, 39], [ 1, 43], [ 2, 45], [ 4, 46],
    [ 8, 17], [17, 18], [18, 20], [20, 24], [24, 19], [ 6, 21], [ 9, 26], [22, 28],
    [25, 23], [32, 27], [33, 29], [34, 30], [36, 22], [40, 25], [38, 38], [41, 41],
];

/// Codeword lengths for coeff_token, luma blocks, one 4x17 table per
/// selector 0..=2 (selector 3 is a flat 6 bit code, no table).
///
/// Rows are trailingOnes 0..=3, columns are numCoeff 0..=16.
#[rustfmt::skip]
pub(crate) const COEFF_TOKEN_LEN: [[[u8; 17]; 4]; 3] = [
    [
        [ 1,  6,  8,  9, 10, 11, 13, 13, 13, 14, 14, 15, 15, 16, 16, 16, 16],
        [ 0,  2,  6,  8,  9, 10, 11, 13, 13, 14, 14, 15, 15, 15, 16, 16, 16],
        [ 0,  0,  3,  7,  8,  9, 10, 11, 13, 13, 14, 14, 15, 15, 16, 16, 16],
        [ 0,  0,  0,  5,  6,  7,  8,  9, 10, 11, 13, 14, 14, 15, 15, 16, 16],
    ],
    [
        [ 2,  6,  6,  7,  8,  8,  9, 11, 11, 12, 12, 12, 13, 13, 13, 14, 14],
        [ 0,  2,  5,  6,  6,  7,  8,  9, 11, 11, 12, 12, 13, 13, 14, 14, 14],
        [ 0,  0,  3,  6,  6,  7,  8,  9, 11, 11, 12, 12, 13, 13, 13, 14, 14],
        [ 0,  0,  0,  4,  4,  5,  6,  6,  7,  9, 11, 11, 12, 13, 13, 13, 14],
    ],
    [
        [ 4,  6,  6,  6,  7,  7,  7,  7,  8,  8,  9,  9,  9, 10, 10, 10, 10],
        [ 0,  4,  5,  5,  5,  5,  6,  6,  7,  8,  8,  9,  9,  9, 10, 10, 10],
        [ 0,  0,  4,  5,  5,  5,  6,  6,  7,  7,  8,  8,  9,  9, 10, 10, 10],
        [ 0,  0,  0,  4,  4,  4,  4,  4,  5,  6,  7,  8,  8,  9, 10, 10, 10],
    ],
];

/// Codewords for coeff_token, luma blocks, parallel to [`COEFF_TOKEN_LEN`].
#[rustfmt::skip]
pub(crate) const COEFF_TOKEN_CODE: [[[u8; 17]; 4]; 3] = [
    [
        [ 1,  5,  7,  7,  7,  7, 15, 11,  8, 15, 11, 15, 11, 15, 11,  7,  4],
        [ 0,  1,  4,  6,  6,  6,  6, 14, 10, 14, 10, 14, 10,  1, 14, 10,  6],
        [ 0,  0,  1,  5,  5,  5,  5,  5, 13,  9, 13,  9, 13,  9, 13,  9,  5],
        [ 0,  0,  0,  3,  3,  4,  4,  4,  4,  4, 12, 12,  8, 12,  8, 12,  8],
    ],
    [
        [ 3, 11,  7,  7,  7,  4,  7, 15, 11, 15, 11,  8, 15, 11,  7,  9,  7],
        [ 0,  2,  7, 10,  6,  6,  6,  6, 14, 10, 14, 10, 14, 10, 11,  8,  6],
        [ 0,  0,  3,  9,  5,  5,  5,  5, 13,  9, 13,  9, 13,  9,  6, 10,  5],
        [ 0,  0,  0,  5,  4,  6,  8,  4,  4,  4, 12,  8, 12, 12,  8,  1,  4],
    ],
    [
        [15, 15, 11,  8, 15, 11,  9,  8, 15, 11, 15, 11,  8, 13,  9,  5,  1],
        [ 0, 14, 15, 12, 10,  8, 14, 10, 14, 14, 10, 14, 10,  7, 12,  8,  4],
        [ 0,  0, 13, 14, 11,  9, 13,  9, 13, 10, 13,  9, 13,  9, 11,  7,  3],
        [ 0,  0,  0, 12, 11, 10,  9,  8, 13, 12, 12, 12,  8, 12, 10,  6,  2],
    ],
];

/// Codeword lengths for coeff_token on 2x2 chroma DC blocks.
///
/// Rows are trailingOnes 0..=3, columns are numCoeff 0..=4.
#[rustfmt::skip]
pub(crate) const COEFF_TOKEN_CHROMA_DC_LEN: [[u8; 5]; 4] = [
    [2, 6, 6, 6, 6],
    [0, 1, 6, 7, 8],
    [0, 0, 3, 7, 8],
    [0, 0, 0, 6, 7],
];

/// Codewords for coeff_token on 2x2 chroma DC blocks.
#[rustfmt::skip]
pub(crate) const COEFF_TOKEN_CHROMA_DC_CODE: [[u8; 5]; 4] = [
    [1, 7, 4, 3, 2],
    [0, 1, 6, 3, 3],
    [0, 0, 1, 2, 2],
    [0, 0, 0, 5, 0],
];

/// Codeword lengths for total_zeros, one row per `numCoeff - 1` in 0..=14,
/// columns are the total_zeros value.
#[rustfmt::skip]
pub(crate) const TOTAL_ZEROS_LEN: [[u8; 16]; 15] = [
    [1, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 9],
    [3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 6, 6, 6, 6, 0],
    [4, 3, 3, 3, 4, 4, 3, 3, 4, 5, 5, 6, 5, 6, 0, 0],
    [5, 3, 4, 4, 3, 3, 3, 4, 3, 4, 5, 5, 5, 0, 0, 0],
    [4, 4, 4, 3, 3, 3, 3, 3, 4, 5, 4, 5, 0, 0, 0, 0],
    [6, 5, 3, 3, 3, 3, 3, 3, 4, 3, 6, 0, 0, 0, 0, 0],
    [6, 5, 3, 3, 3, 2, 3, 4, 3, 6, 0, 0, 0, 0, 0, 0],
    [6, 4, 5, 3, 2, 2, 3, 3, 6, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 4, 2, 2, 3, 2, 5, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 3, 2, 2, 2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 3, 3, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Codewords for total_zeros, parallel to [`TOTAL_ZEROS_LEN`].
#[rustfmt::skip]
pub(crate) const TOTAL_ZEROS_CODE: [[u8; 16]; 15] = [
    [1, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 3, 2, 1],
    [7, 6, 5, 4, 3, 5, 4, 3, 2, 3, 2, 3, 2, 1, 0, 0],
    [5, 7, 6, 5, 4, 3, 4, 3, 2, 3, 2, 1, 1, 0, 0, 0],
    [3, 7, 5, 4, 6, 5, 4, 3, 3, 2, 2, 1, 0, 0, 0, 0],
    [5, 4, 3, 7, 6, 5, 4, 3, 2, 1, 1, 0, 0, 0, 0, 0],
    [1, 1, 7, 6, 5, 4, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0],
    [1, 1, 5, 4, 3, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 3, 3, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 3, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 0, 1, 3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 2, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Codeword lengths for total_zeros on 2x2 chroma DC blocks, one row per
/// `numCoeff - 1` in 0..=2.
#[rustfmt::skip]
pub(crate) const TOTAL_ZEROS_CHROMA_DC_LEN: [[u8; 4]; 3] = [
    [1, 2, 3, 3],
    [1, 2, 2, 0],
    [1, 1, 0, 0],
];

/// Codewords for total_zeros on 2x2 chroma DC blocks.
#[rustfmt::skip]
pub(crate) const TOTAL_ZEROS_CHROMA_DC_CODE: [[u8; 4]; 3] = [
    [1, 1, 1, 0],
    [1, 1, 0, 0],
    [1, 0, 0, 0],
];

/// Codeword lengths for run_before, one row per `min(zerosLeft - 1, 6)`.
///
/// Row 6 carries the open-ended tail for 7 or more zeros left, the runs
/// past 6 take one extra leading zero each.
#[rustfmt::skip]
pub(crate) const RUN_BEFORE_LEN: [[u8; 16]; 7] = [
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [1, 2, 2, 0, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [2, 2, 2, 2, 0, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [2, 2, 2, 3, 3, 0, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [2, 2, 3, 3, 3, 3, 0, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [2, 3, 3, 3, 3, 3, 3, 0, 0, 0, 0,  0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 3, 4, 5, 6, 7,  8, 9, 10, 11, 0],
];

/// Codewords for run_before, parallel to [`RUN_BEFORE_LEN`].
#[rustfmt::skip]
pub(crate) const RUN_BEFORE_CODE: [[u8; 16]; 7] = [
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 2, 3, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 0, 1, 3, 2, 5, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [7, 6, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
];
