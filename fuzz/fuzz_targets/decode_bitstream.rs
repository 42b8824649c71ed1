#![no_main]
use libfuzzer_sys::fuzz_target;

use zune_h264::cavlc::{
    read_coeff_token, read_coeff_token_chroma_dc, read_intra4x4_pred_mode, read_level_vlc0,
    read_level_vlcn, read_run_before, read_total_zeros, read_total_zeros_chroma_dc,
};
use zune_h264::syntax::{se_v, u_v, ue_v, u_1};
use zune_h264::BitStream;

fuzz_target!(|data: &[u8]| {
    // every reader must either decode or return an error, a panic or a
    // cursor that outruns the buffer is a bug
    let mut stream = BitStream::new(data);

    while stream.more_rbsp_data() {
        if ue_v("fuzz", &mut stream).is_err() {
            break;
        }
        if se_v("fuzz", &mut stream).is_err() {
            break;
        }
        if u_v(5, "fuzz", &mut stream).is_err() {
            break;
        }
        if u_1("fuzz", &mut stream).is_err() {
            break;
        }
    }

    for vlcnum in 0..4 {
        let mut stream = BitStream::new(data);
        let _ = read_coeff_token(&mut stream, vlcnum);
    }

    let mut stream = BitStream::new(data);
    let _ = read_coeff_token_chroma_dc(&mut stream);

    for vlcnum in 0..15 {
        let mut stream = BitStream::new(data);
        let _ = read_total_zeros(&mut stream, vlcnum);
    }

    for vlcnum in 0..3 {
        let mut stream = BitStream::new(data);
        let _ = read_total_zeros_chroma_dc(&mut stream, vlcnum);
    }

    for vlcnum in 0..7 {
        let mut stream = BitStream::new(data);
        let _ = read_run_before(&mut stream, vlcnum);
    }

    let mut stream = BitStream::new(data);
    let _ = read_level_vlc0(&mut stream);

    for vlc in 1..7 {
        let mut stream = BitStream::new(data);
        let _ = read_level_vlcn(&mut stream, vlc);
    }

    let mut stream = BitStream::new(data);
    let _ = read_intra4x4_pred_mode(&mut stream);
});
