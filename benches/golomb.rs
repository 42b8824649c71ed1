use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use zune_h264::cavlc::read_coeff_token;
use zune_h264::syntax::ue_v;
use zune_h264::BitStream;

/// Pack `count` consecutive ue(v) codewords for the values 0..count.
fn build_golomb_buffer(count: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut pos = 0_usize;

    let mut push_bit = |bytes: &mut Vec<u8>, bit: u32| {
        if pos % 8 == 0 {
            bytes.push(0);
        }
        if bit == 1 {
            let byte = bytes.last_mut().unwrap();
            *byte |= 1 << (7 - (pos % 8));
        }
        pos += 1;
    };

    for value in 0..count {
        let code_num = value + 1;
        let width = 32 - code_num.leading_zeros() as usize;

        for _ in 0..width - 1 {
            push_bit(&mut bytes, 0);
        }
        for k in (0..width).rev() {
            push_bit(&mut bytes, (code_num >> k) & 1);
        }
    }
    // pad out the final byte
    bytes.push(0);
    bytes
}

fn decode_ue(buf: &[u8], count: u32) -> u64 {
    let mut stream = BitStream::new(buf);
    let mut acc = 0_u64;

    for _ in 0..count {
        acc += u64::from(ue_v("bench", &mut stream).unwrap());
    }
    acc
}

fn decode_coeff_tokens(buf: &[u8], count: u32) -> u64 {
    let mut stream = BitStream::new(buf);
    let mut acc = 0_u64;

    for _ in 0..count {
        let (num_coeff, trailing_ones) = read_coeff_token(&mut stream, 0).unwrap();
        acc += u64::from(num_coeff) + u64::from(trailing_ones);
    }
    acc
}

fn criterion_benchmark(c: &mut Criterion) {
    const COUNT: u32 = 4096;

    let golomb = build_golomb_buffer(COUNT);

    c.bench_function("Exp-Golomb ue(v) decoding", |b| {
        b.iter(|| black_box(decode_ue(golomb.as_slice(), COUNT)))
    });

    // the single-bit "no coefficients" token back to back, the hot case in
    // flat regions of a frame
    let tokens = vec![0xff_u8; 512];

    c.bench_function("CAVLC coeff_token decoding", |b| {
        b.iter(|| black_box(decode_coeff_tokens(tokens.as_slice(), 4096)))
    });
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=criterion_benchmark);
criterion_main!(benches);
