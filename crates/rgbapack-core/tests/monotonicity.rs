use rgbapack_core::sample::SplitMix64;
use rgbapack_core::{decode, encode, Channel, Rgba};

#[test]
fn decode_is_non_decreasing_per_channel() {
    let mut rng = SplitMix64::new(0xABCD);
    for _ in 0..200 {
        let base = Rgba::from_u32(rng.next_u64() as u32);
        for ch in Channel::ALL {
            let mut prev = decode(base.with_channel(ch, 0));
            for value in 1..=255u8 {
                let cur = decode(base.with_channel(ch, value));
                assert!(cur >= prev, "{ch} decreased at {value} for {base:?}");
                prev = cur;
            }
        }
    }
}

#[test]
fn encode_r_and_word_are_non_decreasing() {
    let mut prev = encode(0.0);
    for i in 1..=20_000u32 {
        let v = i as f64 / 20_000.0;
        let cur = encode(v);
        assert!(cur.r >= prev.r, "r decreased at v={v}");
        assert!(cur.to_u32() >= prev.to_u32(), "word decreased at v={v}");
        prev = cur;
    }
}

#[test]
fn every_quadruple_decodes_into_unit_interval() {
    // Sweep r fully with the lower digits at both extremes.
    for r in 0..=255u8 {
        for low in [0u8, 255] {
            let v = decode(Rgba::new(r, low, low, low));
            assert!((0.0..1.0).contains(&v), "r={r} low={low} v={v}");
        }
    }
}
