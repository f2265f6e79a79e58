use rgbapack_core::container::{decode_container, encode_container};
use rgbapack_core::sample::SplitMix64;
use rgbapack_core::{decode, encode, Rgba, SeedLayout, SeedPlane, DEFAULT_EPSILON};

#[test]
fn default_plane_holds_a_quarter_of_the_pixels_per_axis() {
    let layout = SeedLayout::default();
    assert_eq!(layout.quadrant(), (128, 128));
    assert_eq!(layout.capacity(), 128 * 128);
}

#[test]
fn filled_plane_keeps_bottom_half_opaque_black() {
    let layout = SeedLayout {
        width: 16,
        height: 8,
    };
    let mut plane = SeedPlane::new(layout).unwrap();
    plane.fill_with(&mut SplitMix64::new(7));

    for y in 4..8 {
        for x in 0..16 {
            assert_eq!(plane.pixel(x, y).unwrap(), Rgba::OPAQUE_BLACK);
        }
    }
}

#[test]
fn seeds_are_the_quantized_sampler_stream() {
    let layout = SeedLayout {
        width: 16,
        height: 8,
    };
    let mut plane = SeedPlane::new(layout).unwrap();
    plane.fill_with(&mut SplitMix64::new(42));

    let mut rng = SplitMix64::new(42);
    let q = rgbapack_core::codec::quantum();
    for seed in plane.seeds() {
        let x = rng.next_unit();
        let y = rng.next_unit();
        assert_eq!(seed.x, decode(encode(x)));
        assert_eq!(seed.y, decode(encode(y)));
        assert!(x - seed.x < q + DEFAULT_EPSILON);
    }
}

#[test]
fn fill_is_deterministic_and_survives_container() {
    let layout = SeedLayout {
        width: 32,
        height: 32,
    };
    let mut a = SeedPlane::new(layout).unwrap();
    let mut b = SeedPlane::new(layout).unwrap();
    a.fill_with(&mut SplitMix64::new(0xD1CE));
    b.fill_with(&mut SplitMix64::new(0xD1CE));
    assert_eq!(a, b);

    let bytes = encode_container(&a);
    assert_eq!(bytes, encode_container(&b));
    let back = decode_container(&bytes).unwrap();
    assert_eq!(back.seeds(), a.seeds());
}
