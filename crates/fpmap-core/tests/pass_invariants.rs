use fpmap_core::mode::{mode_from_keyword, Variant};
use fpmap_core::{pattern, Camera, PixelMap};

const CAMERAS: [Camera; 4] = [
    Camera::Eosm,
    Camera::Eos650d,
    Camera::Eos700d,
    Camera::Eos100d,
];

const MODES: [&str; 5] = ["mv720", "mv1080", "mv1080crop", "zoom", "croprec"];

#[test]
fn every_combination_generates_a_valid_map() {
    for camera in CAMERAS {
        for keyword in MODES {
            for variant in [Variant::Legacy, Variant::Unified] {
                let (mode, geom) = mode_from_keyword(keyword).unwrap();
                let mut map = PixelMap::new();
                pattern::generate(&mut map, camera, mode, variant, &geom);

                assert!(
                    map.invariants_hold(),
                    "bounds broken for {camera:?}/{keyword}/{variant:?}"
                );
                assert!(
                    !map.is_empty(),
                    "empty map for {camera:?}/{keyword}/{variant:?}"
                );
                for p in map.pixels() {
                    assert!(
                        p.x < geom.width && p.y < geom.height,
                        "out of bounds pixel ({}, {}) for {camera:?}/{keyword}/{variant:?}",
                        p.x,
                        p.y
                    );
                }
            }
        }
    }
}

#[test]
fn composite_modes_emit_expected_pass_counts() {
    let (mode, geom) = mode_from_keyword("croprec").unwrap();

    let expect = [
        (Camera::Eosm, 2),
        (Camera::Eos650d, 2),
        (Camera::Eos700d, 1),
        (Camera::Eos100d, 2),
    ];
    for (camera, passes) in expect {
        let mut map = PixelMap::new();
        pattern::generate(&mut map, camera, mode, Variant::Legacy, &geom);
        assert_eq!(map.pass_count(), passes, "croprec passes for {camera:?}");
    }
}

#[test]
fn unified_crop_modes_are_two_pass_and_zoom_is_one() {
    let (crop_mode, crop_geom) = mode_from_keyword("mv1080crop").unwrap();
    let mut map = PixelMap::new();
    pattern::generate(&mut map, Camera::Eosm, crop_mode, Variant::Unified, &crop_geom);
    assert_eq!(map.pass_count(), 2);

    // Two sweeps, but a single pass boundary.
    let (zoom_mode, zoom_geom) = mode_from_keyword("zoom").unwrap();
    let mut map = PixelMap::new();
    pattern::generate(&mut map, Camera::Eosm, zoom_mode, Variant::Unified, &zoom_geom);
    assert_eq!(map.pass_count(), 1);
}

#[test]
fn pass_boundaries_clamp_at_nine() {
    let mut map = PixelMap::new();
    for pass in 0..12u32 {
        map.push(pass, pass);
        map.end_pass();
    }
    assert_eq!(map.pass_count(), 9);
    assert!(map.invariants_hold());
    assert_eq!(*map.pass_bounds().last().unwrap(), 12);
}
