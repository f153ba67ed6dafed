use fpmap_core::mode::{Variant, VideoGeometry, VideoMode};
use fpmap_core::{pattern, Camera, PixelMap};

#[test]
fn same_inputs_same_map() {
    let geom = VideoGeometry {
        width: 1808,
        height: 727,
        crop: 0,
    };

    let mut a = PixelMap::new();
    pattern::generate(&mut a, Camera::Eosm, VideoMode::Mv720, Variant::Legacy, &geom);
    let mut b = PixelMap::new();
    pattern::generate(&mut b, Camera::Eosm, VideoMode::Mv720, Variant::Legacy, &geom);

    assert_eq!(a.pixels(), b.pixels());
    assert_eq!(a.pass_bounds(), b.pass_bounds());
}

#[test]
fn unified_zoom_same_inputs_same_map() {
    let geom = VideoGeometry {
        width: 2592,
        height: 1332,
        crop: 0,
    };

    let mut a = PixelMap::new();
    pattern::generate(&mut a, Camera::Eos100d, VideoMode::Zoom, Variant::Unified, &geom);
    let mut b = PixelMap::new();
    pattern::generate(&mut b, Camera::Eos100d, VideoMode::Zoom, Variant::Unified, &geom);

    assert_eq!(a.pixels(), b.pixels());
    assert_eq!(a.pass_bounds(), b.pass_bounds());
}
