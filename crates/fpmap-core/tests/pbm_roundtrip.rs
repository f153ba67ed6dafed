use std::fs;

use fpmap_core::format::{self, MapMeta, MetaOverrides, SaveOptions};
use fpmap_core::mode::{mode_from_keyword, Variant};
use fpmap_core::{pattern, Camera, PixelCoord, PixelMap};

fn sorted(pixels: &[PixelCoord]) -> Vec<(u32, u32)> {
    let mut v: Vec<(u32, u32)> = pixels.iter().map(|p| (p.y, p.x)).collect();
    v.sort_unstable();
    v
}

#[test]
fn single_pass_bitmap_roundtrip_preserves_the_pixel_set() {
    let dir = tempfile::tempdir().unwrap();
    let (mode, geom) = mode_from_keyword("mv720").unwrap();
    let mut map = PixelMap::new();
    pattern::generate(&mut map, Camera::Eosm, mode, Variant::Legacy, &geom);

    let meta = MapMeta {
        model: 0x8000_0331,
        width: geom.width,
        height: geom.height,
        crop: geom.crop,
    };
    let path = dir.path().join("out.pbm").to_str().unwrap().to_string();
    format::save(&map, &meta, &path, &SaveOptions::default()).unwrap();

    let loaded = format::load(&[path], &MetaOverrides::default()).unwrap();
    // Bitmap decode is row-major; compare as sets.
    assert_eq!(sorted(loaded.map.pixels()), sorted(map.pixels()));
    assert_eq!(loaded.map.pass_count(), 1);
    assert_eq!(loaded.meta, meta);
}

#[test]
fn invalid_comment_model_falls_back_to_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("80000331_1808x727.pbm")
        .to_str()
        .unwrap()
        .to_string();

    // Comment-shaped line whose model fails the 0x8000 sentinel check.
    let mut bytes = b"P4\n# 12345678 1 -- something\n16 8\n".to_vec();
    let mut img = vec![0u8; 2 * 8];
    img[0] = 0x80; // pixel (0, 0)
    img[3] = 0x01; // pixel (15, 1)
    bytes.extend_from_slice(&img);
    fs::write(&path, bytes).unwrap();

    let loaded = format::load(&[path], &MetaOverrides::default()).unwrap();
    assert_eq!(loaded.meta.model, 0x8000_0331);
    // Resolution still comes from the in-band header, not the name.
    assert_eq!((loaded.meta.width, loaded.meta.height), (16, 8));
    assert_eq!(sorted(loaded.map.pixels()), vec![(0, 0), (1, 15)]);
}

#[test]
fn bare_header_without_comment_uses_filename_camera() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("80000346_16x2.pbm")
        .to_str()
        .unwrap()
        .to_string();

    let mut bytes = b"P4\n16 2\n".to_vec();
    bytes.extend_from_slice(&[0x01, 0x00, 0x00, 0x80]);
    fs::write(&path, bytes).unwrap();

    let loaded = format::load(&[path], &MetaOverrides::default()).unwrap();
    assert_eq!(loaded.meta.model, 0x8000_0346);
    assert_eq!(sorted(loaded.map.pixels()), vec![(0, 7), (1, 8)]);
}

#[test]
fn bare_header_without_any_camera_source_is_unresolvable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.pbm").to_str().unwrap().to_string();

    let mut bytes = b"P4\n8 1\n".to_vec();
    bytes.push(0x00);
    fs::write(&path, bytes).unwrap();

    let err = format::load(&[path], &MetaOverrides::default()).unwrap_err();
    assert!(matches!(err, fpmap_core::FpmError::MapUnresolvable(_)));
}

#[test]
fn each_bitmap_input_becomes_one_pass() {
    let dir = tempfile::tempdir().unwrap();
    let meta = MapMeta {
        model: 0x8000_0331,
        width: 16,
        height: 4,
        crop: 0,
    };

    let mut paths = Vec::new();
    for (i, y) in [0u32, 1, 2].iter().enumerate() {
        let mut map = PixelMap::new();
        map.push(3, *y);
        map.push(9, *y);
        map.end_pass();
        let path = dir
            .path()
            .join(format!("part{i}.pbm"))
            .to_str()
            .unwrap()
            .to_string();
        format::save(&map, &meta, &path, &SaveOptions::default()).unwrap();
        paths.push(path);
    }

    let loaded = format::load(&paths, &MetaOverrides::default()).unwrap();
    assert_eq!(loaded.map.pass_count(), 3);
    assert_eq!(loaded.map.len(), 6);
    assert!(loaded.map.invariants_hold());
    for pass in 0..3 {
        assert_eq!(
            sorted(loaded.map.pass_pixels(pass)),
            vec![(pass as u32, 3), (pass as u32, 9)]
        );
    }
}
