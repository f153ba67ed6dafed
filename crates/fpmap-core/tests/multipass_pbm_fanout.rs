use fpmap_core::format::{self, MapMeta, MetaOverrides, SaveOptions};
use fpmap_core::PixelMap;

fn three_pass_map() -> (PixelMap, MapMeta) {
    let mut map = PixelMap::new();
    map.push(1, 1);
    map.push(2, 2);
    map.end_pass();
    map.push(3, 1);
    map.end_pass();
    map.push(4, 0);
    map.push(5, 3);
    map.end_pass();

    let meta = MapMeta {
        model: 0x8000_0331,
        width: 16,
        height: 4,
        crop: 0,
    };
    (map, meta)
}

#[test]
fn multi_pass_map_fans_out_into_one_file_per_pass() {
    let dir = tempfile::tempdir().unwrap();
    let (map, meta) = three_pass_map();
    let target = dir.path().join("out.pbm").to_str().unwrap().to_string();

    let saved = format::save(&map, &meta, &target, &SaveOptions::default()).unwrap();

    assert_eq!(saved.len(), 3);
    assert!(!dir.path().join("out.pbm").exists());
    for (i, file) in saved.iter().enumerate() {
        assert_eq!(file.pass, Some(i + 1));
        assert!(file.path.ends_with(&format!(".pass{}.pbm", i + 1)));

        let loaded = format::load(
            &[file.path.clone()],
            &MetaOverrides {
                camera: Some(fpmap_core::Camera::Eosm),
                mode: None,
            },
        )
        .unwrap();
        let expected: Vec<(u32, u32)> = map.pass_pixels(i).iter().map(|p| (p.x, p.y)).collect();
        let mut got: Vec<(u32, u32)> = loaded.map.pixels().iter().map(|p| (p.x, p.y)).collect();
        got.sort_unstable();
        let mut expected = expected;
        expected.sort_unstable();
        assert_eq!(got, expected, "pass {} pixels", i + 1);
    }
}

#[test]
fn one_pass_pbm_collapses_everything_into_a_single_file() {
    let dir = tempfile::tempdir().unwrap();
    let (map, meta) = three_pass_map();
    let target = dir.path().join("out.pbm").to_str().unwrap().to_string();

    let opts = SaveOptions {
        one_pass_pbm: true,
        ..SaveOptions::default()
    };
    let saved = format::save(&map, &meta, &target, &opts).unwrap();

    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].pixel_count, map.len());
    assert!(dir.path().join("out.pbm").exists());
}

#[test]
fn single_pass_map_keeps_the_requested_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut map = PixelMap::new();
    map.push(0, 0);
    map.end_pass();
    let meta = MapMeta {
        model: 0x8000_0331,
        width: 8,
        height: 1,
        crop: 0,
    };
    let target = dir.path().join("single.pbm").to_str().unwrap().to_string();

    let saved = format::save(&map, &meta, &target, &SaveOptions::default()).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].path, target);
}
