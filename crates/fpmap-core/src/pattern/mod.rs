// crates/fpmap-core/src/pattern/mod.rs
//
// Deterministic focus pixel generation: one generic lattice sampler fed by
// per-mode rule tables. Composite modes chain several lattice passes.

pub mod tables;

use crate::camera::{Camera, PatternFamily};
use crate::map::PixelMap;
use crate::mode::{Variant, VideoGeometry, VideoMode};
use tables::{ShiftRule, COL_START};

/// One row-range lattice: rows in `[row_start, row_end]` are matched against
/// the shift rules in order; rows matching none carry no focus pixels.
#[derive(Copy, Clone, Debug)]
pub struct Lattice {
    pub row_start: u32,
    pub row_end: u32,
    pub row_period: u32,
    pub col_period: u32,
    pub rules: &'static [ShiftRule],
}

const fn lat(
    row_start: u32,
    row_end: u32,
    row_period: u32,
    col_period: u32,
    rules: &'static [ShiftRule],
) -> Lattice {
    Lattice {
        row_start,
        row_end,
        row_period,
        col_period,
        rules,
    }
}

fn sample(map: &mut PixelMap, lattice: &Lattice, raw_width: u32) {
    for y in lattice.row_start..=lattice.row_end {
        let Some(shift) = lattice
            .rules
            .iter()
            .find(|r| (y + r.offset) % lattice.row_period == 0)
            .map(|r| r.shift)
        else {
            continue;
        };
        for x in COL_START..raw_width {
            if (x + shift) % lattice.col_period == 0 {
                map.push(x, y);
            }
        }
    }
}

/// Lattices of each pass, in emission order. A pass may hold more than one
/// lattice sweep (unified zoom); each inner list closes exactly one pass.
fn pass_plan(
    camera: Camera,
    mode: VideoMode,
    variant: Variant,
    geometry: &VideoGeometry,
) -> Vec<Vec<Lattice>> {
    let family = camera.family();
    let last_row = geometry.height.saturating_sub(1);

    match variant {
        Variant::Legacy => match mode {
            VideoMode::Mv720 => {
                let l = match family {
                    PatternFamily::A => lat(290, 465, 12, 8, tables::RULES_720),
                    PatternFamily::B => lat(86, 669, 12, 8, tables::RULES_720),
                };
                vec![vec![l]]
            }
            VideoMode::Mv1080 => {
                let l = match family {
                    PatternFamily::A => lat(459, 755, 10, 8, tables::RULES_1080),
                    PatternFamily::B => lat(119, 1095, 10, 8, tables::RULES_1080),
                };
                vec![vec![l]]
            }
            VideoMode::Mv1080Crop => {
                let l = match family {
                    PatternFamily::A => lat(121, 1013, 60, 24, tables::RULES_CROP_A),
                    PatternFamily::B => lat(29, 1057, 6, 12, tables::RULES_CROP_B),
                };
                vec![vec![l]]
            }
            VideoMode::Zoom => {
                let l = match family {
                    PatternFamily::A => lat(31, last_row, 60, 24, tables::RULES_CROP_A),
                    PatternFamily::B => lat(28, last_row, 6, 12, tables::RULES_CROP_B),
                };
                vec![vec![l]]
            }
            VideoMode::CropRec => {
                let second = lat(219, 515, 10, 8, tables::RULES_1080);
                match camera {
                    // First pass matches the body's mv720 lattice.
                    Camera::Eosm | Camera::Eos650d => {
                        vec![vec![lat(290, 465, 12, 8, tables::RULES_720)], vec![second]]
                    }
                    Camera::Eos700d => vec![vec![second]],
                    Camera::Eos100d => vec![
                        vec![lat(86, 669, 12, 8, tables::RULES_720)],
                        vec![lat(28, 724, 10, 8, tables::RULES_1080)],
                    ],
                }
            }
        },
        Variant::Unified => match mode {
            // Family-independent in unified form.
            VideoMode::Mv720 => vec![vec![lat(28, 726, 12, 8, tables::RULES_720)]],
            VideoMode::Mv1080 => vec![vec![lat(28, 1189, 10, 8, tables::RULES_1080)]],
            VideoMode::Mv1080Crop => match family {
                PatternFamily::A => vec![
                    vec![lat(28, 1058, 60, 8, tables::RULES_CROP_A_U)],
                    vec![lat(28, 1058, 60, 8, tables::RULES_CROP_A_U_SHIFTED)],
                ],
                PatternFamily::B => vec![
                    vec![lat(28, 1058, 6, 12, tables::RULES_CROP_B)],
                    vec![lat(28, 1058, 6, 12, tables::RULES_CROP_B_U_SHIFTED)],
                ],
            },
            // Two sweeps, one pass boundary.
            VideoMode::Zoom => match family {
                PatternFamily::A => vec![vec![
                    lat(28, last_row, 60, 8, tables::RULES_CROP_A_U),
                    lat(28, last_row, 60, 8, tables::RULES_ZOOM_A_U_EXTRA),
                ]],
                PatternFamily::B => vec![vec![
                    lat(28, last_row, 6, 12, tables::RULES_CROP_B),
                    lat(28, last_row, 6, 12, tables::RULES_ZOOM_B_U_EXTRA),
                ]],
            },
            VideoMode::CropRec => vec![
                vec![lat(28, 726, 12, 8, tables::RULES_720)],
                vec![lat(28, 726, 10, 8, tables::RULES_1080)],
            ],
        },
    }
}

/// Append the focus pixel pattern for one camera/mode/variant combination,
/// closing one pass boundary per logical pass. Pure and deterministic.
pub fn generate(
    map: &mut PixelMap,
    camera: Camera,
    mode: VideoMode,
    variant: Variant,
    geometry: &VideoGeometry,
) {
    for pass in pass_plan(camera, mode, variant, geometry) {
        for lattice in &pass {
            sample(map, lattice, geometry.width);
        }
        map.end_pass();
    }
}
