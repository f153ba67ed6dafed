// crates/fpmap-core/src/pattern/tables.rs
//
// Empirically measured lattice constants, per pattern family and video
// mode. These are hardware characteristics: reproduce them table-for-table,
// never derive them from a formula.

/// First row matching `(row + offset) % row_period == 0` selects `shift`.
#[derive(Copy, Clone, Debug)]
pub struct ShiftRule {
    pub offset: u32,
    pub shift: u32,
}

const fn rule(offset: u32, shift: u32) -> ShiftRule {
    ShiftRule { offset, shift }
}

/// Focus pixels start at this column in every mode.
pub const COL_START: u32 = 72;

/// mv720 row rules, both families, legacy and unified (12-row period).
pub const RULES_720: &[ShiftRule] = &[rule(3, 7), rule(4, 6), rule(9, 3), rule(10, 2)];

/// mv1080 / crop-record second-pass row rules (10-row period).
pub const RULES_1080: &[ShiftRule] = &[rule(0, 0), rule(1, 1), rule(5, 5), rule(6, 4)];

/// Family A mv1080crop / zoom rules, legacy (60-row, 24-column periods).
pub const RULES_CROP_A: &[ShiftRule] = &[
    rule(7, 19),
    rule(11, 13),
    rule(12, 18),
    rule(14, 12),
    rule(26, 0),
    rule(29, 1),
    rule(37, 7),
    rule(41, 13),
    rule(42, 6),
    rule(44, 12),
    rule(56, 0),
    rule(59, 1),
];

/// Family B mv1080crop / zoom rules, legacy and unified first pass
/// (6-row, 12-column periods).
pub const RULES_CROP_B: &[ShiftRule] = &[rule(2, 0), rule(5, 1), rule(6, 6), rule(7, 7)];

/// Family A mv1080crop / zoom rules, unified first pass (8-column period).
pub const RULES_CROP_A_U: &[ShiftRule] = &[
    rule(7, 3),
    rule(11, 5),
    rule(12, 2),
    rule(14, 4),
    rule(26, 0),
    rule(29, 1),
    rule(37, 7),
    rule(41, 5),
    rule(42, 6),
    rule(44, 4),
    rule(56, 0),
    rule(59, 1),
];

/// Family A mv1080crop unified second (shifted) pass.
pub const RULES_CROP_A_U_SHIFTED: &[ShiftRule] = &[
    rule(7, 2),
    rule(11, 4),
    rule(12, 1),
    rule(14, 3),
    rule(26, 7),
    rule(29, 0),
    rule(37, 6),
    rule(41, 4),
    rule(42, 5),
    rule(44, 3),
    rule(56, 7),
    rule(59, 0),
];

/// Family B mv1080crop unified second (shifted) pass.
pub const RULES_CROP_B_U_SHIFTED: &[ShiftRule] =
    &[rule(2, 11), rule(5, 0), rule(6, 5), rule(7, 6)];

/// Family A zoom unified supplement sweep.
pub const RULES_ZOOM_A_U_EXTRA: &[ShiftRule] = &[rule(14, 4)];

/// Family B zoom unified supplement sweep.
pub const RULES_ZOOM_B_U_EXTRA: &[ShiftRule] =
    &[rule(2, 4), rule(5, 5), rule(6, 10), rule(7, 11)];
