//! The 64-gate wheel and bodygraph wiring tables.
//!
//! The ecliptic is partitioned into 64 gates of 5.625 degrees, each
//! split into 6 lines of 0.9375 degrees. The wheel is anchored with
//! gate 41 starting at 302.0 degrees (02 deg 00 min Aquarius), standard
//! mandala order. The wiring tables (gate-to-center, channel pairs) are
//! fixed data; lookups are total by construction.

/// Start of gate 41 on the ecliptic, degrees.
const WHEEL_ANCHOR_DEG: f64 = 302.0;
/// Width of one gate.
pub const GATE_SPAN_DEG: f64 = 5.625;
/// Width of one line (six per gate).
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / 6.0;

/// Gate numbers in wheel order starting from the anchor.
#[rustfmt::skip]
const WHEEL: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56,
    31, 33,  7,  4, 29, 59, 40, 64, 47,  6, 46, 18, 48, 57, 32, 50,
    28, 44,  1, 43, 14, 34,  9,  5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// The nine bodygraph centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Sacral,
    Spleen,
    SolarPlexus,
    Root,
}

pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Sacral,
    Center::Spleen,
    Center::SolarPlexus,
    Center::Root,
];

/// Motor centers, for type determination.
pub const MOTOR_CENTERS: [Center; 4] = [
    Center::Heart,
    Center::Sacral,
    Center::SolarPlexus,
    Center::Root,
];

/// Which center a gate belongs to. Total over gates 1..=64.
pub fn center_of_gate(gate: u8) -> Center {
    match gate {
        61 | 63 | 64 => Center::Head,
        4 | 11 | 17 | 24 | 43 | 47 => Center::Ajna,
        8 | 12 | 16 | 20 | 23 | 31 | 33 | 35 | 45 | 56 | 62 => Center::Throat,
        1 | 2 | 7 | 10 | 13 | 15 | 25 | 46 => Center::G,
        21 | 26 | 40 | 51 => Center::Heart,
        3 | 5 | 9 | 14 | 27 | 29 | 34 | 42 | 59 => Center::Sacral,
        18 | 28 | 32 | 44 | 48 | 50 | 57 => Center::Spleen,
        6 | 22 | 30 | 36 | 37 | 49 | 55 => Center::SolarPlexus,
        // 19 38 39 41 52 53 54 58 60 and anything malformed
        _ => Center::Root,
    }
}

/// The 36 channels as gate pairs.
#[rustfmt::skip]
pub const CHANNELS: [(u8, u8); 36] = [
    (1, 8),   (2, 14),  (3, 60),  (4, 63),  (5, 15),  (6, 59),
    (7, 31),  (9, 52),  (10, 20), (10, 34), (10, 57), (11, 56),
    (12, 22), (13, 33), (16, 48), (17, 62), (18, 58), (19, 49),
    (20, 34), (20, 57), (21, 45), (23, 43), (24, 61), (25, 51),
    (26, 44), (27, 50), (28, 38), (29, 46), (30, 41), (32, 54),
    (34, 57), (35, 36), (37, 40), (39, 55), (42, 53), (47, 64),
];

/// Gate and line for an ecliptic longitude. Total: every longitude maps
/// to exactly one gate and a line in 1..=6.
pub fn gate_at(longitude_deg: f64) -> (u8, u8) {
    let offset = (longitude_deg - WHEEL_ANCHOR_DEG).rem_euclid(360.0);
    let idx = ((offset / GATE_SPAN_DEG).floor() as usize).min(63);
    let within = offset - idx as f64 * GATE_SPAN_DEG;
    let line = ((within / LINE_SPAN_DEG).floor() as u8).min(5) + 1;
    (WHEEL[idx], line)
}
