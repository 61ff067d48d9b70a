//! Bodygraph chart construction.
//!
//! Activations come from the Sun, Earth (Sun + 180), Moon, and ascendant
//! longitudes at two instants: the birth instant (personality side) and
//! the design instant, when the Sun sat 88 degrees of arc earlier.
//! Gates activate centers through the channel table; type, strategy,
//! authority, and definition are static functions of the active centers.

use crate::calc::ephemeris::{self, sun_longitude_deg};
use crate::calc::gates::{center_of_gate, gate_at, Center, CHANNELS, MOTOR_CENTERS};
use crate::calc::julian::datetime_to_jd;
use crate::utils::error::{BlueprintError, Result};
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashSet};

/// Mean solar motion, degrees per day; seeds the design-instant solve.
const SUN_MEAN_MOTION: f64 = 0.985_647_4;
/// Solar arc between design and birth instants.
const DESIGN_ARC_DEG: f64 = 88.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartType {
    Generator,
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl ChartType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Manifestor => "Manifestor",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }

    /// Strategy is a pure function of type.
    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "Wait to respond",
            Self::Manifestor => "Inform before acting",
            Self::Projector => "Wait for the invitation",
            Self::Reflector => "Wait a lunar cycle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignChartResult {
    pub chart_type: ChartType,
    pub strategy: &'static str,
    pub authority: &'static str,
    pub profile: String,
    pub incarnation_cross: String,
    pub definition: &'static str,
    pub channels: Vec<String>,
    pub gates: Vec<String>,
}

impl DesignChartResult {
    /// Documented fallback sub-record returned when chart computation
    /// fails: the most common configuration, never an error.
    pub fn fallback() -> Self {
        Self {
            chart_type: ChartType::Generator,
            strategy: ChartType::Generator.strategy(),
            authority: "Emotional",
            profile: "3/5".to_string(),
            incarnation_cross: String::new(),
            definition: "Split",
            channels: Vec::new(),
            gates: Vec::new(),
        }
    }
}

/// Active-center count to definition label. The banding is a fixed
/// compatibility contract; do not retune it.
pub fn definition_label(active_centers: usize) -> &'static str {
    if active_centers >= 7 {
        "Single"
    } else if active_centers >= 4 {
        "Split"
    } else {
        "Triple Split"
    }
}

/// Find the JD at which the Sun's longitude is `arc` degrees before its
/// longitude at `jd_birth`. Newton-style iteration on mean solar motion
/// converges in a handful of steps.
fn design_jd(jd_birth: f64) -> f64 {
    let target = (sun_longitude_deg(jd_birth) - DESIGN_ARC_DEG).rem_euclid(360.0);
    let mut jd = jd_birth - DESIGN_ARC_DEG / SUN_MEAN_MOTION;
    for _ in 0..6 {
        let mut diff = sun_longitude_deg(jd) - target;
        diff = (diff + 180.0).rem_euclid(360.0) - 180.0;
        if diff.abs() < 1e-5 {
            break;
        }
        jd -= diff / SUN_MEAN_MOTION;
    }
    jd
}

/// The four tracked longitudes at one instant.
fn body_longitudes(jd: f64, lat: f64, lon: f64) -> [f64; 4] {
    use crate::calc::julian::{gmst_deg, local_sidereal_deg};
    let sun = sun_longitude_deg(jd);
    let earth = (sun + 180.0).rem_euclid(360.0);
    let moon = ephemeris::moon_longitude_deg(jd);
    let lst = local_sidereal_deg(gmst_deg(jd), lon);
    let asc = ephemeris::ascendant_deg(lst, ephemeris::mean_obliquity_deg(jd), lat);
    [sun, earth, moon, asc]
}

fn authority_for(active: &HashSet<Center>, chart_type: ChartType) -> &'static str {
    let is_active = |c: Center| active.contains(&c);

    if is_active(Center::SolarPlexus) {
        "Emotional"
    } else if is_active(Center::Sacral) {
        "Sacral"
    } else if is_active(Center::Spleen) {
        "Splenic"
    } else if is_active(Center::Heart) {
        "Ego"
    } else if is_active(Center::G) {
        "Self-Projected"
    } else if chart_type == ChartType::Reflector {
        "Lunar"
    } else {
        "Mental"
    }
}

pub fn compute(utc: NaiveDateTime, lat: f64, lon: f64) -> Result<DesignChartResult> {
    let jd_birth = datetime_to_jd(utc);
    let jd_design = design_jd(jd_birth);

    let personality = body_longitudes(jd_birth, lat, lon);
    let design = body_longitudes(jd_design, lat, lon);

    if personality.iter().chain(design.iter()).any(|l| !l.is_finite()) {
        return Err(BlueprintError::computation(
            "human_design",
            "non-finite longitude in chart activation",
        ));
    }

    let personality_gates: Vec<(u8, u8)> = personality.iter().map(|&l| gate_at(l)).collect();
    let design_gates: Vec<(u8, u8)> = design.iter().map(|&l| gate_at(l)).collect();

    let gate_set: BTreeSet<u8> = personality_gates
        .iter()
        .chain(design_gates.iter())
        .map(|&(g, _)| g)
        .collect();

    // channels active when both gates are present; centers light up at
    // both ends of an active channel
    let mut channels = Vec::new();
    let mut active_centers: HashSet<Center> = HashSet::new();
    for (a, b) in CHANNELS {
        if gate_set.contains(&a) && gate_set.contains(&b) {
            channels.push(format!("{}-{}", a, b));
            active_centers.insert(center_of_gate(a));
            active_centers.insert(center_of_gate(b));
        }
    }

    let motor_to_throat = CHANNELS.iter().any(|&(a, b)| {
        let (ca, cb) = (center_of_gate(a), center_of_gate(b));
        let bridges = (ca == Center::Throat && MOTOR_CENTERS.contains(&cb))
            || (cb == Center::Throat && MOTOR_CENTERS.contains(&ca));
        bridges && gate_set.contains(&a) && gate_set.contains(&b)
    });

    let chart_type = if active_centers.contains(&Center::Sacral) {
        if motor_to_throat {
            ChartType::ManifestingGenerator
        } else {
            ChartType::Generator
        }
    } else if motor_to_throat {
        ChartType::Manifestor
    } else if !active_centers.is_empty() {
        ChartType::Projector
    } else {
        ChartType::Reflector
    };

    let (p_sun, p_sun_line) = personality_gates[0];
    let (p_earth, _) = personality_gates[1];
    let (d_sun, d_sun_line) = design_gates[0];
    let (d_earth, _) = design_gates[1];

    Ok(DesignChartResult {
        chart_type,
        strategy: chart_type.strategy(),
        authority: authority_for(&active_centers, chart_type),
        profile: format!("{}/{}", p_sun_line, d_sun_line),
        incarnation_cross: format!("({}/{} | {}/{})", p_sun, p_earth, d_sun, d_earth),
        definition: definition_label(active_centers.len()),
        channels,
        gates: gate_set.iter().map(|g| g.to_string()).collect(),
    })
}
