//! Feature completion engine
//!
//! Turns the six caller-supplied measurements into the complete, ordered
//! feature row the model expects. Recognized optional features are sampled
//! from typical distributions, derived features are computed from values
//! already present, and whatever remains is zeroed. Steps are strictly
//! additive and order-dependent: derived features may depend on sampled
//! ones, and no step ever overwrites an earlier assignment.

use crate::row::FeatureRow;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// The six measurements callers must always supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalInput {
    /// Orbital period in days
    pub period_days: f64,
    /// Transit duration in hours
    pub duration_hours: f64,
    /// Planetary radius (Earth radii)
    pub rp_rearth: f64,
    /// Stellar radius (Solar radii)
    pub rstar_rsun: f64,
    /// Stellar magnitude (Kep/TESS mag)
    pub mag: f64,
    /// Stellar effective temperature (K)
    pub teff_k: f64,
}

/// False-positive flag columns seen across survey exports.
const FLAG_NAMES: [&str; 8] = [
    "flag_nt", "flag_ss", "flag_co", "flag_ec", "flags_nt", "flags_ss", "flags_co", "flags_ec",
];

/// One solar radius in Earth radii.
const RSUN_IN_REARTH: f64 = 109.0;

const LOGG_CGS_MIN: f64 = 3.5;
const LOGG_CGS_MAX: f64 = 4.7;
const DEPTH_PPM_MEAN: f64 = 200.0;
const DEPTH_PPM_STD: f64 = 100.0;
const DEPTH_PPM_FLOOR: f64 = 10.0;

/// Build a complete feature row for `names` from the canonical input.
///
/// The random source is injected so tests can substitute a seeded generator;
/// only the sampled features (`logg_cgs`, `depth_ppm`, the flags) draw from
/// it, and each request should use a fresh generator.
pub fn complete<R: Rng + ?Sized>(
    names: &[String],
    input: &CanonicalInput,
    rng: &mut R,
) -> FeatureRow {
    let mut row = FeatureRow::new(names);

    // Seed with the six canonical inputs. Names the model does not expect
    // are dropped from the row but remain available for derivation below.
    row.set("period_days", input.period_days);
    row.set("duration_hours", input.duration_hours);
    row.set("rp_rearth", input.rp_rearth);
    row.set("rstar_rsun", input.rstar_rsun);
    row.set("mag", input.mag);
    row.set("teff_k", input.teff_k);

    // Typical stellar surface gravity
    if row.contains_name("logg_cgs") && !row.is_set("logg_cgs") {
        row.set("logg_cgs", rng.gen_range(LOGG_CGS_MIN..LOGG_CGS_MAX));
    }

    // Transit depth in ppm, floored to a plausible minimum
    if row.contains_name("depth_ppm") && !row.is_set("depth_ppm") {
        let z: f64 = rng.sample(StandardNormal);
        let depth = DEPTH_PPM_MEAN + DEPTH_PPM_STD * z;
        row.set("depth_ppm", depth.max(DEPTH_PPM_FLOOR));
    }

    // Flags are independent 0/1 draws
    for flag in FLAG_NAMES {
        if row.contains_name(flag) && !row.is_set(flag) {
            row.set(flag, rng.gen_range(0..2) as f64);
        }
    }

    // Derived features. The canonical inputs are always available here even
    // when the model's name list leaves them out of the row itself.
    if row.contains_name("log_period") {
        row.set("log_period", input.period_days.max(1e-6).log10());
    }

    if let Some(depth) = row.get("depth_ppm") {
        if row.contains_name("log_depth") {
            row.set("log_depth", depth.max(1e-6).log10());
        }
        if row.contains_name("rp_rs_est") {
            row.set("rp_rs_est", (depth.max(0.0) / 1e6).sqrt());
        }
    }

    if row.contains_name("dur_frac") {
        row.set("dur_frac", input.duration_hours / (input.period_days * 24.0));
    }

    if row.contains_name("rp_rs_calc") {
        let rstar_rearth = input.rstar_rsun * RSUN_IN_REARTH;
        row.set("rp_rs_calc", input.rp_rearth / rstar_rearth.max(1e-9));
    }

    if let (Some(est), Some(calc)) = (row.get("rp_rs_est"), row.get("rp_rs_calc")) {
        if row.contains_name("rp_rs_error") {
            row.set("rp_rs_error", (est - calc).abs());
        }
    }

    // Anything the model expects that no rule produced defaults to zero.
    row.fill_missing(0.0);

    row
}
