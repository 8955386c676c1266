//! Exoplanet Cleaner - offline survey CSV preparation
//!
//! Batch-transforms raw astronomical survey exports into the tabular schema
//! the classifier was trained on. Two input shapes are recognized: tabular
//! KOI/TOI catalogs and light-curve files (`time` + `flux` columns). This is
//! a disconnected pipeline producing training data; it never runs at
//! request time.

pub mod lightcurve;
pub mod table;
pub mod tabular;

pub use lightcurve::clean_lightcurve;
pub use table::Table;
pub use tabular::clean_tabular;

/// Which of the two recognized input schemas a table matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    LightCurve,
    Tabular,
}

/// Sniff the input schema: a light curve carries both `time` and `flux`.
pub fn detect_kind(table: &Table) -> InputKind {
    if table.has_column("time") && table.has_column("flux") {
        InputKind::LightCurve
    } else {
        InputKind::Tabular
    }
}
