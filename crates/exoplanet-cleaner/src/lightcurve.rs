//! Light-curve cleaning
//!
//! Keeps the `time` and `flux` columns, drops incomplete samples, sorts by
//! time, normalizes flux by its median and adds the residual against a flat
//! baseline.

use crate::table::{format_value, Table};
use anyhow::{bail, Result};

/// Clean a light-curve file, producing a new table with columns
/// `time, flux, flux_norm, residual`.
pub fn clean_lightcurve(table: &Table) -> Result<Table> {
    if !table.has_column("time") || !table.has_column("flux") {
        bail!("light curve must have 'time' and 'flux' columns");
    }

    let mut samples: Vec<(f64, f64)> = (0..table.row_count())
        .filter_map(|row| {
            let time = table.value(row, "time")?;
            let flux = table.value(row, "flux")?;
            Some((time, flux))
        })
        .collect();
    samples.sort_by(|a, b| a.0.total_cmp(&b.0));

    let median = flux_median(&samples);

    let columns = vec![
        "time".to_string(),
        "flux".to_string(),
        "flux_norm".to_string(),
        "residual".to_string(),
    ];
    let rows = samples
        .into_iter()
        .map(|(time, flux)| {
            let flux_norm = flux / median;
            vec![
                format_value(time),
                format_value(flux),
                format_value(flux_norm),
                format_value(flux_norm - 1.0),
            ]
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn flux_median(samples: &[(f64, f64)]) -> f64 {
    let mut fluxes: Vec<f64> = samples.iter().map(|(_, f)| *f).collect();
    fluxes.sort_by(f64::total_cmp);
    if fluxes.is_empty() {
        return f64::NAN;
    }
    let mid = fluxes.len() / 2;
    if fluxes.len() % 2 == 1 {
        fluxes[mid]
    } else {
        (fluxes[mid - 1] + fluxes[mid]) / 2.0
    }
}
