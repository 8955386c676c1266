//! Tabular KOI/TOI catalog cleaning
//!
//! Renames survey columns to the canonical schema, drops physically
//! impossible rows, imputes missing stellar parameters, coerces flags,
//! derives the same engineered features the inference path completes, and
//! unifies disposition labels. Derivation only fills absent columns, so the
//! cleaner is idempotent on its own output.

use crate::table::{format_value, Table};
use std::collections::HashMap;

/// Survey column names mapped to the canonical training schema.
fn rename_map() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("koi_period", "period_days"),
        ("koi_duration", "duration_hours"),
        ("koi_depth", "depth_ppm"),
        ("koi_prad", "rp_rearth"),
        ("koi_steff", "teff_k"),
        ("koi_slogg", "logg_cgs"),
        ("koi_srad", "rstar_rsun"),
        ("koi_kepmag", "mag"),
        ("koi_fpflag_nt", "flags_nt"),
        ("koi_fpflag_ss", "flags_ss"),
        ("koi_fpflag_co", "flags_co"),
        ("koi_fpflag_ec", "flags_ec"),
        ("koi_disposition", "label_raw"),
        ("koi_pdisposition", "label_prior"),
        ("koi_score", "score"),
        ("kepoi_name", "koi_name"),
        ("kepid", "kepler_id"),
    ])
}

/// Columns that must be strictly positive for a row to survive.
const POSITIVE_COLUMNS: [&str; 3] = ["period_days", "duration_hours", "depth_ppm"];

/// Stellar parameters imputed with the column median.
const STELLAR_COLUMNS: [&str; 4] = ["teff_k", "logg_cgs", "rstar_rsun", "mag"];

/// False-positive flag columns, created when absent.
const FLAG_COLUMNS: [&str; 4] = ["flags_nt", "flags_ss", "flags_co", "flags_ec"];

/// Clean a tabular survey export in place.
pub fn clean_tabular(table: &mut Table) {
    table.rename_columns(&rename_map());

    drop_nonpositive_rows(table);
    impute_stellar_medians(table);
    coerce_flags(table);
    derive_features(table);
    map_labels(table);
    stamp_missions(table);
}

/// Drop rows whose period, duration or depth is missing or non-positive.
fn drop_nonpositive_rows(table: &mut Table) {
    for column in POSITIVE_COLUMNS {
        if !table.has_column(column) {
            continue;
        }
        let keep: Vec<bool> = (0..table.row_count())
            .map(|row| matches!(table.value(row, column), Some(v) if v > 0.0))
            .collect();
        table.retain_rows(|row| keep[row]);
    }
}

fn impute_stellar_medians(table: &mut Table) {
    for column in STELLAR_COLUMNS {
        let Some(median) = table.median(column) else {
            continue;
        };
        for row in 0..table.row_count() {
            if table.value(row, column).is_none() {
                table.set_cell(row, column, format_value(median));
            }
        }
    }
}

/// Flags become 0/1 integers; missing cells and missing columns become 0.
fn coerce_flags(table: &mut Table) {
    for column in FLAG_COLUMNS {
        if table.has_column(column) {
            for row in 0..table.row_count() {
                let flag = table.value(row, column).unwrap_or(0.0) as i64;
                table.set_cell(row, column, flag.to_string());
            }
        } else {
            table.add_column(column, vec!["0".to_string(); table.row_count()]);
        }
    }
}

/// Add the engineered features, one column at a time, skipping any column
/// that already exists.
fn derive_features(table: &mut Table) {
    derive(table, "log_period", &["period_days"], |v| {
        Some(v[0]?.max(1e-6).log10())
    });
    derive(table, "log_depth", &["depth_ppm"], |v| {
        Some(v[0]?.max(1e-6).log10())
    });
    derive(table, "rp_rs_est", &["depth_ppm"], |v| {
        Some((v[0]?.max(0.0) / 1e6).sqrt())
    });
    derive(table, "dur_frac", &["duration_hours", "period_days"], |v| {
        Some(v[0]? / (v[1]? * 24.0))
    });
    derive(table, "rp_rs_calc", &["rp_rearth", "rstar_rsun"], |v| {
        let rstar = v[1]?;
        if rstar == 0.0 {
            None
        } else {
            Some(v[0]? / rstar)
        }
    });
    derive(table, "rp_rs_error", &["rp_rs_est", "rp_rs_calc"], |v| {
        Some((v[0]? - v[1]?).abs())
    });
}

fn derive<F>(table: &mut Table, name: &str, sources: &[&str], f: F)
where
    F: Fn(&[Option<f64>]) -> Option<f64>,
{
    if table.has_column(name) {
        return;
    }
    if sources.iter().any(|s| !table.has_column(s)) {
        return;
    }

    let values: Vec<String> = (0..table.row_count())
        .map(|row| {
            let inputs: Vec<Option<f64>> =
                sources.iter().map(|s| table.value(row, *s)).collect();
            f(&inputs).map(format_value).unwrap_or_default()
        })
        .collect();
    table.add_column(name, values);
}

/// Unify raw dispositions into the 3-class label. Unmapped values stay
/// empty rather than failing.
fn map_labels(table: &mut Table) {
    if table.has_column("label_final") {
        return;
    }

    let values: Vec<String> = match table.column_index("label_raw") {
        Some(_) => (0..table.row_count())
            .map(|row| {
                let raw = table.cell(row, "label_raw").unwrap_or("");
                match raw.trim().to_uppercase().as_str() {
                    "CONFIRMED" => "planet".to_string(),
                    "CANDIDATE" => "candidate".to_string(),
                    "FALSE POSITIVE" => "false_positive".to_string(),
                    _ => String::new(),
                }
            })
            .collect(),
        None => vec![String::new(); table.row_count()],
    };
    table.add_column("label_final", values);
}

/// One-hot mission columns; this cleaner handles Kepler exports.
fn stamp_missions(table: &mut Table) {
    let rows = table.row_count();
    table.set_column("mission_Kepler", vec!["1".to_string(); rows]);
    table.set_column("mission_TESS", vec!["0".to_string(); rows]);
    table.set_column("mission_K2", vec!["0".to_string(); rows]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_koi_table() -> Table {
        Table::new(
            vec![
                "kepid".to_string(),
                "koi_disposition".to_string(),
                "koi_period".to_string(),
                "koi_duration".to_string(),
                "koi_depth".to_string(),
                "koi_prad".to_string(),
                "koi_srad".to_string(),
                "koi_steff".to_string(),
                "koi_fpflag_nt".to_string(),
            ],
            vec![
                row(&["10797460", "CONFIRMED", "100.0", "4.8", "400.0", "2.18", "1.0", "5455", "0"]),
                row(&["10811496", "FALSE POSITIVE", "19.9", "1.8", "10800.0", "14.6", "0.868", "", "1"]),
                row(&["10854555", "CANDIDATE", "-1.0", "2.4", "600.0", "2.75", "0.8", "6000", ""]),
                row(&["10872983", "DISPUTED", "2.5", "1.6", "900.0", "3.9", "1.1", "6100", "0"]),
            ],
        )
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_columns_are_renamed() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        assert!(t.has_column("period_days"));
        assert!(t.has_column("depth_ppm"));
        assert!(t.has_column("kepler_id"));
        assert!(!t.has_column("koi_period"));
    }

    #[test]
    fn test_nonpositive_period_rows_are_dropped() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        // Row with period -1.0 is gone
        assert_eq!(t.row_count(), 3);
        for i in 0..t.row_count() {
            assert!(t.value(i, "period_days").unwrap() > 0.0);
        }
    }

    #[test]
    fn test_missing_stellar_temperature_is_median_imputed() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        // Surviving teff values are 5455 and 6100; their median fills row 1.
        assert_eq!(t.value(1, "teff_k"), Some(5777.5));
    }

    #[test]
    fn test_flags_are_filled_and_created() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        // Missing flag cell coerces to 0, absent flag columns appear as 0
        for i in 0..t.row_count() {
            for flag in ["flags_nt", "flags_ss", "flags_co", "flags_ec"] {
                let v = t.value(i, flag).unwrap();
                assert!(v == 0.0 || v == 1.0);
            }
        }
        assert_eq!(t.value(1, "flags_nt"), Some(1.0));
    }

    #[test]
    fn test_derived_features_match_formulas() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        // Row 0: period 100, duration 4.8, depth 400, rp 2.18, rstar 1.0
        assert!((t.value(0, "log_period").unwrap() - 2.0).abs() < 1e-9);
        assert!((t.value(0, "log_depth").unwrap() - 400.0_f64.log10()).abs() < 1e-9);
        assert!((t.value(0, "rp_rs_est").unwrap() - 0.02).abs() < 1e-9);
        assert!((t.value(0, "dur_frac").unwrap() - 4.8 / 2400.0).abs() < 1e-9);
        assert!((t.value(0, "rp_rs_calc").unwrap() - 2.18).abs() < 1e-9);

        let est = t.value(0, "rp_rs_est").unwrap();
        let calc = t.value(0, "rp_rs_calc").unwrap();
        assert!((t.value(0, "rp_rs_error").unwrap() - (est - calc).abs()).abs() < 1e-9);
    }

    #[test]
    fn test_label_mapping() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        assert_eq!(t.cell(0, "label_final"), Some("planet"));
        assert_eq!(t.cell(1, "label_final"), Some("false_positive"));
        // "DISPUTED" maps to nothing
        assert_eq!(t.cell(2, "label_final"), Some(""));
    }

    #[test]
    fn test_mission_columns_are_stamped() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);

        for i in 0..t.row_count() {
            assert_eq!(t.value(i, "mission_Kepler"), Some(1.0));
            assert_eq!(t.value(i, "mission_TESS"), Some(0.0));
            assert_eq!(t.value(i, "mission_K2"), Some(0.0));
        }
    }

    #[test]
    fn test_cleaning_is_idempotent_on_derived_columns() {
        let mut t = raw_koi_table();
        clean_tabular(&mut t);
        let first: Vec<Option<f64>> = (0..t.row_count())
            .map(|i| t.value(i, "rp_rs_error"))
            .collect();

        clean_tabular(&mut t);
        let second: Vec<Option<f64>> = (0..t.row_count())
            .map(|i| t.value(i, "rp_rs_error"))
            .collect();

        assert_eq!(first, second);
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn test_zero_stellar_radius_leaves_ratio_empty() {
        let mut t = Table::new(
            vec![
                "koi_period".to_string(),
                "koi_duration".to_string(),
                "koi_depth".to_string(),
                "koi_prad".to_string(),
                "koi_srad".to_string(),
            ],
            vec![row(&["10.0", "2.0", "500.0", "1.0", "0.0"])],
        );
        clean_tabular(&mut t);

        assert_eq!(t.value(0, "rp_rs_calc"), None);
        assert_eq!(t.value(0, "rp_rs_error"), None);
    }

    #[test]
    fn test_table_without_label_column_gets_empty_labels() {
        let mut t = Table::new(
            vec!["koi_period".to_string(), "koi_duration".to_string(), "koi_depth".to_string()],
            vec![row(&["10.0", "2.0", "500.0"])],
        );
        clean_tabular(&mut t);

        assert!(t.has_column("label_final"));
        assert_eq!(t.cell(0, "label_final"), Some(""));
    }
}
