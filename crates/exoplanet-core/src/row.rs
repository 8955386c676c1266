//! Per-request feature row
//!
//! An ordered key-value structure keyed by the resolved feature name list.
//! Values are assigned at most once per key; names outside the list are
//! silently ignored so callers can offer every value they have and let the
//! row keep only what the model asked for.

use std::collections::HashMap;

/// Ordered feature row with assign-once semantics per key.
#[derive(Debug, Clone)]
pub struct FeatureRow {
    names: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<Option<f64>>,
}

impl FeatureRow {
    /// Create an empty row keyed by `names`. Order is preserved.
    pub fn new(names: &[String]) -> Self {
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self {
            names: names.to_vec(),
            index,
            values: vec![None; names.len()],
        }
    }

    /// Assign a value. Returns true if the name is part of the row and was
    /// not already set; otherwise the row is unchanged.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        match self.index.get(name) {
            Some(&i) if self.values[i].is_none() => {
                self.values[i] = Some(value);
                true
            }
            _ => false,
        }
    }

    /// Whether `name` is one of the row's keys.
    pub fn contains_name(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Whether `name` has been assigned a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.index
            .get(name)
            .map(|&i| self.values[i].is_some())
            .unwrap_or(false)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).and_then(|&i| self.values[i])
    }

    /// Assign `value` to every key still unset.
    pub fn fill_missing(&mut self, value: f64) {
        for slot in &mut self.values {
            if slot.is_none() {
                *slot = Some(value);
            }
        }
    }

    /// The row's keys, in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The row's values, in model order. Unset keys read as zero; the
    /// completion engine always fills them before emission.
    pub fn values(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(0.0)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
