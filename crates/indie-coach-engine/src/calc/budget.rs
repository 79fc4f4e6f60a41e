use crate::widgets::BudgetTableData;

use super::coerce;

/// Editable state of one rendered budget table.
///
/// Holds a copy of the payload plus one estimate override per row. Edits
/// only touch the overrides; the payload (and the message it came from)
/// never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTable {
    data: BudgetTableData,
    estimates: Vec<f64>,
}

impl BudgetTable {
    pub fn new(data: &BudgetTableData) -> Self {
        Self {
            estimates: data.rows.iter().map(|row| row.estimate).collect(),
            data: data.clone(),
        }
    }

    pub fn data(&self) -> &BudgetTableData {
        &self.data
    }

    /// Current estimate overrides, one per row.
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    /// Sets a row's estimate from raw input. Input without a leading integer
    /// counts as 0. Out-of-range rows are ignored.
    pub fn set_estimate(&mut self, row: usize, input: &str) {
        if let Some(slot) = self.estimates.get_mut(row) {
            *slot = coerce::leading_int(input);
        }
    }

    /// Sum of all current estimates.
    pub fn total(&self) -> f64 {
        self.estimates.iter().sum()
    }

    /// Restores every estimate to the payload value.
    pub fn reset(&mut self) {
        for (slot, row) in self.estimates.iter_mut().zip(&self.data.rows) {
            *slot = row.estimate;
        }
    }
}
