//! Problem instance and input validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An input validation failure.
///
/// Produced by [`Instance::validate`] before any optimization starts; the
/// optimizer never constructs one of these after its first iteration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    /// A vector or matrix field has the wrong length.
    #[error("{field} has {actual} entries, expected {expected}")]
    ShapeMismatch {
        /// Wire-schema name of the offending field.
        field: &'static str,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        actual: usize,
    },
    /// A capacity, cost, yield, or demand entry is negative (or NaN).
    #[error("{field}[{index}] is {value}, must be non-negative")]
    NegativeEntry {
        /// Wire-schema name of the offending field.
        field: &'static str,
        /// Flattened row-major index of the entry.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A distance entry is zero, negative, or NaN.
    ///
    /// Distances are used as squared divisors in the attraction model and
    /// must be strictly positive.
    #[error("{field}[{index}] is {value}, distances must be strictly positive")]
    NonPositiveDistance {
        /// Wire-schema name of the offending field.
        field: &'static str,
        /// Flattened row-major index of the entry.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

/// An immutable competitive facility-location instance.
///
/// Field names follow the domain; the serde wire keys match the external
/// loader schema (`i_amount`, `U_L`, `U_LT`, `U_T`, `V`, `H`, `D`, `D_comp`,
/// `A_opponent_bar`, `F`, `C`, `B`, `A_EX_bound`). All matrices are dense,
/// row-major `Vec<Vec<_>>` with the outer index given first in the dimension
/// comments below.
///
/// # Examples
///
/// ```
/// use facloc::models::Instance;
///
/// // One customer, one candidate site, one resource type, no competitors.
/// let instance = Instance {
///     num_customers: 1,
///     num_sites: 1,
///     num_resources: 1,
///     num_competitors: 0,
///     site_capacity: vec![20],
///     site_resource_cap: vec![vec![20]],
///     resource_supply: vec![20],
///     resource_yield: vec![vec![10.0]],
///     demand: vec![100.0],
///     site_distance: vec![vec![1.0]],
///     competitor_distance: vec![vec![]],
///     competitor_attraction: vec![],
///     build_cost: vec![0.0],
///     compensation_cost: vec![1.0],
///     resource_cost: vec![vec![1.0]],
///     compensation_bound: 1000.0,
/// };
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Number of customer points (I).
    #[serde(rename = "i_amount")]
    pub num_customers: usize,
    /// Number of candidate facility sites (J).
    #[serde(rename = "j_amount")]
    pub num_sites: usize,
    /// Number of resource types (K).
    #[serde(rename = "k_amount")]
    pub num_resources: usize,
    /// Number of fixed competitor facilities (L).
    #[serde(rename = "l_amount")]
    pub num_competitors: usize,
    /// Total resource units site j can hold, dim (j).
    #[serde(rename = "U_L")]
    pub site_capacity: Vec<u32>,
    /// Units of resource k allowed at site j, dim (j, k).
    #[serde(rename = "U_LT")]
    pub site_resource_cap: Vec<Vec<u32>>,
    /// Global supply of resource k, dim (k).
    #[serde(rename = "U_T")]
    pub resource_supply: Vec<u32>,
    /// Attractiveness yield of one unit of resource k at site j, dim (j, k).
    #[serde(rename = "V")]
    pub resource_yield: Vec<Vec<f64>>,
    /// Demand weight of customer i, dim (i).
    #[serde(rename = "H")]
    pub demand: Vec<f64>,
    /// Distance between customer i and site j, dim (i, j). Strictly positive.
    #[serde(rename = "D")]
    pub site_distance: Vec<Vec<f64>>,
    /// Distance between customer i and competitor l, dim (i, l). Strictly
    /// positive.
    #[serde(rename = "D_comp")]
    pub competitor_distance: Vec<Vec<f64>>,
    /// Fixed attractiveness of competitor l, dim (l).
    #[serde(rename = "A_opponent_bar")]
    pub competitor_attraction: Vec<f64>,
    /// Fixed cost of building at site j, dim (j).
    #[serde(rename = "F")]
    pub build_cost: Vec<f64>,
    /// Cost per unit of compensation attractiveness at site j, dim (j).
    #[serde(rename = "C")]
    pub compensation_cost: Vec<f64>,
    /// Cost of allocating one unit of resource k to site j, dim (j, k).
    #[serde(rename = "B")]
    pub resource_cost: Vec<Vec<f64>>,
    /// Upper bound on compensation attractiveness at any single site.
    #[serde(rename = "A_EX_bound")]
    pub compensation_bound: f64,
}

impl Instance {
    /// Checks every shape and sign invariant of the input schema.
    ///
    /// Vector fields must match the declared counts, matrix fields must be
    /// rectangular with the declared dimensions, capacities/costs/yields/
    /// demands must be non-negative, and both distance matrices must be
    /// strictly positive (they appear as squared divisors). Returns the
    /// first violation found.
    pub fn validate(&self) -> Result<(), InstanceError> {
        let (i, j, k, l) = (
            self.num_customers,
            self.num_sites,
            self.num_resources,
            self.num_competitors,
        );

        check_len("U_L", &self.site_capacity, j)?;
        check_matrix_shape_u32("U_LT", &self.site_resource_cap, j, k)?;
        check_len("U_T", &self.resource_supply, k)?;
        check_matrix_shape("V", &self.resource_yield, j, k)?;
        check_len("H", &self.demand, i)?;
        check_matrix_shape("D", &self.site_distance, i, j)?;
        check_matrix_shape("D_comp", &self.competitor_distance, i, l)?;
        check_len("A_opponent_bar", &self.competitor_attraction, l)?;
        check_len("F", &self.build_cost, j)?;
        check_len("C", &self.compensation_cost, j)?;
        check_matrix_shape("B", &self.resource_cost, j, k)?;

        check_non_negative("V", self.resource_yield.iter().flatten())?;
        check_non_negative("H", self.demand.iter())?;
        check_non_negative("A_opponent_bar", self.competitor_attraction.iter())?;
        check_non_negative("F", self.build_cost.iter())?;
        check_non_negative("C", self.compensation_cost.iter())?;
        check_non_negative("B", self.resource_cost.iter().flatten())?;
        check_non_negative("A_EX_bound", std::iter::once(&self.compensation_bound))?;

        check_positive("D", self.site_distance.iter().flatten())?;
        check_positive("D_comp", self.competitor_distance.iter().flatten())?;

        Ok(())
    }
}

fn check_len<T>(field: &'static str, values: &[T], expected: usize) -> Result<(), InstanceError> {
    if values.len() != expected {
        return Err(InstanceError::ShapeMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    Ok(())
}

fn check_matrix_shape(
    field: &'static str,
    rows: &[Vec<f64>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), InstanceError> {
    check_len(field, rows, expected_rows)?;
    for row in rows {
        check_len(field, row, expected_cols)?;
    }
    Ok(())
}

fn check_matrix_shape_u32(
    field: &'static str,
    rows: &[Vec<u32>],
    expected_rows: usize,
    expected_cols: usize,
) -> Result<(), InstanceError> {
    check_len(field, rows, expected_rows)?;
    for row in rows {
        check_len(field, row, expected_cols)?;
    }
    Ok(())
}

fn check_non_negative<'a>(
    field: &'static str,
    values: impl Iterator<Item = &'a f64>,
) -> Result<(), InstanceError> {
    for (index, &value) in values.enumerate() {
        // NaN fails the comparison and is rejected here too.
        if !(value >= 0.0) {
            return Err(InstanceError::NegativeEntry {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}

fn check_positive<'a>(
    field: &'static str,
    values: impl Iterator<Item = &'a f64>,
) -> Result<(), InstanceError> {
    for (index, &value) in values.enumerate() {
        if !(value > 0.0) {
            return Err(InstanceError::NonPositiveDistance {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}
