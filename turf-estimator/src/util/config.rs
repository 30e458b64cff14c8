use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Roll geometry and infill rates driving the estimator.
///
/// Defaults describe the standard 15ft landscape turf line; override for
/// other product lines (e.g. narrower putting-green rolls).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EstimatorConfig {
    /// Physical width of a manufactured roll. Turf can only be ordered in
    /// multiples of this width.
    pub roll_width_feet: f64,
    /// Longest single continuous piece obtainable from the supplier
    pub max_roll_length_feet: f64,
    /// Shortest piece the supplier will cut. Shorter remainders are
    /// over-ordered up to this length.
    pub min_cut_length_feet: f64,
    /// Infill application rate for standard turf (lbs per sqft)
    pub standard_infill_rate_lbs: f64,
    /// Infill application rate for pet turf (lbs per sqft)
    pub pet_infill_rate_lbs: f64,
    /// Weight of a single bag of infill (lbs)
    pub infill_bag_size_lbs: f64,
    /// Lower bound accepted for project width and length (feet)
    pub min_dimension_feet: f64,
    /// Upper bound accepted for project width and length (feet)
    pub max_dimension_feet: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            roll_width_feet: 15.0,
            max_roll_length_feet: 100.0,
            min_cut_length_feet: 10.0,
            standard_infill_rate_lbs: 1.0,
            pet_infill_rate_lbs: 1.5,
            infill_bag_size_lbs: 50.0,
            min_dimension_feet: 1.0,
            max_dimension_feet: 500.0,
        }
    }
}

impl EstimatorConfig {
    /// Checks the configuration is internally coherent.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.roll_width_feet.is_finite() && self.roll_width_feet > 0.0,
            "roll width must be positive"
        );
        ensure!(
            self.max_roll_length_feet.is_finite() && self.max_roll_length_feet > 0.0,
            "max roll length must be positive"
        );
        ensure!(
            self.min_cut_length_feet.is_finite() && self.min_cut_length_feet > 0.0,
            "min cut length must be positive"
        );
        ensure!(
            self.min_cut_length_feet <= self.max_roll_length_feet,
            "min cut length cannot exceed max roll length"
        );
        ensure!(
            self.standard_infill_rate_lbs > 0.0 && self.pet_infill_rate_lbs > 0.0,
            "infill rates must be positive"
        );
        ensure!(
            self.infill_bag_size_lbs > 0.0,
            "infill bag size must be positive"
        );
        ensure!(
            self.min_dimension_feet > 0.0 && self.min_dimension_feet.is_finite(),
            "dimension lower bound must be positive"
        );
        ensure!(
            self.min_dimension_feet <= self.max_dimension_feet,
            "dimension bounds must be ordered"
        );
        Ok(())
    }
}
