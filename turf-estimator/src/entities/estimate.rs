use serde::{Deserialize, Serialize};

/// Requested extras accompanying an estimation call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct EstimateOptions {
    /// Pet turf takes a heavier infill application rate
    pub is_pet_turf: bool,
    /// Whether to include an infill plan in the estimate
    pub include_infill: bool,
    /// Product price per square foot in cents. When present the estimate
    /// carries a total price for the *ordered* area.
    pub price_per_sq_ft_cents: Option<u64>,
}

/// Customer-facing result of a project estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEstimate {
    /// Raw width x length, the coverage the customer asked for (sqft)
    pub project_area_sq_ft: f64,
    /// Area actually ordered: total cut length at full roll width (sqft)
    pub total_cut_area_sq_ft: f64,
    pub turf: TurfOrder,
    pub seaming: SeamingPlan,
    /// `None` when infill was not requested
    pub infill: Option<InfillPlan>,
    /// Human-readable advisories. Order is stable, generated fresh per call.
    pub notes: Vec<String>,
    /// Price of the ordered area in cents, when a unit price was supplied.
    /// Customers pay for what ships, not what they asked for.
    pub total_price_cents: Option<u64>,
}

/// The turf material order itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurfOrder {
    /// Number of physical rolls to order
    pub rolls_needed: usize,
    /// Sum of all cut lengths (feet)
    pub linear_feet_total: f64,
    /// Ordered area in excess of the project area, as a percentage of the
    /// project area. Rounded to the nearest 0.1.
    pub waste_percentage: f64,
}

/// Seams between adjacent roll-width strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeamingPlan {
    /// One seam per pair of adjacent strips
    pub seam_count: usize,
    /// Seam tape to order: one project length per seam (feet)
    pub seam_tape_feet: f64,
}

/// Infill to spread over the finished project.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfillPlan {
    pub pounds_needed: u64,
    pub bags_needed: u64,
}
