use serde::{Deserialize, Serialize};

/// External representation of a [`ProjectEstimate`](crate::entities::ProjectEstimate),
/// shaped for the storefront JSON boundary (camelCase field names).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtProjectEstimate {
    /// The coverage the customer asked for (sqft)
    pub project_area_sq_ft: f64,
    /// The area actually ordered, at full roll width (sqft)
    pub total_cut_area_sq_ft: f64,
    pub turf: ExtTurfOrder,
    pub seaming: ExtSeamingPlan,
    /// `null` when infill was not requested
    pub infill: Option<ExtInfillPlan>,
    /// Advisory notes, in display order
    pub notes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_cents: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtTurfOrder {
    pub rolls_needed: u64,
    pub linear_feet_total: f64,
    pub waste_percentage: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtSeamingPlan {
    pub seam_count: u64,
    pub seam_tape_feet: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtInfillPlan {
    pub pounds_needed: u64,
    pub bags_needed: u64,
}

/// Cart line-item metadata consumed by checkout and read back by
/// order-display code to label turf line items.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtCartLineItem {
    /// Label rendered on the order line ("Cut #1", ...)
    pub title: String,
    pub dimensions: ExtDimensions,
    /// Line-item quantity expressed in ordered square feet rather than units
    pub quantity_sq_ft: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price_cents: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_cents: Option<u64>,
}

/// The dimensions block stored as metadata on an order line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtDimensions {
    pub width_feet: f64,
    pub length_feet: f64,
    /// Requested coverage (width x length)
    pub square_feet: f64,
}
