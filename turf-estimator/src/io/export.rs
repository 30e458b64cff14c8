use crate::entities::{ProjectDimensions, ProjectEstimate};
use crate::io::ext_repr::{
    ExtCartLineItem, ExtDimensions, ExtInfillPlan, ExtProjectEstimate, ExtSeamingPlan, ExtTurfOrder,
};

/// Exports an estimate out of the library.
pub fn export(estimate: &ProjectEstimate) -> ExtProjectEstimate {
    ExtProjectEstimate {
        project_area_sq_ft: estimate.project_area_sq_ft,
        total_cut_area_sq_ft: estimate.total_cut_area_sq_ft,
        turf: ExtTurfOrder {
            rolls_needed: estimate.turf.rolls_needed as u64,
            linear_feet_total: estimate.turf.linear_feet_total,
            waste_percentage: estimate.turf.waste_percentage,
        },
        seaming: ExtSeamingPlan {
            seam_count: estimate.seaming.seam_count as u64,
            seam_tape_feet: estimate.seaming.seam_tape_feet,
        },
        infill: estimate.infill.map(|infill| ExtInfillPlan {
            pounds_needed: infill.pounds_needed,
            bags_needed: infill.bags_needed,
        }),
        notes: estimate.notes.clone(),
        total_price_cents: estimate.total_price_cents,
    }
}

/// Shapes an estimate into the line-item contract checkout stores as
/// metadata on an order line. Quantity and price cover the ordered area.
pub fn to_cart_line_item(
    estimate: &ProjectEstimate,
    dims: ProjectDimensions,
    title: &str,
    unit_price_cents: Option<u64>,
) -> ExtCartLineItem {
    ExtCartLineItem {
        title: title.to_string(),
        dimensions: ExtDimensions {
            width_feet: dims.width_feet,
            length_feet: dims.length_feet,
            square_feet: dims.area_sq_ft(),
        },
        quantity_sq_ft: estimate.total_cut_area_sq_ft,
        unit_price_cents,
        total_price_cents: estimate.total_price_cents,
    }
}
