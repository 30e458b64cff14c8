use crate::entities::{
    EstimateOptions, InfillPlan, ProjectDimensions, ProjectEstimate, SeamingPlan, TurfOrder,
};
use crate::errors::EstimateError;
use crate::util::{EstimatorConfig, assertions};
use crate::{packing, strips};
use anyhow::Result;
use log::debug;

/// Turns project dimensions into a bill of materials: rolls to order, seams,
/// infill and advisory notes.
///
/// A pure, synchronous function of its inputs and configuration: cheap enough
/// to call unconditionally on every input change, safe on any thread.
pub struct Estimator {
    pub config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator with a validated configuration.
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Estimates the bill of materials for a rectangular project.
    ///
    /// The only failure mode is [`EstimateError::InvalidDimension`] on
    /// malformed input; everything past validation is total.
    pub fn estimate(
        &self,
        dims: ProjectDimensions,
        opts: &EstimateOptions,
    ) -> Result<ProjectEstimate, EstimateError> {
        let config = &self.config;
        let cuts = strips::generate_cuts(dims, config)?;

        let project_area_sq_ft = dims.area_sq_ft();
        let linear_feet_total: f64 = cuts.iter().map(|cut| cut.length).sum();
        let total_cut_area_sq_ft = linear_feet_total * config.roll_width_feet;

        let rolls_needed = packing::pack(&cuts, config.max_roll_length_feet).len();

        let waste_percentage = waste_percentage(total_cut_area_sq_ft, project_area_sq_ft);

        let strips_across = strips::strips_across(dims.width_feet, config);
        let seam_count = strips_across.saturating_sub(1);
        let seaming = SeamingPlan {
            seam_count,
            seam_tape_feet: seam_count as f64 * dims.length_feet,
        };

        let infill = opts
            .include_infill
            .then(|| infill_plan(project_area_sq_ft, opts.is_pet_turf, config));

        let notes = self.notes(
            dims,
            strips_across,
            seam_count,
            waste_percentage,
            total_cut_area_sq_ft,
        );

        // priced on the ordered area, waste included: customers pay for what ships
        let total_price_cents = opts
            .price_per_sq_ft_cents
            .map(|unit_price| (total_cut_area_sq_ft * unit_price as f64).round() as u64);

        let estimate = ProjectEstimate {
            project_area_sq_ft,
            total_cut_area_sq_ft,
            turf: TurfOrder {
                rolls_needed,
                linear_feet_total,
                waste_percentage,
            },
            seaming,
            infill,
            notes,
            total_price_cents,
        };

        debug_assert!(assertions::estimate_matches_cuts(&cuts, &estimate, config));

        debug!(
            "[EST] {}x{}ft: {} roll(s), {} linear ft, {}% waste, {} seam(s)",
            dims.width_feet,
            dims.length_feet,
            rolls_needed,
            linear_feet_total,
            waste_percentage,
            seam_count
        );

        Ok(estimate)
    }

    /// Advisory notes, in a stable order: roll-width reminder, seam note,
    /// then waste warnings when applicable.
    fn notes(
        &self,
        dims: ProjectDimensions,
        strips_across: usize,
        seam_count: usize,
        waste: f64,
        total_cut_area_sq_ft: f64,
    ) -> Vec<String> {
        let config = &self.config;
        let mut notes = vec![format!(
            "Turf is sold in {}ft wide rolls",
            config.roll_width_feet
        )];

        if seam_count > 0 {
            notes.push(format!("Your project requires {seam_count} seam(s)"));
        } else {
            notes.push("No seams needed — single roll coverage".to_string());
        }

        if waste > 15.0 {
            notes.push(format!(
                "High waste: you would be ordering {waste}% more turf than your project needs, consider adjusting your dimensions"
            ));
        }

        if waste > 10.0 {
            // widening to the nearest exact multiple of the roll width keeps the
            // same order but spreads it over a larger project
            let optimal_width = strips_across as f64 * config.roll_width_feet;
            let optimal_waste =
                waste_percentage(total_cut_area_sq_ft, optimal_width * dims.length_feet);
            if optimal_waste < waste {
                notes.push(format!(
                    "A {optimal_width}ft wide project would make full use of each roll and bring waste down to {optimal_waste}%"
                ));
            }
        }

        notes
    }
}

/// Ordered area in excess of the needed area, as a percentage of the needed
/// area. Rounded to the nearest 0.1.
fn waste_percentage(ordered_area_sq_ft: f64, needed_area_sq_ft: f64) -> f64 {
    if needed_area_sq_ft <= 0.0 {
        return 0.0;
    }
    let pct = (ordered_area_sq_ft - needed_area_sq_ft) / needed_area_sq_ft * 100.0;
    (pct * 10.0).round() / 10.0
}

fn infill_plan(area_sq_ft: f64, is_pet_turf: bool, config: &EstimatorConfig) -> InfillPlan {
    let rate = match is_pet_turf {
        true => config.pet_infill_rate_lbs,
        false => config.standard_infill_rate_lbs,
    };
    let pounds_needed = (area_sq_ft * rate).ceil() as u64;
    let bags_needed = (pounds_needed as f64 / config.infill_bag_size_lbs).ceil() as u64;
    InfillPlan {
        pounds_needed,
        bags_needed,
    }
}
