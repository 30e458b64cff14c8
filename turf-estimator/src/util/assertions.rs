use crate::entities::{Cut, ProjectEstimate};
use crate::util::{EstimatorConfig, LENGTH_EPS};
use float_cmp::approx_eq;

/// Checks that a finished estimate is consistent with the cuts it was
/// derived from. Run under `debug_assert!` by the summarizer.
pub fn estimate_matches_cuts(
    cuts: &[Cut],
    estimate: &ProjectEstimate,
    config: &EstimatorConfig,
) -> bool {
    let linear_feet: f64 = cuts.iter().map(|cut| cut.length).sum();
    assert!(approx_eq!(
        f64,
        linear_feet,
        estimate.turf.linear_feet_total,
        ulps = 4
    ));

    let n_strips = cuts
        .iter()
        .map(|cut| cut.strip_index)
        .max()
        .map_or(0, |max| max + 1);
    assert_eq!(estimate.seaming.seam_count, n_strips.saturating_sub(1));

    // packing can only do as well as or worse than the theoretical minimum
    let lower_bound = (linear_feet / config.max_roll_length_feet).ceil() as usize;
    assert!(estimate.turf.rolls_needed >= lower_bound.max(1));

    assert!(estimate.turf.waste_percentage >= 0.0);

    assert!(cuts.iter().all(|cut| {
        cut.length >= config.min_cut_length_feet - LENGTH_EPS
            && cut.length <= config.max_roll_length_feet + LENGTH_EPS
    }));

    true
}
