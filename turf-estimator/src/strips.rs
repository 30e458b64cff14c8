use crate::entities::{Cut, ProjectDimensions};
use crate::errors::EstimateError;
use crate::util::{EstimatorConfig, LENGTH_EPS};
use log::debug;

/// Number of roll-width strips needed to span the project width.
/// Always >= 1 for positive width: a project narrower than one roll still
/// consumes (and is priced as) a full roll width.
pub fn strips_across(width_feet: f64, config: &EstimatorConfig) -> usize {
    (width_feet / config.roll_width_feet).ceil() as usize
}

/// Precondition check shared by the strip generator and the summarizer:
/// both dimensions finite and within the configured bounds.
pub fn validate_dimensions(
    dims: ProjectDimensions,
    config: &EstimatorConfig,
) -> Result<(), EstimateError> {
    let (min, max) = (config.min_dimension_feet, config.max_dimension_feet);
    for (name, value) in [("width", dims.width_feet), ("length", dims.length_feet)] {
        if !value.is_finite() || value < min || value > max {
            return Err(EstimateError::InvalidDimension {
                name,
                value,
                min,
                max,
            });
        }
    }
    Ok(())
}

/// Decomposes the project into strips and cuttable lengths.
///
/// Each strip consumes the project length in chunks of at most
/// `max_roll_length_feet`. A positive remainder shorter than
/// `min_cut_length_feet` is over-ordered as one minimum-length cut, since the
/// supplier will not cut below that length. Cuts are emitted strip by strip,
/// in generation order within a strip.
pub fn generate_cuts(
    dims: ProjectDimensions,
    config: &EstimatorConfig,
) -> Result<Vec<Cut>, EstimateError> {
    validate_dimensions(dims, config)?;

    let n_strips = strips_across(dims.width_feet, config);
    let mut cuts = vec![];
    for strip_index in 0..n_strips {
        let mut remaining = dims.length_feet;
        // sub-epsilon residue is floating-point noise, not a remainder to over-order
        while remaining > LENGTH_EPS {
            let chunk = remaining.min(config.max_roll_length_feet);
            if chunk >= config.min_cut_length_feet {
                cuts.push(Cut::new(strip_index, chunk, config.roll_width_feet));
                remaining -= chunk;
            } else {
                // too short for the supplier to cut: over-order and close out the strip
                cuts.push(Cut::new(
                    strip_index,
                    config.min_cut_length_feet,
                    config.roll_width_feet,
                ));
                remaining = 0.0;
            }
        }
    }

    debug!(
        "[CUT] {}x{}ft project split into {} strip(s), {} cut(s)",
        dims.width_feet,
        dims.length_feet,
        n_strips,
        cuts.len()
    );

    Ok(cuts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, length: f64) -> ProjectDimensions {
        ProjectDimensions::new(width, length)
    }

    #[test]
    fn single_strip_single_cut() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(15.0, 100.0), &config).unwrap();
        assert_eq!(cuts, vec![Cut::new(0, 100.0, 15.0)]);
        assert_eq!(cuts[0].area_sq_ft, 1500.0);
    }

    #[test]
    fn width_spills_into_second_strip() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(20.0, 30.0), &config).unwrap();
        assert_eq!(cuts, vec![Cut::new(0, 30.0, 15.0), Cut::new(1, 30.0, 15.0)]);
    }

    #[test]
    fn long_strip_chunked_at_max_roll_length() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(15.0, 250.0), &config).unwrap();
        let lengths: Vec<f64> = cuts.iter().map(|c| c.length).collect();
        assert_eq!(lengths, vec![100.0, 100.0, 50.0]);
    }

    #[test]
    fn exact_multiple_of_max_roll_length_has_no_short_tail() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(15.0, 200.0), &config).unwrap();
        let lengths: Vec<f64> = cuts.iter().map(|c| c.length).collect();
        assert_eq!(lengths, vec![100.0, 100.0]);
    }

    #[test]
    fn short_remainder_is_over_ordered_to_min_cut() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(15.0, 105.0), &config).unwrap();
        let lengths: Vec<f64> = cuts.iter().map(|c| c.length).collect();
        assert_eq!(lengths, vec![100.0, 10.0]);
    }

    #[test]
    fn project_shorter_than_min_cut_is_over_ordered() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(15.0, 5.0), &config).unwrap();
        let lengths: Vec<f64> = cuts.iter().map(|c| c.length).collect();
        assert_eq!(lengths, vec![10.0]);
    }

    #[test]
    fn narrow_project_still_spans_one_full_strip() {
        let config = EstimatorConfig::default();
        assert_eq!(strips_across(8.0, &config), 1);
        let cuts = generate_cuts(dims(8.0, 30.0), &config).unwrap();
        assert_eq!(cuts, vec![Cut::new(0, 30.0, 15.0)]);
    }

    #[test]
    fn cuts_are_ordered_by_strip_index() {
        let config = EstimatorConfig::default();
        let cuts = generate_cuts(dims(40.0, 120.0), &config).unwrap();
        let strip_indices: Vec<usize> = cuts.iter().map(|c| c.strip_index).collect();
        assert_eq!(strip_indices, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn out_of_bounds_dimensions_are_rejected() {
        let config = EstimatorConfig::default();
        for (w, l) in [
            (0.0, 30.0),
            (-5.0, 30.0),
            (20.0, 0.5),
            (501.0, 30.0),
            (20.0, f64::NAN),
            (f64::INFINITY, 30.0),
        ] {
            let result = generate_cuts(dims(w, l), &config);
            assert!(
                matches!(result, Err(EstimateError::InvalidDimension { .. })),
                "{w}x{l} should be rejected"
            );
        }
    }

    #[test]
    fn bounds_come_from_the_config() {
        let config = EstimatorConfig {
            max_dimension_feet: 1000.0,
            ..EstimatorConfig::default()
        };
        assert!(generate_cuts(dims(501.0, 30.0), &config).is_ok());
    }
}
