use std::cmp::Reverse;

use crate::entities::Cut;
use crate::util::LENGTH_EPS;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;

/// A physical roll being filled during packing.
/// Ephemeral: only lives for the duration of [`pack`].
#[derive(Debug, Clone, PartialEq)]
pub struct RollAssignment {
    /// Capacity left on this roll (feet)
    pub remaining_length: f64,
    /// Lengths of the cuts assigned to this roll, in placement order
    pub cut_lengths: Vec<f64>,
}

impl RollAssignment {
    fn open(max_roll_length_feet: f64) -> Self {
        Self {
            remaining_length: max_roll_length_feet,
            cut_lengths: vec![],
        }
    }

    fn fits(&self, length: f64) -> bool {
        length <= self.remaining_length + LENGTH_EPS
    }

    fn place(&mut self, length: f64) {
        self.remaining_length -= length;
        self.cut_lengths.push(length);
    }
}

/// Assigns cuts to physical rolls using first-fit decreasing: cuts sorted
/// descending by length (stable, ties keep generation order), each placed in
/// the first open roll with enough remaining capacity, a new roll opened when
/// none fits.
///
/// Always terminates and always succeeds for valid cuts. Deterministic: the
/// same cuts produce the same assignment, so pricing never fluctuates between
/// identical requests.
pub fn pack(cuts: &[Cut], max_roll_length_feet: f64) -> Vec<RollAssignment> {
    let mut rolls: Vec<RollAssignment> = vec![];

    let decreasing = cuts
        .iter()
        .sorted_by_key(|cut| Reverse(OrderedFloat(cut.length)));

    for cut in decreasing {
        match rolls.iter_mut().find(|roll| roll.fits(cut.length)) {
            Some(roll) => roll.place(cut.length),
            None => {
                let mut roll = RollAssignment::open(max_roll_length_feet);
                roll.place(cut.length);
                rolls.push(roll);
            }
        }
    }

    debug!(
        "[PACK] {} cut(s) packed into {} roll(s)",
        cuts.len(),
        rolls.len()
    );

    rolls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cuts_of(lengths: &[f64]) -> Vec<Cut> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &l)| Cut::new(i, l, 15.0))
            .collect()
    }

    #[test]
    fn no_cuts_no_rolls() {
        assert!(pack(&[], 100.0).is_empty());
    }

    #[test]
    fn two_short_cuts_share_a_roll() {
        let rolls = pack(&cuts_of(&[30.0, 30.0]), 100.0);
        assert_eq!(rolls.len(), 1);
        assert_eq!(rolls[0].cut_lengths, vec![30.0, 30.0]);
        assert_eq!(rolls[0].remaining_length, 40.0);
    }

    #[test]
    fn full_length_cuts_each_take_their_own_roll() {
        let rolls = pack(&cuts_of(&[100.0, 100.0, 50.0]), 100.0);
        assert_eq!(rolls.len(), 3);
        assert_eq!(rolls[2].cut_lengths, vec![50.0]);
    }

    #[test]
    fn decreasing_order_packs_tightly() {
        // sorted descending: 60 opens roll 1, 50 opens roll 2,
        // 40 tops up roll 1, 30 lands next to the 50
        let rolls = pack(&cuts_of(&[40.0, 60.0, 30.0, 50.0]), 100.0);
        assert_eq!(rolls.len(), 2);
        assert_eq!(rolls[0].cut_lengths, vec![60.0, 40.0]);
        assert_eq!(rolls[1].cut_lengths, vec![50.0, 30.0]);
    }

    #[test]
    fn cut_as_long_as_the_roll_fits_exactly() {
        let rolls = pack(&cuts_of(&[100.0]), 100.0);
        assert_eq!(rolls.len(), 1);
        assert_eq!(rolls[0].remaining_length, 0.0);
    }

    #[test]
    fn packing_is_deterministic() {
        let cuts = cuts_of(&[30.0, 70.0, 30.0, 55.0, 10.0]);
        assert_eq!(pack(&cuts, 100.0), pack(&cuts, 100.0));
    }

    #[test]
    fn never_beats_the_theoretical_minimum() {
        let cuts = cuts_of(&[80.0, 75.0, 60.0, 55.0, 40.0, 25.0, 10.0]);
        let total: f64 = cuts.iter().map(|c| c.length).sum();
        let lower_bound = (total / 100.0).ceil() as usize;
        assert!(pack(&cuts, 100.0).len() >= lower_bound);
    }
}
