use crate::error::{LedgerError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// How many numbers a ticket (and the winning pick) holds.
pub const PICK_COUNT: usize = 5;
/// Smallest playable number.
pub const MIN_NUMBER: u8 = 1;
/// Largest playable number.
pub const MAX_NUMBER: u8 = 36;

/// A validated pick of 5 distinct numbers in [1,36], kept in ascending order.
///
/// Construction is the only validation point: anything holding a `NumberSet`
/// can rely on cardinality, range, and canonical ordering. Serializes as a
/// plain JSON array, which is also the on-disk column encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct NumberSet([u8; PICK_COUNT]);

impl NumberSet {
    /// Validate and canonicalize a pick. Uniqueness/cardinality is checked
    /// before range, so a duplicate out-of-range input reports the
    /// uniqueness rule.
    pub fn new(numbers: &[u8]) -> Result<Self> {
        if numbers.len() != PICK_COUNT {
            return Err(LedgerError::validation(format!(
                "expected exactly {} numbers, got {}",
                PICK_COUNT,
                numbers.len()
            )));
        }
        let distinct: BTreeSet<u8> = numbers.iter().copied().collect();
        if distinct.len() != PICK_COUNT {
            return Err(LedgerError::validation("numbers must be unique"));
        }
        if let Some(n) = distinct
            .iter()
            .find(|&&n| !(MIN_NUMBER..=MAX_NUMBER).contains(&n))
        {
            return Err(LedgerError::validation(format!(
                "number {} out of range {}-{}",
                n, MIN_NUMBER, MAX_NUMBER
            )));
        }

        // BTreeSet iterates ascending
        let mut picked = [0u8; PICK_COUNT];
        for (slot, n) in picked.iter_mut().zip(distinct) {
            *slot = n;
        }
        Ok(Self(picked))
    }

    /// Sample 5 distinct numbers uniformly without replacement from [1,36].
    /// Every 36-choose-5 combination is equally likely.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let pool: Vec<u8> = (MIN_NUMBER..=MAX_NUMBER).collect();
        let mut drawn: Vec<u8> = pool.choose_multiple(rng, PICK_COUNT).copied().collect();
        drawn.sort_unstable();

        let mut picked = [0u8; PICK_COUNT];
        picked.copy_from_slice(&drawn);
        Self(picked)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn contains(&self, n: u8) -> bool {
        self.0.contains(&n)
    }
}

impl fmt::Display for NumberSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

impl TryFrom<Vec<u8>> for NumberSet {
    type Error = LedgerError;

    fn try_from(numbers: Vec<u8>) -> Result<Self> {
        Self::new(&numbers)
    }
}

impl From<NumberSet> for Vec<u8> {
    fn from(set: NumberSet) -> Self {
        set.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn canonicalizes_to_ascending_order() {
        let set = NumberSet::new(&[36, 1, 14, 7, 22]).unwrap();
        assert_eq!(set.as_slice(), &[1, 7, 14, 22, 36]);
    }

    #[test]
    fn rejects_wrong_count() {
        let err = NumberSet::new(&[1, 2, 3, 4]).unwrap_err();
        assert!(err.to_string().contains("exactly 5"));

        let err = NumberSet::new(&[1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(err.to_string().contains("exactly 5"));
    }

    #[test]
    fn rejects_duplicates() {
        let err = NumberSet::new(&[1, 1, 2, 3, 4]).unwrap_err();
        assert!(err.to_string().contains("unique"));
    }

    #[test]
    fn rejects_out_of_range() {
        let err = NumberSet::new(&[1, 2, 3, 4, 37]).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = NumberSet::new(&[0, 2, 3, 4, 5]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn uniqueness_checked_before_range() {
        // duplicate AND out-of-range input reports the uniqueness rule
        let err = NumberSet::new(&[1, 1, 2, 3, 200]).unwrap_err();
        assert!(err.to_string().contains("unique"));
    }

    #[test]
    fn boundary_values_accepted() {
        let set = NumberSet::new(&[1, 2, 3, 4, 36]).unwrap();
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 36]);
    }

    #[test]
    fn json_round_trip_preserves_value_and_order() {
        let set = NumberSet::new(&[5, 4, 3, 2, 1]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,2,3,4,5]");

        let back: NumberSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn random_picks_are_valid_and_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let set = NumberSet::random(&mut rng);
            let slice = set.as_slice();
            assert!(slice.windows(2).all(|w| w[0] < w[1]));
            assert!(slice.iter().all(|&n| (1..=36).contains(&n)));
        }
    }

    #[test]
    fn random_picks_hit_every_number_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(7);
        let trials = 3000;
        let mut counts = [0u32; 37];
        for _ in 0..trials {
            for &n in NumberSet::random(&mut rng).as_slice() {
                counts[n as usize] += 1;
            }
        }

        // 15000 picks over 36 numbers, expectation ~417 each; bounds sit
        // several standard deviations out
        for n in 1..=36 {
            let c = counts[n];
            assert!(
                (300..=550).contains(&c),
                "number {} drawn {} times, outside plausible uniform bounds",
                n,
                c
            );
        }
    }
}
