use super::Distance;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MultisetError {
    #[error("Distance {distance} is not available for removal")]
    Unavailable { distance: Distance },
}

/// Remaining occurrence counts of the distances that have not yet been
/// attributed to a pair of placed points.
///
/// Entries whose count would drop to zero are removed from the map, so a key is
/// present exactly when at least one occurrence remains. `total` caches the sum
/// of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceMultiset {
    counts: BTreeMap<Distance, usize>,
    total: usize,
}

impl DistanceMultiset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_list(distances: &[Distance]) -> Self {
        let mut multiset = Self::new();
        for &distance in distances {
            *multiset.counts.entry(distance).or_insert(0) += 1;
            multiset.total += 1;
        }
        multiset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, distance: Distance) -> usize {
        self.counts.get(&distance).copied().unwrap_or(0)
    }

    pub fn contains(&self, distance: Distance) -> bool {
        self.counts.contains_key(&distance)
    }

    pub fn max_key(&self) -> Option<Distance> {
        self.counts.last_key_value().map(|(&distance, _)| distance)
    }

    /// Checks whether every element of `list` can be removed in sequence.
    ///
    /// Repeated values in `list` each consume one occurrence. Only the distinct
    /// values of `list` are tallied, so the check never copies the whole map.
    pub fn can_remove(&self, list: &[Distance]) -> bool {
        let mut demand: BTreeMap<Distance, usize> = BTreeMap::new();
        for &distance in list {
            let needed = demand.entry(distance).or_insert(0);
            *needed += 1;
            if *needed > self.count(distance) {
                return false;
            }
        }
        true
    }

    /// Returns a new multiset with one occurrence of each element of `list` removed.
    ///
    /// `self` is left untouched. Fails without producing a partial result when
    /// `can_remove(list)` would have been false.
    pub fn remove(&self, list: &[Distance]) -> Result<Self, MultisetError> {
        let mut next = self.clone();
        for &distance in list {
            let count = next
                .counts
                .get_mut(&distance)
                .ok_or(MultisetError::Unavailable { distance })?;
            *count -= 1;
            if *count == 0 {
                next.counts.remove(&distance);
            }
            next.total -= 1;
        }
        Ok(next)
    }

    /// Iterates over every remaining occurrence in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Distance> + '_ {
        self.counts
            .iter()
            .flat_map(|(&distance, &count)| std::iter::repeat_n(distance, count))
    }
}

impl FromIterator<Distance> for DistanceMultiset {
    fn from_iter<I: IntoIterator<Item = Distance>>(iter: I) -> Self {
        let distances: Vec<Distance> = iter.into_iter().collect();
        Self::from_list(&distances)
    }
}
