use crate::core::models::Point;
use crate::core::models::multiset::MultisetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input contains no distances")]
    EmptyInput,

    #[error("Largest distance is 0; at least two distinct points are required")]
    DegenerateWidth,

    #[error("Input has {len} distances, which is not n(n-1)/2 for any integer n >= 2")]
    InvalidShape { len: usize },

    #[error("Search budget of {limit} expanded states exhausted without a result")]
    BudgetExhausted { limit: u64 },

    #[error("Reconstructed points {points:?} do not reproduce the input distances")]
    VerificationFailed { points: Vec<Point> },

    #[error("Distance bookkeeping failed: {source}")]
    Multiset {
        #[from]
        source: MultisetError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::multiset::DistanceMultiset;

    fn remove_unchecked(list: &[u64]) -> Result<DistanceMultiset, EngineError> {
        Ok(DistanceMultiset::from_list(&[2, 3]).remove(list)?)
    }

    #[test]
    fn unchecked_removal_surfaces_as_a_multiset_error() {
        let err = remove_unchecked(&[3, 3]).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Multiset {
                source: MultisetError::Unavailable { distance: 3 }
            }
        ));
        assert!(err.to_string().starts_with("Distance bookkeeping failed"));
    }

    #[test]
    fn verification_failure_names_the_points() {
        let err = EngineError::VerificationFailed {
            points: vec![0, 3, 10],
        };
        assert_eq!(
            err.to_string(),
            "Reconstructed points [0, 3, 10] do not reproduce the input distances"
        );
    }
}
