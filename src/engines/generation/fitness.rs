use crate::error::{Result, StrevoError};
use crate::types::{FitnessScore, Individual};

/// Count positions where `individual` matches `target`.
pub fn score(individual: &Individual, target: &Individual) -> Result<FitnessScore> {
    if individual.len() != target.len() {
        return Err(StrevoError::LengthMismatch {
            expected: target.len(),
            actual: individual.len(),
        });
    }

    Ok(individual
        .as_bytes()
        .iter()
        .zip(target.as_bytes())
        .filter(|(a, b)| a == b)
        .count())
}

/// Score a whole population, recomputed from scratch.
pub fn score_population(population: &[Individual], target: &Individual) -> Result<Vec<FitnessScore>> {
    population.iter().map(|i| score(i, target)).collect()
}

/// Index of the highest score, first occurrence on ties.
pub fn best_index(fitness_scores: &[FitnessScore]) -> Option<usize> {
    let mut best: Option<(usize, FitnessScore)> = None;
    for (i, &s) in fitness_scores.iter().enumerate() {
        match best {
            Some((_, b)) if s <= b => {}
            _ => best = Some((i, s)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ind(s: &str) -> Individual {
        Individual::parse(s).unwrap()
    }

    #[test]
    fn test_score_counts_positional_matches() {
        let target = ind("abcd");
        assert_eq!(score(&ind("abcd"), &target).unwrap(), 4);
        assert_eq!(score(&ind("abzz"), &target).unwrap(), 2);
        assert_eq!(score(&ind("zzzz"), &target).unwrap(), 0);
        // Same letters, wrong order
        assert_eq!(score(&ind("dcba"), &target).unwrap(), 0);
    }

    #[test]
    fn test_score_length_mismatch() {
        let err = score(&ind("abc"), &ind("abcd")).unwrap_err();
        assert!(matches!(err, StrevoError::LengthMismatch { expected: 4, actual: 3 }));
    }

    #[test]
    fn test_best_index_prefers_first_on_ties() {
        assert_eq!(best_index(&[1, 3, 2, 3]), Some(1));
        assert_eq!(best_index(&[0, 0, 0]), Some(0));
        assert_eq!(best_index(&[]), None);
    }
}
