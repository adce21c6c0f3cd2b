use crate::types::{random_symbol, FitnessScore, Individual, Population};
use rand::Rng;

/// Generate `size` random individuals of `length` symbols each.
pub fn generate_population<R: Rng + ?Sized>(size: usize, length: usize, rng: &mut R) -> Population {
    (0..size).map(|_| random_individual(length, rng)).collect()
}

pub fn random_individual<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Individual {
    Individual::from_symbols((0..length).map(|_| random_symbol(rng)).collect())
}

/// Roulette wheel selection: probability proportional to fitness.
///
/// Returns an index into the population. When every score is zero the wheel
/// has no area, so the pick falls back to a uniform choice.
///
/// # Panics
///
/// Panics if `fitness_scores` is empty.
pub fn roulette_selection<R: Rng + ?Sized>(fitness_scores: &[FitnessScore], rng: &mut R) -> usize {
    let total: FitnessScore = fitness_scores.iter().sum();

    if total == 0 {
        return rng.gen_range(0..fitness_scores.len());
    }

    let threshold = rng.gen_range(0..total);
    let mut sum = 0;
    for (i, &score) in fitness_scores.iter().enumerate() {
        sum += score;
        if sum > threshold {
            return i;
        }
    }

    // The last cumulative sum equals `total`, which is always above `threshold`.
    fitness_scores.len() - 1
}

/// Pick one individual with [`roulette_selection`].
pub fn select<'a, R: Rng + ?Sized>(
    population: &'a [Individual],
    fitness_scores: &[FitnessScore],
    rng: &mut R,
) -> &'a Individual {
    debug_assert_eq!(population.len(), fitness_scores.len());
    &population[roulette_selection(fitness_scores, rng)]
}

/// Single-point crossover: swap the tails after a random split point.
pub fn crossover<R: Rng + ?Sized>(
    parent1: &Individual,
    parent2: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let split = rng.gen_range(0..parent1.len());
    crossover_at(parent1, parent2, split)
}

/// Crossover at a fixed split point in `[0, len)`.
pub fn crossover_at(parent1: &Individual, parent2: &Individual, split: usize) -> (Individual, Individual) {
    debug_assert_eq!(parent1.len(), parent2.len());
    let (a, b) = (parent1.as_bytes(), parent2.as_bytes());

    let mut child1 = a[..split].to_vec();
    child1.extend_from_slice(&b[split..]);
    let mut child2 = b[..split].to_vec();
    child2.extend_from_slice(&a[split..]);

    (Individual::from_symbols(child1), Individual::from_symbols(child2))
}

/// Mutation: redraw each symbol with probability `mutation_rate`.
///
/// A redrawn symbol may coincide with the old one.
pub fn mutate<R: Rng + ?Sized>(individual: &Individual, mutation_rate: f64, rng: &mut R) -> Individual {
    let symbols = individual
        .as_bytes()
        .iter()
        .map(|&symbol| {
            if rng.gen::<f64>() < mutation_rate {
                random_symbol(rng)
            } else {
                symbol
            }
        })
        .collect();
    Individual::from_symbols(symbols)
}
