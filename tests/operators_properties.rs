//! Property-based tests for the genetic operators.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strevo::engines::generation::{
    crossover, crossover_at, generate_population, mutate, roulette_selection, score, select,
};
use strevo::Individual;

fn individual(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Individual> {
    proptest::string::string_regex(&format!("[a-z]{{{},{}}}", len.start(), len.end()))
        .expect("valid regex")
        .prop_map(|s| Individual::parse(&s).expect("generated from alphabet"))
}

fn parent_pair() -> impl Strategy<Value = (Individual, Individual)> {
    (1usize..40).prop_flat_map(|len| (individual(len..=len), individual(len..=len)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Score stays within [0, len] and a perfect match scores len.
    #[test]
    fn prop_score_bounded((a, b) in parent_pair()) {
        let s = score(&a, &b).unwrap();
        prop_assert!(s <= b.len());
        prop_assert_eq!(score(&b, &b).unwrap(), b.len());
        prop_assert_eq!(s, score(&b, &a).unwrap());
    }

    /// Roulette selection always lands on an individual with positive fitness.
    #[test]
    fn prop_roulette_selects_member(
        scores in prop::collection::vec(0usize..20, 1..50),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let total: usize = scores.iter().sum();
        for _ in 0..20 {
            let idx = roulette_selection(&scores, &mut rng);
            prop_assert!(idx < scores.len());
            if total > 0 {
                prop_assert!(scores[idx] > 0);
            }
        }
    }

    #[test]
    fn prop_select_returns_population_member(
        seed in any::<u64>(),
        size in 1usize..30,
        len in 1usize..12
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let population = generate_population(size, len, &mut rng);
        let target = population[rng.gen_range(0..size)].clone();
        let scores: Vec<usize> = population.iter().map(|i| score(i, &target).unwrap()).collect();
        let picked = select(&population, &scores, &mut rng);
        prop_assert!(population.contains(picked));
    }

    /// Children keep the parents' length and splice at the split point.
    #[test]
    fn prop_crossover_splices((p1, p2) in parent_pair(), split_seed in any::<usize>()) {
        let split = split_seed % p1.len();
        let (c1, c2) = crossover_at(&p1, &p2, split);

        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
        prop_assert_eq!(&c1.as_bytes()[..split], &p1.as_bytes()[..split]);
        prop_assert_eq!(&c1.as_bytes()[split..], &p2.as_bytes()[split..]);
        prop_assert_eq!(&c2.as_bytes()[..split], &p2.as_bytes()[..split]);
        prop_assert_eq!(&c2.as_bytes()[split..], &p1.as_bytes()[split..]);
    }

    #[test]
    fn prop_crossover_random_split_keeps_length((p1, p2) in parent_pair(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (c1, c2) = crossover(&p1, &p2, &mut rng);
        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
    }

    #[test]
    fn prop_mutate_zero_rate_is_identity(x in individual(1..=60), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(mutate(&x, 0.0, &mut rng), x);
    }

    #[test]
    fn prop_mutate_keeps_length_and_alphabet(
        x in individual(1..=60),
        rate in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = mutate(&x, rate, &mut rng);
        prop_assert_eq!(mutated.len(), x.len());
        prop_assert!(mutated.as_bytes().iter().all(u8::is_ascii_lowercase));
    }
}

#[test]
fn test_crossover_split_never_reaches_length() {
    // Split points are drawn from [0, len): a split at len would copy parents unchanged.
    let p1 = Individual::parse("aaaa").unwrap();
    let p2 = Individual::parse("bbbb").unwrap();
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..2000 {
        let (c1, _) = crossover(&p1, &p2, &mut rng);
        assert_ne!(c1, p1);
    }
}
