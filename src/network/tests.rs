//! Tests for network generation and catalyst assignment.
//!
//! Most tests are run for a range of seeds, because the structure of a generated network
//! is random and the invariants must hold for every outcome.

use crate::AssemblyError;
use crate::network::{
    CatalystStrategy, NetworkConfig, assign_catalysts, build_network, build_reactions,
    catalyst_pool, catalyst_weights, random_split,
};
use crate::symbol::{canonical, join, symbol_len};
use crate::test_utils::{init_logger, mk_reaction, mk_reaction_set, seeded_rng};
use std::collections::{BTreeSet, HashMap};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// ========== RandomSplitter ==========

#[test]
fn test_random_split_produces_canonical_halves() {
    let mut rng = seeded_rng(1);
    for _ in 0..200 {
        let (left, right) = random_split("DCBAE", &mut rng);
        assert!(!left.is_empty() && !right.is_empty());
        assert_eq!(left, canonical(&left));
        assert_eq!(right, canonical(&right));
        assert_eq!(join(&left, &right), "ABCDE");
    }
}

#[test]
fn test_random_split_is_contiguous() {
    // Splitting `ABCD` by position can never produce the halves `AC` + `BD`.
    let mut rng = seeded_rng(2);
    let mut seen = BTreeSet::new();
    for _ in 0..500 {
        seen.insert(random_split("ABCD", &mut rng));
    }
    let expected: BTreeSet<(String, String)> = [("A", "BCD"), ("AB", "CD"), ("ABC", "D")]
        .into_iter()
        .map(|(l, r)| (l.to_string(), r.to_string()))
        .collect();
    assert_eq!(seen, expected);
}

// ========== ReactionTreeBuilder ==========

#[test]
fn test_single_element_has_no_reactions() {
    init_logger();
    let network = build_reactions("A", &mut seeded_rng(0));
    assert!(network.is_empty());
    assert_eq!(network.max_depth(), 1);
}

#[test]
fn test_two_elements_have_one_reaction() {
    init_logger();
    let network = build_reactions("AB", &mut seeded_rng(0));
    assert_eq!(network.reactions(), &[mk_reaction(0, 0, "A", "B", None)]);
    assert_eq!(network.max_depth(), 1);
}

#[test]
fn test_unsorted_final_product_is_canonicalised() {
    init_logger();
    let network = build_reactions("BA", &mut seeded_rng(0));
    assert_eq!(network.final_product(), "AB");
    assert_eq!(network.reactions(), &[mk_reaction(0, 0, "A", "B", None)]);

    for seed in 0..20 {
        let network = build_reactions("DCBA", &mut seeded_rng(seed));
        assert_eq!(network.final_product(), "ABCD");
        for reaction in network.reactions() {
            let joined = join(&reaction.constituent_1, &reaction.constituent_2);
            assert_eq!(reaction.product, joined);
        }
    }
}

#[test]
fn test_tree_invariants_hold_for_many_seeds() {
    init_logger();
    for seed in 0..100 {
        let network = build_reactions(ALPHABET, &mut seeded_rng(seed));

        // A binary tree with `n` leaves has `n - 1` inner nodes.
        assert_eq!(network.len(), ALPHABET.len() - 1);

        let roots = network.iter().filter(|r| r.product == ALPHABET).count();
        assert_eq!(
            roots, 1,
            "seed {seed}: exactly one reaction builds the final product"
        );

        for (index, reaction) in network.iter().enumerate() {
            assert_eq!(reaction.id, index);
            assert_eq!(
                reaction.product,
                join(&reaction.constituent_1, &reaction.constituent_2)
            );
            assert!(
                symbol_len(&reaction.product) >= 2,
                "leaves are never products"
            );
            assert!(reaction.layer < ALPHABET.len());
            assert!(reaction.catalyst.is_none());

            // Composite constituents are produced by an earlier reaction one layer deeper.
            for constituent in reaction.constituents() {
                if symbol_len(constituent) > 1 {
                    assert!(network.iter().any(|child| {
                        child.product == constituent
                            && child.id < reaction.id
                            && child.layer == reaction.layer + 1
                    }));
                }
            }
        }

        // The root reaction is recorded last.
        let last = network.reactions().last().unwrap();
        assert_eq!(last.product, ALPHABET);
        assert_eq!(last.layer, 0);
    }
}

#[test]
fn test_identical_halves_are_built_independently() {
    init_logger();
    let mut found_duplicate = false;
    for seed in 0..50 {
        let network = build_reactions("AAAA", &mut seeded_rng(seed));
        assert_eq!(network.len(), 3);
        let aa = network.iter().filter(|r| r.product == "AA").count();
        if aa == 2 {
            found_duplicate = true;
        }
    }
    assert!(
        found_duplicate,
        "`AAAA` split into `AA` + `AA` should appear"
    );
}

#[test]
fn test_same_seed_gives_same_network() {
    init_logger();
    let config =
        NetworkConfig::new("ABCDEFGHIJKL", 0.6, CatalystStrategy::WeightedReuse).unwrap();
    for seed in [0, 7, 42, 1234] {
        let first = build_network(&config, &mut seeded_rng(seed));
        let second = build_network(&config, &mut seeded_rng(seed));
        assert_eq!(first, second);
    }
}

// ========== CatalystAssigner ==========

#[test]
fn test_catalyst_pool_contains_elements_and_products() {
    let network = mk_reaction_set(
        "ABC",
        vec![
            mk_reaction(0, 1, "A", "B", None),
            mk_reaction(1, 0, "AB", "C", None),
        ],
    );
    assert_eq!(catalyst_pool(&network), vec!["A", "AB", "ABC", "B", "C"]);
}

#[test]
fn test_catalyst_weights_are_normalised_lengths() {
    let pool = vec!["A".to_string(), "AB".to_string(), "ABC".to_string()];
    let weights = catalyst_weights(&pool);
    assert!((weights["A"] - 1.0 / 6.0).abs() < 1e-12);
    assert!((weights["AB"] - 2.0 / 6.0).abs() < 1e-12);
    assert!((weights["ABC"] - 3.0 / 6.0).abs() < 1e-12);
    assert!((weights.values().sum::<f64>() - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_probability_assigns_nothing() {
    init_logger();
    for strategy in [
        CatalystStrategy::Random,
        CatalystStrategy::Weighted,
        CatalystStrategy::WeightedReuse,
    ] {
        let config = NetworkConfig::new(ALPHABET, 0.0, strategy).unwrap();
        let network = build_network(&config, &mut seeded_rng(3));
        assert!(network.iter().all(|r| r.catalyst.is_none()));
    }
}

#[test]
fn test_full_probability_with_reuse_catalyses_everything() {
    init_logger();
    let config = NetworkConfig::new(ALPHABET, 1.0, CatalystStrategy::WeightedReuse).unwrap();
    for seed in 0..20 {
        let network = build_network(&config, &mut seeded_rng(seed));
        assert!(network.iter().all(|r| r.catalyst.is_some()));
    }
}

#[test]
fn test_catalyst_is_never_a_constituent_and_always_in_pool() {
    init_logger();
    for strategy in [
        CatalystStrategy::Random,
        CatalystStrategy::Weighted,
        CatalystStrategy::WeightedReuse,
    ] {
        let config = NetworkConfig::new("ABCDEFGHIJ", 0.8, strategy).unwrap();
        for seed in 0..30 {
            let network = build_network(&config, &mut seeded_rng(seed));
            let pool: BTreeSet<String> = catalyst_pool(&network).into_iter().collect();
            for reaction in &network {
                if let Some(catalyst) = &reaction.catalyst {
                    assert!(pool.contains(catalyst));
                    assert_ne!(catalyst, &reaction.constituent_1);
                    assert_ne!(catalyst, &reaction.constituent_2);
                }
            }
        }
    }
}

#[test]
fn test_strategies_without_reuse_never_repeat_a_catalyst() {
    init_logger();
    for strategy in [CatalystStrategy::Random, CatalystStrategy::Weighted] {
        let config = NetworkConfig::new(ALPHABET, 1.0, strategy).unwrap();
        for seed in 0..30 {
            let network = build_network(&config, &mut seeded_rng(seed));
            let catalysts: Vec<&String> = network
                .iter()
                .filter_map(|r| r.catalyst.as_ref())
                .collect();
            let distinct: BTreeSet<&String> = catalysts.iter().copied().collect();
            assert_eq!(
                catalysts.len(),
                distinct.len(),
                "seed {seed}, strategy {strategy}"
            );
        }
    }
}

#[test]
fn test_strategy_with_reuse_repeats_catalysts() {
    init_logger();
    // With 25 reactions and reuse allowed, some catalyst is eventually picked twice.
    let config = NetworkConfig::new(ALPHABET, 1.0, CatalystStrategy::WeightedReuse).unwrap();
    let repeated = (0..30).any(|seed| {
        let network = build_network(&config, &mut seeded_rng(seed));
        let catalysts: Vec<&String> = network
            .iter()
            .filter_map(|r| r.catalyst.as_ref())
            .collect();
        let distinct: BTreeSet<&String> = catalysts.iter().copied().collect();
        distinct.len() < catalysts.len()
    });
    assert!(repeated);
}

#[test]
fn test_exhausted_pool_leaves_reaction_uncatalysed() {
    init_logger();
    // Pool is {A, AB, B}; both reactions exclude A and B, so only one of them can get AB.
    let mut network = mk_reaction_set(
        "AB",
        vec![
            mk_reaction(0, 0, "A", "B", None),
            mk_reaction(1, 0, "A", "B", None),
        ],
    );
    assign_catalysts(
        &mut network,
        1.0,
        CatalystStrategy::Random,
        &mut seeded_rng(0),
    );
    assert_eq!(network.reactions()[0].catalyst.as_deref(), Some("AB"));
    assert_eq!(network.reactions()[1].catalyst, None);

    assign_catalysts(
        &mut network,
        1.0,
        CatalystStrategy::WeightedReuse,
        &mut seeded_rng(0),
    );
    assert!(network.iter().all(|r| r.catalyst.as_deref() == Some("AB")));
}

#[test]
fn test_weighted_strategies_prefer_longer_symbols() {
    init_logger();
    // Eligible catalysts for `A + B` are {ABC, AB, C} with weights 3 : 2 : 1. Reaction #0
    // is assigned first, so nothing is used yet and both weighted strategies see all three.
    let template = mk_reaction_set(
        "ABC",
        vec![
            mk_reaction(0, 1, "A", "B", None),
            mk_reaction(1, 0, "AB", "C", None),
        ],
    );
    for strategy in [CatalystStrategy::Weighted, CatalystStrategy::WeightedReuse] {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut rng = seeded_rng(11);
        for _ in 0..3000 {
            let mut network = template.clone();
            assign_catalysts(&mut network, 1.0, strategy, &mut rng);
            let catalyst = network.reactions()[0].catalyst.clone().unwrap();
            *counts.entry(catalyst).or_insert(0) += 1;
        }
        assert_eq!(counts.keys().len(), 3, "strategy {strategy}");
        assert!(
            counts["ABC"] > counts["AB"],
            "strategy {strategy}: {counts:?}"
        );
        assert!(
            counts["AB"] > counts["C"],
            "strategy {strategy}: {counts:?}"
        );
    }
}

#[test]
fn test_weighted_strategy_never_reuses_a_catalyst() {
    init_logger();
    // `ABC` is eligible for both reactions; only the reusing strategy may pick it twice.
    let template = mk_reaction_set(
        "ABC",
        vec![
            mk_reaction(0, 1, "A", "B", None),
            mk_reaction(1, 0, "AB", "C", None),
        ],
    );
    let mut reused = 0;
    for seed in 0..50 {
        for strategy in [CatalystStrategy::Weighted, CatalystStrategy::WeightedReuse] {
            let mut network = template.clone();
            let mut rng = seeded_rng(seed);
            assign_catalysts(&mut network, 1.0, strategy, &mut rng);
            let first = network.reactions()[0].catalyst.clone();
            let second = network.reactions()[1].catalyst.clone();
            assert!(first.is_some() && second.is_some());
            if first == second {
                assert_eq!(strategy, CatalystStrategy::WeightedReuse, "seed {seed}");
                reused += 1;
            }
        }
    }
    assert!(reused > 0);
}

// ========== NetworkConfig ==========

#[test]
fn test_config_rejects_invalid_input() {
    assert!(matches!(
        NetworkConfig::new("", 0.5, CatalystStrategy::Random),
        Err(AssemblyError::EmptyProduct)
    ));
    assert!(matches!(
        NetworkConfig::new("AB", 1.5, CatalystStrategy::Random),
        Err(AssemblyError::InvalidProbability(_))
    ));
    assert!(matches!(
        NetworkConfig::new("AB", -0.1, CatalystStrategy::Random),
        Err(AssemblyError::InvalidProbability(_))
    ));
    assert!(matches!(
        NetworkConfig::new("AB", f64::NAN, CatalystStrategy::Random),
        Err(AssemblyError::InvalidProbability(_))
    ));
}

#[test]
fn test_config_canonicalises_final_product() {
    let config = NetworkConfig::new("DCBA", 0.0, CatalystStrategy::Random).unwrap();
    assert_eq!(config.final_product, "ABCD");
    let network = build_network(&config, &mut seeded_rng(5));
    assert_eq!(network.final_product(), "ABCD");
    assert_eq!(network.reactions().last().unwrap().product, "ABCD");
}

#[test]
fn test_strategy_parsing() {
    assert_eq!(
        "0".parse::<CatalystStrategy>().unwrap(),
        CatalystStrategy::Random
    );
    assert_eq!(
        "weighted".parse::<CatalystStrategy>().unwrap(),
        CatalystStrategy::Weighted
    );
    assert_eq!(
        CatalystStrategy::try_from(2).unwrap(),
        CatalystStrategy::WeightedReuse
    );
    assert!(matches!(
        "3".parse::<CatalystStrategy>(),
        Err(AssemblyError::UnknownStrategy(_))
    ));
    assert!(matches!(
        CatalystStrategy::try_from(7),
        Err(AssemblyError::UnknownStrategy(_))
    ));
}
