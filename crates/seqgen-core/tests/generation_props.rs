use proptest::prelude::*;
use seqgen_core::{
    FixedIndex, FrequencyTally, MappingField, MappingRecord, MappingStore, RandomIndex,
    SequenceGenerator,
};

fn store_with_targets(targets: &[String]) -> MappingStore {
    let mut store = MappingStore::new();
    for target in targets {
        let id = store.add();
        store.update(id, MappingField::Target, target.clone());
    }
    store
}

#[test]
fn scenario_fixed_first_index_on_seed_store() {
    let store = MappingStore::seeded();
    let mut generator = SequenceGenerator::new(FixedIndex::new(0));

    let result = generator.generate(&store, 10).unwrap().unwrap();
    assert_eq!(result.entries(), vec![MappingRecord::new(1, "1", "45"); 10].as_slice());

    let tally = FrequencyTally::compute(&result);
    assert_eq!(tally.len(), 1);
    let entry = tally.get("45").unwrap();
    assert_eq!(entry.count, 10);
    assert_eq!(entry.percent_label(), "100.0");
}

#[test]
fn empty_store_generation_mutates_nothing() {
    let store = MappingStore::new();
    let before = store.clone();
    let mut generator = SequenceGenerator::new(RandomIndex::seeded(1));

    assert_eq!(generator.generate(&store, 25), Ok(None));
    assert_eq!(store, before);
}

#[test]
fn draws_are_roughly_uniform() {
    let store = MappingStore::seeded();
    let mut generator = SequenceGenerator::new(RandomIndex::seeded(2024));

    let result = generator.generate(&store, 20_000).unwrap().unwrap();
    let tally = FrequencyTally::compute(&result);

    assert_eq!(tally.len(), 4);
    for entry in &tally {
        // expected 25% each
        assert!((entry.percent - 25.0).abs() < 2.0, "{} drawn {}%", entry.key, entry.percent);
    }
}

proptest! {
    #[test]
    fn prop_generation_length_and_membership(
        targets in proptest::collection::vec("[a-c]{0,2}", 1..8),
        length in 0usize..200,
        seed in any::<u64>(),
    ) {
        let store = store_with_targets(&targets);
        let mut generator = SequenceGenerator::new(RandomIndex::seeded(seed));

        let result = generator.generate(&store, length).unwrap().unwrap();
        prop_assert_eq!(result.len(), length);
        for entry in &result {
            prop_assert!(store.iter().any(|r| r == entry));
        }
    }

    #[test]
    fn prop_frequency_conservation(
        targets in proptest::collection::vec("[a-c]{0,2}", 1..8),
        length in 1usize..200,
        seed in any::<u64>(),
    ) {
        let store = store_with_targets(&targets);
        let mut generator = SequenceGenerator::new(RandomIndex::seeded(seed));
        let result = generator.generate(&store, length).unwrap().unwrap();

        let tally = FrequencyTally::compute(&result);
        let sum: usize = tally.iter().map(|e| e.count).sum();
        prop_assert_eq!(sum, length);
        prop_assert_eq!(tally.total(), length);

        for entry in &tally {
            #[allow(clippy::cast_precision_loss)]
            let exact = 100.0 * entry.count as f64 / length as f64;
            prop_assert!((entry.percent - exact).abs() <= 0.05 + 1e-9);
            prop_assert!(entry.count <= tally.max_count());
            prop_assert!(entry.bar_ratio > 0.0 && entry.bar_ratio <= 1.0);
        }
    }
}
