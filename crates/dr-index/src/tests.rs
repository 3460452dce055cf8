//! Unit tests for dr-index.

#[cfg(test)]
mod helpers {
    use crate::KeyHasher;

    /// Hashes a `u64` key to itself so bucket placement is predictable.
    #[derive(Default, Clone)]
    pub struct IdentityHasher;

    impl KeyHasher<u64> for IdentityHasher {
        fn hash_key(&self, key: &u64) -> u64 {
            *key
        }
    }

    /// Sends every key to the same bucket.
    #[derive(Default, Clone)]
    pub struct CollidingHasher;

    impl KeyHasher<u64> for CollidingHasher {
        fn hash_key(&self, _key: &u64) -> u64 {
            7
        }
    }
}

// ── Construction & reset ──────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use crate::{ExpandableMap, DEFAULT_BUCKET_COUNT, DEFAULT_MAX_LOAD_FACTOR};

    #[test]
    fn starts_empty_with_eight_buckets() {
        let m: ExpandableMap<u64, u64> = ExpandableMap::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.bucket_count(), DEFAULT_BUCKET_COUNT);
        assert_eq!(m.max_load_factor(), DEFAULT_MAX_LOAD_FACTOR);
    }

    #[test]
    fn default_matches_map_config() {
        assert_eq!(dr_core::MapConfig::default().max_load_factor, DEFAULT_MAX_LOAD_FACTOR);
        let m: ExpandableMap<u64, u64> = ExpandableMap::default();
        assert_eq!(m.max_load_factor(), dr_core::MapConfig::default().max_load_factor);
    }

    #[test]
    fn unusable_load_factor_falls_back() {
        for lf in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let m: ExpandableMap<u64, u64> = ExpandableMap::with_max_load_factor(lf);
            assert_eq!(m.max_load_factor(), DEFAULT_MAX_LOAD_FACTOR, "lf = {lf}");
        }
        let m: ExpandableMap<u64, u64> = ExpandableMap::with_max_load_factor(0.75);
        assert_eq!(m.max_load_factor(), 0.75);
    }

    #[test]
    fn reset_restores_defaults_keeps_load_factor() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::with_max_load_factor(1.0);
        for k in 0..100 {
            m.associate(k, k);
        }
        assert!(m.bucket_count() > DEFAULT_BUCKET_COUNT);

        m.reset();
        assert!(m.is_empty());
        assert_eq!(m.bucket_count(), DEFAULT_BUCKET_COUNT);
        assert_eq!(m.max_load_factor(), 1.0);
        assert_eq!(m.find(&5), None);

        // Usable again after reset.
        m.associate(5, 50);
        assert_eq!(m.find(&5), Some(&50));
    }
}

// ── associate / find ──────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use super::helpers::{CollidingHasher, IdentityHasher};
    use crate::ExpandableMap;

    #[test]
    fn miss_does_not_insert() {
        let mut m: ExpandableMap<String, i32> = ExpandableMap::new();
        assert!(m.find(&"absent".to_owned()).is_none());
        assert!(m.find_mut(&"absent".to_owned()).is_none());
        assert!(m.is_empty());
    }

    #[test]
    fn update_overwrites_in_place() {
        let mut m: ExpandableMap<String, i32> = ExpandableMap::new();
        m.associate("a".into(), 1);
        m.associate("a".into(), 2);
        assert_eq!(m.len(), 1);
        assert_eq!(m.find(&"a".to_owned()), Some(&2));
    }

    #[test]
    fn find_mut_edits_stored_value() {
        let mut m: ExpandableMap<u64, Vec<u32>> = ExpandableMap::new();
        m.associate(1, vec![10]);
        m.find_mut(&1).unwrap().push(11);
        assert_eq!(m.find(&1), Some(&vec![10, 11]));
    }

    #[test]
    fn chain_keeps_insertion_order() {
        let mut m: ExpandableMap<u64, &str, CollidingHasher> =
            ExpandableMap::with_max_load_factor(100.0);
        m.associate(3, "c");
        m.associate(1, "a");
        m.associate(2, "b");
        let keys: Vec<u64> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![3, 1, 2]);
        assert_eq!(m.find(&1), Some(&"a"));
    }

    #[test]
    fn keys_land_in_hash_mod_bucket() {
        let mut m: ExpandableMap<u64, (), IdentityHasher> =
            ExpandableMap::with_max_load_factor(4.0);
        // 8 buckets; 1 and 9 share bucket 1, 2 sits alone in bucket 2.
        m.associate(9, ());
        m.associate(2, ());
        m.associate(1, ());
        let keys: Vec<u64> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![9, 1, 2]);
    }
}

// ── Growth ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod growth {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::helpers::IdentityHasher;
    use crate::{ExpandableMap, DEFAULT_BUCKET_COUNT, MIN_MAX_LOAD_FACTOR};

    #[test]
    fn grows_lazily_at_load_factor() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::new();
        // 8 buckets × 0.5 = 4 items before the first doubling.
        for k in 0..4 {
            m.associate(k, k);
        }
        assert_eq!(m.bucket_count(), 8);
        m.associate(4, 4);
        assert_eq!(m.bucket_count(), 16);
        // Updating an existing key never grows.
        for _ in 0..10 {
            m.associate(0, 99);
        }
        assert_eq!(m.bucket_count(), 16);
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn rehash_moves_keys_to_new_buckets() {
        let mut m: ExpandableMap<u64, (), IdentityHasher> =
            ExpandableMap::with_max_load_factor(0.5);
        for k in [1, 9, 17, 25] {
            m.associate(k, ());
        }
        // Fifth insert doubles to 16: 1 and 17 → bucket 1, 9 and 25 → bucket 9.
        m.associate(2, ());
        assert_eq!(m.bucket_count(), 16);
        let keys: Vec<u64> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 17, 2, 9, 25]);
    }

    #[test]
    fn growth_preserves_all_associations() {
        let mut rng = SmallRng::seed_from_u64(7);
        let keys: Vec<u64> = (0..5_000).map(|_| rng.r#gen::<u64>()).collect();

        let mut m: ExpandableMap<u64, u64> = ExpandableMap::new();
        for &k in &keys {
            m.associate(k, k.wrapping_mul(31));
        }

        let mut distinct = keys.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(m.len(), distinct.len());
        assert!(m.len() as f64 <= m.max_load_factor() * m.bucket_count() as f64);
        for &k in &keys {
            assert_eq!(m.find(&k), Some(&k.wrapping_mul(31)));
        }
    }

    #[test]
    fn small_load_factor_is_raised_to_minimum() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::with_max_load_factor(0.01);
        assert_eq!(m.max_load_factor(), MIN_MAX_LOAD_FACTOR);
        for k in 0..50 {
            m.associate(k, k);
        }
        assert_eq!(m.len(), 50);
        // 50 entries at 1/8 per bucket: 512 buckets (256 only holds 32).
        assert_eq!(m.bucket_count(), 512);
        for k in 0..50 {
            assert_eq!(m.find(&k), Some(&k));
        }
    }

    #[test]
    fn tiny_load_factor_grows_one_doubling_at_a_time() {
        let mut m: ExpandableMap<u64, u64> = ExpandableMap::with_max_load_factor(1e-12);
        m.associate(1, 1);
        assert_eq!(m.bucket_count(), DEFAULT_BUCKET_COUNT);

        let mut prev = m.bucket_count();
        for k in 2..=1_000 {
            m.associate(k, k);
            let now = m.bucket_count();
            assert!(now == prev || now == prev * 2, "{prev} -> {now}");
            prev = now;
        }
        assert_eq!(m.len(), 1_000);
        assert_eq!(m.bucket_count(), 8192);
    }
}
