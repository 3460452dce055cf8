//! Unit tests for dr-core primitives.

#[cfg(test)]
mod geo {
    use std::collections::HashSet;

    use crate::{DrError, GeoCoord};

    fn c(lat: &str, lon: &str) -> GeoCoord {
        GeoCoord::new(lat, lon).unwrap()
    }

    #[test]
    fn zero_distance() {
        let p = c("34.0547000", "-118.4794734");
        assert!(p.distance_miles(&p) < 1e-12);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km ≈ 69.09 mi
        let a = c("34.0", "-118.0");
        let b = c("35.0", "-118.0");
        let km = a.distance_km(&b);
        assert!((km - 111.195).abs() < 0.01, "got {km}");
        let mi = a.distance_miles(&b);
        assert!((mi - 69.093).abs() < 0.01, "got {mi}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = c("34.0625329", "-118.4470263");
        let b = c("34.0685657", "-118.4489289");
        assert_eq!(a.distance_miles(&b), b.distance_miles(&a));
    }

    #[test]
    fn equality_is_textual() {
        let a = c("34.0", "-118.5");
        let b = c("34.00", "-118.5");
        assert_eq!(a.lat(), b.lat());
        assert_ne!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&c("34.0", "-118.5")));
        assert!(!set.contains(&b));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(c(" 34.1 ", "\t-118.2"), c("34.1", "-118.2"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            GeoCoord::new("north", "-118.2"),
            Err(DrError::InvalidCoordinate { .. })
        ));
        assert!(GeoCoord::new("inf", "0").is_err());
        assert!(GeoCoord::new("", "0").is_err());
    }

    #[test]
    fn from_degrees_round_trips_text() {
        let p = GeoCoord::from_degrees(34.25, -118.5);
        assert_eq!(p.lat_text(), "34.25");
        assert_eq!(p.lon_text(), "-118.5");
        assert_eq!(p, c("34.25", "-118.5"));
    }

    #[test]
    fn display() {
        assert_eq!(c("34.1", "-118.2").to_string(), "(34.1, -118.2)");
    }
}

#[cfg(test)]
mod segment {
    use crate::{GeoCoord, StreetSegment};

    #[test]
    fn reversed_swaps_endpoints_keeps_name() {
        let a = GeoCoord::new("34.0", "-118.0").unwrap();
        let b = GeoCoord::new("34.1", "-118.0").unwrap();
        let s = StreetSegment::new(a.clone(), b.clone(), "Westwood Blvd");
        let r = s.reversed();
        assert_eq!(r.start, b);
        assert_eq!(r.end, a);
        assert_eq!(r.name, "Westwood Blvd");
        assert_eq!(r.reversed(), s);
        assert_eq!(s.length_miles(), r.length_miles());
    }
}

#[cfg(test)]
mod config {
    use crate::{CourierConfig, ReorderPolicy, DEFAULT_MAX_LOAD_FACTOR};

    #[test]
    fn defaults() {
        let cfg = CourierConfig::default();
        assert_eq!(cfg.map.max_load_factor, DEFAULT_MAX_LOAD_FACTOR);
        assert_eq!(cfg.reorder, ReorderPolicy::TwoOpt);
    }

    #[test]
    fn policy_parse_and_display() {
        for p in [ReorderPolicy::Keep, ReorderPolicy::NearestNeighbor, ReorderPolicy::TwoOpt] {
            assert_eq!(p.to_string().parse::<ReorderPolicy>().unwrap(), p);
        }
        assert!("fastest".parse::<ReorderPolicy>().is_err());
    }
}
