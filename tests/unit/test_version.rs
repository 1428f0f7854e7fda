use std::cmp::Ordering;
use verbump::{compare, ConstructionError, ParseError, Version};

fn samples() -> Vec<Version> {
    let mut versions = Vec::new();
    for major in 0..3 {
        for minor in [0, 1, 10] {
            for patch in [0, 2, 9] {
                versions.push(Version::new(major, minor, patch));
            }
        }
    }
    versions
}

#[cfg(test)]
mod parsing_tests {
    use super::*;

    #[test]
    fn test_round_trip_through_string() {
        for (major, minor, patch) in [(0, 0, 0), (1, 2, 8), (10, 0, 3), (i64::MAX, 7, 0)] {
            let version = Version::from_components(major, minor, patch).unwrap();
            assert_eq!(Version::from_string(&version.to_string()).unwrap(), version);
        }
    }

    #[test]
    fn test_padding() {
        assert_eq!(Version::from_string("5").unwrap(), Version::new(5, 0, 0));
        assert_eq!(Version::from_string("5.2").unwrap(), Version::new(5, 2, 0));
    }

    #[test]
    fn test_truncation() {
        assert_eq!(Version::from_string("1.2.3.4").unwrap(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_rejection() {
        assert!(matches!(
            Version::from_string("1.2.x"),
            Err(ParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Version::from_string(""),
            Err(ParseError::InvalidComponent { .. })
        ));
        assert!(matches!(
            "-1.0.0".parse::<Version>(),
            Err(ParseError::NegativeComponent { .. })
        ));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Version::try_from("2.4.5").unwrap(), Version::new(2, 4, 5));
        assert_eq!(Version::try_from((2, 4, 5)).unwrap(), Version::new(2, 4, 5));
        assert!(matches!(
            Version::try_from((-2, 4, 5)),
            Err(ConstructionError::NegativeComponent { value: -2, .. })
        ));
    }
}

#[cfg(test)]
mod ordering_tests {
    use super::*;

    #[test]
    fn test_concrete_comparisons() {
        let a = Version::new(1, 2, 8);
        let b = Version::new(2, 4, 5);

        assert!(a < b);
        assert!(!(a > b));
        assert!(b > a);
        assert!(b == Version::new(2, 4, 5));
        assert!(b != a);
        assert!(b >= Version::new(2, 4, 5));
        assert!(b >= a);
        assert!(b <= Version::new(2, 4, 5));
        assert!(!(b <= a));
    }

    #[test]
    fn test_trichotomy() {
        let versions = samples();
        for x in &versions {
            for y in &versions {
                let holds = [x < y, x == y, x > y].iter().filter(|&&b| b).count();
                assert_eq!(holds, 1, "{x:?} vs {y:?}");
                assert_eq!(x <= y, !(x > y));
                assert_eq!(compare(x, y), compare(y, x).reverse());
            }
        }
    }

    #[test]
    fn test_transitivity() {
        let versions = samples();
        for x in &versions {
            for y in &versions {
                for z in &versions {
                    if x < y && y < z {
                        assert!(x < z, "{x:?} < {y:?} < {z:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_sorting() {
        let mut versions: Vec<Version> = ["2.4.5", "1.2.8", "1.10.0", "1.2", "0.9.9"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        versions.sort();

        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["0.9.9", "1.2.0", "1.2.8", "1.10.0", "2.4.5"]);
        assert_eq!(compare(&versions[0], &versions[4]), Ordering::Less);
    }
}

#[cfg(test)]
mod serde_tests {
    use super::*;

    #[test]
    fn test_serializes_as_canonical_string() {
        let json = serde_json::to_string(&Version::new(1, 2, 8)).unwrap();
        assert_eq!(json, "\"1.2.8\"");
    }

    #[test]
    fn test_deserializes_through_parser() {
        let version: Version = serde_json::from_str("\"3.1\"").unwrap();
        assert_eq!(version, Version::new(3, 1, 0));

        assert!(serde_json::from_str::<Version>("\"1.x\"").is_err());
    }
}
