use std::cmp::Ordering;

use verso_semver::{
    compare, format, format_range, greater_than_range, increment, less_than_range, max_satisfying,
    min_satisfying, parse, parse_range, satisfies, FormatError, IncrementOptions, ReleaseType,
    Version,
};

const FIXTURES: &[&str] = &[
    "0.0.0-0",
    "0.0.0",
    "0.0.1",
    "0.1.0",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.2.3",
    "1.10.0",
    "2.0.0-0",
    "2.0.0",
    "18446744073709551615.0.0",
];

fn versions() -> Vec<Version> {
    FIXTURES.iter().map(|v| parse(v).unwrap()).collect()
}

#[test]
fn test_format_parse_round_trip() {
    for input in FIXTURES.iter().chain(["1.2.3-x.7.z.92+build.meta", "1.0.0+0.build.1-rc.10000aaa-kk-0.1"].iter()) {
        let version = parse(input).unwrap();
        assert_eq!(parse(&format(&version)).unwrap(), version, "{}", input);
        assert_eq!(format(&version), *input);
    }
}

#[test]
fn test_fixtures_are_strictly_ordered() {
    let versions = versions();
    for window in versions.windows(2) {
        assert_eq!(compare(&window[0], &window[1]), Ordering::Less, "{} < {}", window[0], window[1]);
    }
}

#[test]
fn test_total_order() {
    let versions = versions();
    for a in &versions {
        assert_eq!(compare(a, a), Ordering::Equal);
        for b in &versions {
            assert_eq!(compare(a, b), compare(b, a).reverse(), "{} vs {}", a, b);
            for c in &versions {
                if compare(a, b) == Ordering::Less && compare(b, c) == Ordering::Less {
                    assert_eq!(compare(a, c), Ordering::Less, "{} < {} < {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_build_metadata_does_not_affect_precedence() {
    assert_eq!(compare(&parse("1.0.0+a").unwrap(), &parse("1.0.0+b").unwrap()), Ordering::Equal);
    assert_eq!(compare(&parse("1.0.0-rc.1+x").unwrap(), &parse("1.0.0-rc.1").unwrap()), Ordering::Equal);
}

#[test]
fn test_caret_boundary() {
    let range = parse_range("^1.2.3").unwrap();
    assert!(satisfies(&parse("1.2.3").unwrap(), &range));
    assert!(satisfies(&parse("1.9.9").unwrap(), &range));
    assert!(!satisfies(&parse("2.0.0").unwrap(), &range));
    assert!(!satisfies(&parse("1.2.2").unwrap(), &range));
}

#[test]
fn test_caret_narrows_below_one() {
    let range = parse_range("^0.2.3").unwrap();
    assert!(satisfies(&parse("0.2.9").unwrap(), &range));
    assert!(!satisfies(&parse("0.3.0").unwrap(), &range));

    let range = parse_range("^0.0.3").unwrap();
    assert!(satisfies(&parse("0.0.3").unwrap(), &range));
    assert!(!satisfies(&parse("0.0.4").unwrap(), &range));
}

#[test]
fn test_prerelease_visibility() {
    let range = parse_range(">=1.2.3-alpha <1.3.0").unwrap();
    assert!(satisfies(&parse("1.2.3-beta").unwrap(), &range));
    assert!(!satisfies(&parse("1.2.4-beta").unwrap(), &range));
    assert!(satisfies(&parse("1.2.4").unwrap(), &range));
}

#[test]
fn test_hyphen_range_format() {
    assert_eq!(format_range(&parse_range("1.2.3 - 2.3.4").unwrap()), ">=1.2.3 <=2.3.4");
    assert_eq!(format_range(&parse_range("1.2 - 2.3").unwrap()), ">=1.2.0 <2.4.0");
}

#[test]
fn test_invalid_input_is_rejected() {
    assert!(matches!(parse("not-a-version"), Err(FormatError::InvalidVersion { .. })));
    assert!(matches!(parse("1.2.3.4"), Err(FormatError::InvalidVersion { .. })));
    assert!(matches!(parse_range("not-a-version"), Err(FormatError::InvalidRange { .. })));
    assert!(matches!(parse(&"1".repeat(300)), Err(FormatError::TooLong { .. })));
}

#[test]
fn test_min_max_satisfying() {
    let versions: Vec<Version> = ["1.0.0", "1.5.0", "2.0.0", "2.1.0-beta", "0.9.0"]
        .iter()
        .map(|v| parse(v).unwrap())
        .collect();
    let range = parse_range("1.x || >=2.1.0-alpha <3").unwrap();

    assert_eq!(max_satisfying(&versions, &range).map(format), Some("2.1.0-beta".to_string()));
    assert_eq!(min_satisfying(&versions, &range).map(format), Some("1.0.0".to_string()));
}

#[test]
fn test_range_bounds_are_exclusive_of_satisfied_versions() {
    let range = parse_range("~1.2.0 || 3.x").unwrap();
    for version in versions() {
        if satisfies(&version, &range) {
            assert!(!greater_than_range(&version, &range), "{}", version);
            assert!(!less_than_range(&version, &range), "{}", version);
        }
    }
    assert!(greater_than_range(&parse("4.0.0").unwrap(), &range));
    assert!(less_than_range(&parse("1.1.9").unwrap(), &range));
    assert!(!greater_than_range(&parse("2.0.0").unwrap(), &range));
    assert!(!less_than_range(&parse("2.0.0").unwrap(), &range));
}

#[test]
fn test_increment_is_monotonic() {
    let options = IncrementOptions::default();
    for version in versions().iter().filter(|v| v.major() < 1000) {
        for release in [ReleaseType::Major, ReleaseType::Minor, ReleaseType::Patch, ReleaseType::PreRelease] {
            let next = increment(version, release, &options).unwrap();
            assert_eq!(compare(&next, version), Ordering::Greater, "{} {} -> {}", version, release, next);
        }
    }
}
