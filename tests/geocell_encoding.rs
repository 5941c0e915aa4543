use index_derive::geocell::{encode_geocell, is_geocell, DEFAULT_PRECISION, GEOCELL_ALPHABET};

#[test]
fn known_cells_encode_exactly() {
    assert_eq!(encode_geocell(42.6, -5.6, 5), "ezs42");
    assert_eq!(encode_geocell(57.64911, 10.40744, 11), "u4pruydqqvj");
    assert_eq!(encode_geocell(35.681236, 139.767125, DEFAULT_PRECISION), "xn76urx6606p");
}

#[test]
fn default_precision_is_twelve_symbols() {
    assert_eq!(DEFAULT_PRECISION, 12);
    assert_eq!(encode_geocell(34.9671, 135.7727, DEFAULT_PRECISION).len(), 12);
}

#[test]
fn midpoint_goes_to_lower_half() {
    // 0 equals every first midpoint, then stays above the rest
    assert_eq!(encode_geocell(0.0, 0.0, DEFAULT_PRECISION), "7zzzzzzzzzzz");
}

#[test]
fn extreme_corners() {
    assert_eq!(encode_geocell(-90.0, -180.0, DEFAULT_PRECISION), "000000000000");
    assert_eq!(encode_geocell(90.0, 180.0, DEFAULT_PRECISION), "zzzzzzzzzzzz");
}

#[test]
fn zero_precision_is_empty() {
    assert_eq!(encode_geocell(35.0, 135.0, 0), "");
}

#[test]
fn longer_precision_extends_shorter() {
    let full = encode_geocell(35.681236, 139.767125, 20);
    for p in 1..20 {
        let shorter = encode_geocell(35.681236, 139.767125, p);
        assert!(full.starts_with(&shorter), "precision {p} is not a prefix");
    }
}

#[test]
fn nearby_points_share_a_prefix() {
    let a = encode_geocell(35.6812, 139.7671, DEFAULT_PRECISION);
    let b = encode_geocell(35.6813, 139.7672, DEFAULT_PRECISION);
    assert_eq!(&a[..6], &b[..6]);
}

#[test]
fn alphabet_excludes_ambiguous_letters() {
    assert_eq!(GEOCELL_ALPHABET.len(), 32);
    for c in [b'a', b'i', b'l', b'o'] {
        assert!(!GEOCELL_ALPHABET.contains(&c));
    }
    assert!(is_geocell("xn76urx6606p"));
    assert!(!is_geocell("xn76urx6606a"));
    assert!(!is_geocell(""));
}
