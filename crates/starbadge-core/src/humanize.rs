//! Number humanizer: integer counts to short, suffix-scaled display strings.
//!
//! Tiers are matched largest first and never re-normalize into the next tier,
//! so `999_999` stays in the `k` tier as `1000.0k`. A value that is an exact
//! multiple of its tier divisor is printed without a fraction (`2000 -> 2k`);
//! anything else gets exactly one decimal digit (`2500 -> 2.5k`).
//!
//! Output only ever contains `[0-9.a-z]`.

/// Scale tiers as `(divisor, suffix)`, largest first.
///
/// The suffix literals are part of the badge text contract and are kept
/// exactly as published (`gb`, `gm`, `k`).
pub const TIERS: [(u64, &str); 3] = [(1_000_000_000, "gb"), (1_000_000, "gm"), (1_000, "k")];

/// Humanize a count, e.g. `1500 -> "1.5k"`, `2_000_000 -> "2gm"`.
pub fn humanize(n: u64) -> String {
    for &(divisor, suffix) in TIERS.iter() {
        if n >= divisor {
            let precision = usize::from(n % divisor != 0);
            return format!("{:.*}{}", precision, n as f64 / divisor as f64, suffix);
        }
    }
    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_thousand_is_plain() {
        for n in 0..1_000u64 {
            assert_eq!(humanize(n), n.to_string());
        }
    }

    #[test]
    fn exact_multiples_drop_fraction() {
        assert_eq!(humanize(1_000), "1k");
        assert_eq!(humanize(2_000), "2k");
        assert_eq!(humanize(2_000_000), "2gm");
        assert_eq!(humanize(1_000_000_000), "1gb");
        assert_eq!(humanize(42_000_000_000), "42gb");
    }

    #[test]
    fn other_values_keep_one_decimal() {
        assert_eq!(humanize(1_234), "1.2k");
        assert_eq!(humanize(1_500), "1.5k");
        assert_eq!(humanize(2_500), "2.5k");
        assert_eq!(humanize(10_700), "10.7k");
        assert_eq!(humanize(10_700_000), "10.7gm");
        // 1001 is not a multiple of 1000, so the zero fraction is still printed.
        assert_eq!(humanize(1_001), "1.0k");
    }

    #[test]
    fn tiers_do_not_renormalize() {
        assert_eq!(humanize(999_999), "1000.0k");
        assert_eq!(humanize(999_999_999), "1000.0gm");
        assert_eq!(humanize(1_000_000), "1gm");
    }

    #[test]
    fn suffix_tracks_tier() {
        for n in [1_000_000u64, 5_432_100, 999_999_999] {
            assert!(humanize(n).ends_with("gm"), "{n}");
        }
        for n in [1_000_000_000u64, 7_300_000_000, u64::MAX] {
            assert!(humanize(n).ends_with("gb"), "{n}");
        }
    }

    #[test]
    fn charset_is_restricted() {
        for n in [0u64, 7, 1_001, 65_535, 3_141_592, 2_718_281_828, u64::MAX] {
            let s = humanize(n);
            assert!(
                s.chars().all(|c| c.is_ascii_digit() || c == '.' || c.is_ascii_lowercase()),
                "{s}"
            );
        }
    }
}
