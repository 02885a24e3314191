//! Text shortening for symbols, hashes and addresses.
//!
//! All widths are counted in characters, so multi-byte symbols are never split.

const ELLIPSIS: &str = "...";

/// Display form of a token or pool name.
///
/// Names longer than `max_len` characters are cut and suffixed with `...`.
pub fn format_token_name(name: &str, max_len: usize) -> String {
    if name.chars().count() <= max_len {
        return name.to_string();
    }
    let mut out: String = name.chars().take(max_len).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Keep `edge` characters on both ends, e.g. `osmo1...xk9q2`.
///
/// Values that would not get shorter are returned whole.
pub fn shorten_middle(value: &str, edge: usize) -> String {
    let len = value.chars().count();
    if len <= edge.saturating_mul(2) {
        return value.to_string();
    }
    let head: String = value.chars().take(edge).collect();
    let tail: String = value.chars().skip(len - edge).collect();
    format!("{head}{ELLIPSIS}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_token_name_short_unchanged() {
        assert_eq!(format_token_name("OSMO", 10), "OSMO");
        assert_eq!(format_token_name("", 10), "");
        assert_eq!(format_token_name("ABCDEFGHIJ", 10), "ABCDEFGHIJ");
    }

    #[test]
    fn test_format_token_name_long_truncated() {
        assert_eq!(
            format_token_name(
                "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2",
                10
            ),
            "ibc/27394F..."
        );
    }

    #[test]
    fn test_format_token_name_multibyte() {
        assert_eq!(format_token_name("ÄÖÜäöüßéèêë", 3), "ÄÖÜ...");
    }

    #[test]
    fn test_shorten_middle() {
        assert_eq!(
            shorten_middle("osmo1qyqszqgpqyqszqgpqyqszqgpqyqszqgpxk9q2", 5),
            "osmo1...xk9q2"
        );
        assert_eq!(shorten_middle("0123456789", 5), "0123456789");
        assert_eq!(shorten_middle("0123456789A", 5), "01234...6789A");
    }

    #[test]
    fn test_shorten_middle_huge_edge() {
        assert_eq!(shorten_middle("osmo1qyqszqgp", usize::MAX), "osmo1qyqszqgp");
        assert_eq!(shorten_middle("", usize::MAX / 2 + 1), "");
    }
}
