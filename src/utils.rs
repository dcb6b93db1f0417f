/// Char-safe prefix of a string, for log lines and prompt budgets.
#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

/// Like [`safe_truncate`], with a trailing ellipsis when anything was cut.
#[inline]
pub fn safe_truncate_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_plain_query() {
        assert_eq!(safe_truncate("goedkope winterjas maat 52", 8), "goedkope");
    }

    #[test]
    fn test_truncate_respects_multibyte_chars() {
        assert_eq!(safe_truncate("€100 jas", 4), "€100");
    }

    #[test]
    fn test_truncate_shorter_input_is_untouched() {
        assert_eq!(safe_truncate("jas", 10), "jas");
    }

    #[test]
    fn test_ellipsis_only_when_cut() {
        assert_eq!(safe_truncate_ellipsis("between 100 and 300", 7), "between...");
        assert_eq!(safe_truncate_ellipsis("jas", 10), "jas");
    }
}
