//! Keyword tokenization for free-text search input.

/// Split raw search text into keyword tokens.
///
/// Runs of commas and whitespace all act as separators, so
/// `"hello  ,  world"` yields `["hello", "world"]`. Blank input yields an
/// empty vec.
pub fn get_keywords(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.trim().is_empty())
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(get_keywords("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_collapses_mixed_separator_runs() {
        assert_eq!(get_keywords("hello  ,  world"), vec!["hello", "world"]);
        assert_eq!(get_keywords(",,a,,b,,"), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(get_keywords("").is_empty());
        assert!(get_keywords("   ").is_empty());
        assert!(get_keywords(" , , ").is_empty());
    }

    #[test]
    fn test_rejoin_and_retokenize_is_stable() {
        let tokens = get_keywords("  a,b  c ,, d ");
        let rejoined = tokens.join(" ");
        assert_eq!(get_keywords(&rejoined), tokens);
    }
}
