//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Trim command-line words and drop blank ones
pub fn clean_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_words_trims_and_skips_blank() {
        let words = clean_words(["  undo ", "", "   ", "Replay"]);
        assert_eq!(words, vec!["undo", "Replay"]);
    }
}
