use regex::Regex;
use tracing::debug;

use crate::config::NormalizeConfig;
use crate::error::Result;
use super::Script;

/// Canonicalizes raw script text.
///
/// Patterns are compiled once from the configuration and reused for every line.
#[derive(Debug, Clone)]
pub struct Normalizer {
    brackets: Option<Regex>,
    disallowed: Option<Regex>,
}

impl Normalizer {
    pub fn new(config: &NormalizeConfig) -> Result<Self> {
        let brackets = if config.strip_brackets {
            Some(Regex::new(r"\[.*?\]")?)
        } else {
            None
        };

        let disallowed = if config.filter_characters {
            let letters = if config.unicode_letters { r"\p{L}\p{N}" } else { "A-Za-z0-9" };
            let pattern = format!(r"[^{}\s{}]", letters, regex::escape(&config.allowed_symbols));
            debug!("Character filter pattern: {}", pattern);
            Some(Regex::new(&pattern)?)
        } else {
            None
        };

        Ok(Self { brackets, disallowed })
    }

    /// Normalize one raw line: strip annotations and filtered characters, then trim
    pub fn normalize_line(&self, line: &str) -> String {
        let mut line = line.to_string();
        if let Some(brackets) = &self.brackets {
            line = brackets.replace_all(&line, "").into_owned();
        }
        if let Some(disallowed) = &self.disallowed {
            line = disallowed.replace_all(&line, "").into_owned();
        }
        line.trim().to_string()
    }

    /// Normalize raw lines into a single-spaced string, dropping blank lines
    pub fn normalize_lines<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|line| self.normalize_line(line.as_ref()))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n");

        collapse_whitespace(&joined)
    }

    /// Normalize a whole script file's content
    pub fn normalize_script(&self, raw: &str) -> Script {
        let raw = raw.trim_start_matches('\u{feff}');
        Script::new(self.normalize_lines(raw.lines()))
    }
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cue text only gets its whitespace collapsed; no characters are filtered
pub fn normalize_cue_text(text: &str) -> String {
    collapse_whitespace(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new(&NormalizeConfig::default()).unwrap()
    }

    #[test]
    fn test_strips_bracketed_directions() {
        let out = normalizer().normalize_lines(["Hello [waves] there [pause] friend"]);
        assert_eq!(out, "Hello there friend");
    }

    #[test]
    fn test_bracket_removal_is_non_greedy() {
        let out = normalizer().normalize_lines(["a [x] b [y] c"]);
        assert_eq!(out, "a b c");
    }

    #[test]
    fn test_filters_disallowed_characters() {
        let out = normalizer().normalize_lines(["JOHN: Well - it's \"fine\"; ok? (yes) #1 @home!"]);
        assert_eq!(out, "JOHN: Well - it's \"fine\"; ok? yes 1 home!");
    }

    #[test]
    fn test_drops_blank_lines_and_collapses_whitespace() {
        let out = normalizer().normalize_lines(["  first   line ", "", "   ", "\tsecond\tline"]);
        assert_eq!(out, "first line second line");
    }

    #[test]
    fn test_line_of_only_directions_is_dropped() {
        let out = normalizer().normalize_lines(["one", "[Exit stage left]", "two"]);
        assert_eq!(out, "one two");
    }

    #[test]
    fn test_ascii_filter_drops_accented_letters() {
        let out = normalizer().normalize_lines(["café"]);
        assert_eq!(out, "caf");
    }

    #[test]
    fn test_unicode_letters_option_keeps_accented_letters() {
        let config = NormalizeConfig {
            unicode_letters: true,
            ..NormalizeConfig::default()
        };
        let out = Normalizer::new(&config).unwrap().normalize_lines(["café ~ crème"]);
        assert_eq!(out, "café crème");
    }

    #[test]
    fn test_filter_can_be_disabled() {
        let config = NormalizeConfig {
            strip_brackets: false,
            filter_characters: false,
            ..NormalizeConfig::default()
        };
        let out = Normalizer::new(&config).unwrap().normalize_lines(["[a] #b  (c)"]);
        assert_eq!(out, "[a] #b (c)");
    }

    #[test]
    fn test_custom_allow_list_with_regex_metacharacters() {
        let config = NormalizeConfig {
            allowed_symbols: "-]^\\".to_string(),
            strip_brackets: false,
            ..NormalizeConfig::default()
        };
        let out = Normalizer::new(&config).unwrap().normalize_lines(["a-b]c^d\\e.f"]);
        assert_eq!(out, "a-b]c^d\\ef");
    }

    #[test]
    fn test_normalize_script_skips_bom() {
        let script = normalizer().normalize_script("\u{feff}Line one\r\nLine two\r\n");
        assert_eq!(script.as_str(), "Line one Line two");
    }

    #[test]
    fn test_normalize_cue_text() {
        assert_eq!(normalize_cue_text("  quick\n brown\t\tfox \n"), "quick brown fox");
    }
}
