//! Built-in match finders
//!
//! Each finder reports character offsets in increasing order. Finders that
//! describe "units" (paragraphs, sentences, lines, words) report the offset
//! where the *next* unit starts, so the separator stays with the unit it
//! follows.

use super::{byte_to_char_offsets, MatchFinder};
use crate::error::{CoreError, StrategyError};
use regex::Regex;

/// Matches blank-line paragraph breaks
///
/// Reports the offset just after each run of blank lines, i.e. the start of
/// the following paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphMatcher;

impl MatchFinder for ParagraphMatcher {
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i] != '\n' {
                i += 1;
                continue;
            }

            // Extend over every following line that holds only whitespace
            let mut run_end = None;
            let mut j = i + 1;
            loop {
                let mut k = j;
                while k < chars.len() && matches!(chars[k], ' ' | '\t' | '\r') {
                    k += 1;
                }
                if k < chars.len() && chars[k] == '\n' {
                    run_end = Some(k + 1);
                    j = k + 1;
                } else {
                    break;
                }
            }

            match run_end {
                Some(end) => {
                    matches.push(end);
                    i = end;
                }
                None => i += 1,
            }
        }

        Ok(matches)
    }
}

/// Matches sentence starts
///
/// A sentence ends at a run of `.`, `!` or `?` (optionally followed by
/// closing quotes or brackets) followed by whitespace; the next sentence
/// starts at the first non-whitespace character. The full-width terminators
/// `。`, `！` and `？` end a sentence without trailing whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceMatcher;

impl SentenceMatcher {
    fn is_terminator(ch: char) -> bool {
        matches!(ch, '.' | '!' | '?')
    }

    fn is_wide_terminator(ch: char) -> bool {
        matches!(ch, '。' | '！' | '？')
    }

    fn is_closer(ch: char) -> bool {
        matches!(ch, '"' | '\'' | ')' | ']' | '”' | '’' | '」' | '』' | '）')
    }
}

impl MatchFinder for SentenceMatcher {
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            let wide = Self::is_wide_terminator(ch);
            if !wide && !Self::is_terminator(ch) {
                i += 1;
                continue;
            }

            let mut j = i + 1;
            while j < chars.len()
                && (Self::is_terminator(chars[j])
                    || Self::is_wide_terminator(chars[j])
                    || Self::is_closer(chars[j]))
            {
                j += 1;
            }

            let mut k = j;
            while k < chars.len() && chars[k].is_whitespace() {
                k += 1;
            }

            if (k > j || wide) && k < chars.len() {
                matches.push(k);
            }
            i = k.max(i + 1);
        }

        Ok(matches)
    }
}

/// Matches line starts: the offset after every `\n`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineMatcher;

impl MatchFinder for LineMatcher {
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        Ok(text
            .chars()
            .enumerate()
            .filter(|(_, ch)| *ch == '\n')
            .map(|(pos, _)| pos + 1)
            .collect())
    }
}

/// Matches the start of every whitespace-delimited word but the first
///
/// Used with a count budget this caps the number of words per chunk. It is
/// an approximation of token counting, not a tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordMatcher;

impl MatchFinder for WordMatcher {
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        let mut matches = Vec::new();
        let mut seen_word = false;
        let mut prev_whitespace = true;

        for (pos, ch) in text.chars().enumerate() {
            let whitespace = ch.is_whitespace();
            if !whitespace && prev_whitespace {
                if seen_word {
                    matches.push(pos);
                }
                seen_word = true;
            }
            prev_whitespace = whitespace;
        }

        Ok(matches)
    }
}

/// Matches the start of every non-empty match of a regular expression
///
/// ```rust
/// use textsplit_core::{MatchFinder, PatternMatcher};
///
/// // A newline followed by one or more '#' characters: markdown headers
/// let headers = PatternMatcher::new(r"(\r?\n|\r)\s*#+").unwrap();
/// assert_eq!(headers.find_matches("intro\n# One\nbody\n## Two").unwrap(), vec![5, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: Regex,
}

impl PatternMatcher {
    /// Compile `pattern`
    pub fn new(pattern: &str) -> Result<Self, CoreError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Use an already compiled expression
    pub fn from_regex(pattern: Regex) -> Self {
        Self { pattern }
    }

    /// The underlying expression
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl MatchFinder for PatternMatcher {
    fn find_matches(&self, text: &str) -> Result<Vec<usize>, StrategyError> {
        let byte_offsets: Vec<usize> = self
            .pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.start())
            .collect();
        Ok(byte_to_char_offsets(text, &byte_offsets))
    }
}
