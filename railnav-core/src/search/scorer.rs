//! Name similarity scorers on a 0-100 scale

use std::fmt;

use itertools::Itertools;

use crate::Score;

/// Similarity measure between a query and a candidate name
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Similarity in `0..=100`; 100 means identical
    fn score(&self, query: &str, candidate: &str) -> Score;
}

/// Ratio of matched characters over the combined length of both strings
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRatio;

/// Best [`SimpleRatio`] of the shorter string against any equally long
/// window of the longer one
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

/// Word order and repetition insensitive ratio over alphanumeric tokens
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSetRatio;

/// Jaro-Winkler similarity scaled to 0-100
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerRatio;

impl Scorer for SimpleRatio {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn score(&self, query: &str, candidate: &str) -> Score {
        let a: Vec<char> = query.chars().collect();
        let b: Vec<char> = candidate.chars().collect();
        to_score(char_ratio(&a, &b))
    }
}

impl Scorer for PartialRatio {
    fn name(&self) -> &'static str {
        "partial_ratio"
    }

    fn score(&self, query: &str, candidate: &str) -> Score {
        if query == candidate {
            return 100;
        }
        let a: Vec<char> = query.chars().collect();
        let b: Vec<char> = candidate.chars().collect();
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let (shorter, longer) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

        let mut best = 0.0_f64;
        for window in longer.windows(shorter.len()) {
            let ratio = char_ratio(shorter, window);
            if ratio > 0.995 {
                return 100;
            }
            best = best.max(ratio);
        }
        to_score(best)
    }
}

impl Scorer for TokenSetRatio {
    fn name(&self) -> &'static str {
        "token_set_ratio"
    }

    fn score(&self, query: &str, candidate: &str) -> Score {
        let a = normalize(query);
        let b = normalize(candidate);
        if a.is_empty() || b.is_empty() {
            return 0;
        }

        let tokens_a: Vec<&str> = a.split_whitespace().sorted().dedup().collect();
        let tokens_b: Vec<&str> = b.split_whitespace().sorted().dedup().collect();

        let common = tokens_a
            .iter()
            .filter(|t| tokens_b.contains(*t))
            .join(" ");
        let only_a = tokens_a
            .iter()
            .filter(|t| !tokens_b.contains(*t))
            .join(" ");
        let only_b = tokens_b
            .iter()
            .filter(|t| !tokens_a.contains(*t))
            .join(" ");

        let combined_a = format!("{common} {only_a}").trim().to_string();
        let combined_b = format!("{common} {only_b}").trim().to_string();

        [
            (common.as_str(), combined_a.as_str()),
            (common.as_str(), combined_b.as_str()),
            (combined_a.as_str(), combined_b.as_str()),
        ]
        .into_iter()
        .map(|(x, y)| SimpleRatio.score(x, y))
        .max()
        .unwrap_or(0)
    }
}

impl Scorer for JaroWinklerRatio {
    fn name(&self) -> &'static str {
        "jaro_winkler"
    }

    fn score(&self, query: &str, candidate: &str) -> Score {
        to_score(strsim::jaro_winkler(query, candidate))
    }
}

/// Scores names with a set of scorers and keeps the best result
pub struct FuzzyMatcher {
    scorers: Vec<Box<dyn Scorer>>,
}

impl FuzzyMatcher {
    /// A matcher without any scorer; every name scores 0
    pub fn empty() -> Self {
        Self {
            scorers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scorer(mut self, scorer: impl Scorer + 'static) -> Self {
        self.scorers.push(Box::new(scorer));
        self
    }

    pub fn scorer_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.scorers.iter().map(|s| s.name())
    }

    /// Maximum score over all scorers
    pub fn best_score(&self, query: &str, candidate: &str) -> Score {
        self.scorers
            .iter()
            .map(|s| s.score(query, candidate))
            .max()
            .unwrap_or(0)
    }
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::empty()
            .with_scorer(SimpleRatio)
            .with_scorer(PartialRatio)
            .with_scorer(TokenSetRatio)
    }
}

impl fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.scorer_names()).finish()
    }
}

/// `2 * LCS / (|a| + |b|)`; equal strings give 1, a single empty one gives 0
fn char_ratio(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = (2 * lcs_len(a, b)) as f64 / (a.len() + b.len()) as f64;
    ratio
}

/// Length of the longest common subsequence
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Rounds a 0-1 ratio to a 0-100 score, ties to even
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_score(ratio: f64) -> Score {
    (ratio * 100.0).round_ties_even().clamp(0.0, 100.0) as Score
}

/// Lowercases and replaces every non-word character with a space
fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}
