//! Tab completion
//!
//! `complete_word` is a pure query. Cycling through candidates on repeated
//! Tab presses is presentation state, so it lives in [`CompletionCycle`],
//! which the host owns.

/// Case-insensitive prefix match of `word` against `candidates`, sorted and
/// deduplicated.
pub fn complete_word<'a, I>(word: &str, candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = word.to_lowercase();
    let mut matches: Vec<String> = candidates
        .into_iter()
        .filter(|c| c.to_lowercase().starts_with(&needle))
        .map(|c| c.to_string())
        .collect();
    matches.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
    matches.dedup();
    matches
}

/// The word under completion: everything after the last whitespace.
pub fn last_word(input: &str) -> &str {
    input.rsplit(char::is_whitespace).next().unwrap_or(input)
}

/// Replace the last word of `input` with `candidate`.
pub fn apply_completion(input: &str, candidate: &str) -> String {
    let keep = input.len() - last_word(input).len();
    format!("{}{}", &input[..keep], candidate)
}

/// Host-side cycling state for repeated Tab presses.
#[derive(Debug, Clone, Default)]
pub struct CompletionCycle {
    /// The input as typed before the first Tab press.
    base: String,
    candidates: Vec<String>,
    index: Option<usize>,
}

impl CompletionCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a cycle over `candidates` for the typed `input`.
    pub fn start(&mut self, input: &str, candidates: Vec<String>) {
        self.base = input.to_string();
        self.candidates = candidates;
        self.index = None;
    }

    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The next completed line, wrapping around after the last candidate.
    pub fn advance(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        let next = match self.index {
            Some(i) => (i + 1) % self.candidates.len(),
            None => 0,
        };
        self.index = Some(next);
        Some(apply_completion(&self.base, &self.candidates[next]))
    }

    /// Forget the cycle, e.g. after any key other than Tab.
    pub fn reset(&mut self) {
        self.base.clear();
        self.candidates.clear();
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_word_is_case_insensitive_and_sorted() {
        let names = ["projects", "Private", "jobs", "academics", "pwd"];
        assert_eq!(complete_word("p", names), vec!["Private", "projects", "pwd"]);
        assert_eq!(complete_word("PR", names), vec!["Private", "projects"]);
        assert!(complete_word("x", names).is_empty());
    }

    #[test]
    fn test_empty_word_matches_everything() {
        let names = ["b", "a", "a"];
        assert_eq!(complete_word("", names), vec!["a", "b"]);
    }

    #[test]
    fn test_last_word_and_apply() {
        assert_eq!(last_word("cat lock"), "lock");
        assert_eq!(last_word("cd "), "");
        assert_eq!(last_word("pw"), "pw");
        assert_eq!(apply_completion("cat lock", "lockheed.txt"), "cat lockheed.txt");
        assert_eq!(apply_completion("cd ", "jobs/"), "cd jobs/");
        assert_eq!(apply_completion("wh", "whoami"), "whoami");
    }

    #[test]
    fn test_cycle_wraps_around() {
        let mut cycle = CompletionCycle::new();
        assert_eq!(cycle.advance(), None);

        cycle.start("cat b", vec!["bayer.txt".to_string(), "bio.txt".to_string()]);
        assert!(cycle.is_active());
        assert_eq!(cycle.advance().as_deref(), Some("cat bayer.txt"));
        assert_eq!(cycle.advance().as_deref(), Some("cat bio.txt"));
        assert_eq!(cycle.advance().as_deref(), Some("cat bayer.txt"));

        cycle.reset();
        assert!(!cycle.is_active());
    }
}
