//! Ordered `(pattern, replacement)` rules.

use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// A single global substitution.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pattern: Regex,
    replacement: String,
}

impl ReplacementRule {
    /// Compile a rule. The replacement is inserted literally (`$` is not special).
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every match of the pattern in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern
            .replace_all(text, NoExpand(self.replacement.as_str()))
    }
}

/// Rules applied one after another, each to the output of the previous one.
///
/// Order matters: `&amp;` has to be decoded after `&lt;` and `&gt;`, otherwise
/// `&amp;lt;` would turn into `<` instead of `&lt;`.
#[derive(Debug, Clone, Default)]
pub struct ReplacementRules {
    rules: Vec<ReplacementRule>,
}

/// Patterns that turn highlighted markup back into the source it came from.
///
/// The tag pattern stops at line terminators and the whitespace class counts
/// U+FEFF but not U+0085, as browsers do for `.` and `\s`.
const HIGHLIGHTED_TO_RAW: &[(&str, &str)] = &[
    (r"<span[^\n\r\x{2028}\x{2029}]*?>|</span>", ""),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&amp;", "&"),
    (r"^[\s\x{FEFF}&&[^\x{85}]]+", ""),
    (r"[\s\x{FEFF}&&[^\x{85}]]+$", ""),
];

impl ReplacementRules {
    /// Compile rules from `(pattern, replacement)` pairs, keeping their order.
    pub fn new<'a, I>(pairs: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let rules = pairs
            .into_iter()
            .map(|(pattern, replacement)| ReplacementRule::new(pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The rules that recover raw source from highlighted markup:
    ///
    /// 1. drop `<span ...>` and `</span>` tags
    /// 2. `&lt;` to `<`
    /// 3. `&gt;` to `>`
    /// 4. `&amp;` to `&`
    /// 5. strip the leading whitespace run
    /// 6. strip the trailing whitespace run
    pub fn highlighted_to_raw() -> Self {
        Self::new(HIGHLIGHTED_TO_RAW.iter().copied())
            .expect("built-in replacement patterns are valid")
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReplacementRule> {
        self.rules.iter()
    }

    /// Run every rule over `text`, in order.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(replaced) = rule.apply(&current) {
                current = replaced;
            }
        }
        current
    }
}
