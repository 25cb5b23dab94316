// translitua/core/src/scheme.rs
//
// A transliteration scheme is plain data: a per-character main table and up
// to three optional rule tables (deletions, multi-character special cases,
// word-initial substitutions). Source tables are written lowercase only; the
// uppercase variants and the regular expressions that drive the rewrite
// passes are derived once here, when the scheme is built.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// An immutable, fully built transliteration scheme.
///
/// Construct one with [`Scheme::builder`]. Every lookup structure the engine
/// needs (uppercase entries, compiled patterns) is ready after `build()`, so
/// a `&Scheme` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Scheme {
    name: &'static str,
    description: &'static str,
    main: HashMap<char, String>,
    delete: Option<HashSet<char>>,
    special_cases: Option<RuleSet>,
    first_characters: Option<RuleSet>,
}

impl Scheme {
    /// Start building a scheme with the given stable identifier.
    pub fn builder(name: &'static str) -> SchemeBuilder {
        SchemeBuilder::new(name)
    }

    /// Stable identifier, e.g. `"UkrainianKMU"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description of the standard this scheme implements.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Replacement for a single character, including derived uppercase entries.
    pub fn lookup(&self, ch: char) -> Option<&str> {
        self.main.get(&ch).map(String::as_str)
    }

    /// Number of entries in the main table (lowercase and uppercase).
    pub fn main_len(&self) -> usize {
        self.main.len()
    }

    pub fn delete_set(&self) -> Option<&HashSet<char>> {
        self.delete.as_ref()
    }

    pub fn special_cases(&self) -> Option<&RuleSet> {
        self.special_cases.as_ref()
    }

    pub fn first_characters(&self) -> Option<&RuleSet> {
        self.first_characters.as_ref()
    }

    /// Transliterate `input` with this scheme. See [`crate::transliterate`].
    pub fn transliterate(&self, input: &str, preserve_case: bool) -> String {
        crate::engine::transliterate(input, self, preserve_case)
    }
}

/// A compiled set of substitution rules: one alternation pattern plus the
/// literal replacement for every key it can match.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pattern: Regex,
    replacements: HashMap<String, String>,
}

impl RuleSet {
    fn compile(scheme: &str, rules: HashMap<String, String>, word_initial: bool) -> Result<Self> {
        // Longest keys first: with leftmost-first alternation this makes the
        // longest registered sequence win at any given position.
        let mut keys: Vec<&String> = rules.keys().collect();
        keys.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = keys
            .iter()
            .map(|k| regex::escape(k))
            .collect::<Vec<_>>()
            .join("|");
        let source = if word_initial {
            format!(r"\b(?:{alternation})")
        } else {
            alternation
        };

        let pattern = Regex::new(&source).map_err(|e| Error::InvalidScheme {
            scheme: scheme.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            replacements: rules,
        })
    }

    /// Replacement registered for an exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.replacements.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Rewrite every match in `text`. Returns `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<String> {
        if !self.pattern.is_match(text) {
            return None;
        }
        let rewritten = self.pattern.replace_all(text, |caps: &Captures| {
            let matched = &caps[0];
            self.replacements
                .get(matched)
                .cloned()
                .unwrap_or_else(|| matched.to_string())
        });
        Some(rewritten.into_owned())
    }
}

/// Collects lowercase source tables and turns them into a [`Scheme`].
#[derive(Debug, Clone)]
pub struct SchemeBuilder {
    name: &'static str,
    description: &'static str,
    main: Vec<(char, String)>,
    delete: Vec<char>,
    special_cases: Vec<(String, String)>,
    first_characters: Vec<(char, String)>,
}

impl SchemeBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            description: "",
            main: Vec::new(),
            delete: Vec::new(),
            special_cases: Vec::new(),
            first_characters: Vec::new(),
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Single-character mappings. Uppercase entries are derived.
    pub fn main_table<I, K, V>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<char>,
        V: AsRef<str>,
    {
        self.main.extend(
            table
                .into_iter()
                .map(|(k, v)| (*k.borrow(), v.as_ref().to_string())),
        );
        self
    }

    /// Characters removed before any substitution runs.
    pub fn delete_set<I, K>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Borrow<char>,
    {
        self.delete.extend(chars.into_iter().map(|c| *c.borrow()));
        self
    }

    /// Multi-character sequences rewritten as a unit, before everything else.
    pub fn special_cases<I, K, V>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.special_cases.extend(
            table
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string())),
        );
        self
    }

    /// Alternate mappings used only when the character starts a word.
    pub fn first_characters<I, K, V>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Borrow<char>,
        V: AsRef<str>,
    {
        self.first_characters.extend(
            table
                .into_iter()
                .map(|(k, v)| (*k.borrow(), v.as_ref().to_string())),
        );
        self
    }

    /// Validate the tables, derive uppercase entries and compile patterns.
    pub fn build(self) -> Result<Scheme> {
        let name = self.name;
        if self.main.is_empty() {
            return Err(invalid(name, "main table is empty"));
        }

        let main = with_uppercase_chars(self.main);

        let delete = if self.delete.is_empty() {
            None
        } else {
            Some(self.delete.into_iter().collect::<HashSet<_>>())
        };

        let special_cases = if self.special_cases.is_empty() {
            None
        } else {
            if self.special_cases.iter().any(|(k, _)| k.is_empty()) {
                return Err(invalid(name, "special case with an empty key"));
            }
            let rules = with_uppercase_strings(self.special_cases);
            Some(RuleSet::compile(name, rules, false)?)
        };

        let first_characters = if self.first_characters.is_empty() {
            None
        } else {
            let rules = with_uppercase_chars(self.first_characters)
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect();
            Some(RuleSet::compile(name, rules, true)?)
        };

        tracing::debug!(
            scheme = name,
            main = main.len(),
            delete = delete.as_ref().map_or(0, HashSet::len),
            special = special_cases.as_ref().map_or(0, RuleSet::len),
            first = first_characters.as_ref().map_or(0, RuleSet::len),
            "built transliteration scheme"
        );

        Ok(Scheme {
            name,
            description: self.description,
            main,
            delete,
            special_cases,
            first_characters,
        })
    }
}

fn invalid(scheme: &str, reason: &str) -> Error {
    Error::InvalidScheme {
        scheme: scheme.to_string(),
        reason: reason.to_string(),
    }
}

/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// `"ia"` becomes `"Ia"` (not `"IA"`), so a multi-letter replacement for a
/// capitalized source letter reads naturally in mixed-case text.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase form of a character, if it is exactly one character.
fn upper_char(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    let first = upper.next()?;
    match upper.next() {
        Some(_) => None,
        None => Some(first),
    }
}

// Explicit entries win over derived ones.
fn with_uppercase_chars(entries: Vec<(char, String)>) -> HashMap<char, String> {
    let mut table: HashMap<char, String> = entries.iter().cloned().collect();
    for (key, value) in &entries {
        if let Some(upper) = upper_char(*key) {
            table.entry(upper).or_insert_with(|| capitalize(value));
        }
    }
    table
}

fn with_uppercase_strings(entries: Vec<(String, String)>) -> HashMap<String, String> {
    let mut table: HashMap<String, String> = entries.iter().cloned().collect();
    for (key, value) in &entries {
        table
            .entry(capitalize(key))
            .or_insert_with(|| capitalize(value));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> SchemeBuilder {
        Scheme::builder("Tiny").main_table([('я', "ia"), ('з', "z"), ('г', "h")])
    }

    #[test]
    fn test_capitalize_touches_first_char_only() {
        assert_eq!(capitalize("ia"), "Ia");
        assert_eq!(capitalize("shch"), "Shch");
        assert_eq!(capitalize("šč"), "Šč");
        assert_eq!(capitalize("ZGh"), "ZGh");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("'"), "'");
    }

    #[test]
    fn test_main_table_gains_uppercase_entries() {
        let scheme = tiny().build().unwrap();
        assert_eq!(scheme.lookup('я'), Some("ia"));
        assert_eq!(scheme.lookup('Я'), Some("Ia"));
        assert_eq!(scheme.main_len(), 6);
        assert_eq!(scheme.lookup('x'), None);
    }

    #[test]
    fn test_explicit_uppercase_entry_is_kept() {
        let scheme = tiny()
            .special_cases([("зг", "zgh"), ("ЗГ", "ZGh")])
            .build()
            .unwrap();
        let special = scheme.special_cases().unwrap();
        assert_eq!(special.get("зг"), Some("zgh"));
        assert_eq!(special.get("Зг"), Some("Zgh"));
        assert_eq!(special.get("ЗГ"), Some("ZGh"));
        assert_eq!(special.len(), 3);
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let scheme = Scheme::builder("Soft")
            .main_table([('ь', "")])
            .build()
            .unwrap();
        assert_eq!(scheme.lookup('ь'), Some(""));
        assert_eq!(scheme.lookup('Ь'), Some(""));
    }

    #[test]
    fn test_optional_tables_stay_absent() {
        let scheme = tiny().build().unwrap();
        assert!(scheme.delete_set().is_none());
        assert!(scheme.special_cases().is_none());
        assert!(scheme.first_characters().is_none());
    }

    #[test]
    fn test_rejects_empty_tables_and_keys() {
        let err = Scheme::builder("Empty").build().unwrap_err();
        assert!(matches!(err, Error::InvalidScheme { .. }));

        let err = tiny().special_cases([("", "x")]).build().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidScheme {
                scheme: "Tiny".into(),
                reason: "special case with an empty key".into(),
            }
        );
    }

    #[test]
    fn test_longest_special_case_wins() {
        let scheme = tiny()
            .special_cases([("зг", "X"), ("згя", "Y")])
            .build()
            .unwrap();
        let special = scheme.special_cases().unwrap();
        assert_eq!(special.apply("згя зга").as_deref(), Some("Y Xа"));
        assert_eq!(special.apply("нічого"), None);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let scheme = tiny().special_cases([(".я", "dot")]).build().unwrap();
        let special = scheme.special_cases().unwrap();
        assert_eq!(special.apply("ая"), None);
        assert_eq!(special.apply(".я").as_deref(), Some("dot"));
    }

    #[test]
    fn test_first_characters_anchor_at_word_start() {
        let scheme = tiny().first_characters([('я', "ya")]).build().unwrap();
        let first = scheme.first_characters().unwrap();
        assert_eq!(first.apply("я зя").as_deref(), Some("ya зя"));
        assert_eq!(first.apply("Я,я").as_deref(), Some("Ya,ya"));
        assert_eq!(first.apply("зя"), None);
    }
}
