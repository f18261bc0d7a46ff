//! Modifier abbreviation for kitchen tickets
//!
//! Resolution order:
//! 1. exact dictionary hit on the trimmed, lowercased text
//! 2. "no " / "add " prefix is kept as "NO " / "ADD " and the rest capitalized
//! 3. otherwise the trimmed text with its first letter capitalized

use std::collections::HashMap;

use crate::settings::Abbreviations;

pub struct AbbreviationResolver<'a> {
    dictionary: HashMap<String, &'a str>,
}

impl<'a> AbbreviationResolver<'a> {
    pub fn new(abbreviations: &'a Abbreviations) -> Self {
        let dictionary = abbreviations
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.trim().to_lowercase(), v.as_str()))
            .collect();
        Self { dictionary }
    }

    pub fn resolve(&self, name: &str) -> String {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return String::new();
        }

        if let Some(short) = self.dictionary.get(&trimmed.to_lowercase()) {
            return (*short).to_string();
        }

        let (prefix, rest) = if has_prefix(trimmed, "no ") {
            ("NO ", trimmed[3..].trim())
        } else if has_prefix(trimmed, "add ") {
            ("ADD ", trimmed[4..].trim())
        } else {
            ("", trimmed)
        };

        format!("{}{}", prefix, capitalize_first(rest))
    }
}

fn has_prefix(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
