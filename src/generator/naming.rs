//! Identifier and file-name conventions for generated Go code.

use super::error::GenerateError;
use crate::spec::{resolve_folder, Group, Route};

/// Import alias for a handler folder: the folder with every `/` removed
pub fn to_prefix(folder: &str) -> String {
    folder.replace('/', "")
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Qualified identifier used to reference a route's handler in generated code.
///
/// With a grouping folder on the route (or, failing that, on its group) the
/// handler lives in the folder's package: `user` + `getUser` → `user.GetUser`.
/// Without one the bare handler name is returned unchanged.
pub fn qualified_handler(route: &Route, group: &Group) -> String {
    match resolve_folder(route, group) {
        Some(folder) => format!("{}.{}", to_prefix(folder), capitalize_first(&route.handler)),
        None => route.handler.clone(),
    }
}

/// Turns a base file name (without extension) into the configured convention
pub trait FileNamer {
    fn format_name(&self, base: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Lower,
    Upper,
    Title,
}

impl WordCase {
    fn detect(marker: &str) -> Option<Self> {
        if marker.chars().all(|c| c.is_ascii_lowercase()) {
            Some(WordCase::Lower)
        } else if marker.chars().all(|c| c.is_ascii_uppercase()) {
            Some(WordCase::Upper)
        } else if capitalize_first(&marker.to_ascii_lowercase()) == marker {
            Some(WordCase::Title)
        } else {
            None
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            WordCase::Lower => word.to_lowercase(),
            WordCase::Upper => word.to_uppercase(),
            WordCase::Title => capitalize_first(&word.to_lowercase()),
        }
    }
}

/// File naming style expressed with the marker words `go` and `zero`.
///
/// `gozero` → `userroutes`, `goZero` → `userRoutes`, `GoZero` → `UserRoutes`,
/// `go_zero` → `user_routes`, `go-zero` → `user-routes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingStyle {
    first: WordCase,
    rest: WordCase,
    separator: Option<char>,
}

impl NamingStyle {
    pub fn parse(format: &str) -> Result<Self, GenerateError> {
        let invalid = |reason: &str| GenerateError::NamingFormat {
            format: format.to_string(),
            reason: reason.to_string(),
        };

        let chars: Vec<char> = format.chars().collect();
        if chars.len() < 6 {
            return Err(invalid("expected the words 'go' and 'zero', e.g. go_zero"));
        }
        let first: String = chars[..2].iter().collect();
        let last: String = chars[chars.len() - 4..].iter().collect();
        if !first.eq_ignore_ascii_case("go") || !last.eq_ignore_ascii_case("zero") {
            return Err(invalid("expected the words 'go' and 'zero', e.g. go_zero"));
        }
        let separator = match &chars[2..chars.len() - 4] {
            [] => None,
            [c] if !c.is_alphanumeric() => Some(*c),
            _ => return Err(invalid("at most one non-alphanumeric separator is allowed")),
        };

        let first = WordCase::detect(&first).ok_or_else(|| invalid("mixed case in 'go'"))?;
        let rest = WordCase::detect(&last).ok_or_else(|| invalid("mixed case in 'zero'"))?;
        Ok(Self {
            first,
            rest,
            separator,
        })
    }
}

impl Default for NamingStyle {
    fn default() -> Self {
        Self {
            first: WordCase::Lower,
            rest: WordCase::Lower,
            separator: None,
        }
    }
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for c in name.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

impl FileNamer for NamingStyle {
    fn format_name(&self, base: &str) -> Result<String, GenerateError> {
        let words = split_words(base);
        if words.is_empty() {
            return Err(GenerateError::NamingFormat {
                format: base.to_string(),
                reason: "file name has no words to format".to_string(),
            });
        }
        let separator = self.separator.map(String::from).unwrap_or_default();
        let formatted = words
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == 0 {
                    self.first.apply(w)
                } else {
                    self.rest.apply(w)
                }
            })
            .collect::<Vec<_>>()
            .join(&separator);
        Ok(formatted)
    }
}
