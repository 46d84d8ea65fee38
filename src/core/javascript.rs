//! Variable and parameter name extraction from JavaScript source.
//!
//! There is no lexer or parser here. Four independent regex layers run over
//! the full text, each of them tolerant of anything it cannot match:
//!
//! 1. declarations: `var`/`let`/`const` followed by an identifier and `=` or `;`
//! 2. function expressions: `= function(...)` or `= (...) =>`
//! 3. destructuring-like groups: `{a, b}` / `[a, b]` anywhere in the text
//! 4. named functions: `function name(...)`
//!
//! Layers 1 and 3 feed `variables`, layers 2 and 4 feed
//! `function_parameters`. Layers may overlap; the sets absorb duplicates.
//! Results are raw fragments and are not normalized.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:var|let|const)\s+([a-zA-Z_][a-zA-Z0-9_]*)\s*(?:=|;)").unwrap()
});

// Group 1: the function part. With `(?s)` the greedy `function\s?\(.*\)`
// runs to the last `)` in the text; the inner paren scan then picks up every
// group in that span.
static FUNCTION_EXPRESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:[a-zA-Z_][a-zA-Z0-9_]*\s*)?=\s*(function\s?\(.*\)|\(.+?\)\s*=>)").unwrap()
});

// Single-line on purpose: `.` does not cross newlines here.
static PAREN_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

static DESTRUCTURING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-zA-Z0-9_,\s]+)\}|\[([a-zA-Z0-9_,\s]+)\]").unwrap()
});

static NAMED_FUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)function\s+[a-zA-Z_][a-zA-Z0-9_]*\s*\((.*?)\)").unwrap()
});

/// Names found in one script, or in a whole batch after merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JsTokens {
    /// Declared bindings and destructured names.
    pub variables: BTreeSet<String>,
    /// Parameter lists of named functions, function expressions and arrows.
    pub function_parameters: BTreeSet<String>,
}

impl JsTokens {
    pub fn merge(&mut self, other: JsTokens) {
        self.variables.extend(other.variables);
        self.function_parameters.extend(other.function_parameters);
    }

    pub fn len(&self) -> usize {
        self.variables.len() + self.function_parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.function_parameters.is_empty()
    }
}

/// Run every scan layer over `source`.
pub fn extract_js_tokens(source: &str) -> JsTokens {
    let declarations = scan_declarations(source);
    let destructured = scan_destructuring(source);
    let named = scan_named_function_parameters(source);
    let expressions = scan_function_expression_parameters(source);

    log::debug!(
        "js: {} declaration(s), {} destructured, {} named-function param(s), {} expression param(s)",
        declarations.len(),
        destructured.len(),
        named.len(),
        expressions.len()
    );

    JsTokens {
        variables: declarations.into_iter().chain(destructured).collect(),
        function_parameters: named.into_iter().chain(expressions).collect(),
    }
}

/// Only the first identifier after the keyword is taken, so `let a, b = 1`
/// yields just `a`.
fn scan_declarations(source: &str) -> Vec<String> {
    DECLARATION_REGEX
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Paren contents are kept whole: `(a, b) =>` yields the single fragment
/// `"a, b"`.
fn scan_function_expression_parameters(source: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    for cap in FUNCTION_EXPRESSION_REGEX.captures_iter(source) {
        let Some(expression) = cap.get(1) else {
            continue;
        };
        for group in PAREN_GROUP_REGEX.captures_iter(expression.as_str()) {
            let fragment = group.get(1).map_or("", |m| m.as_str()).trim();
            push_unseen(&mut fragments, fragment);
        }
    }

    fragments
}

fn scan_destructuring(source: &str) -> Vec<String> {
    DESTRUCTURING_REGEX
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .flat_map(|m| split_list(m.as_str()))
        .collect()
}

fn scan_named_function_parameters(source: &str) -> Vec<String> {
    let mut fragments: Vec<String> = Vec::new();

    for cap in NAMED_FUNCTION_REGEX.captures_iter(source) {
        let params = cap.get(1).map_or("", |m| m.as_str());
        for fragment in params.split(',') {
            push_unseen(&mut fragments, fragment.trim());
        }
    }

    fragments
}

fn split_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn push_unseen(fragments: &mut Vec<String>, fragment: &str) {
    if !fragment.is_empty() && !fragments.iter().any(|f| f == fragment) {
        fragments.push(fragment.to_string());
    }
}
