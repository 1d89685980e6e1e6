// src/core/obfuscator.rs

//! Regex-based source obfuscation for Python and PHP.
//!
//! Nothing here parses the language. Identifiers are found and replaced as
//! whole words, so names inside string literals and comments are renamed as
//! well, and imported module names are renamed like any other word.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use tracing::debug;

use crate::core::error::TransformError;

static RE_PY_IDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b").unwrap());
static RE_PHP_VAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$([a-zA-Z_][a-zA-Z0-9_]*)").unwrap());
static RE_PHP_BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
// `#[` starts a PHP 8 attribute, not a comment.
static RE_PHP_LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*(?://|#(?:[^\[\r\n]|$))[^\n]*\n?").unwrap());

/// Words left untouched by the Python obfuscator.
const PYTHON_RESERVED: &[&str] = &[
    // keywords
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in",
    "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with",
    "yield",
    // builtins that sample programs lean on
    "print", "input", "range", "len", "str", "int", "float", "bool", "list", "dict", "set", "tuple",
    "open", "type", "isinstance", "enumerate", "zip", "map", "filter", "sum", "min", "max", "abs",
    "sorted", "reversed", "round", "super", "object", "self", "cls", "Exception", "ValueError",
    "TypeError", "KeyError", "IndexError",
];

/// PHP variables that must keep their names.
const PHP_RESERVED: &[&str] = &[
    "this", "GLOBALS", "_SERVER", "_GET", "_POST", "_FILES", "_COOKIE", "_SESSION", "_REQUEST", "_ENV",
];

pub const PYTHON_SAMPLE: &str = r#"def fibonacci(n):
    if n <= 1:
        return n
    else:
        return fibonacci(n-1) + fibonacci(n-2)

# Calculate first 10 fibonacci numbers
for i in range(10):
    print(f"F({i}) = {fibonacci(i)}")"#;

pub const PHP_SAMPLE: &str = r#"<?php
/* Greets every user in the list */
function greet($users, $greeting = "Hello") {
    $count = 0;
    foreach ($users as $user) {
        // one line per user
        echo "$greeting, $user!\n";
        $count++;
    }
    return $count;
}

$names = ["alice", "bob"];
echo greet($names) . " users greeted\n";"#;

/// Renames identifiers to random names and sprinkles random comments.
pub fn obfuscate_python<R: Rng + ?Sized>(source: &str, rng: &mut R) -> Result<String, TransformError> {
    if source.trim().is_empty() {
        return Err(TransformError::Obfuscation);
    }

    let mut names = HashMap::new();
    let mut taken = HashSet::new();
    for m in RE_PY_IDENT.find_iter(source) {
        let word = m.as_str();
        if PYTHON_RESERVED.contains(&word)
            || word.starts_with("__")
            || is_string_prefix(source, m.end())
            || names.contains_key(word)
        {
            continue;
        }
        names.insert(word.to_string(), unique_name(rng, &mut taken));
    }
    debug!(renamed = names.len(), "Python identifiers mapped.");

    let renamed = RE_PY_IDENT.replace_all(source, |caps: &Captures| {
        let word = &caps[0];
        let end = caps.get(0).map_or(0, |m| m.end());
        if is_string_prefix(source, end) {
            return word.to_string();
        }
        names.get(word).cloned().unwrap_or_else(|| word.to_string())
    });

    let lines: Vec<String> = renamed
        .lines()
        .map(|line| {
            if !line.trim().is_empty() && rng.gen_bool(0.3) {
                format!("{line} # {}", random_base36(rng, 5))
            } else {
                line.to_string()
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Strips comments and renames `$variables`.
pub fn obfuscate_php<R: Rng + ?Sized>(source: &str, rng: &mut R) -> Result<String, TransformError> {
    let without_blocks = RE_PHP_BLOCK_COMMENT.replace_all(source, "");
    let stripped = RE_PHP_LINE_COMMENT.replace_all(&without_blocks, "");
    if stripped.trim().is_empty() {
        return Err(TransformError::Obfuscation);
    }

    let mut names: HashMap<String, String> = HashMap::new();
    let mut taken = HashSet::new();
    let renamed = RE_PHP_VAR.replace_all(&stripped, |caps: &Captures| {
        let name = &caps[1];
        if PHP_RESERVED.contains(&name) {
            return caps[0].to_string();
        }
        let replacement = names
            .entry(name.to_string())
            .or_insert_with(|| unique_name(rng, &mut taken));
        format!("${replacement}")
    });
    debug!(renamed = names.len(), "PHP variables mapped.");
    Ok(renamed.into_owned())
}

/// A word glued to a quote is a literal prefix (`f"`, `rb'`, `U"`...).
fn is_string_prefix(source: &str, end: usize) -> bool {
    matches!(source[end..].chars().next(), Some('"' | '\''))
}

fn unique_name<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<String>) -> String {
    loop {
        let candidate = format!("_{}", random_base36(rng, 8));
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}

fn random_base36<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn strip_comments(code: &str) -> String {
        code.lines()
            .map(|l| l.split(" # ").next().unwrap_or(l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn python_renames_user_identifiers_consistently() {
        let mut rng = StdRng::seed_from_u64(42);
        let out = obfuscate_python(PYTHON_SAMPLE, &mut rng).unwrap();
        assert!(!out.contains("fibonacci"));
        assert!(out.contains("def _"));
        assert!(out.contains("range(10)"));
        assert!(out.contains("print(f\""));

        // Every occurrence of the function name maps to the same new name.
        let body = strip_comments(&out);
        let def_line = body.lines().next().unwrap();
        let new_name = def_line
            .trim_start_matches("def ")
            .split('(')
            .next()
            .unwrap();
        assert_eq!(new_name.len(), 9);
        // def, two recursive calls, the comment and the f-string.
        assert_eq!(body.matches(new_name).count(), 5);
    }

    #[test]
    fn python_keeps_line_structure() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = obfuscate_python(PYTHON_SAMPLE, &mut rng).unwrap();
        assert_eq!(out.lines().count(), PYTHON_SAMPLE.lines().count());
        // Blank lines never get a comment.
        assert_eq!(out.lines().nth(5).unwrap(), "");
    }

    #[test]
    fn python_leaves_string_prefixes_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let out = obfuscate_python("u = 1\nx = u\"hi\" + Rb'raw' + F\"{u}\"", &mut rng).unwrap();
        let body = strip_comments(&out);
        assert!(body.contains(" u\"hi\""));
        assert!(body.contains(" Rb'raw'"));
        assert!(body.contains(" F\""));
        // The variable `u` is still renamed where it is not a prefix.
        assert!(!body.lines().next().unwrap().starts_with("u "));
    }

    #[test]
    fn python_empty_input_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(obfuscate_python("  \n ", &mut rng), Err(TransformError::Obfuscation));
    }

    #[test]
    fn php_strips_comments_and_renames_variables() {
        let mut rng = StdRng::seed_from_u64(9);
        let out = obfuscate_php(PHP_SAMPLE, &mut rng).unwrap();
        assert!(!out.contains("/*"));
        assert!(!out.contains("// one line"));
        assert!(!out.contains("$users"));
        assert!(!out.contains("$count"));
        assert!(out.contains("function greet("));
        assert!(out.starts_with("<?php"));
    }

    #[test]
    fn php_keeps_superglobals_and_this() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = obfuscate_php("<?php $id = $_GET['id']; $this->id = $id;", &mut rng).unwrap();
        assert!(out.contains("$_GET['id']"));
        assert!(out.contains("$this->id"));
        assert!(!out.contains("$id "));
    }

    #[test]
    fn php_attributes_survive_comment_stripping() {
        let mut rng = StdRng::seed_from_u64(2);
        let out = obfuscate_php("<?php\n#[Route('/')]\n# note\nfunction home() {}", &mut rng).unwrap();
        assert!(out.contains("#[Route('/')]"));
        assert!(!out.contains("# note"));
    }

    #[test]
    fn php_comment_only_input_is_an_error() {
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(obfuscate_php("/* nothing */\n// here", &mut rng), Err(TransformError::Obfuscation));
    }
}
