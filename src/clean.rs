//! # Message Cleaner
//!
//! An ordered table of punctuation-spacing rules that prepares free-form chat
//! text for segmentation or display.
//!
//! ## Rules
//!
//! 1. `.` not followed by a digit becomes a space (decimals survive)
//! 2. `,` followed by a non-space gets a space after it
//! 3. ` , ` collapses to a single space
//! 4. a comma between a Latin letter and whitespace is dropped
//! 5. the outermost `"..."` on a line is unwrapped (greedy)
//! 6. `(` is removed
//! 7. `)` is removed
//! 8. ` "` with an optional following space becomes a space
//! 9. ` '` with an optional following space becomes a space
//! 10. `!` with optional surrounding spaces becomes a space
//! 11. `?` with an optional following space becomes a space
//! 12. a colon after a Latin letter is removed
//!
//! Later rules rely on the shape produced by earlier ones, so the table is
//! always applied in order.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tracing::trace;

/// How a rule rewrites the text matched by its pattern.
#[derive(Debug, Clone, Copy)]
enum Rewrite {
    /// Replace every match, expanding `${n}` capture references.
    Template(&'static str),
    /// Replace a match only when the character after it satisfies `accept`.
    ///
    /// Stands in for a lookahead, which the `regex` crate does not support.
    /// The following character is inspected, never consumed.
    Lookahead {
        accept: fn(Option<char>) -> bool,
        replacement: &'static str,
    },
}

/// A single named rewrite rule of the cleaner.
#[derive(Debug, Clone, Copy)]
pub struct CleanRule {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    rewrite: Rewrite,
}

impl CleanRule {
    /// Short identifier of the rule, used in trace logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The regular expression the rule matches.
    pub fn pattern(&self) -> &'static str {
        let pattern: &'static Regex = self.pattern;
        pattern.as_str()
    }

    /// Applies this rule once over the whole input.
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(input, template),
            Rewrite::Lookahead {
                accept,
                replacement,
            } => replace_with_lookahead(self.pattern, input, accept, replacement),
        }
    }
}

/// Replaces matches of `re` whose following character passes `accept`.
fn replace_with_lookahead<'a>(
    re: &Regex,
    input: &'a str,
    accept: fn(Option<char>) -> bool,
    replacement: &str,
) -> Cow<'a, str> {
    let mut result: Option<String> = None;
    let mut last = 0;

    for m in re.find_iter(input) {
        if !accept(input[m.end()..].chars().next()) {
            continue;
        }

        let out = result.get_or_insert_with(|| String::with_capacity(input.len() + 8));
        out.push_str(&input[last..m.start()]);
        out.push_str(replacement);
        last = m.end();
    }

    match result {
        Some(mut out) => {
            out.push_str(&input[last..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(input),
    }
}

fn not_followed_by_digit(next: Option<char>) -> bool {
    !next.is_some_and(|c| c.is_ascii_digit())
}

fn followed_by_non_space(next: Option<char>) -> bool {
    next.is_some_and(|c| !c.is_whitespace())
}

// Regex patterns (compiled once using LazyLock)
static RE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.").unwrap());

static RE_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r",").unwrap());

static RE_SPACED_COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s,\s").unwrap());

static RE_LETTER_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]),\s").unwrap());

// `.` in the source pattern stops at any line terminator, not just `\n`.
static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^\n\r\u{2028}\u{2029}]*)""#).unwrap());

static RE_OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(").unwrap());

static RE_CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\)").unwrap());

static RE_SPACED_DOUBLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s"\s?"#).unwrap());

static RE_SPACED_SINGLE_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s'\s?").unwrap());

static RE_EXCLAMATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s?!\s?").unwrap());

static RE_QUESTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?\s?").unwrap());

static RE_LETTER_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]):").unwrap());

/// The cleaner's rules, in application order.
pub static CLEAN_RULES: [CleanRule; 12] = [
    CleanRule {
        name: "period",
        pattern: &RE_PERIOD,
        rewrite: Rewrite::Lookahead {
            accept: not_followed_by_digit,
            replacement: " ",
        },
    },
    CleanRule {
        name: "comma_spacing",
        pattern: &RE_COMMA,
        rewrite: Rewrite::Lookahead {
            accept: followed_by_non_space,
            replacement: ", ",
        },
    },
    CleanRule {
        name: "spaced_comma",
        pattern: &RE_SPACED_COMMA,
        rewrite: Rewrite::Template(" "),
    },
    CleanRule {
        name: "letter_comma",
        pattern: &RE_LETTER_COMMA,
        rewrite: Rewrite::Template("${1} "),
    },
    CleanRule {
        name: "quoted",
        pattern: &RE_QUOTED,
        rewrite: Rewrite::Template("${1}"),
    },
    CleanRule {
        name: "open_paren",
        pattern: &RE_OPEN_PAREN,
        rewrite: Rewrite::Template(""),
    },
    CleanRule {
        name: "close_paren",
        pattern: &RE_CLOSE_PAREN,
        rewrite: Rewrite::Template(""),
    },
    CleanRule {
        name: "spaced_double_quote",
        pattern: &RE_SPACED_DOUBLE_QUOTE,
        rewrite: Rewrite::Template(" "),
    },
    CleanRule {
        name: "spaced_single_quote",
        pattern: &RE_SPACED_SINGLE_QUOTE,
        rewrite: Rewrite::Template(" "),
    },
    CleanRule {
        name: "exclamation",
        pattern: &RE_EXCLAMATION,
        rewrite: Rewrite::Template(" "),
    },
    CleanRule {
        name: "question",
        pattern: &RE_QUESTION,
        rewrite: Rewrite::Template(" "),
    },
    CleanRule {
        name: "letter_colon",
        pattern: &RE_LETTER_COLON,
        rewrite: Rewrite::Template("${1}"),
    },
];

/// Cleans a chat message with the full rule table.
///
/// # Example
///
/// ```
/// use hancut::clean::clean_message;
///
/// assert_eq!(clean_message("Hello, world."), "Hello world ");
/// assert_eq!(clean_message("3.14 is pi."), "3.14 is pi ");
/// ```
pub fn clean_message(message: &str) -> String {
    clean_message_with(message, &CLEAN_RULES)
}

/// Cleans a chat message with an arbitrary, ordered subset of rules.
pub fn clean_message_with(message: &str, rules: &[CleanRule]) -> String {
    let mut result = message.to_string();

    for rule in rules {
        let rewritten = match rule.apply(&result) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };

        if let Some(rewritten) = rewritten {
            trace!(rule = rule.name(), "clean rule rewrote message");
            result = rewritten;
        }
    }

    result
}

/// Looks up a rule by name.
pub fn rule(name: &str) -> Option<&'static CleanRule> {
    CLEAN_RULES.iter().find(|rule| rule.name == name)
}
