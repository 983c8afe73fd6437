//! Keyword-driven gitmoji classification
//!
//! Commit text is matched against a priority-ordered table of word-boundary
//! patterns. The first rule that matches decides the gitmoji; later rules are
//! never consulted, so specific intents (security, docs, tests) sit above the
//! generic ones (fix, add).

use regex::Regex;
use serde::Serialize;
use std::fmt::Write;
use std::sync::LazyLock;

/// Emoji used when no rule matches
pub const DEFAULT_EMOJI: &str = "✨";
/// Description used when no rule matches
pub const DEFAULT_DESCRIPTION: &str = "sparkles - general change";

/// A single classification rule
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    keywords: &'static str,
    /// Emoji glyph emitted for this rule
    pub emoji: &'static str,
    /// Gitmoji short code, e.g. `lock`
    pub code: &'static str,
    /// What the gitmoji stands for
    pub summary: &'static str,
}

impl Rule {
    fn new(
        keywords: &'static str,
        emoji: &'static str,
        code: &'static str,
        summary: &'static str,
    ) -> Self {
        let pattern = Regex::new(&format!(r"\b({keywords})\b"))
            .expect("built-in gitmoji pattern should compile");
        Self {
            pattern,
            keywords,
            emoji,
            code,
            summary,
        }
    }

    /// Whether the rule matches already-lowercased text
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Keyword alternation this rule matches on
    pub fn keywords(&self) -> &'static str {
        self.keywords
    }

    /// `"<code> - <summary>"`
    pub fn description(&self) -> String {
        format!("{} - {}", self.code, self.summary)
    }
}

/// Rule table in priority order. More specific intents come first.
static GITMOJI_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Security wins over a plain bug fix
        Rule::new(
            "security|secure|vulnerability|cve|exploit|xss|csrf|patch",
            "🔐",
            "lock",
            "fix security vulnerability",
        ),
        // Docs before features, "add docs" is still documentation
        Rule::new(
            "doc|docs|documentation|readme|guide|comment",
            "📝",
            "memo",
            "documentation",
        ),
        Rule::new(
            "test|tests|unit test|integration test",
            "🧪",
            "test_tube",
            "add/update tests",
        ),
        Rule::new("fix|bug|bugfix|issue", "🐛", "bug", "bug fix"),
        // Refactor shadows the later "cleanup" removal rule
        Rule::new(
            "refactor|refactoring|extract|clean|cleanup|reorgan",
            "♻️",
            "recycle",
            "refactor code",
        ),
        Rule::new(
            "perf|performance|optimize|optimized|speed|faster|efficient",
            "⚡",
            "zap",
            "improve performance",
        ),
        Rule::new(
            "style|ui|css|design|theme|color|layout|component|visual",
            "💄",
            "lipstick",
            "add/update UI or styles",
        ),
        Rule::new(
            "dependencies|depend|npm|package|upgrade|install|version",
            "📦",
            "package",
            "add/update dependencies",
        ),
        Rule::new(
            "build|config|configuration|setup|webpack|babel|tsconfig|env",
            "⚙️",
            "gear",
            "configuration changes",
        ),
        Rule::new(
            "rewrite|major|breaking|redesign|rework",
            "🔨",
            "hammer",
            "major refactoring",
        ),
        Rule::new(
            "remove|delete|unused|deprecated|cleanup",
            "🗑️",
            "wastebasket",
            "remove files/code",
        ),
        // Generic feature words go last
        Rule::new("feat|new|feature|add", "✨", "sparkles", "new feature"),
    ]
});

static LEADING_GLYPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\w\s]\s").expect("leading glyph pattern should compile")
});

/// The suggested gitmoji for a piece of commit text
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Gitmoji {
    pub emoji: String,
    pub description: String,
}

impl Gitmoji {
    fn from_rule(rule: &Rule) -> Self {
        Self {
            emoji: rule.emoji.to_string(),
            description: rule.description(),
        }
    }

    /// Fallback used when nothing in the table matches
    pub fn general_change() -> Self {
        Self {
            emoji: DEFAULT_EMOJI.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::general_change()
    }
}

/// All rules in the order they are evaluated
pub fn rules() -> &'static [Rule] {
    &GITMOJI_RULES
}

/// Classify commit text, first matching rule wins
pub fn classify(text: &str) -> Gitmoji {
    let lowered = text.to_lowercase();

    rules()
        .iter()
        .find(|rule| rule.is_match(&lowered))
        .map_or_else(Gitmoji::general_change, Gitmoji::from_rule)
}

/// Returns the glyph when the message already starts with one, e.g. `"🐛 fix"`.
///
/// Only a single non-word, non-space character followed by whitespace counts.
pub fn extract_gitmoji_from_message(message: &str) -> Option<char> {
    LEADING_GLYPH
        .find(message)
        .and_then(|m| m.as_str().chars().next())
}

/// Human readable listing of the rule table, one line per rule
pub fn get_gitmoji_list() -> String {
    let mut list = String::new();
    for rule in rules() {
        writeln!(list, "{} - :{}: - {}", rule.emoji, rule.code, rule.summary)
            .expect("write to string should not fail");
    }
    writeln!(list, "{DEFAULT_EMOJI} - (default) - {DEFAULT_DESCRIPTION}")
        .expect("write to string should not fail");
    list
}
