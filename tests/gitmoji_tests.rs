use gitmoji_selector::gitmoji::{
    DEFAULT_DESCRIPTION, DEFAULT_EMOJI, Gitmoji, classify, extract_gitmoji_from_message,
    get_gitmoji_list, rules,
};

fn assert_gitmoji(text: &str, emoji: &str, description: &str) {
    let gitmoji = classify(text);
    assert_eq!(gitmoji.emoji, emoji, "emoji for {text:?}");
    assert_eq!(gitmoji.description, description, "description for {text:?}");
}

#[test]
fn test_security_beats_feature_words() {
    assert_gitmoji("add a security patch", "🔐", "lock - fix security vulnerability");
    assert_gitmoji("fix XSS in comment form", "🔐", "lock - fix security vulnerability");
}

#[test]
fn test_bug_fix() {
    assert_gitmoji("fix bug in parser", "🐛", "bug - bug fix");
}

#[test]
fn test_refactor_beats_cleanup_removal() {
    assert_gitmoji("refactor and cleanup old code", "♻️", "recycle - refactor code");
    assert_gitmoji("cleanup", "♻️", "recycle - refactor code");
}

#[test]
fn test_documentation_beats_feature() {
    assert_gitmoji("add docs for the cli", "📝", "memo - documentation");
}

#[test]
fn test_each_category() {
    let cases = [
        ("add unit tests for parser", "🧪", "test_tube - add/update tests"),
        ("improve speed of startup", "⚡", "zap - improve performance"),
        ("tweak the button css", "💄", "lipstick - add/update UI or styles"),
        ("bump npm dependencies", "📦", "package - add/update dependencies"),
        ("update webpack config", "⚙️", "gear - configuration changes"),
        ("rework the pipeline", "🔨", "hammer - major refactoring"),
        ("delete unused files", "🗑️", "wastebasket - remove files/code"),
        ("new login page", "✨", "sparkles - new feature"),
    ];

    for (text, emoji, description) in cases {
        assert_gitmoji(text, emoji, description);
    }
}

#[test]
fn test_unmatched_text_uses_default() {
    for text in ["", "tweak things", "prefix the output", "testing", "😀 🎉"] {
        let gitmoji = classify(text);
        assert!(gitmoji.is_default(), "expected default for {text:?}");
        assert_eq!(gitmoji.emoji, DEFAULT_EMOJI);
        assert_eq!(gitmoji.description, DEFAULT_DESCRIPTION);
    }
}

#[test]
fn test_word_boundaries_reject_substrings() {
    assert_eq!(classify("defeated"), Gitmoji::general_change());
    assert_eq!(classify("addition to the warehouse"), Gitmoji::general_change());
}

#[test]
fn test_matching_is_case_insensitive() {
    assert_eq!(classify("FIX THE BUG"), classify("fix the bug"));
    assert_eq!(classify("Update README"), classify("update readme"));
}

#[test]
fn test_non_ascii_text() {
    assert_gitmoji("修复 bug", "🐛", "bug - bug fix");
}

#[test]
fn test_rule_order_is_stable() {
    let codes: Vec<&str> = rules().iter().map(|rule| rule.code).collect();
    assert_eq!(
        codes,
        [
            "lock",
            "memo",
            "test_tube",
            "bug",
            "recycle",
            "zap",
            "lipstick",
            "package",
            "gear",
            "hammer",
            "wastebasket",
            "sparkles",
        ]
    );
    assert_eq!(rules()[3].keywords(), "fix|bug|bugfix|issue");
}

#[test]
fn test_every_listed_keyword_matches_its_rule() {
    for rule in rules() {
        for keyword in rule.keywords().split('|') {
            assert!(rule.is_match(keyword), "{keyword:?} should match :{}:", rule.code);
        }
    }
}

#[test]
fn test_extract_leading_gitmoji() {
    assert_eq!(extract_gitmoji_from_message("🐛 fix crash"), Some('🐛'));
    assert_eq!(extract_gitmoji_from_message(": odd prefix"), Some(':'));
    assert_eq!(extract_gitmoji_from_message("fix crash"), None);
    assert_eq!(extract_gitmoji_from_message("🐛fix crash"), None);
    assert_eq!(extract_gitmoji_from_message(" 🐛 fix"), None);
    assert_eq!(extract_gitmoji_from_message(""), None);
}

#[test]
fn test_extraction_does_not_affect_classification() {
    assert_eq!(classify("🐛 fix crash"), classify("fix crash"));
}

#[test]
fn test_gitmoji_list() {
    let list = get_gitmoji_list();
    let lines: Vec<&str> = list.lines().collect();

    assert_eq!(lines.len(), rules().len() + 1);
    assert_eq!(lines[0], "🔐 - :lock: - fix security vulnerability");
    assert_eq!(lines[11], "✨ - :sparkles: - new feature");
    assert_eq!(lines[12], "✨ - (default) - sparkles - general change");
}
