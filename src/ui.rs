use crate::gitmoji::{DEFAULT_DESCRIPTION, DEFAULT_EMOJI, Rule};
use colored::Colorize;
use std::fmt::Write;

// RGB tuple constants for use with the `colored` crate's `.truecolor()` method
pub mod rgb {
    pub const ELECTRIC_PURPLE: (u8, u8, u8) = (225, 53, 255);
    pub const NEON_CYAN: (u8, u8, u8) = (128, 255, 234);
    pub const CORAL: (u8, u8, u8) = (255, 106, 193);
    pub const DIM_WHITE: (u8, u8, u8) = (180, 180, 190);
}

/// Two-line usage text, exactly as printed on a usage error
pub fn usage_text(bin: &str) -> String {
    format!("Usage: {bin} <commit-message>\n       {bin} --conventional <type> [scope] <message>")
}

/// Usage errors always go to stderr, uncolored so they stay script friendly
pub fn print_usage(bin: &str) {
    eprintln!("{}", usage_text(bin));
}

pub fn print_version(version: &str) {
    println!(
        "{} {} {}",
        "✨ gitmoji-selector".magenta().bold(),
        "version".cyan(),
        version.green()
    );
}

/// Colored rendering of the rule table in evaluation order, with keywords
pub fn format_rule_table(rules: &[Rule]) -> String {
    let (pr, pg, pb) = rgb::ELECTRIC_PURPLE;
    let (cr, cg, cb) = rgb::NEON_CYAN;
    let (dr, dg, db) = rgb::DIM_WHITE;
    let mut out = String::new();

    for (index, rule) in rules.iter().enumerate() {
        let position = format!("{:>2}.", index + 1);
        let code = format!(":{}:", rule.code);
        let keywords = rule.keywords().replace('|', ", ");
        writeln!(
            out,
            "{} {} {} {}\n     {}",
            position.truecolor(dr, dg, db),
            rule.emoji,
            code.truecolor(pr, pg, pb).bold(),
            rule.summary.truecolor(cr, cg, cb),
            keywords.truecolor(dr, dg, db)
        )
        .expect("write to string should not fail");
    }

    let (r, g, b) = rgb::CORAL;
    let fallback = format!("default: {DEFAULT_EMOJI} {DEFAULT_DESCRIPTION}");
    writeln!(out, "{}", fallback.truecolor(r, g, b).italic())
        .expect("write to string should not fail");

    out
}

pub fn print_error(message: &str) {
    eprintln!("{}", message.red().bold());
}
