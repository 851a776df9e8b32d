//! ANSI terminal rendering for numerals and their Arabic values.
//!
//! Colours glyphs by digit class so the group structure of a long numeral is
//! visible at a glance, and formats large integers with thousands separators.

use std::io::IsTerminal;

use num_bigint::BigUint;

use crate::glyph::catalog::{self, DigitClass};

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";

/// Configuration for terminal rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Enable ANSI color codes.
    pub color: bool,
    /// Insert thousands separators into Arabic output.
    pub group_digits: bool,
    /// Separator used when `group_digits` is set.
    pub separator: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
            group_digits: true,
            separator: ',',
        }
    }
}

fn class_color(class: DigitClass) -> &'static str {
    match class {
        DigitClass::Ones => CYAN,
        DigitClass::Tens => GREEN,
        DigitClass::Hundred => YELLOW,
        DigitClass::Myriad => MAGENTA,
    }
}

/// Render a numeral string, colouring each glyph by its digit class.
///
/// Characters outside the catalog are shown in red so a typo stands out.
pub fn render_numeral(numeral: &str, config: &RenderConfig) -> String {
    if !config.color {
        return numeral.to_string();
    }
    let mut out = String::with_capacity(numeral.len() * 3);
    for ch in numeral.chars() {
        let color = catalog::classify(ch).map_or(RED, class_color);
        out.push_str(color);
        out.push(ch);
        out.push_str(RESET);
    }
    out
}

/// Render an Arabic value, grouped per `config`.
pub fn render_value(value: &BigUint, config: &RenderConfig) -> String {
    let text = if config.group_digits {
        format_grouped(value, config.separator)
    } else {
        value.to_string()
    };
    if config.color {
        format!("{BOLD}{text}{RESET}")
    } else {
        text
    }
}

/// Format an integer with a separator every three digits: `1,234,567`.
pub fn format_grouped(value: &BigUint, separator: char) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(d);
    }
    out
}

/// A keypad-style legend of all numerals, grouped by class.
pub fn render_legend(config: &RenderConfig) -> String {
    let (bold, reset) = if config.color { (BOLD, RESET) } else { ("", "") };
    let mut lines = vec![format!("{bold}Ge'ez Numerals{reset}"), String::new()];

    let sections = [
        (DigitClass::Ones, "Ones"),
        (DigitClass::Tens, "Tens"),
        (DigitClass::Hundred, "Multipliers"),
    ];
    for (class, title) in sections {
        lines.push(format!("  {bold}{title}{reset}:"));
        let members = catalog::all_numerals().iter().filter(|n| match class {
            DigitClass::Hundred => n.class.is_multiplier(),
            c => n.class == c,
        });
        for n in members {
            let glyph = render_numeral(&n.glyph.to_string(), config);
            lines.push(format!("    {glyph}  {:>6}  {}", n.value, n.label));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> RenderConfig {
        RenderConfig {
            color: false,
            ..Default::default()
        }
    }

    #[test]
    fn grouping() {
        assert_eq!(format_grouped(&BigUint::from(1u32), ','), "1");
        assert_eq!(format_grouped(&BigUint::from(999u32), ','), "999");
        assert_eq!(format_grouped(&BigUint::from(1000u32), ','), "1,000");
        assert_eq!(
            format_grouped(&BigUint::from(123_456_789u64), ' '),
            "123 456 789"
        );
        assert_eq!(format_grouped(&BigUint::from(12_345u32), ','), "12,345");
    }

    #[test]
    fn no_color_mode_is_passthrough() {
        assert_eq!(render_numeral("፻፳፫", &plain()), "፻፳፫");
        assert!(!render_legend(&plain()).contains("\x1b["));
    }

    #[test]
    fn colored_output_contains_ansi() {
        let config = RenderConfig {
            color: true,
            ..Default::default()
        };
        let rendered = render_numeral("፻፳፫", &config);
        assert!(rendered.contains(YELLOW));
        assert!(rendered.contains(GREEN));
        assert!(rendered.contains(CYAN));
        assert!(render_numeral("x", &config).contains(RED));
    }

    #[test]
    fn value_respects_grouping_flag() {
        let v = BigUint::from(10_000u32);
        assert_eq!(render_value(&v, &plain()), "10,000");
        let ungrouped = RenderConfig {
            group_digits: false,
            ..plain()
        };
        assert_eq!(render_value(&v, &ungrouped), "10000");
    }

    #[test]
    fn legend_lists_every_numeral() {
        let legend = render_legend(&plain());
        for n in catalog::all_numerals() {
            assert!(legend.contains(n.glyph), "legend missing {}", n.glyph);
        }
        assert!(legend.contains("myriad (stackable)"));
    }
}
