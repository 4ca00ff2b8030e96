//! Human-readable rendering of a checkup run.
//!
//! Rendering is a pure consumer of [`RunSummary`]; it never alters
//! pass/fail decisions.

use bug_hunter_core::{HealthTier, ProbeResult, RunSummary};

pub mod colors {
    pub const GREEN: &str = "\x1b[92m";
    pub const YELLOW: &str = "\x1b[93m";
    pub const RED: &str = "\x1b[91m";
    pub const BLUE: &str = "\x1b[94m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

const BANNER_WIDTH: usize = 60;

/// Steps shown once the installation is usable.
const NEXT_STEPS: [&str; 3] = [
    "1. Start the server: ./bug-hunter-server",
    "2. Restart Claude Desktop to load the MCP integration",
    "3. Ask for a status check: @bug-hunter system status",
];

pub fn print_report(summary: &RunSummary, use_colors: bool) {
    print_header("Bug Hunter Installation Checkup", use_colors);

    for result in &summary.results {
        print_result_line(result, use_colors);
    }

    print_header("Checkup Summary", use_colors);
    print_verdict(summary, use_colors);
}

fn paint(text: &str, color: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{color}{text}{reset}", reset = colors::RESET)
    } else {
        text.to_string()
    }
}

fn print_header(title: &str, use_colors: bool) {
    let rule = "=".repeat(BANNER_WIDTH);
    let style = format!("{}{}", colors::BOLD, colors::BLUE);

    println!();
    println!("{}", paint(&rule, &style, use_colors));
    println!("{}", paint(&format!(" {title} "), &style, use_colors));
    println!("{}", paint(&rule, &style, use_colors));
    println!();
}

fn print_result_line(result: &ProbeResult, use_colors: bool) {
    let (glyph, color) = if result.passed {
        ("✅", colors::GREEN)
    } else {
        ("❌", colors::RED)
    };

    println!("{}", paint(&format!("{glyph} {}", result.name), color, use_colors));
    if !result.message.is_empty() {
        println!("   {}", result.message);
    }
}

fn print_verdict(summary: &RunSummary, use_colors: bool) {
    let tier = summary.tier();
    match tier {
        HealthTier::Healthy => {
            println!(
                "{}",
                paint(
                    &format!("🎉 All checks passed! ({}/{})", summary.passed, summary.total),
                    colors::GREEN,
                    use_colors,
                )
            );
            println!(
                "{}",
                paint(
                    "✅ Bug Hunter is properly installed and ready to use!",
                    colors::GREEN,
                    use_colors,
                )
            );
        }
        HealthTier::Degraded => {
            println!(
                "{}",
                paint(
                    &format!(
                        "⚠️  Most checks passed ({}/{} - {:.1}%)",
                        summary.passed, summary.total, summary.success_rate
                    ),
                    colors::YELLOW,
                    use_colors,
                )
            );
            println!(
                "{}",
                paint("🔧 Some configuration may be needed", colors::YELLOW, use_colors)
            );
        }
        HealthTier::Broken => {
            println!(
                "{}",
                paint(
                    &format!(
                        "❌ Installation issues detected ({}/{} - {:.1}%)",
                        summary.passed, summary.total, summary.success_rate
                    ),
                    colors::RED,
                    use_colors,
                )
            );
            println!(
                "{}",
                paint(
                    "🛠️  Review the failed checks and run the installer again",
                    colors::RED,
                    use_colors,
                )
            );
        }
    }

    if shows_next_steps(tier) {
        println!();
        println!("{}", paint("🚀 Next Steps:", colors::BOLD, use_colors));
        for step in NEXT_STEPS {
            println!("{step}");
        }
    }
}

/// Next-steps guidance appears only when the installation is usable.
fn shows_next_steps(tier: HealthTier) -> bool {
    tier != HealthTier::Broken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_only_when_colored() {
        assert_eq!(paint("ok", colors::GREEN, false), "ok");
        assert_eq!(
            paint("ok", colors::GREEN, true),
            format!("{}ok{}", colors::GREEN, colors::RESET),
        );
    }

    #[test]
    fn next_steps_gated_on_tier() {
        assert!(shows_next_steps(HealthTier::Healthy));
        assert!(shows_next_steps(HealthTier::Degraded));
        assert!(!shows_next_steps(HealthTier::Broken));
    }

    #[test]
    fn print_report_tolerates_empty_messages() {
        let summary = RunSummary::from_results(vec![ProbeResult::pass("Quiet Probe", "")]);
        // Must not panic; output goes to stdout.
        print_report(&summary, false);
    }
}
