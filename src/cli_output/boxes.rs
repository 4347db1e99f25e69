//! Simple line-based CLI output utilities.

use crate::auth::CredentialSummary;

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Print the main header.
///
/// ```text
/// CREDENTIAL STATUS
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
    println!();
}

/// Print a single status line.
///
/// ```text
/// [✓] Authenticated !
/// ```
pub fn print_status_line(icon: &str, message: &str) {
    println!("[{}] {}", icon, message);
}

/// Print an indented detail line.
pub fn print_detail(label: &str, value: &str) {
    println!("  {:<22} {}", format!("{}:", label), value);
}

/// Print troubleshooting lines.
pub fn print_troubleshoot(lines: &[&str]) {
    println!();
    for line in lines {
        println!("    {}", line);
    }
}

/// Print the footer separator.
pub fn print_footer() {
    println!("{}", "═".repeat(LINE_WIDTH));
}

/// Render a redacted credential summary.
///
/// ```text
///   Cookies:               7 (APISID, HSID, ...)
///   Service session ids:   2 (cl, cloudconsole)
///   Master token:          present
///   Authorization tokens:  1 (1 expired)
/// ```
pub fn print_summary(summary: &CredentialSummary) {
    print_detail("Cookies", &count_with_names(&summary.cookie_names));
    print_detail("Service session ids", &count_with_names(&summary.services));
    print_detail(
        "Master token",
        if summary.has_master_token {
            "present"
        } else {
            "missing"
        },
    );

    let scopes = &summary.authorization_scopes;
    let tokens = if summary.expired_scopes.is_empty() {
        count_with_names(scopes)
    } else {
        format!(
            "{} ({} expired: {})",
            scopes.len(),
            summary.expired_scopes.len(),
            summary.expired_scopes.join(", ")
        )
    };
    print_detail("Authorization tokens", &tokens);
}

fn count_with_names(names: &[String]) -> String {
    if names.is_empty() {
        "0".to_string()
    } else {
        format!("{} ({})", names.len(), names.join(", "))
    }
}

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
}
