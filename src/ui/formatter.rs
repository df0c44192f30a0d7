use crate::validator::ValidMessage;

pub const VALID_NOTICE: &str = "Commit message is valid.";
pub const INVALID_NOTICE: &str = "Commit message is invalid.";

/// Renders the full stdout report for one validation.
///
/// The layout is fixed because hook callers and their users read it:
///
/// ```text
/// Commit Message:
/// <message>
///
/// Title:
/// <title>
///
/// Commit message is valid.
/// ```
///
/// The `Title:` block is omitted and the notice switches to the invalid one
/// when there is no match.
pub fn format_report(message: &str, outcome: Option<&ValidMessage>) -> String {
    let mut report = format!("Commit Message:\n{}\n\n", message);

    match outcome {
        Some(valid) => {
            report.push_str(&format!("Title:\n{}\n\n", valid.title));
            report.push_str(VALID_NOTICE);
        }
        None => report.push_str(INVALID_NOTICE),
    }

    report.push('\n');
    report
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", console::style("ERROR:").red().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_report_layout() {
        let valid = ValidMessage {
            title: "feat".to_string(),
        };
        assert_eq!(
            format_report("feat: add login page", Some(&valid)),
            "Commit Message:\nfeat: add login page\n\nTitle:\nfeat\n\nCommit message is valid.\n"
        );
    }

    #[test]
    fn test_invalid_report_layout() {
        assert_eq!(
            format_report("WIP", None),
            "Commit Message:\nWIP\n\nCommit message is invalid.\n"
        );
    }

    #[test]
    fn test_empty_message_report() {
        assert_eq!(
            format_report("", None),
            "Commit Message:\n\n\nCommit message is invalid.\n"
        );
    }

    #[test]
    fn test_multiline_message_echoed_verbatim() {
        let report = format_report("feat: summary\n\nBody text", None);
        assert!(report.starts_with("Commit Message:\nfeat: summary\n\nBody text\n\n"));
    }

    #[test]
    fn test_error_contains_message() {
        assert!(format_error("bad config").contains("bad config"));
        assert!(format_error("bad config").contains("ERROR:"));
    }
}
