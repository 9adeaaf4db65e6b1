//! Console formatting for conversation turns

use colored::Colorize;
use samvaad_domain::{ChoiceOption, ConversationMessage, MessageOrigin, StudentFilters};

/// Formats conversation turns for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one transcript turn.
    pub fn format_message(message: &ConversationMessage) -> String {
        if message.kind.is_notice() {
            return format!("  {}", format!("· {} ·", message.text).dimmed());
        }
        match message.origin {
            MessageOrigin::User => format!("{} {}", "You:".blue().bold(), message.text),
            MessageOrigin::Assistant => {
                format!("{} {}", "Samvaad:".cyan().bold(), message.text)
            }
        }
    }

    /// Format a numbered option menu.
    pub fn format_options(options: &[ChoiceOption]) -> String {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("  {} {}", format!("[{}]", i + 1).yellow(), option.label))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the source documents of an answer, if any.
    pub fn format_sources(sources: &[String]) -> Option<String> {
        if sources.is_empty() {
            return None;
        }
        Some(
            format!("  Sources: {}", sources.join(", "))
                .dimmed()
                .to_string(),
        )
    }

    /// Format the current academic filters on one line.
    pub fn format_filters(filters: &StudentFilters) -> String {
        format!(
            "Batch: {} | Branch: {} | Semester: {} | Documents: {}",
            filters.batch.bold(),
            filters.branch.bold(),
            filters.semester.bold(),
            filters.doc_type.bold()
        )
    }

    pub fn welcome_banner() -> String {
        [
            "",
            "╭─────────────────────────────────────────────╮",
            "│              Samvaad - LDRP ITR             │",
            "╰─────────────────────────────────────────────╯",
            "",
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samvaad_domain::MessageId;

    fn plain(s: &str) -> String {
        // colored inserts escape codes only on a tty; in tests we still
        // normalize to be safe
        String::from_utf8(strip_ansi(s.as_bytes())).unwrap()
    }

    fn strip_ansi(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len());
        let mut in_escape = false;
        for &b in bytes {
            match (in_escape, b) {
                (false, 0x1b) => in_escape = true,
                (false, _) => out.push(b),
                (true, b'm') => in_escape = false,
                (true, _) => {}
            }
        }
        out
    }

    #[test]
    fn test_user_and_assistant_prefixes() {
        let user = ConversationMessage::user(MessageId(1), "hello");
        assert_eq!(plain(&ConsoleFormatter::format_message(&user)), "You: hello");

        let bot = ConversationMessage::assistant(MessageId(2), "hi there");
        assert_eq!(
            plain(&ConsoleFormatter::format_message(&bot)),
            "Samvaad: hi there"
        );
    }

    #[test]
    fn test_notices_render_distinctly() {
        let notice = ConversationMessage::correction_notice(MessageId(1), "Did you mean: \"x\"?");
        let rendered = plain(&ConsoleFormatter::format_message(&notice));
        assert_eq!(rendered, "  · Did you mean: \"x\"? ·");
    }

    #[test]
    fn test_options_are_numbered_in_order() {
        let options = vec![
            ChoiceOption::new("College Timings", "visitor_q1"),
            ChoiceOption::new("End Chat", "end_chat"),
        ];
        let rendered = plain(&ConsoleFormatter::format_options(&options));
        assert_eq!(rendered, "  [1] College Timings\n  [2] End Chat");
    }

    #[test]
    fn test_sources_hidden_when_empty() {
        assert!(ConsoleFormatter::format_sources(&[]).is_none());
        let some = ConsoleFormatter::format_sources(&["a.pdf".to_string()]).unwrap();
        assert!(plain(&some).contains("a.pdf"));
    }
}
