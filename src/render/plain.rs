use super::Formatter;

const WIDTH: usize = 45;
const PADDING_BEFORE: usize = WIDTH / 3;
const PADDING_AFTER: usize = WIDTH - PADDING_BEFORE;

/// Undecorated text: a title bar per tier followed by `- task` lines.
///
/// ```text
/// =============== now ================================
/// - fix bug
///
/// =============== next ===============================
/// - write docs
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

fn title(text: &str) -> String {
    let trailing = (PADDING_AFTER + 7).saturating_sub(text.len() + 2);
    format!("{} {} {}", "=".repeat(PADDING_BEFORE), text, "=".repeat(trailing))
}

impl Formatter for PlainFormatter {
    fn format_now(&self, task: &str) -> String {
        format!("{}\n- {}", title("now"), task)
    }

    fn format_next(&self, task: &str) -> String {
        format!("\n{}\n- {}", title("next"), task)
    }

    fn format_soon(&self, task: &str, first: bool) -> String {
        if first {
            format!("\n{}\n- {}", title("soon"), task)
        } else {
            format!("- {}", task)
        }
    }

    fn format_later(&self, task: &str, first: bool) -> String {
        if first {
            format!("\n{}\n- {}", title("later"), task)
        } else {
            format!("- {}", task)
        }
    }
}
