//! Status rendering.
//!
//! A [`Formatter`] formats one line (or block) per tier entry; the provided
//! [`Formatter::render`] walks the store and stitches them together:
//!
//! ```text
//! now
//! next
//! soon   (one entry per task; header on the first only)
//! later  (same)
//! ```
//!
//! A tier with no tasks is still rendered once, with an empty description.

mod color_block;
mod plain;

pub use color_block::ColorBlockFormatter;
pub use plain::PlainFormatter;

use serde::{Deserialize, Serialize};

use crate::store::TaskStore;

/// Formats the entries of a status report.
pub trait Formatter {
    fn format_now(&self, task: &str) -> String;

    fn format_next(&self, task: &str) -> String;

    /// `first` is true for the first `soon` entry only.
    fn format_soon(&self, task: &str, first: bool) -> String;

    /// `first` is true for the first `later` entry only.
    fn format_later(&self, task: &str, first: bool) -> String;

    fn render(&self, store: &TaskStore) -> String {
        let mut lines = vec![
            self.format_now(store.now().map_or("", |t| t.as_str())),
            self.format_next(store.next().map_or("", |t| t.as_str())),
        ];

        if store.soon().is_empty() {
            lines.push(self.format_soon("", true));
        }
        for (i, task) in store.soon().iter().enumerate() {
            lines.push(self.format_soon(task.as_str(), i == 0));
        }

        if store.later().is_empty() {
            lines.push(self.format_later("", true));
        }
        for (i, task) in store.later().iter().enumerate() {
            lines.push(self.format_later(task.as_str(), i == 0));
        }

        let mut output = lines.join("\n");
        output.push_str("\n\n");
        output
    }
}

/// Named rendering style, selected by `style:` in `config.yaml` or `--style`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum RenderStyle {
    /// Title bars and bullet lists
    #[default]
    Plain,
    /// Fixed-width blocks with a background colour per tier
    ColorBlock,
    /// The task record as pretty-printed JSON
    Json,
}

impl RenderStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::ColorBlock => "color_block",
            Self::Json => "json",
        }
    }
}

/// Render the status report for `store` in the given style.
pub fn render_status(style: RenderStyle, store: &TaskStore) -> serde_json::Result<String> {
    match style {
        RenderStyle::Plain => Ok(PlainFormatter.render(store)),
        RenderStyle::ColorBlock => Ok(ColorBlockFormatter.render(store)),
        RenderStyle::Json => {
            let mut json = serde_json::to_string_pretty(&store.to_record())?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags each entry so the stitching can be checked without any styling.
    struct Tagged;

    impl Formatter for Tagged {
        fn format_now(&self, task: &str) -> String {
            format!("now:{task}")
        }

        fn format_next(&self, task: &str) -> String {
            format!("next:{task}")
        }

        fn format_soon(&self, task: &str, first: bool) -> String {
            format!("soon{}:{task}", if first { "*" } else { "" })
        }

        fn format_later(&self, task: &str, first: bool) -> String {
            format!("later{}:{task}", if first { "*" } else { "" })
        }
    }

    #[test]
    fn test_empty_store_renders_placeholders() {
        let output = Tagged.render(&TaskStore::new());
        assert_eq!(output, "now:\nnext:\nsoon*:\nlater*:\n\n");
    }

    #[test]
    fn test_header_only_on_first_entry() {
        let mut store = TaskStore::new();
        store.set_now("A").unwrap();
        store.set_next("B").unwrap();
        store.append_soon("C").unwrap();
        store.append_soon("D").unwrap();
        store.append_later("E").unwrap();

        let output = Tagged.render(&store);
        assert_eq!(output, "now:A\nnext:B\nsoon*:C\nsoon:D\nlater*:E\n\n");
    }

    #[test]
    fn test_json_style_emits_record() {
        let mut store = TaskStore::new();
        store.set_now("A").unwrap();

        let output = render_status(RenderStyle::Json, &store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["now"], "A");
        assert!(value.get("next").is_none());
        assert_eq!(value["soon"], serde_json::json!([]));
    }
}
