// src/formatting.rs

/// A trait for rendering a description and a batch of log lines into a
/// single notification body.
pub trait TextFormatter: Send + Sync {
    fn format_message(&self, description: &str, logs: &[String]) -> String;
}

/// The plain-text layout subscribers of the topic receive:
///
/// ```text
/// Description:
/// <description>
///
/// Logs:
/// <log line 1>
/// <log line 2>
/// ```
///
/// Every line, including the last log line, ends with `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn format_message(&self, description: &str, logs: &[String]) -> String {
        format_message(description, logs)
    }
}

/// Renders the notification body. See [`PlainTextFormatter`] for the layout.
pub fn format_message(description: &str, logs: &[String]) -> String {
    let capacity = "Description:\n\n\nLogs:\n".len()
        + description.len()
        + logs.iter().map(|l| l.len() + 1).sum::<usize>();

    let mut msg = String::with_capacity(capacity);
    msg.push_str("Description:\n");
    msg.push_str(description);
    msg.push('\n');
    msg.push('\n');
    msg.push_str("Logs:\n");
    for line in logs {
        msg.push_str(line);
        msg.push('\n');
    }
    msg
}
