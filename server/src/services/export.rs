//! CSV export of moderated messages.
//!
//! Rendering is pure string work here; the route layer streams the lines
//! out with download headers.

use model::Message;

/// Quote a CSV field, doubling any embedded quotes.
#[must_use]
pub fn csv_escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Render messages as CSV lines under a `Name,Email,Message,Date` header.
/// Anonymous submissions export as `Anonymous` with a blank email.
#[must_use]
pub fn csv_lines(messages: &[Message]) -> Vec<String> {
    let mut lines = Vec::with_capacity(messages.len() + 1);
    lines.push("Name,Email,Message,Date\n".to_owned());
    for message in messages {
        let name = message.author_name.as_deref().unwrap_or("Anonymous");
        let email = message.author_email.as_deref().unwrap_or("");
        let date = message.created_at.split('T').next().unwrap_or_default();
        lines.push(format!(
            "{},{},{},{}\n",
            csv_escape(name),
            csv_escape(email),
            csv_escape(&message.content),
            csv_escape(date),
        ));
    }
    lines
}

/// Current UTC date for export filenames (`YYYY-MM-DD`).
#[must_use]
pub fn file_date() -> String {
    time::OffsetDateTime::now_utc().date().to_string()
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
