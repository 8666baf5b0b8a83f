use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use listwise::actions::{Message, MessageLevel};
use listwise::records::{Campaign, Contact};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;
const MAX_CELL_WIDTH: usize = 36;

/// How a record shape renders as a table row. Lives in the client layer:
/// the library never formats anything.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
    /// Fields the `--search` flag looks at for this shape.
    fn search_fields() -> &'static [&'static str];
    /// Column index to run status coloring on, if any.
    fn status_column() -> Option<usize> {
        None
    }
}

impl TableRow for Contact {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "EMAIL", "STATUS", "TAGS", "JOINED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.status.to_string(),
            self.tags.join(", "),
            format_time_ago(self.joined_at),
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "email", "tags"]
    }

    fn status_column() -> Option<usize> {
        Some(3)
    }
}

impl TableRow for Campaign {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "SUBJECT", "STATUS", "RECIPIENTS", "SENT"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.subject.clone(),
            self.status.to_string(),
            format!("{}", self.recipients as i64),
            self.sent_at.clone().unwrap_or_else(|| "—".to_string()),
        ]
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "subject"]
    }

    fn status_column() -> Option<usize> {
        Some(3)
    }
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_notices(notices: &[String]) {
    for notice in notices {
        println!("{}", notice.dimmed());
    }
}

pub fn print_table<T: TableRow>(rows: &[T]) {
    if rows.is_empty() {
        println!("No records found.");
        return;
    }

    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| r.cells().iter().map(|c| clip(c)).collect())
        .collect();

    // Column widths from header and every cell.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if cell.width() > widths[i] {
                widths[i] = cell.width();
            }
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join(&" ".repeat(COLUMN_GAP));
    println!("{}", header_line.dimmed());

    for row in &cells {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padded = pad(cell, widths[i]);
                if T::status_column() == Some(i) {
                    color_status(&padded).to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(&" ".repeat(COLUMN_GAP));
        println!("{}", line);
    }

    println!(
        "{}",
        format!(
            "{} record{}",
            rows.len(),
            if rows.len() == 1 { "" } else { "s" }
        )
        .dimmed()
    );
}

fn color_status(s: &str) -> ColoredString {
    match s.trim() {
        "Subscribed" | "Sent" => s.green(),
        "Pending" | "Scheduled" | "Sending" | "Draft" => s.yellow(),
        "Unsubscribed" | "Bounced" | "Paused" => s.red(),
        _ => s.normal(),
    }
}

/// Pads to `width` display columns, wide characters included.
fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn clip(s: &str) -> String {
    if s.width() <= MAX_CELL_WIDTH {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > MAX_CELL_WIDTH - 1 {
            out.push('…');
            return out;
        }
        out.push(c);
        used += w;
    }
    out
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
