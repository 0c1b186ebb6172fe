use chrono::{DateTime, Utc};
use colored::Colorize;
use photoindex::api::{CmdMessage, DisplayPhoto, MessageLevel};
use serde::Serialize;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const UNAVAILABLE_MARKER: &str = "(unavailable)";

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub fn render_photo_list(photos: &[DisplayPhoto]) -> String {
    if photos.is_empty() {
        return "No photos yet.\n".to_string();
    }

    let mut out = String::new();
    for dp in photos {
        let idx_str = format!("{:>3}. ", dp.index);
        let marker = if dp.record.unreadable {
            format!(" {}", UNAVAILABLE_MARKER)
        } else {
            String::new()
        };
        let time_ago = dp
            .record
            .storage_key
            .millis()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(format_time_ago)
            .unwrap_or_else(|| " ".repeat(TIME_WIDTH));

        let fixed_width = idx_str.width() + marker.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let key = truncate_to_width(dp.record.storage_key.as_str(), available);
        let padding = available.saturating_sub(key.width());

        out.push_str(&format!(
            "{}{}{}{}{}\n",
            idx_str.yellow(),
            key,
            marker.red(),
            " ".repeat(padding),
            time_ago.dimmed()
        ));
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPhoto<'a> {
    index: usize,
    storage_key: &'a str,
    available: bool,
}

pub fn render_photo_json(photos: &[DisplayPhoto]) -> serde_json::Result<String> {
    let rows: Vec<JsonPhoto> = photos
        .iter()
        .map(|dp| JsonPhoto {
            index: dp.index,
            storage_key: dp.record.storage_key.as_str(),
            available: !dp.record.unreadable,
        })
        .collect();
    serde_json::to_string_pretty(&rows)
}

pub fn render_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("{}\n", p.display()))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());

    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
