//! View rendering.
//!
//! The whole presentation is derived from session state: header with post
//! count and search line, the visible post list, the archive panel when
//! shown, and the footer. The shell re-renders after every event. The
//! archive pool is fixed at startup, so its formatted body is built once
//! and cached by the shell.

use chrono::Utc;
use colored::*;
use once_cell::sync::Lazy;
use unicode_width::UnicodeWidthStr;

use ablog::api::BlogApi;
use ablog::commands::{CmdMessage, MessageLevel};
use ablog::index::DisplayPost;

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

static TIME_FORMATTER: Lazy<timeago::Formatter> = Lazy::new(timeago::Formatter::new);

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Header, visible post list, archive panel, footer.
///
/// `archive_body` is the cached panel body; `None` renders and returns it
/// so the shell can keep it for the rest of the session.
pub fn render_view(api: &BlogApi, listed: &[DisplayPost], archive_body: &mut Option<String>) {
    let dark = api.theme().is_dark();

    let badge = if dark { "🌙 dark mode" } else { "☀️  light mode" };
    println!();
    println!("{}  {}", "⚛️  The Atomic Blog".bold(), badge.dimmed());
    println!("🚀 {} atomic posts found", api.store().len());
    if !api.store().search_text().is_empty() {
        println!("Search: {:?}", api.store().search_text());
    }
    println!();

    if listed.is_empty() {
        println!("{}", "No posts to show.".dimmed());
    } else {
        for dp in listed {
            print_post_line(dp, dark);
        }
    }

    if api.archive().is_visible() {
        println!();
        println!(
            "{}",
            format!(
                "Post archive in addition to {} main posts",
                api.store().len()
            )
            .bold()
        );
        let body =
            archive_body.get_or_insert_with(|| format_archive_body(api));
        print!("{}", body);
    }

    println!();
    println!("{}", "© by The Atomic Blog ✌️".dimmed());
}

fn print_post_line(dp: &DisplayPost, dark: bool) {
    let idx_str = format!("{}. ", dp.index);

    let body_preview: String = dp
        .post
        .body
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let line = if body_preview.is_empty() {
        dp.post.title.clone()
    } else {
        format!("{} {}", dp.post.title, body_preview)
    };

    let fixed = 4 + idx_str.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let display = truncate_to_width(&line, available);
    let padding = available.saturating_sub(display.width());

    let title_colored = if dark {
        display.bright_white()
    } else {
        display.normal()
    };

    println!(
        "    {}{}{}{}",
        idx_str,
        title_colored,
        " ".repeat(padding),
        format_time_ago(dp.post.created_at).dimmed()
    );
}

fn format_archive_body(api: &BlogApi) -> String {
    let mut out = String::new();
    for (i, entry) in api.archive().entries().iter().enumerate() {
        out.push_str(&format!("  a{}. {}: {}\n", i + 1, entry.title, entry.body));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = TIME_FORMATTER.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
