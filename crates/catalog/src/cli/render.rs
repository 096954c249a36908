//! Terminal rendering for command results.
//!
//! Every function returns a `String`; printing is the caller's job. Layout
//! (column widths, truncation, padding) is computed on plain text before any style
//! is applied, since escape codes would throw the widths off. The `_internal`
//! variants take `use_color` so tests can render without escape codes.

use super::styles;
use catalogapp::commands::{CmdMessage, CmdResult, MessageLevel, QueueSnapshot};
use catalogapp::model::Item;
use console::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const NAME_WIDTH: usize = 24;
const CATEGORY_WIDTH: usize = 16;
const GUTTER: &str = "  ";

fn styled(style: &Style, use_color: Option<bool>) -> Style {
    match use_color {
        Some(enabled) => style.clone().force_styling(enabled),
        None => style.clone(),
    }
}

/// Prints everything a command result carries, in display order.
pub fn print_result(result: &CmdResult) {
    let output = render_result(result);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_result(result: &CmdResult) -> String {
    render_result_internal(result, None)
}

fn render_result_internal(result: &CmdResult, use_color: Option<bool>) -> String {
    let mut output = String::new();
    if !result.listed_items.is_empty() {
        output.push_str(&render_item_list_internal(&result.listed_items, use_color));
    }
    if let Some(queues) = &result.queues {
        output.push_str(&render_queues_internal(queues, use_color));
    }
    output.push_str(&render_messages_internal(&result.messages, use_color));
    output
}

/// Items as aligned rows: id, name, category, description.
fn render_item_list_internal(items: &[Item], use_color: Option<bool>) -> String {
    let id_width = items
        .iter()
        .map(|item| item.id().to_string().width())
        .max()
        .unwrap_or(0);
    let name_width = column_width(items.iter().map(Item::name), NAME_WIDTH);
    let category_width = column_width(items.iter().map(Item::category), CATEGORY_WIDTH);
    let fixed = id_width + name_width + category_width + GUTTER.len() * 3;
    let description_width = LINE_WIDTH.saturating_sub(fixed);

    let id_style = styled(&styles::ID, use_color);
    let name_style = styled(&styles::NAME, use_color);
    let category_style = styled(&styles::CATEGORY, use_color);
    let description_style = styled(&styles::DESCRIPTION, use_color);

    let mut output = String::new();
    for item in items {
        let id = format!("{:>width$}", item.id(), width = id_width);
        let name = pad_to_width(&truncate_to_width(item.name(), name_width), name_width);
        let category = pad_to_width(
            &truncate_to_width(item.category(), category_width),
            category_width,
        );
        let description = truncate_to_width(item.description(), description_width);

        let line = format!(
            "{}{}{}{}{}{}{}",
            id_style.apply_to(id),
            GUTTER,
            name_style.apply_to(name),
            GUTTER,
            category_style.apply_to(category),
            GUTTER,
            description_style.apply_to(description),
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Both queues under headings, "Empty" for a queue with nothing in it.
fn render_queues_internal(queues: &QueueSnapshot, use_color: Option<bool>) -> String {
    let heading = styled(&styles::HEADING, use_color);
    let muted = styled(&styles::MUTED, use_color);

    let mut output = String::new();
    for (title, items) in [
        ("Urgent Queue", &queues.urgent),
        ("Normal Queue", &queues.normal),
    ] {
        output.push_str(&format!("{}\n", heading.apply_to(title)));
        if items.is_empty() {
            output.push_str(&format!("{}\n", muted.apply_to("Empty")));
        } else {
            output.push_str(&render_item_list_internal(items, use_color));
        }
    }
    output
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => &styles::INFO,
                MessageLevel::Success => &styles::SUCCESS,
                MessageLevel::Warning => &styles::WARNING,
                MessageLevel::Error => &styles::ERROR,
            };
            format!("{}\n", styled(style, use_color).apply_to(&message.content))
        })
        .collect()
}

/// The one-line form used by the interactive shell for failed operations.
pub fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{}", styles::ERROR.apply_to(error))
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, max: usize) -> usize {
    values.map(|value| value.width()).max().unwrap_or(0).min(max)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
