//! # Rendering Module
//!
//! Styled terminal output for the shelf. Layout decisions that need Unicode
//! width math (title truncation, rule length) stay in Rust; the templates only
//! arrange lines and pick styles by name through the `style` filter.

use super::styles::{names, SHELF_THEME};
use super::templates::{
    CARD_TEMPLATE, CONFIG_TEMPLATE, MESSAGES_TEMPLATE, SEARCH_TEMPLATE, SHELF_TEMPLATE,
};
use bookshelf::api::{CmdMessage, MessageLevel};
use bookshelf::config::{ShelfConfig, KEYS};
use bookshelf::view::{BookCard, SearchResults, ShelfView};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const LINE_WIDTH: usize = 72;
const EMPTY_SHELF_MESSAGE: &str = "Nothing on this shelf.";

#[derive(Serialize)]
struct ShelfSection {
    heading: &'static str,
    cards: Vec<BookCard>,
}

#[derive(Serialize)]
struct ShelfData {
    shelves: Vec<ShelfSection>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct SearchData {
    heading: String,
    rule: String,
    cards: Vec<BookCard>,
    placeholder: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("style", move |value: Value, name: String| -> String {
        SHELF_THEME.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render_template<T: Serialize>(
    name: &'static str,
    source: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = environment(use_color);
    env.add_template("card", CARD_TEMPLATE)?;
    env.add_template(name, source)?;
    env.get_template(name)?.render(data)
}

fn fit_cards(cards: &[BookCard]) -> Vec<BookCard> {
    cards
        .iter()
        .map(|card| BookCard {
            title: truncate_to_width(&card.title, LINE_WIDTH - 2),
            ..card.clone()
        })
        .collect()
}

/// Renders the unread and read shelves.
pub fn render_shelf(view: &ShelfView, use_color: bool) -> String {
    let data = ShelfData {
        shelves: vec![
            ShelfSection {
                heading: "Unread",
                cards: fit_cards(&view.incomplete),
            },
            ShelfSection {
                heading: "Read",
                cards: fit_cards(&view.complete),
            },
        ],
        empty_message: EMPTY_SHELF_MESSAGE,
    };

    render_template("shelf", SHELF_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders search results as a framed overlay.
pub fn render_search(results: &SearchResults, use_color: bool) -> String {
    let heading = if results.query.is_empty() {
        "All books".to_string()
    } else {
        truncate_to_width(&format!("Search results for \"{}\"", results.query), LINE_WIDTH)
    };
    let rule = "─".repeat(heading.width().max(LINE_WIDTH / 2));

    let data = SearchData {
        heading,
        rule,
        cards: fit_cards(&results.cards),
        placeholder: results.placeholder.unwrap_or_default(),
    };

    render_template("search", SEARCH_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template("messages", MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &ShelfConfig, use_color: bool) -> String {
    let data = ConfigData {
        entries: KEYS
            .iter()
            .map(|&key| ConfigEntry {
                key,
                value: config.get(key).unwrap_or_default(),
            })
            .collect(),
    };

    render_template("config", CONFIG_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

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

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf::model::{Book, BookId};

    fn book(id: u64, title: &str, done: bool) -> Book {
        Book {
            id: BookId(id),
            title: title.to_string(),
            author: "J. Clear".to_string(),
            year: 2018,
            is_completed: done,
        }
    }

    #[test]
    fn renders_both_shelves_with_cards() {
        let view = ShelfView::from_books(&[book(1, "Atomic Habits", false), book(2, "Dune", true)]);
        let output = render_shelf(&view, false);

        let expected = "\
Unread (1)
  Atomic Habits  #1
    Author: J. Clear
    Year: 2018
    [Mark as read] [Edit book] [Delete book]

Read (1)
  Dune  #2
    Author: J. Clear
    Year: 2018
    [Mark as unread] [Edit book] [Delete book]
";
        assert_eq!(output, expected);
    }

    #[test]
    fn empty_shelves_say_so() {
        let output = render_shelf(&ShelfView::default(), false);
        assert_eq!(
            output,
            "Unread (0)\n  Nothing on this shelf.\n\nRead (0)\n  Nothing on this shelf.\n"
        );
    }

    #[test]
    fn search_without_matches_shows_placeholder() {
        let results = SearchResults::new("zzz", Vec::<&Book>::new());
        let output = render_search(&results, false);
        assert!(output.contains("Search results for \"zzz\""));
        assert!(output.contains("  No books found.\n"));
        assert!(!output.contains("(!?)"));
    }

    #[test]
    fn search_lists_matching_cards() {
        let b = book(9, "Dune", true);
        let output = render_search(&SearchResults::new("", [&b]), false);
        assert!(output.contains("All books"));
        assert!(output.contains("  Dune  #9\n"));
        assert!(output.contains("[Mark as unread]"));
    }

    #[test]
    fn colored_output_has_ansi_codes() {
        let view = ShelfView::from_books(&[book(1, "Dune", false)]);
        assert!(render_shelf(&view, true).contains("\x1b["));
        assert!(!render_shelf(&view, false).contains("\x1b["));
    }

    #[test]
    fn messages_one_per_line() {
        let output = render_messages(
            &[CmdMessage::success("Book added"), CmdMessage::info("hi")],
            false,
        );
        assert_eq!(output, "Book added\nhi\n");
    }

    #[test]
    fn config_lists_every_key() {
        let output = render_config(&ShelfConfig::default(), false);
        assert_eq!(output, "storage-key = MyBOOK\nconfirm-delete = true\n");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(200);
        let view = ShelfView::from_books(&[book(1, &long, false)]);
        let output = render_shelf(&view, false);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
    }
}
