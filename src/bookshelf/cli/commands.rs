//! Argument dispatch for the `shelf` binary.
//!
//! `run()` parses the command line, sets up logging, opens the shelf through
//! [`initialize`], registers the terminal view as a render observer, and hands
//! each subcommand to a `handle_*` function that calls the API and prints the
//! result.

use super::render::{render_config, render_messages, render_search, render_shelf};
use super::setup::{Cli, Commands};
use bookshelf::api::{BookEdit, CmdResult, ConfigAction};
use bookshelf::error::Result;
use bookshelf::events::Signal;
use bookshelf::init::{initialize, ShelfContext, HOME_ENV};
use bookshelf::view::ShelfView;
use clap::Parser;
use console::Term;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "SHELF_LOG";

struct AppContext {
    ctx: ShelfContext,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut app = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            author,
            year,
            completed,
        }) => handle_add(&mut app, title, author, year, completed),
        Some(Commands::List) | None => handle_list(&app),
        Some(Commands::Search { query }) => handle_search(&app, query),
        Some(Commands::Edit {
            id,
            title,
            author,
            year,
            completed,
            unread,
        }) => {
            let is_completed = match (completed, unread) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let edit = BookEdit {
                title,
                author,
                year,
                is_completed,
            };
            handle_edit(&mut app, id, edit)
        }
        Some(Commands::Toggle { id }) => handle_toggle(&mut app, id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut app, id, yes),
        Some(Commands::Config { key, value }) => handle_config(&app, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let mut ctx = initialize(home.as_deref())?;

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    // Every change to the shelf redraws it.
    ctx.api.subscribe(move |signal: &Signal<'_>| {
        if let Signal::RenderRequested(books) = signal {
            print!("{}", render_shelf(&ShelfView::from_books(books), use_color));
        }
    });

    Ok(AppContext { ctx, use_color })
}

fn print_result(app: &AppContext, result: &CmdResult) {
    let output = render_messages(&result.messages, app.use_color);
    if !output.is_empty() {
        if result.shelf.is_some() || !result.affected_books.is_empty() {
            println!();
        }
        print!("{}", output);
    }
}

fn handle_add(
    app: &mut AppContext,
    title: String,
    author: String,
    year: String,
    completed: bool,
) -> Result<()> {
    let result = app.ctx.api.add_book(&title, &author, &year, completed)?;
    print_result(app, &result);
    Ok(())
}

fn handle_list(app: &AppContext) -> Result<()> {
    let result = app.ctx.api.list_books()?;
    if let Some(shelf) = &result.shelf {
        print!("{}", render_shelf(shelf, app.use_color));
    }
    print_result(app, &result);
    Ok(())
}

fn handle_search(app: &AppContext, query: Vec<String>) -> Result<()> {
    let result = app.ctx.api.search_books(&query)?;
    if let Some(search) = &result.search {
        print!("{}", render_search(search, app.use_color));
    }
    print_result(app, &result);
    Ok(())
}

fn handle_edit(app: &mut AppContext, id: String, edit: BookEdit) -> Result<()> {
    let result = app.ctx.api.edit_book(&id, edit)?;
    print_result(app, &result);
    Ok(())
}

fn handle_toggle(app: &mut AppContext, id: String) -> Result<()> {
    let result = app.ctx.api.toggle_book(&id)?;
    print_result(app, &result);
    Ok(())
}

fn handle_delete(app: &mut AppContext, id: String, yes: bool) -> Result<()> {
    let result = if yes || !app.ctx.config.confirm_delete {
        app.ctx.api.delete_book(&id, &mut |_: &str| true)?
    } else {
        app.ctx.api.delete_book(&id, &mut prompt_confirm)?
    };
    print_result(app, &result);
    Ok(())
}

fn handle_config(app: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = app.ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, app.use_color));
        }
    }
    print_result(app, &result);
    Ok(())
}

/// Asks on stdin; anything but an explicit yes declines, including EOF.
fn prompt_confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!();
            false
        }
        Ok(_) => is_yes(&input),
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
