use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that does not exist.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub mod names {
    pub const HEADER: &str = "header";
    pub const COUNT: &str = "count";
    pub const TITLE: &str = "title";
    pub const ID: &str = "id";
    pub const META: &str = "meta";
    pub const ACTION: &str = "action";
    pub const ACTION_SUCCESS: &str = "action_success";
    pub const ACTION_WARNING: &str = "action_warning";
    pub const DANGER: &str = "danger";
    pub const EMPTY: &str = "empty";
    pub const RULE: &str = "rule";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const ERROR: &str = "error";
}

/// Named styles applied by the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static SHELF_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::HEADER, Style::new().bold().underlined())
        .add(names::COUNT, Style::new().dim())
        .add(names::TITLE, Style::new().bold())
        .add(names::ID, Style::new().color256(245))
        .add(names::META, Style::new().italic())
        .add(names::ACTION, Style::new().cyan())
        .add(names::ACTION_SUCCESS, Style::new().green())
        .add(names::ACTION_WARNING, Style::new().yellow())
        .add(names::DANGER, Style::new().red())
        .add(names::EMPTY, Style::new().dim().italic())
        .add(names::RULE, Style::new().dim())
        .add(names::INFO, Style::new().dim())
        .add(names::SUCCESS, Style::new().green())
        .add(names::ERROR, Style::new().red())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text() {
        assert_eq!(SHELF_THEME.apply(names::TITLE, "Dune", false), "Dune");
    }

    #[test]
    fn color_mode_adds_ansi() {
        let styled = SHELF_THEME.apply(names::DANGER, "Delete", true);
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("Delete"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(SHELF_THEME.apply("nope", "x", false), "(!?) x");
        assert_eq!(SHELF_THEME.apply("nope", "x", true), "(!?) x");
    }
}
