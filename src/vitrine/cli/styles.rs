use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used by the templates.
pub mod names {
    pub const POSITION: &str = "position";
    pub const TITLE: &str = "title";
    pub const BADGE_BEAT: &str = "badge_beat";
    pub const BADGE_KIT: &str = "badge_kit";
    pub const BADGE_POST: &str = "badge_post";
    pub const META: &str = "meta";
    pub const PRICE: &str = "price";
    pub const FREE: &str = "free";
    pub const ACTION: &str = "action";
    pub const DETAIL: &str = "detail";
    pub const HEADING: &str = "heading";
}

/// Named console styles, applied through the `style` template filter.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text` with the named style. Unknown names and disabled color
    /// leave the text untouched.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static VITRINE_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::POSITION, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::BADGE_BEAT, Style::new().magenta())
        .add(names::BADGE_KIT, Style::new().cyan())
        .add(names::BADGE_POST, Style::new().blue())
        .add(names::META, Style::new().color256(247).italic())
        .add(names::PRICE, Style::new().yellow().bold())
        .add(names::FREE, Style::new().green().bold())
        .add(names::ACTION, Style::new().underlined())
        .add(names::DETAIL, Style::new().dim())
        .add(names::HEADING, Style::new().bold())
});
