use crossterm::style::Stylize;

use crate::ui::theme::{self, colors, icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Fix,
    Audit,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS),
            Icon::Pending => (icons::PENDING, icons_ascii::PENDING),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW),
            Icon::Fix => (icons::FIX, icons_ascii::FIX),
            Icon::Audit => (icons::AUDIT, icons_ascii::AUDIT),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    fn color(&self) -> theme::Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Pending | Icon::Arrow => colors::DIM,
            Icon::Fix | Icon::Audit => colors::INFO,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if supports_color {
            s.with(self.color()).to_string()
        } else {
            s.to_string()
        }
    }
}
