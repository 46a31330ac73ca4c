use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Timeout,
    Watch,
    Trash,
    Gutter,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Timeout) => theme::icons::TIMEOUT,
            (true, Icon::Watch) => theme::icons::WATCH,
            (true, Icon::Trash) => theme::icons::TRASH,
            (true, Icon::Gutter) => theme::icons::GUTTER,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Timeout) => theme::icons_ascii::TIMEOUT,
            (false, Icon::Watch) => theme::icons_ascii::WATCH,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
            (false, Icon::Gutter) => theme::icons_ascii::GUTTER,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Timeout => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Progress | Icon::Watch => theme::colors::INFO,
            Icon::Pending | Icon::Trash | Icon::Gutter => theme::colors::DIM,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Timeout.render(false), "[TIME]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn colored_icon_without_color_is_plain() {
        assert_eq!(Icon::Error.colored(false, false), "[FAIL]");
        assert!(Icon::Error.colored(true, false).contains("\u{1b}["));
    }
}
