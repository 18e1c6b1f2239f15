//! Display mode flag.
//!
//! A presentation-only boolean with no effect on data: toggling it twice
//! always restores the original rendering. The initial value can be forced
//! or detected from the host terminal (see [`crate::cli::args`]).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    pub fn toggle(&mut self) -> Self {
        *self = match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        *self
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut theme = Theme::Light;
        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert_eq!(theme, Theme::Light);
    }
}
