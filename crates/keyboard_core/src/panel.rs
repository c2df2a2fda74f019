//! Alphabet/symbols panel state.

use std::fmt;
use std::str::FromStr;

/// One of the two mutually exclusive key layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Alphabet,
    Symbols,
}

impl Panel {
    pub fn other(self) -> Panel {
        match self {
            Panel::Alphabet => Panel::Symbols,
            Panel::Symbols => Panel::Alphabet,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Alphabet => "alphabet",
            Panel::Symbols => "symbols",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanel(pub String);

impl fmt::Display for UnknownPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown panel: {:?}", self.0)
    }
}

impl std::error::Error for UnknownPanel {}

impl FromStr for Panel {
    type Err = UnknownPanel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("alphabet") {
            Ok(Panel::Alphabet)
        } else if s.eq_ignore_ascii_case("symbols") {
            Ok(Panel::Symbols)
        } else {
            Err(UnknownPanel(s.to_string()))
        }
    }
}

/// Which panel is showing. Exactly one is visible at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PanelSwitcher {
    current: Panel,
}

impl PanelSwitcher {
    pub fn new(initial: Panel) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    /// Show `panel` and hide the other. Returns `true` if it changed.
    pub fn show(&mut self, panel: Panel) -> bool {
        let changed = self.current != panel;
        self.current = panel;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_toggle_wins_after_any_sequence() {
        let mut switcher = PanelSwitcher::default();
        let clicks = [
            Panel::Symbols,
            Panel::Symbols,
            Panel::Alphabet,
            Panel::Symbols,
            Panel::Alphabet,
            Panel::Alphabet,
        ];

        for panel in clicks {
            switcher.show(panel);
            assert_eq!(switcher.current(), panel);
            assert_ne!(switcher.current().other(), panel);
        }
    }

    #[test]
    fn show_reports_changes() {
        let mut switcher = PanelSwitcher::new(Panel::Alphabet);
        assert!(!switcher.show(Panel::Alphabet));
        assert!(switcher.show(Panel::Symbols));
        assert_eq!(switcher.current().other(), Panel::Alphabet);
    }

    #[test]
    fn parses_panel_names() {
        assert_eq!(" Symbols ".parse::<Panel>(), Ok(Panel::Symbols));
        assert_eq!("alphabet".parse::<Panel>(), Ok(Panel::Alphabet));
        assert!("numbers".parse::<Panel>().is_err());
    }
}
