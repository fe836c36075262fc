use std::{fmt, str::FromStr};

use tracing::{debug, trace};

// screens
//
// the page is a fixed set of full-height screens of which exactly one is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Landing,
    StyleSelection,
    ProjectsByStyle,
    Store,
    Portfolio,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Landing,
        Screen::StyleSelection,
        Screen::ProjectsByStyle,
        Screen::Store,
        Screen::Portfolio,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::StyleSelection => "style-selection",
            Screen::ProjectsByStyle => "projects-by-style",
            Screen::Store => "store",
            Screen::Portfolio => "portfolio",
        }
    }

    pub fn element_id(&self) -> String {
        format!("{}-screen", self.name())
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| anyhow::Error::msg(format!("unknown screen {s}")))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScreenController {
    active: Screen,
}

impl ScreenController {
    pub fn new() -> Self {
        ScreenController::default()
    }

    pub fn active(&self) -> Screen {
        self.active
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == screen
    }

    pub fn switch(&mut self, screen: Screen) {
        debug!("switching screen {} -> {screen}", self.active);
        self.active = screen;
    }

    // unknown names leave the current screen in place and report None
    pub fn switch_screen(&mut self, name: &str) -> Option<Screen> {
        match name.parse::<Screen>() {
            Ok(screen) => {
                self.switch(screen);
                Some(screen)
            }
            Err(err) => {
                trace!("ignoring screen switch: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(controller: &ScreenController) -> usize {
        Screen::ALL
            .iter()
            .filter(|s| controller.is_active(**s))
            .count()
    }

    #[test]
    fn starts_on_landing() {
        let controller = ScreenController::new();

        assert_eq!(controller.active(), Screen::Landing);
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn last_switch_wins() {
        let mut controller = ScreenController::new();

        controller.switch_screen("store");
        controller.switch_screen("portfolio");

        assert_eq!(controller.active(), Screen::Portfolio);
        assert_eq!(active_count(&controller), 1);

        controller.switch_screen("portfolio");
        controller.switch_screen("portfolio");

        assert_eq!(controller.active(), Screen::Portfolio);
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn unknown_name_is_a_noop() {
        let mut controller = ScreenController::new();
        controller.switch(Screen::Store);

        assert_eq!(controller.switch_screen("checkout"), None);
        assert_eq!(controller.active(), Screen::Store);
        assert_eq!(active_count(&controller), 1);
    }

    #[test]
    fn names_parse_back() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }

        assert_eq!(Screen::StyleSelection.element_id(), "style-selection-screen");
    }
}
