//! Screens and navigation state

use pashu_recognition::RecognitionResult;
use std::fmt;
use std::str::FromStr;

/// Every screen of the flow, in forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Landing,
    LanguageSelection,
    Login,
    Recognition,
    Dashboard,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Landing,
        Screen::LanguageSelection,
        Screen::Login,
        Screen::Recognition,
        Screen::Dashboard,
    ];

    /// Screens that require an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Screen::Recognition | Screen::Dashboard)
    }

    /// Predecessor reached by "back"; `None` on the first screen.
    pub fn back(&self) -> Option<Screen> {
        match self {
            Screen::Landing => None,
            Screen::LanguageSelection => Some(Screen::Landing),
            Screen::Login => Some(Screen::LanguageSelection),
            Screen::Recognition => Some(Screen::Login),
            Screen::Dashboard => Some(Screen::Recognition),
        }
    }

    /// Stable identifier, also accepted by `FromStr`.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::LanguageSelection => "language",
            Screen::Login => "login",
            Screen::Recognition => "recognition",
            Screen::Dashboard => "dashboard",
        }
    }

    /// Route the screen is served under.
    pub fn path(&self) -> &'static str {
        match self {
            Screen::Landing => "/",
            Screen::LanguageSelection => "/language",
            Screen::Login => "/login",
            Screen::Recognition => "/breed-recognition",
            Screen::Dashboard => "/dashboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id() == s || screen.path() == s)
            .ok_or_else(|| format!("unknown screen: {}", s))
    }
}

/// Current screen plus the result carried into it.
///
/// Only the dashboard ever carries a payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub screen: Screen,
    pub payload: Option<RecognitionResult>,
}

impl NavigationState {
    pub fn at(screen: Screen) -> Self {
        Self {
            screen,
            payload: None,
        }
    }
}

/// Outcome of a navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The requested screen was entered.
    Entered(Screen),
    /// The guard refused a protected screen and sent the user elsewhere.
    Redirected { requested: Screen, to: Screen },
    /// Nothing changed.
    Stayed(Screen),
}

impl Transition {
    /// Screen the flow is on after the command.
    pub fn screen(&self) -> Screen {
        match self {
            Transition::Entered(screen) | Transition::Stayed(screen) => *screen,
            Transition::Redirected { to, .. } => *to,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Transition::Redirected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_edges() {
        assert_eq!(Screen::Landing.back(), None);
        assert_eq!(Screen::LanguageSelection.back(), Some(Screen::Landing));
        assert_eq!(Screen::Login.back(), Some(Screen::LanguageSelection));
        assert_eq!(Screen::Recognition.back(), Some(Screen::Login));
        assert_eq!(Screen::Dashboard.back(), Some(Screen::Recognition));
    }

    #[test]
    fn test_protected() {
        let protected: Vec<_> = Screen::ALL.into_iter().filter(Screen::is_protected).collect();
        assert_eq!(protected, [Screen::Recognition, Screen::Dashboard]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dashboard".parse::<Screen>().unwrap(), Screen::Dashboard);
        assert_eq!("/breed-recognition".parse::<Screen>().unwrap(), Screen::Recognition);
        assert_eq!(" Login ".parse::<Screen>().unwrap(), Screen::Login);
        assert!("settings".parse::<Screen>().is_err());
    }

    #[test]
    fn test_transition_screen() {
        let t = Transition::Redirected {
            requested: Screen::Dashboard,
            to: Screen::Login,
        };
        assert_eq!(t.screen(), Screen::Login);
        assert!(t.is_redirect());
        assert_eq!(Transition::Stayed(Screen::Landing).screen(), Screen::Landing);
    }

    #[test]
    fn test_default_navigation() {
        let nav = NavigationState::default();
        assert_eq!(nav.screen, Screen::Landing);
        assert!(nav.payload.is_none());
    }
}
