//! Exactly-one-active tab state for the problem / solution / how-it-works panels.

use log::warn;

pub const PANELS: [&str; 3] = ["problem", "solution", "how-it-works"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabController {
    panels: &'static [&'static str],
    active: usize,
}

impl Default for TabController {
    fn default() -> Self {
        Self::new(&PANELS)
    }
}

impl TabController {
    /// Starts with the first panel active.
    pub fn new(panels: &'static [&'static str]) -> Self {
        Self { panels, active: 0 }
    }

    pub fn panels(&self) -> &'static [&'static str] {
        self.panels
    }

    pub fn active(&self) -> Option<&'static str> {
        self.panels.get(self.active).copied()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active() == Some(name)
    }

    /// Makes `name` the only active panel. Unknown names keep the current
    /// panel active and return `false`.
    pub fn activate(&mut self, name: &str) -> bool {
        match self.panels.iter().position(|panel| *panel == name) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                warn!("Ignoring unknown tab panel {:?}", name);
                false
            }
        }
    }

    /// Panel the "next" button of `name` leads to, if any.
    pub fn next_of(&self, name: &str) -> Option<&'static str> {
        let index = self.panels.iter().position(|panel| *panel == name)?;
        self.panels.get(index + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(tabs: &TabController) -> usize {
        tabs.panels().iter().filter(|p| tabs.is_active(p)).count()
    }

    #[test]
    fn starts_on_first_panel() {
        let tabs = TabController::default();
        assert_eq!(tabs.active(), Some("problem"));
    }

    #[test]
    fn activate_switches_to_exactly_one_panel() {
        let mut tabs = TabController::default();
        assert!(tabs.activate("problem"));
        assert!(tabs.activate("solution"));
        assert_eq!(tabs.active(), Some("solution"));
        assert!(!tabs.is_active("problem"));
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn unknown_panel_keeps_previous_active() {
        let mut tabs = TabController::default();
        tabs.activate("how-it-works");
        assert!(!tabs.activate("pricing"));
        assert_eq!(tabs.active(), Some("how-it-works"));
        assert_eq!(active_count(&tabs), 1);
    }

    #[test]
    fn next_chains_through_panels() {
        let tabs = TabController::default();
        assert_eq!(tabs.next_of("problem"), Some("solution"));
        assert_eq!(tabs.next_of("solution"), Some("how-it-works"));
        assert_eq!(tabs.next_of("how-it-works"), None);
        assert_eq!(tabs.next_of("pricing"), None);
    }
}
