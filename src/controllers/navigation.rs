use log::{debug, info, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The navigable regions of the page, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Differentials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Differentials,
        Section::Contact,
    ];

    /// Sections listed under "Links Rápidos" in the footer.
    pub const FOOTER: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// DOM id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::About => "sobre",
            Section::Services => "servicos",
            Section::Differentials => "diferenciais",
            Section::Contact => "contato",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Início",
            Section::About => "Sobre",
            Section::Services => "Serviços",
            Section::Differentials => "Diferenciais",
            Section::Contact => "Contato",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Resolves a section identifier to something on screen and scrolls to it.
pub trait ScrollTarget {
    /// Returns `false` when nothing carries `section_id`.
    fn scroll_into_view(&self, section_id: &str) -> bool;
}

/// Smooth-scrolls the live document.
pub struct DomScroller;

impl ScrollTarget for DomScroller {
    fn scroll_into_view(&self, section_id: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            warn!("No document available, cannot scroll to {}", section_id);
            return false;
        };
        match document.get_element_by_id(section_id) {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    ToggleMenu,
    NavigateTo(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEffect {
    ScrollIntoView(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!("Mobile menu open: {}", self.menu_open);
    }

    /// Closes the menu whatever its state and asks for a scroll to `section_id`.
    pub fn navigate_to(&mut self, section_id: &str) -> NavEffect {
        self.menu_open = false;
        NavEffect::ScrollIntoView(section_id.to_string())
    }

    pub fn apply(&mut self, action: NavAction) -> Option<NavEffect> {
        match action {
            NavAction::ToggleMenu => {
                self.toggle_menu();
                None
            }
            NavAction::NavigateTo(section_id) => Some(self.navigate_to(&section_id)),
        }
    }

    /// Applies `action` and performs any resulting scroll against `target`.
    pub fn dispatch(&mut self, action: NavAction, target: &dyn ScrollTarget) {
        if let Some(NavEffect::ScrollIntoView(section_id)) = self.apply(action) {
            if target.scroll_into_view(&section_id) {
                let label = Section::from_id(&section_id).map_or(section_id.as_str(), |s| s.label());
                info!("Navigated to section {}", label);
            } else {
                debug!("No section with id {}, ignoring", section_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingScroller {
        known: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl RecordingScroller {
        fn with_page_sections() -> Self {
            Self {
                known: Section::ALL.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollTarget for RecordingScroller {
        fn scroll_into_view(&self, section_id: &str) -> bool {
            if self.known.contains(&section_id) {
                self.scrolled.borrow_mut().push(section_id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!NavState::default().menu_open);
    }

    #[test]
    fn toggling_twice_restores_menu_state() {
        for initial in [false, true] {
            let mut state = NavState { menu_open: initial };
            state.toggle_menu();
            assert_eq!(state.menu_open, !initial);
            state.toggle_menu();
            assert_eq!(state.menu_open, initial);
        }
    }

    #[test]
    fn navigating_closes_menu_from_either_state() {
        let scroller = RecordingScroller::with_page_sections();
        for initial in [false, true] {
            let mut state = NavState { menu_open: initial };
            state.dispatch(NavAction::NavigateTo("contato".into()), &scroller);
            assert!(!state.menu_open);
        }
        assert_eq!(*scroller.scrolled.borrow(), vec!["contato", "contato"]);
    }

    #[test]
    fn navigate_to_requests_scroll_for_identifier() {
        let mut state = NavState { menu_open: true };
        let effect = state.navigate_to("servicos");
        assert_eq!(effect, NavEffect::ScrollIntoView("servicos".into()));
    }

    #[test]
    fn unknown_section_is_silent_noop() {
        let scroller = RecordingScroller::with_page_sections();
        let mut state = NavState { menu_open: true };
        state.dispatch(NavAction::NavigateTo("does-not-exist".into()), &scroller);
        assert_eq!(state, NavState { menu_open: false });
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn toggle_action_has_no_effect() {
        let mut state = NavState::default();
        assert_eq!(state.apply(NavAction::ToggleMenu), None);
        assert!(state.menu_open);
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("home"), None);
    }
}
