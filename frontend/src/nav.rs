use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Toggle,
    LinkClicked,
    ClickedOutside,
    Escape,
    Resized { width: f64 },
}

impl NavState {
    pub fn is_open(self) -> bool {
        self == NavState::Open
    }

    pub fn apply(self, event: NavEvent) -> NavState {
        match event {
            NavEvent::Toggle => match self {
                NavState::Open => NavState::Closed,
                NavState::Closed => NavState::Open,
            },
            NavEvent::LinkClicked | NavEvent::ClickedOutside | NavEvent::Escape => NavState::Closed,
            NavEvent::Resized { width } if width > config::NAV_BREAKPOINT => NavState::Closed,
            NavEvent::Resized { .. } => self,
        }
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Inline style for `<body>`: page scroll is locked while the menu is open.
    pub fn body_overflow(self) -> &'static str {
        if self.is_open() { "hidden" } else { "" }
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSERS: [NavEvent; 4] = [
        NavEvent::LinkClicked,
        NavEvent::ClickedOutside,
        NavEvent::Escape,
        NavEvent::Resized { width: 1024.0 },
    ];

    #[test]
    fn toggle_flips_state() {
        let open = NavState::Closed.apply(NavEvent::Toggle);
        assert_eq!(open, NavState::Open);
        assert_eq!(open.aria_expanded(), "true");
        assert_eq!(open.body_overflow(), "hidden");
        assert_eq!(open.apply(NavEvent::Toggle), NavState::Closed);
    }

    #[test]
    fn closing_events_always_end_closed() {
        for start in [NavState::Open, NavState::Closed] {
            for event in CLOSERS {
                let next = start.apply(event);
                assert_eq!(next, NavState::Closed, "{start:?} + {event:?}");
                assert_eq!(next.aria_expanded(), "false");
                assert_eq!(next.body_overflow(), "");
            }
        }
    }

    #[test]
    fn narrow_resize_keeps_menu_open() {
        assert_eq!(NavState::Open.apply(NavEvent::Resized { width: 768.0 }), NavState::Open);
        assert_eq!(NavState::Open.apply(NavEvent::Resized { width: 400.0 }), NavState::Open);
    }

    #[test]
    fn header_scrolled_only_past_threshold() {
        for y in [0.0, 10.0, 49.9, 50.0] {
            assert!(!is_scrolled(y), "{y}");
        }
        for y in [50.5, 51.0, 600.0, 10_000.0] {
            assert!(is_scrolled(y), "{y}");
        }
    }
}
