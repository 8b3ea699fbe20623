use log::Level;

/// Recipient of the contact form deep link.
pub const WHATSAPP_NUMBER: &str = "918919929327";

/// Header gets the `scrolled` class strictly above this offset.
pub const SCROLL_THRESHOLD: f64 = 50.0;
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STATS_THRESHOLD: f64 = 0.3;
pub const STAT_ANIMATION_DURATION: f64 = 2000.0;
pub const STAT_STAGGER_MS: u32 = 150;

pub const NAV_BREAKPOINT: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 100;

pub const NOTIFICATION_DWELL_MS: u32 = 3000;
pub const NOTIFICATION_EXIT_MS: u32 = 400;
pub const FORM_RESET_DELAY_MS: u32 = 300;

pub const BACK_TO_TOP_THRESHOLD: f64 = 600.0;
pub const PARALLAX_FACTOR: f64 = 0.4;
pub const SMOOTH_SCROLL_GAP: f64 = 20.0;

pub const FOOTER_STAGGER_MS: u32 = 100;
pub const FOOTER_STAGGER_CAP_MS: u32 = 600;

/// Value shipped in the markup until a real Google place is wired in.
pub const PLACE_ID_PLACEHOLDER: &str = "YOUR_GOOGLE_PLACE_ID";

/// Google place whose reviews are shown. Set `GOOGLE_PLACE_ID` at build time;
/// without it the reviews section always shows the static fallback.
pub fn place_id() -> &'static str {
    option_env!("GOOGLE_PLACE_ID").unwrap_or(PLACE_ID_PLACEHOLDER)
}

pub fn is_place_configured(place_id: &str) -> bool {
    let trimmed = place_id.trim();
    !trimmed.is_empty() && trimmed != PLACE_ID_PLACEHOLDER
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local development builds
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_and_blank_place_ids_are_unconfigured() {
        assert!(!is_place_configured(PLACE_ID_PLACEHOLDER));
        assert!(!is_place_configured(""));
        assert!(!is_place_configured("   "));
        assert!(is_place_configured("ChIJN1t_tDeuEmsRUsoyG83frY4"));
    }
}
