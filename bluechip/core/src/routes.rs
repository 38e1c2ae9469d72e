//! Site paths. Only the home page is served by this app; the rest are links
//! into sections owned by other parts of the platform.
use crate::model::ItemId;

pub const HOME: &str = "/";
pub const GAMES: &str = "/games";
pub const PROVIDERS: &str = "/providers";
pub const PROMOTIONS: &str = "/promotions";
pub const HELP_CENTER: &str = "/help-center";
pub const CONTACT: &str = "/contact";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

/// Detail page of one game.
pub fn game_details(id: &ItemId) -> String {
    format!("{GAMES}/{id}")
}

/// Detail page of one provider.
pub fn provider_details(id: &ItemId) -> String {
    format!("{PROVIDERS}/{id}")
}

/// Whether a nav entry pointing at `href` is the page currently shown.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// The header switches to its translucent style once the page has scrolled
/// past this offset.
pub const SCROLLED_HEADER_OFFSET: f64 = 10.0;

/// Whether a vertical scroll offset puts the header in its scrolled style.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_HEADER_OFFSET
}
