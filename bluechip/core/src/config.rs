//! Compile-time site settings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub domain: &'static str,
    pub description: &'static str,
    pub support_email: &'static str,
    pub theme_color: &'static str,
}

pub const SITE_CONFIG: SiteConfig = SiteConfig {
    name: "Bluechip Gaming",
    domain: "bluechip.com",
    description: "Play exclusive casino games and win big prizes",
    support_email: "support@bluechip.com",
    theme_color: "#0A1428",
};

/// Viewport widths (in CSS pixels) of the layout breakpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoints {
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    pub xxl: f64,
}

pub const BREAKPOINTS: Breakpoints = Breakpoints {
    sm: 640.0,
    md: 768.0,
    lg: 1024.0,
    xl: 1280.0,
    xxl: 1536.0,
};

/// Row limits used by the home page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSettings {
    pub max_games: usize,
    pub max_providers: usize,
    pub skeleton_items: usize,
}

pub const HOME_SETTINGS: HomeSettings = HomeSettings {
    max_games: 10,
    max_providers: 8,
    skeleton_items: 8,
};
