#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Entries of the main navigation, in display order.
pub fn nav_items() -> &'static [NavItem] {
    const ITEMS: &[NavItem] = &[
        NavItem { label: "HOME", href: "/" },
        NavItem { label: "GAME", href: "/game" },
        NavItem { label: "INFOR", href: "/infor" },
        NavItem { label: "NEWS", href: "/news" },
        NavItem { label: "PROMOTIONS", href: "/promotions" },
        NavItem { label: "VIP", href: "/vip" },
    ];
    ITEMS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

const fn link(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink { label, href }
}

/// Link columns of the footer.
pub fn footer_sections() -> &'static [FooterSection] {
    const SECTIONS: &[FooterSection] = &[
        FooterSection {
            title: "Games",
            links: &[
                link("Game 1", "/games/1"),
                link("Game 2", "/games/2"),
                link("Game 3", "/games/3"),
                link("Game 14", "/games/14"),
            ],
        },
        FooterSection {
            title: "About",
            links: &[
                link("About Us", "/about-us"),
                link("Promotions", "/promotions"),
                link("VIP", "/vip"),
                link("Help Center", "/help-center"),
                link("Awards & Certificates", "/awards"),
                link("App", "/app"),
            ],
        },
        FooterSection {
            title: "Legal Information",
            links: &[
                link("General Terms & Conditions", "/terms"),
                link("Responsible Gaming Policy", "/responsible-gaming"),
                link("Sports Betting Rules", "/betting-rules"),
                link("Privacy and Cookies Policy", "/privacy"),
                link("Payment Methods", "/payment-methods"),
                link("Limits", "/limits"),
            ],
        },
    ];
    SECTIONS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialNetwork {
    Telegram,
    Facebook,
    Instagram,
    Twitter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub label: &'static str,
    pub href: &'static str,
}

/// Community channels linked from the footer.
pub fn social_links() -> &'static [SocialLink] {
    const LINKS: &[SocialLink] = &[
        SocialLink {
            network: SocialNetwork::Telegram,
            label: "Telegram",
            href: "https://t.me/bluechip",
        },
        SocialLink {
            network: SocialNetwork::Facebook,
            label: "Facebook",
            href: "https://facebook.com/bluechip",
        },
        SocialLink {
            network: SocialNetwork::Instagram,
            label: "Instagram",
            href: "https://instagram.com/bluechip",
        },
        SocialLink {
            network: SocialNetwork::Twitter,
            label: "Twitter",
            href: "https://twitter.com/bluechip",
        },
    ];
    LINKS
}

/// Store buttons shown in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDownload {
    pub href: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Native app stores listed in the footer.
pub fn app_downloads() -> &'static [AppDownload] {
    const DOWNLOADS: &[AppDownload] = &[
        AppDownload {
            href: "/download/mac",
            title: "Bluechip App",
            subtitle: "for Mac OS",
        },
        AppDownload {
            href: "/download/android",
            title: "Bluechip App",
            subtitle: "for Android",
        },
        AppDownload {
            href: "/download/ios",
            title: "Bluechip App",
            subtitle: "for iOS",
        },
    ];
    DOWNLOADS
}
