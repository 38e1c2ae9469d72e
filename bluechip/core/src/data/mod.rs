//! Static content of the home page. Stands in for a future API; components
//! only rely on the record shapes in [`crate::model`].
mod categories;
mod games;
mod navigation;
mod promo_slides;
mod providers;

pub use categories::default_categories;
pub use games::games;
pub use navigation::{
    AppDownload, FooterLink, FooterSection, NavItem, SocialLink, SocialNetwork, app_downloads,
    footer_sections, nav_items, social_links,
};
pub use promo_slides::promo_slides;
pub use providers::providers;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn can_keep_ids_unique_within_each_list() {
        let game_ids: HashSet<_> = games().into_iter().map(|g| g.id).collect();
        assert_eq!(game_ids.len(), games().len());

        let provider_ids: HashSet<_> = providers().into_iter().map(|p| p.id).collect();
        assert_eq!(provider_ids.len(), providers().len());

        let category_ids: HashSet<_> = default_categories().into_iter().map(|c| c.id).collect();
        assert_eq!(category_ids.len(), default_categories().len());
    }

    #[test]
    fn can_fill_home_page_with_scrollable_content() {
        assert!(promo_slides().len() >= 2);
        assert!(games().len() > 10);
        assert_eq!(providers().len(), 8);
    }

    #[test]
    fn can_build_three_footer_link_columns() {
        let titles: Vec<_> = footer_sections().iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Games", "About", "Legal Information"]);
    }
}
