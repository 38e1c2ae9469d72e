use crate::model::{CategoryIcon, CategoryItem};

/// Categories offered by the filter bar when the page passes none.
pub fn default_categories() -> Vec<CategoryItem> {
    vec![
        CategoryItem::new("diamond-mine", "Diamond mine", Some(CategoryIcon::Diamond)),
        CategoryItem::new("vip", "VIP", Some(CategoryIcon::Vip)),
        CategoryItem::new("promotion", "Promotion", Some(CategoryIcon::Promotion)),
        CategoryItem::new("hot-match", "Hot Match", Some(CategoryIcon::HotMatch)),
        CategoryItem::new(
            "p2p-transaction",
            "P2P Transaction",
            Some(CategoryIcon::Transaction),
        ),
        CategoryItem::new("games", "Games", Some(CategoryIcon::Game)),
        CategoryItem::new("providers", "Providers", Some(CategoryIcon::Provider)),
    ]
}
