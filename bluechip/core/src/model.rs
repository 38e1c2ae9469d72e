use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a game, provider or slide. The data source mixes numeric and
/// textual ids, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        ItemId::Number(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

/// A game tile shown in the game rows.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Game {
    pub id: ItemId,
    pub title: String,
    pub provider: Option<String>,
    pub image: Option<String>,
    pub is_hot: bool,
    pub is_new: bool,
    pub category: Option<String>,
    pub rating: Option<f32>,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
}

impl Default for ItemId {
    fn default() -> Self {
        ItemId::Number(0)
    }
}

/// A game studio shown in the provider row.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Provider {
    pub id: ItemId,
    pub name: String,
    pub logo: Option<String>,
    pub games_count: Option<u32>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub established: Option<String>,
    pub headquarters: Option<String>,
    pub license_info: Option<String>,
}

impl Provider {
    /// "1 game", "12 games"; `None` when the count is unknown.
    pub fn games_label(&self) -> Option<String> {
        self.games_count.map(|count| {
            let noun = if count == 1 { "game" } else { "games" };
            format!("{count} {noun}")
        })
    }
}

/// One banner of the promotional carousel.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PromoSlide {
    pub id: ItemId,
    pub title: String,
    pub subtitle: Option<String>,
    pub button_text: String,
    pub button_link: Option<String>,
    pub label: Option<String>,
    pub image: String,
    pub bg_color: Option<String>,
}

/// Icons available to category buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CategoryIcon {
    Diamond,
    Vip,
    Promotion,
    HotMatch,
    Transaction,
    Game,
    Provider,
}

/// A selectable entry of the category filter.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct CategoryItem {
    pub id: String,
    pub name: String,
    pub icon: Option<CategoryIcon>,
    pub count: Option<u32>,
    pub slug: Option<String>,
}

impl CategoryItem {
    /// Builds a filter pill.
    pub fn new(id: &str, name: &str, icon: Option<CategoryIcon>) -> Self {
        CategoryItem {
            id: id.to_string(),
            name: name.to_string(),
            icon,
            ..Default::default()
        }
    }
}

/// Returns at most `max_items` leading items, or all of them when no limit is set.
pub fn visible_items<T>(items: &[T], max_items: Option<usize>) -> &[T] {
    match max_items {
        Some(max) if max < items.len() => &items[..max],
        _ => items,
    }
}
