mod button;
mod card;
mod category_filter;
mod container;
mod empty_state;
mod error_fallback;
mod error_message;
mod footer;
mod game_card;
mod game_grid;
mod header;
mod icons;
mod loading;
mod promo_slider;
mod provider_card;
mod provider_grid;
mod scroll_row;
mod section_heading;
mod shell;

pub use button::{Button, ButtonAction, ButtonSize, ButtonVariant};
pub use card::{
    BadgeVariant, Card, CardBadge, CardBody, CardDescription, CardFooter, CardHeader, CardImage,
    CardTitle, CardVariant,
};
pub use category_filter::CategoryFilter;
pub use container::{Container, ContainerSize};
pub use empty_state::EmptyState;
pub use error_fallback::{failure_report, ErrorFallback};
pub use error_message::ErrorMessage;
pub use footer::Footer;
pub use game_card::GameCard;
pub use game_grid::GameGrid;
pub use header::Header;
pub use loading::{LoadingSpinner, SkeletonCard, SkeletonRow};
pub use promo_slider::PromoSlider;
pub use provider_card::ProviderCard;
pub use provider_grid::ProviderGrid;
pub use scroll_row::{ScrollButtons, ScrollTrack};
pub use section_heading::{SectionHeading, ViewAllLink};
pub use shell::Shell;
