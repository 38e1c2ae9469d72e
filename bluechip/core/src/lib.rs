//! Interaction state and display records for the Bluechip gaming site.
//!
//! Nothing in here touches the DOM. The web crate plugs browser handles into
//! the traits defined here ([`ScrollContainer`], [`ScrollLockTarget`]) and
//! forwards browser events into the state machines.
pub mod carousel;
pub mod category;
pub mod classes;
pub mod config;
pub mod data;
pub mod failure;
pub mod model;
pub mod overlay;
pub mod responsive;
pub mod routes;
pub mod scroll;
pub mod scroll_lock;
pub mod sections;

pub use carousel::{Autoplay, AutoplayCommand, Carousel, CarouselError, Visibility, display_sequence};
pub use category::CategorySelection;
pub use classes::cn;
pub use failure::FailureReport;
pub use model::{CategoryIcon, CategoryItem, Game, ItemId, PromoSlide, Provider, visible_items};
pub use overlay::{OverlayEvent, OverlayMenu, OverlayState, PointerTarget, Transition};
pub use responsive::{MOBILE_BREAKPOINT, ResponsiveObserver};
pub use scroll::{SCROLL_EDGE_BUFFER, ScrollAffordance, ScrollContainer, ScrollDirection, ScrollPosition};
pub use scroll_lock::{ScrollLock, ScrollLockGuard, ScrollLockTarget};
pub use sections::ExpandedSections;
