mod home;
mod loading;
mod not_found;

pub use home::Home;
pub use loading::Loading;
pub use not_found::NotFound;
