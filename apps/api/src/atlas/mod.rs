pub mod handlers;
mod loader;
mod matcher;

pub use loader::{city_slug, Atlas, HeritageCity};
pub use matcher::COORD_TOLERANCE;
