mod persistence;
mod store;

pub use persistence::{load_catalog, parse_catalog};
pub use store::MealCatalog;
