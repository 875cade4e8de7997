pub mod catalog;
pub mod destination;
pub mod recipe;
pub mod session;

pub use catalog::{Catalog, CatalogBuilder, LoadError};
pub use destination::{DayPlan, Destination, DestinationRecord, Schedule};
pub use recipe::{Macros, Recipe, RecipeRecord};
pub use session::{CatalogSession, SessionState};
