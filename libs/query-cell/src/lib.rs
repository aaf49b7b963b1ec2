pub mod dictionaries;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{AttentionFilter, AvailabilityWindow, InterpretRequest, ParsedQuery};
pub use router::query_routes;
pub use services::interpreter::interpret;
