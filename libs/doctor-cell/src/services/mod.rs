pub mod aggregator;
pub mod local_filter;
pub mod search;

pub use aggregator::aggregate;
pub use local_filter::{filter_locally, SearchSession};
pub use search::DoctorSearchService;
