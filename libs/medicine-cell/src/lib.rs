pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{ApiMedicineRow, Medicine, MedicineSearchRequest};
pub use router::medicine_routes;
pub use services::medicine::MedicineService;
