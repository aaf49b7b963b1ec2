pub mod medicine;

pub use medicine::MedicineService;
