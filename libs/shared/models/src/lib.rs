pub mod attention;
pub mod error;

pub use attention::AttentionMode;
pub use error::AppError;
