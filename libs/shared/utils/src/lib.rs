pub mod text;
pub mod test_utils;

pub use text::{contains_word, fold, title_case};
