mod loader;

pub use loader::{load_question_bank, LoadError};
