pub mod conversion;
pub mod error;
pub mod library;
pub mod prompt;
pub mod promptbook;
pub mod settings;
