#![forbid(unsafe_code)]

pub mod deck_file;
pub mod loader;
pub mod repository;
pub mod sample;

pub use loader::{DeckLoadError, DeckLoader, DeckOrigin, LoadedDecks};
pub use repository::{InMemoryRepository, Storage, StorageError, SubjectRepository};
