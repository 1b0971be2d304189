//! Sample decks compiled into the binary.

use quiz_core::model::Subject;

use crate::deck_file::{DeckFileError, EmbeddedDeck};

const SAMPLE_DECKS: &str = include_str!("../data/sample_decks.json");

/// The bundled sample subjects, in display order.
///
/// # Errors
///
/// Returns `DeckFileError` if the bundled JSON is malformed.
pub fn sample_subjects() -> Result<Vec<Subject>, DeckFileError> {
    let decks: Vec<EmbeddedDeck> = serde_json::from_str(SAMPLE_DECKS)?;
    decks
        .into_iter()
        .map(|embedded| embedded.deck.into_subject(&embedded.id))
        .collect()
}
