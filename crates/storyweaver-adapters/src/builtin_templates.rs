//! Built-in story templates.
//!
//! Every genre ships with at least one template. Titles and bodies are stored
//! once; the display variant (icon and bold title) and the plain variant are
//! both derived from the same text at render time, so they can never drift.
//!
//! Adventure and Comedy carry a single template each. The remaining genres
//! have a second template so that random selection has something to choose
//! between.

use storyweaver_core::domain::{DomainError, DomainValidator as validator, Genre, StoryTemplate};
use tracing::{debug, instrument};

// ── Public API ────────────────────────────────────────────────────────────────

/// All built-in templates, grouped by genre in [`Genre::ALL`] order.
///
/// # Errors
///
/// Returns the first [`DomainError`] raised by template validation. The
/// shipped catalogue is covered by tests, so this only fails if an edit
/// introduces a broken placeholder.
#[instrument]
pub fn all_templates() -> Result<Vec<(Genre, StoryTemplate)>, DomainError> {
    let mut templates = Vec::new();
    for genre in Genre::ALL {
        for template in for_genre(genre) {
            validator::validate_template(&template)?;
            templates.push((genre, template));
        }
    }
    debug!(count = templates.len(), "built-in templates ready");
    Ok(templates)
}

/// Built-in templates for one genre.
pub fn for_genre(genre: Genre) -> Vec<StoryTemplate> {
    match genre {
        Genre::Adventure => vec![StoryTemplate::new(
            "The Quest for the {object}",
            "In the land of {place}, {name} and their loyal {animal} embarked on a daring \
             journey. Feeling {emotion}, they used their {superpower} to overcome {number} \
             treacherous challenges. At last, they found the legendary {object} and became \
             heroes!",
        )],
        Genre::Mystery => vec![
            StoryTemplate::new(
                "The Case of the Missing {object}",
                "When the {object} vanished from {place}, {name} and their clever {animal} \
                 sprang into action. Using their {superpower}, they uncovered {number} shocking \
                 clues. The truth? It was hidden in plain sight all along!",
            ),
            StoryTemplate::new(
                "The Whispering {object}",
                "Every night at midnight, the {object} in {place} began to whisper. Filled with \
                 {emotion}, {name} crept downstairs with their trusty {animal}. After {number} \
                 sleepless nights and one lucky burst of {superpower}, they learned the voice \
                 had been asking for help all along.",
            ),
        ],
        Genre::Comedy => vec![StoryTemplate::new(
            "The Great {object} Fiasco",
            "Nobody believed {name} when they said their {animal} could use a {object}. But \
             when they arrived in {place}, chaos erupted! With {superpower}, they caused \
             {number} hilarious mishaps.",
        )],
        Genre::Fantasy => vec![
            StoryTemplate::new(
                "The {object} of Destiny",
                "In the magical kingdom of {place}, {name} discovered they were the chosen one. \
                 Guided by a mystical {animal}, they wielded {superpower} to defeat {number} \
                 dark forces. The {object} held the key to saving the realm!",
            ),
            StoryTemplate::new(
                "The {animal}'s Bargain",
                "Beyond the misty hills of {place}, a wise old {animal} offered {name} a deal: \
                 the gift of {superpower} in exchange for the enchanted {object}. Torn by \
                 {emotion}, {name} accepted and spent {number} seasons learning that true magic \
                 cannot be traded.",
            ),
        ],
        Genre::SciFi => vec![
            StoryTemplate::new(
                "The {object} Protocol",
                "On planet {place}, {name} and their robotic {animal} uncovered a sinister plot. \
                 Using {superpower}, they hacked into {number} alien systems. The secret? The \
                 {object} was actually a cosmic key!",
            ),
            StoryTemplate::new(
                "Signal from {place}",
                "Stardate {number}: {name} picked up a faint signal from {place}. With their \
                 cybernetic {animal} at the controls and a surge of {emotion}, they followed it \
                 across the void. Their {superpower} unlocked the ancient {object}, and the \
                 galaxy was never the same.",
            ),
        ],
    }
}
