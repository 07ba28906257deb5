//! Canned Replies
//!
//! Fallback responses for free text that is not a menu action. Selection is
//! behind a trait so tests can pin the choice.

use rand::seq::SliceRandom;

/// Fixed set of replies nudging the user toward sending a photo
pub const CANNED_RESPONSES: &[&str] = &[
    "Looks like you wanted to say something? Maybe send me an image instead!",
    "I'm ready to work! Waiting for your picture!",
    "If you have an image, I can pull the text out of it.",
    "Tell me what you think, or just send me a photo!",
    "I'm here to help! How about an image?",
    "Don't be shy, send me a photo and I'll do my thing!",
];

/// Strategy for choosing a fallback reply
pub trait ResponsePicker: Send + Sync {
    fn pick<'a>(&self, options: &'a [&'a str]) -> &'a str;
}

/// Default picker backed by the thread-local RNG
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick<'a>(&self, options: &'a [&'a str]) -> &'a str {
        options.choose(&mut rand::thread_rng()).copied().unwrap_or("")
    }
}
