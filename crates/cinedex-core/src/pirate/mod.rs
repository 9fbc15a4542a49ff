//! Pirate theme — mode detection and deterministic text rewriting.
//!
//! Three pieces, used in this order by the presentation layer:
//!
//! ```text
//! mode::detect ──► vocabulary::rewrite / rewrite_movie ──► messages::MessageComposer
//! ```
//!
//! Everything except greeting/closing selection is a pure function of its
//! input. Phrase selection goes through [`PhrasePicker`] so tests can swap
//! the random source for a fixed one.

pub mod messages;
pub mod mode;
pub mod vocabulary;

pub use messages::{
    with_closing, with_greeting, FixedPicker, MessageComposer, PhrasePicker, ThreadRngPicker,
    CLOSINGS, GREETINGS,
};
pub use mode::{detect, is_pirate_mode, PirateMode, TRIGGER_WORDS};
pub use vocabulary::{rewrite, rewrite_movie, rewrite_opt, VOCABULARY};
