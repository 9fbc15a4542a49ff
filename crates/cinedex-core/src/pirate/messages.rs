//! Search summary and error messages, plain or pirate-themed.
//!
//! The pirate variants decorate their text with a greeting or closing drawn
//! from a fixed set. Which one is picked is deliberately random in
//! production; tests should assert membership in [`GREETINGS`] or
//! [`CLOSINGS`], or inject a [`FixedPicker`].

use super::vocabulary::rewrite;
use rand::Rng;

/// Openers for pirate error messages.
pub const GREETINGS: [&str; 4] = [
    "Ahoy matey!",
    "Avast ye!",
    "Batten down the hatches!",
    "Shiver me timbers!",
];

/// Sign-offs for pirate search summaries.
pub const CLOSINGS: [&str; 4] = ["Arrr!", "Yo ho ho!", "Savvy?", "Aye aye, captain!"];

const ERROR_LEAD: &str = "Trouble on the high seas!";

// ---------------------------------------------------------------------------
// Phrase selection
// ---------------------------------------------------------------------------

/// Chooses one phrase out of a fixed, non-empty set.
pub trait PhrasePicker {
    /// Index into a set of `len` phrases. Must be `< len`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: PhrasePicker + ?Sized> PhrasePicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl PhrasePicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always the same index (wrapped into range). For tests and reproducible
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPicker(pub usize);

impl PhrasePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

fn choose<'a, P: PhrasePicker + ?Sized>(picker: &mut P, phrases: &[&'a str]) -> &'a str {
    let idx = picker.pick(phrases.len()).min(phrases.len() - 1);
    phrases[idx]
}

/// `"<greeting> <message>"`. A blank message always gets the first greeting.
pub fn with_greeting<P: PhrasePicker + ?Sized>(message: &str, picker: &mut P) -> String {
    let greeting = if message.trim().is_empty() {
        GREETINGS[0]
    } else {
        choose(picker, &GREETINGS)
    };
    format!("{greeting} {message}")
}

/// `"<message> <closing>"`. A blank message always gets the first closing.
pub fn with_closing<P: PhrasePicker + ?Sized>(message: &str, picker: &mut P) -> String {
    let closing = if message.trim().is_empty() {
        CLOSINGS[0]
    } else {
        choose(picker, &CLOSINGS)
    };
    format!("{message} {closing}")
}

// ---------------------------------------------------------------------------
// Composer
// ---------------------------------------------------------------------------

/// Builds the user-facing summary and error text for one request.
///
/// ```
/// use cinedex_core::pirate::{FixedPicker, MessageComposer};
///
/// let mut plain = MessageComposer::new(false);
/// assert_eq!(plain.result_message(2, "genre: Drama"), "Found 2 movie(s) matching: genre: Drama");
///
/// let mut pirate = MessageComposer::with_picker(true, FixedPicker(0));
/// assert_eq!(
///     pirate.result_message(0, "genre: Comedy"),
///     "No treasure found with yer compass readings: genre: Comedy Arrr!"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MessageComposer<P = ThreadRngPicker> {
    pirate: bool,
    picker: P,
}

impl MessageComposer<ThreadRngPicker> {
    pub fn new(pirate: bool) -> Self {
        Self::with_picker(pirate, ThreadRngPicker)
    }
}

impl<P: PhrasePicker> MessageComposer<P> {
    pub fn with_picker(pirate: bool, picker: P) -> Self {
        Self { pirate, picker }
    }

    pub fn is_pirate(&self) -> bool {
        self.pirate
    }

    /// Summary of a search that matched `count` movies for `criteria`.
    pub fn result_message(&mut self, count: usize, criteria: &str) -> String {
        self.compose_result(count, criteria, "the")
    }

    /// Like [`MessageComposer::result_message`], worded for the search page:
    /// an empty plain result refers to "your" criteria instead of "the".
    pub fn page_result_message(&mut self, count: usize, criteria: &str) -> String {
        self.compose_result(count, criteria, "your")
    }

    fn compose_result(&mut self, count: usize, criteria: &str, owner: &str) -> String {
        if !self.pirate {
            return match count {
                0 => format!("No movies found matching {owner} search criteria: {criteria}"),
                n => format!("Found {n} movie(s) matching: {criteria}"),
            };
        }

        let body = match count {
            0 => format!("No treasure found with yer compass readings: {criteria}"),
            1 => format!("Found 1 treasure matching yer hunt: {criteria}"),
            n => format!("Discovered {n} treasures in yer bounty hunt: {criteria}"),
        };
        with_closing(&body, &mut self.picker)
    }

    /// Error text for the caller. Plain mode passes `raw` through untouched.
    pub fn error_message(&mut self, raw: &str) -> String {
        if !self.pirate {
            return raw.to_string();
        }
        let body = format!("{ERROR_LEAD} {}", rewrite(raw));
        with_greeting(&body, &mut self.picker)
    }
}
