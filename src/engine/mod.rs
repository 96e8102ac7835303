//! Question rendering and answer evaluation.
//!
//! A [`Surface`] is the in-memory interaction state of one question. The
//! terminal UI is a projection of it and mutates it only through
//! [`Command`]s, so every interaction can be replayed in tests without a
//! terminal. [`Surface::response`] reads the state back into a [`Response`]
//! which [`evaluate`] scores against the question's key.

mod blanks;
mod choice;
mod evaluate;
mod matching;
mod sorting;

use std::collections::BTreeSet;

use rand::Rng;
use tracing::debug;

use crate::models::{Question, TruthValue};

pub use blanks::{BlankSurface, TokenPlace};
pub use choice::{ChoiceSurface, TrueFalseSurface};
pub use evaluate::evaluate;
pub use matching::{MatchingSurface, Side};
pub use sorting::SortingSurface;

/// A user action on a rendered question, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Flip a multiple-choice checkbox.
    Toggle(usize),
    /// Select one of the true/false controls.
    Choose(TruthValue),
    /// Mark a blank as the target for the next token click.
    FocusBlank(usize),
    /// Click a token: place it into the focused blank, else the first empty one.
    ClickToken(usize),
    /// Drag a token onto a blank.
    DropToken { token: usize, blank: usize },
    /// Drag the item at `from` onto the item at `to`.
    Reorder { from: usize, to: usize },
    /// Click a left-column matching entry.
    SelectLeft(usize),
    /// Click a right-column matching entry (index in display order).
    SelectRight(usize),
    /// Link a left entry to a right entry, evicting previous partners.
    Connect { left: usize, right: usize },
    /// Remove whatever link touches the entry.
    Disconnect(Side, usize),
}

/// The user's current answer, read from a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    MultipleChoice(BTreeSet<String>),
    TrueFalse(Option<TruthValue>),
    /// Placed token value per blank, empty string for an empty blank.
    FillInBlank(Vec<String>),
    /// Items in displayed order.
    Sorting(Vec<String>),
    /// Each left value with its connected right value, in left-column order.
    Matching(Vec<(String, Option<String>)>),
}

/// Interaction state for one rendered question.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    MultipleChoice(ChoiceSurface),
    TrueFalse(TrueFalseSurface),
    FillInBlank(BlankSurface),
    Sorting(SortingSurface),
    Matching(MatchingSurface),
}

/// Build the interactive surface for a question.
///
/// Sorting items and the right matching column are shuffled with `rng`;
/// the question itself, answer key included, is left untouched.
pub fn render<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Surface {
    match question {
        Question::MultipleChoice(q) => Surface::MultipleChoice(ChoiceSurface::new(&q.options)),
        Question::TrueFalse(_) => Surface::TrueFalse(TrueFalseSurface::default()),
        Question::FillInBlank(q) => Surface::FillInBlank(BlankSurface::new(q)),
        Question::Sorting(q) => Surface::Sorting(SortingSurface::new(&q.items, rng)),
        Question::Matching(q) => Surface::Matching(MatchingSurface::new(&q.pairs, rng)),
    }
}

impl Surface {
    /// Apply a command. Returns whether it changed anything; commands for
    /// another question kind or naming unknown indices are ignored.
    pub fn apply(&mut self, command: Command) -> bool {
        let applied = match (self, command) {
            (Surface::MultipleChoice(s), Command::Toggle(option)) => s.toggle(option),
            (Surface::TrueFalse(s), Command::Choose(choice)) => s.choose(choice),
            (Surface::FillInBlank(s), Command::FocusBlank(blank)) => s.focus(blank),
            (Surface::FillInBlank(s), Command::ClickToken(token)) => s.click_token(token),
            (Surface::FillInBlank(s), Command::DropToken { token, blank }) => s.drop_token(token, blank),
            (Surface::Sorting(s), Command::Reorder { from, to }) => s.reorder(from, to),
            (Surface::Matching(s), Command::SelectLeft(left)) => s.select_left(left),
            (Surface::Matching(s), Command::SelectRight(right)) => s.select_right(right),
            (Surface::Matching(s), Command::Connect { left, right }) => s.connect(left, right),
            (Surface::Matching(s), Command::Disconnect(side, index)) => s.disconnect(side, index),
            _ => false,
        };

        if applied {
            debug!(?command, "applied command");
        } else {
            debug!(?command, "ignored command");
        }
        applied
    }

    /// Read the current interaction state.
    pub fn response(&self) -> Response {
        match self {
            Surface::MultipleChoice(s) => Response::MultipleChoice(s.selected()),
            Surface::TrueFalse(s) => Response::TrueFalse(s.selected()),
            Surface::FillInBlank(s) => Response::FillInBlank(s.placed_values()),
            Surface::Sorting(s) => Response::Sorting(s.items().to_vec()),
            Surface::Matching(s) => Response::Matching(s.links_by_value()),
        }
    }
}
