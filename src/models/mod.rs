mod question;

pub use question::{
    BLANK_MARKER, BlankKey, FillInBlank, Matching, MultipleChoice, OneOrMany, Pair, Question,
    Sorting, TrueFalse, TruthValue,
};

/// Which screen the terminal app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}
