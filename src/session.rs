//! Quiz progression: question order, the per-question answer state machine
//! and the running tally.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::engine::{self, Command, Surface};
use crate::models::Question;
use crate::shuffle::shuffle;

/// Running or final correct/incorrect counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub wrong: usize,
}

impl Score {
    pub fn answered(&self) -> usize {
        self.correct + self.wrong
    }
}

/// Where the current question stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Surface accepts commands and can be checked.
    Unanswered,
    /// Checked once; the verdict is final and the surface is read-only.
    Answered { correct: bool },
    /// All questions done.
    Finished,
}

/// A checked question, kept for the result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub prompt: String,
    pub kind: &'static str,
    pub correct: bool,
}

struct Current {
    surface: Surface,
    verdict: Option<bool>,
}

pub struct Session {
    questions: Vec<Question>,
    index: usize,
    score: Score,
    current: Option<Current>,
    history: Vec<Outcome>,
    rng: StdRng,
}

impl Session {
    /// Shuffle the questions once and render the first one. A seed makes
    /// every shuffle of the session reproducible.
    pub fn new(mut questions: Vec<Question>, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        shuffle(&mut questions, &mut rng);
        info!(count = questions.len(), ?seed, "starting session");

        let mut session = Self {
            questions,
            index: 0,
            score: Score::default(),
            current: None,
            history: Vec::new(),
            rng,
        };
        session.render_current();
        session
    }

    fn render_current(&mut self) {
        self.current = self.questions.get(self.index).map(|question| Current {
            surface: engine::render(question, &mut self.rng),
            verdict: None,
        });
    }

    pub fn phase(&self) -> Phase {
        match &self.current {
            None => Phase::Finished,
            Some(Current {
                verdict: Some(correct),
                ..
            }) => Phase::Answered { correct: *correct },
            Some(_) => Phase::Unanswered,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current.as_ref().and(self.questions.get(self.index))
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.current.as_ref().map(|current| &current.surface)
    }

    /// Zero-based position of the current question.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Final tally, available once every question has been shown.
    pub fn summary(&self) -> Option<Score> {
        self.is_finished().then_some(self.score)
    }

    pub fn history(&self) -> &[Outcome] {
        &self.history
    }

    /// Forward a command to the current surface. Answered questions are
    /// display-only and ignore every command.
    pub fn dispatch(&mut self, command: Command) -> bool {
        match &mut self.current {
            Some(current) if current.verdict.is_none() => current.surface.apply(command),
            _ => {
                debug!(?command, "surface is not interactive");
                false
            }
        }
    }

    /// Score the current answer. Only the first call per question has an
    /// effect; later calls return `None` and leave the tally alone.
    pub fn check(&mut self) -> Option<bool> {
        let question = self.questions.get(self.index)?;
        let current = self.current.as_mut()?;
        if current.verdict.is_some() {
            debug!(index = self.index, "question already checked");
            return None;
        }

        let correct = engine::evaluate(question, &current.surface.response());
        current.verdict = Some(correct);
        self.history.push(Outcome {
            prompt: question.prompt().to_string(),
            kind: question.kind(),
            correct,
        });
        info!(index = self.index, kind = question.kind(), correct, "checked answer");

        self.record_result(correct);
        Some(correct)
    }

    /// Count one verdict. Exactly one of the two counters moves.
    pub fn record_result(&mut self, correct: bool) {
        if correct {
            self.score.correct += 1;
        } else {
            self.score.wrong += 1;
        }
    }

    /// Move to the next question once the current one is checked.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.phase(), Phase::Answered { .. }) {
            return false;
        }

        self.index += 1;
        self.render_current();
        if self.is_finished() {
            info!(
                correct = self.score.correct,
                wrong = self.score.wrong,
                "quiz finished"
            );
        }
        true
    }
}
