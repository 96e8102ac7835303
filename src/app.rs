use crate::engine::{Command, Side, Surface};
use crate::models::{AppState, TruthValue};
use crate::session::{Phase, Session};

/// Terminal-side state: which screen is up, where the cursor is, and what
/// is being dragged. Everything that matters for scoring lives in the
/// [`Session`]; the app only turns keys into [`Command`]s.
pub struct App {
    pub state: AppState,
    session: Session,
    cursor: usize,
    column: Side,
    grabbed: Option<usize>,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            state: AppState::Welcome,
            session,
            cursor: 0,
            column: Side::Left,
            grabbed: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Matching column the cursor is in.
    pub fn column(&self) -> Side {
        self.column
    }

    /// Sorting item or fill-in token currently being dragged.
    pub fn grabbed(&self) -> Option<usize> {
        self.grabbed
    }

    pub fn start_quiz(&mut self) {
        self.state = if self.session.is_finished() {
            AppState::Result
        } else {
            AppState::Quiz
        };
    }

    fn item_count(&self) -> usize {
        match self.session.surface() {
            Some(Surface::MultipleChoice(s)) => s.options().len(),
            Some(Surface::TrueFalse(_)) => TruthValue::ALL.len(),
            Some(Surface::FillInBlank(s)) => s.tokens().len(),
            Some(Surface::Sorting(s)) => s.items().len(),
            Some(Surface::Matching(s)) => match self.column {
                Side::Left => s.lefts().len(),
                Side::Right => s.rights().len(),
            },
            None => 0,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    pub fn switch_column(&mut self, column: Side) {
        if matches!(self.session.surface(), Some(Surface::Matching(_))) && self.column != column {
            self.column = column;
            self.cursor = self.cursor.min(self.item_count().saturating_sub(1));
        }
    }

    /// Space: click whatever is under the cursor.
    pub fn activate(&mut self) {
        let command = match self.session.surface() {
            Some(Surface::MultipleChoice(_)) => Command::Toggle(self.cursor),
            Some(Surface::TrueFalse(_)) => match TruthValue::ALL.get(self.cursor) {
                Some(choice) => Command::Choose(*choice),
                None => return,
            },
            Some(Surface::FillInBlank(_)) => Command::ClickToken(self.cursor),
            Some(Surface::Sorting(_)) => match self.grabbed.take() {
                Some(from) => Command::Reorder {
                    from,
                    to: self.cursor,
                },
                None => {
                    self.grabbed = Some(self.cursor);
                    return;
                }
            },
            Some(Surface::Matching(_)) => match self.column {
                Side::Left => Command::SelectLeft(self.cursor),
                Side::Right => Command::SelectRight(self.cursor),
            },
            None => return,
        };
        self.session.dispatch(command);
    }

    /// Start dragging the fill-in token under the cursor.
    pub fn grab_token(&mut self) {
        if matches!(self.session.surface(), Some(Surface::FillInBlank(_))) {
            self.grabbed = Some(self.cursor);
        }
    }

    pub fn release(&mut self) {
        self.grabbed = None;
    }

    /// Number key: drop the dragged token on that blank, or focus it.
    pub fn pick_blank(&mut self, blank: usize) {
        if !matches!(self.session.surface(), Some(Surface::FillInBlank(_))) {
            return;
        }
        let command = match self.grabbed.take() {
            Some(token) => Command::DropToken { token, blank },
            None => Command::FocusBlank(blank),
        };
        self.session.dispatch(command);
    }

    pub fn check_answer(&mut self) {
        self.grabbed = None;
        self.session.check();
    }

    pub fn next_question(&mut self) {
        if !self.session.advance() {
            return;
        }
        self.cursor = 0;
        self.column = Side::Left;
        self.grabbed = None;

        if self.session.phase() == Phase::Finished {
            self.state = AppState::Result;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{Question, Sorting, TrueFalse};
    use crate::session::Score;

    fn sorting_app() -> App {
        let question = Question::Sorting(Sorting {
            question: String::new(),
            items: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            correct_order: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        });
        let mut app = App::new(Session::new(vec![question], Some(4)));
        app.start_quiz();
        app
    }

    #[test]
    fn test_cursor_wraps() {
        let mut app = sorting_app();
        app.select_previous();
        assert_eq!(app.cursor(), 2);
        app.select_next();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_grab_and_drop_reorders() {
        let mut app = sorting_app();
        let Some(Surface::Sorting(before)) = app.session().surface().cloned() else {
            panic!("expected sorting surface");
        };

        app.activate();
        assert_eq!(app.grabbed(), Some(0));
        app.select_next();
        app.activate();
        assert_eq!(app.grabbed(), None);

        let Some(Surface::Sorting(after)) = app.session().surface() else {
            panic!("expected sorting surface");
        };
        assert_eq!(after.items()[0], before.items()[1]);
        assert_eq!(after.items()[1], before.items()[0]);
    }

    #[test]
    fn test_keys_walk_through_to_result() {
        let question = Question::TrueFalse(TrueFalse {
            question: String::new(),
            answer: "falsch".to_string(),
        });
        let mut app = App::new(Session::new(vec![question], None));
        assert_eq!(app.state, AppState::Welcome);
        app.start_quiz();
        assert_eq!(app.state, AppState::Quiz);

        app.select_next();
        app.activate();
        app.next_question();
        assert_eq!(app.state, AppState::Quiz);

        app.check_answer();
        app.next_question();
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.session().summary(), Some(Score { correct: 1, wrong: 0 }));
    }
}
