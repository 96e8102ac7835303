use crate::models::FillInBlank;

/// Where a token currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPlace {
    Pool,
    Blank(usize),
}

/// Blank slots interleaved with literal text, plus a pool of tokens.
///
/// Tokens are identified by their index in the option list, so duplicate
/// values stay distinct. A token is either in the pool or in exactly one
/// blank, and a blank holds at most one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankSurface {
    segments: Vec<String>,
    tokens: Vec<String>,
    blanks: Vec<Option<usize>>,
    pool: Vec<usize>,
    focused: Option<usize>,
}

impl BlankSurface {
    pub fn new(question: &FillInBlank) -> Self {
        Self {
            segments: question.segments(),
            tokens: question.options.clone(),
            blanks: vec![None; question.blank_count()],
            pool: (0..question.options.len()).collect(),
            focused: None,
        }
    }

    /// Literal text; blank `i` sits between `segments[i]` and `segments[i + 1]`.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn blank_count(&self) -> usize {
        self.blanks.len()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens not placed in any blank, in the order they returned to the pool.
    pub fn pool(&self) -> &[usize] {
        &self.pool
    }

    /// Token placed in a blank.
    pub fn occupant(&self, blank: usize) -> Option<usize> {
        self.blanks.get(blank).copied().flatten()
    }

    pub fn place_of(&self, token: usize) -> Option<TokenPlace> {
        if token >= self.tokens.len() {
            return None;
        }
        let place = self
            .blanks
            .iter()
            .position(|occupant| *occupant == Some(token))
            .map_or(TokenPlace::Pool, TokenPlace::Blank);
        Some(place)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focus(&mut self, blank: usize) -> bool {
        if blank >= self.blanks.len() {
            return false;
        }
        self.focused = Some(blank);
        true
    }

    /// Place a token into the focused blank, or the first empty blank, or
    /// the first blank when all are taken. Clears the focus.
    pub fn click_token(&mut self, token: usize) -> bool {
        if token >= self.tokens.len() {
            return false;
        }
        let target = self
            .focused
            .filter(|blank| *blank < self.blanks.len())
            .or_else(|| self.blanks.iter().position(Option::is_none))
            .or(if self.blanks.is_empty() { None } else { Some(0) });
        let Some(target) = target else {
            return false;
        };

        let placed = self.place(token, target);
        let unfocused = self.focused.take().is_some();
        placed || unfocused
    }

    pub fn drop_token(&mut self, token: usize, blank: usize) -> bool {
        if token >= self.tokens.len() || blank >= self.blanks.len() {
            return false;
        }
        let placed = self.place(token, blank);
        let unfocused = self.focused.take().is_some();
        placed || unfocused
    }

    fn place(&mut self, token: usize, blank: usize) -> bool {
        if self.blanks[blank] == Some(token) {
            return false;
        }
        if let Some(previous) = self.blanks[blank].take() {
            self.pool.push(previous);
        }
        if let Some(old) = self.blanks.iter().position(|occupant| *occupant == Some(token)) {
            self.blanks[old] = None;
        }
        self.pool.retain(|pooled| *pooled != token);
        self.blanks[blank] = Some(token);
        true
    }

    /// Value placed in each blank, empty string where nothing is placed.
    pub fn placed_values(&self) -> Vec<String> {
        self.blanks
            .iter()
            .map(|occupant| {
                occupant
                    .and_then(|token| self.tokens.get(token))
                    .cloned()
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn surface(text: &str, options: &[&str]) -> BlankSurface {
        BlankSurface::new(&FillInBlank {
            question: String::new(),
            text: text.to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
            answers: None,
            answer: None,
        })
    }

    #[test]
    fn test_initial_state() {
        let s = surface("___ is the capital of ___.", &["Paris", "France", "Berlin"]);
        assert_eq!(s.blank_count(), 2);
        assert_eq!(s.pool(), [0, 1, 2]);
        assert_eq!(s.placed_values(), ["", ""]);
    }

    #[test]
    fn test_drop_into_blank() {
        let mut s = surface("___ ___", &["Paris", "France"]);
        assert!(s.drop_token(1, 1));
        assert_eq!(s.placed_values(), ["", "France"]);
        assert_eq!(s.pool(), [0]);
        assert_eq!(s.place_of(1), Some(TokenPlace::Blank(1)));
    }

    #[test]
    fn test_relocating_token_vacates_old_blank() {
        let mut s = surface("___ ___", &["Paris", "France"]);
        s.drop_token(0, 0);
        s.drop_token(0, 1);
        assert_eq!(s.placed_values(), ["", "Paris"]);
        assert_eq!(s.occupant(0), None);
        assert_eq!(s.pool(), [1]);
    }

    #[test]
    fn test_occupied_blank_returns_occupant_to_pool() {
        let mut s = surface("___", &["Paris", "France", "Berlin"]);
        s.drop_token(0, 0);
        s.drop_token(2, 0);
        assert_eq!(s.placed_values(), ["Berlin"]);
        assert_eq!(s.pool(), [1, 0]);
    }

    #[test]
    fn test_drop_onto_own_blank_is_noop() {
        let mut s = surface("___", &["Paris"]);
        s.drop_token(0, 0);
        assert!(!s.drop_token(0, 0));
        assert_eq!(s.placed_values(), ["Paris"]);
    }

    #[test]
    fn test_click_fills_first_empty_blank() {
        let mut s = surface("___ ___ ___", &["a", "b", "c", "d"]);
        s.drop_token(0, 0);
        s.click_token(1);
        assert_eq!(s.placed_values(), ["a", "b", ""]);
        s.click_token(2);
        s.click_token(3);
        assert_eq!(s.placed_values(), ["d", "b", "c"]);
        assert_eq!(s.pool(), [0]);
    }

    #[test]
    fn test_click_uses_focused_blank_once() {
        let mut s = surface("___ ___", &["a", "b"]);
        assert!(s.focus(1));
        s.click_token(0);
        assert_eq!(s.placed_values(), ["", "a"]);
        assert_eq!(s.focused(), None);

        s.click_token(1);
        assert_eq!(s.placed_values(), ["b", "a"]);
    }

    #[test]
    fn test_drag_and_click_stay_consistent() {
        let mut s = surface("___ ___", &["a", "b"]);
        s.focus(0);
        s.drop_token(1, 1);
        assert_eq!(s.focused(), None);
        s.click_token(1);
        assert_eq!(s.placed_values(), ["b", ""]);
        assert_eq!(s.pool(), [0]);
    }

    #[test]
    fn test_duplicate_values_are_distinct_tokens() {
        let mut s = surface("___ ___", &["the", "the"]);
        s.click_token(0);
        s.click_token(1);
        assert_eq!(s.placed_values(), ["the", "the"]);
        assert!(s.pool().is_empty());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut s = surface("no blanks here", &["a"]);
        assert!(!s.focus(0));
        assert!(!s.click_token(0));
        assert!(!s.drop_token(0, 0));
        assert!(!s.drop_token(5, 0));
        assert_eq!(s.place_of(5), None);
        assert!(s.placed_values().is_empty());
    }
}
