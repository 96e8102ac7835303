use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Marker separating literal text from blank slots in a fill-in-blank text.
pub const BLANK_MARKER: &str = "___";

/// A single quiz question, tagged by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Question {
    MultipleChoice(MultipleChoice),
    TrueFalse(TrueFalse),
    FillInBlank(FillInBlank),
    Sorting(Sorting),
    Matching(Matching),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoice {
    #[serde(default)]
    pub question: String,
    pub options: Vec<String>,
    pub answer: OneOrMany,
}

/// A multiple-choice key: either a single value or a list of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// The key as an order-independent set.
    pub fn to_set(&self) -> BTreeSet<String> {
        match self {
            OneOrMany::One(value) => BTreeSet::from([value.clone()]),
            OneOrMany::Many(values) => values.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrueFalse {
    #[serde(default)]
    pub question: String,
    pub answer: String,
}

/// The two controls offered by a true/false question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TruthValue {
    Wahr,
    Falsch,
}

impl TruthValue {
    pub const ALL: [TruthValue; 2] = [TruthValue::Wahr, TruthValue::Falsch];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TruthValue::Wahr => "Wahr",
            TruthValue::Falsch => "Falsch",
        }
    }

    /// Value compared against the answer key.
    pub fn value(self) -> &'static str {
        match self {
            TruthValue::Wahr => "wahr",
            TruthValue::Falsch => "falsch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillInBlank {
    #[serde(default)]
    pub question: String,
    pub text: String,
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<BlankKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Either one expected token per blank, or a legacy key compared against
/// all blank values joined by a single space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlankKey {
    PerBlank(Vec<String>),
    Joined(String),
}

impl FillInBlank {
    /// Literal text pieces; blanks sit between consecutive segments.
    pub fn segments(&self) -> Vec<String> {
        self.text.split(BLANK_MARKER).map(str::to_string).collect()
    }

    pub fn blank_count(&self) -> usize {
        self.text.matches(BLANK_MARKER).count()
    }

    /// The legacy scalar key. A non-empty `answer` wins over a scalar
    /// `answers`; an array `answers` is never consulted here.
    pub fn legacy_key(&self) -> &str {
        match (&self.answer, &self.answers) {
            (Some(answer), _) if !answer.is_empty() => answer.as_str(),
            (_, Some(BlankKey::Joined(joined))) => joined.as_str(),
            _ => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorting {
    #[serde(default)]
    pub question: String,
    pub items: Vec<String>,
    pub correct_order: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matching {
    #[serde(default)]
    pub question: String,
    pub pairs: Vec<Pair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Matching {
    /// Expected right-hand value for a left-hand value, if any pair names it.
    pub fn right_for(&self, left: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|pair| pair.left == left)
            .map(|pair| pair.right.as_str())
    }
}

impl Question {
    /// Prompt shown above the input surface. Empty when absent.
    pub fn prompt(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.question,
            Question::TrueFalse(q) => &q.question,
            Question::FillInBlank(q) => &q.question,
            Question::Sorting(q) => &q.question,
            Question::Matching(q) => &q.question,
        }
    }

    /// Name of the question kind as it appears in question files.
    pub fn kind(&self) -> &'static str {
        match self {
            Question::MultipleChoice(_) => "multipleChoice",
            Question::TrueFalse(_) => "trueFalse",
            Question::FillInBlank(_) => "fillInBlank",
            Question::Sorting(_) => "sorting",
            Question::Matching(_) => "matching",
        }
    }

    /// Findings about records that will play but cannot be answered as
    /// their author probably intended.
    pub fn lint(&self) -> Vec<String> {
        let mut findings = Vec::new();

        match self {
            Question::MultipleChoice(q) => {
                for value in q.answer.to_set() {
                    if !q.options.contains(&value) {
                        findings.push(format!("answer {value:?} is not one of the options"));
                    }
                }
            }
            Question::TrueFalse(q) => {
                let key = q.answer.to_lowercase();
                if !TruthValue::ALL.iter().any(|choice| choice.value() == key) {
                    findings.push(format!("answer {:?} is neither wahr nor falsch", q.answer));
                }
            }
            Question::FillInBlank(q) => {
                let blanks = q.blank_count();
                if blanks == 0 {
                    findings.push(format!("text contains no {BLANK_MARKER} blank marker"));
                }
                match &q.answers {
                    Some(BlankKey::PerBlank(answers)) if answers.len() != blanks => {
                        findings.push(format!(
                            "{} answers given for {} blanks",
                            answers.len(),
                            blanks
                        ));
                    }
                    Some(BlankKey::PerBlank(_)) => {}
                    _ if q.legacy_key().is_empty() => {
                        findings.push("no answer key".to_string());
                    }
                    _ => {}
                }
            }
            Question::Sorting(q) => {
                let mut items = q.items.clone();
                let mut order = q.correct_order.clone();
                items.sort();
                order.sort();
                if items != order {
                    findings.push("correctOrder is not a permutation of items".to_string());
                }
            }
            Question::Matching(q) => {
                let mut seen = HashSet::new();
                for pair in &q.pairs {
                    if !seen.insert(pair.left.as_str()) {
                        findings.push(format!("left value {:?} appears more than once", pair.left));
                    }
                }
            }
        }

        findings
    }
}
