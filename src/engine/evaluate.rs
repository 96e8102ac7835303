use std::collections::HashSet;

use crate::models::{BlankKey, FillInBlank, Matching, Question};

use super::Response;

/// Score a response against a question's key.
///
/// Pure and repeatable. A response of the wrong kind, a missing blank or
/// an unknown matching entry scores as incorrect.
pub fn evaluate(question: &Question, response: &Response) -> bool {
    match (question, response) {
        (Question::MultipleChoice(q), Response::MultipleChoice(selected)) => {
            *selected == q.answer.to_set()
        }
        (Question::TrueFalse(q), Response::TrueFalse(selected)) => {
            selected.is_some_and(|choice| choice.value() == q.answer.to_lowercase())
        }
        (Question::FillInBlank(q), Response::FillInBlank(values)) => fill_in_blank(q, values),
        (Question::Sorting(q), Response::Sorting(order)) => *order == q.correct_order,
        (Question::Matching(q), Response::Matching(links)) => matching(q, links),
        _ => false,
    }
}

fn fill_in_blank(question: &FillInBlank, values: &[String]) -> bool {
    match &question.answers {
        Some(BlankKey::PerBlank(answers)) => values.iter().enumerate().all(|(blank, value)| {
            let expected = answers.get(blank).map_or("", String::as_str);
            value == expected
        }),
        _ => values.join(" ").trim() == question.legacy_key(),
    }
}

fn matching(question: &Matching, links: &[(String, Option<String>)]) -> bool {
    let every_link_right = links.iter().all(|(left, right)| {
        match (question.right_for(left), right) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    });

    let shown: HashSet<&str> = links.iter().map(|(left, _)| left.as_str()).collect();
    let every_pair_shown = question
        .pairs
        .iter()
        .all(|pair| shown.contains(pair.left.as_str()));

    every_link_right && every_pair_shown
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::models::{MultipleChoice, OneOrMany, Pair, Sorting, TrueFalse, TruthValue};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn multiple_choice(answer: OneOrMany) -> Question {
        Question::MultipleChoice(MultipleChoice {
            question: String::new(),
            options: strings(&["A", "B", "C"]),
            answer,
        })
    }

    fn fill_in_blank(answers: Option<BlankKey>, answer: Option<&str>) -> Question {
        Question::FillInBlank(FillInBlank {
            question: String::new(),
            text: "___ is in ___".to_string(),
            options: strings(&["Paris", "France"]),
            answers,
            answer: answer.map(str::to_string),
        })
    }

    fn animals() -> Question {
        Question::Matching(Matching {
            question: String::new(),
            pairs: vec![
                Pair {
                    left: "Dog".to_string(),
                    right: "Bark".to_string(),
                },
                Pair {
                    left: "Cat".to_string(),
                    right: "Meow".to_string(),
                },
            ],
        })
    }

    fn links(entries: &[(&str, Option<&str>)]) -> Response {
        Response::Matching(
            entries
                .iter()
                .map(|(left, right)| (left.to_string(), right.map(str::to_string)))
                .collect(),
        )
    }

    #[test]
    fn test_multiple_choice_ignores_order() {
        let question = multiple_choice(OneOrMany::Many(strings(&["B", "A"])));
        let selected = Response::MultipleChoice(BTreeSet::from(["A".to_string(), "B".to_string()]));
        assert!(evaluate(&question, &selected));
    }

    #[test]
    fn test_multiple_choice_subset_or_superset_fails() {
        let question = multiple_choice(OneOrMany::Many(strings(&["A", "B"])));
        let subset = Response::MultipleChoice(BTreeSet::from(["A".to_string()]));
        let superset = Response::MultipleChoice(strings(&["A", "B", "C"]).into_iter().collect());
        assert!(!evaluate(&question, &subset));
        assert!(!evaluate(&question, &superset));
    }

    #[test]
    fn test_multiple_choice_single_answer() {
        let question = multiple_choice(OneOrMany::One("C".to_string()));
        let selected = Response::MultipleChoice(BTreeSet::from(["C".to_string()]));
        assert!(evaluate(&question, &selected));
        assert!(!evaluate(&question, &Response::MultipleChoice(BTreeSet::new())));
    }

    #[test]
    fn test_true_false_is_case_insensitive() {
        let question = Question::TrueFalse(TrueFalse {
            question: String::new(),
            answer: "Wahr".to_string(),
        });
        assert!(evaluate(&question, &Response::TrueFalse(Some(TruthValue::Wahr))));
        assert!(!evaluate(&question, &Response::TrueFalse(Some(TruthValue::Falsch))));
        assert!(!evaluate(&question, &Response::TrueFalse(None)));
    }

    #[test]
    fn test_fill_in_blank_per_blank() {
        let question = fill_in_blank(Some(BlankKey::PerBlank(strings(&["Paris", "France"]))), None);
        assert!(evaluate(&question, &Response::FillInBlank(strings(&["Paris", "France"]))));
        assert!(!evaluate(&question, &Response::FillInBlank(strings(&["France", "Paris"]))));
        assert!(!evaluate(&question, &Response::FillInBlank(strings(&["Paris", ""]))));
    }

    #[test]
    fn test_fill_in_blank_short_key_needs_empty_blank() {
        let question = fill_in_blank(Some(BlankKey::PerBlank(strings(&["Paris"]))), None);
        assert!(evaluate(&question, &Response::FillInBlank(strings(&["Paris", ""]))));
        assert!(!evaluate(&question, &Response::FillInBlank(strings(&["Paris", "France"]))));
    }

    #[test]
    fn test_fill_in_blank_array_key_wins_over_scalar() {
        let question = fill_in_blank(
            Some(BlankKey::PerBlank(strings(&["Paris", "France"]))),
            Some("Berlin Germany"),
        );
        assert!(evaluate(&question, &Response::FillInBlank(strings(&["Paris", "France"]))));
    }

    #[test]
    fn test_fill_in_blank_legacy_joined_key() {
        let question = fill_in_blank(None, Some("Paris France"));
        assert!(evaluate(&question, &Response::FillInBlank(strings(&["Paris", "France"]))));

        let question = fill_in_blank(Some(BlankKey::Joined("Paris".to_string())), None);
        assert!(evaluate(&question, &Response::FillInBlank(strings(&["Paris", ""]))));
        assert!(!evaluate(&question, &Response::FillInBlank(strings(&["", ""]))));
    }

    #[test]
    fn test_sorting_exact_order() {
        let question = Question::Sorting(Sorting {
            question: String::new(),
            items: strings(&["C", "A", "B"]),
            correct_order: strings(&["A", "B", "C"]),
        });
        assert!(evaluate(&question, &Response::Sorting(strings(&["A", "B", "C"]))));
        assert!(!evaluate(&question, &Response::Sorting(strings(&["C", "A", "B"]))));
        assert!(!evaluate(&question, &Response::Sorting(strings(&["A", "B"]))));
    }

    #[test]
    fn test_matching() {
        let question = animals();
        assert!(evaluate(
            &question,
            &links(&[("Dog", Some("Bark")), ("Cat", Some("Meow"))])
        ));
        assert!(!evaluate(
            &question,
            &links(&[("Dog", Some("Meow")), ("Cat", Some("Bark"))])
        ));
        assert!(!evaluate(&question, &links(&[("Dog", Some("Bark")), ("Cat", None)])));
    }

    #[test]
    fn test_matching_unknown_or_missing_left_fails() {
        let question = animals();
        assert!(!evaluate(
            &question,
            &links(&[("Dog", Some("Bark")), ("Cow", Some("Moo"))])
        ));
        assert!(!evaluate(&question, &links(&[("Dog", Some("Bark"))])));
    }

    #[test]
    fn test_wrong_response_kind_fails() {
        let question = animals();
        assert!(!evaluate(&question, &Response::Sorting(Vec::new())));
    }

    proptest! {
        #[test]
        fn prop_sorting_correct_iff_equal(
            order in Just(strings(&["A", "B", "C", "D", "E"])).prop_shuffle(),
            shown in Just(strings(&["A", "B", "C", "D", "E"])).prop_shuffle(),
        ) {
            let question = Question::Sorting(Sorting {
                question: String::new(),
                items: strings(&["A", "B", "C", "D", "E"]),
                correct_order: order.clone(),
            });
            prop_assert_eq!(evaluate(&question, &Response::Sorting(shown.clone())), shown == order);
        }

        #[test]
        fn prop_multiple_choice_order_independent(
            key in proptest::sample::subsequence(strings(&["A", "B", "C", "D"]), 0..=4),
            reversed in any::<bool>(),
        ) {
            let mut answer = key.clone();
            if reversed {
                answer.reverse();
            }
            let question = Question::MultipleChoice(MultipleChoice {
                question: String::new(),
                options: strings(&["A", "B", "C", "D"]),
                answer: OneOrMany::Many(answer),
            });
            let selected = Response::MultipleChoice(key.into_iter().collect());
            prop_assert!(evaluate(&question, &selected));
        }
    }
}
