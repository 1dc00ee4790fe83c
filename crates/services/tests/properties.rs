use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use study_core::model::{Answer, AnswerWith, CardIndex, CardSet, LearnSettings, Stage};
use study_services::{LearnScheduler, LearnStep, QuizRunner, StudyQueue};

fn build_set(len: usize) -> CardSet {
    CardSet::from_pairs(
        "Generated",
        (0..len).map(|i| (format!("term {i}"), format!("definition {i}"))),
    )
}

proptest! {
    #[test]
    fn study_queue_empties_only_when_all_known(
        seed in any::<u64>(),
        len in 1usize..8,
        actions in proptest::collection::vec(any::<bool>(), 0..60),
    ) {
        let mut session = StudyQueue::with_rng(build_set(len), StdRng::seed_from_u64(seed)).unwrap();
        for know in actions {
            if session.is_complete() {
                break;
            }
            let before = session.progress();
            if know {
                let after = session.mark_known().unwrap();
                prop_assert!(after.fraction() >= before.fraction());
                prop_assert_eq!(after.remaining + 1, before.remaining);
            } else {
                let after = session.mark_unknown().unwrap();
                prop_assert_eq!(after.remaining, before.remaining);
            }

            let all_known = (0..len).all(|i| session.is_known(CardIndex::new(i)));
            prop_assert_eq!(session.is_complete(), all_known);
            prop_assert!(session.queue().all(|i| i.value() < len));
        }
    }

    #[test]
    fn learn_follows_mastery_rules(
        seed in any::<u64>(),
        len in 1usize..7,
        answers in proptest::collection::vec(any::<bool>(), 1..200),
    ) {
        let settings = LearnSettings::written_only(AnswerWith::Definition);
        let mut session =
            LearnScheduler::with_rng(build_set(len), settings, StdRng::seed_from_u64(seed)).unwrap();
        let mut streaks = vec![0u32; len];

        for correct in answers {
            let queue_was_empty = session.queue().next().is_none();
            let question = match session.next_question().unwrap() {
                LearnStep::Question(question) => question,
                LearnStep::Complete(summary) => {
                    prop_assert_eq!(summary.mastered, len);
                    prop_assert!(session.progress().iter().all(|p| p.stage() == Stage::Mastered));
                    break;
                }
            };
            prop_assert!(question.card.value() < len);
            if queue_was_empty {
                let rebuilt: Vec<_> = session.queue().chain([question.card]).collect();
                prop_assert!(rebuilt
                    .iter()
                    .all(|i| session.progress()[i.value()].stage() != Stage::Mastered));
            }

            let index = question.card.value();
            let before = session.progress()[index].stage();
            let text = if correct { question.expected.clone() } else { "zzz".to_string() };
            let outcome = session.answer(Answer::Written(text)).unwrap();
            prop_assert_eq!(outcome.correct, correct);

            let after = session.progress()[index];
            if correct {
                streaks[index] += 1;
                if after.stage() == Stage::Mastered && before != Stage::Mastered {
                    prop_assert!(streaks[index] >= 2);
                    prop_assert_eq!(before, Stage::Learning);
                }
            } else {
                streaks[index] = 0;
                prop_assert_eq!(after.correct_in_a_row(), 0);
                let expected = if before == Stage::Mastered { Stage::Learning } else { before };
                prop_assert_eq!(after.stage(), expected);
            }

            let complete = session.progress().iter().all(|p| p.stage() == Stage::Mastered);
            prop_assert_eq!(session.is_complete(), complete);
        }
    }

    #[test]
    fn quiz_asks_every_card_once_with_valid_options(
        seed in any::<u64>(),
        len in 4usize..16,
        picks in proptest::collection::vec(0usize..4, 16),
    ) {
        let mut quiz = QuizRunner::with_rng(build_set(len), StdRng::seed_from_u64(seed)).unwrap();

        let asked: HashSet<_> = quiz.questions().iter().map(|q| q.card).collect();
        prop_assert_eq!(asked.len(), len);
        prop_assert_eq!(quiz.total(), len);
        for question in quiz.questions() {
            prop_assert_eq!(question.options.len(), 4);
            let distinct: HashSet<_> = question.options.iter().map(|o| o.card).collect();
            prop_assert_eq!(distinct.len(), 4);
            prop_assert_eq!(question.options.iter().filter(|o| o.is_correct).count(), 1);
        }

        let mut expected_score = 0;
        for pick in picks.into_iter().take(len) {
            let outcome = quiz.choose(pick).unwrap();
            if outcome.correct {
                expected_score += 1;
            }
        }
        prop_assert!(quiz.is_complete());

        let result = quiz.result().unwrap();
        prop_assert_eq!(result.score(), expected_score);
        prop_assert!(result.score() <= len);
        #[allow(clippy::cast_precision_loss)]
        let rounded = (100.0 * expected_score as f64 / len as f64).round() as u32;
        prop_assert_eq!(result.percent(), rounded);
    }
}
