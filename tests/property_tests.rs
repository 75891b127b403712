//! Property-based tests for ordering, scoring and locking.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated question lists and answer sequences.

use proptest::prelude::*;
use quizkit::question::{partition_bonus, Question, QuestionId, QuestionSet};
use quizkit::repository::QuestionRepository;
use quizkit::store::{KeyValueStore, MemoryStore, DEFAULT_STORE_KEY};
use quizkit::QuizSession;

const CHOICES: [&str; 4] = ["a", "b", "c", "d"];

prop_compose! {
    fn arbitrary_question(id: i64)(correct in 0..4usize, is_bonus in any::<bool>()) -> Question {
        Question {
            id: QuestionId::Number(id),
            text: format!("Question {id}?"),
            choices: CHOICES.iter().map(|c| c.to_string()).collect(),
            correct_answer: CHOICES[correct].to_string(),
            is_bonus,
        }
    }
}

fn arbitrary_questions(max: usize) -> impl Strategy<Value = Vec<Question>> {
    prop::collection::vec((0..4usize, any::<bool>()), 0..max).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (correct, is_bonus))| Question {
                id: QuestionId::Number(i as i64),
                text: format!("Question {i}?"),
                choices: CHOICES.iter().map(|c| c.to_string()).collect(),
                correct_answer: CHOICES[correct].to_string(),
                is_bonus,
            })
            .collect()
    })
}

fn ids(questions: &[Question]) -> Vec<QuestionId> {
    questions.iter().map(|q| q.id.clone()).collect()
}

proptest! {
    #[test]
    fn partition_puts_every_bonus_after_every_regular(questions in arbitrary_questions(20)) {
        let ordered = partition_bonus(questions.clone());
        prop_assert_eq!(ordered.len(), questions.len());

        let first_bonus = ordered.iter().position(|q| q.is_bonus).unwrap_or(ordered.len());
        prop_assert!(ordered[..first_bonus].iter().all(|q| !q.is_bonus));
        prop_assert!(ordered[first_bonus..].iter().all(|q| q.is_bonus));
    }

    #[test]
    fn partition_is_stable_within_groups(questions in arbitrary_questions(20)) {
        let ordered = partition_bonus(questions.clone());

        let regular_in: Vec<_> = questions.iter().filter(|q| !q.is_bonus).map(|q| &q.id).collect();
        let regular_out: Vec<_> = ordered.iter().filter(|q| !q.is_bonus).map(|q| &q.id).collect();
        prop_assert_eq!(regular_in, regular_out);

        let bonus_in: Vec<_> = questions.iter().filter(|q| q.is_bonus).map(|q| &q.id).collect();
        let bonus_out: Vec<_> = ordered.iter().filter(|q| q.is_bonus).map(|q| &q.id).collect();
        prop_assert_eq!(bonus_in, bonus_out);
    }

    #[test]
    fn partition_is_idempotent(questions in arbitrary_questions(20)) {
        let once = partition_bonus(questions);
        let twice = partition_bonus(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn load_is_idempotent(defaults in arbitrary_questions(8), stored in arbitrary_questions(8)) {
        let stored: Vec<Question> = stored
            .into_iter()
            .map(|mut q| { q.id = QuestionId::Text(format!("user-{}", q.id)); q })
            .collect();
        let raw = serde_json::to_string(&QuestionSet::new(stored)).unwrap();
        let store = MemoryStore::new().with_entry(DEFAULT_STORE_KEY, &raw);
        let repo = QuestionRepository::new(store, QuestionSet::new(defaults));

        prop_assert_eq!(repo.load(), repo.load());
    }

    #[test]
    fn added_question_persists_without_defaults(
        defaults in arbitrary_questions(8),
        added in arbitrary_question(10_000),
    ) {
        let mut repo = QuestionRepository::new(MemoryStore::new(), QuestionSet::new(defaults.clone()));
        let current = repo.load();
        let updated = repo.add(added.clone(), &current);

        let raw = repo.store().read(DEFAULT_STORE_KEY).unwrap().unwrap();
        let persisted: QuestionSet = serde_json::from_str(&raw).unwrap();
        prop_assert_eq!(ids(&persisted.questions), vec![added.id.clone()]);

        let reloaded = repo.load();
        prop_assert_eq!(reloaded.len(), defaults.len() + 1);
        prop_assert_eq!(ids(&reloaded), ids(&updated));
    }

    #[test]
    fn selection_scores_by_weight(question in arbitrary_question(1), pick in 0..4usize, start in 0..3u32) {
        // Reach a starting score by answering `start` regular warm-up questions correctly.
        let mut questions: Vec<Question> = (0..start)
            .map(|i| Question {
                id: QuestionId::Text(format!("warmup-{i}")),
                text: "Warm up?".into(),
                choices: vec!["yes".into(), "no".into()],
                correct_answer: "yes".into(),
                is_bonus: false,
            })
            .collect();
        questions.push(question.clone());

        let mut session = QuizSession::new(questions);
        for _ in 0..start {
            session = session.select_answer("yes").unwrap().advance().unwrap();
        }
        prop_assert_eq!(session.score(), start);

        let choice = CHOICES[pick];
        let answered = session.select_answer(choice).unwrap();
        let expected = match (question.correct_answer == choice, question.is_bonus) {
            (true, true) => start + 2,
            (true, false) => start + 1,
            (false, true) => start.saturating_sub(1),
            (false, false) => start,
        };
        prop_assert_eq!(answered.score(), expected);
    }

    #[test]
    fn locked_session_ignores_further_selections(
        questions in arbitrary_questions(6).prop_filter("needs a question", |q| !q.is_empty()),
        first in 0..4usize,
        later in prop::collection::vec(0..4usize, 1..6),
    ) {
        let locked = QuizSession::new(partition_bonus(questions))
            .select_answer(CHOICES[first])
            .unwrap();

        for pick in later {
            let again = locked.select_answer(CHOICES[pick]).unwrap();
            prop_assert_eq!(again.score(), locked.score());
            prop_assert_eq!(again.selected_answer(), locked.selected_answer());
        }
    }

    #[test]
    fn answering_every_question_completes(
        questions in arbitrary_questions(12).prop_filter("needs a question", |q| !q.is_empty()),
        picks in prop::collection::vec(0..4usize, 12),
    ) {
        let total = questions.len();
        let mut session = QuizSession::new(partition_bonus(questions));

        for pick in picks.iter().take(total) {
            session = session.select_answer(CHOICES[*pick]).unwrap();
            session = session.advance().unwrap();
        }

        prop_assert!(session.is_completed());
        prop_assert!(session.score() <= 2 * total as u32);
    }
}
