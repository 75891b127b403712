//! Merges the bundled question set with user additions from the store.

use stillwater::validation::Validation;
use tracing::{debug, info, warn};

use crate::question::{partition_bonus, Question, QuestionSet};
use crate::store::{KeyValueStore, StoreError, DEFAULT_STORE_KEY};

/// Source of the ordered question list.
///
/// Store failures never escape: an unreadable or malformed stored value
/// loads as "no additions", and a failed write still returns the updated
/// list for the current session.
#[derive(Debug)]
pub struct QuestionRepository<K: KeyValueStore> {
    store: K,
    key: String,
    defaults: QuestionSet,
}

impl<K: KeyValueStore> QuestionRepository<K> {
    pub fn new(store: K, defaults: QuestionSet) -> Self {
        Self {
            store,
            key: DEFAULT_STORE_KEY.to_string(),
            defaults,
        }
    }

    /// Use a different store key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn defaults(&self) -> &QuestionSet {
        &self.defaults
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Defaults followed by stored additions, bonus questions last.
    pub fn load(&self) -> Vec<Question> {
        let stored = self.read_stored();
        debug!(
            defaults = self.defaults.questions.len(),
            stored = stored.len(),
            "loaded questions"
        );
        partition_bonus(self.defaults.questions.iter().cloned().chain(stored))
    }

    /// Append `question` to `current`, persist the additions, and return the
    /// reordered list.
    pub fn add(&mut self, question: Question, current: &[Question]) -> Vec<Question> {
        info!(id = %question.id, bonus = question.is_bonus, "adding question");
        let questions = partition_bonus(current.iter().cloned().chain(Some(question)));

        let additions = QuestionSet::new(
            questions
                .iter()
                .filter(|q| !self.defaults.contains_id(&q.id))
                .cloned()
                .collect(),
        );
        if let Err(e) = self.persist(&additions) {
            warn!(error = %e, "could not persist questions, the addition lasts for this session only");
        }

        questions
    }

    fn persist(&mut self, additions: &QuestionSet) -> Result<(), StoreError> {
        let raw = serde_json::to_string(additions).map_err(|source| StoreError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.store.write(&self.key, &raw)
    }

    fn read_stored(&self) -> Vec<Question> {
        match self.try_read_stored() {
            Ok(questions) => questions,
            Err(e) => {
                warn!(error = %e, "ignoring stored questions");
                Vec::new()
            }
        }
    }

    fn try_read_stored(&self) -> Result<Vec<Question>, StoreError> {
        let Some(raw) = self.store.read(&self.key)? else {
            return Ok(Vec::new());
        };
        let set: QuestionSet = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            key: self.key.clone(),
            source,
        })?;

        Ok(set
            .questions
            .into_iter()
            .filter(|q| match q.check() {
                Validation::Success(_) => true,
                Validation::Failure(errors) => {
                    let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                    warn!(id = %q.id, reasons = ?reasons, "skipping invalid stored question");
                    false
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::fixtures::question;
    use crate::question::QuestionId;
    use crate::store::MemoryStore;

    fn defaults() -> QuestionSet {
        QuestionSet::new(vec![
            question(1, "Paris", false),
            question(2, "42", true),
            question(3, "7", false),
        ])
    }

    fn ids(questions: &[Question]) -> Vec<String> {
        questions.iter().map(|q| q.id.to_string()).collect()
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[test]
    fn load_orders_defaults_with_bonus_last() {
        let repo = QuestionRepository::new(MemoryStore::new(), defaults());
        assert_eq!(ids(&repo.load()), vec!["1", "3", "2"]);
    }

    #[test]
    fn load_appends_stored_questions() {
        let stored = serde_json::to_string(&QuestionSet::new(vec![
            question(10, "42", true),
            question(11, "7", false),
        ]))
        .unwrap();
        let store = MemoryStore::new().with_entry(DEFAULT_STORE_KEY, &stored);
        let repo = QuestionRepository::new(store, defaults());

        assert_eq!(ids(&repo.load()), vec!["1", "3", "11", "2", "10"]);
    }

    #[test]
    fn corrupt_store_loads_defaults_only() {
        let store = MemoryStore::new().with_entry(DEFAULT_STORE_KEY, "{{{ not json");
        let repo = QuestionRepository::new(store, defaults());
        assert_eq!(ids(&repo.load()), vec!["1", "3", "2"]);
    }

    #[test]
    fn invalid_stored_questions_are_skipped() {
        let mut broken = question(10, "42", false);
        broken.correct_answer = "nowhere".into();
        let stored =
            serde_json::to_string(&QuestionSet::new(vec![broken, question(11, "7", false)]))
                .unwrap();
        let store = MemoryStore::new().with_entry(DEFAULT_STORE_KEY, &stored);
        let repo = QuestionRepository::new(store, defaults());

        assert_eq!(ids(&repo.load()), vec!["1", "3", "11", "2"]);
    }

    #[test]
    fn stored_question_with_repeated_wrong_choices_loads() {
        let mut repeated = question(12, "Paris", false);
        repeated.choices = vec!["7".into(), "7".into(), "Paris".into()];
        let stored = serde_json::to_string(&QuestionSet::new(vec![repeated])).unwrap();
        let store = MemoryStore::new().with_entry(DEFAULT_STORE_KEY, &stored);
        let repo = QuestionRepository::new(store, defaults());

        assert_eq!(ids(&repo.load()), vec!["1", "3", "12", "2"]);
    }

    #[test]
    fn add_persists_only_additions() {
        let mut repo = QuestionRepository::new(MemoryStore::new(), defaults());
        let current = repo.load();

        let updated = repo.add(question(20, "Paris", false), &current);
        assert_eq!(ids(&updated), vec!["1", "3", "20", "2"]);

        let raw = repo.store().read(DEFAULT_STORE_KEY).unwrap().unwrap();
        let persisted: QuestionSet = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids(&persisted.questions), vec!["20"]);
    }

    #[test]
    fn add_then_reload_does_not_duplicate_defaults() {
        let mut repo = QuestionRepository::new(MemoryStore::new(), defaults());
        let current = repo.load();
        let updated = repo.add(question(20, "42", true), &current);

        assert_eq!(repo.load(), updated);
    }

    #[test]
    fn custom_key_is_respected() {
        let mut repo = QuestionRepository::new(MemoryStore::new(), defaults()).with_key("mine");
        repo.add(question(20, "7", false), &[]);

        assert!(repo.store().read("mine").unwrap().is_some());
        assert!(repo.store().read(DEFAULT_STORE_KEY).unwrap().is_none());
    }

    #[test]
    fn failed_write_still_returns_updated_list() {
        let mut repo = QuestionRepository::new(ReadOnlyStore, defaults());
        let current = repo.load();

        let updated = repo.add(question(30, "7", false), &current);
        assert!(updated.iter().any(|q| q.id == QuestionId::Number(30)));
        assert_eq!(repo.load().len(), 3);
    }
}
