//! Discipline repository: custom add/delete and topic listing.
//!
//! Built-in disciplines are read-only here. Names are unique across the
//! built-in and custom sets ignoring case, while lookups by name are exact.

use medstudy_core::entities::Discipline;
use medstudy_core::enums::TopicOption;
use medstudy_core::ids::DEFAULT_TOPIC;

use crate::error::StoreError;
use crate::helpers::split_topics;
use crate::kv::KeyValueStore;
use crate::service::StudyStore;

impl<S: KeyValueStore> StudyStore<S> {
    /// Add a user-defined discipline.
    ///
    /// `raw_topics_csv` is a comma-separated topic list; blank entries are
    /// dropped and an empty list becomes `["General"]`.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` if `name` is blank.
    /// - `StoreError::Duplicate` if the name is taken, ignoring case.
    /// - `StoreError::Persistence` if the document could not be saved.
    pub fn add_custom_discipline(
        &mut self,
        name: &str,
        raw_topics_csv: &str,
    ) -> Result<Discipline, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Validation(
                "discipline name must not be empty".into(),
            ));
        }
        if self.state().has_discipline_named(name) {
            return Err(StoreError::Duplicate {
                name: name.to_string(),
            });
        }

        let mut topics = split_topics(raw_topics_csv);
        if topics.is_empty() {
            topics.push(DEFAULT_TOPIC.to_string());
        }

        let discipline = Discipline {
            id: self.next_id(),
            name: name.to_string(),
            topics,
            is_custom: true,
        };

        let mut next = self.state().clone();
        next.custom_disciplines.push(discipline.clone());
        self.commit(next)?;

        tracing::debug!(id = discipline.id, name = %discipline.name, "custom discipline added");
        Ok(discipline)
    }

    /// Remove a custom discipline by ID.
    ///
    /// Study records naming the discipline are kept. An unknown ID changes
    /// nothing and is not an error; the document is still saved. Every custom
    /// discipline carrying the ID is removed and returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the document could not be saved.
    pub fn delete_custom_discipline(&mut self, id: i64) -> Result<Vec<Discipline>, StoreError> {
        let mut next = self.state().clone();
        let (removed, kept) = next
            .custom_disciplines
            .into_iter()
            .partition(|d| d.id == id);
        next.custom_disciplines = kept;
        self.commit(next)?;

        if removed.is_empty() {
            tracing::debug!(id, "no custom discipline with this id");
        } else {
            tracing::debug!(id, count = removed.len(), "custom discipline deleted");
        }
        Ok(removed)
    }

    /// Built-in disciplines followed by custom ones.
    #[must_use]
    pub fn list_all_disciplines(&self) -> Vec<&Discipline> {
        self.state().all_disciplines().collect()
    }

    /// User-defined disciplines in creation order.
    #[must_use]
    pub fn custom_disciplines(&self) -> &[Discipline] {
        &self.state().custom_disciplines
    }

    /// Exact-name lookup across built-in and custom disciplines.
    #[must_use]
    pub fn find_discipline(&self, name: &str) -> Option<&Discipline> {
        self.state().find_discipline(name)
    }

    /// Topic picker entries for a discipline.
    ///
    /// The discipline's topics in order, followed by
    /// [`TopicOption::EnterCustom`]. An empty or unknown name yields only the
    /// sentinel.
    #[must_use]
    pub fn list_topics_for_discipline(&self, name: &str) -> Vec<TopicOption> {
        let mut options: Vec<TopicOption> = if name.is_empty() {
            Vec::new()
        } else {
            self.find_discipline(name)
                .map(|d| d.topics.iter().map(TopicOption::listed).collect())
                .unwrap_or_default()
        };
        options.push(TopicOption::EnterCustom);
        options
    }
}
