//! Study record repository: append and history listing.
//!
//! The study log is append-only. Records name their discipline by string and
//! are kept even when that discipline is later deleted.

use medstudy_core::entities::StudyRecord;

use crate::error::StoreError;
use crate::helpers::coerce_count;
use crate::inputs::study::NewStudyRecord;
use crate::kv::KeyValueStore;
use crate::service::StudyStore;

impl<S: KeyValueStore> StudyStore<S> {
    /// Append a study record built from raw form values.
    ///
    /// Counts are read leniently (`"12abc"` is 12); anything unparseable or
    /// negative becomes 0. `correct_answers` is not checked against
    /// `total_questions`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Persistence` if the document could not be saved.
    pub fn add_study_record(&mut self, input: NewStudyRecord) -> Result<StudyRecord, StoreError> {
        let record = StudyRecord {
            id: self.next_id(),
            discipline_name: input.discipline_name,
            topic: input.topic.resolve(),
            total_questions: coerce_count(&input.total_questions),
            correct_answers: coerce_count(&input.correct_answers),
            date: input.date,
            duration_minutes: coerce_count(&input.duration_minutes),
            notes: input.notes,
        };

        let mut next = self.state().clone();
        next.studies.push(record.clone());
        self.commit(next)?;

        tracing::debug!(
            id = record.id,
            discipline = %record.discipline_name,
            topic = %record.topic,
            "study record added"
        );
        Ok(record)
    }

    /// All study records in the order they were logged.
    #[must_use]
    pub fn studies(&self) -> &[StudyRecord] {
        &self.state().studies
    }

    /// Study records for one discipline, by exact name. An empty name returns
    /// every record.
    #[must_use]
    pub fn studies_for_discipline(&self, name: &str) -> Vec<&StudyRecord> {
        self.state()
            .studies
            .iter()
            .filter(|s| name.is_empty() || s.discipline_name == name)
            .collect()
    }
}
