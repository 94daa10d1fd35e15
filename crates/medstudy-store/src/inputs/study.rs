//! Study record input builder.

use medstudy_core::enums::TopicChoice;
use serde::Serialize;

/// Form values for a new study record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewStudyRecord {
    pub discipline_name: String,
    pub topic: TopicChoice,
    pub total_questions: String,
    pub correct_answers: String,
    pub date: String,
    pub duration_minutes: String,
    pub notes: String,
}

pub struct NewStudyRecordBuilder(NewStudyRecord);

impl NewStudyRecordBuilder {
    /// Start a record for `discipline_name` with every other field blank.
    #[must_use]
    pub fn new(discipline_name: impl Into<String>, topic: TopicChoice) -> Self {
        Self(NewStudyRecord {
            discipline_name: discipline_name.into(),
            topic,
            total_questions: String::new(),
            correct_answers: String::new(),
            date: String::new(),
            duration_minutes: String::new(),
            notes: String::new(),
        })
    }

    #[must_use]
    pub fn total_questions(mut self, raw: impl Into<String>) -> Self {
        self.0.total_questions = raw.into();
        self
    }

    #[must_use]
    pub fn correct_answers(mut self, raw: impl Into<String>) -> Self {
        self.0.correct_answers = raw.into();
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.0.date = date.into();
        self
    }

    #[must_use]
    pub fn duration_minutes(mut self, raw: impl Into<String>) -> Self {
        self.0.duration_minutes = raw.into();
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.0.notes = notes.into();
        self
    }

    #[must_use]
    pub fn build(self) -> NewStudyRecord {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_fields() {
        let input = NewStudyRecordBuilder::new("Anatomy", TopicChoice::Listed("Bones".into()))
            .total_questions("30")
            .correct_answers("24")
            .date("2026-05-10")
            .duration_minutes("50")
            .notes("upper limb")
            .build();

        assert_eq!(input.discipline_name, "Anatomy");
        assert_eq!(input.topic, TopicChoice::Listed("Bones".into()));
        assert_eq!(input.total_questions, "30");
        assert_eq!(input.correct_answers, "24");
        assert_eq!(input.date, "2026-05-10");
        assert_eq!(input.duration_minutes, "50");
        assert_eq!(input.notes, "upper limb");
    }

    #[test]
    fn unset_fields_are_blank() {
        let input = NewStudyRecordBuilder::new("Anatomy", TopicChoice::Other(String::new())).build();
        assert!(input.total_questions.is_empty());
        assert!(input.notes.is_empty());
    }
}
