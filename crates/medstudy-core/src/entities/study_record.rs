use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single logged study session.
///
/// `discipline_name` is a weak reference: it names a discipline but nothing
/// keeps the two in sync, and a record outlives the discipline it names.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyRecord {
    pub id: i64,
    #[serde(rename = "disciplina")]
    pub discipline_name: String,
    #[serde(rename = "topico")]
    pub topic: String,
    #[serde(rename = "totalQuestoes")]
    pub total_questions: u32,
    #[serde(rename = "questoesCorretas")]
    pub correct_answers: u32,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(rename = "tempo")]
    pub duration_minutes: u32,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}
