//! Entity structs for all MedStudy domain objects.
//!
//! Together they form the single JSON document persisted under
//! [`crate::ids::STORAGE_KEY`]. Field names on the wire keep the shape of the
//! stored document (`nome`, `assuntos`, `disciplina`, ...) through serde
//! renames, so existing data loads unchanged.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod discipline;
mod settings;
mod state;
mod study_record;

pub use discipline::Discipline;
pub use settings::Settings;
pub use state::AppState;
pub use study_record::StudyRecord;
