mod data;
mod discipline;
mod goal;
mod study;

pub use data::DataCommands;
pub use discipline::DisciplineCommands;
pub use goal::GoalCommands;
pub use study::StudyCommands;
