pub mod data;
pub mod discipline;
pub mod dispatch;
pub mod goal;
pub mod schema;
pub mod shared;
pub mod study;
