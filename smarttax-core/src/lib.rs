pub mod calculations;
pub mod models;
pub mod schedules;

mod engine;

pub use engine::compute_tax;
pub use models::*;
