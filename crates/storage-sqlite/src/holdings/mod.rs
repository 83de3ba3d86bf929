pub mod model;
pub mod repository;

pub use model::{HoldingRecord, NewHoldingRecord};
pub use repository::HoldingRepository;
