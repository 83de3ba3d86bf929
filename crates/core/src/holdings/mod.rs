pub mod holdings_model;
pub mod holdings_traits;

pub use holdings_model::Holding;
pub use holdings_traits::HoldingRepositoryTrait;
