pub mod engine_state;
pub mod item_state;
pub mod item_visit;
pub mod list_stability;
pub mod scored_item;

pub use engine_state::EngineState;
pub use item_state::ItemState;
pub use item_visit::ItemVisit;
pub use list_stability::{ListStability, StabilityParams};
pub use scored_item::ScoredItem;
