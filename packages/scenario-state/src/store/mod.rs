//! In-memory stores implementing both ports.

pub mod campaign;
pub mod memory;

pub use campaign::{CampaignScenarioStore, ScenarioSlot};
pub use memory::MemoryScenarioStore;
