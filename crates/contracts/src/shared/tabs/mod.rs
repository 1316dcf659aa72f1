//! Tab groups: hover previews a tab, click shows its panel.

pub mod config;
pub mod controller;
pub mod error;
pub mod memory;

pub use config::TabsConfig;
pub use controller::{TabController, TabEvent, TabId, TabSurface};
pub use error::TabError;
pub use memory::MemoryTabs;
