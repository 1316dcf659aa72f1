pub mod tabs;

pub use tabs::{use_tabs, TabButton, TabPanel, TabsContext, TabsProvider};
