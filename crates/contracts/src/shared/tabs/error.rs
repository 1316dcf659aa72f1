use thiserror::Error;

use super::controller::TabId;

/// Ошибки группы табов
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    #[error("no tab button is marked as default")]
    NoDefaultTab,

    #[error("tab {tab} has no target attribute")]
    MissingTarget { tab: TabId },

    #[error("no panel matches tab target `{target}`")]
    PanelNotFound { target: String },

    #[error("tab {tab} does not belong to this group")]
    UnknownTab { tab: TabId },

    #[error("no tab button targets `{target}`")]
    NotFound { target: String },

    #[error("tab group is handling another event")]
    Busy,

    #[error("invalid tab group config: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),
}
