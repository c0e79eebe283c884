//! Real-time message-layer backend selector.
//!
//! Defaults to the in-process layer, which is single-node and loses
//! messages on restart. Switching a deployment to a broker is a matter of
//! writing the Redis variant here; nothing else consults the backend kind.

use serde::{Deserialize, Serialize};

/// Channel layer backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum ChannelLayer {
    /// In-process layer, non-persistent.
    InMemory,
    /// External Redis broker.
    Redis {
        /// Broker host URLs.
        hosts: Vec<String>,
    },
}

impl Default for ChannelLayer {
    fn default() -> Self {
        Self::InMemory
    }
}

impl ChannelLayer {
    /// Short backend label for logs.
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::InMemory => "in-memory",
            Self::Redis { .. } => "redis",
        }
    }
}
