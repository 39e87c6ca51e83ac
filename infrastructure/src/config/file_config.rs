//! Configuration file schema (`toolgate.toml`)
//!
//! Example:
//!
//! ```toml
//! [approval]
//! policy = "auto-edit"
//!
//! [command]
//! working_dir = "/srv/project"
//!
//! [http]
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use toolgate_domain::TrustPolicy;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub approval: ApprovalConfig,
    pub command: CommandConfig,
    pub http: HttpConfig,
}

/// `[approval]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// Trust policy for the session; defaults to interactive
    pub policy: TrustPolicy,
}

/// `[command]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Working directory injected into run_command when the call omits `cwd`
    pub working_dir: Option<String>,
}

/// `[http]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout for http_request, in seconds
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}
