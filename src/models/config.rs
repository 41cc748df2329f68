//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::models::directory::DirectoryConfig;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its collaborators.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob of Tera message templates, e.g. `templates/**/*.txt`.
    pub templates_dir: String,
    /// Endpoint the notifier PUB socket connects to.
    pub zmq_notifier_pub: String,
    #[serde(default)]
    pub directory: DirectoryConfig,
}
