use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// HTTP-facing settings. Database settings are read separately in
/// `database_config` because they are consumed before the server is built.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
