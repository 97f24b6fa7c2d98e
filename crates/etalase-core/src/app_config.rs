use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub jsonbin_bin_id: String,
    pub jsonbin_api_key: String,
    pub jsonbin_base_url: String,
    pub upstream_timeout_secs: u64,
    pub cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("jsonbin_bin_id", &"[redacted]")
            .field("jsonbin_api_key", &"[redacted]")
            .field("jsonbin_base_url", &self.jsonbin_base_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}
