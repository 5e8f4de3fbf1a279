//! Shared configuration structures.

/// SSL mode used when none is configured.
pub const DEFAULT_SSL_MODE: &str = "require";

/// Seconds to wait for the server before giving up on a connection.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Database connection settings.
///
/// Built once at startup and handed explicitly to whatever needs to connect.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    password: String,
    pub host: String,
    pub name: String,
    pub ssl_mode: String,
    pub connect_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("host", &self.host)
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            host: host.into(),
            name: name.into(),
            ssl_mode: DEFAULT_SSL_MODE.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Override how long connecting may take.
    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Override the `sslmode` query parameter.
    pub fn with_ssl_mode(mut self, ssl_mode: impl Into<String>) -> Self {
        self.ssl_mode = ssl_mode.into();
        self
    }

    /// Build the PostgreSQL connection URL.
    pub fn connection_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}/{}?sslmode={}",
            self.user, self.password, self.host, self.name, self.ssl_mode
        )
    }
}
