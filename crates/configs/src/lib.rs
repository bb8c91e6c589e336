use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

/// Origins served by the admin panel and the public site.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = [
    "https://cocoadminpanel.onrender.com",
    "https://cocofrontend.onrender.com",
];

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    /// Upper bound for a single store call made by a request handler.
    #[serde(default = "default_operation_timeout")]
    pub operation_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            operation_timeout_secs: default_operation_timeout(),
            sqlx_logging: false,
            run_migrations: true,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_operation_timeout() -> u64 { 10 }
fn default_true() -> bool { true }

/// Outgoing mail settings. With `enabled = false` notifications are only logged.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_mail_host")]
    pub host: String,
    #[serde(default = "default_mail_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_mail_from")]
    pub from: String,
    #[serde(default = "default_mail_timeout")]
    pub timeout_secs: u64,
    /// `background` or `inline`
    #[serde(default = "default_dispatch")]
    pub dispatch: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            host: default_mail_host(),
            port: default_mail_port(),
            username: String::new(),
            password: String::new(),
            from: default_mail_from(),
            timeout_secs: default_mail_timeout(),
            dispatch: default_dispatch(),
        }
    }
}

fn default_mail_host() -> String { "smtp.gmail.com".into() }
fn default_mail_port() -> u16 { 587 }
fn default_mail_from() -> String { "no-reply@cocoloco.example".into() }
fn default_mail_timeout() -> u64 { 10 }
fn default_dispatch() -> String { "background".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { allowed_origins: default_allowed_origins() }
    }
}

fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `compact` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { format: default_log_format() }
    }
}

fn default_log_format() -> String { "compact".into() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Like `load_and_validate`, but a missing config file falls back to
    /// defaults filled from the environment.
    pub fn load_or_env() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::from_env(),
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.mail.normalize_from_env();
        self.mail.validate()?;
        self.cors.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .map(|io| io.kind() == std::io::ErrorKind::NotFound)
        .unwrap_or(false)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Build from `DATABASE_URL` alone, keeping the remaining defaults.
    pub fn from_env() -> Self {
        let mut cfg = DatabaseConfig::default();
        cfg.normalize_from_env();
        cfg
    }

    /// The `[database]` section of the default config file.
    pub fn from_file() -> Result<Self> {
        let mut cfg = load_default()?.database;
        cfg.normalize_from_env();
        Ok(cfg)
    }

    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 || self.operation_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl MailConfig {
    pub fn normalize_from_env(&mut self) {
        if self.username.is_empty() {
            if let Ok(u) = std::env::var("MAIL_USERNAME") {
                self.username = u;
            }
        }
        if self.password.is_empty() {
            if let Ok(p) = std::env::var("MAIL_PASSWORD") {
                self.password = p;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.dispatch.trim().to_ascii_lowercase().as_str(), "background" | "inline") {
            return Err(anyhow!("mail.dispatch must be `background` or `inline`"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("mail.timeout_secs must be positive"));
        }
        if self.enabled {
            if self.host.trim().is_empty() {
                return Err(anyhow!("mail.host is required when mail is enabled"));
            }
            if !self.from.contains('@') {
                return Err(anyhow!("mail.from must be an email address"));
            }
        }
        Ok(())
    }
}

impl CorsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.allowed_origins.is_empty() {
            return Err(anyhow!("cors.allowed_origins must list at least one origin"));
        }
        if let Some(bad) = self
            .allowed_origins
            .iter()
            .find(|o| !(o.starts_with("http://") || o.starts_with("https://")))
        {
            return Err(anyhow!("cors origin `{bad}` must start with http(s)://"));
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        match self.format.to_ascii_lowercase().as_str() {
            "compact" | "json" => Ok(()),
            other => Err(anyhow!("logging.format `{other}` is not one of compact|json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://u:p@localhost:5432/cocoloco".into();
        cfg
    }

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.operation_timeout_secs, 10);
        assert!(cfg.database.run_migrations);
        assert!(!cfg.mail.enabled);
        assert_eq!(cfg.mail.dispatch, "background");
        assert_eq!(cfg.cors.allowed_origins, DEFAULT_ALLOWED_ORIGINS.to_vec());
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000

            [database]
            url = "postgres://localhost/coco"
            operation_timeout_secs = 3

            [mail]
            enabled = true
            from = "desk@cocoloco.example"
            dispatch = "inline"

            [cors]
            allowed_origins = ["http://localhost:5173"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.database.operation_timeout_secs, 3);
        assert_eq!(cfg.database.max_connections, 10);
        assert!(cfg.mail.enabled);
        assert_eq!(cfg.mail.port, 587);
        assert_eq!(cfg.mail.dispatch, "inline");
        assert_eq!(cfg.cors.allowed_origins, vec!["http://localhost:5173".to_string()]);
    }

    #[test]
    fn validate_accepts_defaults_with_url() {
        let mut cfg = valid();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn validate_rejects_non_postgres_url() {
        let mut cfg = valid();
        cfg.database.url = "mysql://localhost/coco".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn partial_sections_keep_field_defaults() {
        let cfg = parse("[server]\nport = 9000\n\n[mail]\nport = 2525\n").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, None);
        assert_eq!(cfg.mail.host, "smtp.gmail.com");
        assert_eq!(cfg.mail.port, 2525);

        let cfg = parse("[server]\nhost = \"0.0.0.0\"\n").unwrap();
        assert_eq!(cfg.server.port, 8080);
    }

    #[test]
    fn dispatch_mode_is_case_insensitive() {
        let mut cfg = valid();
        cfg.mail.dispatch = "Inline".into();
        cfg.normalize_and_validate().unwrap();
        cfg.mail.dispatch = " BACKGROUND ".into();
        cfg.normalize_and_validate().unwrap();
    }

    #[test]
    fn validate_rejects_unknown_dispatch_mode() {
        let mut cfg = valid();
        cfg.mail.dispatch = "eventually".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn validate_rejects_enabled_mail_without_sender() {
        let mut cfg = valid();
        cfg.mail.enabled = true;
        cfg.mail.from = "nobody".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_origins() {
        let mut cfg = valid();
        cfg.cors.allowed_origins = vec![];
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = valid();
        cfg.cors.allowed_origins = vec!["cocofrontend.onrender.com".into()];
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_operation_timeout() {
        let mut cfg = valid();
        cfg.database.operation_timeout_secs = 0;
        assert!(cfg.normalize_and_validate().is_err());
    }
}
