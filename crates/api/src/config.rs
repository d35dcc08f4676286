/// Default folder for hero carousel uploads and listings.
pub const DEFAULT_MEDIA_FOLDER: &str = "automotive-carcare/hero-images";

/// The single static admin credential. Compared in plain text.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// Mail and media credentials are loaded by their own crates.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public site base URL used in email links.
    pub site_url: String,
    /// Support phone shown in email footers.
    pub support_phone: String,
    /// Folder used when upload/listing requests name none.
    pub media_default_folder: String,
    /// `None` disables admin login.
    pub admin: Option<AdminCredentials>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                          |
    /// |------------------------|----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                        |
    /// | `PORT`                 | `3000`                           |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                             |
    /// | `SITE_URL`             | `http://localhost:3000`          |
    /// | `SUPPORT_PHONE`        | `+91 00000 00000`                |
    /// | `MEDIA_DEFAULT_FOLDER` | `automotive-carcare/hero-images` |
    /// | `ADMIN_USERNAME`       | unset (login disabled)           |
    /// | `ADMIN_PASSWORD`       | unset (login disabled)           |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string();

        let support_phone =
            std::env::var("SUPPORT_PHONE").unwrap_or_else(|_| "+91 00000 00000".into());

        let media_default_folder = std::env::var("MEDIA_DEFAULT_FOLDER")
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MEDIA_FOLDER.into());

        let admin = match (
            std::env::var("ADMIN_USERNAME").ok().filter(|u| !u.is_empty()),
            std::env::var("ADMIN_PASSWORD").ok().filter(|p| !p.is_empty()),
        ) {
            (Some(username), Some(password)) => Some(AdminCredentials { username, password }),
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            site_url,
            support_phone,
            media_default_folder,
            admin,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
