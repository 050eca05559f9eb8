use std::path::PathBuf;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the API routes hang off, e.g. `http://localhost:4000/api`.
    pub api_url: String,
    /// Directory backing the profile's `FileStore`.
    pub profile_dir: PathBuf,
    pub rust_log: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ClientConfig {
            api_url: lookup("RESUME_API_URL")
                .unwrap_or_else(|| "http://localhost:4000/api".to_string()),
            profile_dir: lookup("RESUME_PROFILE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".resume-profile")),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        }
    }
}
