use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub documents: DocumentApiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 7070,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentApiSettings {
    /// Which client implementation to construct at startup.
    pub mode: ClientMode,
    /// Base URL of the document API, e.g. `http://localhost:8080`.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for DocumentApiSettings {
    fn default() -> Self {
        Self {
            mode: ClientMode::Remote,
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// `remote` calls the document API; `mock` serves canned development data.
///
/// The choice is made once, at construction. A remote client never falls back
/// to mock data — upstream failures are surfaced instead.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientMode {
    Remote,
    Mock,
}

impl std::fmt::Display for ClientMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientMode::Remote => f.write_str("remote"),
            ClientMode::Mock => f.write_str("mock"),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Works both from the workspace root and from inside the crate directory.
    let configuration_directory = if base_path.ends_with("lex-dashboard") {
        base_path.join("config")
    } else {
        base_path.join("lex-dashboard").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
