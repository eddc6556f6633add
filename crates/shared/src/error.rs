use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("config file '{path}' is not valid TOML: {message}")]
    InvalidConfig { path: String, message: String },
    #[error("unrecognized event token '{token}' in script")]
    UnknownScriptToken { token: String },
    #[error("invalid viewport width '{raw}' in script token")]
    InvalidScriptWidth { raw: String },
}

impl ShowcaseError {
    pub fn invalid_config(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}
