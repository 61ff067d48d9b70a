use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Invalid input: {message}")]
    Input { message: String },

    #[error("{stage} lookup failed: {message}")]
    Resolution {
        stage: &'static str,
        message: String,
    },

    #[error("{system} calculation failed: {message}")]
    Computation {
        system: &'static str,
        message: String,
    },

    #[error("Configuration error in {field}: {reason}")]
    Config { field: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BlueprintError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    pub fn resolution(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Resolution {
            stage,
            message: message.into(),
        }
    }

    pub fn computation(system: &'static str, message: impl Into<String>) -> Self {
        Self::Computation {
            system,
            message: message.into(),
        }
    }

    /// Machine-readable error kind, stable for callers that dispatch on it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Input { .. } => "input",
            Self::Resolution { .. } | Self::Http(_) => "resolution",
            Self::Computation { .. } => "computation",
            Self::Config { .. } => "config",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }

    /// Process exit code for the CLI: input problems are the caller's
    /// fault (2), lookup failures are environmental (3), the rest is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Input { .. } | Self::Config { .. } => 2,
            Self::Resolution { .. } | Self::Http(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
