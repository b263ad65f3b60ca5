#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    MissingApiKey,
    Transport(String),
    Api { status: u16, body: String },
    InvalidResponse(String),
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::MissingApiKey => {
                write!(f, "GEMINI_API_KEY is not set")
            }
            GeneratorError::Transport(msg) => {
                write!(f, "Request failed: {}", msg)
            }
            GeneratorError::Api { status, body } => {
                write!(f, "API returned HTTP {}: {}", status, body)
            }
            GeneratorError::InvalidResponse(msg) => {
                write!(f, "Unreadable API response: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeneratorError {}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
