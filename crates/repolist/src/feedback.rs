/// Diagnostic produced while building a wordlist.
///
/// Library code hands these back instead of printing, so the binary decides
/// where each one goes (stdout, with info only shown in verbose mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Progress detail, only shown in verbose mode.
    Info(String),
    /// The run continues but the output may not be what the user expects.
    Warning(String),
    /// The run is about to fail.
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_info(&self) -> bool {
        matches!(self, Self::Info(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }

    /// Bracketed tag printed in front of the message.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Info(_) => "[INFO]",
            Self::Warning(_) => "[WARN]",
            Self::Error(_) => "[ERROR]",
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tag(), self.message())
    }
}
