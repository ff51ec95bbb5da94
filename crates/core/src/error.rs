use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Argument `{}` is required.", _0)]
    ArgumentRequired(String),

    #[error("Option `{}` is required.", _0)]
    OptionRequired(String),

    #[error("Excess input: `{}`.", .0.join("`, `"))]
    ExcessInput(Vec<String>),

    #[error("{}", .reason)]
    Custom { identifier: String, reason: String },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("For a color, only one of `rgb`, `ansi` or `name` should be defined.")]
    MultipleColorTypes,

    #[error("Unknown color name: \"{}\"", _0)]
    UnknownColorName(String),

    #[error("Logger was already installed: {}", _0)]
    LoggerInstall(log::SetLoggerError),
}

impl Error {
    /// Creates a host-defined error with its own identifier.
    ///
    /// The identifier is for programmatic branching; the reason is what
    /// gets rendered to the user.
    pub fn custom(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Custom {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    /// Stable identifier for programmatic branching and tests.
    ///
    /// User-visible rendering goes through `Display` instead.
    pub fn identifier(&self) -> &str {
        match self {
            Self::ArgumentRequired(_) => "argumentRequired",
            Self::OptionRequired(_) => "optionRequired",
            Self::ExcessInput(_) => "excessInput",
            Self::Custom { identifier, .. } => identifier,
            Self::Stdio(_) => "stdio",
            Self::Io { .. } => "io",
            Self::Yaml { .. } => "yaml",
            Self::MultipleColorTypes => "multipleColorTypes",
            Self::UnknownColorName(_) => "unknownColorName",
            Self::LoggerInstall(_) => "loggerInstall",
        }
    }
}
