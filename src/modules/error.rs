use thiserror::Error;

/// Errors raised by a module while checking its parameters
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Missing required argument: {arg}")]
    MissingRequiredArg { arg: String },

    #[error("Invalid argument value: {arg} = {value} - {reason}")]
    InvalidArgValue {
        arg: String,
        value: String,
        reason: String,
    },

    #[error("Arguments are mutually exclusive: {first} and {second}")]
    MutuallyExclusive { first: String, second: String },
}

impl ValidationError {
    pub fn missing(arg: impl Into<String>) -> Self {
        ValidationError::MissingRequiredArg { arg: arg.into() }
    }

    pub fn invalid(
        arg: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidArgValue {
            arg: arg.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a module while executing a rule
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("I/O error during {operation} on {path}: {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` exited with {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Module execution failed: {message}")]
    ExecutionFailed { message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ModuleError {
    pub fn io(
        operation: impl Into<String>,
        path: impl AsRef<std::path::Path>,
        source: std::io::Error,
    ) -> Self {
        ModuleError::Io {
            operation: operation.into(),
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<shell_words::ParseError> for ValidationError {
    fn from(err: shell_words::ParseError) -> Self {
        ValidationError::InvalidArgValue {
            arg: "command".to_string(),
            value: "<unparsable>".to_string(),
            reason: err.to_string(),
        }
    }
}
