use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The rejected value
        value: String,
    },

    /// Event template catalog file could not be read.
    #[error("Failed to read event template catalog at '{path}': {source}")]
    TemplateFile {
        /// Path of the catalog file
        path: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Event template catalog is not valid JSON or does not match the template schema.
    #[error("Failed to parse event template catalog: {0}")]
    TemplateParse(#[from] serde_json::Error),

    /// Event template catalog parsed but failed validation.
    #[error("Invalid event template '{template_id}': {reason}")]
    InvalidTemplate {
        /// Id of the offending template
        template_id: String,
        /// Why the template was rejected
        reason: String,
    },
}
