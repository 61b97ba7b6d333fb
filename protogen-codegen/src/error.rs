use std::path::PathBuf;

use miette::Diagnostic;
use protogen_schema::ScalarKind;
use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating code or maintaining the registry.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// The schema tree cannot be generated as given.
    #[error("{node}: {message}")]
    #[diagnostic(code(protogen::schema))]
    Schema { node: String, message: String },

    /// The reduction stack was driven into a state the engine never expects.
    #[error("reduction protocol violated: {message}")]
    #[diagnostic(
        code(protogen::reduction),
        help("this is a defect in the generator, not in the schema")
    )]
    ReductionProtocol { message: String },

    /// A default value needs a scalar kind that has no literal conversion.
    #[error("no literal conversion for scalar kind '{kind}'")]
    #[diagnostic(code(protogen::unsupported_value))]
    UnsupportedValue { kind: ScalarKind },

    /// The registry file could not be read or parsed.
    #[error("failed to load registry '{path}'")]
    #[diagnostic(code(protogen::registry_io))]
    RegistryIo {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A filesystem operation on generated output failed.
    #[error("failed to {action} '{path}'")]
    #[diagnostic(code(protogen::filesystem))]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn schema(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            node: node.into(),
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ReductionProtocol {
            message: message.into(),
        }
    }

    pub(crate) fn fs(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }
}
