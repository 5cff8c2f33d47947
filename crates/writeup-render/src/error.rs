//! Error type for table and report construction.

use thiserror::Error;

/// Precondition violations raised by the build/generate entry points.
///
/// Rendering itself never fails: malformed row shapes are recovered locally
/// (missing cells are padded, extra cells ignored) and arbitrary cell text is
/// escaped or passed through depending on format. The only errors in this
/// library are usage errors caught before any rendering happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// A table was built without any header columns.
    #[error("at least one header must be added")]
    MissingHeaders,

    /// A multi-renderer build was invoked with an empty renderer list.
    #[error("at least one renderer must be provided")]
    MissingRenderers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_violated_precondition() {
        assert_eq!(
            BuildError::MissingHeaders.to_string(),
            "at least one header must be added"
        );
        assert_eq!(
            BuildError::MissingRenderers.to_string(),
            "at least one renderer must be provided"
        );
    }
}
