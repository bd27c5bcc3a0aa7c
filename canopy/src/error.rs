use std::panic::Location;

use crate::UnknownAxis;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed or degenerate input (e.g. an empty triangle list)
    #[error("bad value: {0}")]
    BadValue(String),

    /// A missing prerequisite (e.g. building a light tree out of no lights)
    #[error("not initialized: {0}")]
    NotInitialized(String),

    /// An index or a count outside of the allowed range
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl Error {
    pub fn bad_value(msg: impl Into<String>) -> Self {
        Error::BadValue(msg.into())
    }

    pub fn not_initialized(msg: impl Into<String>) -> Self {
        Error::NotInitialized(msg.into())
    }

    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }
}

impl From<UnknownAxis> for Error {
    fn from(UnknownAxis(axis): UnknownAxis) -> Self {
        Error::bad_value(format!("unknown axis: {axis}"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Aborts the current operation; the error is handed back to the caller
    Fatal,

    /// Logged only; the operation continues with a best-effort default
    Warning,
}

/// Routes an error according to its severity; every error raised by this
/// crate goes through here.
///
/// Fatal errors are logged and come back as `Err`, warnings are logged and
/// swallowed into `Ok` with the default value.
#[track_caller]
pub fn handle<T>(error: Error, severity: Severity) -> Result<T>
where
    T: Default,
{
    let location = Location::caller();

    match severity {
        Severity::Fatal => {
            log::error!(
                "Error triggered in {}:{}: {error}",
                location.file(),
                location.line()
            );

            Err(error)
        }

        Severity::Warning => {
            log::warn!(
                "Warning triggered in {}:{}: {error}; continuing",
                location.file(),
                location.line()
            );

            Ok(T::default())
        }
    }
}

/// Shorthand for [`handle()`] with [`Severity::Fatal`], returning the error
/// ready for `Err(...)`.
#[track_caller]
pub fn fatal(error: Error) -> Error {
    match handle::<()>(error, Severity::Fatal) {
        Err(error) => error,
        Ok(()) => unreachable!(),
    }
}

/// Shorthand for [`handle()`] with [`Severity::Warning`], returning the
/// best-effort default.
#[track_caller]
pub fn warning<T>(error: Error) -> T
where
    T: Default,
{
    handle(error, Severity::Warning).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_fatal() {
        let actual = handle::<u32>(Error::bad_value("nope"), Severity::Fatal);

        assert_eq!(Err(Error::BadValue("nope".into())), actual);
    }

    #[test]
    fn handle_warning() {
        let actual = handle::<Option<u32>>(
            Error::out_of_range("too many"),
            Severity::Warning,
        );

        assert_eq!(Ok(None), actual);
    }

    #[test]
    fn shorthands_match_handle() {
        let error = Error::not_initialized("no lights");

        assert_eq!(
            handle::<()>(error.clone(), Severity::Fatal),
            Err(fatal(error.clone()))
        );

        assert_eq!(
            handle::<Option<u32>>(error.clone(), Severity::Warning),
            Ok(warning::<Option<u32>>(error))
        );
    }

    #[test]
    fn unknown_axis() {
        let actual: Result<crate::Axis> =
            crate::Axis::try_from(7).map_err(Into::into);

        assert_eq!(Err(Error::BadValue("unknown axis: 7".into())), actual);
    }

    #[test]
    fn display() {
        assert_eq!(
            "not initialized: no lights",
            Error::not_initialized("no lights").to_string()
        );
    }
}
