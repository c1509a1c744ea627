/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of verification errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// Resource not found (e.g. bucket does not exist)
    NotFound,

    /// The caller is not allowed to read the requested resource
    AccessDenied,

    /// Any other error returned by Amazon S3
    ServiceError,

    /// Some kind of internal runtime issue (e.g. task failure)
    RuntimeError,
}

impl Error {
    /// Creates a new verifier [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::AccessDenied => write!(f, "access denied"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// Map an Amazon S3 error code onto an [`ErrorKind`]
pub(crate) fn kind_from_code(code: Option<&str>) -> ErrorKind {
    match code {
        Some("NotFound" | "NoSuchBucket") => ErrorKind::NotFound,
        Some("AccessDenied" | "Forbidden" | "AllAccessDisabled") => ErrorKind::AccessDenied,
        _ => ErrorKind::ServiceError,
    }
}

impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let kind = kind_from_code(value.code());
        Error::new(kind, value)
    }
}

#[cfg(test)]
mod tests {
    use super::{kind_from_code, ErrorKind};

    #[test]
    fn test_kind_from_code() {
        assert_eq!(ErrorKind::NotFound, kind_from_code(Some("NoSuchBucket")));
        assert_eq!(ErrorKind::NotFound, kind_from_code(Some("NotFound")));
        assert_eq!(ErrorKind::AccessDenied, kind_from_code(Some("AccessDenied")));
        assert_eq!(ErrorKind::ServiceError, kind_from_code(Some("SlowDown")));
        assert_eq!(ErrorKind::ServiceError, kind_from_code(None));
    }

    #[test]
    fn test_display_uses_kind() {
        let err = super::invalid_input("bucket is required");
        assert_eq!("invalid input", err.to_string());
        assert_eq!(&ErrorKind::InputInvalid, err.kind());
    }
}
