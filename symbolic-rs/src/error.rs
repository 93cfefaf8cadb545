use std::{fmt, io};
use symbolic_error::Error as SourceError;

/// Utility enum to package errors that can occur while parsing / simplifying.
#[derive(Debug)]
pub enum Error {
    /// No expression could be parsed from the input. Contains every error and warning produced
    /// while trying.
    Parse(Vec<SourceError>),

    /// A rewrite rule failed, for example by dividing by zero.
    Compute(SourceError),
}

impl Error {
    /// Returns the individual errors packaged in this [`Error`].
    pub fn errors(&self) -> &[SourceError] {
        match self {
            Self::Parse(errs) => errs,
            Self::Compute(err) => std::slice::from_ref(err),
        }
    }

    /// Writes the reports of the errors in this [`Error`] to the given writer.
    pub fn write_report(&self, src_id: &str, input: &str, mut w: impl io::Write) -> io::Result<()> {
        for err in self.errors() {
            err.write_report(src_id, input, &mut w)?;
        }
        Ok(())
    }

    /// Reports the errors in this [`Error`] to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        for err in self.errors() {
            err.report_to_stderr(src_id, input)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(errs) => {
                let messages = errs.iter()
                    .map(SourceError::message)
                    .collect::<Vec<_>>();
                write!(f, "could not parse the expression: {}", messages.join("; "))
            },
            Self::Compute(err) => write!(f, "could not simplify the expression: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<Vec<SourceError>> for Error {
    fn from(errs: Vec<SourceError>) -> Self {
        Self::Parse(errs)
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Self::Compute(err)
    }
}
