/// Errors from the outer layers: reading participants, writing results,
/// reading the command line.
///
/// The split calculation itself never fails, so nothing in here comes out of
/// `split::calculate`.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// CSV is malformed.
    #[error("malformed CSV: {0}")]
    Csv(String),

    /// A record was read, but its data is incorrect.
    #[error("invalid record: {0}")]
    Format(String),

    /// Reading or writing failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// The split strategy name isn't one we know.
    #[error("unknown split strategy `{0}`")]
    UnknownStrategy(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        "unknown split strategy `tip`",
        Error::UnknownStrategy("tip".to_string()).to_string()
    );
    assert_eq!(
        "invalid record: missing id",
        Error::Format("missing id".to_string()).to_string()
    );
}

#[test]
fn test_from_io_error() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    assert_eq!(Error::Io("no such file".to_string()), Error::from(err));
}
