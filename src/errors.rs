//
// Errors
//
use std::io;
use std::result;
use std::error;
use std::fmt;
use csv;

/// Type alias for wordmetrics errors
pub type Result<X> = result::Result<X, Error>;

/// Wrapper for every kind of error occuring while loading resources or analysing a document
///
/// The first group is fatal for a run. The last three only ever describe one document, and the
/// batch driver turns them into skipped rows instead of returning them.
#[derive(Debug)]
pub enum Error {
    IOError(io::Error),
    CsvError(csv::Error),
    MissingFile(String, Option<io::Error>),
    MissingColumn(String),
    Other(String),
    /// The article text could not be found or read
    MissingText,
    /// Tokenizing produced no sentence at all
    NoSentences,
    /// Every word was a stop word
    NoContentWords,
}

impl Error {
    /// Whether this error only concerns a single document
    pub fn is_per_document(&self) -> bool {
        match *self {
            Error::MissingText
            | Error::NoSentences
            | Error::NoContentWords => true,
            _ => false,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::IOError(ref err) => write!(f, "IO error: {}", err),
            Error::CsvError(ref err) => write!(f, "Table error: {}", err),
            Error::MissingFile(ref info, ref opt_err) => {
                write!(f,
                    "The {} must already exist at this point but there was a problem opening it. \
                    Wrong directory? The OS error was: ",
                    info)?;
                if let Some(ref err) = *opt_err { err.fmt(f) }
                else { write!(f, "Unknown") }
            },
            Error::MissingColumn(ref name) => write!(f, "The input table has no {} column", name),
            Error::Other(ref info) => write!(f, "{}", info),
            Error::MissingText => write!(f, "article text not found"),
            Error::NoSentences => write!(f, "no sentences, average sentence length is undefined"),
            Error::NoContentWords => {
                write!(f, "only stop words, percentage of complex words is undefined")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(error::Error + 'static)> {
        match *self {
            Error::IOError(ref err) => Some(err),
            Error::CsvError(ref err) => Some(err),
            Error::MissingFile(_, Some(ref err)) => Some(err),
            _ => None,
        }
    }
}
//
// Convert everything else into Error
//
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::IOError(err)
    }
}
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::CsvError(err)
    }
}

//
// Convert Error into a general io Error
//
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}
