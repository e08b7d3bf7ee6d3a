use std::io;
use std::path::PathBuf;

use quick_xml::de::DeError;
use quick_xml::se::SeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("base file path undefined")]
    InvalidPath,
    #[error("cannot open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not a valid profile")]
    Parse {
        path: PathBuf,
        #[source]
        source: DeError,
    },
    /// Field name is not of the form `Object.Field`
    #[error("malformed field name {field:?}, expected `Object.Field`")]
    MalformedFieldName { field: String },
    #[error("destination directory of {path:?} does not exist")]
    InvalidDestination { path: PathBuf },
    #[error("cannot serialize profile")]
    Serialize(#[from] SeError),
    #[error("cannot write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
