use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::{error::ProfileError, profile::Profile};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const ROOT_TAG: &str = "Profile";

pub fn to_xml(profile: &Profile) -> Result<String, ProfileError> {
    let mut body = String::new();
    let mut serializer = quick_xml::se::Serializer::with_root(&mut body, Some(ROOT_TAG))?;
    serializer.indent(' ', 4);
    profile.serialize(serializer)?;

    Ok(format!("{XML_DECLARATION}\n{}\n", body.trim()))
}

/// Write `profile` to `destination`, returning the number of bytes written.
/// The destination directory must already exist.
pub fn write(profile: &Profile, destination: &Path) -> Result<usize, ProfileError> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(ProfileError::InvalidDestination {
            path: destination.to_owned(),
        });
    }

    let xml = to_xml(profile)?;

    log::debug!("Writing profile to {destination:?}");
    let write_error = |source| ProfileError::Write {
        path: destination.to_owned(),
        source,
    };
    let mut file = File::create(destination).map_err(write_error)?;
    file.write_all(xml.as_bytes()).map_err(write_error)?;

    Ok(xml.len())
}
