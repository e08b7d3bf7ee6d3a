use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::de::DeError;

use crate::{error::ProfileError, profile::Profile};

pub fn parse(xml: &str) -> Result<Profile, DeError> {
    quick_xml::de::from_str(xml)
}

pub fn load(path: &Path) -> Result<Profile, ProfileError> {
    if path.as_os_str().is_empty() {
        return Err(ProfileError::InvalidPath);
    }

    log::debug!("Loading profile from {path:?}");
    let mut file = File::open(path).map_err(|source| ProfileError::Open {
        path: path.to_owned(),
        source,
    })?;

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|source| ProfileError::Read {
            path: path.to_owned(),
            source,
        })?;

    let profile = parse(&xml).map_err(|source| ProfileError::Parse {
        path: path.to_owned(),
        source,
    })?;

    log::info!(
        "Loaded {path:?}: {} field permissions, {} object permissions, {} record types",
        profile.field_permissions.len(),
        profile.object_permissions.len(),
        profile.record_type_visibilities.len()
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Profile xmlns="http://soap.sforce.com/2006/04/metadata">
    <applicationVisibilities>
        <application>standard__Sales</application>
        <default>true</default>
        <visible>true</visible>
    </applicationVisibilities>
    <custom>false</custom>
    <fieldPermissions>
        <editable>false</editable>
        <field>Account.Name</field>
        <readable>true</readable>
    </fieldPermissions>
    <fieldPermissions>
        <field>Contact.Email</field>
    </fieldPermissions>
    <objectPermissions>
        <allowCreate>true</allowCreate>
        <allowDelete>false</allowDelete>
        <allowEdit>true</allowEdit>
        <allowRead>true</allowRead>
        <modifyAllRecords>false</modifyAllRecords>
        <object>Account</object>
        <viewAllRecords>true</viewAllRecords>
    </objectPermissions>
    <recordTypeVisibilities>
        <default>true</default>
        <recordType>Account.Business</recordType>
        <visible>true</visible>
    </recordTypeVisibilities>
    <userLicense>Salesforce</userLicense>
</Profile>
"#;

    #[test]
    fn parse_skips_unknown_elements_and_defaults_missing_ones() {
        let profile = parse(SAMPLE).unwrap();

        assert_eq!(
            profile.xmlns.as_deref(),
            Some("http://soap.sforce.com/2006/04/metadata")
        );
        assert_eq!(profile.field_permissions.len(), 2);
        assert!(profile.field_permissions[0].readable);
        assert!(!profile.field_permissions[0].editable);
        assert_eq!(profile.field_permissions[1].field, "Contact.Email");
        assert!(!profile.field_permissions[1].readable);

        let object = &profile.object_permissions[0];
        assert_eq!(object.object, "Account");
        assert!(object.allow_create && !object.allow_delete && object.view_all_records);

        let record_type = &profile.record_type_visibilities[0];
        assert!(record_type.is_default && record_type.visible);
        assert_eq!(record_type.record_type, "Account.Business");

        assert_eq!(profile.user_license, "Salesforce");
    }

    #[test]
    fn parse_accepts_empty_profile() {
        let profile = parse("<Profile/>").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Accounting.profile");
        fs::write(&path, SAMPLE).unwrap();

        let profile = load(&path).unwrap();
        assert_eq!(profile, parse(SAMPLE).unwrap());
    }

    #[test]
    fn load_rejects_empty_path() {
        assert!(matches!(load(Path::new("")), Err(ProfileError::InvalidPath)));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("missing.profile")).unwrap_err();
        assert!(matches!(err, ProfileError::Open { .. }), "{err:?}");
    }

    #[test]
    fn load_reports_unreadable_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.profile");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }), "{err:?}");
    }

    #[test]
    fn load_reports_unparseable_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.profile");
        fs::write(&path, "<Profile><fieldPermissions><readable>maybe</readable>").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Parse { .. }), "{err:?}");
    }
}
