//! Subset of the Salesforce `Profile` metadata type.
//!
//! Only field, object and record type permissions and the user license are
//! modelled. Other elements are skipped when reading.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{error::ProfileError, permissions::FieldAccess};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(rename = "@xmlns", skip_serializing_if = "Option::is_none")]
    pub xmlns: Option<String>,
    #[serde(rename = "fieldPermissions")]
    pub field_permissions: Vec<FieldPermission>,
    #[serde(rename = "objectPermissions")]
    pub object_permissions: Vec<ObjectPermission>,
    #[serde(rename = "recordTypeVisibilities")]
    pub record_type_visibilities: Vec<RecordTypeVisibility>,
    #[serde(rename = "userLicense", skip_serializing_if = "String::is_empty")]
    pub user_license: String,
}

impl Profile {
    /// Distinct names of the objects referenced by field permissions
    pub fn object_names(&self) -> Result<BTreeSet<String>, ProfileError> {
        self.field_permissions
            .iter()
            .map(|fp| fp.object_name().map(str::to_owned))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldPermission {
    pub editable: bool,
    /// `Object.Field`
    pub field: String,
    pub readable: bool,
}

impl FieldPermission {
    pub fn object_name(&self) -> Result<&str, ProfileError> {
        let mut parts = self.field.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(object), Some(field), None) if !object.is_empty() && !field.is_empty() => {
                Ok(object)
            }
            _ => Err(ProfileError::MalformedFieldName {
                field: self.field.clone(),
            }),
        }
    }

    pub fn access(&self) -> FieldAccess {
        FieldAccess {
            readable: self.readable,
            editable: self.editable,
        }
    }

    pub fn set_access(&mut self, access: FieldAccess) {
        self.readable = access.readable;
        self.editable = access.editable;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectPermission {
    pub allow_create: bool,
    pub allow_delete: bool,
    pub allow_edit: bool,
    pub allow_read: bool,
    pub modify_all_records: bool,
    pub object: String,
    pub view_all_records: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordTypeVisibility {
    #[serde(rename = "default")]
    pub is_default: bool,
    pub record_type: String,
    pub visible: bool,
}
