use std::collections::BTreeSet;

use crate::{error::ProfileError, permissions::FieldAccess, profile::Profile};

/// Objects whose field permissions should be updated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObjectFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl ObjectFilter {
    /// Comma separated list of object names. An empty list selects all objects.
    pub fn parse(list: &str) -> Self {
        let names: BTreeSet<String> = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();

        if names.is_empty() {
            Self::All
        } else {
            Self::Only(names)
        }
    }

    /// Narrow `universe` down to the objects selected by this filter
    pub fn resolve(&self, universe: BTreeSet<String>) -> BTreeSet<String> {
        match self {
            Self::All => universe,
            Self::Only(names) => universe.intersection(names).cloned().collect(),
        }
    }
}

/// Outcome of [`apply_permissions`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Objects of the profile selected by the filter
    pub targets: BTreeSet<String>,
    /// Readable/editable bits that flipped
    pub changed: usize,
}

/// Set the access of every field permission owned by a selected object.
///
/// Field names are validated up front, so on error the profile is left
/// untouched.
pub fn apply_permissions(
    profile: &mut Profile, filter: &ObjectFilter, access: FieldAccess,
) -> Result<Update, ProfileError> {
    let universe = profile.object_names()?;
    if let ObjectFilter::Only(names) = filter {
        for name in names.difference(&universe) {
            log::warn!("Object {name:?} has no field permissions in this profile");
        }
    }
    let targets = filter.resolve(universe);
    log::debug!("Targeted objects: {targets:?}");

    let mut changed = 0;
    for fp in &mut profile.field_permissions {
        if !targets.contains(fp.object_name()?) {
            continue;
        }

        let mut current = fp.access();
        let flipped = current.apply(access);
        if flipped > 0 {
            log::debug!("{}: {:?} -> {:?}", fp.field, fp.access(), current);
            fp.set_access(current);
            changed += flipped;
        }
    }

    log::info!("Updated {changed} field permission bits");
    Ok(Update { targets, changed })
}
