use std::path::PathBuf;

use log::LevelFilter;

use crate::{args::Args, filter::ObjectFilter, logger, permissions::FieldAccess};

const PROFILE_EXTENSION: &str = "profile";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing `profiles/` and `out/`
    pub base_path: PathBuf,
    pub profile_name: String,
    pub objects: ObjectFilter,
    /// Write the updated profile, otherwise only report what would change
    pub write_output: bool,
    /// Access granted to every selected field
    pub access: FieldAccess,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Self {
            base_path: args.filepath.clone(),
            profile_name: args.profile.clone(),
            objects: ObjectFilter::parse(&args.objects),
            write_output: args.write_output,
            access: if args.read_only {
                FieldAccess::READ_ONLY
            } else {
                FieldAccess::FULL
            },
            log_level: logger::level_for(args.verbosity),
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.base_path
            .join("profiles")
            .join(format!("{}.{PROFILE_EXTENSION}", self.profile_name))
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_path
            .join("out")
            .join(format!("{}2.{PROFILE_EXTENSION}", self.profile_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn paths_follow_base_directory() {
        let config = Config::from_args(&Args {
            filepath: PathBuf::from("metadata"),
            ..Default::default()
        });

        assert_eq!(
            config.input_path(),
            Path::new("metadata/profiles/Accounting.profile")
        );
        assert_eq!(
            config.output_path(),
            Path::new("metadata/out/Accounting2.profile")
        );
    }

    #[test]
    fn flags_map_to_filter_and_access() {
        let config = Config::from_args(&Args {
            objects: "Account".to_owned(),
            read_only: true,
            ..Default::default()
        });

        assert_eq!(config.objects, ObjectFilter::parse("Account"));
        assert_eq!(config.access, FieldAccess::READ_ONLY);
        assert!(!config.write_output);

        let config = Config::from_args(&Args::default());
        assert_eq!(config.objects, ObjectFilter::All);
        assert_eq!(config.access, FieldAccess::FULL);
    }
}
