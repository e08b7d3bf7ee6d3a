#![deny(unused_must_use)]

mod args;
mod config;
mod error;
mod filter;
mod logger;
mod open_profile;
mod permissions;
mod profile;
mod write_profile;

use anyhow::Context;
use config::Config;
use itertools::Itertools;
use profile::Profile;

fn print_field_permissions(profile: &Profile) {
    for (i, fp) in profile.field_permissions.iter().enumerate() {
        println!(
            "\tOld Value - Index: {i} - Field: {} - readable: {} - editable: {}",
            fp.field, fp.readable, fp.editable
        );
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let input = config.input_path();
    let mut profile = open_profile::load(&input)
        .with_context(|| format!("Loading profile {:?}", config.profile_name))?;
    print_field_permissions(&profile);

    let update = filter::apply_permissions(&mut profile, &config.objects, config.access)
        .context("Updating field permissions")?;
    println!(
        "Updated {} object(s): {}",
        update.targets.len(),
        update.targets.iter().join(", ")
    );
    println!(
        "Changed {} field permission bit(s) to readable: {}, editable: {}",
        update.changed, config.access.readable, config.access.editable
    );

    let output = config.output_path();
    if config.write_output {
        let size = write_profile::write(&profile, &output)
            .with_context(|| format!("Writing {output:?}"))?;
        println!("Modified profile file created with size: {size}");
    } else {
        println!("Inspect only, pass -f to write {output:?}");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = args::read().context("Invalid arguments, see --help")?;
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    let config = Config::from_args(&args);
    logger::init(config.log_level);
    log::debug!("{config:?}");

    run(&config)
}
