mod alias_merge;
mod alias_normalizer;
mod alias_store;
mod config;
mod media_folder_discovery;

use std::path::Path;

use log::info;

use alias_merge::merge_aliases;
use alias_store::{load_alias_file, write_alias_file};
use config::{load_config_file, load_system_config_template, GeneratorConfig};
use media_folder_discovery::scan_media_aliases;

const USER_CONFIG_FILE: &str = "media-aliases.toml";

fn load_generator_config() -> GeneratorConfig {
    let config_file = Path::new(USER_CONFIG_FILE);
    if config_file.exists() {
        info!("Using generator config. path={}", config_file.display());
        load_config_file(config_file)
    } else {
        load_system_config_template()
    }
}

fn run(config: &GeneratorConfig) -> Result<usize, String> {
    let existing = load_alias_file(&config.aliases_file);
    let generated = scan_media_aliases(&config.media_root, config.marker);

    let merged = merge_aliases(existing, generated, &config.overrides, config.marker);
    write_alias_file(&config.aliases_file, &merged)?;
    Ok(merged.len())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Info);
    clog.init();

    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("panic: {}", panic_info);
    }));

    let config = load_generator_config();
    let canonical_count = run(&config)?;

    info!(
        "Generated aliases saved to {} canonical_names={}",
        config.aliases_file.display(),
        canonical_count
    );
    Ok(())
}
