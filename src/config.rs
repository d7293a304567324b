//! Generator configuration model and the built-in system template.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use log::warn;

pub const DEFAULT_ALIASES_FILE: &str = "data/media-aliases.json";
pub const DEFAULT_MEDIA_ROOT: &str = "public/크루즈정보사진";
pub const DEFAULT_MARKER: char = '호';

/// Settings for one generator run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Alias file read at start and overwritten at the end.
    pub aliases_file: PathBuf,
    /// Directory tree whose folder names become canonical entries.
    pub media_root: PathBuf,
    /// Trailing suffix stripped during normalization.
    pub marker: char,
    /// Hand-curated aliases keyed by canonical name.
    pub overrides: BTreeMap<String, Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            aliases_file: PathBuf::from(DEFAULT_ALIASES_FILE),
            media_root: PathBuf::from(DEFAULT_MEDIA_ROOT),
            marker: DEFAULT_MARKER,
            overrides: BTreeMap::new(),
        }
    }
}

/// On-disk shape of a config file. Every key is optional so a user file only
/// needs to name what it changes.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    aliases_file: Option<PathBuf>,
    media_root: Option<PathBuf>,
    marker: Option<char>,
    overrides: BTreeMap<String, Vec<String>>,
}

impl ConfigFile {
    fn apply_to(self, config: &mut GeneratorConfig) {
        if let Some(aliases_file) = self.aliases_file {
            config.aliases_file = aliases_file;
        }
        if let Some(media_root) = self.media_root {
            config.media_root = media_root;
        }
        if let Some(marker) = self.marker {
            config.marker = marker;
        }
        for (canonical, aliases) in self.overrides {
            config
                .overrides
                .entry(canonical)
                .or_default()
                .extend(aliases);
        }
    }
}

pub fn system_config_template_text() -> &'static str {
    include_str!("../config/generator.system.toml")
}

pub fn load_system_config_template() -> GeneratorConfig {
    let template: ConfigFile = toml::from_str(system_config_template_text())
        .expect("generator system template should parse into GeneratorConfig");
    let mut config = GeneratorConfig::default();
    template.apply_to(&mut config);
    config
}

/// Layers a user config file over the system template. Unreadable or invalid
/// files fall back to the template alone.
pub fn load_config_file(path: &Path) -> GeneratorConfig {
    let mut config = load_system_config_template();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            warn!(
                "Failed to read config file {}. Using generator system template. error={}",
                path.display(),
                err
            );
            return config;
        }
    };

    match toml::from_str::<ConfigFile>(&content) {
        Ok(user_config) => {
            user_config.apply_to(&mut config);
            config
        }
        Err(err) => {
            warn!(
                "Failed to parse config file {}. Using generator system template. error={}",
                path.display(),
                err
            );
            config
        }
    }
}
