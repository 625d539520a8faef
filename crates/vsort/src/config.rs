use anyhow::Context;
use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use version_sorter::{HyphenMode, Sorter};

/// Defaults for every subcommand. Command line flags win over these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub hyphen: HyphenMode,
    pub descending: bool,
    pub unique: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {

    /// "separator" or "pre-release"
    hyphen: Option<HyphenMode>,

    #[serde(default = "bool::default")]
    descending: bool,

    #[serde(default = "bool::default")]
    unique: bool,
}

impl Config {

    pub fn from_reader<R: Read>(mut read: R) -> Result<Config> {

        let toml = {
            let mut contents = String::new();
            read.read_to_string(&mut contents)?;
            toml::from_str::<ConfigToml>(&contents).context("failed to parse config")?
        };

        Ok(Config {
            hyphen: toml.hyphen.unwrap_or_default(),
            descending: toml.descending,
            unique: toml.unique,
        })
    }

    pub fn from_path(path: &Utf8Path) -> Result<Config> {
        let file = File::open(path).with_context(|| format!("failed to open config file {path}"))?;
        Self::from_reader(BufReader::new(file)).with_context(|| format!("in config file {path}"))
    }

    /// Load the given file, or the first config file found on disk, or fall
    /// back to the defaults.
    pub fn load(path: Option<&Utf8Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match find_config_file() {
                Some(path) => path,
                None => {
                    tracing::trace!("no config file, using defaults");
                    return Ok(Config::default());
                }
            },
        };
        tracing::debug!("using config file {path}");
        Self::from_path(&path)
    }

    /// The configured sorter, with any command line overrides applied.
    pub fn sorter(&self, hyphen: Option<HyphenMode>, descending: Option<bool>) -> Sorter {
        Sorter::new()
            .hyphen(hyphen.unwrap_or(self.hyphen))
            .descending(descending.unwrap_or(self.descending))
    }
}

/// search for the config file
/// 1. vsort.toml next to the executable
/// 2. config.toml in the user config dir (~/.config/vsort on linux)
fn find_config_file() -> Option<Utf8PathBuf> {

    let mut candidates = Vec::new();

    if let Ok(exe) = std::env::current_exe() {
        candidates.push(exe.with_file_name("vsort.toml"));
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "vsort") {
        candidates.push(dirs.config_dir().join("config.toml"));
    }

    candidates.into_iter()
        .filter(|path| path.is_file())
        .find_map(|path| Utf8PathBuf::from_path_buf(path).ok())
}
