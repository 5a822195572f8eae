use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Name of the optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "scene-tree.toml";

/// The `scene-tree.toml` representation.
///
/// Every field is optional; an absent file behaves like an empty one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path segments of the listed folder, relative to the working directory.
    #[serde(default = "default_target")]
    pub target: Vec<String>,
}

fn default_target() -> Vec<String> {
    vec!["assets".to_string(), "scenes".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

impl Config {
    /// Read `scene-tree.toml` from `working_dir`, falling back to the
    /// defaults when there is no such file.
    pub fn load(working_dir: &Path) -> anyhow::Result<Self> {
        let path = working_dir.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("no {CONFIG_FILE} in {}, using defaults", working_dir.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config `{}`", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("invalid config `{}`", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate the contents of a `scene-tree.toml`.
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        if config.target.is_empty() {
            bail!("`target` must name at least one path segment");
        }
        for segment in &config.target {
            let mut components = Path::new(segment).components();
            if !matches!(
                (components.next(), components.next()),
                (Some(Component::Normal(_)), None)
            ) {
                bail!(
                    "`target` segment {segment:?} is not a single relative path component"
                );
            }
        }
        Ok(config)
    }

    /// The folder as shown to the user, e.g. `assets/scenes`.
    pub fn display_path(&self) -> String {
        self.target.join("/")
    }

    /// Join the target segments onto `base` with the host's separator.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        self.target
            .iter()
            .fold(base.to_path_buf(), |path, segment| path.join(segment))
    }
}
