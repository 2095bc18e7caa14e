use blockshift_engine::{AttrValue, Attributes, BlockError, BlockKind, BlockRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to expand include pattern {pattern}: {source}")]
    IncludeExpandError {
        pattern: String,
        source: shellexpand::LookupError<std::env::VarError>,
    },

    #[error("Invalid include pattern {pattern}: {source}")]
    InvalidIncludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Schema of one block kind as written in a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KindConfig {
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub defaults: Attributes,
}

/// Block kind manifest.
///
/// ```toml
/// include = ["~/.config/blockshift/kinds/*.toml"]
///
/// [kinds."core/heading".defaults]
/// level = 2
/// ```
///
/// Included files use the same format (their own `include` lists are not
/// followed). Kinds declared in the main file win over included ones.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    #[serde(default)]
    pub kinds: BTreeMap<String, KindConfig>,
    /// Kinds pulled in through `include`, resolved at load time.
    #[serde(skip)]
    included: BTreeMap<String, KindConfig>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let mut config = Self::read(config_path)?;

        let base_dir = config_path.parent().unwrap_or(Path::new("."));
        for pattern in config.include.clone() {
            for path in Self::resolve_include(&pattern, base_dir)? {
                let included = Self::read(&path)?;
                log::info!(
                    "Loaded {} block kinds from {}",
                    included.kinds.len(),
                    path.display()
                );
                config.included.extend(included.kinds);
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Write the manifest. Included kinds stay in their own files.
    ///
    /// TOML has no null, so a manifest with a null default (at any depth)
    /// is refused before anything is written.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        for (name, kind) in &self.kinds {
            if let Some((key, _)) = kind.defaults.iter().find(|(_, value)| holds_null(value)) {
                anyhow::bail!("Cannot save default {key} of {name}: TOML has no null value");
            }
        }
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/blockshift");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Every kind known to this manifest, includes merged under the main file.
    pub fn all_kinds(&self) -> BTreeMap<&str, &KindConfig> {
        self.included
            .iter()
            .chain(&self.kinds)
            .map(|(name, kind)| (name.as_str(), kind))
            .collect()
    }

    /// A fresh definition for `name`, ready for transform rules to be added.
    pub fn kind(&self, name: &str) -> Option<BlockKind> {
        self.all_kinds()
            .get(name)
            .map(|kind| BlockKind::new(name).with_defaults(kind.defaults.clone()))
    }

    /// Definitions for every kind in the manifest, sorted by name.
    pub fn build_kinds(&self) -> Vec<BlockKind> {
        self.all_kinds()
            .into_iter()
            .map(|(name, kind)| BlockKind::new(name).with_defaults(kind.defaults.clone()))
            .collect()
    }

    /// Register every manifest kind, without transforms, returning how many
    /// were added.
    pub fn register_into(&self, registry: &mut BlockRegistry) -> Result<usize, BlockError> {
        let kinds = self.build_kinds();
        let count = kinds.len();
        for kind in kinds {
            registry.register(kind)?;
        }
        Ok(count)
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// Expand `~` and `$VARS` in `pattern`, anchor relative patterns at
    /// `base_dir`, and return the matching files in sorted order.
    fn resolve_include(pattern: &str, base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
        let expanded =
            shellexpand::full(pattern).map_err(|source| ConfigError::IncludeExpandError {
                pattern: pattern.to_string(),
                source,
            })?;
        let expanded = PathBuf::from(expanded.as_ref());
        let full = if expanded.is_relative() {
            PathBuf::from(glob::Pattern::escape(&base_dir.to_string_lossy())).join(expanded)
        } else {
            expanded
        };

        let entries = glob::glob(&full.to_string_lossy()).map_err(|source| {
            ConfigError::InvalidIncludePattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ConfigError::ConfigReadError {
                config_path: e.path().to_path_buf(),
                source: e.into(),
            })?;
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

fn holds_null(value: &AttrValue) -> bool {
    match value {
        AttrValue::Null => true,
        AttrValue::List(items) => items.iter().any(holds_null),
        AttrValue::Map(map) => map.values().any(holds_null),
        _ => false,
    }
}
