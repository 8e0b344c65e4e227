use crate::config::schema::{DashboardConfig, OutputConfig};
use crate::error::{Error, Result};
use crate::render::{console::ConsoleRenderer, csv::CsvRenderer, json::JsonRenderer, Renderer};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use validator::Validate;

pub const ENV_PREFIX: &str = "NEWSDASH";

/// Values that replace whatever the config files say. Filled from the
/// environment and from command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Overrides {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Overrides {
    /// Reads `NEWSDASH_BASE_URL`, `NEWSDASH_DAYS`, `NEWSDASH_COUNTRY`
    /// and `NEWSDASH_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn apply(&self, config: &mut DashboardConfig) {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(country) = &self.country {
            config.country = Some(country.clone());
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates one config file, following `extends`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DashboardConfig> {
        let config = Self::load_unvalidated(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Builds the effective config: file (or defaults), then environment,
    /// then `cli`, validated once at the end.
    pub fn resolve(path: Option<&Path>, cli: &Overrides) -> Result<DashboardConfig> {
        let mut config = match path {
            Some(path) => Self::load_unvalidated(path)?,
            None => DashboardConfig::default(),
        };

        Overrides::from_env()?.apply(&mut config);
        cli.apply(&mut config);

        config.validate()?;
        log::debug!("Effective config: {:?}", config);
        Ok(config)
    }

    fn load_unvalidated(path: &Path) -> Result<DashboardConfig> {
        let mut visited = HashSet::new();
        let mut layered = Self::load_with_inheritance(path, &mut visited)?;
        if let Value::Object(map) = &mut layered {
            map.remove("extends");
        }
        Ok(serde_json::from_value(layered)?)
    }

    /// Raw settings of `path` laid over those of its `extends` chain.
    /// Defaults are filled in only after the whole chain is merged.
    fn load_with_inheritance(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<Value> {
        let path = fs::canonicalize(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        if !visited.insert(path.clone()) {
            return Err(Error::Config(format!(
                "Circular inheritance detected involving {}",
                path.display()
            )));
        }

        let layer = Self::load_file(&path)?;
        if !layer.is_object() {
            return Err(Error::Config(format!(
                "{}: expected a table of settings",
                path.display()
            )));
        }

        match layer.get("extends").and_then(Value::as_str) {
            Some(parent_path_str) => {
                let parent_path = path
                    .parent()
                    .ok_or_else(|| {
                        Error::Config(format!(
                            "Cannot determine parent directory for {}",
                            path.display()
                        ))
                    })?
                    .join(parent_path_str);

                let mut merged = Self::load_with_inheritance(&parent_path, visited)?;
                Self::merge_layers(&mut merged, layer);
                Ok(merged)
            }
            None => Ok(layer),
        }
    }

    fn load_file(path: &Path) -> Result<Value> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            Some("toml") => Ok(toml::from_str(&content)?),
            _ => Err(Error::Config(format!(
                "Unsupported file extension: {}",
                path.display()
            ))),
        }
    }

    /// Every key the child sets wins. Nested tables merge key by key, except
    /// tagged ones (`output`), which the child replaces whole.
    fn merge_layers(parent: &mut Value, child: Value) {
        match (parent, child) {
            (Value::Object(parent), Value::Object(child)) => {
                for (key, value) in child {
                    match parent.get_mut(&key) {
                        Some(existing)
                            if existing.is_object()
                                && value.is_object()
                                && value.get("type").is_none() =>
                        {
                            Self::merge_layers(existing, value)
                        }
                        _ => {
                            parent.insert(key, value);
                        }
                    }
                }
            }
            (parent, child) => *parent = child,
        }
    }

    pub fn create_renderer(
        output: Option<&OutputConfig>,
        multi: Option<Arc<indicatif::MultiProgress>>,
    ) -> Result<Box<dyn Renderer>> {
        let renderer: Box<dyn Renderer> = match output {
            Some(OutputConfig::Json { path }) => Box::new(JsonRenderer::new(PathBuf::from(path))?),
            Some(OutputConfig::Csv { path }) => Box::new(CsvRenderer::new(PathBuf::from(path))?),
            Some(OutputConfig::Console) | None => Box::new(ConsoleRenderer::new(multi)),
        };
        Ok(renderer)
    }
}
