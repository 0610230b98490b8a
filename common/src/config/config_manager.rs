use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads and stores a validated config through a content provider.
///
/// A missing config is not an error: `load` falls back to `TConfig::default()`.
/// Both directions validate, so an invalid config is never handed out or written.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_content_provider: TConfigContentProvider,
    config_serializer: TConfigSerializer,
    _config: PhantomData<TConfig>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_content_provider,
            config_serializer,
            _config: PhantomData,
        }
    }

    pub fn source(&self) -> String {
        self.config_content_provider.describe()
    }

    pub fn load(&self) -> Result<TConfig, String> {
        let config = match self.config_content_provider.read_content()? {
            Some(content) => self.config_serializer.deserialize(&content)?,
            None => TConfig::default(),
        };

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn store(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.config_serializer.serialize(config)?;
        self.config_content_provider.write_content(&content)
    }
}
