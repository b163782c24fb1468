use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    serializer: YamlConfigSerializer,
    provider: TProvider,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(provider: TProvider) -> Self {
        Self {
            serializer: YamlConfigSerializer::new(),
            provider,
            cached: Mutex::new(None),
        }
    }

    // Missing config content is not an error: the default config applies.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config: TConfig = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = self.serializer.serialize(config)?;
        self.provider.set_config_content(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
