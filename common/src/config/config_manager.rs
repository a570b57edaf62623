use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config.validate().map_err(ConfigError::Invalid)?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let serialized = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized)?;

        let mut cached = self.cached.lock().unwrap_or_else(|e| e.into_inner());
        *cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        level: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.level > 10 {
                return Err("level must not exceed 10".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<u32>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_config_returns_default() {
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(MemoryProvider::default(), YamlConfigSerializer);
        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("level: 4\n".to_string());
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer);

        assert_eq!(manager.get_config().unwrap(), TestConfig { level: 4 });
        assert_eq!(manager.get_config().unwrap(), TestConfig { level: 4 });
        assert_eq!(*manager.config_content_provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_config_is_rejected_on_read_and_write() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("level: 11\n".to_string());
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer);

        assert!(matches!(manager.get_config(), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            manager.set_config(&TestConfig { level: 20 }),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_yaml_is_a_deserialize_error() {
        let provider = MemoryProvider::default();
        *provider.content.borrow_mut() = Some("level: [not a number".to_string());
        let manager: ConfigManager<_, TestConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer);
        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_file_round_trip() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tic_tac_toe_config_{}.yaml", random_number));

        let manager: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(path.clone());
        manager.set_config(&TestConfig { level: 7 }).unwrap();

        let fresh: ConfigManager<_, TestConfig, _> = ConfigManager::from_yaml_file(path.clone());
        assert_eq!(fresh.get_config().unwrap(), TestConfig { level: 7 });

        let _ = std::fs::remove_file(&path);
    }
}
