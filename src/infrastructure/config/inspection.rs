//! 적용 설정 진단(inspection) 뷰 모델.

use serde::Serialize;

use super::loader::LoadedConfig;
use super::storage_path;
use crate::application::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<String>,
    pub loaded_paths: Vec<String>,
    pub config: Config,
    pub effective: EffectiveSettings,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub storage_path: String,
    pub storage_exists: bool,
    pub seed_defaults: bool,
    pub bind: String,
    pub color: bool,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let storage_path = storage_path(&loaded.config);

        Self {
            searched_paths: loaded
                .searched_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            loaded_paths: loaded
                .loaded_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            effective: EffectiveSettings {
                storage_exists: storage_path.exists(),
                storage_path: storage_path.display().to_string(),
                seed_defaults: loaded.config.seed_defaults(),
                bind: loaded.config.bind_addr(),
                color: loaded.config.color_enabled(),
            },
            config: loaded.config,
        }
    }
}
