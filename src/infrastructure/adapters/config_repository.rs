//! 설정 저장소 포트 구현 어댑터.

use anyhow::Result;

use crate::application::config::Config;
use crate::application::ports::ConfigRepository;
use crate::infrastructure::config;

/// 다중 경로 JSON 병합 기반 설정 저장소 어댑터.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonConfigRepository;

impl ConfigRepository for JsonConfigRepository {
    fn load(&self) -> Result<Config> {
        config::load()
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        config::inspect_pretty_json()
    }
}
