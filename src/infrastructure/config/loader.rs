//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "QUIZ_TRAINER_CONFIG";
const APP_DIR: &str = "quiz-trainer";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 앞에서부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: Config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        debug!(path = %path.display(), "config merged");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = Vec::new();

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join(APP_DIR).join("config.json"));
    }

    paths.push(PathBuf::from(".quiz-trainer/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

/// 설정에 경로가 없을 때 쓰는 퀴즈 테이블 위치.
pub fn default_storage_path() -> PathBuf {
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIR).join("quizzes.json"),
        None => PathBuf::from(".quiz-trainer/quizzes.json"),
    }
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn later_file_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        let missing = dir.path().join("missing.json");
        fs::write(&low, r#"{"server":{"bind":"0.0.0.0:1"},"display":{"color":false}}"#).unwrap();
        fs::write(&high, r#"{"server":{"bind":"0.0.0.0:2"}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), missing, high.clone()]).unwrap();

        assert_eq!(loaded.config.bind_addr(), "0.0.0.0:2");
        assert!(!loaded.config.color_enabled());
        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.searched_paths.len(), 3);
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = TempDir::new().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{").unwrap();

        let err = load_from_paths(vec![bad]).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn duplicate_paths_are_dropped() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
