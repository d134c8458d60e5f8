//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 퀴즈 테이블 저장 설정
    #[serde(default)]
    pub storage: StorageConfig,
    /// 소켓 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 출력 표시 설정
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    /// JSON 테이블 파일 경로
    pub path: Option<String>,
    /// 새 테이블 생성 시 기본 퀴즈를 채울지 여부(기본 true)
    pub seed_defaults: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    /// 수신 주소(host:port)
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DisplayConfig {
    /// ANSI 색상 사용 여부(기본 true)
    pub color: Option<bool>,
}

impl Config {
    pub fn seed_defaults(&self) -> bool {
        self.storage.seed_defaults.unwrap_or(true)
    }

    pub fn bind_addr(&self) -> String {
        self.server
            .bind
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn color_enabled(&self) -> bool {
        self.display.color.unwrap_or(true)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        if other.storage.path.is_some() {
            self.storage.path = other.storage.path;
        }
        if other.storage.seed_defaults.is_some() {
            self.storage.seed_defaults = other.storage.seed_defaults;
        }
        if other.server.bind.is_some() {
            self.server.bind = other.server.bind;
        }
        if other.display.color.is_some() {
            self.display.color = other.display.color;
        }
    }
}
