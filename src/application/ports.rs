//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::error::QuizResult;
use crate::domain::quiz::{NewQuiz, Quiz, QuizId};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 퀴즈 테이블 저장소 포트.
/// 여러 세션이 공유하므로 구현체가 스스로 일관성을 보장해야 한다.
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// id 오름차순 전체 목록.
    async fn find_all(&self) -> QuizResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>>;
    /// 새 id를 부여해 저장한다. 빈 필드는 `QuizError::Validation`.
    async fn create(&self, quiz: NewQuiz) -> QuizResult<Quiz>;
    /// 삭제된 행 수를 반환한다. 없는 id는 0.
    async fn destroy(&self, id: QuizId) -> QuizResult<usize>;
    /// 같은 id의 행을 교체한다.
    async fn update(&self, quiz: Quiz) -> QuizResult<Quiz>;
}

/// 출력 한 줄의 색상 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Highlight,
    Success,
    Question,
    Accent,
    Error,
}

/// 한 사용자 세션의 입출력 포트(터미널 또는 소켓).
#[async_trait]
pub trait SessionIo: Send {
    /// 색상 설정에 맞춰 텍스트 조각을 칠한다.
    fn paint(&self, text: &str, tone: Tone) -> String;

    async fn log(&mut self, line: &str) -> Result<()>;

    async fn error(&mut self, message: &str) -> Result<()>;

    /// 레이블을 출력하고 한 줄을 입력받는다. 입력이 끝났으면 `None`.
    /// `prefill`은 편집 가능한 초기값이며 지원하지 않는 채널은 무시한다.
    async fn question(&mut self, label: &str, prefill: Option<&str>) -> Result<Option<String>>;

    /// 명령 프롬프트를 다시 띄우고 다음 명령 줄을 읽는다.
    async fn read_command(&mut self) -> Result<Option<String>>;

    async fn close(&mut self) -> Result<()>;
}
