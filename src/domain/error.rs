//! 명령 처리 중 사용자에게 보고되는 오류 분류.

use thiserror::Error;

use crate::domain::quiz::{FieldViolation, QuizId};

pub type QuizResult<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("missing <id> parameter")]
    MissingParameter,

    #[error("the id parameter is not a number: '{raw}'")]
    InvalidParameter { raw: String },

    #[error("there is no quiz for id={id}")]
    NotFound { id: QuizId },

    #[error("the quiz is invalid")]
    Validation(Vec<FieldViolation>),

    #[error("input stream closed")]
    InputClosed,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuizError {
    /// 에러 채널로 출력할 줄 목록.
    /// 검증 실패는 위반된 필드를 하나도 빠짐없이 나열한다.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Self::Validation(violations) => {
                let mut lines = vec!["The quiz is invalid:".to_string()];
                lines.extend(violations.iter().map(|v| v.message.clone()));
                lines
            }
            Self::Other(err) => vec![format!("{err:#}")],
            other => vec![other.to_string()],
        }
    }

    /// 세션을 더 이어갈 수 없는 오류인지 여부.
    pub fn ends_session(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
