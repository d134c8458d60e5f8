//! 퀴즈 엔티티와 입력 검증 규칙.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::{QuizError, QuizResult};

pub type QuizId = i64;

/// 저장소가 id를 부여한 퀴즈 한 건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: QuizId,
    pub question: String,
    pub answer: String,
}

impl Quiz {
    /// 사용자 답변이 정답인지 판정한다.
    pub fn is_answered_by(&self, given: &str) -> bool {
        answers_match(&self.answer, given)
    }

    /// id는 유지하고 질문/정답만 교체한 새 값을 만든다.
    pub fn with_text(&self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: self.id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn validate(&self) -> QuizResult<()> {
        validate_fields(&self.question, &self.answer)
    }
}

/// 생성 요청 페이로드. id는 저장소가 부여한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub question: String,
    pub answer: String,
}

impl NewQuiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn validate(&self) -> QuizResult<()> {
        validate_fields(&self.question, &self.answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn empty(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{field} must not be empty"),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// 질문/정답이 모두 비어 있지 않아야 한다. 위반 필드는 전부 모아서 보고한다.
pub fn validate_fields(question: &str, answer: &str) -> QuizResult<()> {
    let mut violations = Vec::new();
    if question.trim().is_empty() {
        violations.push(FieldViolation::empty("question"));
    }
    if answer.trim().is_empty() {
        violations.push(FieldViolation::empty("answer"));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(QuizError::Validation(violations))
    }
}

/// 앞뒤 공백과 대소문자를 무시하고 비교한다.
pub fn answers_match(expected: &str, given: &str) -> bool {
    expected.trim().to_lowercase() == given.trim().to_lowercase()
}

/// 명령 인자로 받은 id 토큰을 정수로 해석한다.
///
/// 앞쪽 정수 부분만 읽는다(`"3abc"` → 3). 숫자로 시작하지 않으면 실패한다.
pub fn parse_quiz_id(raw: Option<&str>) -> QuizResult<QuizId> {
    let Some(raw) = raw else {
        return Err(QuizError::MissingParameter);
    };

    let invalid = || QuizError::InvalidParameter {
        raw: raw.to_string(),
    };

    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return Err(invalid());
    }

    let value: QuizId = unsigned[..end].parse().map_err(|_| invalid())?;
    Ok(if negative { -value } else { value })
}
