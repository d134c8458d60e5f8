//! 퀴즈 테이블 자료구조와 행 단위 연산.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{NewQuiz, Quiz, QuizId};

const DEFAULT_QUIZZES: [(&str, &str); 4] = [
    ("Capital of Italy", "Rome"),
    ("Capital of France", "Paris"),
    ("Capital of Spain", "Madrid"),
    ("Capital of Portugal", "Lisbon"),
];

/// `quizzes` 행 목록과 다음에 부여할 id.
/// 삭제된 id는 재사용하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizTable {
    next_id: QuizId,
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

impl Default for QuizTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            quizzes: Vec::new(),
        }
    }
}

impl QuizTable {
    /// 기본 퀴즈가 채워진 새 테이블.
    pub fn seeded() -> Self {
        let quizzes: Vec<Quiz> = (1..)
            .zip(DEFAULT_QUIZZES)
            .map(|(id, (question, answer))| Quiz {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect();
        Self {
            next_id: quizzes.len() as QuizId + 1,
            quizzes,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn all(&self) -> Vec<Quiz> {
        self.quizzes.clone()
    }

    pub fn get(&self, id: QuizId) -> Option<Quiz> {
        self.quizzes.iter().find(|q| q.id == id).cloned()
    }

    pub fn insert(&mut self, quiz: NewQuiz) -> QuizResult<Quiz> {
        quiz.validate()?;
        let created = self.mint(quiz)?;
        self.quizzes.push(created.clone());
        Ok(created)
    }

    pub fn remove(&mut self, id: QuizId) -> usize {
        let before = self.quizzes.len();
        self.quizzes.retain(|q| q.id != id);
        before - self.quizzes.len()
    }

    pub fn replace(&mut self, quiz: Quiz) -> QuizResult<Quiz> {
        quiz.validate()?;
        let slot = self
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(QuizError::NotFound { id: quiz.id })?;
        *slot = quiz.clone();
        Ok(quiz)
    }

    /// 손으로 고친 파일에서 next_id가 기존 id보다 작아지는 경우를 바로잡는다.
    pub(crate) fn normalize(&mut self) -> Result<()> {
        self.quizzes.sort_by_key(|q| q.id);
        if let Some(max_id) = self.quizzes.last().map(|q| q.id)
            && self.next_id <= max_id
        {
            self.next_id = max_id
                .checked_add(1)
                .ok_or_else(|| anyhow!("quiz id {max_id} leaves no room for new ids"))?;
        }
        Ok(())
    }

    fn mint(&mut self, quiz: NewQuiz) -> QuizResult<Quiz> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| QuizError::Other(anyhow!("no quiz ids left after {id}")))?;
        Ok(Quiz {
            id,
            question: quiz.question,
            answer: quiz.answer,
        })
    }
}
