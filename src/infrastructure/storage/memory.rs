//! 프로세스 메모리에만 유지되는 퀴즈 저장소.

use std::sync::{Mutex, MutexGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use tracing::debug;

use super::table::QuizTable;
use crate::application::ports::QuizRepository;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{NewQuiz, Quiz, QuizId};

/// `--memory` 실행과 테스트에서 쓰는 저장소 어댑터.
#[derive(Debug, Default)]
pub struct InMemoryQuizRepository {
    table: Mutex<QuizTable>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            table: Mutex::new(QuizTable::seeded()),
        }
    }

    fn table(&self) -> QuizResult<MutexGuard<'_, QuizTable>> {
        self.table
            .lock()
            .map_err(|_| QuizError::Other(anyhow!("quiz table lock poisoned")))
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        Ok(self.table()?.all())
    }

    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>> {
        Ok(self.table()?.get(id))
    }

    async fn create(&self, quiz: NewQuiz) -> QuizResult<Quiz> {
        let created = self.table()?.insert(quiz)?;
        debug!(id = created.id, "quiz row inserted");
        Ok(created)
    }

    async fn destroy(&self, id: QuizId) -> QuizResult<usize> {
        Ok(self.table()?.remove(id))
    }

    async fn update(&self, quiz: Quiz) -> QuizResult<Quiz> {
        self.table()?.replace(quiz)
    }
}
