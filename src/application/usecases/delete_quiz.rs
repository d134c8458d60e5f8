//! 퀴즈 삭제 유스케이스.

use tracing::debug;

use crate::application::ports::QuizRepository;
use crate::domain::error::QuizResult;
use crate::domain::quiz::parse_quiz_id;

pub struct DeleteQuizUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> DeleteQuizUseCase<'a> {
    /// 일치하는 행이 없어도 오류가 아니다. 삭제된 행 수를 반환한다.
    pub async fn execute(&self, raw_id: Option<&str>) -> QuizResult<usize> {
        let id = parse_quiz_id(raw_id)?;
        let removed = self.repo.destroy(id).await?;
        debug!(id, removed, "quiz delete finished");
        Ok(removed)
    }
}
