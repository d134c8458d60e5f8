//! 저장된 퀴즈 목록을 출력하는 유스케이스.

use crate::application::ports::{QuizRepository, SessionIo, Tone};
use crate::domain::error::QuizResult;

pub struct ListQuizzesUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> ListQuizzesUseCase<'a> {
    /// 저장소가 돌려준 순서대로 `[id]: question`을 한 줄씩 출력한다.
    pub async fn execute(&self, io: &mut dyn SessionIo) -> QuizResult<usize> {
        let quizzes = self.repo.find_all().await?;
        for quiz in &quizzes {
            let id = io.paint(&quiz.id.to_string(), Tone::Highlight);
            io.log(&format!(" [{id}]: {}", quiz.question)).await?;
        }
        Ok(quizzes.len())
    }
}
