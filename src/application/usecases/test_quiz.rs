//! 퀴즈 한 건을 한 번 출제하는 유스케이스.

use crate::application::ports::{QuizRepository, SessionIo};
use crate::application::usecases::{ask, quiz_prompt};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::parse_quiz_id;

pub struct TestQuizUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> TestQuizUseCase<'a> {
    /// 정답 여부를 반환한다. 오답이어도 다시 묻지 않는다.
    pub async fn execute(&self, io: &mut dyn SessionIo, raw_id: Option<&str>) -> QuizResult<bool> {
        let id = parse_quiz_id(raw_id)?;
        let quiz = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let given = ask(io, &quiz_prompt(&quiz), None).await?;
        let correct = quiz.is_answered_by(&given);
        if correct {
            io.log("Your answer is correct.").await?;
        } else {
            io.log("Your answer is incorrect.").await?;
        }
        Ok(correct)
    }
}
