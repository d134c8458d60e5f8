//! 퀴즈 한 건의 질문과 정답을 보여주는 유스케이스.

use crate::application::ports::{QuizRepository, SessionIo, Tone};
use crate::application::usecases::describe;
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, parse_quiz_id};

pub struct ShowQuizUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> ShowQuizUseCase<'a> {
    pub async fn execute(&self, io: &mut dyn SessionIo, raw_id: Option<&str>) -> QuizResult<Quiz> {
        let id = parse_quiz_id(raw_id)?;
        let quiz = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let id_text = io.paint(&id.to_string(), Tone::Highlight);
        let line = format!(" [{id_text}]:  {}", describe(io, &quiz.question, &quiz.answer));
        io.log(&line).await?;
        Ok(quiz)
    }
}
