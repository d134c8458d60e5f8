//! 기존 퀴즈의 질문/정답을 수정하는 유스케이스.

use tracing::debug;

use crate::application::ports::{QuizRepository, SessionIo, Tone};
use crate::application::usecases::{ask, describe};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::{Quiz, parse_quiz_id};

pub struct EditQuizUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> EditQuizUseCase<'a> {
    /// 현재 값을 프롬프트 초기값으로 채운 뒤, 입력받은 값으로 새 퀴즈를 만들어 교체한다.
    pub async fn execute(&self, io: &mut dyn SessionIo, raw_id: Option<&str>) -> QuizResult<Quiz> {
        let id = parse_quiz_id(raw_id)?;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(QuizError::NotFound { id })?;

        let question = ask(io, " Enter the question: ", Some(&current.question)).await?;
        let answer = ask(io, " Enter the answer: ", Some(&current.answer)).await?;

        let saved = self.repo.update(current.with_text(question, answer)).await?;
        debug!(id, "quiz edited");

        let id_text = io.paint(&id.to_string(), Tone::Highlight);
        let line = format!(
            " Quiz {id_text} changed to: {}",
            describe(io, &saved.question, &saved.answer)
        );
        io.log(&line).await?;
        Ok(saved)
    }
}
