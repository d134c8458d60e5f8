//! 질문/정답을 차례로 입력받아 새 퀴즈를 저장하는 유스케이스.

use tracing::debug;

use crate::application::ports::{QuizRepository, SessionIo, Tone};
use crate::application::usecases::{ask, describe};
use crate::domain::error::QuizResult;
use crate::domain::quiz::{NewQuiz, Quiz};

pub struct AddQuizUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> AddQuizUseCase<'a> {
    /// 정답 프롬프트는 질문 입력이 끝난 뒤에만 띄운다.
    pub async fn execute(&self, io: &mut dyn SessionIo) -> QuizResult<Quiz> {
        let question = ask(io, " Enter a question: ", None).await?;
        let answer = ask(io, " Enter the answer: ", None).await?;

        let quiz = self.repo.create(NewQuiz::new(question, answer)).await?;
        debug!(id = quiz.id, "quiz added");

        let label = io.paint("Added", Tone::Highlight);
        let line = format!(" {label}: {}", describe(io, &quiz.question, &quiz.answer));
        io.log(&line).await?;
        Ok(quiz)
    }
}
