//! REPL 명령별 유스케이스.

pub mod add_quiz;
pub mod delete_quiz;
pub mod edit_quiz;
pub mod inspect_config;
pub mod list_quizzes;
pub mod play_quizzes;
pub mod show_quiz;
pub mod test_quiz;

use crate::application::ports::{SessionIo, Tone};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::quiz::Quiz;

/// 질문 레이블을 띄우고 한 줄을 받아 앞뒤 공백을 제거해 돌려준다.
pub(crate) async fn ask(
    io: &mut dyn SessionIo,
    label: &str,
    prefill: Option<&str>,
) -> QuizResult<String> {
    match io.question(label, prefill).await? {
        Some(answer) => Ok(answer.trim().to_string()),
        None => Err(QuizError::InputClosed),
    }
}

/// 퀴즈 본문을 묻는 프롬프트 문구.
pub(crate) fn quiz_prompt(quiz: &Quiz) -> String {
    format!("{}? ", quiz.question)
}

/// `question => answer` 형태의 한 줄 요약.
pub(crate) fn describe(io: &dyn SessionIo, question: &str, answer: &str) -> String {
    format!("{question} {} {answer}", io.paint("=>", Tone::Highlight))
}
