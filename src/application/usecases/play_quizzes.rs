//! 전체 퀴즈를 무작위 순서로 출제하는 play 유스케이스.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::application::ports::{QuizRepository, SessionIo};
use crate::application::usecases::{ask, quiz_prompt};
use crate::domain::error::{QuizError, QuizResult};
use crate::domain::play::{Playthrough, Verdict};

/// 한 번의 플레이 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    pub score: u32,
    /// 오답 없이 풀을 모두 비웠는지 여부.
    pub completed: bool,
}

pub struct PlayQuizzesUseCase<'a> {
    pub repo: &'a dyn QuizRepository,
}

impl<'a> PlayQuizzesUseCase<'a> {
    pub async fn execute(&self, io: &mut dyn SessionIo) -> QuizResult<PlayOutcome> {
        // 세션 future가 Send여야 하므로 thread_rng 대신 소유형 StdRng를 쓴다.
        let mut rng = StdRng::from_entropy();
        self.execute_with_rng(io, &mut rng).await
    }

    /// 정답이면 풀에서 빼고 계속, 오답이면 즉시 종료한다.
    pub async fn execute_with_rng<R>(
        &self,
        io: &mut dyn SessionIo,
        rng: &mut R,
    ) -> QuizResult<PlayOutcome>
    where
        R: Rng + Send + ?Sized,
    {
        let quizzes = self.repo.find_all().await?;
        debug!(pool = quizzes.len(), "play started");
        let mut play = Playthrough::new(quizzes);

        while let Some(idx) = play.draw(rng) {
            let prompt = match play.quiz(idx) {
                Some(quiz) => quiz_prompt(quiz),
                None => return Err(QuizError::Other(anyhow::anyhow!("play pool index out of range"))),
            };
            let given = ask(io, &prompt, None).await?;

            match play.answer(idx, &given) {
                Verdict::Correct { score } => {
                    io.log(&format!("Correct answer. Score so far: {score}."))
                        .await?;
                }
                Verdict::Wrong { score } => {
                    io.log(&format!("Incorrect answer. End of exam. Score: {score}"))
                        .await?;
                    return Ok(PlayOutcome {
                        score,
                        completed: false,
                    });
                }
            }
        }

        let score = play.score();
        io.log(&format!("Nothing more to ask. End of exam. Score: {score}"))
            .await?;
        Ok(PlayOutcome {
            score,
            completed: true,
        })
    }
}
