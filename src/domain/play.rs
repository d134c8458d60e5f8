//! 전체 퀴즈를 무작위 비복원으로 출제하는 play 진행 상태.

use rand::Rng;

use crate::domain::quiz::Quiz;

/// 한 번의 플레이 동안 아직 맞히지 못한 퀴즈 풀과 누적 점수.
#[derive(Debug, Clone)]
pub struct Playthrough {
    pool: Vec<Quiz>,
    score: u32,
}

/// 답변 한 번을 채점한 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 정답. 해당 퀴즈는 풀에서 빠졌다.
    Correct { score: u32 },
    /// 오답. 플레이는 여기서 끝난다.
    Wrong { score: u32 },
}

impl Playthrough {
    pub fn new(quizzes: Vec<Quiz>) -> Self {
        Self {
            pool: quizzes,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.pool.is_empty()
    }

    /// 남은 퀴즈 중 하나를 균등 확률로 고른다. 풀이 비었으면 `None`.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.pool.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.pool.len()))
    }

    pub fn quiz(&self, index: usize) -> Option<&Quiz> {
        self.pool.get(index)
    }

    /// `index` 위치 퀴즈에 대한 답을 채점한다.
    /// 정답이면 점수를 올리고 풀에서 제거한다.
    pub fn answer(&mut self, index: usize, given: &str) -> Verdict {
        let correct = self
            .pool
            .get(index)
            .is_some_and(|quiz| quiz.is_answered_by(given));

        if !correct {
            return Verdict::Wrong { score: self.score };
        }

        self.pool.swap_remove(index);
        self.score += 1;
        Verdict::Correct { score: self.score }
    }
}
