//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::application::config::Config;
use crate::application::ports::QuizRepository;
use crate::application::usecases::add_quiz::AddQuizUseCase;
use crate::application::usecases::delete_quiz::DeleteQuizUseCase;
use crate::application::usecases::edit_quiz::EditQuizUseCase;
use crate::application::usecases::list_quizzes::ListQuizzesUseCase;
use crate::application::usecases::play_quizzes::PlayQuizzesUseCase;
use crate::application::usecases::show_quiz::ShowQuizUseCase;
use crate::application::usecases::test_quiz::TestQuizUseCase;
use crate::infrastructure::config;
use crate::infrastructure::storage::{InMemoryQuizRepository, JsonFileQuizRepository};
use crate::interface::cli::command::StoreChoice;

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
/// 여러 세션이 같은 저장소를 공유한다.
#[derive(Clone)]
pub struct AppComposition {
    repo: Arc<dyn QuizRepository>,
}

impl AppComposition {
    /// 저장소 어댑터를 외부에서 주입한다.
    pub fn new(repo: Arc<dyn QuizRepository>) -> Self {
        Self { repo }
    }

    /// 설정과 CLI 선택에 맞는 저장소를 열어 조합을 만든다.
    pub fn open(config: &Config, store: &StoreChoice) -> Result<Self> {
        let seed = config.seed_defaults();
        let repo: Arc<dyn QuizRepository> = match store {
            StoreChoice::Memory => {
                info!("using in-memory quiz table");
                if seed {
                    Arc::new(InMemoryQuizRepository::seeded())
                } else {
                    Arc::new(InMemoryQuizRepository::new())
                }
            }
            StoreChoice::File(path) => Arc::new(JsonFileQuizRepository::open(path, seed)?),
            StoreChoice::Configured => {
                Arc::new(JsonFileQuizRepository::open(config::storage_path(config), seed)?)
            }
        };
        Ok(Self::new(repo))
    }

    pub fn repository(&self) -> Arc<dyn QuizRepository> {
        Arc::clone(&self.repo)
    }

    /// 목록 출력 유스케이스를 생성한다.
    pub fn list_usecase(&self) -> ListQuizzesUseCase<'_> {
        ListQuizzesUseCase {
            repo: self.repo.as_ref(),
        }
    }

    pub fn show_usecase(&self) -> ShowQuizUseCase<'_> {
        ShowQuizUseCase {
            repo: self.repo.as_ref(),
        }
    }

    /// 추가 유스케이스를 생성한다.
    pub fn add_usecase(&self) -> AddQuizUseCase<'_> {
        AddQuizUseCase {
            repo: self.repo.as_ref(),
        }
    }

    pub fn delete_usecase(&self) -> DeleteQuizUseCase<'_> {
        DeleteQuizUseCase {
            repo: self.repo.as_ref(),
        }
    }

    pub fn edit_usecase(&self) -> EditQuizUseCase<'_> {
        EditQuizUseCase {
            repo: self.repo.as_ref(),
        }
    }

    /// 단일 출제 유스케이스를 생성한다.
    pub fn test_usecase(&self) -> TestQuizUseCase<'_> {
        TestQuizUseCase {
            repo: self.repo.as_ref(),
        }
    }

    /// 전체 무작위 출제 유스케이스를 생성한다.
    pub fn play_usecase(&self) -> PlayQuizzesUseCase<'_> {
        PlayQuizzesUseCase {
            repo: self.repo.as_ref(),
        }
    }
}
