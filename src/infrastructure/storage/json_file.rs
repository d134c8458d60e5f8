//! JSON 파일 한 개에 퀴즈 테이블을 보관하는 저장소.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::table::QuizTable;
use crate::application::ports::QuizRepository;
use crate::domain::error::QuizResult;
use crate::domain::quiz::{NewQuiz, Quiz, QuizId};

/// 변경마다 전체 테이블을 파일에 다시 쓴다.
/// 파일 쓰기에 실패하면 메모리 상태도 바꾸지 않는다.
/// 쓰기는 blocking 풀에서 돌고, 그동안 다른 변경은 락에서 기다린다.
#[derive(Debug)]
pub struct JsonFileQuizRepository {
    path: PathBuf,
    table: Mutex<QuizTable>,
}

impl JsonFileQuizRepository {
    /// 파일이 있으면 읽고, 없으면 새 테이블을 만들어 저장한다.
    pub fn open(path: impl Into<PathBuf>, seed_defaults: bool) -> Result<Self> {
        let path = path.into();

        let table = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read quiz table at {}", path.display()))?;
            let mut table: QuizTable = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
            table
                .normalize()
                .with_context(|| format!("invalid quiz table in {}", path.display()))?;
            info!(path = %path.display(), quizzes = table.len(), "quiz table loaded");
            table
        } else {
            let table = if seed_defaults {
                QuizTable::seeded()
            } else {
                QuizTable::default()
            };
            write_table(&path, &table)?;
            info!(path = %path.display(), quizzes = table.len(), "quiz table created");
            table
        };

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    async fn read<T>(&self, f: impl FnOnce(&QuizTable) -> T) -> T {
        f(&*self.table.lock().await)
    }

    /// 사본에 변경을 적용하고 파일 저장이 성공한 경우에만 반영한다.
    async fn commit<T>(&self, f: impl FnOnce(&mut QuizTable) -> QuizResult<T>) -> QuizResult<T> {
        let mut table = self.table.lock().await;

        let mut next = table.clone();
        let value = f(&mut next)?;
        if next != *table {
            let path = self.path.clone();
            *table = tokio::task::spawn_blocking(move || write_table(&path, &next).map(|()| next))
                .await
                .context("quiz table writer task failed")??;
        }
        Ok(value)
    }
}

#[async_trait]
impl QuizRepository for JsonFileQuizRepository {
    async fn find_all(&self) -> QuizResult<Vec<Quiz>> {
        Ok(self.read(QuizTable::all).await)
    }

    async fn find_by_id(&self, id: QuizId) -> QuizResult<Option<Quiz>> {
        Ok(self.read(|table| table.get(id)).await)
    }

    async fn create(&self, quiz: NewQuiz) -> QuizResult<Quiz> {
        let created = self.commit(|table| table.insert(quiz)).await?;
        debug!(id = created.id, path = %self.path.display(), "quiz row inserted");
        Ok(created)
    }

    async fn destroy(&self, id: QuizId) -> QuizResult<usize> {
        self.commit(|table| Ok(table.remove(id))).await
    }

    async fn update(&self, quiz: Quiz) -> QuizResult<Quiz> {
        self.commit(|table| table.replace(quiz)).await
    }
}

fn write_table(path: &Path, table: &QuizTable) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let body = serde_json::to_string_pretty(table).context("failed to encode quiz table")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, format!("{body}\n"))
        .with_context(|| format!("failed to write quiz table at {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace quiz table at {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn new_file_is_seeded_and_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("quizzes.json");

        let repo = JsonFileQuizRepository::open(&path, true).unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 4);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn changes_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");

        let repo = JsonFileQuizRepository::open(&path, false).unwrap();
        let a = repo.create(NewQuiz::new("2+2", "4")).await.unwrap();
        let b = repo.create(NewQuiz::new("3+3", "6")).await.unwrap();
        repo.update(a.with_text("2+2", "four")).await.unwrap();
        assert_eq!(repo.destroy(b.id).await.unwrap(), 1);
        drop(repo);

        let reopened = JsonFileQuizRepository::open(&path, true).unwrap();
        let all = reopened.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].answer, "four");

        // 삭제된 id는 다시 부여되지 않는다.
        let c = reopened.create(NewQuiz::new("1+1", "2")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn rejected_create_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        let repo = JsonFileQuizRepository::open(&path, false).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        assert!(repo.create(NewQuiz::new("", "")).await.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn table_without_room_for_new_ids_is_rejected_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        let raw = format!(
            r#"{{"next_id":1,"quizzes":[{{"id":{},"question":"q","answer":"a"}}]}}"#,
            QuizId::MAX
        );
        fs::write(&path, raw).unwrap();

        let err = JsonFileQuizRepository::open(&path, true).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("invalid quiz table"));
        assert!(message.contains("quizzes.json"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_creates_get_distinct_ids_and_all_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        let repo = std::sync::Arc::new(JsonFileQuizRepository::open(&path, false).unwrap());

        let mut tasks = Vec::new();
        for i in 0..8 {
            let repo = std::sync::Arc::clone(&repo);
            tasks.push(tokio::spawn(async move {
                repo.create(NewQuiz::new(format!("q{i}"), "a")).await.unwrap().id
            }));
        }
        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap());
        }
        ids.sort();
        assert_eq!(ids, (1..=8).collect::<Vec<QuizId>>());

        let reopened = JsonFileQuizRepository::open(&path, false).unwrap();
        assert_eq!(reopened.find_all().await.unwrap().len(), 8);
    }

    #[test]
    fn corrupt_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quizzes.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonFileQuizRepository::open(&path, true).unwrap_err();
        assert!(format!("{err:#}").contains("quizzes.json"));
    }
}
