//! 퀴즈 저장소 포트 구현체(메모리 / JSON 파일).

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileQuizRepository;
pub use memory::InMemoryQuizRepository;
pub use table::QuizTable;
