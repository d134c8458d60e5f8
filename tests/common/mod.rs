#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use quiz_trainer::application::ports::{QuizRepository, SessionIo, Tone};
use quiz_trainer::domain::quiz::{NewQuiz, Quiz};
use quiz_trainer::infrastructure::storage::InMemoryQuizRepository;
use quiz_trainer::interface::cli::AppComposition;

/// 세션에서 일어난 일을 순서대로 기록한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Out(String),
    Err(String),
    Asked {
        label: String,
        prefill: Option<String>,
    },
    CommandPrompt,
    Closed,
}

type Responder = Box<dyn FnMut(&str) -> Option<String> + Send>;

/// 미리 정한 입력을 순서대로 돌려주는 세션.
/// `responder`가 있으면 질문 프롬프트에는 그쪽이 답한다.
pub struct ScriptedSession {
    inputs: VecDeque<String>,
    responder: Option<Responder>,
    pub events: Vec<Event>,
}

impl ScriptedSession {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            responder: None,
            events: Vec::new(),
        }
    }

    pub fn with_responder(
        mut self,
        responder: impl FnMut(&str) -> Option<String> + Send + 'static,
    ) -> Self {
        self.responder = Some(Box::new(responder));
        self
    }

    pub fn outputs(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Out(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Err(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn questions(&self) -> Vec<(&str, Option<&str>)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Asked { label, prefill } => Some((label.as_str(), prefill.as_deref())),
                _ => None,
            })
            .collect()
    }

    pub fn command_prompts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::CommandPrompt))
            .count()
    }

    pub fn closed(&self) -> bool {
        self.events.contains(&Event::Closed)
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn has_output(&self, needle: &str) -> bool {
        self.outputs().iter().any(|line| line.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|line| line.contains(needle))
    }
}

#[async_trait]
impl SessionIo for ScriptedSession {
    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }

    async fn log(&mut self, line: &str) -> Result<()> {
        self.events.push(Event::Out(line.to_string()));
        Ok(())
    }

    async fn error(&mut self, message: &str) -> Result<()> {
        self.events.push(Event::Err(message.to_string()));
        Ok(())
    }

    async fn question(&mut self, label: &str, prefill: Option<&str>) -> Result<Option<String>> {
        self.events.push(Event::Asked {
            label: label.to_string(),
            prefill: prefill.map(str::to_string),
        });
        if let Some(responder) = self.responder.as_mut() {
            return Ok(responder(label));
        }
        Ok(self.inputs.pop_front())
    }

    async fn read_command(&mut self) -> Result<Option<String>> {
        self.events.push(Event::CommandPrompt);
        Ok(self.inputs.pop_front())
    }

    async fn close(&mut self) -> Result<()> {
        self.events.push(Event::Closed);
        Ok(())
    }
}

/// 주어진 퀴즈만 담긴 메모리 저장소로 조합을 만든다.
pub async fn composition_with(quizzes: &[(&str, &str)]) -> (AppComposition, Vec<Quiz>) {
    let repo = Arc::new(InMemoryQuizRepository::new());
    let mut created = Vec::new();
    for (question, answer) in quizzes {
        created.push(
            repo.create(NewQuiz::new(*question, *answer))
                .await
                .expect("seed quiz"),
        );
    }
    (AppComposition::new(repo), created)
}
