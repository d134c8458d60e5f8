mod common;

use common::{Event, ScriptedSession, composition_with};
use quiz_trainer::application::ports::QuizRepository;
use quiz_trainer::interface::cli::run_session;

#[tokio::test]
async fn help_lists_commands_and_prompt_returns() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["help", "H"]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.has_output("Commands:"));
    assert!(session.has_output("q|quit"));
    // help 두 번 + 입력 종료 확인용 한 번
    assert_eq!(session.command_prompts(), 3);
    assert!(session.errors().is_empty());
}

#[tokio::test]
async fn missing_id_is_reported_for_every_id_command() {
    let (composition, _) = composition_with(&[("2+2", "4")]).await;
    let mut session = ScriptedSession::new(["show", "delete", "edit", "test"]);

    run_session(&composition, &mut session).await.unwrap();

    let errors = session.errors();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e.contains("missing <id> parameter")));
    assert_eq!(session.command_prompts(), 5);
    assert!(session.questions().is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_invalid_parameter() {
    let (composition, _) = composition_with(&[("2+2", "4")]).await;
    let mut session = ScriptedSession::new(["show abc", "delete x", "edit ?", "test one"]);

    run_session(&composition, &mut session).await.unwrap();

    let errors = session.errors();
    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|e| e.contains("is not a number")));
}

#[tokio::test]
async fn unknown_ids_are_not_found_except_delete() {
    let (composition, _) = composition_with(&[("2+2", "4")]).await;
    let repo = composition.repository();
    let mut session = ScriptedSession::new(["show 99", "edit 99", "test 99", "delete 99"]);

    run_session(&composition, &mut session).await.unwrap();

    let errors = session.errors();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.contains("there is no quiz for id=99")));
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
    assert_eq!(session.command_prompts(), 5);
}

#[tokio::test]
async fn add_then_show_round_trips() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["add", "  Capital of Italy ", "Rome", "show 1"]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(
        session.questions(),
        vec![(" Enter a question: ", None), (" Enter the answer: ", None)]
    );
    assert!(session.has_output("Added: Capital of Italy => Rome"));
    assert!(session.has_output("[1]:  Capital of Italy => Rome"));
    assert!(session.errors().is_empty());
}

#[tokio::test]
async fn add_with_empty_fields_lists_every_violation() {
    let (composition, _) = composition_with(&[]).await;
    let repo = composition.repository();
    let mut session = ScriptedSession::new(["add", "   ", "", "list"]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(
        session.errors(),
        vec![
            "The quiz is invalid:",
            "question must not be empty",
            "answer must not be empty",
        ]
    );
    assert!(repo.find_all().await.unwrap().is_empty());
    // add 이후에도 프롬프트가 다시 뜬다.
    assert_eq!(session.command_prompts(), 3);
}

#[tokio::test]
async fn list_prints_in_id_order() {
    let (composition, _) = composition_with(&[("first", "1"), ("second", "2")]).await;
    let mut session = ScriptedSession::new(["list"]);

    run_session(&composition, &mut session).await.unwrap();

    let lines: Vec<_> = session
        .outputs()
        .into_iter()
        .filter(|l| l.starts_with(" ["))
        .collect();
    assert_eq!(lines, vec![" [1]: first", " [2]: second"]);
}

#[tokio::test]
async fn delete_removes_row_silently() {
    let (composition, quizzes) = composition_with(&[("a", "1"), ("b", "2")]).await;
    let repo = composition.repository();
    let mut session = ScriptedSession::new([format!("delete {}", quizzes[0].id)]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.errors().is_empty());
    let remaining = repo.find_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].question, "b");
}

#[tokio::test]
async fn edit_prefills_current_values_and_reports_new_ones() {
    let (composition, quizzes) = composition_with(&[("Capital of Italy", "Roma")]).await;
    let repo = composition.repository();
    let id = quizzes[0].id;
    let mut session = ScriptedSession::new([
        format!("edit {id}"),
        "Capital of Italy".to_string(),
        " Rome ".to_string(),
    ]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(
        session.questions(),
        vec![
            (" Enter the question: ", Some("Capital of Italy")),
            (" Enter the answer: ", Some("Roma")),
        ]
    );
    assert!(session.has_output(&format!("Quiz {id} changed to: Capital of Italy => Rome")));
    let saved = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(saved.answer, "Rome");
    assert_eq!(saved.id, id);
}

#[tokio::test]
async fn edit_rejects_empty_answer_and_keeps_row() {
    let (composition, quizzes) = composition_with(&[("q", "a")]).await;
    let repo = composition.repository();
    let id = quizzes[0].id;
    let mut session = ScriptedSession::new([format!("edit {id}"), "new q".to_string(), "".to_string()]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(
        session.errors(),
        vec!["The quiz is invalid:", "answer must not be empty"]
    );
    assert_eq!(repo.find_by_id(id).await.unwrap().unwrap().question, "q");
}

#[tokio::test]
async fn test_command_checks_answer_once() {
    let (composition, quizzes) = composition_with(&[("2+2", "4")]).await;
    let id = quizzes[0].id;
    let mut session = ScriptedSession::new([
        format!("test {id}"),
        "4".to_string(),
        format!("test {id}"),
        "five".to_string(),
    ]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(session.questions(), vec![("2+2? ", None), ("2+2? ", None)]);
    assert!(session.has_output("Your answer is correct."));
    assert!(session.has_output("Your answer is incorrect."));
    assert!(session.errors().is_empty());
}

#[tokio::test]
async fn test_answer_ignores_case_and_padding() {
    let (composition, quizzes) = composition_with(&[("Say it", "answer")]).await;
    let mut session =
        ScriptedSession::new([format!("test {}", quizzes[0].id), " Answer ".to_string()]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.has_output("Your answer is correct."));
}

#[tokio::test]
async fn unknown_command_points_to_help() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["Fly", "", "list"]);

    run_session(&composition, &mut session).await.unwrap();

    assert_eq!(session.errors(), vec!["Unknown command: 'fly'"]);
    assert!(session.has_output("Use help to see all available commands."));
    assert_eq!(session.command_prompts(), 4);
}

#[tokio::test]
async fn credits_name_the_authors() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["credits"]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.has_output("Authors:"));
    assert!(session.has_output("JOSE ANTONIO BOLLAIN GONZALEZ"));
}

#[tokio::test]
async fn quit_closes_and_stops_reading() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["q", "list"]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.closed());
    assert_eq!(session.events.last(), Some(&Event::Closed));
    assert_eq!(session.remaining_inputs(), 1);
    assert_eq!(session.command_prompts(), 1);
}

#[tokio::test]
async fn input_ending_mid_question_ends_session_quietly() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["add", "only a question"]);

    run_session(&composition, &mut session).await.unwrap();

    assert!(session.errors().is_empty());
    assert_eq!(session.questions().len(), 2);
    assert!(!session.has_output("Added"));
    assert_eq!(session.command_prompts(), 1);
}

#[tokio::test]
async fn welcome_banner_is_printed_once() {
    let (composition, _) = composition_with(&[]).await;
    let mut session = ScriptedSession::new(["help"]);

    run_session(&composition, &mut session).await.unwrap();

    let banners = session
        .outputs()
        .iter()
        .filter(|l| l.contains("Quiz trainer"))
        .count();
    assert_eq!(banners, 1);
}
