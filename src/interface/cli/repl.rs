//! 퀴즈 세션 REPL 인터페이스.
//! 터미널/소켓 구분 없이 `SessionIo` 하나 위에서 명령을 한 번에 하나씩 처리한다.

use anyhow::Result;
use tracing::debug;

use crate::application::ports::{SessionIo, Tone};
use crate::domain::error::QuizError;
use crate::interface::cli::composition::AppComposition;

const HELP_LINES: [&str; 10] = [
    "  h|help - Show this help.",
    "  list - List the existing quizzes.",
    "  show <id> - Show the question and the answer of the given quiz.",
    "  add - Add a new quiz interactively.",
    "  delete <id> - Delete the given quiz.",
    "  edit <id> - Edit the given quiz.",
    "  test <id> - Try the given quiz.",
    "  p|play - Play: answer every quiz in random order.",
    "  credits - Credits.",
    "  q|quit - Leave the program.",
];

const AUTHORS: [&str; 1] = ["JOSE ANTONIO BOLLAIN GONZALEZ"];

/// 세션 하나를 종료될 때까지 구동한다.
///
/// 명령 처리 결과와 상관없이(성공이든 실패든) 다음 명령 프롬프트를 다시 띄운다.
/// 입력 종료나 `quit`만 세션을 끝낸다.
pub async fn run_session(composition: &AppComposition, io: &mut dyn SessionIo) -> Result<()> {
    print_welcome(io).await?;

    loop {
        let Some(raw_input) = io.read_command().await? else {
            debug!("session input closed");
            break;
        };
        let input = raw_input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse_repl_command(input) {
            Ok(command) => command,
            Err(unknown) => {
                report_unknown(io, &unknown).await?;
                continue;
            }
        };

        if command == ReplCommand::Quit {
            io.close().await?;
            break;
        }

        if let Err(err) = execute_command(composition, io, command).await {
            if err.ends_session() {
                debug!("session ended while waiting for input");
                break;
            }
            report_error(io, &err).await?;
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    List,
    Show(Option<String>),
    Add,
    Delete(Option<String>),
    Edit(Option<String>),
    Test(Option<String>),
    Play,
    Credits,
    Quit,
}

/// 첫 단어를 소문자로 바꿔 명령을 고른다. 모르는 명령은 그 단어를 `Err`로 돌려준다.
pub fn parse_repl_command(input: &str) -> Result<ReplCommand, String> {
    let mut words = input.split_whitespace();
    let head = words.next().unwrap_or_default().to_lowercase();
    let arg = words.next().map(str::to_string);

    match head.as_str() {
        "h" | "help" => Ok(ReplCommand::Help),
        "list" => Ok(ReplCommand::List),
        "show" => Ok(ReplCommand::Show(arg)),
        "add" => Ok(ReplCommand::Add),
        "delete" => Ok(ReplCommand::Delete(arg)),
        "edit" => Ok(ReplCommand::Edit(arg)),
        "test" => Ok(ReplCommand::Test(arg)),
        "p" | "play" => Ok(ReplCommand::Play),
        "credits" => Ok(ReplCommand::Credits),
        "q" | "quit" => Ok(ReplCommand::Quit),
        _ => Err(head),
    }
}

async fn execute_command(
    composition: &AppComposition,
    io: &mut dyn SessionIo,
    command: ReplCommand,
) -> Result<(), QuizError> {
    match command {
        ReplCommand::Help => print_help(io).await?,
        ReplCommand::List => {
            composition.list_usecase().execute(io).await?;
        }
        ReplCommand::Show(id) => {
            composition.show_usecase().execute(io, id.as_deref()).await?;
        }
        ReplCommand::Add => {
            composition.add_usecase().execute(io).await?;
        }
        ReplCommand::Delete(id) => {
            composition.delete_usecase().execute(id.as_deref()).await?;
        }
        ReplCommand::Edit(id) => {
            composition.edit_usecase().execute(io, id.as_deref()).await?;
        }
        ReplCommand::Test(id) => {
            composition.test_usecase().execute(io, id.as_deref()).await?;
        }
        ReplCommand::Play => {
            composition.play_usecase().execute(io).await?;
        }
        ReplCommand::Credits => print_credits(io).await?,
        ReplCommand::Quit => {}
    }
    Ok(())
}

async fn report_error(io: &mut dyn SessionIo, err: &QuizError) -> Result<()> {
    for line in err.report_lines() {
        io.error(&line).await?;
    }
    Ok(())
}

async fn report_unknown(io: &mut dyn SessionIo, command: &str) -> Result<()> {
    let shown = io.paint(command, Tone::Question);
    io.error(&format!("Unknown command: '{shown}'")).await?;
    let help = io.paint("help", Tone::Success);
    io.log(&format!("Use {help} to see all available commands."))
        .await
}

async fn print_help(io: &mut dyn SessionIo) -> Result<()> {
    io.log("Commands:").await?;
    for line in HELP_LINES {
        io.log(line).await?;
    }
    Ok(())
}

async fn print_credits(io: &mut dyn SessionIo) -> Result<()> {
    io.log("Authors:").await?;
    for author in AUTHORS {
        let name = io.paint(author, Tone::Success);
        io.log(&name).await?;
    }
    Ok(())
}

async fn print_welcome(io: &mut dyn SessionIo) -> Result<()> {
    let title = io.paint(&format!("{:<36}", "Quiz trainer"), Tone::Success);
    let hint = format!("{:<36}", "type help to see the commands");

    io.log("+--------------------------------------+").await?;
    io.log(&format!("| {title} |")).await?;
    io.log(&format!("| {hint} |")).await?;
    io.log("+--------------------------------------+").await
}
