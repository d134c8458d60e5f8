//! 터미널 한 줄 입력기.
//! TTY에서는 raw 모드로 직접 편집해 초기값(prefill)을 수정할 수 있게 하고,
//! 그 외에는 일반 라인 입력으로 대체한다.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 레이블을 띄우고 한 줄을 읽는다. 입력 종료(Ctrl-D/Ctrl-C/EOF)는 `None`.
/// - TTY + 지원 터미널: prefill을 편집 가능한 초기값으로 둔다
/// - non-TTY/미지원 터미널: 일반 라인 입력(prefill 무시)
pub fn read_line(label: &str, color: Option<Color>, prefill: Option<&str>) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(label, color);
    }

    match read_line_interactive(label, color, prefill.unwrap_or("")) {
        Ok(v) => Ok(v),
        Err(err) => {
            debug!("interactive input failed, falling back: {err:#}");
            read_line_fallback(label, color)
        }
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 편집을 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(label: &str, color: Option<Color>) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    match color {
        Some(color) => {
            execute!(stdout, SetForegroundColor(color))?;
            write!(stdout, "{label}")?;
            execute!(stdout, ResetColor)?;
        }
        None => write!(stdout, "{label}")?,
    }
    stdout.flush()?;

    let mut buf = Vec::new();
    let read = io::stdin().lock().read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(decode_line(&buf)))
}

fn read_line_interactive(label: &str, color: Option<Color>, initial: &str) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter()?;

    let mut input = initial.to_string();
    let mut cursor_chars = input.chars().count();

    loop {
        render_line(&mut stdout, label, color, &input, cursor_chars)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor_chars = 0;
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // 빈 줄에서만 입력 종료로 취급한다.
                        if input.is_empty() {
                            finish_line(&mut stdout)?;
                            return Ok(None);
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout)?;
                        return Ok(None);
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

fn render_line(
    stdout: &mut io::Stdout,
    label: &str,
    color: Option<Color>,
    input: &str,
    cursor_chars: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((80, 24));
    let width = (w as usize).max(20);
    let label_width = display_width(label);
    // 커서 자리를 위해 한 칸을 남긴다.
    let available = width.saturating_sub(label_width + 1);
    let shown = tail_with_ellipsis_display(input, available);

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    if let Some(color) = color {
        execute!(stdout, SetForegroundColor(color))?;
    }
    write!(stdout, "{label}")?;
    execute!(stdout, ResetColor)?;
    write!(stdout, "{shown}")?;

    let col = label_width + input_cursor_col(input, cursor_chars, available);
    execute!(
        stdout,
        cursor::MoveToColumn(col.min(width.saturating_sub(1)) as u16),
        cursor::Show
    )?;
    stdout.flush()?;
    Ok(())
}

fn finish_line(stdout: &mut io::Stdout) -> Result<()> {
    // raw 모드에서는 개행이 캐리지 리턴을 포함하지 않는다.
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn input_cursor_col(input: &str, cursor_chars: usize, available: usize) -> usize {
    let before_cursor: String = input.chars().take(cursor_chars).collect();
    if display_width(input) <= available {
        return display_width(&before_cursor);
    }

    // 넘치는 입력은 끝부분만 보여주므로 커서를 끝쪽에 맞춘다.
    display_width(&tail_with_ellipsis_display(input, available))
}

/// 폭을 넘는 입력은 `...` 뒤에 끝부분만 남긴다.
fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0usize;
    let cut = text
        .char_indices()
        .rev()
        .take_while(|(_, ch)| {
            used += char_display_width(*ch);
            used <= budget
        })
        .last()
        .map_or(text.len(), |(idx, _)| idx);
    format!("...{}", &text[cut..])
}

/// 줄 끝 개행을 떼고, UTF-8이 아닌 바이트는 대체 문자로 바꾼다.
fn decode_line(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches(['\n', '\r'])
        .to_string()
}

// unicode-width 크레이트를 사용하여 정확한 터미널 표시 폭을 계산한다.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let at = byte_offset(input, char_idx);
    input.insert(at, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_offset(input, char_idx);
    if let Some(ch) = input[start..].chars().next() {
        input.replace_range(start..start + ch.len_utf8(), "");
    }
}

/// 문자 인덱스를 바이트 오프셋으로 바꾼다. 범위를 넘으면 끝.
fn byte_offset(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map_or(input.len(), |(idx, _)| idx)
}
