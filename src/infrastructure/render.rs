//! 출력 색상 분류(Tone)를 ANSI 스타일로 바꾸는 렌더링 모듈.

use crossterm::style::{Color, Stylize};

use crate::application::ports::Tone;

/// 색상 사용이 꺼져 있으면 원문을 그대로 돌려준다.
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }

    match tone {
        Tone::Plain => text.to_string(),
        Tone::Error => text.red().bold().to_string(),
        other => match tone_color(other) {
            Some(color) => text.with(color).to_string(),
            None => text.to_string(),
        },
    }
}

/// 줄 편집기처럼 전경색만 필요한 곳에서 쓰는 색상 매핑.
pub fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Plain => None,
        Tone::Highlight => Some(Color::Magenta),
        Tone::Success => Some(Color::Green),
        Tone::Question => Some(Color::Red),
        Tone::Accent => Some(Color::Blue),
        Tone::Error => Some(Color::Red),
    }
}

/// 에러 채널 한 줄: `Error` 머리표 + 메시지.
pub fn error_line(message: &str, enabled: bool) -> String {
    format!("{} {message}", paint("Error", Tone::Error, enabled))
}
