//! Domain layer
//! 퀴즈 엔티티, 입력 검증 규칙, 출제 진행 상태를 외부 의존성 없이 표현한다.

pub mod error;
pub mod play;
pub mod quiz;
