//! TCP 소켓으로 퀴즈 세션을 제공하는 서버.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::infrastructure::session::SocketSession;
use crate::interface::cli::{AppComposition, run_session};

/// 주소에 바인딩하고 연결을 받는다. 정상적으로는 반환하지 않는다.
pub async fn serve(composition: Arc<AppComposition>, bind: &str, color: bool) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr().context("failed to read local address")?;
    println!("quiz server listening on {addr}");

    serve_listener(listener, composition, color).await
}

/// 이미 바인딩된 리스너에서 연결마다 독립 세션 태스크를 띄운다.
pub async fn serve_listener(
    listener: TcpListener,
    composition: Arc<AppComposition>,
    color: bool,
) -> Result<()> {
    loop {
        let (stream, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        let composition = Arc::clone(&composition);

        tokio::spawn(async move {
            info!(%peer, "session opened");
            let mut session = SocketSession::new(stream, color);
            match run_session(&composition, &mut session).await {
                Ok(()) => info!(%peer, "session closed"),
                Err(err) => warn!(%peer, "session ended with error: {err:#}"),
            }
        });
    }
}
