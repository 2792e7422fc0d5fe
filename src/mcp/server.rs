//! MCP stdio server implementation

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::ProtocolHandlers;
use crate::mcp::protocol::JsonRpcResponse;
use crate::mcp::transport::StdioTransport;
use std::future::Future;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, BufReader};
use tokio::sync::mpsc;
use tracing::info;

pub struct McpServer {
    handlers: Arc<ProtocolHandlers>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            handlers: Arc::new(ProtocolHandlers::new(services)),
        }
    }

    /// Run the MCP server on stdin/stdout until EOF or Ctrl+C
    pub async fn run(&self) -> Result<(), McpError> {
        info!("Starting IPinfo MCP server (stdio)");

        let reader = BufReader::new(tokio::io::stdin());
        let shutdown = async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
        };

        self.serve_with_shutdown(reader, tokio::io::stdout(), shutdown)
            .await?;

        info!("MCP server shutting down");
        Ok(())
    }

    /// Serve newline-delimited JSON-RPC from `reader` to `writer` until EOF
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<W, McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.serve_with_shutdown(reader, writer, std::future::pending::<()>())
            .await
    }

    /// Serve until EOF or until `shutdown` completes
    ///
    /// Each request runs on its own task; replies are written in
    /// completion order. Either way out, in-flight replies are drained
    /// before the writer is handed back.
    pub async fn serve_with_shutdown<R, W, S>(
        &self,
        reader: R,
        writer: W,
        shutdown: S,
    ) -> Result<W, McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        let mut lines = reader.lines();
        let mut transport = StdioTransport::new(writer);
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => self.spawn_request(line, tx.clone()),
                        Some(_) => continue,
                        None => break, // EOF
                    }
                }
                Some(response) = rx.recv() => {
                    transport.send_response(response).await?;
                }
                _ = &mut shutdown => break,
            }
        }

        drop(tx);
        while let Some(response) = rx.recv().await {
            transport.send_response(response).await?;
        }

        Ok(transport.into_inner())
    }

    fn spawn_request(&self, line: String, tx: mpsc::UnboundedSender<JsonRpcResponse>) {
        let handlers = Arc::clone(&self.handlers);
        tokio::spawn(async move {
            if let Some(response) = handlers.process_message(&line).await {
                // Receiver only goes away when the server is shutting down
                let _ = tx.send(response);
            }
        });
    }
}
