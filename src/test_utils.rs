#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::config::{Config, SearchConfig};
    use crate::error::SearchError;
    use crate::search::SearchBackend;
    use crate::suggestion::SuggestionItem;

    pub fn test_app() -> App {
        App::new(&Config::default()).unwrap()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn items(entries: &[(&str, &str, &str)]) -> Vec<SuggestionItem> {
        entries
            .iter()
            .map(|(text, kind, id)| SuggestionItem::new(*text, *kind, *id))
            .collect()
    }

    pub fn search_config(base_url: &str) -> SearchConfig {
        SearchConfig {
            base_url: base_url.to_string(),
            ..SearchConfig::default()
        }
    }

    /// Client that ignores proxy settings from the environment
    pub fn direct_http() -> reqwest::Client {
        reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    /// Serve one canned HTTP response for every connection on a local port
    ///
    /// Returns the base URL and a channel yielding each request line
    /// (`GET /api/search?q=abc HTTP/1.1`).
    pub async fn serve_fixture(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (request_tx, request_rx) = unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let request_line = request.lines().next().unwrap_or_default().to_string();
                let _ = request_tx.send(request_line);

                let response = format!(
                    "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}", addr), request_rx)
    }

    /// Backend answering each query after a fixed delay
    ///
    /// Queries listed in `replies` get their scripted outcome; anything else
    /// gets an empty list.
    pub struct ScriptedBackend {
        pub replies: Vec<(String, Duration, Result<Vec<SuggestionItem>, SearchError>)>,
    }

    impl SearchBackend for ScriptedBackend {
        fn search(
            &self,
            query: &str,
        ) -> impl std::future::Future<Output = Result<Vec<SuggestionItem>, SearchError>> + Send
        {
            let (delay, outcome) = self
                .replies
                .iter()
                .find(|(q, _, _)| q == query)
                .map(|(_, delay, outcome)| (*delay, outcome.clone()))
                .unwrap_or((Duration::ZERO, Ok(Vec::new())));
            async move {
                tokio::time::sleep(delay).await;
                outcome
            }
        }
    }
}
