use plantcare_smoke::config::BackendConfig;
use plantcare_smoke::runner::ALOE_VERA_QUESTIONS;

/// Backend settings pointed at a mock server, usually with a short timeout.
pub fn backend_config(base_url: &str, timeout_secs: u64) -> BackendConfig {
    BackendConfig {
        base_url: base_url.to_string(),
        timeout_secs,
    }
}

/// The canonical question list as owned strings, the way the runner takes it.
pub fn canonical_questions() -> Vec<String> {
    ALOE_VERA_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// A local address nothing is listening on. Binding grabs a free port,
/// dropping the listener releases it again.
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
