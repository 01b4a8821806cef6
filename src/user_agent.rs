//! User-Agent header for admin API requests.
//!
//! Lets PocketBase request logs tell bootstrap traffic apart from the app's.

use std::sync::OnceLock;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string, e.g.
/// `pocketbase-bootstrap/0.1.0 (linux/x86_64)`.
pub(crate) fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} ({}/{})",
            TOOL_NAME,
            TOOL_VERSION,
            os_name(),
            std::env::consts::ARCH
        )
    })
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
