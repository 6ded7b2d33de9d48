/// Client-side bound on how long a registration may stay in flight.
pub const SUBMIT_TIMEOUT_MS: u32 = 30_000;

#[cfg(debug_assertions)]
fn default_backend_url() -> &'static str {
    "http://localhost:8001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
fn default_backend_url() -> &'static str {
    ""  // Production URL, same origin
}

/// Backend base URL, taken from `BACKEND_URL` at build time when set.
pub fn get_backend_url() -> &'static str {
    match option_env!("BACKEND_URL") {
        Some(url) if !url.trim().is_empty() => url.trim(),
        _ => default_backend_url(),
    }
}

pub fn register_agent_url() -> String {
    join_api_path(get_backend_url(), "/api/register-agent")
}

fn join_api_path(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
