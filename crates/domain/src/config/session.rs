use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Session cookie
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the session cookie.
    #[serde(default = "d_cookie_name")]
    pub cookie_name: String,
    /// Environment variable holding the session signing secret.
    /// The secret is read **once at startup** and never from the config
    /// file itself, so it stays out of version control. If the env var
    /// is unset or empty, the server mints a random per-process secret
    /// and logs a warning (sessions then do not survive a restart).
    #[serde(default = "d_secret_env")]
    pub secret_env: String,
    /// `Max-Age` attribute of the session cookie, in seconds.
    #[serde(default = "d_max_age")]
    pub cookie_max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: d_cookie_name(),
            secret_env: d_secret_env(),
            cookie_max_age_secs: d_max_age(),
        }
    }
}

// ── serde default helpers ───────────────────────────────────────────

fn d_cookie_name() -> String {
    "session".into()
}
fn d_secret_env() -> String {
    "SV_SESSION_SECRET".into()
}
fn d_max_age() -> u64 {
    // 14 days.
    1_209_600
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
