use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveTime};

use crate::pwd;

/// Ambient shell state, gathered once per render. The formatter only ever
/// sees this struct, so a render is a pure function of its fields.
pub struct PromptContext {
    pub user: String,
    pub host: String,
    /// Already prettified for display.
    pub cwd: String,
    pub superuser: bool,
    /// Exit statuses of the last pipeline, in stage order.
    pub pipestatus: Vec<i32>,
    pub clock: NaiveTime,
}

impl PromptContext {
    /// Gather the current process environment. `is_superuser` is injected so
    /// hosts without a notion of a superuser can supply `|| false`.
    pub fn gather(
        pipestatus: Vec<i32>,
        pwd_dir_length: usize,
        is_superuser: impl FnOnce() -> bool,
    ) -> Self {
        let user = env::var("USER")
            .or_else(|_| env::var("USERNAME"))
            .unwrap_or_else(|_| "user".to_string());

        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_string());
        let host = match host.split_once('.') {
            Some((short, _)) => short.to_string(),
            None => host,
        };

        let home = dirs::home_dir();
        let cwd = env::current_dir()
            .ok()
            .or_else(|| env::var_os("PWD").map(PathBuf::from))
            .map(|dir| pwd::pretty_path(&dir, home.as_deref(), pwd_dir_length))
            .unwrap_or_default();

        Self {
            user,
            host,
            cwd,
            superuser: is_superuser(),
            pipestatus,
            clock: Local::now().time(),
        }
    }
}

#[cfg(unix)]
pub fn superuser() -> bool {
    nix::unistd::geteuid().is_root()
}

#[cfg(not(unix))]
pub fn superuser() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_uses_injected_probe() {
        let ctx = PromptContext::gather(vec![1], 1, || true);
        assert!(ctx.superuser);
        assert_eq!(ctx.pipestatus, vec![1]);
        assert!(!ctx.user.is_empty());
        assert!(!ctx.host.contains('.'));
    }
}
