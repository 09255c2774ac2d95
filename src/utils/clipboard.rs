//! Write-only clipboard sink.
//!
//! Text is piped through whichever platform clipboard tool is available.
//! Last writer wins; there is no contention handling and nothing is ever
//! read back.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("cmd", &["/C", "clip"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Write `text` to the system clipboard.
pub fn write(text: &str) -> Result<(), String> {
    for (cmd, args) in CANDIDATES {
        if pipe_through(cmd, args, text).is_ok() {
            return Ok(());
        }
    }
    debug!("no working clipboard command among {CANDIDATES:?}");
    Err("No clipboard command found (install wl-copy, xclip, or xsel)".to_string())
}

fn pipe_through(cmd: &str, args: &[&str], input: &str) -> Result<(), String> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|_| format!("Clipboard command `{cmd}` not available"))?;

    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(input.as_bytes());
    }

    match child.wait() {
        Ok(status) if status.success() => Ok(()),
        _ => Err(format!("Clipboard command `{cmd}` failed")),
    }
}
