//! Clipboard adapters: external commands for the real clipboard, memory for tests.

use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::Mutex;

use fixme_core::errors::{ClipboardError, FixMeResult};
use fixme_core::traits::IClipboard;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Clipboard backed by external commands (`pbpaste`/`pbcopy` on macOS,
/// `xclip` elsewhere).
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    read_cmd: ShellCommand,
    write_cmd: ShellCommand,
    frontmost_app_cmd: Option<ShellCommand>,
}

impl CommandClipboard {
    pub fn new(read_cmd: ShellCommand, write_cmd: ShellCommand) -> Self {
        Self {
            read_cmd,
            write_cmd,
            frontmost_app_cmd: None,
        }
    }

    /// Command whose trimmed stdout names the application that owns the
    /// latest clipboard change.
    pub fn with_frontmost_app_cmd(mut self, cmd: ShellCommand) -> Self {
        self.frontmost_app_cmd = Some(cmd);
        self
    }

    /// Commands for the platform we are running on.
    #[cfg(target_os = "macos")]
    pub fn system() -> Self {
        Self::new(
            ShellCommand::new("pbpaste", &[]),
            ShellCommand::new("pbcopy", &[]),
        )
        .with_frontmost_app_cmd(ShellCommand::new(
            "osascript",
            &[
                "-e",
                "tell application \"System Events\" to get bundle identifier of first application process whose frontmost is true",
            ],
        ))
    }

    /// Commands for the platform we are running on.
    #[cfg(not(target_os = "macos"))]
    pub fn system() -> Self {
        Self::new(
            ShellCommand::new("xclip", &["-selection", "clipboard", "-o"]),
            ShellCommand::new("xclip", &["-selection", "clipboard", "-i"]),
        )
    }
}

impl IClipboard for CommandClipboard {
    fn read(&self) -> FixMeResult<Option<String>> {
        let output = self
            .read_cmd
            .command()
            .stderr(Stdio::null())
            .output()
            .map_err(|e| ClipboardError::Unavailable {
                reason: format!("{}: {e}", self.read_cmd.describe()),
            })?;
        if !output.status.success() {
            // xclip exits non-zero when the clipboard holds no text.
            return Ok(None);
        }
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    fn write(&self, text: &str) -> FixMeResult<()> {
        let write_failed = |reason: String| ClipboardError::WriteFailed {
            reason: format!("{}: {reason}", self.write_cmd.describe()),
        };
        let mut child = self
            .write_cmd
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| write_failed(e.to_string()))?;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                // Reap the child so a failed write leaves no zombie behind.
                let _ = child.kill();
                let _ = child.wait();
                return Err(write_failed(e.to_string()).into());
            }
        }
        let status = child.wait().map_err(|e| write_failed(e.to_string()))?;
        if !status.success() {
            return Err(write_failed(format!("exited with {status}")).into());
        }
        Ok(())
    }

    fn source_app(&self) -> Option<String> {
        let cmd = self.frontmost_app_cmd.as_ref()?;
        let output = cmd.command().stderr(Stdio::null()).output().ok()?;
        if !output.status.success() {
            return None;
        }
        let app = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!app.is_empty()).then_some(app)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    contents: Option<String>,
    source_app: Option<String>,
    writes: Vec<String>,
}

/// In-process clipboard. Records every write made through [`IClipboard`].
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    state: Mutex<MemoryState>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(text: impl Into<String>) -> Self {
        let clipboard = Self::new();
        clipboard.set_contents(text);
        clipboard
    }

    /// Simulate another application copying `text`.
    pub fn set_contents(&self, text: impl Into<String>) {
        self.lock().contents = Some(text.into());
    }

    pub fn clear(&self) {
        self.lock().contents = None;
    }

    pub fn set_source_app(&self, app: Option<&str>) {
        self.lock().source_app = app.map(str::to_string);
    }

    pub fn contents(&self) -> Option<String> {
        self.lock().contents.clone()
    }

    /// Texts written through [`IClipboard::write`], oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl IClipboard for MemoryClipboard {
    fn read(&self) -> FixMeResult<Option<String>> {
        Ok(self.lock().contents.clone())
    }

    fn write(&self, text: &str) -> FixMeResult<()> {
        let mut state = self.lock();
        state.contents = Some(text.to_string());
        state.writes.push(text.to_string());
        Ok(())
    }

    fn source_app(&self) -> Option<String> {
        self.lock().source_app.clone()
    }
}
