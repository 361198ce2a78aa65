use std::process::Command;

use arboard::Clipboard;
use parking_lot::Mutex;

use crate::error::ShareError;
use crate::share::SharedFile;

/// Receiver of a shared file.
pub trait ShareTarget: Send + Sync {
    /// Short name for logs and status lines.
    fn name(&self) -> &'static str;

    fn deliver(&self, file: &SharedFile) -> Result<(), ShareError>;
}

/// Copies the shared file path to the system clipboard.
///
/// The clipboard handle is opened on first use and kept, since some
/// platforms drop the contents together with the handle.
#[derive(Default)]
pub struct ClipboardTarget {
    clipboard: Mutex<Option<Clipboard>>,
}

impl ClipboardTarget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShareTarget for ClipboardTarget {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&self, file: &SharedFile) -> Result<(), ShareError> {
        let mut slot = self.clipboard.lock();
        if slot.is_none() {
            let clipboard = Clipboard::new().map_err(|e| ShareError::Target {
                message: format!("clipboard unavailable: {}", e),
            })?;
            *slot = Some(clipboard);
        }
        let Some(clipboard) = slot.as_mut() else {
            return Err(ShareError::Target {
                message: "clipboard unavailable".to_string(),
            });
        };

        clipboard
            .set_text(file.path.display().to_string())
            .map_err(|e| ShareError::Target {
                message: format!("failed to set clipboard text: {}", e),
            })
    }
}

/// Runs an external program with the shared file path as last argument.
///
/// The MIME type is exported as `SHARE_MIME_TYPE`.
pub struct CommandTarget {
    program: String,
    args: Vec<String>,
}

impl CommandTarget {
    /// `command[0]` is the program, the rest are leading arguments.
    /// `None` for an empty command.
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl ShareTarget for CommandTarget {
    fn name(&self) -> &'static str {
        "command"
    }

    fn deliver(&self, file: &SharedFile) -> Result<(), ShareError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(&file.path)
            .env("SHARE_MIME_TYPE", file.mime)
            .status()
            .map_err(|e| ShareError::Target {
                message: format!("failed to run '{}': {}", self.program, e),
            })?;

        if !status.success() {
            return Err(ShareError::Target {
                message: format!("'{}' exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}
