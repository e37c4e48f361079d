//! Process invocation with captured output.

use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus};

/// Output of a finished process.
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Stdout followed by stderr.
    ///
    /// Some tools print their version banner to stderr.
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Run `program` with `args` and capture its output.
///
/// Errors only when the process could not be started; a non-zero exit is a
/// normal [`CapturedOutput`].
pub fn capture<S: AsRef<OsStr>>(program: &OsStr, args: &[S]) -> io::Result<CapturedOutput> {
    let output = Command::new(program).args(args).output()?;
    Ok(CapturedOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
