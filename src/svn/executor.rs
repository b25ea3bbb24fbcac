//! svn command executor
//!
//! Handles running svn and capturing its output.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};

use super::constants;

/// Captured result of one svn invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// stdout and stderr, interleaved in the order svn wrote them
    pub output: Vec<u8>,
    /// True when the process exited with status zero
    pub success: bool,
    /// Exit code, if the process exited normally
    pub exit_code: Option<i32>,
}

impl RunOutput {
    pub fn success(output: impl Into<Vec<u8>>) -> Self {
        Self {
            output: output.into(),
            success: true,
            exit_code: Some(0),
        }
    }

    pub fn failure(output: impl Into<Vec<u8>>, exit_code: i32) -> Self {
        Self {
            output: output.into(),
            success: false,
            exit_code: Some(exit_code),
        }
    }

    fn from_status(output: Vec<u8>, status: ExitStatus) -> Self {
        Self {
            output,
            success: status.success(),
            exit_code: status.code(),
        }
    }
}

/// Runs an svn argument vector and returns its combined output
///
/// `Err` means the process could not be run at all.
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> io::Result<RunOutput>;
}

impl<F> CommandRunner for F
where
    F: Fn(&[String]) -> io::Result<RunOutput>,
{
    fn run(&self, args: &[String]) -> io::Result<RunOutput> {
        self(args)
    }
}

/// Runner that spawns the real svn binary
#[derive(Debug, Clone)]
pub struct SvnRunner {
    program: String,
}

impl Default for SvnRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl SvnRunner {
    /// Runner for `svn` on PATH
    pub fn new() -> Self {
        Self::with_program(constants::SVN_COMMAND)
    }

    /// Runner for a specific svn binary
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CommandRunner for SvnRunner {
    fn run(&self, args: &[String]) -> io::Result<RunOutput> {
        // stdout and stderr share one pipe so messages keep their order
        let (mut reader, writer) = io::pipe()?;

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(writer.try_clone()?)
            .stderr(writer);

        let mut child = cmd.spawn()?;
        // The command still holds write ends; drop them or the read never sees EOF
        drop(cmd);

        let output = drain(&mut child, &mut reader)?;
        let status = child.wait()?;

        Ok(RunOutput::from_status(output, status))
    }
}

/// Read the child's output to EOF; on a read error the child is killed and
/// reaped before the error is returned
fn drain(child: &mut Child, reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut output = Vec::new();
    if let Err(err) = reader.read_to_end(&mut output) {
        let _ = child.kill();
        let _ = child.wait();
        return Err(err);
    }
    Ok(output)
}
