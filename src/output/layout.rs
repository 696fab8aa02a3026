// Layout through the Graphviz command line tools
//
// `tred` removes edges implied by longer paths, `dot` lays the rest out as
// SVG. Anything either tool writes to stderr aborts the run.

use crate::config::LayoutConfig;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Turns a graph description into a laid-out image
pub trait LayoutEngine {
    /// Transitively reduce the description in `digraph`, returning the
    /// reduced description
    fn reduce(&self, digraph: &Path) -> Result<String>;

    /// Lay out the description in `reduced` and write SVG to `image`
    fn render(&self, reduced: &Path, image: &Path) -> Result<()>;
}

/// The Graphviz `tred` and `dot` executables
#[derive(Debug, Clone)]
pub struct Graphviz {
    tred: String,
    dot: String,
}

impl Graphviz {
    /// Use the configured executables
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            tred: config.tred.clone(),
            dot: config.dot.clone(),
        }
    }
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl LayoutEngine for Graphviz {
    fn reduce(&self, digraph: &Path) -> Result<String> {
        let stdout = run_tool(&self.tred, &[digraph.as_os_str()])?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn render(&self, reduced: &Path, image: &Path) -> Result<()> {
        run_tool(
            &self.dot,
            &[OsStr::new("-Tsvg"), reduced.as_os_str(), OsStr::new("-o"), image.as_os_str()],
        )?;
        Ok(())
    }
}

/// Run a tool to completion and return its stdout.
///
/// Non-empty stderr is fatal even when the exit status is zero.
fn run_tool(program: &str, args: &[&OsStr]) -> Result<Vec<u8>> {
    debug!(program, ?args, "running layout tool");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| Error::tool_launch(program, e))?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostic = stderr.trim();
    if !diagnostic.is_empty() {
        return Err(Error::tool_failed(program, diagnostic));
    }

    if !output.status.success() {
        return Err(Error::tool_failed(program, format!("exited with {}", output.status)));
    }

    Ok(output.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_tool() {
        let layout = Graphviz::new(&LayoutConfig {
            tred: "elm-build-graph-no-such-tred".to_string(),
            dot: "dot".to_string(),
        });
        let result = layout.reduce(Path::new("in.dot"));
        match result {
            Err(Error::ToolLaunch { tool, .. }) => assert_eq!(tool, "elm-build-graph-no-such-tred"),
            other => panic!("expected launch failure, got {:?}", other),
        }
    }

    // `sh <file>` stands in for `tred <file>`: both read the file named by
    // their only argument.
    #[cfg(unix)]
    fn shell_layout() -> Graphviz {
        Graphviz::new(&LayoutConfig {
            tred: "sh".to_string(),
            dot: "sh".to_string(),
        })
    }

    #[cfg(unix)]
    #[test]
    fn test_reduce_returns_stdout() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("reduce.sh");
        fs::write(&script, "echo 'digraph G {'\necho '}'\n").unwrap();

        let reduced = shell_layout().reduce(&script).unwrap();
        assert_eq!(reduced, "digraph G {\n}\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_stderr_is_fatal() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("warn.sh");
        fs::write(&script, "echo 'digraph G {}'\necho 'warning: G has cycle(s)' >&2\n").unwrap();

        match shell_layout().reduce(&script) {
            Err(Error::ToolFailed { tool, diagnostic }) => {
                assert_eq!(tool, "sh");
                assert_eq!(diagnostic, "warning: G has cycle(s)");
            }
            other => panic!("expected tool failure, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_silent_nonzero_exit_is_fatal() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("fail.sh");
        fs::write(&script, "exit 3\n").unwrap();

        let result = shell_layout().reduce(&script);
        assert!(matches!(result, Err(Error::ToolFailed { .. })));
    }
}
