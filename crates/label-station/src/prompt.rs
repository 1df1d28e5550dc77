use domain::OperatorPrompt;
use std::io::{BufRead, Write};
use std::sync::Mutex;

/// Line-oriented prompt over any reader; the binary wires it to stdin/stderr
pub struct LinePrompt<R> {
    input: Mutex<R>,
}

impl<R: BufRead + Send> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }

    /// Show `label` on stderr and read one line without its line ending
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&self, label: &str) -> Option<String> {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{label}: ");
        let _ = stderr.flush();

        let mut input = self.input.lock().ok()?;
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = line.strip_suffix('\n').unwrap_or(&line);
                let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
                Some(trimmed.to_string())
            }
        }
    }
}

/// End of input cancels; an empty answer is checked like any other
impl<R: BufRead + Send> OperatorPrompt for LinePrompt<R> {
    fn ask_password(&self) -> Option<String> {
        self.read_line("Admin password")
    }
}
