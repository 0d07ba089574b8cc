//! Line-oriented interactive prediction loop.

use std::io::{self, BufRead, Write};

use crate::classifier::Classifier;

pub const PROMPT: &str = "> ";

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

/// Anything that can turn a title into a category label.
pub trait Predict {
    fn predict_label(&self, title: &str) -> String;
}

impl Predict for Classifier {
    fn predict_label(&self, title: &str) -> String {
        self.predict(title).to_string()
    }
}

/// Reads titles from `input` until EOF or a quit command, writing one
/// prediction per non-empty line to `output`.
///
/// Every read is preceded by [`PROMPT`]. Blank lines are skipped and the
/// loop prompts again. Returns the number of predictions made.
pub fn run<P, R, W>(model: &P, input: R, mut output: W) -> io::Result<usize>
where
    P: Predict + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    let mut predictions = 0;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let title = line.trim();
        if title.is_empty() {
            continue;
        }
        if is_quit_command(title) {
            break;
        }

        let label = model.predict_label(title);
        log::debug!("Predicted {:?} for {:?}", label, title);
        writeln!(output, "Predicted category: {}", label)?;
        predictions += 1;
    }

    Ok(predictions)
}

fn is_quit_command(input: &str) -> bool {
    QUIT_COMMANDS.iter().any(|cmd| input.eq_ignore_ascii_case(cmd))
}
