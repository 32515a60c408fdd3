//! Two-pass assembler for the LAWD 16-bit processor.
//!
//! The first pass collects label addresses, the second encodes every line
//! against the completed table, so branches may name labels declared later
//! in the source.

pub mod codegen;
pub mod error;
pub mod label;
pub mod parser;
pub mod var;

use codegen::Encoder;
use error::AsmError;
use label::Labels;
use parser::{split_label, Code};

/// Replayable source of assembly lines.
///
/// The assembler scans it twice; restarting must reproduce the same lines.
pub trait LineSource {
    fn restart(&mut self);
    fn next_line(&mut self) -> Option<String>;
}

/// Receives one 16-bit binary word per call, in emission order.
pub trait LineSink {
    fn emit(&mut self, word: &str);
}

impl<F: FnMut(&str)> LineSink for F {
    fn emit(&mut self, word: &str) {
        self(word)
    }
}

/// In-memory line source over a whole program text.
pub struct TextSource {
    lines: Vec<String>,
    pos: usize,
}

impl TextSource {
    pub fn new(text: &str) -> Self {
        TextSource {
            lines: text.lines().map(str::to_string).collect(),
            pos: 0,
        }
    }
}

impl LineSource for TextSource {
    fn restart(&mut self) {
        self.pos = 0;
    }

    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.pos)?.clone();
        self.pos += 1;
        Some(line)
    }
}

/// Run both passes: collect labels over the whole source, restart it, then
/// generate binary words into `sink`.
pub fn assemble(src: &mut impl LineSource, sink: impl LineSink) -> Result<(), AsmError> {
    let labels = Labels::collect(src);
    src.restart();
    generate(src, &labels, sink)
}

/// The second pass: encode every line against a complete label table.
///
/// Each non-blank line consumes exactly one program-counter tick, whether it
/// emits zero words (`init`, label-only lines), one, or several.
pub fn generate(
    src: &mut impl LineSource,
    labels: &Labels,
    mut sink: impl LineSink,
) -> Result<(), AsmError> {
    let mut enc = Encoder::new(labels);
    let mut no = 0;
    while let Some(raw) = src.next_line() {
        no += 1;
        let words: Vec<&str> = raw.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }
        let (_, rest) = split_label(&words);
        let code = match rest.split_first() {
            Some((op, args)) => Some(Code::parse(op, args).map_err(|error| AsmError {
                line_no: no,
                raw: raw.clone(),
                error,
            })?),
            None => None,
        };
        let insts = enc.line(code.as_ref()).map_err(|error| AsmError {
            line_no: no,
            raw: raw.clone(),
            error,
        })?;
        for inst in insts {
            sink.emit(&inst.to_bin());
        }
    }
    Ok(())
}

/// Assemble a whole program text into its binary listing, one word per line.
pub fn assemble_program(text: &str) -> Result<String, AsmError> {
    let mut src = TextSource::new(text);
    let mut words: Vec<String> = Vec::new();
    assemble(&mut src, |w: &str| words.push(w.to_string()))?;
    Ok(words.iter().map(|w| w.clone() + "\n").collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_replays_from_the_start() {
        let mut src = TextSource::new("push\npop");
        assert_eq!(src.next_line(), Some("push".to_string()));
        assert_eq!(src.next_line(), Some("pop".to_string()));
        assert_eq!(src.next_line(), None);
        src.restart();
        assert_eq!(src.next_line(), Some("push".to_string()));
    }

    #[test]
    fn closures_are_sinks() {
        let mut words: Vec<String> = Vec::new();
        let mut src = TextSource::new("push");
        assemble(&mut src, |w: &str| words.push(w.to_string())).unwrap();
        assert_eq!(words, ["1010000000000000"]);
    }
}
