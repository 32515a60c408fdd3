use color_print::cprintln;
use indexmap::IndexMap;

use crate::LineSource;

/// Code labels collected by the first pass: name → program counter.
#[derive(Debug, Default)]
pub struct Labels(IndexMap<String, u16>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Scan the whole source and record every label declaration.
    ///
    /// The program counter ticks once per non-blank line, however many words
    /// that line will emit in the second pass, so label addresses stay in
    /// step with the second pass's counter.
    pub fn collect(src: &mut impl LineSource) -> Labels {
        let mut labels = Labels::new();
        let mut pc: u16 = 0;
        let mut no = 0;
        while let Some(raw) = src.next_line() {
            no += 1;
            let words: Vec<&str> = raw.split_whitespace().collect();
            let Some(first) = words.first() else {
                continue;
            };
            if let Some(name) = first.strip_suffix(':') {
                if labels.insert(name.to_string(), pc).is_some() {
                    cprintln!(
                        "<yellow,bold>warn</>: re-defined label `{}` (line {}), the last definition wins",
                        name,
                        no
                    );
                }
            }
            pc += 1;
        }
        labels
    }

    pub fn insert(&mut self, name: String, pc: u16) -> Option<u16> {
        self.0.insert(name, pc)
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
