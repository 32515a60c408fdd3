use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unsupported instruction: `{0}`")]
    UnsupportedInstruction(String),

    #[error("Invalid register: `{0}`")]
    InvalidRegister(String),

    #[error("Undefined label: `{0}`")]
    UndefinedLabel(String),

    #[error("Undefined variable: `{0}`")]
    UndefinedVariable(String),

    #[error("Value out of range: `{0}` does not fit in {1} bits")]
    ValueOutOfRange(u32, usize),

    #[error("More argument required")]
    MissingArgument,

    #[error("Cannot parse `{0}` as {1}")]
    ParseArgument(String, String),
}

/// A fatal assembly error, tagged with the source line that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error} (line {line_no})")]
pub struct AsmError {
    /// 1-based line number.
    pub line_no: usize,
    pub raw: String,
    pub error: Error,
}

impl AsmError {
    /// Print the error with the source line it points at.
    pub fn print_diag(&self, path: &str) {
        cprintln!("<red,bold>error</>: {}", self.error);
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, self.line_no);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line_no, self.raw);
        cprintln!("      <blue>|</>");
    }
}
