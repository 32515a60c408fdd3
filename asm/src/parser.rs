use arch::{
    op::{Encoding, OpKind},
    reg::Reg,
};
use color_print::cformat;

use crate::{error::Error, var::Vars};

// ----------------------------------------------------------------------------
// Tokens

/// Split a line's tokens into an optional leading label and the rest.
/// Only the first token can declare a label, by ending with `:`.
pub fn split_label<'a>(words: &'a [&'a str]) -> (Option<&'a str>, &'a [&'a str]) {
    match words.first().and_then(|w| w.strip_suffix(':')) {
        Some(name) => (Some(name), &words[1..]),
        None => (None, words),
    }
}

// ----------------------------------------------------------------------------
// Code

/// One instruction as written in the source, before labels and variables
/// are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Ope(OpKind),
    Reg(OpKind, Reg),
    Imm(OpKind, u32),
    Branch(OpKind, String),
    Init(String),
    LoadWide(u32),
    SetMem(Addr, Reg, u32),
}

impl Code {
    pub fn parse(op: &str, args: &[&str]) -> Result<Code, Error> {
        // Pseudo instructions are dispatched by name; they have no opcode.
        match op {
            "init" => Ok(Code::Init(str_arg(args, 0)?.to_string())),
            "LOADI" => Ok(Code::LoadWide(int_arg(args, 0)?)),
            "setmem" => Ok(Code::SetMem(
                Addr::parse(str_arg(args, 0)?),
                reg_arg(args, 1)?,
                int_arg(args, 2)?,
            )),
            _ => {
                let op = OpKind::parse(op)
                    .map_err(|_| Error::UnsupportedInstruction(op.to_string()))?;
                Ok(match op.encoding() {
                    Encoding::Ope => Code::Ope(op),
                    Encoding::Reg => Code::Reg(op, reg_arg(args, 0)?),
                    Encoding::Imm => Code::Imm(op, int_arg(args, 0)?),
                    Encoding::Branch => Code::Branch(op, str_arg(args, 0)?.to_string()),
                })
            }
        }
    }

    pub fn cformat(&self) -> String {
        match self {
            Code::Ope(op) => cformat!("<red>{}</>", op),
            Code::Reg(op, reg) => cformat!("<red>{:<7}</><blue>{}</>", op, reg),
            Code::Imm(op, value) => cformat!("<red>{:<7}</><yellow>{}</>", op, value),
            Code::Branch(op, label) => cformat!("<red>{:<7}</><green>{}</>", op, label),
            Code::Init(name) => cformat!("<red>{:<7}</><cyan>{}</>", "init", name),
            Code::LoadWide(value) => cformat!("<red>{:<7}</><yellow>{}</>", "LOADI", value),
            Code::SetMem(addr, reg, value) => {
                let addr = match addr {
                    Addr::Literal(a) => cformat!("<yellow>{}</>", a),
                    Addr::Var(name) => cformat!("<cyan>{}</>", name),
                };
                cformat!("<red>{:<7}</>{} <blue>{}</> <yellow>{}</>", "setmem", addr, reg, value)
            }
        }
    }
}

fn str_arg<'a>(args: &[&'a str], index: usize) -> Result<&'a str, Error> {
    args.get(index).copied().ok_or(Error::MissingArgument)
}

fn reg_arg(args: &[&str], index: usize) -> Result<Reg, Error> {
    let arg = str_arg(args, index)?;
    Reg::parse(arg).map_err(|_| Error::InvalidRegister(arg.to_string()))
}

fn int_arg(args: &[&str], index: usize) -> Result<u32, Error> {
    let arg = str_arg(args, index)?;
    arg.parse()
        .map_err(|_| Error::ParseArgument(arg.to_string(), "integer".to_string()))
}

// ----------------------------------------------------------------------------
// Addr

/// The address operand of `setmem`: a decimal literal or a variable declared
/// with `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addr {
    Literal(u32),
    Var(String),
}

impl Addr {
    fn parse(s: &str) -> Addr {
        match s.parse() {
            Ok(value) => Addr::Literal(value),
            Err(_) => Addr::Var(s.to_string()),
        }
    }

    pub fn resolve(&self, vars: &Vars) -> Result<u32, Error> {
        match self {
            Addr::Literal(value) => Ok(*value),
            Addr::Var(name) => vars
                .get(name)
                .map(u32::from)
                .ok_or_else(|| Error::UndefinedVariable(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_a_leading_label() {
        let words = ["main:", "push"];
        let (label, rest) = split_label(&words);
        assert_eq!(label, Some("main"));
        assert_eq!(rest, ["push"]);
    }

    #[test]
    fn leaves_plain_lines_alone() {
        let words = ["add", "$a"];
        let (label, rest) = split_label(&words);
        assert_eq!(label, None);
        assert_eq!(rest, ["add", "$a"]);
    }

    #[test]
    fn parses_each_category() {
        assert_eq!(Code::parse("push", &[]), Ok(Code::Ope(OpKind::PUSH)));
        assert_eq!(
            Code::parse("add", &["$c"]),
            Ok(Code::Reg(OpKind::ADD, Reg::C))
        );
        assert_eq!(Code::parse("addi", &["5"]), Ok(Code::Imm(OpKind::ADDI, 5)));
        assert_eq!(
            Code::parse("leap", &["loop"]),
            Ok(Code::Branch(OpKind::LEAP, "loop".to_string()))
        );
    }

    #[test]
    fn parses_pseudo_instructions() {
        assert_eq!(
            Code::parse("init", &["x"]),
            Ok(Code::Init("x".to_string()))
        );
        assert_eq!(Code::parse("LOADI", &["4660"]), Ok(Code::LoadWide(4660)));
        assert_eq!(
            Code::parse("setmem", &["400", "$a", "7"]),
            Ok(Code::SetMem(Addr::Literal(400), Reg::A, 7))
        );
        assert_eq!(
            Code::parse("setmem", &["counter", "$b", "10"]),
            Ok(Code::SetMem(Addr::Var("counter".to_string()), Reg::B, 10))
        );
    }

    #[test]
    fn unknown_mnemonics_are_fatal() {
        assert_eq!(
            Code::parse("frob", &["$a"]),
            Err(Error::UnsupportedInstruction("frob".to_string()))
        );
        // the pseudo spelling is not an opcode
        assert_eq!(
            Code::parse("Loadi", &["1"]),
            Err(Error::UnsupportedInstruction("Loadi".to_string()))
        );
    }

    #[test]
    fn bad_operands() {
        assert_eq!(
            Code::parse("add", &["$z"]),
            Err(Error::InvalidRegister("$z".to_string()))
        );
        assert_eq!(Code::parse("add", &[]), Err(Error::MissingArgument));
        assert_eq!(
            Code::parse("addi", &["five"]),
            Err(Error::ParseArgument("five".to_string(), "integer".to_string()))
        );
        assert_eq!(
            Code::parse("addi", &["-5"]),
            Err(Error::ParseArgument("-5".to_string(), "integer".to_string()))
        );
    }

    #[test]
    fn setmem_address_resolution() {
        let mut vars = Vars::new();
        vars.alloc("x");
        assert_eq!(Addr::Literal(400).resolve(&vars), Ok(400));
        assert_eq!(Addr::Var("x".to_string()).resolve(&vars), Ok(384));
        assert_eq!(
            Addr::Var("y".to_string()).resolve(&vars),
            Err(Error::UndefinedVariable("y".to_string()))
        );
    }
}
