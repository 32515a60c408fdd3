use arch::{bits, inst::Inst, op::OpKind};

use crate::{
    error::Error,
    label::Labels,
    parser::Code,
    var::Vars,
};

/// The second pass: encodes one line at a time against the complete label
/// table, expanding pseudo instructions and allocating variables as it goes.
pub struct Encoder<'a> {
    labels: &'a Labels,
    vars: Vars,
    pc: u16,
}

impl<'a> Encoder<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        Encoder {
            labels,
            vars: Vars::new(),
            pc: 0,
        }
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Encode one non-blank line, advancing the program counter exactly once.
    /// A label-only line passes `None` and emits nothing.
    pub fn line(&mut self, code: Option<&Code>) -> Result<Vec<Inst>, Error> {
        let insts = match code {
            Some(code) => self.encode(code)?,
            None => vec![],
        };
        self.pc += 1;
        Ok(insts)
    }

    fn encode(&mut self, code: &Code) -> Result<Vec<Inst>, Error> {
        match code {
            Code::Ope(op) => Ok(vec![Inst::Ope(*op)]),
            Code::Reg(op, reg) => Ok(vec![Inst::Reg(*op, *reg)]),
            Code::Imm(op, value) => Ok(vec![Inst::Imm(*op, field(*value, 8)?)]),
            Code::Branch(op, label) => {
                let offset = self.branch_offset(label)?;
                Ok(vec![Inst::Imm(*op, offset)])
            }
            Code::Init(name) => {
                self.vars.alloc(name);
                Ok(vec![])
            }
            Code::LoadWide(value) => {
                let (hi, lo) = wide(*value)?;
                Ok(vec![Inst::Imm(OpKind::LUI, hi), Inst::Imm(OpKind::ORI, lo)])
            }
            Code::SetMem(addr, reg, value) => {
                let (ahi, alo) = wide(addr.resolve(&self.vars)?)?;
                let (vhi, vlo) = wide(*value)?;
                Ok(vec![
                    Inst::Imm(OpKind::LUI, ahi),
                    Inst::Imm(OpKind::ORI, alo),
                    Inst::Reg(OpKind::SETREG, *reg),
                    Inst::Imm(OpKind::LUI, vhi),
                    Inst::Imm(OpKind::ORI, vlo),
                    Inst::Reg(OpKind::STORE, *reg),
                ])
            }
        }
    }

    /// The 8-bit pc-relative offset field for a branch at the current counter.
    fn branch_offset(&self, label: &str) -> Result<String, Error> {
        let target = self
            .labels
            .get(label)
            .ok_or_else(|| Error::UndefinedLabel(label.to_string()))?;
        let delta = i32::from(target) - i32::from(self.pc) - 1;
        if delta >= 0 {
            field(delta as u32, 8)
        } else {
            // Backward leaps encode from delta + 2: the processor has already
            // stepped its counter past the leap when the offset is applied.
            Ok(bits::low_byte(delta + 2))
        }
    }
}

fn field(value: u32, width: usize) -> Result<String, Error> {
    bits::unsigned(value, width).ok_or(Error::ValueOutOfRange(value, width))
}

/// A 16-bit constant as its high and low 8-bit fields.
fn wide(value: u32) -> Result<(String, String), Error> {
    let word = field(value, 16)?;
    let (hi, lo) = word.split_at(8);
    Ok((hi.to_string(), lo.to_string()))
}
