use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// The LAWD operation set. Discriminants are the 5-bit opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, IntoPrimitive)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum OpKind {
    SETREG = 0b00000,
    ILT = 0b00001,
    ADD = 0b00010,
    SUB = 0b00011,
    SUBI = 0b00100,
    ADDI = 0b00101,
    AND = 0b00110,
    OR = 0b00111,
    ANDI = 0b01000,
    ORI = 0b01001,
    XOR = 0b01010,
    SAR = 0b01110,
    SLL = 0b01111,
    LZ = 0b10000,
    LNZ = 0b10001,
    LEAPAL = 0b10010,
    LEAP = 0b10011,
    PUSH = 0b10100,
    POP = 0b10101,
    LUI = 0b11010,
    RET = 0b11011,
    LOADI = 0b11100,
    LOAD = 0b11101,
    STORE = 0b11111,
}

impl OpKind {
    /// Mnemonic lookup. Case-sensitive: `LOADI` is a pseudo instruction,
    /// not this table's `loadi`.
    pub fn parse(s: &str) -> Result<Self, String> {
        s.parse::<Self>().map_err(|_| format!("Unknown op: {s}"))
    }

    /// The 5-bit opcode field.
    pub fn bits(&self) -> String {
        format!("{:05b}", u8::from(*self))
    }

    pub fn encoding(&self) -> Encoding {
        use OpKind::*;
        match self {
            PUSH | POP | RET => Encoding::Ope,
            SETREG | ILT | ADD | SUB | AND | OR | XOR | LOAD | STORE => Encoding::Reg,
            ADDI | SUBI | ANDI | ORI | LUI | SAR | SLL | LOADI => Encoding::Imm,
            LZ | LNZ | LEAPAL | LEAP => Encoding::Branch,
        }
    }
}

/// Word layout of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// opcode + 11 don't-care bits
    Ope,
    /// opcode + register + 8 don't-care bits
    Reg,
    /// opcode + 3 don't-care bits + 8-bit immediate
    Imm,
    /// opcode + 3 don't-care bits + 8-bit pc-relative offset
    Branch,
}
