use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// The LAWD register file: `$a` through `$h`, 3-bit codes in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, IntoPrimitive)]
#[repr(u8)]
pub enum Reg {
    #[strum(serialize = "$a")]
    A,
    #[strum(serialize = "$b")]
    B,
    #[strum(serialize = "$c")]
    C,
    #[strum(serialize = "$d")]
    D,
    #[strum(serialize = "$e")]
    E,
    #[strum(serialize = "$f")]
    F,
    #[strum(serialize = "$g")]
    G,
    #[strum(serialize = "$h")]
    H,
}

impl Reg {
    pub fn parse(s: &str) -> Result<Self, String> {
        s.parse::<Self>().map_err(|_| format!("Unknown reg name: {s}"))
    }

    /// The 3-bit register field.
    pub fn bits(&self) -> String {
        format!("{:03b}", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(Reg::parse("$a"), Ok(Reg::A));
        assert_eq!(Reg::parse("$h"), Ok(Reg::H));
        assert!(Reg::parse("$z").is_err());
        assert!(Reg::parse("a").is_err());
    }

    #[test]
    fn codes_are_in_order() {
        assert_eq!(Reg::A.bits(), "000");
        assert_eq!(Reg::B.bits(), "001");
        assert_eq!(Reg::E.bits(), "100");
        assert_eq!(Reg::H.bits(), "111");
    }

    #[test]
    fn display_keeps_the_sigil() {
        assert_eq!(Reg::C.to_string(), "$c");
    }
}
