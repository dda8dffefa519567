/// Decoded value carried by NUMBER and STRING tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(f64),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", s),
            Literal::Num(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{:.0}", n),
            Literal::Num(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_numbers_drop_the_fraction() {
        assert_eq!(Literal::Num(123.0).to_string(), "123");
        assert_eq!(Literal::Num(0.0).to_string(), "0");
        assert_eq!(Literal::Num(10.25).to_string(), "10.25");
    }

    #[test]
    fn strings_print_verbatim() {
        assert_eq!(Literal::Str("a\\nb".into()).to_string(), "a\\nb");
    }
}
