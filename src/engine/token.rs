use std::fmt;

use crate::engine::error::AbacusError;

/// Binary operators accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Symbol shown in the trace line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "x",
            Operator::Divide => "/",
        }
    }

    /// Parse a trace symbol. `*` is accepted as an alias for `x`.
    pub fn from_symbol(symbol: &str) -> Result<Self, AbacusError> {
        match symbol {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "x" | "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            _ => Err(AbacusError::UnknownOperator(symbol.to_string())),
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One entry of the expression history.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(String),
    Operator(Operator),
    Equals,
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Number(text) => text,
            Token::Operator(op) => op.symbol(),
            Token::Equals => "=",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }
}

/// Validate a single digit key.
pub fn parse_digit(c: char) -> Result<char, AbacusError> {
    if c.is_ascii_digit() {
        Ok(c)
    } else {
        Err(AbacusError::InvalidDigit(c))
    }
}
