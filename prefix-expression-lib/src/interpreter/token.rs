use std::fmt;
use std::fmt::Formatter;

/// One of the three variables an expression can refer to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    pub fn from_name(name: &str) -> Option<Variable> {
        match name {
            "x" => Some(Variable::X),
            "y" => Some(Variable::Y),
            "z" => Some(Variable::Z),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        }
    }

    /// Picks this variable's value out of the evaluation arguments.
    pub fn select(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Variable::X => x,
            Variable::Y => y,
            Variable::Z => z,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A discrete part of a prefix expression, as read by the cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    OpenParenthesis,
    CloseParenthesis,
    /// Text shaped like an integer: a leading `-` or digit followed by digits only.
    LiteralInteger(&'a str),
    Variable(Variable),
    /// Any other text, such as an operator symbol.
    Symbol(&'a str),
    EndOfInput,
}

impl<'a> Token<'a> {
    pub fn classify(text: &'a str) -> Token<'a> {
        match text {
            "" => Token::EndOfInput,
            "(" => Token::OpenParenthesis,
            ")" => Token::CloseParenthesis,
            text if is_integer_shaped(text) => Token::LiteralInteger(text),
            text => match Variable::from_name(text) {
                Some(variable) => Token::Variable(variable),
                None => Token::Symbol(text),
            },
        }
    }
}

fn is_integer_shaped(text: &str) -> bool {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if first == '-' || first.is_ascii_digit() => {
            characters.all(|character| character.is_ascii_digit())
        }
        _ => false,
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
            Token::LiteralInteger(text) | Token::Symbol(text) => write!(f, "{}", text),
            Token::Variable(variable) => write!(f, "{}", variable),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}
