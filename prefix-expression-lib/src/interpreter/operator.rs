use std::fmt;
use std::fmt::Formatter;

/// A mathematical operator that can head an operation in a prefix expression.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Negate,
    Average5,
    Median3,
    ArithmeticMean,
    GeometricMean,
    HarmonicMean,
}

/// How many operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many operands.
    Fixed(usize),
    /// One or more operands, terminated by the closing parenthesis.
    Variadic,
}

impl Arity {
    pub fn accepts(&self, operand_count: usize) -> bool {
        match self {
            Arity::Fixed(arity) => *arity == operand_count,
            Arity::Variadic => operand_count >= 1,
        }
    }
}

/// A pure function reducing the evaluated operands of an operation to a single value.
pub type Reduction = fn(&[f64]) -> f64;

pub static OPERATORS: [Operator; 10] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
    Operator::Negate,
    Operator::Average5,
    Operator::Median3,
    Operator::ArithmeticMean,
    Operator::GeometricMean,
    Operator::HarmonicMean,
];

impl Operator {
    /// Looks up the operator written as `symbol`, if there is one.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        OPERATORS
            .iter()
            .copied()
            .find(|operator| operator.symbol() == symbol)
    }

    /// The text used for the operator in both prefix and postfix form.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Negate => "negate",
            Operator::Average5 => "avg5",
            Operator::Median3 => "med3",
            Operator::ArithmeticMean => "arith-mean",
            Operator::GeometricMean => "geom-mean",
            Operator::HarmonicMean => "harm-mean",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operator::Negate => Arity::Fixed(1),
            Operator::Add | Operator::Subtract | Operator::Multiply | Operator::Divide => {
                Arity::Fixed(2)
            }
            Operator::Median3 => Arity::Fixed(3),
            Operator::Average5 => Arity::Fixed(5),
            Operator::ArithmeticMean | Operator::GeometricMean | Operator::HarmonicMean => {
                Arity::Variadic
            }
        }
    }

    pub fn reduction(&self) -> Reduction {
        match self {
            Operator::Add => sum,
            Operator::Subtract => |operands: &[f64]| operands[0] - operands[1],
            Operator::Multiply => product,
            Operator::Divide => |operands: &[f64]| operands[0] / operands[1],
            Operator::Negate => |operands: &[f64]| -operands[0],
            Operator::Average5 | Operator::ArithmeticMean => arithmetic_mean,
            Operator::Median3 => median_of_three,
            Operator::GeometricMean => geometric_mean,
            Operator::HarmonicMean => harmonic_mean,
        }
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// The operands must satisfy [`Operator::arity`]; division by zero and other
    /// edge cases follow IEEE-754 instead of failing.
    pub fn evaluate(&self, operands: &[f64]) -> f64 {
        (self.reduction())(operands)
    }
}

fn sum(operands: &[f64]) -> f64 {
    operands.iter().fold(0.0, |sum, operand| sum + operand)
}

fn product(operands: &[f64]) -> f64 {
    operands.iter().fold(1.0, |product, operand| product * operand)
}

fn arithmetic_mean(operands: &[f64]) -> f64 {
    sum(operands) / operands.len() as f64
}

fn geometric_mean(operands: &[f64]) -> f64 {
    f64::powf(product(operands).abs(), 1.0 / operands.len() as f64)
}

fn harmonic_mean(operands: &[f64]) -> f64 {
    let reciprocal_sum = operands
        .iter()
        .fold(0.0, |sum, operand| sum + 1.0 / operand);
    operands.len() as f64 / reciprocal_sum
}

fn is_between(low: f64, value: f64, high: f64) -> bool {
    low <= value && value <= high
}

// Checked in argument order so that duplicates resolve to the first match.
fn median_of_three(operands: &[f64]) -> f64 {
    let (a, b, c) = (operands[0], operands[1], operands[2]);
    if is_between(b, a, c) || is_between(c, a, b) {
        a
    } else if is_between(a, b, c) || is_between(c, b, a) {
        b
    } else {
        c
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
