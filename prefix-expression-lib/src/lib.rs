//! Parsing, evaluation and rendering of prefix-notation arithmetic expressions
//! over the variables `x`, `y` and `z`.

pub mod interpreter;
