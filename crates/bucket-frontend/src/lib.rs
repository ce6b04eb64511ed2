pub mod ast;
pub mod lex;
pub mod objects;
pub mod parse;
