//! Main module for quire library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod testing;
