// Parser module for extracting module headers from Elm source files

pub mod ast;
pub mod comments;
mod elm;

pub use ast::*;
pub use comments::{strip_comments, Stripped};
pub use elm::{ElmScanner, LineEvent, ScanState};
