pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod token;
pub mod writer;

pub use error::Error;
pub use interpreter::Interpreter;
pub use writer::{BufferWriter, StdoutWriter, Writer};
