pub mod console;
pub mod form;
pub mod reader;
pub mod writer;
