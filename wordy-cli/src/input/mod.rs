//! Input handling module

pub mod source;

pub use source::InputSource;
