//! Main module for py2nb library functionality

pub mod formats;
pub mod lexing;
pub mod pipeline;
pub mod reader;
pub mod testing;
pub mod token;
pub mod transforms;
