//! Token stream transforms
//!
//!     The two stages between tokenization and rendering. Both are iterator adapters over
//!     `Result<Token, E>` items: they pull from upstream only when asked for a token, and an
//!     upstream error is handed on in place, so the first error stops whoever collects the
//!     stream.
//!
//!     - [cell_markers]: docstrings and `#%%` comments become cell marker comments.
//!     - [newline_fill]: NEWLINE tokens are inserted for skipped lines.

pub mod cell_markers;
pub mod newline_fill;

pub use cell_markers::{convert_toplevel_docstrings, convert_token, CellMarkers};
pub use newline_fill::{fix_newlines, NewlineFiller};
