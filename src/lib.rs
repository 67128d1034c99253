//! # framegrid
//!
//! Layout and rendering engine for framed, aligned monospace text tables.
//!
//! ## Quick Start
//!
//! ```rust
//! use framegrid::prelude::*;
//!
//! let table = Table::new()
//!     .title(Txt::new("Inventory").align(Alignment::TopCenter))
//!     .with_column(Column::new("Item"))
//!     .with_column(Column::new("Qty").alignment(Alignment::TopRight))
//!     .with_row(["bolts", "120"])
//!     .with_row(["nuts", "8"]);
//!
//! let out = table.render_with(&ROUNDED, FrameOptions::ALL, None).unwrap();
//! assert_eq!(
//!     out,
//!     "╭─────────╮\n\
//!      │Inventory│\n\
//!      ├─────┬───┤\n\
//!      │Item │Qty│\n\
//!      ├─────┼───┤\n\
//!      │bolts│120│\n\
//!      ├─────┼───┤\n\
//!      │nuts │  8│\n\
//!      ╰─────┴───╯\n"
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Width**: Declarative column width policy, resolved once per table
//! - **Wrapping**: Word, character or ellipsis-cut reflow of cell text
//! - **`CellLayout`**: Turns one cell into a rectangular block of lines
//! - **`FrameStyle`**: The 15 border glyphs, validated for alignment
//! - **`FrameOptions`**: Which parts of the frame to draw
//! - **Table**: Owns the data and drives rendering
//!
//! All widths are counted in grapheme clusters, one column each.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assembler;
pub mod cache;
pub mod cells;
pub mod compact;
pub mod export;
pub mod frame;
pub mod layout;
pub mod logging;
pub mod sync;
pub mod table;
pub mod text;
pub mod trim;
pub mod width;
pub mod wrap;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::cache::{CacheStats, RenderCache};
    pub use crate::export::{CsvOptions, to_csv};
    pub use crate::frame::{
        ASCII, DOUBLE, FrameOptions, FrameStyle, Glyph, PADDED, ROUNDED, SINGLE, StyleError,
        get_style,
    };
    pub use crate::layout::CellLayout;
    pub use crate::logging::GridLogger;
    pub use crate::table::{Column, ContentHint, RenderError, RowRanges, Table, render};
    pub use crate::text::{Alignment, HorizontalAlign, Txt, VerticalAlign, Wrapping};
    pub use crate::trim::Trimming;
    pub use crate::width::Width;
}

// Re-export key types at crate root
pub use frame::{FrameOptions, FrameStyle};
pub use table::{Column, RenderError, Table, render};
pub use text::{Alignment, Txt, Wrapping};
pub use width::Width;
