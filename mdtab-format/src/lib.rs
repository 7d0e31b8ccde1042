//! Pipe-table formatting and editing helpers for Markdown documents
//!
//!     This crate holds the editor-independent core of an outliner-style Markdown editing
//!     experience. An editor host owns the event loop, the text buffer and the rendering; it
//!     hands this crate a snapshot of the document lines and gets back a batch of line
//!     replacements (and, for tables, a new cursor column) to apply atomically.
//!
//!     TLDR: For host authors:
//!         - Implement [`LineSource`] for your buffer, or build a [`Document`] from the text.
//!         - Call [`TableFormatter::format_at_line`] from a debounced change/selection handler.
//!         - Apply the returned replacements as one batch; an empty batch means nothing to do.
//!         - Nothing is cached between calls, so calling again on the same text is a no-op.
//!
//! Architecture
//!
//!     Everything here is a pure function of the lines it is given. There is no parser, no AST
//!     and no Markdown compliance: the formatter recognizes pipe blocks by shape only, which
//!     is what makes it cheap enough to run on every keystroke.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # FormatError
//!     ├── document.rs             # LineSource, Document, Replacement, Splice
//!     ├── width.rs                # display width + token overlay for cells
//!     ├── rules.rs                # TableRules, CsvRules, DecorationRules
//!     ├── table
//!     │   ├── block.rs            # block detection, fenced code guard
//!     │   ├── row.rs              # row splitting, separator classification
//!     │   ├── layout.rs           # column widths, padding, row rendering
//!     │   ├── cursor.rs           # cursor remapping across a rewrite
//!     │   └── mod.rs              # TableFormatter
//!     ├── csv.rs                  # comma separated block -> pipe table
//!     ├── decorations.rs          # line scanning for host decorations
//!     ├── debounce.rs             # trailing debounce state machine
//!     └── transforms.rs           # whole-text conveniences
//!
//! Core Algorithm
//!
//!     The table formatter locates the block of pipe lines around the target line, splits every
//!     line into trimmed cells, and only proceeds when the block has at least two rows and a
//!     separator row. Column widths are the widest measured cell (never below 3 so alignment
//!     markers fit). Every row is then rendered as `| cell | cell |` with left aligned content,
//!     and only lines whose text actually changed are reported. That last step is the
//!     idempotence guarantee reactive callers rely on.
//!
//!     Width is measured in monospace cells: CJK and fullwidth characters count 2, combining
//!     marks and joiners count 0. Columns holding fullwidth text are padded with ideographic
//!     spaces so the padding has the same glyph metrics as the content around it.
//!
pub mod csv;
pub mod debounce;
pub mod decorations;
pub mod document;
pub mod error;
pub mod rules;
pub mod table;
pub mod transforms;
pub mod width;

pub use document::{Document, LineSource, Replacement, Splice};
pub use error::FormatError;
pub use rules::{CsvRules, DecorationRules, TableRules};
pub use table::{Cursor, TableBlock, TableEdit, TableFormatter};
