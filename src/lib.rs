//! # mdtoc
//!
//! Create and refresh tables of contents in Markdown files.
//!
//! ## Features
//!
//! - GitHub- and GitLab-compatible anchor slugs, including inline code
//!   spans, emphasis markers, links, HTML, emoji, and non-ASCII headings
//! - Collision numbering for repeated headings (`#setup`, `#setup-1`, ...)
//! - Idempotent in-place rewriting via `<!--TOC-->` placeholder pairs
//! - Heading level validation with per-line diagnostics
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use mdtoc::{TocOptions, create_toc};
//!
//! // Refresh the ToC of a file in place with default settings.
//! let opts = TocOptions::default();
//! let toc_lines = create_toc(Path::new("README.md"), &opts).unwrap();
//! for line in toc_lines {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Working with buffers
//!
//! The whole pipeline is available without touching the filesystem:
//!
//! ```
//! use mdtoc::{TocOptions, generate};
//!
//! let lines = ["# Title", "", "## Usage", "## Usage"];
//! let opts = TocOptions { skip_first_n_lines: 0, ..TocOptions::default() };
//! let outcome = generate(&lines, &opts).unwrap();
//! assert_eq!(outcome.toc_lines[1], "  - [Usage](#usage)");
//! assert_eq!(outcome.toc_lines[2], "  - [Usage](#usage-1)");
//! ```

pub mod error;
pub mod toc;
pub mod walk;

pub use error::{Error, Result};
pub use toc::options::{HorizontalRuleStyle, SlugStyle, TocOptions};
pub use toc::slug::{display_text, encode};
pub use toc::{TOC_TAG, TocOutcome, create_toc, generate};
pub use walk::collect_markdown_files;
