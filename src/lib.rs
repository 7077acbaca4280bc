//! # cicd-report
//!
//! Generates the SoundPlus++ CI/CD pipeline documentation as a DOCX file.
//!
//! The crate carries a small WordprocessingML writer (headings, styled runs,
//! grid tables with shaded header rows, page breaks) on top of an OPC
//! package layer, plus a reader for the same subset so a written report can
//! be opened again and inspected.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cicd_report::report::{content, ReportAssembler};
//!
//! let mut assembler = ReportAssembler::new();
//! assembler.set_properties(content::properties());
//! assembler.push_all(&content::plan())?;
//! let doc = assembler.save(content::DEFAULT_OUTPUT)?;
//!
//! for block in doc.outline() {
//!     println!("{}", block);
//! }
//! # Ok::<(), cicd_report::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod opc;
pub mod report;
pub mod xml;

pub use document::{BlockSummary, Document, Paragraph, Run, Table};
pub use error::{Error, Result};
pub use opc::{Package, Part, PartUri};
pub use report::{assemble, Block, ReportAssembler};
