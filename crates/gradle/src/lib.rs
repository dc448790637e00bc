//! # gms-harmonize-gradle
//!
//! Reads and rewrites the library declarations of a generated Android `project.properties`.
//!
//! Declarations look like `cordova.system.library.N=<group>:<component>:<version>`. Those of
//! the configured vendor family are moved to one shared release version; everything else in
//! the file is kept verbatim.

pub mod extractor;
pub mod harmonize;
pub mod rewriter;

pub use extractor::{Extraction, extract};
pub use harmonize::{Harmonization, harmonize_properties};
pub use rewriter::rewrite;
