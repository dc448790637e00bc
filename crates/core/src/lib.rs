//! # gms-harmonize-core
//!
//! Types and the resolver shared by every gms-harmonize crate.
//!
//! A run collects the vendor-family declarations of an Android project, derives the set of
//! components they need and the highest version any of them asks for, then looks up a release
//! bundle in the catalog that ships all of them together.

pub mod component_key;
pub mod config;
pub mod hook_context;
pub mod hook_error;
pub mod library_entry;
pub mod release_bundle;
pub mod report;
pub mod resolver;
pub mod version_label;

pub use component_key::ComponentKey;
pub use config::Config;
pub use hook_context::{HookContext, StaticHookContext};
pub use hook_error::HookError;
pub use library_entry::LibraryEntry;
pub use release_bundle::{Catalog, ReleaseBundle};
pub use report::{HookReport, Report};
pub use resolver::{Requirements, Resolution, ScanOrder, SearchPass, resolve};
pub use version_label::VersionLabel;
