//! provkit core - hexagonal architecture implementation.
//!
//! Domain and application layers for scaffolding BIQT provider plugins.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           provkit-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Filesystem, TemplateSource)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     provkit-adapters (Infrastructure)   │
//! │  (LocalFilesystem, TemplateDirectory)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProviderName, ProviderLayout, instantiate) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use provkit_core::prelude::*;
//!
//! let name = ProviderName::parse("Iris3").unwrap();
//! let service = ScaffoldService::new(templates, filesystem);
//! let report = service.scaffold(&name, ".").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EntryKind, Outcome, ReportEntry, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, TemplateSource},
    };
    pub use crate::domain::{ProviderLayout, ProviderName, ProviderTemplate, instantiate};
    pub use crate::error::{ProvkitError, ProvkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
