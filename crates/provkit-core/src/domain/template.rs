//! Provider templates and placeholder substitution.
//!
//! Templates are opaque text. The only special content is two literal
//! tokens; everything else, including near-misses such as `newprovider` or
//! `NEWPROVIDER`, passes through untouched.

use std::fmt;

use crate::domain::ProviderName;

/// Placeholder for the provider class name.
pub const CLASS_NAME_TOKEN: &str = "NewProvider";

/// Placeholder for the header-guard macro.
pub const HEADER_GUARD_TOKEN: &str = "NEWPROVIDER_H";

/// The four files every provider is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderTemplate {
    /// C++ class declaration.
    Header,
    /// C++ class implementation and the exported `provider_eval` entry point.
    Source,
    /// JSON metadata read by the host.
    Descriptor,
    /// CMake build file.
    BuildFile,
}

impl ProviderTemplate {
    /// All templates, in instantiation order.
    pub const ALL: [ProviderTemplate; 4] = [
        Self::Header,
        Self::Source,
        Self::Descriptor,
        Self::BuildFile,
    ];

    /// File name inside the templates directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Header => "Provider.h",
            Self::Source => "Provider.cpp",
            Self::Descriptor => "descriptor.json",
            Self::BuildFile => "CMakeLists.txt",
        }
    }

    /// File name of the instantiated copy inside the provider directory.
    pub fn target_file_name(&self, name: &ProviderName) -> String {
        match self {
            Self::Header => format!("{name}.h"),
            Self::Source => format!("{name}.cpp"),
            Self::Descriptor | Self::BuildFile => self.file_name().to_string(),
        }
    }
}

impl fmt::Display for ProviderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Instantiate template text for a provider.
///
/// Every `NewProvider` becomes the raw name, then every `NEWPROVIDER_H`
/// becomes the header guard. The two passes run in that order.
pub fn instantiate(template: &str, name: &ProviderName) -> String {
    template
        .replace(CLASS_NAME_TOKEN, name.as_str())
        .replace(HEADER_GUARD_TOKEN, &name.header_guard())
}
