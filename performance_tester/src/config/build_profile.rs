//!
//! The benchmark build profile.
//!

use std::path::Path;

///
/// The cargo profile the benchmark executables are built with.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildProfile {
    /// The custom profile with the performance optimizations.
    #[default]
    Performance,
    /// The standard release profile.
    Release,
}

impl BuildProfile {
    ///
    /// The `cargo build` arguments selecting the profile.
    ///
    pub fn cargo_arguments(self) -> &'static [&'static str] {
        match self {
            Self::Performance => &["--profile", "performance"],
            Self::Release => &["--release"],
        }
    }

    ///
    /// The directory the executables are built into, relative to the workspace.
    ///
    pub fn folder(self) -> &'static Path {
        match self {
            Self::Performance => Path::new("target/performance"),
            Self::Release => Path::new("target/release"),
        }
    }
}

impl std::fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "performance"),
            Self::Release => write!(f, "release"),
        }
    }
}
