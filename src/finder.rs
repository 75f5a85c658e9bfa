//! Fluent finder API.
//!
//! `ConstructFinder` ties the pieces together: collect source files under
//! the configured locations, drop excluded paths, scan what remains, and
//! return a catalog sorted by fully-qualified name. Nothing is cached;
//! every `find_*` call re-reads the filesystem.

use std::fs;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::construct::{Construct, ConstructKind};
use crate::errors::FinderError;
use crate::exclude::ExcludeSet;
use crate::scanner::{scan, ScanOptions};
use crate::walker::source_files;

/// Finds type declarations under one or more root locations.
///
/// # Examples
///
/// ```no_run
/// use construct_finder::ConstructFinder;
///
/// let classes = ConstructFinder::located_in(["./src"])
///     .exclude(["*Test.php"])
///     .find_classes()
///     .unwrap();
///
/// for class in classes {
///     println!("{class}");
/// }
/// ```
pub struct ConstructFinder {
    locations: Vec<PathBuf>,
    excludes: ExcludeSet,
    options: ScanOptions,
}

impl ConstructFinder {
    /// Create a finder for the given root locations.
    pub fn located_in<I, P>(locations: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            excludes: ExcludeSet::default(),
            options: ScanOptions::default(),
        }
    }

    /// Set wildcard exclusion patterns (`*` matches any substring, all
    /// other characters are literal). Replaces any earlier patterns.
    pub fn exclude<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excludes = ExcludeSet::compile(patterns);
        self
    }

    /// Toggle recognition of `enum` declarations (on by default). With
    /// enum support off, enum declarations are invisible rather than
    /// erroneous, mirroring pre-8.1 grammars.
    pub fn enum_support(mut self, enabled: bool) -> Self {
        self.options.enum_support = enabled;
        self
    }

    /// Find every construct under the configured locations, sorted by
    /// fully-qualified name ascending.
    ///
    /// Files that cannot be read are treated as empty and contribute no
    /// constructs. Duplicate declarations across files all appear.
    pub fn find_all(&self) -> Result<Vec<Construct>, FinderError> {
        let mut files = Vec::new();
        for location in &self.locations {
            files.extend(source_files(location)?);
        }
        files.retain(|path| !self.excludes.is_excluded(path));

        // Per-file scans are independent; the final by-name sort makes the
        // result independent of scan order.
        let mut constructs: Vec<Construct> = files
            .par_iter()
            .map(|path| {
                let source = fs::read_to_string(path).unwrap_or_default();
                scan(&source, &self.options)
            })
            .flatten()
            .collect();

        constructs.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(constructs)
    }

    /// Find all constructs of one kind, preserving name order.
    pub fn find_of_kind(&self, kind: ConstructKind) -> Result<Vec<Construct>, FinderError> {
        let mut constructs = self.find_all()?;
        constructs.retain(|c| c.kind() == kind);
        Ok(constructs)
    }

    pub fn find_classes(&self) -> Result<Vec<Construct>, FinderError> {
        self.find_of_kind(ConstructKind::Class)
    }

    pub fn find_interfaces(&self) -> Result<Vec<Construct>, FinderError> {
        self.find_of_kind(ConstructKind::Interface)
    }

    pub fn find_traits(&self) -> Result<Vec<Construct>, FinderError> {
        self.find_of_kind(ConstructKind::Trait)
    }

    pub fn find_enums(&self) -> Result<Vec<Construct>, FinderError> {
        self.find_of_kind(ConstructKind::Enum)
    }

    /// Name-only projection of [`find_all`](Self::find_all).
    pub fn find_all_names(&self) -> Result<Vec<String>, FinderError> {
        Ok(names_of(self.find_all()?))
    }

    pub fn find_class_names(&self) -> Result<Vec<String>, FinderError> {
        Ok(names_of(self.find_classes()?))
    }

    pub fn find_interface_names(&self) -> Result<Vec<String>, FinderError> {
        Ok(names_of(self.find_interfaces()?))
    }

    pub fn find_trait_names(&self) -> Result<Vec<String>, FinderError> {
        Ok(names_of(self.find_traits()?))
    }

    pub fn find_enum_names(&self) -> Result<Vec<String>, FinderError> {
        Ok(names_of(self.find_enums()?))
    }
}

fn names_of(constructs: Vec<Construct>) -> Vec<String> {
    constructs.into_iter().map(|c| c.name().to_string()).collect()
}
