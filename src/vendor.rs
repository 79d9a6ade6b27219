//! Vendor/producer detection from a GEDCOM header's source-system string.
//!
//! Genealogy software identifies itself in the header via `1 SOUR <id>`. The
//! identifier is vendor-chosen and not standardized, so detection here is a
//! best-effort substring match against known vendor identifiers rather than
//! an authoritative lookup.

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A genealogy software vendor recognized from a header's source-system string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Vendor {
    /// Ancestry.com / Ancestry Family Tree
    Ancestry,
    /// FamilySearch (formerly New FamilySearch / Family Tree)
    FamilySearch,
    /// `RootsMagic`
    RootsMagic,
    /// Legacy Family Tree
    Legacy,
    /// Gramps
    Gramps,
    /// `MyHeritage`
    MyHeritage,
    /// Family Tree Maker
    FamilyTreeMaker,
    /// Reunion
    Reunion,
    /// Heredis
    Heredis,
    /// Brother's Keeper
    BrothersKeeper,
    /// No known vendor matched the source-system string.
    #[default]
    Unknown,
}

impl Vendor {
    /// Returns the canonical display name for this vendor.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::Ancestry => "Ancestry",
            Vendor::FamilySearch => "FamilySearch",
            Vendor::RootsMagic => "RootsMagic",
            Vendor::Legacy => "Legacy",
            Vendor::Gramps => "Gramps",
            Vendor::MyHeritage => "MyHeritage",
            Vendor::FamilyTreeMaker => "Family Tree Maker",
            Vendor::Reunion => "Reunion",
            Vendor::Heredis => "Heredis",
            Vendor::BrothersKeeper => "Brother's Keeper",
            Vendor::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detects the producing vendor from a header's source-system (`SOUR`) string.
///
/// Matching is case-insensitive and substring-based, since vendors embed
/// product names and version numbers in the identifier rather than using a
/// fixed token (e.g. `ANCESTRY`, `Ancestry.com Family Trees`, `AFT`).
/// Returns [`Vendor::Unknown`] when nothing recognized is found, including
/// for an empty string.
///
/// # Examples
///
/// ```
/// use ged_io::vendor::{detect_vendor, Vendor};
///
/// assert_eq!(detect_vendor("Ancestry.com Family Trees"), Vendor::Ancestry);
/// assert_eq!(detect_vendor("Gramps 5.1.3"), Vendor::Gramps);
/// assert_eq!(detect_vendor("Some Unheard Of Tool"), Vendor::Unknown);
/// ```
#[must_use]
pub fn detect_vendor(source_system: &str) -> Vendor {
    let needle = source_system.to_ascii_lowercase();

    if needle.is_empty() {
        return Vendor::Unknown;
    }

    if needle.contains("ancestry") || needle.contains("aft") {
        Vendor::Ancestry
    } else if needle.contains("familysearch") || needle.contains("fsftid") {
        Vendor::FamilySearch
    } else if needle.contains("rootsmagic") {
        Vendor::RootsMagic
    } else if needle.contains("legacy") {
        Vendor::Legacy
    } else if needle.contains("gramps") {
        Vendor::Gramps
    } else if needle.contains("myheritage") {
        Vendor::MyHeritage
    } else if needle.contains("family tree maker") || needle.contains("ftm") {
        Vendor::FamilyTreeMaker
    } else if needle.contains("reunion") {
        Vendor::Reunion
    } else if needle.contains("heredis") {
        Vendor::Heredis
    } else if needle.contains("brother") && needle.contains("keeper") {
        Vendor::BrothersKeeper
    } else {
        Vendor::Unknown
    }
}
