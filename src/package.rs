use std::fmt::Display;

use serde::Deserialize;
use serde_with::{serde_as, DefaultOnNull, OneOrMany};

/// Body of the repository search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub pkgname: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub pkgdesc: String,
    pub repo: String,
    pub pkgver: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub url: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub licenses: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub depends: Vec<String>,
}

/// Body of the AUR RPC `info` endpoint.
#[derive(Debug, Deserialize)]
pub struct AurResponse {
    pub results: Vec<AurPackage>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AurPackage {
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    pub version: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "URL")]
    pub url: String,
    // Older RPC versions send a bare string.
    #[serde_as(as = "DefaultOnNull<OneOrMany<_>>")]
    #[serde(default)]
    pub license: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub depends: Vec<String>,
}

/// Flattened view of a single search result, as printed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    pub name: String,
    pub description: String,
    pub repository: String,
    pub version: String,
    pub url: String,
    pub license: String,
    pub dependencies: String,
}

impl From<SearchResult> for PackageRecord {
    fn from(result: SearchResult) -> Self {
        Self {
            name: result.pkgname,
            description: result.pkgdesc,
            repository: result.repo,
            version: result.pkgver,
            url: result.url,
            license: result.licenses.join(", "),
            dependencies: result.depends.join(", "),
        }
    }
}

impl From<AurPackage> for PackageRecord {
    fn from(package: AurPackage) -> Self {
        Self {
            name: package.name,
            description: package.description,
            repository: "AUR".to_owned(),
            version: package.version,
            url: package.url,
            license: package.license.join(", "),
            dependencies: package.depends.join(", "),
        }
    }
}

impl Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Package Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Repository: {}", self.repository)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "URL: {}", self.url)?;
        writeln!(f, "License: {}", self.license)?;
        write!(f, "Dependencies: {}", self.dependencies)
    }
}

/// Line printed when the official repositories have no match for `name`.
pub fn not_found_message(name: &str) -> String {
    format!("Package '{name}' not found in official repositories.")
}

/// Line printed when neither the official repositories nor the AUR have a match.
pub fn aur_not_found_message(name: &str) -> String {
    format!("Package '{name}' not found in either official repositories or AUR.")
}
