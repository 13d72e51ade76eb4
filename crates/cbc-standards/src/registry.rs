#![deny(unsafe_code)]

use std::collections::BTreeMap;

use cbc_model::{Direction, ParameterSpec};

use crate::assets::{MANIFEST_TOML, asset_for_path};
use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::loaders::{parse_lookup_csv, parse_panel_csv};
use crate::manifest::{Manifest, ManifestFile};

const REQUIRED_ROLES: &[&str] = &[
    "reference_ranges",
    "reference_links",
    "advice_low",
    "advice_high",
    "exercise_plan",
];

/// Load-time summary counts, used by the CLI panel listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StandardsSummary {
    pub panel_pin: String,
    pub parameter_count: usize,
    pub link_count: usize,
    pub advice_low_count: usize,
    pub advice_high_count: usize,
}

/// The verified, parsed standards tables. Built once at startup and shared
/// by reference; read-only afterwards.
#[derive(Debug, Clone)]
pub struct StandardsRegistry {
    manifest: Manifest,
    panel: Vec<ParameterSpec>,
    links: BTreeMap<String, String>,
    advice_low: BTreeMap<String, String>,
    advice_high: BTreeMap<String, String>,
    exercise_plan: String,
}

impl StandardsRegistry {
    /// Verify every embedded asset against its manifest pin, parse the
    /// tables, and validate the panel invariants. Any failure here is a
    /// packaging or configuration defect and aborts startup.
    pub fn load() -> Result<Self, StandardsError> {
        let manifest: Manifest =
            toml::from_str(MANIFEST_TOML).map_err(|source| StandardsError::Toml { source })?;
        validate_roles(&manifest)?;

        for file in &manifest.files {
            verify_asset(file)?;
        }

        let panel = parse_panel_csv(
            "cbc_reference_ranges.csv",
            role_asset(&manifest, "reference_ranges")?,
        )?;
        validate_panel(&panel)?;

        let links = build_lookup(
            "reference_links.csv",
            role_asset(&manifest, "reference_links")?,
            &panel,
        )?;
        let advice_low = build_lookup(
            "advice_low.csv",
            role_asset(&manifest, "advice_low")?,
            &panel,
        )?;
        let advice_high = build_lookup(
            "advice_high.csv",
            role_asset(&manifest, "advice_high")?,
            &panel,
        )?;
        let exercise_plan = role_asset(&manifest, "exercise_plan")?
            .trim_end()
            .to_string();

        Ok(Self {
            manifest,
            panel,
            links,
            advice_low,
            advice_high,
            exercise_plan,
        })
    }

    /// The fixed CBC panel, in canonical iteration order.
    pub fn panel(&self) -> &[ParameterSpec] {
        &self.panel
    }

    /// Look up a parameter spec by canonical name.
    pub fn range_for(&self, name: &str) -> Option<&ParameterSpec> {
        self.panel.iter().find(|spec| spec.name == name)
    }

    /// Educational link for a canonical parameter name.
    pub fn link_for(&self, name: &str) -> Option<&str> {
        self.links.get(name).map(String::as_str)
    }

    /// Dietary guidance for a canonical parameter name and direction.
    pub fn advice_for(&self, name: &str, direction: Direction) -> Option<&str> {
        let table = match direction {
            Direction::Deficiency => &self.advice_low,
            Direction::Elevation => &self.advice_high,
        };
        table.get(name).map(String::as_str)
    }

    /// The static exercise plan text, independent of report data.
    pub fn exercise_plan(&self) -> &str {
        &self.exercise_plan
    }

    pub fn summary(&self) -> StandardsSummary {
        StandardsSummary {
            panel_pin: self.manifest.pins.panel.clone(),
            parameter_count: self.panel.len(),
            link_count: self.links.len(),
            advice_low_count: self.advice_low.len(),
            advice_high_count: self.advice_high.len(),
        }
    }
}

fn validate_roles(manifest: &Manifest) -> Result<(), StandardsError> {
    let mut seen = Vec::new();
    for file in &manifest.files {
        if seen.contains(&file.role.as_str()) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }
        seen.push(file.role.as_str());
    }
    for role in REQUIRED_ROLES {
        if !seen.contains(role) {
            return Err(StandardsError::MissingRole {
                role: (*role).to_string(),
            });
        }
    }
    Ok(())
}

fn verify_asset(file: &ManifestFile) -> Result<(), StandardsError> {
    let contents = asset_for_path(&file.path).ok_or_else(|| StandardsError::MissingAsset {
        path: file.path.clone(),
    })?;
    let actual = sha256_hex(contents.as_bytes());
    if !actual.eq_ignore_ascii_case(&file.sha256) {
        return Err(StandardsError::Sha256Mismatch {
            path: file.path.clone(),
            expected: file.sha256.clone(),
            actual,
        });
    }
    Ok(())
}

fn role_asset(manifest: &Manifest, role: &str) -> Result<&'static str, StandardsError> {
    let file = manifest
        .files
        .iter()
        .find(|file| file.role == role)
        .ok_or_else(|| StandardsError::MissingRole {
            role: role.to_string(),
        })?;
    asset_for_path(&file.path).ok_or_else(|| StandardsError::MissingAsset {
        path: file.path.clone(),
    })
}

fn validate_panel(panel: &[ParameterSpec]) -> Result<(), StandardsError> {
    let mut names = Vec::with_capacity(panel.len());
    for spec in panel {
        if spec.low > spec.high {
            return Err(StandardsError::InvalidRange {
                name: spec.name.clone(),
                low: spec.low,
                high: spec.high,
            });
        }
        if spec.occurrence == 0 {
            return Err(StandardsError::Csv {
                path: "cbc_reference_ranges.csv".to_string(),
                message: format!("parameter {} has occurrence 0 (must be 1-based)", spec.name),
            });
        }
        if names.contains(&spec.name.as_str()) {
            return Err(StandardsError::DuplicateParameter {
                name: spec.name.clone(),
            });
        }
        names.push(spec.name.as_str());
    }
    Ok(())
}

fn build_lookup(
    path: &str,
    contents: &str,
    panel: &[ParameterSpec],
) -> Result<BTreeMap<String, String>, StandardsError> {
    let pairs = parse_lookup_csv(path, contents)?;
    let mut map = BTreeMap::new();
    for (name, value) in pairs {
        if !panel.iter().any(|spec| spec.name == name) {
            return Err(StandardsError::UnknownParameter {
                table: path.to_string(),
                name,
            });
        }
        if map.insert(name.clone(), value).is_some() {
            return Err(StandardsError::DuplicateParameter { name });
        }
    }
    Ok(map)
}
