use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A complete résumé record.
///
/// Field names mirror the JSON résumé document (camelCase on the wire).
/// The contact fields and `location` must be present in the source
/// document; every list defaults to empty when its key is missing, so
/// downstream code never sees null collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub name: String,
    pub label: String,
    pub email: String,
    pub phone: String,
    pub location: Address,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub profiles: Vec<Profile>,

    #[serde(default)]
    pub work: Vec<Job>,

    #[serde(default)]
    pub education: Vec<EducationProgram>,

    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Resume {
    /// Deserializes a résumé record from JSON text.
    ///
    /// Empty or whitespace-only input is rejected before parsing.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(serde_json::from_str(text)?)
    }
}

/// A postal address. Every field is optional; renderers substitute the
/// empty string for anything missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// One work-experience entry.
///
/// Dates are plain calendar dates (`YYYY-MM-DD`); a missing `endDate`
/// means the position is current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub position: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default)]
    pub location: Address,

    #[serde(default)]
    pub highlights: Vec<String>,
}

/// One education entry (degree, certificate, program).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationProgram {
    #[serde(default)]
    pub institution: String,

    #[serde(default)]
    pub area: String,

    #[serde(default)]
    pub study_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub location: Address,

    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A named skill with optional keyword qualifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A social or professional network profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub network: String,

    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub url: String,
}
