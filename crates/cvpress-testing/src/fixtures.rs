//! Sample résumé documents and placement helpers.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// A fully populated résumé covering every rendered section.
pub const SAMPLE_RESUME_JSON: &str = r#"{
  "name": "Ada Lovelace",
  "label": "Software Engineer",
  "email": "ada@example.com",
  "phone": "+1 (555) 123-4567",
  "website": "https://ada.example.com",
  "summary": "Engineer with a decade of systems experience.",
  "location": {
    "street": "1 Analytical Way",
    "city": "London",
    "region": "LDN",
    "postalCode": "EC1A",
    "countryCode": "GB"
  },
  "highlights": [
    "Shipped three compiler releases",
    "Mentored four engineers"
  ],
  "profiles": [
    { "network": "GitHub", "username": "ada", "url": "https://github.com/ada" }
  ],
  "work": [
    {
      "company": "Analytical Engines Ltd",
      "position": "Principal Engineer",
      "startDate": "2020-03-01",
      "summary": "Own the code generation pipeline.",
      "location": { "city": "London", "region": "LDN" },
      "highlights": [
        "Cut compile times by 40%",
        "Led the migration to incremental builds"
      ]
    },
    {
      "company": "Babbage & Co",
      "position": "Senior Engineer",
      "startDate": "2018-01-15",
      "endDate": "2019-06-30",
      "location": { "city": "Cambridge", "region": "CAM" }
    }
  ],
  "education": [
    {
      "institution": "University of London",
      "area": "Mathematics",
      "studyType": "BSc",
      "startDate": "2010-09-01",
      "endDate": "2014-06-30",
      "location": { "city": "London", "region": "LDN" },
      "highlights": [ "First-class honours" ]
    }
  ],
  "skills": [
    { "name": "Rust", "keywords": ["serde", "clap", "tokio"] },
    { "name": "Distributed systems", "keywords": [] }
  ]
}"#;

/// The smallest record that deserializes: contact fields plus an address,
/// every list empty.
pub const MINIMAL_RESUME_JSON: &str = r#"{
  "name": "Jim Bob",
  "label": "Engineer",
  "email": "j@x.com",
  "phone": "555-1234",
  "location": {
    "street": "1 Main",
    "city": "Springfield",
    "region": "IL",
    "postalCode": "00000"
  }
}"#;

/// Writes the full sample résumé into `dir` and returns its path.
pub fn write_sample_resume(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("sample.json");
    fs::write(&path, SAMPLE_RESUME_JSON)?;
    Ok(path)
}

/// Writes the minimal résumé into `dir` and returns its path.
pub fn write_minimal_resume(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("minimal.json");
    fs::write(&path, MINIMAL_RESUME_JSON)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvpress_types::Resume;

    #[test]
    fn sample_resume_deserializes() {
        let resume = Resume::from_json(SAMPLE_RESUME_JSON).unwrap();
        assert_eq!(resume.name, "Ada Lovelace");
        assert_eq!(resume.work.len(), 2);
        assert_eq!(resume.education.len(), 1);
        assert_eq!(resume.skills.len(), 2);
    }

    #[test]
    fn minimal_resume_deserializes() {
        let resume = Resume::from_json(MINIMAL_RESUME_JSON).unwrap();
        assert_eq!(resume.name, "Jim Bob");
        assert!(resume.summary.is_none());
        assert!(resume.work.is_empty());
    }

    #[test]
    fn writes_fixture_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_resume(dir.path()).unwrap();
        assert!(path.is_file());
        let text = fs::read_to_string(path).unwrap();
        assert!(Resume::from_json(&text).is_ok());
    }
}
