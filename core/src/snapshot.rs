//! Report snapshot loading
//!
//! The meter backend serializes one [`EncounterReport`] per render as JSON.
//! Combat-log ingestion itself lives upstream; this module only
//! deserializes the finished snapshot.

use std::path::{Path, PathBuf};

use thiserror::Error;

use skydome_types::EncounterReport;

/// Errors while loading a report snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Parse a snapshot from its JSON text
pub fn parse_report(json: &str) -> Result<EncounterReport, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

/// Load and parse a snapshot file
pub fn load_report(path: &Path) -> Result<EncounterReport, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_report(&raw)?;
    tracing::debug!(path = %path.display(), players = report.players.len(), "Loaded report snapshot");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skydome_types::ActionType;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "players": [
            {
                "index": 1,
                "character_type": "Katalina",
                "total_damage": 1000,
                "dps": 125.5,
                "percentage": 100.0,
                "skills": [
                    { "action_type": "LinkAttack", "hits": 2, "total_damage": 300 },
                    { "action_type": { "Normal": 7 }, "hits": 5, "total_damage": 700,
                      "min_damage": 100, "max_damage": 200 }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_snapshot_with_both_action_forms() {
        let report = parse_report(SNAPSHOT).unwrap();
        assert_eq!(report.players.len(), 1);

        let skills = &report.players[0].skills;
        assert_eq!(skills[0].action_type, ActionType::LinkAttack);
        assert_eq!(skills[0].min_damage, None);
        assert_eq!(skills[1].action_type, ActionType::Normal(7));
        assert_eq!(skills[1].max_damage, Some(200));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let report = load_report(file.path()).unwrap();
        assert_eq!(report.players[0].total_damage, 1000);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_report(Path::new("/nonexistent/report.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/report.json"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_report("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }
}
