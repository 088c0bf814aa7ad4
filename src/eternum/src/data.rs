//! Dataset loading.
//!
//! Every dataset is a JSON document on disk. Loaders only parse; all
//! validation happens record by record in the computation modules.

use crate::achievements::{AchievementEntry, AchievementPlayer, PointsRecord, QualifyingEntry};
use crate::revenue::RevenueEntry;
use crate::roster::RosterExport;
use crate::season_pass::MarketplaceSale;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Roster export with tribes, ranks, prizes and members
pub const ROSTER_FILE: &str = "eternum-social-export.json";
/// Achievement players with earnings and completed achievements
pub const ACHIEVEMENTS_FILE: &str = "cartridge-achievements.json";
/// Flat points export (`player_id`, `total_points`)
pub const POINTS_FILE: &str = "cartridge-points.json";
/// Addresses that qualify for the agent pool
pub const QUALIFYING_FILE: &str = "daydreams-agents.json";
pub const KNOWN_ADDRESSES_FILE: &str = "known-addresses.json";
pub const SALES_FILE: &str = "marketplace-sales.json";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON document
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_roster(path: &Path) -> Result<RosterExport, DataError> {
    load_json(path)
}

/// Either shape of achievement row found in the exports
#[derive(Deserialize)]
#[serde(untagged)]
enum AchievementRow {
    Player(AchievementPlayer),
    Points(PointsRecord),
}

impl From<AchievementRow> for AchievementEntry {
    fn from(row: AchievementRow) -> Self {
        match row {
            AchievementRow::Player(p) => p.into(),
            AchievementRow::Points(p) => p.into(),
        }
    }
}

/// Load achievement entries from either the achievement or the points export
pub fn load_achievement_entries(path: &Path) -> Result<Vec<AchievementEntry>, DataError> {
    let rows: Vec<AchievementRow> = load_json(path)?;
    Ok(rows.into_iter().map(AchievementEntry::from).collect())
}

pub fn load_achievement_players(path: &Path) -> Result<Vec<AchievementPlayer>, DataError> {
    load_json(path)
}

pub fn load_qualifying(path: &Path) -> Result<Vec<QualifyingEntry>, DataError> {
    load_json(path)
}

pub fn load_sales(path: &Path) -> Result<Vec<MarketplaceSale>, DataError> {
    load_json(path)
}

pub fn load_revenue_table(path: &Path) -> Result<Vec<RevenueEntry>, DataError> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_achievement_entries_player_shape() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(
            temp_dir.path(),
            ACHIEVEMENTS_FILE,
            r#"[{"address":"0x1","earnings":100,"timestamp":1700000000,"completeds":["A"]},
                {"address":"0x2","earnings":300}]"#,
        );

        let entries = load_achievement_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], AchievementEntry::new("0x2", 300.0));
    }

    #[test]
    fn test_load_achievement_entries_points_shape() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(
            temp_dir.path(),
            POINTS_FILE,
            r#"[{"player_id":"0xabc","total_points":950}]"#,
        );

        let entries = load_achievement_entries(&path).unwrap();
        assert_eq!(entries, vec![AchievementEntry::new("0xabc", 950.0)]);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_roster(&temp_dir.path().join(ROSTER_FILE)).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains(ROSTER_FILE));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(temp_dir.path(), QUALIFYING_FILE, "[{\"address\": }]");
        let err = load_qualifying(&path).unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[test]
    fn test_load_roster() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_file(
            temp_dir.path(),
            ROSTER_FILE,
            r#"{"tribes":[{"rank":1,"prize":{"lords":10,"strk":1},"members":[]}]}"#,
        );
        let roster = load_roster(&path).unwrap();
        assert_eq!(roster.tribes.len(), 1);
        assert_eq!(roster.tribes[0].prize.lords, 10.0);
    }
}
