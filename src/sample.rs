//! sample
//!
//! Deterministic sample-data generation and JSON loading.
//!
//! The generator produces `adjective-creature` folder names attached
//! at random to already-placed folders, giving trees with realistic
//! shape. Generation is fully determined by the seed, so demos and
//! tests can rely on a stable dataset.
//!
//! A folder list can also be loaded from a JSON file: an array of
//! `{"name": ..., "org_id": ..., "path": ...}` records.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use uuid::Uuid;

use crate::core::config::SampleConfig;
use crate::core::path::FolderPath;
use crate::core::types::{Folder, FolderName, OrgId};

/// Well-known id of the first generated organization.
pub const FIRST_ORG_ID: &str = "c1556e17-b7c0-45a3-a6ae-9546248fb17a";

/// Well-known id of the second generated organization.
pub const SECOND_ORG_ID: &str = "38b9879b-f73b-4b0e-b9d9-4fc4c23643a7";

/// Errors from loading folder data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read data file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse data file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

const ADJECTIVES: &[&str] = &[
    "noble", "nearby", "hip", "driven", "endless", "valid", "stirred", "complete", "valued",
    "frank", "polished", "proper", "adapted", "learning", "pretty", "innocent", "faithful",
    "bold", "quiet", "rapid", "gentle", "steady", "bright", "calm", "eager", "fancy", "grand",
    "humble", "keen", "lively", "merry", "patient",
];

const CREATURES: &[&str] = &[
    "vixen", "secret", "stingray", "lockjaw", "unicorn", "firefly", "eradicator", "warstar",
    "captain", "thunder", "bella", "reaper", "timeslip", "heron", "badger", "otter", "falcon",
    "lynx", "marmot", "osprey", "puffin", "raven", "stoat", "tern", "viper", "walrus", "wombat",
    "ibex", "jackal", "kestrel", "magpie", "newt",
];

/// Generate a deterministic folder dataset.
///
/// The first two organizations use the well-known ids
/// [`FIRST_ORG_ID`] and [`SECOND_ORG_ID`]; any further organizations
/// get ids drawn from the seeded RNG. Every organization's folder
/// list forms a well-formed tree, so the result always builds into a
/// registry.
pub fn generate(config: &SampleConfig) -> Vec<Folder> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut folders = Vec::with_capacity(config.orgs * config.folders_per_org);

    for org_index in 0..config.orgs {
        let org_id = org_id_for(org_index, &mut rng);
        let mut used: BTreeSet<String> = BTreeSet::new();
        let mut placed: Vec<FolderPath> = Vec::new();

        for _ in 0..config.folders_per_org {
            let name = fresh_name(&mut rng, &mut used);
            // Roughly a quarter of folders become new roots; the rest
            // attach under a random already-placed folder.
            let path = if placed.is_empty() || rng.random_bool(0.25) {
                FolderPath::root(&name)
            } else {
                let parent = &placed[rng.random_range(0..placed.len())];
                parent.child(&name)
            };
            folders.push(Folder::new(name, org_id, path.clone()));
            placed.push(path);
        }
    }

    folders
}

fn org_id_for(index: usize, rng: &mut StdRng) -> OrgId {
    let well_known = match index {
        0 => OrgId::parse(FIRST_ORG_ID).ok(),
        1 => OrgId::parse(SECOND_ORG_ID).ok(),
        _ => None,
    };
    well_known.unwrap_or_else(|| OrgId::from_uuid(Uuid::from_u128(rng.random::<u128>())))
}

/// Draw an unused `adjective-creature` name, suffixing a counter on
/// the rare collision.
fn fresh_name(rng: &mut StdRng, used: &mut BTreeSet<String>) -> FolderName {
    loop {
        let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
        let creature = CREATURES[rng.random_range(0..CREATURES.len())];
        let mut candidate = format!("{adjective}-{creature}");
        let mut counter = 2;
        while used.contains(&candidate) && counter < 10 {
            candidate = format!("{adjective}-{creature}-{counter}");
            counter += 1;
        }
        if used.insert(candidate.clone()) {
            if let Ok(name) = FolderName::new(candidate) {
                return name;
            }
        }
    }
}

/// Load a folder list from a JSON file.
///
/// # Errors
///
/// Fails on an unreadable file or on records that do not satisfy the
/// name/path validation rules.
pub fn load_json(path: &Path) -> Result<Vec<Folder>, DataError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DataError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| DataError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render a folder list as pretty-printed JSON.
pub fn to_json(folders: &[Folder]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(folders)
}
