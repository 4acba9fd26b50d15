//! Scenario record persisted as a pretty-printed JSON file.
//!
//! Every mutation is staged on a copy of the record, written to a sibling
//! temp file and renamed into place. Only then does the in-memory copy that
//! serves reads change, so it always matches the last successful write.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use scenario_state::{
    InfraErrorKind, ListChoices, MemoryScenarioStore, ScenarioError, ScenarioState,
    ScenarioStateActions, ScenarioStateSource, SupplyCounts,
};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryScenarioStore,
}

impl JsonFileStore {
    /// Load the record at `path`; a missing file starts an empty attempt.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ScenarioError> {
        let path = path.into();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| persistence(&path, e))?;
            serde_json::from_str::<ScenarioState>(&raw).map_err(|e| {
                ScenarioError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("{}: {e}", path.display()),
                )
            })?
        } else {
            debug!(path = %path.display(), "No scenario file yet, starting empty");
            ScenarioState::empty()
        };

        Ok(Self {
            path,
            inner: MemoryScenarioStore::from_state(state),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> ScenarioState {
        self.inner.snapshot()
    }

    /// Apply `f` to a staged copy, persist it, then publish it to readers.
    fn commit(
        &self,
        f: impl FnOnce(&MemoryScenarioStore) -> Result<(), ScenarioError>,
    ) -> Result<(), ScenarioError> {
        let staged = MemoryScenarioStore::from_state(self.inner.snapshot());
        f(&staged)?;
        let next = staged.into_inner();
        self.write_file(&next)?;
        self.inner.replace(next);
        Ok(())
    }

    fn write_file(&self, state: &ScenarioState) -> Result<(), ScenarioError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| persistence(&self.path, e))?;
        serde_json::to_writer_pretty(&mut tmp, state).map_err(|e| persistence(&self.path, e))?;
        tmp.flush().map_err(|e| persistence(&self.path, e))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| persistence(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| persistence(&self.path, e.error))?;
        debug!(path = %self.path.display(), "Scenario file written");
        Ok(())
    }
}

fn persistence(path: &Path, err: impl std::fmt::Display) -> ScenarioError {
    ScenarioError::infra(InfraErrorKind::Persistence, format!("{}: {err}", path.display()))
}

impl ScenarioStateSource for JsonFileStore {
    fn read<R>(&self, f: impl FnOnce(&ScenarioState) -> R) -> R {
        self.inner.read(f)
    }
}

impl ScenarioStateActions for JsonFileStore {
    fn set_decision(&self, id: &str, value: bool) -> Result<(), ScenarioError> {
        self.commit(|s| s.set_decision(id, value))
    }

    fn set_count(&self, id: &str, value: i64) -> Result<(), ScenarioError> {
        self.commit(|s| s.set_count(id, value))
    }

    fn set_supplies(&self, id: &str, supply_counts: SupplyCounts) -> Result<(), ScenarioError> {
        self.commit(|s| s.set_supplies(id, supply_counts))
    }

    fn set_choice_list(&self, id: &str, choices: ListChoices) -> Result<(), ScenarioError> {
        self.commit(|s| s.set_choice_list(id, choices))
    }

    fn set_choice(&self, id: &str, choice: i32) -> Result<(), ScenarioError> {
        self.commit(|s| s.set_choice(id, choice))
    }

    fn reset_scenario(&self) -> Result<(), ScenarioError> {
        self.commit(|s| s.reset_scenario())
    }
}
