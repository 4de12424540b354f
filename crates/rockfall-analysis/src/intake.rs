//! File intake slots and the pair coordinator
//!
//! Each slot holds at most one file. A new submission replaces the previous
//! one outright and a clear leaves the slot empty; nothing is queued or kept.

use crate::error::{AnalysisError, AnalysisResult};
use rockfall_core::config::{IntakeConfig, IntakePolicy};
use rockfall_core::utils::{accepted_formats_label, validate_file_extension};
use rockfall_core::{IntakeKind, SelectedFile};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where a batch of files came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeSource {
    /// The file picker, which only lists files matching the accept filter
    Picker,
    /// A drag-and-drop onto the slot
    Drop,
}

impl std::fmt::Display for IntakeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Picker => write!(f, "picker"),
            Self::Drop => write!(f, "drop"),
        }
    }
}

/// A holder for at most one selected file
#[derive(Debug, Clone)]
pub struct IntakeSlot {
    kind: IntakeKind,
    accept: Vec<String>,
    policy: IntakePolicy,
    file: Option<SelectedFile>,
}

impl IntakeSlot {
    /// Create an empty slot with its accept filter
    pub fn new(kind: IntakeKind, accept: Vec<String>, policy: IntakePolicy) -> Self {
        Self {
            kind,
            accept,
            policy,
            file: None,
        }
    }

    /// Which slot this is
    pub const fn kind(&self) -> IntakeKind {
        self.kind
    }

    /// The held file, if any
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Whether a file is held
    pub const fn is_populated(&self) -> bool {
        self.file.is_some()
    }

    /// Accept filter entries, e.g. `.csv`
    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    /// Whether a file name matches the accept filter
    pub fn accepts(&self, file: &SelectedFile) -> bool {
        validate_file_extension(&file.name, &self.accept)
    }

    /// Put a file in the slot, replacing whatever was there
    ///
    /// Under [`IntakePolicy::Enforced`] a file outside the accept filter is
    /// rejected and the slot keeps its previous content.
    pub fn submit(&mut self, file: SelectedFile) -> AnalysisResult<&SelectedFile> {
        if !self.accepts(&file) {
            match self.policy {
                IntakePolicy::Enforced => {
                    warn!(kind = %self.kind, file = %file.name, "Rejected file outside accept filter");
                    return Err(AnalysisError::unsupported_file_type(
                        self.kind,
                        file.name,
                        self.accept.clone(),
                    ));
                }
                IntakePolicy::Advisory => {
                    debug!(kind = %self.kind, file = %file.name, "Accepting file outside advisory filter");
                }
            }
        }

        Ok(&*self.file.insert(file))
    }

    /// Take the first file of a picker or drop batch
    ///
    /// An empty batch leaves the slot untouched and returns `Ok(None)`.
    pub fn offer(
        &mut self,
        files: impl IntoIterator<Item = SelectedFile>,
        source: IntakeSource,
    ) -> AnalysisResult<Option<&SelectedFile>> {
        let Some(first) = files.into_iter().next() else {
            debug!(kind = %self.kind, %source, "Ignoring empty file batch");
            return Ok(None);
        };

        self.submit(first).map(Some)
    }

    /// Empty the slot, returning what it held
    pub fn clear(&mut self) -> Option<SelectedFile> {
        self.file.take()
    }

    /// Serializable view of the slot
    pub fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            kind: self.kind,
            title: self.kind.title(),
            description: self.kind.description(),
            accept: self.accept.clone(),
            accepted_formats: accepted_formats_label(&self.accept),
            file: self.file.clone(),
            display_size: self.file.as_ref().map(SelectedFile::display_size),
            matches_accept_filter: self.file.as_ref().map(|file| self.accepts(file)),
        }
    }
}

/// Point-in-time view of one slot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Slot kind
    pub kind: IntakeKind,
    /// Card title
    pub title: &'static str,
    /// Card description
    pub description: &'static str,
    /// Accept filter entries
    pub accept: Vec<String>,
    /// Accept filter as shown to the user, e.g. `CSV,XLSX`
    pub accepted_formats: String,
    /// Held file
    pub file: Option<SelectedFile>,
    /// Human readable size of the held file
    pub display_size: Option<String>,
    /// Whether the held file matches the accept filter
    pub matches_accept_filter: Option<bool>,
}

/// The two intake slots the analysis needs
#[derive(Debug, Clone)]
pub struct IntakePair {
    imagery: IntakeSlot,
    sensor_readings: IntakeSlot,
}

impl IntakePair {
    /// Create an empty pair from intake configuration
    pub fn from_config(config: &IntakeConfig) -> Self {
        Self {
            imagery: IntakeSlot::new(
                IntakeKind::Imagery,
                config.imagery_accept.clone(),
                config.policy,
            ),
            sensor_readings: IntakeSlot::new(
                IntakeKind::SensorReadings,
                config.sensor_accept.clone(),
                config.policy,
            ),
        }
    }

    /// Borrow a slot
    pub const fn slot(&self, kind: IntakeKind) -> &IntakeSlot {
        match kind {
            IntakeKind::Imagery => &self.imagery,
            IntakeKind::SensorReadings => &self.sensor_readings,
        }
    }

    /// Borrow a slot mutably
    pub const fn slot_mut(&mut self, kind: IntakeKind) -> &mut IntakeSlot {
        match kind {
            IntakeKind::Imagery => &mut self.imagery,
            IntakeKind::SensorReadings => &mut self.sensor_readings,
        }
    }

    /// Both slots hold a file
    pub const fn is_ready(&self) -> bool {
        self.imagery.is_populated() && self.sensor_readings.is_populated()
    }

    /// Slots that are still empty, in display order
    pub fn missing(&self) -> Vec<IntakeKind> {
        IntakeKind::ALL
            .into_iter()
            .filter(|kind| !self.slot(*kind).is_populated())
            .collect()
    }

    /// Copies of both files, when both are present
    pub fn inputs(&self) -> Option<(SelectedFile, SelectedFile)> {
        Some((
            self.imagery.file()?.clone(),
            self.sensor_readings.file()?.clone(),
        ))
    }

    /// Empty both slots
    pub fn clear_all(&mut self) {
        self.imagery.clear();
        self.sensor_readings.clear();
    }

    /// Serializable view of both slots
    pub fn snapshot(&self) -> IntakeSnapshot {
        IntakeSnapshot {
            imagery: self.imagery.snapshot(),
            sensor_readings: self.sensor_readings.snapshot(),
            ready: self.is_ready(),
            missing: self.missing(),
        }
    }
}

impl Default for IntakePair {
    fn default() -> Self {
        Self::from_config(&IntakeConfig::default())
    }
}

/// Point-in-time view of both slots
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IntakeSnapshot {
    /// Drone imagery slot
    pub imagery: SlotSnapshot,
    /// Sensor readings slot
    pub sensor_readings: SlotSnapshot,
    /// Both slots are populated
    pub ready: bool,
    /// Empty slots
    pub missing: Vec<IntakeKind>,
}
