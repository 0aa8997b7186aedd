//! Replaying recorded UI gestures against a [`FormEditor`].
//!
//! A script is a JSON document listing gestures in the order a user performed
//! them. Canvas rows are referenced by their index at the time of the gesture:
//!
//! ```json
//! { "gestures": [
//!     { "action": "dragPalette", "entry": "text" },
//!     { "action": "dropCanvas" },
//!     { "action": "click", "index": 0 },
//!     { "action": "patch", "label": "Full name", "required": true }
//! ] }
//! ```

use crate::editor::FormEditor;
use crate::error::ScriptError;
use crate::field::{FieldId, FieldPatch};
use crate::payload::{DropTarget, MemoryTransfer, PAYLOAD_MEDIA_TYPE};
use serde::Deserialize;
use std::fs;

/// One recorded user gesture.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Gesture {
    /// Start dragging a palette entry, by type tag or label.
    DragPalette { entry: String },
    /// Start dragging the canvas row at `index`.
    DragItem { index: usize },
    DropCanvas,
    DropItem { index: usize },
    /// Drop raw transfer data that no drag of ours produced.
    DropForeign {
        data: String,
        #[serde(default)]
        index: Option<usize>,
    },
    Cancel,
    Click { index: usize },
    ClearSelection,
    /// Inspector edit of the selected field.
    Patch(FieldPatch),
    Remove { index: usize },
    DeleteSelected,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    pub gestures: Vec<Gesture>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::JsonParseError(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, ScriptError> {
        let content = fs::read_to_string(path).map_err(|e| ScriptError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}

/// Tally of a replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Gestures that changed the form or started a drag.
    pub applied: usize,
    /// Gestures that left everything as it was.
    pub ignored: usize,
}

pub struct ScriptRunner<'a> {
    editor: &'a mut FormEditor,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(editor: &'a mut FormEditor) -> Self {
        Self { editor }
    }

    /// Replays every gesture in order.
    ///
    /// Only a reference to a palette entry that does not exist aborts the
    /// replay; every other oddity is a no-op, exactly as it would be live.
    pub fn run(&mut self, script: &Script) -> Result<ReplayReport, ScriptError> {
        let mut report = ReplayReport::default();
        for (index, gesture) in script.gestures.iter().enumerate() {
            let applied = self.step(index, gesture)?;
            log::trace!("Gesture #{} {:?} applied={}", index, gesture, applied);
            if applied {
                report.applied += 1;
            } else {
                report.ignored += 1;
            }
        }
        log::info!(
            "Replayed {} gestures ({} applied, {} ignored)",
            script.gestures.len(),
            report.applied,
            report.ignored
        );
        Ok(report)
    }

    fn step(&mut self, index: usize, gesture: &Gesture) -> Result<bool, ScriptError> {
        let applied = match gesture {
            Gesture::DragPalette { entry } => {
                let position = self.editor.palette().position(entry).ok_or_else(|| {
                    ScriptError::UnknownPaletteEntry {
                        index,
                        entry: entry.clone(),
                    }
                })?;
                self.editor.begin_palette_drag(position)
            }
            Gesture::DragItem { index } => self.editor.begin_item_drag(*index),
            Gesture::DropCanvas => !self.editor.drop_on(DropTarget::Canvas).is_ignored(),
            Gesture::DropItem { index } => {
                !self.editor.drop_on(DropTarget::Item(*index)).is_ignored()
            }
            Gesture::DropForeign { data, index } => {
                let target = index.map_or(DropTarget::Canvas, DropTarget::Item);
                let transfer = MemoryTransfer::with_data(PAYLOAD_MEDIA_TYPE, data.as_str());
                !self.editor.drop_transfer(target, transfer).is_ignored()
            }
            Gesture::Cancel => {
                let dragging = self.editor.is_dragging();
                self.editor.cancel_drag();
                dragging
            }
            Gesture::Click { index } => self.select_row(*index),
            Gesture::ClearSelection => {
                let had_selection = self.editor.store().selection().is_some();
                self.editor.clear_selection();
                had_selection
            }
            Gesture::Patch(patch) => match self.editor.store().selection().cloned() {
                Some(id) => self.editor.patch(&id, patch),
                None => false,
            },
            Gesture::Remove { index } => match self.row_id(*index) {
                Some(id) => self.editor.remove(&id),
                None => false,
            },
            Gesture::DeleteSelected => self.editor.delete_selected(),
        };
        Ok(applied)
    }

    fn row_id(&self, index: usize) -> Option<FieldId> {
        self.editor
            .store()
            .fields()
            .get(index)
            .map(|field| field.id().clone())
    }

    fn select_row(&mut self, index: usize) -> bool {
        match self.row_id(index) {
            Some(id) => {
                let changed = self.editor.store().selection() != Some(&id);
                self.editor.click(&id);
                changed
            }
            None => false,
        }
    }
}
