use crate::field::{FieldFactory, FieldId, FieldPatch};
use crate::palette::Palette;
use crate::payload::{DragGesture, DropEffect, DropOutcome, DropTarget, MemoryTransfer};
use crate::schema::SchemaPreview;
use crate::store::FormStore;

/// Wires the palette, canvas, inspector and schema preview to one store.
///
/// Surfaces call these methods from their event callbacks; each call runs to
/// completion and leaves the editor ready for the next event.
pub struct FormEditor {
    store: FormStore,
    factory: FieldFactory,
    palette: Palette,
    drag: Option<DragGesture>,
}

impl FormEditor {
    pub fn new() -> Self {
        Self::with_parts(FieldFactory::default(), Palette::default())
    }

    pub fn with_parts(factory: FieldFactory, palette: Palette) -> Self {
        Self {
            store: FormStore::new(),
            factory,
            palette,
            drag: None,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // --- Palette ---

    /// Starts dragging palette entry `index`. Returns `false` for unknown entries.
    pub fn begin_palette_drag(&mut self, index: usize) -> bool {
        let Some(payload) = self.palette.payload_for(index) else {
            return false;
        };
        self.replace_drag(DragGesture::from_palette(payload));
        true
    }

    // --- Canvas ---

    /// Starts dragging the canvas row at `index`.
    pub fn begin_item_drag(&mut self, index: usize) -> bool {
        if index >= self.store.len() {
            return false;
        }
        self.replace_drag(DragGesture::from_item(index));
        true
    }

    /// Drag-over feedback for `target`, or `None` when nothing is being dragged.
    pub fn drag_over(&self, target: DropTarget) -> Option<DropEffect> {
        self.drag.as_ref().map(|drag| drag.over(target))
    }

    /// Ends the current drag on `target`. Without a drag this does nothing.
    pub fn drop_on(&mut self, target: DropTarget) -> DropOutcome {
        match self.drag.take() {
            Some(drag) => drag.drop_on(target, &mut self.store, &mut self.factory),
            None => DropOutcome::Ignored,
        }
    }

    /// Drops data that did not originate from a drag this editor started,
    /// such as another window's payload. Unreadable data is ignored.
    pub fn drop_transfer(&mut self, target: DropTarget, transfer: MemoryTransfer) -> DropOutcome {
        self.cancel_drag();
        DragGesture::adopt(transfer).drop_on(target, &mut self.store, &mut self.factory)
    }

    /// Ends the current drag outside any target.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            drag.cancel();
        }
    }

    pub fn click(&mut self, id: &FieldId) {
        self.store.select(Some(id));
    }

    pub fn clear_selection(&mut self) {
        self.store.select(None);
    }

    // --- Inspector ---

    pub fn set_label(&mut self, label: &str) -> bool {
        self.store.patch_selected(&FieldPatch::label(label))
    }

    pub fn set_required(&mut self, required: bool) -> bool {
        self.store.patch_selected(&FieldPatch::required(required))
    }

    /// Replaces the selected field's options from comma separated input.
    pub fn set_options(&mut self, csv: &str) -> bool {
        self.store.patch_selected(&FieldPatch::options_from_csv(csv))
    }

    pub fn patch(&mut self, id: &FieldId, patch: &FieldPatch) -> bool {
        self.store.patch(id, patch)
    }

    /// Removes a field. An item drag in flight is cancelled, since the row
    /// index it carries no longer points at the dragged field.
    pub fn remove(&mut self, id: &FieldId) -> bool {
        if self.store.position(id).is_none() {
            return false;
        }
        if self.drag.as_ref().is_some_and(DragGesture::is_item_drag) {
            self.cancel_drag();
        }
        self.store.remove(id)
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.store.selection().cloned() {
            Some(id) => self.remove(&id),
            None => false,
        }
    }

    // --- Schema preview ---

    pub fn schema_preview(&self) -> String {
        SchemaPreview::render(self.store.fields())
    }

    fn replace_drag(&mut self, drag: DragGesture) {
        // A new drag start implies the previous gesture never dropped.
        self.cancel_drag();
        self.drag = Some(drag);
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}
