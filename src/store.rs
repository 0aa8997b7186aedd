use crate::field::{Field, FieldFactory, FieldId, FieldPatch};
use crate::payload::{DragPayload, DropOutcome, DropTarget};
use crate::reorder::{is_valid_move, reorder};

/// The ordered fields of a form plus the current selection.
///
/// The order of `fields` is the form's field order. Every operation is total:
/// invalid arguments leave the state untouched instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    fields: Vec<Field>,
    selection: Option<FieldId>,
    revision: u64,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn selection(&self) -> Option<&FieldId> {
        self.selection.as_ref()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selection.as_ref().and_then(|id| self.get(id))
    }

    pub fn get(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|field| field.id() == id)
    }

    pub fn position(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|field| field.id() == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bumped on every state change; renderers compare it to skip redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Adds `field` at the end. A field whose id is already present is dropped.
    pub fn append(&mut self, field: Field) -> bool {
        if self.position(field.id()).is_some() {
            log::warn!("Refusing to append duplicate field id '{}'", field.id());
            return false;
        }
        log::debug!("Appending field '{}' at index {}", field.id(), self.fields.len());
        self.fields.push(field);
        self.touch();
        true
    }

    /// Moves the field at `from` to `to`. Out-of-range indices are ignored.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if !is_valid_move(self.fields.len(), from, to) {
            log::trace!(
                "Ignoring reorder {} -> {} on {} fields",
                from,
                to,
                self.fields.len()
            );
            return false;
        }
        if from == to {
            return false;
        }
        log::debug!("Reordering field {} -> {}", from, to);
        self.fields = reorder(&self.fields, from, to);
        self.touch();
        true
    }

    /// Selects `id` if such a field exists, otherwise clears the selection.
    pub fn select(&mut self, id: Option<&FieldId>) {
        let next = id.filter(|id| self.get(id).is_some()).cloned();
        if next != self.selection {
            log::trace!("Selection changed to {:?}", next);
            self.selection = next;
            self.touch();
        }
    }

    /// Merges `patch` into the field with `id`. Its id and type never change.
    pub fn patch(&mut self, id: &FieldId, patch: &FieldPatch) -> bool {
        let Some(field) = self.fields.iter_mut().find(|field| field.id() == id) else {
            return false;
        };
        let changed = field.apply(patch);
        if changed {
            log::debug!("Patched field '{}'", id);
            self.touch();
        }
        changed
    }

    /// Patches whatever is selected; a no-op without a selection.
    pub fn patch_selected(&mut self, patch: &FieldPatch) -> bool {
        match self.selection.clone() {
            Some(id) => self.patch(&id, patch),
            None => false,
        }
    }

    /// Removes the field with `id`, clearing the selection if it pointed there.
    pub fn remove(&mut self, id: &FieldId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.fields.remove(index);
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        log::debug!("Removed field '{}' from index {}", id, index);
        self.touch();
        true
    }

    /// Interprets a decoded drop.
    ///
    /// On the canvas, palette payloads create and append a field and reorder
    /// payloads move the item to the end. On an item row only reorder payloads
    /// are honored, moving the dragged item to that row's index. Anything else,
    /// including a missing payload, is [`DropOutcome::Ignored`].
    pub fn apply_drop(
        &mut self,
        target: DropTarget,
        payload: Option<DragPayload>,
        factory: &mut FieldFactory,
    ) -> DropOutcome {
        let Some(payload) = payload else {
            return DropOutcome::Ignored;
        };
        match (target, payload) {
            (DropTarget::Canvas, DragPayload::Palette { field_type, label }) => {
                let field = factory.create(field_type, label);
                let id = field.id().clone();
                if self.append(field) {
                    DropOutcome::Appended(id)
                } else {
                    DropOutcome::Ignored
                }
            }
            (DropTarget::Canvas, DragPayload::Reorder { from_index }) => {
                let to = self.fields.len().saturating_sub(1);
                self.move_outcome(from_index, to)
            }
            (DropTarget::Item(index), DragPayload::Reorder { from_index }) => {
                self.move_outcome(from_index, index)
            }
            (DropTarget::Item(_), DragPayload::Palette { .. }) => DropOutcome::Ignored,
        }
    }

    fn move_outcome(&mut self, from: usize, to: usize) -> DropOutcome {
        if self.reorder(from, to) {
            DropOutcome::Moved { from, to }
        } else {
            DropOutcome::Ignored
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}
