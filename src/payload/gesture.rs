use super::transfer::{DataTransfer, MemoryTransfer};
use super::DragPayload;
use crate::field::{FieldFactory, FieldId};
use crate::store::FormStore;

/// Where a drag is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// Empty canvas area; drops here append.
    Canvas,
    /// The canvas row currently at this index.
    Item(usize),
}

/// The effect a drop target advertises while a drag hovers over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
    Move,
}

impl DropTarget {
    /// Drag-over acceptance. Every canvas target accepts, so the drop event
    /// always fires; deciding what the drop means is left to [`FormStore::apply_drop`].
    pub fn drag_over(&self, payload: Option<&DragPayload>) -> DropEffect {
        match payload {
            Some(DragPayload::Palette { .. }) => DropEffect::Copy,
            _ => DropEffect::Move,
        }
    }
}

/// What a drop did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// A palette drop created and appended this field.
    Appended(FieldId),
    /// A canvas item moved between these positions.
    Moved { from: usize, to: usize },
    /// Nothing happened: no payload, unreadable payload, or an unsupported
    /// payload/target combination.
    Ignored,
}

impl DropOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, DropOutcome::Ignored)
    }
}

/// A single drag, from start to its one drop or cancel.
///
/// The payload is encoded into the transfer channel at start; `drop_on` and
/// `cancel` consume the gesture, so the payload can be read at most once.
#[derive(Debug)]
pub struct DragGesture<T: DataTransfer = MemoryTransfer> {
    transfer: T,
    preview: Option<DragPayload>,
}

impl DragGesture<MemoryTransfer> {
    pub fn from_palette(payload: DragPayload) -> Self {
        Self::start(MemoryTransfer::new(), payload)
    }

    pub fn from_item(index: usize) -> Self {
        Self::start(MemoryTransfer::new(), DragPayload::reorder(index))
    }
}

impl<T: DataTransfer> DragGesture<T> {
    /// Starts a drag over a host-provided transfer channel.
    pub fn start(mut transfer: T, payload: DragPayload) -> Self {
        payload.encode_into(&mut transfer);
        Self {
            transfer,
            preview: Some(payload),
        }
    }

    /// Adopts a transfer channel filled by someone else (e.g. another window).
    /// Its content is only looked at on drop.
    pub fn adopt(transfer: T) -> Self {
        Self {
            transfer,
            preview: None,
        }
    }

    /// Whether this gesture relocates an existing canvas row.
    pub fn is_item_drag(&self) -> bool {
        matches!(self.preview, Some(DragPayload::Reorder { .. }))
    }

    /// Called on every drag-over event of `target`.
    pub fn over(&self, target: DropTarget) -> DropEffect {
        target.drag_over(self.preview.as_ref())
    }

    /// Releases the drag on `target`, decoding the payload exactly once.
    pub fn drop_on(
        mut self,
        target: DropTarget,
        store: &mut FormStore,
        factory: &mut FieldFactory,
    ) -> DropOutcome {
        let payload = DragPayload::decode_from(&mut self.transfer);
        store.apply_drop(target, payload, factory)
    }

    /// Ends the drag without a drop. The store is never touched.
    pub fn cancel(mut self) {
        self.transfer.clear();
    }
}
