use ahash::AHashMap;

/// The platform channel a drag carries its data in.
///
/// Hosts wrap whatever their toolkit offers (a browser `DataTransfer`, a
/// clipboard-like buffer, ...) behind this trait.
pub trait DataTransfer {
    /// Stores `data` under `media_type`, overwriting any previous value.
    fn set_data(&mut self, media_type: &str, data: String);

    /// Removes and returns the data stored under `media_type`.
    fn take_data(&mut self, media_type: &str) -> Option<String>;

    /// Drops everything attached so far.
    fn clear(&mut self);
}

impl<T: DataTransfer + ?Sized> DataTransfer for &mut T {
    fn set_data(&mut self, media_type: &str, data: String) {
        (**self).set_data(media_type, data);
    }

    fn take_data(&mut self, media_type: &str) -> Option<String> {
        (**self).take_data(media_type)
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// In-memory transfer channel for headless hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransfer {
    entries: AHashMap<String, String>,
}

impl MemoryTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transfer carrying raw, possibly foreign, data.
    pub fn with_data(media_type: &str, data: impl Into<String>) -> Self {
        let mut transfer = Self::new();
        transfer.set_data(media_type, data.into());
        transfer
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DataTransfer for MemoryTransfer {
    fn set_data(&mut self, media_type: &str, data: String) {
        self.entries.insert(media_type.to_string(), data);
    }

    fn take_data(&mut self, media_type: &str) -> Option<String> {
        self.entries.remove(media_type)
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
