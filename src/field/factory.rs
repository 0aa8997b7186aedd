use super::id::{IdGenerator, RandomIdGenerator};
use super::model::{Field, FieldId, FieldType};
use ahash::AHashSet;

/// Seed options given to every freshly created select field.
pub const DEFAULT_SELECT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// Turns palette selections into new fields.
///
/// Every issued id is remembered to rule out repeats, so memory grows with the
/// number of fields created over the factory's lifetime.
pub struct FieldFactory {
    ids: Box<dyn IdGenerator>,
    issued: AHashSet<FieldId>,
    select_options: Vec<String>,
}

pub struct FieldFactoryBuilder {
    ids: Box<dyn IdGenerator>,
    select_options: Vec<String>,
}

impl FieldFactoryBuilder {
    pub fn new() -> Self {
        Self {
            ids: Box::new(RandomIdGenerator::new()),
            select_options: DEFAULT_SELECT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
    pub fn with_seed(self, seed: u64) -> Self {
        self.with_id_generator(Box::new(RandomIdGenerator::with_seed(seed)))
    }
    pub fn with_select_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select_options = options.into_iter().map(Into::into).collect();
        self
    }
    pub fn build(self) -> FieldFactory {
        FieldFactory {
            ids: self.ids,
            issued: AHashSet::new(),
            select_options: self.select_options,
        }
    }
}

impl Default for FieldFactoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldFactory {
    pub fn builder() -> FieldFactoryBuilder {
        FieldFactoryBuilder::new()
    }

    /// Creates a new, unrequired field of the given type.
    ///
    /// Select fields start with the configured seed options; every other type
    /// has no options at all.
    pub fn create(&mut self, field_type: FieldType, label: impl Into<String>) -> Field {
        let id = self.fresh_id();
        let options = field_type
            .has_options()
            .then(|| self.select_options.clone());
        let field = Field::new(id, field_type, label.into(), false, options);
        log::debug!(
            "Created {} field '{}' ({})",
            field.field_type(),
            field.label(),
            field.id()
        );
        field
    }

    /// Number of ids this factory has handed out.
    pub fn issued(&self) -> usize {
        self.issued.len()
    }

    fn fresh_id(&mut self) -> FieldId {
        loop {
            let id = self.ids.next_id();
            if self.issued.insert(id.clone()) {
                return id;
            }
            log::trace!("Discarding already issued id '{}'", id);
        }
    }
}

impl Default for FieldFactory {
    fn default() -> Self {
        FieldFactoryBuilder::new().build()
    }
}
