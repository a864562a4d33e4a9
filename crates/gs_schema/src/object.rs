use crate::{Field, FieldMap};

slotmap::new_key_type! {
    /// Handle of an [`ObjectType`] inside a [`SchemaArena`](crate::SchemaArena).
    ///
    /// Handles are only meaningful for the arena that issued them.
    pub struct ObjectId;
}

// -----------------------------------------------------------------------------
// ObjectType

/// A named output object.
#[derive(Clone, Debug)]
pub struct ObjectType {
    name: String,
    description: Option<String>,
    fields: FieldMap,
}

impl ObjectType {
    /// Creates an object without fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: FieldMap::new(),
        }
    }

    /// Returns the object name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if set.
    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the description.
    #[inline]
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Returns the fields in declaration order.
    #[inline]
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Returns the field exposed as `name`.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Adds a field under `name`, replacing any field already exposed under it.
    ///
    /// The field's own `name` is overwritten with `name`.
    pub fn add_field(&mut self, name: impl Into<String>, mut field: Field) -> Option<Field> {
        let name = name.into();
        field.name.clone_from(&name);
        self.fields.insert(name, field)
    }
}
