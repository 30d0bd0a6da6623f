//! Schema entities and their typed properties.

use indexmap::IndexMap;

/// A typed property as declared on an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// String-encoded type expression, possibly a `|`-delimited union
    /// (e.g. `"string"`, `"number | null"`).
    pub ty: String,
    /// Whether the declaration carries an optional marker (`name?: T`).
    pub optional: bool,
}

impl PropertyDescriptor {
    /// Create a new property descriptor.
    pub fn new(ty: impl Into<String>, optional: bool) -> Self {
        Self {
            ty: ty.into(),
            optional,
        }
    }
}

/// A named declaration with a set of typed properties, independent of any
/// particular declaration syntax.
///
/// Property names are unique per entity. Iteration order of `props` is
/// declaration order, which is what classification order is defined over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaEntity {
    /// Declared entity name.
    pub name: String,
    /// Property name → descriptor, in declaration order.
    pub props: IndexMap<String, PropertyDescriptor>,
}

impl SchemaEntity {
    /// Create a new entity with no properties.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            props: IndexMap::new(),
        }
    }

    /// Add a property, replacing any previous declaration of the same name.
    pub fn with_prop(mut self, name: impl Into<String>, ty: impl Into<String>, optional: bool) -> Self {
        self.props
            .insert(name.into(), PropertyDescriptor::new(ty, optional));
        self
    }

    /// Look up a property by name.
    pub fn prop(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.props.get(name)
    }
}
