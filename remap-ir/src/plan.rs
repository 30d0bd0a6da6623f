//! Mapping plans produced by the inference engine.

/// How a single target property is produced by the generated mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationKind {
    /// Generatable as a direct copy from the matching source property.
    AutoMapped,
    /// Value must be supplied by hand-written logic at use time.
    CustomMapRequired,
}

/// The classification of one target-declared property.
///
/// Every target property gets exactly one of these. Auto-mapped properties
/// double as their own custom-override slot, which is why `optional` is true
/// exactly when `kind` is [`ClassificationKind::AutoMapped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyClassification {
    /// Property name as declared on the target entity.
    pub name: String,
    pub kind: ClassificationKind,
    /// Return type of the custom-map callback for this property.
    pub return_type: String,
    /// Whether the custom-map slot may be omitted by the caller.
    pub optional: bool,
}

impl PropertyClassification {
    /// Whether this property is copied automatically.
    pub fn is_auto(&self) -> bool {
        self.kind == ClassificationKind::AutoMapped
    }
}

/// The classified description of how to transform one schema entity into
/// another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPlan {
    /// Name of the entity being mapped from.
    pub source_name: String,
    /// Name of the entity being mapped to.
    pub target_name: String,
    /// One classification per target-declared property, in declaration order.
    pub properties: Vec<PropertyClassification>,
    /// True iff every custom-map slot may be omitted, i.e. every property is
    /// auto-mapped.
    pub custom_map_optional: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_auto() {
        let auto = PropertyClassification {
            name: "x".to_string(),
            kind: ClassificationKind::AutoMapped,
            return_type: "string".to_string(),
            optional: true,
        };
        let custom = PropertyClassification {
            kind: ClassificationKind::CustomMapRequired,
            optional: false,
            ..auto.clone()
        };
        assert!(auto.is_auto());
        assert!(!custom.is_auto());
    }
}
