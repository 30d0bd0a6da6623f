//! The mapping inference engine.
//!
//! Classifies every property declared on a target entity against the source
//! entity's properties. The engine is total: absent or mismatched properties
//! degrade to custom-map entries rather than failing, so unmappable cases are
//! pushed to the caller of the generated code.

use remap_ir::{
    ClassificationKind, MappingPlan, PropertyClassification, PropertyDescriptor, SchemaEntity,
};

const UNION_DELIMITER: char = '|';

/// Drop `undefined` and `null` members from a `|`-delimited union, leaving
/// the core shape two properties are compared on.
fn strip_nullable_members(ty: &str) -> String {
    ty.split(UNION_DELIMITER)
        .map(str::trim)
        .filter(|member| *member != "undefined" && *member != "null")
        .collect::<Vec<_>>()
        .join("|")
}

/// A type admits absence when its text mentions `null` or `undefined`, or
/// the optional marker is set. Substring matching, not structural analysis.
fn is_nullable(ty: &str, optional: bool) -> bool {
    ty.contains("null") || ty.contains("undefined") || optional
}

/// Return type of the custom-map callback for a target property.
fn return_type(prop: &PropertyDescriptor) -> String {
    if prop.optional {
        format!("{} | undefined", prop.ty)
    } else {
        prop.ty.clone()
    }
}

/// Build the mapping plan for one (source, target) entity pair.
///
/// Exactly one classification is produced per target-declared property, in
/// declaration order. Auto-mapped properties double as their own optional
/// custom-override slot.
pub fn infer_pair(source: &SchemaEntity, target: &SchemaEntity) -> MappingPlan {
    let mut properties = Vec::with_capacity(target.props.len());

    for (name, target_prop) in &target.props {
        let source_prop = source.prop(name);

        let target_core = strip_nullable_members(&target_prop.ty);
        let source_core = source_prop.map(|p| strip_nullable_members(&p.ty));

        let kind = if source_core.as_deref() != Some(target_core.as_str()) {
            // absent from the source, or the core shapes differ
            ClassificationKind::CustomMapRequired
        } else {
            let source_nullable = source_prop.is_some_and(|p| is_nullable(&p.ty, p.optional));
            let target_nullable = is_nullable(&target_prop.ty, target_prop.optional);
            if source_nullable && !target_nullable {
                // narrowing nullable -> non-nullable must be explicit
                ClassificationKind::CustomMapRequired
            } else {
                ClassificationKind::AutoMapped
            }
        };

        properties.push(PropertyClassification {
            name: name.clone(),
            kind,
            return_type: return_type(target_prop),
            optional: kind == ClassificationKind::AutoMapped,
        });
    }

    let custom_map_optional = properties.iter().all(|p| p.optional);
    MappingPlan {
        source_name: source.name.clone(),
        target_name: target.name.clone(),
        properties,
        custom_map_optional,
    }
}

/// Plans for the full cartesian product of source entities against target
/// entities.
///
/// One file may declare several related entities with no explicit
/// correspondence, so every pair gets a plan rather than matching 1:1 by
/// declaration order.
pub fn infer_all(sources: &[SchemaEntity], targets: &[SchemaEntity]) -> Vec<MappingPlan> {
    sources
        .iter()
        .flat_map(|source| targets.iter().map(move |target| infer_pair(source, target)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> SchemaEntity {
        SchemaEntity::new(name)
    }

    #[test]
    fn test_one_classification_per_target_property() {
        let source = entity("A").with_prop("x", "string", false);
        let target = entity("B")
            .with_prop("x", "string", false)
            .with_prop("y", "number", false)
            .with_prop("z", "boolean", true);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties.len(), target.props.len());
    }

    #[test]
    fn test_safe_copy_is_auto_mapped_with_optional_override() {
        let source = entity("A").with_prop("x", "string", false);
        let target = entity("B").with_prop("x", "string", false);

        let plan = infer_pair(&source, &target);
        let prop = &plan.properties[0];
        assert_eq!(prop.kind, ClassificationKind::AutoMapped);
        assert!(prop.optional);
        assert_eq!(prop.return_type, "string");
        assert!(plan.custom_map_optional);
    }

    #[test]
    fn test_absent_property_requires_custom_map() {
        let source = entity("A");
        let target = entity("B").with_prop("x", "string | null", true);

        let plan = infer_pair(&source, &target);
        let prop = &plan.properties[0];
        assert_eq!(prop.kind, ClassificationKind::CustomMapRequired);
        assert!(!prop.optional);
        assert!(!plan.custom_map_optional);
    }

    #[test]
    fn test_core_type_mismatch_requires_custom_map() {
        let source = entity("A").with_prop("x", "number", false);
        let target = entity("B").with_prop("x", "string", false);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::CustomMapRequired);
    }

    #[test]
    fn test_narrowing_nullable_to_non_nullable_requires_custom_map() {
        let source = entity("A").with_prop("x", "string | null", false);
        let target = entity("B").with_prop("x", "string", false);

        let plan = infer_pair(&source, &target);
        let prop = &plan.properties[0];
        assert_eq!(prop.kind, ClassificationKind::CustomMapRequired);
        assert!(!prop.optional);
    }

    #[test]
    fn test_widening_to_nullable_is_auto_mapped() {
        let source = entity("A").with_prop("x", "string", false);
        let target = entity("B").with_prop("x", "string | null", false);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::AutoMapped);
    }

    #[test]
    fn test_both_nullable_is_auto_mapped() {
        let source = entity("A").with_prop("x", "string | undefined", false);
        let target = entity("B").with_prop("x", "string", true);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::AutoMapped);
    }

    #[test]
    fn test_optional_marker_alone_makes_source_nullable() {
        let source = entity("A").with_prop("x", "string", true);
        let target = entity("B").with_prop("x", "string", false);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::CustomMapRequired);
    }

    #[test]
    fn test_return_type_appends_undefined_for_optional_target() {
        let source = entity("A");
        let target = entity("B").with_prop("x", "string", true);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].return_type, "string | undefined");
    }

    #[test]
    fn test_nullability_is_a_substring_test() {
        // "Nullable" contains "null", so both sides count as nullable and the
        // copy stays automatic.
        let source = entity("A").with_prop("x", "Nullable<string>", false);
        let target = entity("B").with_prop("x", "Nullable<string>", false);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::AutoMapped);
    }

    #[test]
    fn test_union_members_trimmed_before_comparison() {
        let source = entity("A").with_prop("x", "string|null", false);
        let target = entity("B").with_prop("x", "string | null", false);

        let plan = infer_pair(&source, &target);
        assert_eq!(plan.properties[0].kind, ClassificationKind::AutoMapped);
    }

    #[test]
    fn test_inference_is_idempotent() {
        let source = entity("A")
            .with_prop("x", "string | null", false)
            .with_prop("y", "number", true);
        let target = entity("B")
            .with_prop("x", "string", false)
            .with_prop("y", "number", true)
            .with_prop("z", "Date", false);

        assert_eq!(infer_pair(&source, &target), infer_pair(&source, &target));
    }

    #[test]
    fn test_cartesian_product_over_entity_sets() {
        let sources = vec![entity("A"), entity("B")];
        let targets = vec![entity("C"), entity("D"), entity("E")];

        let plans = infer_all(&sources, &targets);
        assert_eq!(plans.len(), 6);
        assert_eq!(plans[0].source_name, "A");
        assert_eq!(plans[0].target_name, "C");
        assert_eq!(plans[5].source_name, "B");
        assert_eq!(plans[5].target_name, "E");
    }

    #[test]
    fn test_empty_target_yields_vacuously_optional_plan() {
        let plan = infer_pair(&entity("A").with_prop("x", "string", false), &entity("B"));
        assert!(plan.properties.is_empty());
        assert!(plan.custom_map_optional);
    }
}
