//! TypeScript rendering of mapping plans.
//!
//! Each plan becomes one exported arrow-function mapper. Auto-mapped
//! properties copy straight from the source unless the caller supplies an
//! override; custom-map properties always call into the caller's logic.

use remap_ir::{GeneratedArtifact, MappingPlan, PropertyClassification};

use crate::builder::CodeBuilder;

const BANNER: &str = "// Generated by remap. Do not edit by hand.";

/// Name of the generated mapper function for a plan.
fn mapper_name(plan: &MappingPlan) -> String {
    format!("map{}To{}", plan.source_name, plan.target_name)
}

/// TypeScript renderer for mapping plans.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    /// Create a new TypeScript renderer.
    pub fn new() -> Self {
        Self
    }

    /// Render one mapper function.
    pub fn render_plan(&self, plan: &MappingPlan) -> String {
        self.render_plan_into(plan, CodeBuilder::new()).build()
    }

    /// Render the whole artifact: banner, import block, mappers.
    pub fn render_artifact(&self, artifact: &GeneratedArtifact) -> String {
        let mut builder = CodeBuilder::new().line(BANNER);

        if !artifact.imports.is_empty() {
            builder = builder.blank();
            for statement in &artifact.imports {
                builder = builder.line(statement);
            }
        }

        for plan in &artifact.mappers {
            builder = self.render_plan_into(plan, builder.blank());
        }
        builder.build()
    }

    fn render_plan_into(&self, plan: &MappingPlan, builder: CodeBuilder) -> CodeBuilder {
        let custom_marker = if plan.custom_map_optional { "?" } else { "" };

        let mut builder = builder
            .line(&format!("export const {} = (", mapper_name(plan)))
            .indent()
            .line(&format!("source: {},", plan.source_name))
            .line(&format!("customMap{}: {{", custom_marker))
            .indent();

        for prop in &plan.properties {
            let marker = if prop.optional { "?" } else { "" };
            builder = builder.line(&format!(
                "{}{}: (source: {}) => {};",
                prop.name, marker, plan.source_name, prop.return_type
            ));
        }

        builder = builder
            .dedent()
            .line("}")
            .dedent()
            .line(&format!("): {} => ({{", plan.target_name))
            .indent();

        for prop in &plan.properties {
            builder = builder.line(&property_value(plan, prop));
        }

        builder.dedent().line("});")
    }
}

fn property_value(plan: &MappingPlan, prop: &PropertyClassification) -> String {
    if prop.is_auto() {
        // an optional customMap parameter needs the optional chain to probe
        let probe = if plan.custom_map_optional {
            "customMap?."
        } else {
            "customMap."
        };
        format!(
            "{name}: {probe}{name} ? customMap.{name}(source) : source.{name},",
            name = prop.name,
            probe = probe
        )
    } else {
        format!("{name}: customMap.{name}(source),", name = prop.name)
    }
}
