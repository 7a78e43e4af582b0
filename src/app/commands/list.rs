use crate::domain::ROUTE_CATALOG;
use crate::domain::template_path::GENERATOR_ROUTE_DIR;

/// One catalog entry with its template ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    pub name: String,
    pub templates: Vec<String>,
}

/// List every scaffoldable route in catalog order.
pub fn execute() -> Vec<RouteSummary> {
    ROUTE_CATALOG
        .iter()
        .map(|entry| RouteSummary {
            name: entry.name.to_string(),
            templates: entry
                .templates
                .iter()
                .map(|template| format!("{}/{}", GENERATOR_ROUTE_DIR, template))
                .collect(),
        })
        .collect()
}
