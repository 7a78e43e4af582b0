//! Static catalog of scaffoldable routes.

use crate::domain::AppError;
use crate::domain::template_path::GENERATOR_ROUTE_DIR;

/// Selector value that expands to every catalog route.
pub const ALL_ROUTES: &str = "all";

/// Logical route name mapped to its template paths (relative to the routes directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteCatalogEntry {
    pub name: &'static str,
    pub templates: &'static [&'static str],
}

pub const ROUTE_CATALOG: &[RouteCatalogEntry] = &[
    RouteCatalogEntry { name: "home", templates: &["index"] },
    RouteCatalogEntry { name: "page", templates: &["pages/$pageHandle"] },
    RouteCatalogEntry { name: "cart", templates: &["cart"] },
    RouteCatalogEntry { name: "products", templates: &["products/$productHandle"] },
    RouteCatalogEntry { name: "collections", templates: &["collections/$collectionHandle"] },
    RouteCatalogEntry {
        name: "policies",
        templates: &["policies/index", "policies/$policyHandle"],
    },
    RouteCatalogEntry { name: "robots", templates: &["[robots.txt]"] },
    RouteCatalogEntry { name: "sitemap", templates: &["[sitemap.xml]"] },
    RouteCatalogEntry { name: "account", templates: &["account/login", "account/register"] },
];

/// Which routes a generation run should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSelector {
    All,
    Names(Vec<String>),
}

impl RouteSelector {
    /// Build a selector from raw CLI values. `all` selects everything once
    /// every other name is known; unknown names stay for resolution to report.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.iter().any(|name| name == ALL_ROUTES)
            && names.iter().all(|name| name == ALL_ROUTES || find_route(name).is_some())
        {
            RouteSelector::All
        } else {
            RouteSelector::Names(names)
        }
    }

    pub fn is_all(&self) -> bool {
        match self {
            RouteSelector::All => true,
            RouteSelector::Names(names) => names.iter().any(|name| name == ALL_ROUTES),
        }
    }
}

/// Every accepted selector name, including `all`.
pub fn route_choices() -> Vec<&'static str> {
    ROUTE_CATALOG.iter().map(|entry| entry.name).chain(std::iter::once(ALL_ROUTES)).collect()
}

pub fn find_route(name: &str) -> Option<&'static RouteCatalogEntry> {
    ROUTE_CATALOG.iter().find(|entry| entry.name == name)
}

fn all_templates() -> Vec<&'static str> {
    ROUTE_CATALOG.iter().flat_map(|entry| entry.templates.iter().copied()).collect()
}

/// Expand a selector into route template ids (`routes/<template>`), preserving order.
/// Every name is checked, including those listed next to `all`.
pub fn resolve_route_ids(selector: &RouteSelector) -> Result<Vec<String>, AppError> {
    let templates: Vec<&str> = match selector {
        RouteSelector::All => all_templates(),
        RouteSelector::Names(names) => {
            let mut templates = Vec::new();
            for name in names.iter().filter(|name| *name != ALL_ROUTES) {
                let entry = find_route(name).ok_or_else(|| AppError::UnknownRoute {
                    name: name.clone(),
                    available: route_choices().join(", "),
                })?;
                templates.extend(entry.templates.iter().copied());
            }
            if names.iter().any(|name| name == ALL_ROUTES) { all_templates() } else { templates }
        }
    };

    if templates.is_empty() {
        return Err(AppError::config_error(format!(
            "No route selected. Try one of {}.",
            route_choices().join(", ")
        )));
    }

    Ok(templates
        .into_iter()
        .map(|template| format!("{}/{}", GENERATOR_ROUTE_DIR, template))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_every_template_in_catalog_order() {
        let ids = resolve_route_ids(&RouteSelector::All).unwrap();
        assert_eq!(ids.len(), 11);
        assert_eq!(ids.first().map(String::as_str), Some("routes/index"));
        assert_eq!(ids.last().map(String::as_str), Some("routes/account/register"));
    }

    #[test]
    fn names_are_flattened_in_caller_order() {
        let selector = RouteSelector::from_names(["policies", "home"]);
        let ids = resolve_route_ids(&selector).unwrap();
        assert_eq!(ids, vec!["routes/policies/index", "routes/policies/$policyHandle", "routes/index"]);
    }

    #[test]
    fn unknown_name_lists_valid_choices() {
        let err = resolve_route_ids(&RouteSelector::from_names(["blog"])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'blog'"));
        assert!(message.contains("home, page, cart"));
        assert!(message.ends_with("account, all."));
    }

    #[test]
    fn empty_selection_is_a_configuration_error() {
        let err = resolve_route_ids(&RouteSelector::Names(Vec::new())).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn all_among_names_selects_everything() {
        assert!(RouteSelector::from_names(["home", "all"]).is_all());
    }

    #[test]
    fn unknown_name_next_to_all_is_still_an_error() {
        let selector = RouteSelector::from_names(["bogus", "all"]);
        assert_eq!(selector, RouteSelector::Names(vec!["bogus".to_string(), "all".to_string()]));
        let err = resolve_route_ids(&selector).unwrap_err();
        assert!(matches!(err, AppError::UnknownRoute { ref name, .. } if name == "bogus"));

        let names = RouteSelector::Names(vec!["all".to_string(), "blog".to_string()]);
        assert!(resolve_route_ids(&names).is_err());
    }

    #[test]
    fn all_inside_names_expands_the_catalog() {
        let names = RouteSelector::Names(vec!["home".to_string(), "all".to_string()]);
        assert_eq!(resolve_route_ids(&names).unwrap().len(), 11);
    }
}
