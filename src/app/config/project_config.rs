//! Layout and framework-convention detection for the destination project.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::domain::template_path::{GENERATOR_APP_DIR, normalize};
use crate::domain::{AppError, ConventionFlags};
use crate::ports::ProjectStore;

const REMIX_CONFIG_FILES: [&str; 3] = ["remix.config.js", "remix.config.mjs", "remix.config.cjs"];

/// Packages whose major version decides the routing conventions.
const FRAMEWORK_PACKAGES: [&str; 3] =
    ["@remix-run/react", "@remix-run/server-runtime", "@remix-run/dev"];

static APP_DIRECTORY: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"\bappDirectory\s*:\s*['"]([^'"]+)['"]"#));
static MAJOR_VERSION: LazyLock<Regex> = LazyLock::new(|| pattern(r"(\d+)"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|err| panic!("invalid config pattern {source:?}: {err}"))
}

fn future_flag(config: &str, name: &str) -> bool {
    Regex::new(&format!(r"\b{}\s*:\s*true\b", regex::escape(name)))
        .map(|flag| flag.is_match(config))
        .unwrap_or(false)
}

/// What generation needs to know about the destination project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// App source directory relative to the project root.
    pub app_directory: String,
    pub typescript: bool,
    pub convention_flags: ConventionFlags,
}

/// Inspect the project root for its app directory, language and conventions.
pub fn load_project_config<P: ProjectStore + ?Sized>(
    project: &P,
) -> Result<ProjectConfig, AppError> {
    let remix_config = REMIX_CONFIG_FILES
        .iter()
        .find(|file| project.exists(file))
        .map(|file| project.read_to_string(file))
        .transpose()?;

    let configured_dir = remix_config.as_deref().and_then(|config| APP_DIRECTORY.captures(config));
    let app_directory = match configured_dir {
        Some(captures) => {
            let configured = &captures[1];
            normalize(configured).filter(|dir| !dir.is_empty()).ok_or_else(|| {
                AppError::config_error(format!(
                    "appDirectory '{}' must point inside the project",
                    configured
                ))
            })?
        }
        None => GENERATOR_APP_DIR.to_string(),
    };

    let typescript = project.exists("tsconfig.json");

    let convention_flags = match framework_major_version(project)? {
        Some(major) if major >= 2 => ConventionFlags::v2(),
        _ => match remix_config.as_deref() {
            Some(config) => ConventionFlags {
                flat_routes: future_flag(config, "v2_routeConvention"),
                v2_meta: future_flag(config, "v2_meta"),
                v2_error_boundary: future_flag(config, "v2_errorBoundary"),
            },
            None => ConventionFlags::default(),
        },
    };

    debug!(app_directory = %app_directory, typescript, %convention_flags, "loaded project config");
    Ok(ProjectConfig { app_directory, typescript, convention_flags })
}

/// Major version of the framework declared in `package.json`, if any.
fn framework_major_version<P: ProjectStore + ?Sized>(
    project: &P,
) -> Result<Option<u64>, AppError> {
    if !project.exists("package.json") {
        return Ok(None);
    }
    let content = project.read_to_string("package.json")?;
    let manifest: Value =
        serde_json::from_str(&content).map_err(|err| AppError::config_parse("package.json", err))?;

    let version = ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section))
        .flat_map(|section| FRAMEWORK_PACKAGES.iter().filter_map(move |name| section.get(name)))
        .find_map(Value::as_str);

    Ok(version
        .and_then(|version| MAJOR_VERSION.captures(version))
        .and_then(|captures| captures[1].parse().ok()))
}
