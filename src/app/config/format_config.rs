//! Prettier configuration lookup for the destination project.

use serde_json::Value;
use tracing::debug;

use crate::domain::{AppError, FormatOptions};
use crate::ports::ProjectStore;

/// Syntax a config file is written in.
#[derive(Debug, Clone, Copy)]
enum ConfigSyntax {
    /// `.prettierrc` may hold either JSON or YAML.
    JsonOrYaml,
    Json,
    Yaml,
    Toml,
}

/// Config files looked up at the project root, in priority order.
const CONFIG_FILES: [(&str, ConfigSyntax); 6] = [
    (".prettierrc", ConfigSyntax::JsonOrYaml),
    (".prettierrc.json", ConfigSyntax::Json),
    (".prettierrc.yaml", ConfigSyntax::Yaml),
    (".prettierrc.yml", ConfigSyntax::Yaml),
    (".prettierrc.toml", ConfigSyntax::Toml),
    ("package.json", ConfigSyntax::Json),
];

/// Resolve the formatter options of the destination project.
///
/// Keys missing from a found config take Prettier's defaults; a project
/// without any config gets the storefront defaults.
pub fn load_format_options<P: ProjectStore + ?Sized>(
    project: &P,
) -> Result<FormatOptions, AppError> {
    for (file, syntax) in CONFIG_FILES {
        if !project.exists(file) {
            continue;
        }
        let content = project.read_to_string(file)?;

        let options = if file == "package.json" {
            let manifest: Value =
                serde_json::from_str(&content).map_err(|err| AppError::config_parse(file, err))?;
            match manifest.get("prettier") {
                Some(config @ Value::Object(_)) => serde_json::from_value(config.clone())
                    .map_err(|err| AppError::config_parse(file, err))?,
                // A string names a shared config package, which is not resolved.
                _ => continue,
            }
        } else {
            parse_config(file, &content, syntax)?
        };

        debug!(file, ?options, "loaded formatter config");
        return Ok(options);
    }

    debug!("no formatter config found, using storefront defaults");
    Ok(FormatOptions::storefront_defaults())
}

fn parse_config(
    file: &str,
    content: &str,
    syntax: ConfigSyntax,
) -> Result<FormatOptions, AppError> {
    if content.trim().is_empty() {
        return Ok(FormatOptions::default());
    }
    match syntax {
        ConfigSyntax::Json => {
            serde_json::from_str(content).map_err(|err| AppError::config_parse(file, err))
        }
        ConfigSyntax::Yaml => {
            serde_yaml::from_str(content).map_err(|err| AppError::config_parse(file, err))
        }
        ConfigSyntax::Toml => {
            toml::from_str(content).map_err(|err| AppError::config_parse(file, err))
        }
        ConfigSyntax::JsonOrYaml => serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|err| AppError::config_parse(file, err)),
    }
}
