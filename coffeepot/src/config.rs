use std::fmt;
use std::str::FromStr;

use crate::library::{ChainMethod, JQUERY_METHODS};
use crate::GeneratorError;

/// The client-side library whose chain methods element nodes expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptLibrary {
    /// Plain script only. Element nodes accept generic method calls but no named chain methods.
    None,
    /// jQuery-style `$("selector").method()` chains.
    JQuery,
}

impl ScriptLibrary {
    /// The chain methods registered for this library.
    pub fn chain_methods(self) -> &'static [ChainMethod] {
        match self {
            ScriptLibrary::None => &[],
            ScriptLibrary::JQuery => JQUERY_METHODS,
        }
    }

    /// Looks up a registered chain method by its script name.
    pub fn chain_method(self, name: &str) -> Option<&'static ChainMethod> {
        self.chain_methods().iter().find(|m| m.name == name)
    }
}

impl fmt::Display for ScriptLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptLibrary::None => write!(f, "none"),
            ScriptLibrary::JQuery => write!(f, "jquery"),
        }
    }
}

impl FromStr for ScriptLibrary {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(ScriptLibrary::None),
            "jquery" => Ok(ScriptLibrary::JQuery),
            _ => Err(GeneratorError::UnknownScriptLibrary(s.to_string())),
        }
    }
}

/// Whether generators may be extended with template rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateIntegration {
    Disabled,
    Enabled,
}

impl TemplateIntegration {
    pub fn is_enabled(self) -> bool {
        self == TemplateIntegration::Enabled
    }
}

impl FromStr for TemplateIntegration {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "disabled" => Ok(TemplateIntegration::Disabled),
            "enabled" => Ok(TemplateIntegration::Enabled),
            _ => Err(GeneratorError::UnknownTemplateIntegration(s.to_string())),
        }
    }
}

/// This struct is used to configure optional behaviour of a [`Generator`](crate::Generator).
///
/// ## Usage Example
/// ```rust
/// use coffeepot::{Configuration, ScriptLibrary, TemplateIntegration};
///
/// let config = Configuration::default()
///     .with_script_library(ScriptLibrary::JQuery)
///     .with_template_integration(TemplateIntegration::Enabled)
///     .with_content_type("application/javascript");
/// ```
#[allow(clippy::return_self_not_must_use)]
#[derive(Clone, Debug)]
pub struct Configuration {
    /// The library used for element chains. Defaults to jQuery.
    pub script_library: ScriptLibrary,
    /// Enables template nodes and rendering to a response. Defaults to disabled.
    pub template_integration: TemplateIntegration,
    /// Content type for rendered responses. Defaults to `text/javascript`.
    pub content_type: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            script_library: ScriptLibrary::JQuery,
            template_integration: TemplateIntegration::Disabled,
            content_type: String::from("text/javascript"),
        }
    }
}

impl Configuration {
    /// Selects the script library whose chain methods element nodes expose.
    pub fn with_script_library(mut self, library: ScriptLibrary) -> Self {
        self.script_library = library;
        self
    }

    /// Allows generators built from this configuration to render templates.
    pub fn with_template_integration(mut self, integration: TemplateIntegration) -> Self {
        self.template_integration = integration;
        self
    }

    /// Sets the content type used by [`TemplateGenerator::render_to_response`](crate::TemplateGenerator::render_to_response).
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.script_library, ScriptLibrary::JQuery);
        assert_eq!(config.template_integration, TemplateIntegration::Disabled);
        assert_eq!(config.content_type, "text/javascript");
    }

    #[test]
    fn test_parse_script_library() {
        assert_eq!("none".parse::<ScriptLibrary>(), Ok(ScriptLibrary::None));
        assert_eq!("jQuery".parse::<ScriptLibrary>(), Ok(ScriptLibrary::JQuery));
        assert_eq!(
            "prototype".parse::<ScriptLibrary>(),
            Err(GeneratorError::UnknownScriptLibrary("prototype".to_string()))
        );
    }

    #[test]
    fn test_parse_template_integration() {
        assert_eq!(
            "none".parse::<TemplateIntegration>(),
            Ok(TemplateIntegration::Disabled)
        );
        assert_eq!(
            "enabled".parse::<TemplateIntegration>(),
            Ok(TemplateIntegration::Enabled)
        );
        assert!(matches!(
            "django".parse::<TemplateIntegration>(),
            Err(GeneratorError::UnknownTemplateIntegration(_))
        ));
    }

    #[test]
    fn test_chain_methods_per_library() {
        assert!(ScriptLibrary::None.chain_methods().is_empty());
        assert_eq!(ScriptLibrary::JQuery.chain_methods().len(), 11);
        assert!(ScriptLibrary::JQuery.chain_method("insertBefore").is_some());
        assert!(ScriptLibrary::JQuery.chain_method("fadeIn").is_none());
    }
}
