//! # Coffeepot
//!
//! This crate builds client-side JavaScript from a tree of nodes: functions, raw script, alerts
//! and jQuery-style element chains. A [`Generator`] owns the top-level nodes and renders them
//! into one script, which the caller can inline into a page or send as a response body.
//!
//! Rust values are turned into script literals by [`serialize_args`]: booleans, integers,
//! strings, lists and keyword maps, nested to any depth.
//!
//! ## Usage Example
//!
//! ```rust
//! use coffeepot::{args, kwargs, Generator, JQueryChain, Render};
//!
//! fn main() -> coffeepot::Result<()> {
//!     let mut generator = Generator::default();
//!
//!     generator
//!         .add_function(Some("steve"), None)
//!         .add_element("#bob")
//!         .hide(args![3], kwargs! { "t" => 2 })?;
//!
//!     assert_eq!(
//!         generator.render(),
//!         r##"steve: function() { $("#bob").hide(3, { t:2 }); };"##
//!     );
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod library;
mod node;
mod serialize;
mod template;

use log::debug;

use crate::node::Queue;

pub use crate::config::{Configuration, ScriptLibrary, TemplateIntegration};
pub use crate::error::{GeneratorError, Result};
pub use crate::library::{ArityHint, ChainMethod, JQueryChain, JQUERY_METHODS};
pub use crate::node::{
    AlertNode, ElementNode, FunctionNode, MethodNode, Node, Render, ScriptNode,
};
pub use crate::serialize::{convert_value, serialize_args, NamedArgs, Value};
pub use crate::template::{
    Context, ScriptResponse, TemplateEngine, TemplateGenerator, TemplateHandle, TemplateNode,
    TemplateSource,
};

/// The root of a script tree.
///
/// Every `add_*` call appends to one top-level queue, and [`Render::render`] writes the queue
/// out in call order, each statement terminated by `;`.
#[derive(Debug, Default)]
pub struct Generator {
    configuration: Configuration,
    pub(crate) queue: Queue,
}

impl Generator {
    /// Construct a new generator with the given configuration.
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            queue: Queue::default(),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Appends an already built node.
    pub fn add_node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.queue.push(node.into());
        self
    }

    /// Appends a function and returns it so its body can be filled in.
    pub fn add_function(&mut self, name: Option<&str>, indent: Option<usize>) -> &mut FunctionNode {
        debug!("adding function {:?}", name);
        let library = self.configuration.script_library;
        self.queue
            .push_function(FunctionNode::with_library(name, indent, library))
    }

    pub fn add_script(&mut self, text: impl Into<String>) -> &mut ScriptNode {
        self.queue.push_script(ScriptNode::new(text))
    }

    pub fn add_alert(&mut self, message: impl Into<String>) -> &mut AlertNode {
        self.queue.push_alert(AlertNode::new(message))
    }

    /// Appends an element chain for `selector` and returns it.
    pub fn add_element(&mut self, selector: impl Into<String>) -> &mut ElementNode {
        let library = self.configuration.script_library;
        self.queue
            .push_element(ElementNode::with_library(selector, library))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every queued node, leaving the configuration in place.
    pub fn reset(&mut self) {
        debug!("resetting generator ({} node(s))", self.queue.len());
        self.queue.clear();
    }

    /// Extends this generator with template rendering through `engine`.
    ///
    /// Fails unless the configuration enables [`TemplateIntegration::Enabled`].
    pub fn with_templates<E: TemplateEngine>(self, engine: E) -> Result<TemplateGenerator<E>> {
        if !self.configuration.template_integration.is_enabled() {
            return Err(GeneratorError::invalid_operation(
                "template integration is disabled in this configuration",
            ));
        }
        Ok(TemplateGenerator::new(self, engine))
    }
}

impl Render for Generator {
    fn render(&self) -> String {
        if self.queue.is_empty() {
            return String::new();
        }

        format!("{};", self.queue.join(";\n"))
    }
}
