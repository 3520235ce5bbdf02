use std::fmt;
use std::ops::{Deref, DerefMut};

use log::debug;

use crate::node::Render;
use crate::{Generator, NamedArgs, Result};

/// Values a template is rendered against.
pub type Context = NamedArgs;

/// A loaded or compiled template, ready to render.
pub trait TemplateHandle {
    fn render(&self, context: &Context) -> String;
}

/// The template engine a [`TemplateGenerator`] delegates to.
pub trait TemplateEngine {
    /// Loads a template by name, e.g. a path known to the engine.
    fn load_template(&self, identifier: &str) -> Result<Box<dyn TemplateHandle>>;

    /// Compiles literal template text.
    fn compile_inline(&self, text: &str) -> Result<Box<dyn TemplateHandle>>;
}

/// Where a template comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// A template the engine loads by name.
    Named(String),
    /// Literal template text.
    Inline(String),
}

impl TemplateSource {
    pub fn named(identifier: impl Into<String>) -> Self {
        TemplateSource::Named(identifier.into())
    }

    pub fn inline(text: impl Into<String>) -> Self {
        TemplateSource::Inline(text.into())
    }

    fn load(&self, engine: &dyn TemplateEngine) -> Result<Box<dyn TemplateHandle>> {
        match self {
            TemplateSource::Named(identifier) => {
                debug!("loading template `{}`", identifier);
                engine.load_template(identifier)
            }
            TemplateSource::Inline(text) => {
                debug!("compiling inline template ({} bytes)", text.len());
                engine.compile_inline(text)
            }
        }
    }
}

/// Script produced by rendering templates against a shared context.
pub struct TemplateNode {
    context: Context,
    templates: Vec<Box<dyn TemplateHandle>>,
}

impl fmt::Debug for TemplateNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TemplateNode({} template(s), {} context key(s))",
            self.templates.len(),
            self.context.len()
        )
    }
}

impl TemplateNode {
    /// Binds a loaded template to `context`.
    pub fn new(template: Box<dyn TemplateHandle>, context: Context) -> Self {
        Self {
            context,
            templates: vec![template],
        }
    }

    /// Appends another template, rendered after the existing ones with the same context.
    pub fn add_template(&mut self, template: Box<dyn TemplateHandle>) -> &mut Self {
        self.templates.push(template);
        self
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl Render for TemplateNode {
    fn render(&self) -> String {
        self.templates
            .iter()
            .map(|t| t.render(&self.context))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A rendered script together with the content type it should be served as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptResponse {
    pub body: String,
    pub content_type: String,
}

#[cfg(feature = "fastly")]
impl From<ScriptResponse> for fastly::Response {
    fn from(response: ScriptResponse) -> Self {
        fastly::Response::from_body(response.body)
            .with_header(fastly::http::header::CONTENT_TYPE, response.content_type)
    }
}

/// A [`Generator`] that can also render templates and wrap its output as a response.
///
/// Built with [`Generator::with_templates`], which only succeeds when the generator's
/// configuration enables template integration.
pub struct TemplateGenerator<E> {
    generator: Generator,
    engine: E,
}

impl<E> fmt::Debug for TemplateGenerator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateGenerator")
            .field("generator", &self.generator)
            .finish_non_exhaustive()
    }
}

impl<E: TemplateEngine> TemplateGenerator<E> {
    pub(crate) fn new(generator: Generator, engine: E) -> Self {
        Self { generator, engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Loads `source` through the configured engine.
    ///
    /// Use this to build a handle for [`TemplateNode::add_template`].
    pub fn load(&self, source: &TemplateSource) -> Result<Box<dyn TemplateHandle>> {
        source.load(&self.engine)
    }

    /// Loads `source`, binds `context`, and appends the result as a top-level node.
    ///
    /// A template that fails to load leaves the queue unchanged.
    pub fn add_template(&mut self, source: TemplateSource, context: Context) -> Result<&mut TemplateNode> {
        let template = self.load(&source)?;
        Ok(self
            .generator
            .queue
            .push_template(TemplateNode::new(template, context)))
    }

    /// Renders the script as a response with the configured content type.
    pub fn render_to_response(&self) -> ScriptResponse {
        let content_type = self.generator.configuration().content_type.clone();
        self.render_to_response_as(content_type)
    }

    /// Renders the script as a response with the given content type.
    pub fn render_to_response_as(&self, content_type: impl Into<String>) -> ScriptResponse {
        ScriptResponse {
            body: self.generator.render(),
            content_type: content_type.into(),
        }
    }

    pub fn into_inner(self) -> Generator {
        self.generator
    }
}

impl<E> Deref for TemplateGenerator<E> {
    type Target = Generator;

    fn deref(&self) -> &Generator {
        &self.generator
    }
}

impl<E> DerefMut for TemplateGenerator<E> {
    fn deref_mut(&mut self) -> &mut Generator {
        &mut self.generator
    }
}

impl<E> Render for TemplateGenerator<E> {
    fn render(&self) -> String {
        self.generator.render()
    }
}
