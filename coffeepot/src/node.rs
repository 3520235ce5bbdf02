use log::{debug, warn};

use crate::serialize::serialize_args;
use crate::template::TemplateNode;
use crate::{GeneratorError, NamedArgs, Result, ScriptLibrary, Value};

/// Anything that can be written out as a piece of script.
pub trait Render {
    fn render(&self) -> String;
}

/// One entry in a generator or function body.
#[derive(Debug)]
pub enum Node {
    Script(ScriptNode),
    Alert(AlertNode),
    Method(MethodNode),
    Function(FunctionNode),
    Element(ElementNode),
    Template(TemplateNode),
}

impl Node {
    /// Short name of the node kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Script(_) => "script",
            Node::Alert(_) => "alert",
            Node::Method(_) => "method",
            Node::Function(_) => "function",
            Node::Element(_) => "element",
            Node::Template(_) => "template",
        }
    }
}

impl Render for Node {
    fn render(&self) -> String {
        match self {
            Node::Script(node) => node.render(),
            Node::Alert(node) => node.render(),
            Node::Method(node) => node.render(),
            Node::Function(node) => node.render(),
            Node::Element(node) => node.render(),
            Node::Template(node) => node.render(),
        }
    }
}

macro_rules! impl_into_node {
    ($($variant:ident($ty:ty)),*) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_into_node!(
    Script(ScriptNode),
    Alert(AlertNode),
    Method(MethodNode),
    Function(FunctionNode),
    Element(ElementNode),
    Template(TemplateNode)
);

/// Raw script, written out exactly as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptNode {
    text: String,
}

impl ScriptNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Render for ScriptNode {
    fn render(&self) -> String {
        self.text.clone()
    }
}

/// A standard `alert("...")` dialogue. The message is not escaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertNode {
    message: String,
}

impl AlertNode {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Render for AlertNode {
    fn render(&self) -> String {
        format!("alert(\"{}\")", self.message)
    }
}

/// A single method invocation, `name(args, { kwargs })`.
///
/// These are the links of an [`ElementNode`] chain.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodNode {
    name: String,
    args: Vec<Value>,
    kwargs: NamedArgs,
}

impl MethodNode {
    pub fn new(name: impl Into<String>, args: Vec<Value>, kwargs: NamedArgs) -> Self {
        Self {
            name: name.into(),
            args,
            kwargs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn kwargs(&self) -> &NamedArgs {
        &self.kwargs
    }
}

impl Render for MethodNode {
    fn render(&self) -> String {
        format!(
            "{}({})",
            self.name,
            serialize_args(&self.args, &self.kwargs, None)
        )
    }
}

macro_rules! queue {
    ($($field:ident, $push:ident => $variant:ident($ty:ty);)*) => {
        /// Position of a queued node in its per-kind list.
        #[derive(Clone, Copy, Debug)]
        enum Slot {
            $($variant(usize),)*
        }

        /// Ordered list of child nodes owned by a generator or function.
        #[derive(Debug, Default)]
        pub(crate) struct Queue {
            order: Vec<Slot>,
            $($field: Vec<$ty>,)*
        }

        impl Queue {
            $(
                pub(crate) fn $push(&mut self, node: $ty) -> &mut $ty {
                    let index = self.$field.len();
                    self.$field.push(node);
                    self.order.push(Slot::$variant(index));
                    &mut self.$field[index]
                }
            )*

            pub(crate) fn push(&mut self, node: Node) {
                match node {
                    $(Node::$variant(inner) => {
                        self.$push(inner);
                    })*
                }
            }

            pub(crate) fn clear(&mut self) {
                self.order.clear();
                $(self.$field.clear();)*
            }

            fn render_slot(&self, slot: Slot) -> String {
                match slot {
                    $(Slot::$variant(index) => self.$field[index].render(),)*
                }
            }
        }
    };
}

queue! {
    scripts, push_script => Script(ScriptNode);
    alerts, push_alert => Alert(AlertNode);
    methods, push_method => Method(MethodNode);
    functions, push_function => Function(FunctionNode);
    elements, push_element => Element(ElementNode);
    templates, push_template => Template(TemplateNode);
}

impl Queue {
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn join(&self, sep: &str) -> String {
        self.order
            .iter()
            .map(|slot| self.render_slot(*slot))
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// A `function() { ... }` wrapping several statements.
///
/// Without a name the function is anonymous. Without an indent width (or with a width of zero)
/// the body is written on one line with `; ` between statements; otherwise each statement starts
/// on a new line indented by that many spaces.
#[derive(Debug)]
pub struct FunctionNode {
    name: Option<String>,
    indent: Option<usize>,
    library: ScriptLibrary,
    queue: Queue,
}

impl FunctionNode {
    pub fn new(name: Option<&str>, indent: Option<usize>) -> Self {
        Self::with_library(name, indent, ScriptLibrary::JQuery)
    }

    pub(crate) fn with_library(
        name: Option<&str>,
        indent: Option<usize>,
        library: ScriptLibrary,
    ) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(String::from),
            indent,
            library,
            queue: Queue::default(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    /// Appends an already built node to the body.
    pub fn add_node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.queue.push(node.into());
        self
    }

    /// Appends a nested function and returns it.
    pub fn add_function(&mut self, name: Option<&str>, indent: Option<usize>) -> &mut FunctionNode {
        debug!("adding nested function {:?}", name);
        let library = self.library;
        self.queue
            .push_function(FunctionNode::with_library(name, indent, library))
    }

    /// Appends an element chain for `selector` and returns it.
    pub fn add_element(&mut self, selector: impl Into<String>) -> &mut ElementNode {
        let library = self.library;
        self.queue
            .push_element(ElementNode::with_library(selector, library))
    }

    pub fn add_script(&mut self, text: impl Into<String>) -> &mut ScriptNode {
        self.queue.push_script(ScriptNode::new(text))
    }

    pub fn add_alert(&mut self, message: impl Into<String>) -> &mut AlertNode {
        self.queue.push_alert(AlertNode::new(message))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes every statement from the body.
    pub fn reset(&mut self) {
        self.queue.clear();
    }
}

impl Render for FunctionNode {
    fn render(&self) -> String {
        let sep = match self.indent {
            Some(width) if width > 0 => format!(";\n{}", " ".repeat(width)),
            _ => String::from("; "),
        };

        let mut result = match &self.name {
            Some(name) => format!("{name}: function() {{ "),
            None => String::from("function() { "),
        };

        if self.queue.is_empty() {
            result.push('}');
        } else {
            result.push_str(&self.queue.join(&sep));
            result.push_str("; }");
        }

        result
    }
}

/// One line of chained method calls against a selector: `$("#id").hide().show()`.
///
/// Only method calls may be added to an element.
#[derive(Clone, Debug, PartialEq)]
pub struct ElementNode {
    selector: String,
    library: ScriptLibrary,
    methods: Vec<MethodNode>,
}

impl ElementNode {
    pub fn new(selector: impl Into<String>) -> Self {
        Self::with_library(selector, ScriptLibrary::JQuery)
    }

    pub(crate) fn with_library(selector: impl Into<String>, library: ScriptLibrary) -> Self {
        let selector = selector.into();
        debug!("adding element chain for `{}`", selector);
        Self {
            selector,
            library,
            methods: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn library(&self) -> ScriptLibrary {
        self.library
    }

    /// Appends a node to the chain. Anything other than a [`MethodNode`] is rejected and the
    /// chain is left untouched.
    pub fn add_node(&mut self, node: impl Into<Node>) -> Result<&mut Self> {
        match node.into() {
            Node::Method(method) => {
                self.methods.push(method);
                Ok(self)
            }
            other => {
                warn!(
                    "rejected {} node on element `{}`",
                    other.kind(),
                    self.selector
                );
                Err(GeneratorError::invalid_operation(format!(
                    "element `{}` only accepts method calls, got a {} node",
                    self.selector,
                    other.kind()
                )))
            }
        }
    }

    /// Appends `name(args, { kwargs })` to the chain, whatever the name.
    pub fn add_method(
        &mut self,
        name: impl Into<String>,
        args: Vec<Value>,
        kwargs: NamedArgs,
    ) -> &mut Self {
        self.methods.push(MethodNode::new(name, args, kwargs));
        self
    }

    /// Appends a chain method registered for this element's script library.
    pub fn invoke(&mut self, name: &str, args: Vec<Value>, kwargs: NamedArgs) -> Result<&mut Self> {
        let method = match self.library.chain_method(name) {
            Some(method) => method,
            None => {
                warn!("`{}` is not registered for {}", name, self.library);
                return Err(GeneratorError::invalid_operation(format!(
                    "`{}` is not a chain method of the {} library",
                    name, self.library
                )));
            }
        };

        if !method.arity.accepts(args.len()) {
            warn!("`{}` called with {} argument(s)", name, args.len());
            return Err(GeneratorError::invalid_operation(format!(
                "`{}` needs {:?} positional arguments, got {}",
                name,
                method.arity,
                args.len()
            )));
        }

        Ok(self.add_method(method.name, args, kwargs))
    }

    pub fn methods(&self) -> &[MethodNode] {
        &self.methods
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl Render for ElementNode {
    fn render(&self) -> String {
        if self.methods.is_empty() {
            return String::new();
        }

        let chain = self
            .methods
            .iter()
            .map(Render::render)
            .collect::<Vec<_>>()
            .join(".");
        format!("$(\"{}\").{}", self.selector, chain)
    }
}
