use crate::node::ElementNode;
use crate::{NamedArgs, Result, Value};

/// How many positional arguments a chain method needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArityHint {
    /// Any number of positional arguments, including none.
    Any,
    /// At least this many positional arguments.
    AtLeast(usize),
}

impl ArityHint {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            ArityHint::Any => true,
            ArityHint::AtLeast(min) => count >= min,
        }
    }
}

/// A named method that can be chained onto an element node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainMethod {
    pub name: &'static str,
    pub arity: ArityHint,
}

macro_rules! chain_methods {
    ($($fn_name:ident => $name:literal, $arity:expr;)*) => {
        /// Chain methods registered for [`ScriptLibrary::JQuery`](crate::ScriptLibrary::JQuery).
        pub const JQUERY_METHODS: &[ChainMethod] = &[
            $(ChainMethod { name: $name, arity: $arity },)*
        ];

        /// jQuery chain methods on an element node.
        ///
        /// Each call appends one method call to the same element and hands the element back, so
        /// `e.hide(..)?.show(..)?` extends a single chain.
        pub trait JQueryChain {
            $(
                #[doc = concat!("Appends `.", $name, "(..)` to the chain.")]
                fn $fn_name(&mut self, args: Vec<Value>, kwargs: NamedArgs) -> Result<&mut ElementNode>;
            )*
        }

        impl JQueryChain for ElementNode {
            $(
                fn $fn_name(&mut self, args: Vec<Value>, kwargs: NamedArgs) -> Result<&mut ElementNode> {
                    self.invoke($name, args, kwargs)
                }
            )*
        }
    };
}

chain_methods! {
    click => "click", ArityHint::Any;
    show => "show", ArityHint::Any;
    hide => "hide", ArityHint::Any;
    append => "append", ArityHint::AtLeast(1);
    before => "before", ArityHint::AtLeast(1);
    after => "after", ArityHint::AtLeast(1);
    prepend => "prepend", ArityHint::AtLeast(1);
    insert_before => "insertBefore", ArityHint::AtLeast(1);
    insert_after => "insertAfter", ArityHint::AtLeast(1);
    replace_with => "replaceWith", ArityHint::AtLeast(1);
    html => "html", ArityHint::Any;
}
