use std::convert::TryFrom;

use indexmap::IndexMap;
use log::trace;

/// Keyword arguments for a method call, rendered in insertion order.
pub type NamedArgs = IndexMap<String, Value>;

/// A native value that can be written as a script literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Sequence(Vec<Value>),
    Mapping(NamedArgs),
    /// Anything else, carried as its display text and quoted like [`Value::Text`].
    Other(String),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),*) => {
        $(
            /// Values past the `i64` range are kept as quoted text rather than truncated.
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Value::Other(value.to_string()), Value::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize, i128, u128, isize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Other(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<NamedArgs> for Value {
    fn from(named: NamedArgs) -> Self {
        Value::Mapping(named)
    }
}

/// Builds a positional argument list, converting each item into a [`Value`].
///
/// ```rust
/// let args = coffeepot::args![3, "slow", true];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),+]
    };
}

/// Builds a [`NamedArgs`] map, keeping the order the entries are written in.
///
/// ```rust
/// let kwargs = coffeepot::kwargs! { "t" => 2, "easing" => "swing" };
/// assert_eq!(coffeepot::serialize_args(&[], &kwargs, None), r#"{ t:2, easing:"swing" }"#);
/// ```
#[macro_export]
macro_rules! kwargs {
    () => {
        $crate::NamedArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut named = $crate::NamedArgs::new();
        $(
            named.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        named
    }};
}

/// Formats positional and keyword arguments into a script argument list.
///
/// Keys are not quoted, which is what separates this from JSON output:
///
/// ```text
/// "one", 2, { url:"/path/tostuff.html", color:"green", flag:true }
/// ```
///
/// With `indent` set, every item starts on its own line indented by that many spaces, and the
/// entries of the keyword block gain two more so they nest under their container.
pub fn serialize_args(args: &[Value], kwargs: &NamedArgs, indent: Option<usize>) -> String {
    let sep = match indent {
        Some(width) => format!(",\n{}", " ".repeat(width)),
        None => String::from(", "),
    };
    let kwsep = match indent {
        Some(_) => format!("{sep}  "),
        None => sep.clone(),
    };

    let mut result = String::new();

    if !args.is_empty() {
        trace!("serializing {} positional argument(s)", args.len());
        result = args.iter().map(convert_value).collect::<Vec<_>>().join(&sep);
    }

    if !kwargs.is_empty() {
        trace!("serializing {} keyword argument(s)", kwargs.len());
        if !args.is_empty() {
            result.push_str(&sep);
        }
        let entries = kwargs
            .iter()
            .map(|(name, value)| format!("{name}:{}", convert_value(value)))
            .collect::<Vec<_>>();
        result.push_str(&format!("{{ {} }}", entries.join(&kwsep)));
    }

    result
}

/// Converts a single value into its script literal form.
///
/// Text is wrapped in double quotes as-is; embedded quotes are not escaped.
pub fn convert_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        // empty containers never recurse
        Value::Mapping(named) if named.is_empty() => String::from("{ }"),
        Value::Mapping(named) => serialize_args(&[], named, None),
        Value::Sequence(items) if items.is_empty() => String::from("[]"),
        Value::Sequence(items) => format!("[{}]", serialize_args(items, &NamedArgs::new(), None)),
        Value::Text(text) | Value::Other(text) => format!("\"{text}\""),
    }
}
