use std::borrow::Cow;
use std::fmt::{self, Display};

// -------------------------------------------------------------------------------------------------
// Value
// -------------------------------------------------------------------------------------------------
/// An argument that can be substituted into a template or written on a line.
///
/// This is a closed set of kinds; anything else that has a textual representation can be carried
/// with [`Value::display`].
#[derive(Clone, Copy)]
pub enum Value<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Str(&'a str),
    Char(char),
    Display(&'a dyn Display),
}

impl<'a> Value<'a> {
    /// Wrap anything that implements `Display`.
    #[inline]
    pub fn display<T: Display>(value: &'a T) -> Self {
        Value::Display(value)
    }

    /// Classify a raw string argument.
    ///
    /// Integers are tried first (signed, then unsigned for values beyond `i64::MAX`), then floats,
    /// then the literals `true` and `false`. Everything else is a string.
    pub fn infer(raw: &'a str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            Value::Int(i)
        } else if let Ok(u) = raw.parse::<u64>() {
            Value::Uint(u)
        } else if let Some(f) = parse_float(raw) {
            Value::Float(f)
        } else {
            match raw {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::Str(raw),
            }
        }
    }

    /// A short name for the kind of this value, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Str(_) => "str",
            Value::Char(_) => "char",
            Value::Display(_) => "display",
        }
    }
}

// `f64::from_str` accepts `inf`, `NaN` and friends; treat those as plain strings.
fn parse_float(raw: &str) -> Option<f64> {
    let f = raw.parse::<f64>().ok()?;
    if f.is_finite() {
        Some(f)
    } else {
        None
    }
}

impl Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => v.fmt(f),
            Value::Uint(v) => v.fmt(f),
            Value::Float(v) => v.fmt(f),
            Value::Bool(v) => v.fmt(f),
            Value::Str(v) => f.write_str(v),
            Value::Char(v) => v.fmt(f),
            Value::Display(v) => v.fmt(f),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Char(v) => f.debug_tuple("Char").field(v).finish(),
            Value::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
        }
    }
}

impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Display(a), Value::Display(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}

// -------------------------------------------------------------------------------------------------
// conversions
// -------------------------------------------------------------------------------------------------
macro_rules! impl_from {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                #[inline]
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from!(Int, i64; i8, i16, i32, i64, isize);
impl_from!(Uint, u64; u8, u16, u32, u64, usize);

impl From<f64> for Value<'_> {
    #[inline]
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

// Widened through the shortest decimal form, so `0.1f32` still displays as `0.1`.
impl From<f32> for Value<'_> {
    #[inline]
    fn from(v: f32) -> Self {
        Value::Float(v.to_string().parse().unwrap_or(f64::from(v)))
    }
}

impl From<bool> for Value<'_> {
    #[inline]
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value<'_> {
    #[inline]
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    #[inline]
    fn from(v: &'a String) -> Self {
        Value::Str(v.as_str())
    }
}

impl<'a> From<&'a Cow<'a, str>> for Value<'a> {
    #[inline]
    fn from(v: &'a Cow<'a, str>) -> Self {
        Value::Str(v.as_ref())
    }
}
