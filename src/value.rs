use indexmap::IndexMap;

use crate::parse::ParseError;
use crate::write::Writer;

/// Map backing [`Value::Object`]: keys stay in insertion order and a
/// duplicate key overwrites the value while keeping its original slot.
pub type Map = IndexMap<String, Value>;

/// One parsed JSON production. The tree owns all of its data, so the input
/// text can be dropped as soon as the parse returns.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    /// All JSON numbers, integral or fractional.
    Number(f64),
    /// Raw text between the delimiting quotes, characters taken verbatim.
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
    pub fn is_str(&self) -> bool {
        matches!(self, Self::String(_))
    }
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        opt_extract!(self, Self::Bool(b) => Some(*b))
    }
    pub fn as_f64(&self) -> Option<f64> {
        opt_extract!(self, Self::Number(n) => Some(*n))
    }
    pub fn as_str(&self) -> Option<&str> {
        opt_extract!(self, Self::String(s) => Some(&**s))
    }
    pub fn as_array(&self) -> Option<&[Value]> {
        opt_extract!(self, Self::Array(a) => Some(&a[..]))
    }
    pub fn as_object(&self) -> Option<&Map> {
        opt_extract!(self, Self::Object(o) => Some(o))
    }

    pub fn into_str(self) -> Option<String> {
        opt_extract!(self, Self::String(s) => Some(s))
    }
    pub fn into_array(self) -> Option<Vec<Value>> {
        opt_extract!(self, Self::Array(a) => Some(a))
    }
    pub fn into_object(self) -> Option<Map> {
        opt_extract!(self, Self::Object(o) => Some(o))
    }

    /// Field lookup on an object; `None` for a missing key or a non-object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Element lookup on an array; `None` out of bounds or on a non-array.
    pub fn at(&self, i: usize) -> Option<&Value> {
        self.as_array().and_then(|a| a.get(i))
    }

    /// Render to text: indented with one tab per nesting level when
    /// `pretty`, no whitespace at all otherwise.
    pub fn to_string(&self, pretty: bool) -> String {
        let mut w = Writer::new(pretty);
        w.put_value(self);
        w.finish()
    }
}

static NULL: Value = Value::Null;

impl std::ops::Index<usize> for Value {
    type Output = Value;
    fn index(&self, i: usize) -> &Value {
        self.at(i).unwrap_or(&NULL)
    }
}

impl std::ops::Index<&str> for Value {
    type Output = Value;
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

macro_rules! impl_from_num {
    ($($t:ty),+ $(,)?) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Self::Number(n as f64)
            }
        }
    )+};
}
impl_from_num!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32);

impl std::str::FromStr for Value {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, ParseError> {
        crate::parse::parse(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string(false))
    }
}
