//! A minimal, hand-written JSON parser: a cursor-driven character scanner,
//! a handful of mutually recursive grammar rules, and a tagged [`Value`]
//! tree that can be rendered back to indented text.
//!
//! There is no tokenizer stage; lexing and parsing are fused into one
//! character-at-a-time descent, and the call stack is the only parse state.
//!
//! Two deliberate simplifications: string contents are taken verbatim (no
//! backslash escape is interpreted, so a `"` always terminates the string,
//! even directly after a backslash), and every number collapses to `f64`.
//! The printer is symmetric with the scanner, so any tree produced by
//! [`parse`] survives a print/re-parse round trip.
//!
//! ## Basic usage
//! ```
//! use simplejson::{json, parse, Value};
//!
//! let v = parse(r#"{"abc": "123", "list": [1, 2, 3], "age": 18}"#).unwrap();
//! assert_eq!(v, json!({"abc": "123", "list": [1, 2, 3], "age": 18}));
//! assert_eq!(v.get("age").and_then(Value::as_f64), Some(18.0));
//! assert_eq!(v["list"][1], json!(2));
//! ```
//!
//! Malformed input never panics: every failure surfaces as a [`ParseError`]
//! carrying the byte offset where the parse stopped.

macro_rules! opt_extract {
    ($this:expr, $pat:pat => $res:expr) => {
        if let $pat = $this {
            $res
        } else {
            None
        }
    };
}

#[macro_use]
mod mac;

mod parse;
mod scan;
pub mod value;
pub mod write;

pub use parse::{parse, ParseError, MAX_DEPTH};
pub use value::Value;
