//! ednr-print - Canonical EDN rendering.
//!
//! Renders a [`Value`] tree back to EDN text whose re-parse yields an
//! equal tree. Atoms render bit-exactly; containers render their items
//! in recorded order with a single space between adjacent items and no
//! trailing space.
//!
//! The one discretionary knob is [`PrintOptions::char_names`]: the lexer
//! accepts `\newline` and friends, but by default the printer emits the
//! generic `\X` form for every character. Turning the option on restores
//! the names for the four recognized control characters, which keeps the
//! output lexable when character values like `\n` occur in the tree.
//!
//! # Example
//!
//! ```
//! use ednr_par::Value;
//! use ednr_print::print;
//!
//! let v = Value::Vector(vec![Value::integer(1), Value::keyword("two")]);
//! assert_eq!(print(&v), "[1 :two]");
//! ```

use ednr_par::{Special, Value};

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintOptions {
    /// Emit `\newline` `\return` `\tab` `\space` instead of the generic
    /// `\X` form for those four characters.
    pub char_names: bool,
}

/// Renders `value` with default options.
pub fn print(value: &Value) -> String {
    print_with(value, &PrintOptions::default())
}

/// Renders `value` with explicit options.
pub fn print_with(value: &Value, options: &PrintOptions) -> String {
    let mut out = String::new();
    write_value(&mut out, value, options);
    out
}

/// Renders a sequence of top-level values, one per line.
pub fn print_all(values: &[Value], options: &PrintOptions) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_value(&mut out, value, options);
    }
    out
}

fn write_value(out: &mut String, value: &Value, options: &PrintOptions) {
    match value {
        Value::Nil => out.push_str("nil"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(x) => write_float(out, *x),
        Value::Rational(r) => out.push_str(&r.to_string()),
        Value::SpecialFloat(special) => out.push_str(match special {
            Special::PosInf => "##Inf",
            Special::NegInf => "##-Inf",
            Special::NaN => "##NaN",
        }),
        Value::Char(c) => write_char(out, *c, options),
        Value::String(s) => write_string(out, s),
        Value::Keyword(name) => {
            out.push(':');
            out.push_str(name);
        },
        Value::KeywordNil => out.push_str(":nil"),
        Value::Symbol(name) => out.push_str(name),
        Value::List(items) => {
            out.push('(');
            write_items(out, items, options);
            out.push(')');
        },
        Value::Vector(items) => {
            out.push('[');
            write_items(out, items, options);
            out.push(']');
        },
        Value::Set(items) => {
            out.push_str("#{");
            write_items(out, items, options);
            out.push('}');
        },
        Value::Map(pairs) => {
            out.push('{');
            for (i, (key, val)) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                write_value(out, key, options);
                out.push(' ');
                write_value(out, val, options);
            }
            out.push('}');
        },
        Value::Tagged(tag, inner) => {
            out.push('#');
            out.push_str(tag);
            out.push(' ');
            write_value(out, inner, options);
        },
        Value::Discard(inner) => {
            out.push_str("#_ ");
            write_value(out, inner, options);
        },
        Value::Metadata(target, meta) => {
            out.push('^');
            write_value(out, meta, options);
            out.push(' ');
            write_value(out, target, options);
        },
    }
}

fn write_items(out: &mut String, items: &[Value], options: &PrintOptions) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        write_value(out, item, options);
    }
}

/// Writes a float in a shape the lexer accepts back: the mantissa always
/// carries a decimal point, including under an exponent.
fn write_float(out: &mut String, x: f64) {
    // non-finite floats have dedicated sentinel syntax
    if x.is_nan() {
        out.push_str("##NaN");
        return;
    }
    if x.is_infinite() {
        out.push_str(if x > 0.0 { "##Inf" } else { "##-Inf" });
        return;
    }

    let repr = format!("{x:?}");
    match repr.find(['e', 'E']) {
        Some(pos) if !repr[..pos].contains('.') => {
            out.push_str(&repr[..pos]);
            out.push_str(".0");
            out.push_str(&repr[pos..]);
        },
        Some(_) => out.push_str(&repr),
        None if !repr.contains('.') => {
            out.push_str(&repr);
            out.push_str(".0");
        },
        None => out.push_str(&repr),
    }
}

fn write_char(out: &mut String, c: char, options: &PrintOptions) {
    if options.char_names {
        let name = match c {
            '\n' => Some("newline"),
            '\r' => Some("return"),
            '\t' => Some("tab"),
            ' ' => Some("space"),
            _ => None,
        };
        if let Some(name) = name {
            out.push('\\');
            out.push_str(name);
            return;
        }
    }
    out.push('\\');
    out.push(c);
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
