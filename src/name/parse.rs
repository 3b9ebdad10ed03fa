//! Scanning of compiler-rendered type names.
//!
//! Renderings follow rustc's `type_name` format: lifetimes erased, paths
//! fully qualified, const arguments printed as literals. Everything here is
//! best effort over that format.

use crate::errors::{NameError, Result};

/// Leading-token classification of a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameShape {
    /// `u8`, `str`, `bool`, ...
    Primitive,
    /// A named path: structs, enums, unions, fn items, opaque types.
    Path,
    /// `&T`, `&mut T`
    Reference,
    /// `*const T`, `*mut T`
    RawPointer,
    /// `[T]`
    Slice,
    /// `[T; N]`
    Array,
    /// `()`, `(A, B)`
    Tuple,
    /// `fn(A) -> R` with any qualifier prefix
    FnPointer,
    /// `dyn Trait`
    TraitObject,
    /// `<T as Trait>::Item`
    QualifiedPath,
    /// `!`
    Never,
    /// `path::{{closure}}`
    Closure,
}

const PRIMITIVES: &[&str] = &[
    "bool", "char", "str", "f32", "f64", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16",
    "i32", "i64", "i128", "isize",
];

pub(crate) fn shape(rendering: &str) -> NameShape {
    match rendering {
        "!" => NameShape::Never,
        r if r.starts_with('&') => NameShape::Reference,
        r if r.starts_with("*const ") || r.starts_with("*mut ") => NameShape::RawPointer,
        r if r.starts_with('[') => {
            if has_top_level(r, ';') {
                NameShape::Array
            } else {
                NameShape::Slice
            }
        }
        r if r.starts_with('(') => NameShape::Tuple,
        r if r.starts_with("dyn ") => NameShape::TraitObject,
        r if r.starts_with('<') => NameShape::QualifiedPath,
        r if is_fn_pointer(r) => NameShape::FnPointer,
        r if r.ends_with("{{closure}}") => NameShape::Closure,
        r if PRIMITIVES.contains(&r) => NameShape::Primitive,
        _ => NameShape::Path,
    }
}

fn is_fn_pointer(rendering: &str) -> bool {
    let mut rest = rendering.strip_prefix("unsafe ").unwrap_or(rendering);
    if let Some(after) = rest.strip_prefix("extern \"") {
        rest = match after.split_once("\" ") {
            Some((_, tail)) => tail,
            None => return false,
        };
    }
    rest.starts_with("fn(")
}

/// Whether `needle` occurs at bracket depth 1 of a bracketed rendering.
fn has_top_level(rendering: &str, needle: char) -> bool {
    let mut depth = 0usize;
    let mut prev = None;
    for c in rendering.chars() {
        match c {
            '>' if prev == Some('-') => {}
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            c if c == needle && depth == 1 => return true,
            _ => {}
        }
        prev = Some(c);
    }
    false
}

/// Byte offset of the first generic argument list outside any bracket.
fn argument_list_start(rendering: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut prev: Option<char> = None;
    for (i, c) in rendering.char_indices() {
        match c {
            '<' if depth == 0 && prev.is_some_and(|p| p.is_alphanumeric() || p == '_') => {
                return Some(i)
            }
            '>' if prev == Some('-') => {}
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
        prev = Some(c);
    }
    None
}

/// Splits the first top-level generic argument list at its depth-0 commas.
///
/// `->` arrows and char literals inside arguments are skipped.
pub(crate) fn generic_arguments(rendering: &'static str) -> Result<Vec<&'static str>> {
    let open = argument_list_start(rendering).ok_or(NameError::NoGenericArguments(rendering))?;
    let body = open + 1;

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = body;
    let mut prev = None;
    let mut chars = rendering[body..].char_indices().map(|(i, c)| (i + body, c));

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' => skip_char_literal(&mut chars),
            '>' if prev == Some('-') => {}
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' if depth > 0 => depth -= 1,
            ',' if depth == 0 => {
                args.push(rendering[start..i].trim());
                start = i + 1;
            }
            '>' => {
                args.push(rendering[start..i].trim());
                return Ok(args);
            }
            ')' | ']' => {
                return Err(NameError::Unbalanced {
                    rendering,
                    offset: i,
                })
            }
            _ => {}
        }
        prev = Some(c);
    }

    Err(NameError::Unbalanced {
        rendering,
        offset: rendering.len(),
    })
}

fn skip_char_literal(chars: &mut impl Iterator<Item = (usize, char)>) {
    while let Some((_, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\'' => return,
            _ => {}
        }
    }
}

/// Drops every `ident::` path prefix, keeping last segments.
pub(crate) fn short(rendering: &str) -> String {
    let mut out = String::with_capacity(rendering.len());
    let mut segment_start = 0;
    let mut chars = rendering.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            if out.len() > segment_start {
                out.truncate(segment_start);
            } else {
                out.push_str("::");
                segment_start = out.len();
            }
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }
    out
}

/// Replaces argument lists nested deeper than `max_depth` with `<..>`.
pub(crate) fn collapse(rendering: &str, max_depth: usize) -> String {
    let mut out = String::with_capacity(rendering.len());
    let mut depth = 0usize;
    let mut prev = None;

    for c in rendering.chars() {
        match c {
            '>' if prev == Some('-') => {
                if depth <= max_depth {
                    out.push(c);
                }
            }
            '<' => {
                depth += 1;
                if depth == max_depth + 1 {
                    out.push_str("<..");
                } else if depth <= max_depth {
                    out.push(c);
                }
            }
            '>' => {
                if depth <= max_depth + 1 {
                    out.push(c);
                }
                depth = depth.saturating_sub(1);
            }
            _ if depth <= max_depth => out.push(c),
            _ => {}
        }
        prev = Some(c);
    }
    out
}
