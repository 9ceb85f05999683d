//! Expression pretty-printing.
//!
//! Reports only need an expression rendered to a display string; the
//! rendering itself is pluggable through [`ExprPrinter`].

use crate::parser::Expr;

/// Renders an expression tree in the context of its enclosing function
pub trait ExprPrinter {
    fn print(&self, function_id: &str, expr: &Expr) -> String;
}

/// C-like infix rendering.
///
/// Local identifiers of the enclosing function lose their `function::`
/// prefix. Operators without an infix spelling print as `id(op, ...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfixPrinter;

impl ExprPrinter for InfixPrinter {
    fn print(&self, function_id: &str, expr: &Expr) -> String {
        let mut out = String::new();
        write_expr(&mut out, function_id, expr, false);
        out
    }
}

fn infix_operator(id: &str) -> Option<&'static str> {
    let op = match id {
        "=" => "==",
        "notequal" => "!=",
        "and" => "&&",
        "or" => "||",
        "+" => "+",
        "-" => "-",
        "*" => "*",
        "/" => "/",
        "mod" => "%",
        "<" => "<",
        "<=" => "<=",
        ">" => ">",
        ">=" => ">=",
        "bitand" => "&",
        "bitor" => "|",
        "bitxor" => "^",
        "shl" => "<<",
        "ashr" | "lshr" => ">>",
        "implies" => "==>",
        _ => return None,
    };
    Some(op)
}

fn write_expr(out: &mut String, function_id: &str, expr: &Expr, nested: bool) {
    match expr.id.as_str() {
        "symbol" => {
            let name = expr.named_id("identifier").unwrap_or("?");
            out.push_str(short_name(function_id, name));
        }
        "constant" => out.push_str(expr.named_id("value").unwrap_or("?")),
        "not" if expr.sub.len() == 1 => {
            out.push('!');
            write_expr(out, function_id, &expr.sub[0], true);
        }
        "if" if expr.sub.len() == 3 => {
            if nested {
                out.push('(');
            }
            write_expr(out, function_id, &expr.sub[0], true);
            out.push_str(" ? ");
            write_expr(out, function_id, &expr.sub[1], true);
            out.push_str(" : ");
            write_expr(out, function_id, &expr.sub[2], true);
            if nested {
                out.push(')');
            }
        }
        id => match infix_operator(id) {
            Some(op) if expr.sub.len() >= 2 => {
                if nested {
                    out.push('(');
                }
                for (i, operand) in expr.sub.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                        out.push_str(op);
                        out.push(' ');
                    }
                    write_expr(out, function_id, operand, true);
                }
                if nested {
                    out.push(')');
                }
            }
            _ if expr.sub.is_empty() => out.push_str(id),
            _ => {
                out.push_str(id);
                out.push('(');
                for (i, operand) in expr.sub.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_expr(out, function_id, operand, false);
                }
                out.push(')');
            }
        },
    }
}

fn short_name<'a>(function_id: &str, identifier: &'a str) -> &'a str {
    if function_id.is_empty() {
        return identifier;
    }
    identifier
        .strip_prefix(function_id)
        .and_then(|rest| rest.strip_prefix("::"))
        .unwrap_or(identifier)
}
