//! Structured filter expressions, serialized to the engine's filter syntax.
//!
//! Callers build filters as values; only this module knows the engine's
//! textual DSL. String values are escaped, so a category name containing a
//! quote cannot break out of the expression.

use std::fmt::Write as _;

/// Comparison operator for numeric conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

/// A filter over indexed attributes: equality, numeric comparison, AND.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterExpr {
    /// `field = 'value'`
    Eq { field: String, value: String },
    /// `field <op> number`
    Cmp {
        field: String,
        op: CmpOp,
        value: f64,
    },
    /// Conjunction of sub-expressions.
    And(Vec<FilterExpr>),
}

impl FilterExpr {
    /// Equality on a string attribute.
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Numeric comparison on an attribute.
    pub fn cmp(field: impl Into<String>, op: CmpOp, value: f64) -> Self {
        Self::Cmp {
            field: field.into(),
            op,
            value,
        }
    }

    /// Conjunction of the given expressions.
    pub fn and(exprs: Vec<FilterExpr>) -> Self {
        Self::And(exprs)
    }

    /// Serializes the expression to the engine's filter syntax.
    pub fn to_engine_syntax(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Eq { field, value } => {
                let _ = write!(out, "{field} = '{}'", escape(value));
            }
            Self::Cmp { field, op, value } => {
                let _ = write!(out, "{field} {} {value}", op.symbol());
            }
            Self::And(exprs) => {
                for (i, e) in exprs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" AND ");
                    }
                    // Parenthesize nested conjunctions to keep grouping explicit.
                    if matches!(e, Self::And(_)) {
                        out.push('(');
                        e.write_to(out);
                        out.push(')');
                    } else {
                        e.write_to(out);
                    }
                }
            }
        }
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_serialization() {
        let f = FilterExpr::eq("category", "Furniture");
        assert_eq!(f.to_engine_syntax(), "category = 'Furniture'");
    }

    #[test]
    fn quotes_in_values_are_escaped() {
        let f = FilterExpr::eq("sub_category", "Kids' Chairs");
        assert_eq!(f.to_engine_syntax(), "sub_category = 'Kids\\' Chairs'");
    }

    #[test]
    fn numeric_comparison_serialization() {
        let f = FilterExpr::cmp("amount", CmpOp::Ge, 100.0);
        assert_eq!(f.to_engine_syntax(), "amount >= 100");

        let f = FilterExpr::cmp("amount", CmpOp::Lt, 99.5);
        assert_eq!(f.to_engine_syntax(), "amount < 99.5");
    }

    #[test]
    fn conjunction_serialization() {
        let f = FilterExpr::and(vec![
            FilterExpr::cmp("amount", CmpOp::Ge, 100.0),
            FilterExpr::cmp("amount", CmpOp::Lt, 500.0),
        ]);
        assert_eq!(f.to_engine_syntax(), "amount >= 100 AND amount < 500");
    }

    #[test]
    fn nested_conjunctions_are_parenthesized() {
        let f = FilterExpr::and(vec![
            FilterExpr::eq("category", "Clothing"),
            FilterExpr::and(vec![
                FilterExpr::cmp("amount", CmpOp::Ge, 100.0),
                FilterExpr::cmp("amount", CmpOp::Lt, 500.0),
            ]),
        ]);
        assert_eq!(
            f.to_engine_syntax(),
            "category = 'Clothing' AND (amount >= 100 AND amount < 500)"
        );
    }
}
