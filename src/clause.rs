//! Clause：WHERE 条件树（比较、AND/OR 组合、NOT 取反）。

use crate::value::Value;

/// 比较运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
        }
    }
}

/// 布尔组合类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolKind {
    And,
    Or,
}

impl BoolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

/// 条件树节点。
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Comparison {
        operator: Operator,
        column: String,
        right: Value,
    },
    Boolean {
        kind: BoolKind,
        children: Vec<Clause>,
    },
    Negation {
        child: Box<Clause>,
    },
}

impl Clause {
    pub fn comparison(
        operator: Operator,
        column: impl Into<String>,
        right: impl Into<Value>,
    ) -> Self {
        Self::Comparison {
            operator,
            column: column.into(),
            right: right.into(),
        }
    }

    pub fn boolean(kind: BoolKind, children: impl IntoIterator<Item = Clause>) -> Self {
        Self::Boolean {
            kind,
            children: children.into_iter().collect(),
        }
    }

    pub fn negate(self) -> Self {
        Self::Negation {
            child: Box::new(self),
        }
    }
}

/// `!clause` 等价于 `not(clause)`。
impl std::ops::Not for Clause {
    type Output = Clause;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Eq, column, value)
}

pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Ne, column, value)
}

pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Gt, column, value)
}

pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Lt, column, value)
}

pub fn ge(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Ge, column, value)
}

pub fn le(column: impl Into<String>, value: impl Into<Value>) -> Clause {
    Clause::comparison(Operator::Le, column, value)
}

/// And：把一组子条件用 `and` 连接。可变参数写法见 [`and!`](crate::and)。
///
/// 空序列可以构造，但渲染时会返回 `TranslateError::InvalidClause`。
pub fn and(children: impl IntoIterator<Item = Clause>) -> Clause {
    Clause::boolean(BoolKind::And, children)
}

/// Or：把一组子条件用 `or` 连接。可变参数写法见 [`or!`](crate::or)。
pub fn or(children: impl IntoIterator<Item = Clause>) -> Clause {
    Clause::boolean(BoolKind::Or, children)
}

/// Not：取反，只包一个子条件。
pub fn not(clause: Clause) -> Clause {
    clause.negate()
}

#[cfg(test)]
mod tests {
    use super::{BoolKind, Clause, Operator, and, eq, gt, not};
    use crate::value::{SqlValue, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn comparison_wraps_scalar_as_bind() {
        assert_eq!(
            gt("size", 20),
            Clause::Comparison {
                operator: Operator::Gt,
                column: "size".into(),
                right: Value::Bind(SqlValue::I64(20)),
            }
        );
    }

    #[test]
    fn not_operator_matches_not_fn() {
        assert_eq!(!eq("a", 1), not(eq("a", 1)));
    }

    #[test]
    fn and_keeps_child_order() {
        let c = and(vec![eq("a", 1), eq("b", 2)]);
        match c {
            Clause::Boolean { kind, children } => {
                assert_eq!(kind, BoolKind::And);
                assert_eq!(children, vec![eq("a", 1), eq("b", 2)]);
            }
            other => panic!("unexpected clause: {other:?}"),
        }
    }
}
