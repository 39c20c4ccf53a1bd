//! Query：不可变的查询描述。每个 `with_*` 都返回一个新版本，原值不变。

use crate::clause::Clause;
use crate::macros::{IntoStrings, collect_into_strings};
use crate::value::Value;
use std::fmt;

/// 查询类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Delete => "delete",
        };
        f.write_str(s)
    }
}

/// LIMIT：具体数量，或原样输出的占位符文本（如 `"?"`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Limit {
    Count(u64),
    /// 占位符文本原样写入语句，不产生绑定参数。
    ///
    /// `limit("?")` 会让语句中的 `?` 比返回的绑定参数多一个；
    /// 调用方需要自己把 LIMIT 的值追加到 WHERE 绑定参数之后。
    Placeholder(String),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Placeholder(p) => f.write_str(p),
        }
    }
}

impl From<u64> for Limit {
    fn from(v: u64) -> Self {
        Self::Count(v)
    }
}

impl From<&str> for Limit {
    fn from(v: &str) -> Self {
        Self::Placeholder(v.to_string())
    }
}

impl From<String> for Limit {
    fn from(v: String) -> Self {
        Self::Placeholder(v)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub(crate) operation: Option<Operation>,
    pub(crate) table: Option<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) values: Vec<Value>,
    pub(crate) where_: Option<Clause>,
    pub(crate) limit: Option<Limit>,
    pub(crate) offset: Option<u64>,
    pub(crate) order: Vec<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn where_clause(&self) -> Option<&Clause> {
        self.where_.as_ref()
    }

    pub fn limit(&self) -> Option<&Limit> {
        self.limit.as_ref()
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// 以 `select` 为操作，并覆盖列。单个字符串视为一列。
    pub fn with_select(&self, columns: impl IntoStrings) -> Self {
        Self {
            operation: Some(Operation::Select),
            columns: collect_into_strings(columns),
            ..self.clone()
        }
    }

    pub fn with_insert(&self, columns: impl IntoStrings) -> Self {
        Self {
            operation: Some(Operation::Insert),
            columns: collect_into_strings(columns),
            ..self.clone()
        }
    }

    pub fn with_delete(&self) -> Self {
        Self {
            operation: Some(Operation::Delete),
            ..self.clone()
        }
    }

    pub fn with_table(&self, table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..self.clone()
        }
    }

    pub fn with_where(&self, clause: Clause) -> Self {
        Self {
            where_: Some(clause),
            ..self.clone()
        }
    }

    pub fn with_values<V>(&self, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: impl Into<Limit>) -> Self {
        Self {
            limit: Some(limit.into()),
            ..self.clone()
        }
    }

    pub fn with_offset(&self, offset: u64) -> Self {
        Self {
            offset: Some(offset),
            ..self.clone()
        }
    }

    /// 追加排序列（不会替换已有的排序）。
    pub fn with_order_by(&self, columns: impl IntoStrings) -> Self {
        let mut order = self.order.clone();
        order.extend(collect_into_strings(columns));
        Self {
            order,
            ..self.clone()
        }
    }
}
