//! 绑定参数值与值标记（Literal / Bind / Raw）。

use std::borrow::Cow;

/// 绑定参数值：对调用方而言是不透明的，按 `?` 出现顺序返回。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        Self::from_option(v)
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::OffsetDateTime> for SqlValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// 已经是占位符的字面量：渲染为 `?`，并原样绑定 `"?"`。
const PLACEHOLDER_SENTINELS: [&str; 2] = ["?", "%@"];

/// 比较右值 / INSERT 值槽的标记。
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 字面量：渲染为 `?`；哨兵 `"?"` / `"%@"` 绑定为 `"?"`。
    Literal(SqlValue),
    /// 显式占位：渲染为 `?`，原样绑定。
    Bind(SqlValue),
    /// 原样写入语句，不产生绑定。
    Raw(String),
}

impl Value {
    /// 该值对应的绑定；`Raw` 返回 `None`。
    pub fn bound(&self) -> Option<SqlValue> {
        match self {
            Self::Literal(v) => match v.as_str() {
                Some(s) if PLACEHOLDER_SENTINELS.contains(&s) => Some(SqlValue::from("?")),
                _ => Some(v.clone()),
            },
            Self::Bind(v) => Some(v.clone()),
            Self::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl From<SqlValue> for Value {
    fn from(v: SqlValue) -> Self {
        Self::Bind(v)
    }
}

/// 裸标量默认视为 `Bind`。
macro_rules! impl_bind_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Bind(v.into())
                }
            }
        )*
    };
}

impl_bind_from!(
    (),
    bool,
    i32,
    i64,
    u32,
    u64,
    f64,
    String,
    &'static str,
    Vec<u8>,
    time::OffsetDateTime,
);

/// Bind：显式占位标记。
pub fn bind(v: impl Into<SqlValue>) -> Value {
    Value::Bind(v.into())
}

/// Raw：原样拼入语句（不会成为参数）。
pub fn raw(text: impl Into<String>) -> Value {
    Value::Raw(text.into())
}

/// Literal：字面量标记，支持 `"?"` / `"%@"` 哨兵。
pub fn literal(v: impl Into<SqlValue>) -> Value {
    Value::Literal(v.into())
}

#[cfg(test)]
mod tests {
    use super::{SqlValue, Value, bind, literal, raw};
    use pretty_assertions::assert_eq;

    #[test]
    fn from_option_none() {
        assert_eq!(SqlValue::from_option::<i64>(None), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(3_i64)), SqlValue::I64(3));
    }

    #[test]
    fn bare_scalar_is_bind() {
        let v: Value = 20.into();
        assert_eq!(v, Value::Bind(SqlValue::I64(20)));
        let v: Value = "orange".into();
        assert_eq!(v, bind("orange"));
    }

    #[test]
    fn literal_sentinels_bind_question_mark() {
        assert_eq!(literal("%@").bound(), Some(SqlValue::from("?")));
        assert_eq!(literal("?").bound(), Some(SqlValue::from("?")));
        assert_eq!(literal("pear").bound(), Some(SqlValue::from("pear")));
    }

    #[test]
    fn bind_keeps_sentinel_verbatim() {
        assert_eq!(bind("%@").bound(), Some(SqlValue::from("%@")));
    }

    #[test]
    fn raw_binds_nothing() {
        assert_eq!(raw("now()").bound(), None);
        assert!(raw("now()").is_raw());
    }
}
