//! 宏集合：为条件组合与值列表提供可变参数调用。
//! 通过 `and!` / `or!` / `values!`，可以直接传入多个参数而无需手动创建 `Vec`。

/// 可变参数版本的 [`and`](crate::clause::and)：`and!(a, b, c)` 与 `and([a, b, c])` 等价。
#[macro_export]
macro_rules! and {
    () => {
        $crate::clause::and(Vec::<$crate::clause::Clause>::new())
    };
    ($($clause:expr),+ $(,)?) => {
        $crate::clause::and(vec![$($clause),+])
    };
}

/// 可变参数版本的 [`or`](crate::clause::or)。
#[macro_export]
macro_rules! or {
    () => {
        $crate::clause::or(Vec::<$crate::clause::Clause>::new())
    };
    ($($clause:expr),+ $(,)?) => {
        $crate::clause::or(vec![$($clause),+])
    };
}

/// 收集任意个可转为 `Value` 的参数；裸标量会变成 `Bind`。
///
/// ```
/// use halo_query::{QueryBuilder, raw, values};
///
/// let qb = QueryBuilder::new()
///     .insert(["id", "name", "created_at"])
///     .into("users")
///     .values(values![7, "tom", raw("now()")]);
/// assert_eq!(qb.query().values().len(), 3);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        Vec::<$crate::value::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::value::Value::from($value)),+]
    };
}

/// 列名参数：单个字符串视为一列，数组 / 切片 / `Vec` 视为多列。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_owned());
    }
}

impl IntoStrings for &String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.clone());
    }
}

impl<const N: usize, T: AsRef<str>> IntoStrings for [T; N] {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        push_columns(dst, self);
    }
}

impl<T: AsRef<str>> IntoStrings for &[T] {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        push_columns(dst, self);
    }
}

impl<T: AsRef<str>> IntoStrings for Vec<T> {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        push_columns(dst, self);
    }
}

fn push_columns<I>(dst: &mut Vec<String>, columns: I)
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    dst.extend(columns.into_iter().map(|c| c.as_ref().to_owned()));
}

pub(crate) fn collect_into_strings(columns: impl IntoStrings) -> Vec<String> {
    let mut dst = Vec::new();
    columns.extend_into_strings(&mut dst);
    dst
}
