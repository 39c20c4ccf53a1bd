//! QueryBuilder：链式构建 `Query`，并在终端方法中调用 `Translator`。

use crate::clause::{BoolKind, Clause};
use crate::dialect::{Dialect, default_dialect};
use crate::macros::IntoStrings;
use crate::query::{Limit, Query};
use crate::translator::{TranslateError, Translator};
use crate::value::{SqlValue, Value};

/// 每次链式调用都会消费旧的 builder，生成新的 `Query` 版本。
#[derive(Debug, Clone, PartialEq)]
pub struct QueryBuilder {
    query: Query,
    dialect: Dialect,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Query：以 `select` 开始一个新的查询（`query(["id", "name"]).from("users")`）。
pub fn query(columns: impl IntoStrings) -> QueryBuilder {
    QueryBuilder::new().select(columns)
}

impl QueryBuilder {
    /// 新建空查询；方言取当前进程默认方言。
    pub fn new() -> Self {
        Self::with_dialect(default_dialect())
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            query: Query::new(),
            dialect,
        }
    }

    /// 从已有的 `Query` 继续构建。
    pub fn from_query(query: Query, dialect: Dialect) -> Self {
        Self { query, dialect }
    }

    fn map(self, f: impl FnOnce(&Query) -> Query) -> Self {
        Self {
            query: f(&self.query),
            dialect: self.dialect,
        }
    }

    pub fn dialect(self, dialect: Dialect) -> Self {
        Self { dialect, ..self }
    }

    pub fn select(self, columns: impl IntoStrings) -> Self {
        self.map(|q| q.with_select(columns))
    }

    pub fn insert(self, columns: impl IntoStrings) -> Self {
        self.map(|q| q.with_insert(columns))
    }

    pub fn delete(self) -> Self {
        self.map(Query::with_delete)
    }

    pub fn from(self, table: impl Into<String>) -> Self {
        self.map(|q| q.with_table(table))
    }

    /// `from` 的别名，用于 INSERT。
    pub fn into(self, table: impl Into<String>) -> Self {
        self.from(table)
    }

    pub fn where_(self, clause: Clause) -> Self {
        self.map(|q| q.with_where(clause))
    }

    /// 与当前 WHERE 以 `and` 组合（当前条件在前）；没有 WHERE 时直接作为 WHERE。
    pub fn and(self, clause: Clause) -> Self {
        self.combine(BoolKind::And, clause)
    }

    /// 与当前 WHERE 以 `or` 组合（当前条件在前）；没有 WHERE 时直接作为 WHERE。
    pub fn or(self, clause: Clause) -> Self {
        self.combine(BoolKind::Or, clause)
    }

    fn combine(self, kind: BoolKind, clause: Clause) -> Self {
        self.map(|q| match q.where_clause() {
            Some(current) => q.with_where(Clause::boolean(kind, [current.clone(), clause])),
            None => q.with_where(clause),
        })
    }

    /// 对当前 WHERE 取反；没有 WHERE 时不做任何事。
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        self.map(|q| match q.where_clause() {
            Some(current) => q.with_where(current.clone().negate()),
            None => {
                tracing::debug!("not() called without a where clause, ignored");
                q.clone()
            }
        })
    }

    /// 设置 INSERT 值；可变参数写法见 [`values!`](crate::values)。
    pub fn values<V>(self, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<Value>,
    {
        self.map(|q| q.with_values(values))
    }

    /// 设置 LIMIT。整数输出为数量；字符串作为 [`Limit::Placeholder`] 原样输出，
    /// 不会加入 [`binds`](Self::binds)，LIMIT 的值由调用方追加在末尾。
    ///
    /// ```
    /// use halo_query::{Dialect, QueryBuilder, SqlValue, eq};
    ///
    /// let qb = QueryBuilder::with_dialect(Dialect::Cql)
    ///     .select("v")
    ///     .from("events")
    ///     .where_(eq("pk", 1))
    ///     .limit("?");
    /// let (sql, mut binds) = qb.build().unwrap();
    /// assert_eq!(sql, "select v from events where pk = ? limit ?");
    /// assert_eq!(binds.len(), 1);
    /// binds.push(SqlValue::U64(10));
    /// ```
    pub fn limit(self, limit: impl Into<Limit>) -> Self {
        self.map(|q| q.with_limit(limit))
    }

    pub fn offset(self, offset: u64) -> Self {
        self.map(|q| q.with_offset(offset))
    }

    /// 追加排序（如 `"guava DESC"`），不会替换之前的排序。
    pub fn order_by(self, columns: impl IntoStrings) -> Self {
        self.map(|q| q.with_order_by(columns))
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn into_query(self) -> Query {
        self.query
    }

    pub fn current_dialect(&self) -> Dialect {
        self.dialect
    }

    /// 用 builder 的方言渲染。
    pub fn build(&self) -> Result<(String, Vec<SqlValue>), TranslateError> {
        self.build_with(self.dialect)
    }

    pub fn build_with(&self, dialect: Dialect) -> Result<(String, Vec<SqlValue>), TranslateError> {
        Translator::new(dialect).prepare(&self.query)
    }

    /// 始终按 CQL 渲染，只返回语句。
    pub fn cql(&self) -> Result<String, TranslateError> {
        self.statement_with(Dialect::Cql)
    }

    pub fn statement(&self) -> Result<String, TranslateError> {
        self.statement_with(self.dialect)
    }

    pub fn statement_with(&self, dialect: Dialect) -> Result<String, TranslateError> {
        self.build_with(dialect).map(|(sql, _)| sql)
    }

    pub fn binds(&self) -> Result<Vec<SqlValue>, TranslateError> {
        self.binds_with(self.dialect)
    }

    pub fn binds_with(&self, dialect: Dialect) -> Result<Vec<SqlValue>, TranslateError> {
        self.build_with(dialect).map(|(_, binds)| binds)
    }
}
