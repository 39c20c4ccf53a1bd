//! Translator：按操作类型分发，把 `Query` 渲染成参数化语句与绑定参数。

use crate::clause::Clause;
use crate::dialect::{Dialect, default_dialect};
use crate::query::{Operation, Query};
use crate::render_buffer::{RenderBuffer, Rendered, Segment};
use crate::strategy::DialectStrategy;
use crate::value::{SqlValue, Value};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
    #[error("invalid clause: {0}")]
    InvalidClause(String),
    #[error("no table given for {0} query")]
    MissingTable(Operation),
}

/// 无状态的翻译器；可以在多个线程间共享。
#[derive(Debug, Clone)]
pub struct Translator {
    strategy: Box<dyn DialectStrategy>,
}

impl Default for Translator {
    /// 使用当前进程默认方言。
    fn default() -> Self {
        Self::new(default_dialect())
    }
}

impl Translator {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            strategy: dialect.strategy(),
        }
    }

    /// 按方言名称选择策略，未知名称回退到默认策略。
    pub fn from_name(name: &str) -> Self {
        Self::new(Dialect::from_name(name))
    }

    pub fn cql() -> Self {
        Self::new(Dialect::Cql)
    }

    pub fn with_strategy(strategy: impl DialectStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn strategy(&self) -> &dyn DialectStrategy {
        self.strategy.as_ref()
    }

    /// Prepare：渲染语句，返回 `(statement, binds)`；绑定顺序与 `?` 在语句中的位置一致。
    pub fn prepare(&self, query: &Query) -> Result<(String, Vec<SqlValue>), TranslateError> {
        let Some(operation) = query.operation else {
            return Err(TranslateError::UnsupportedOperation("<none>".to_string()));
        };
        tracing::debug!(%operation, dialect = self.strategy.name(), "preparing statement");

        let rendered = match operation {
            Operation::Select => self.prepare_select(query)?,
            Operation::Insert => self.prepare_insert(query)?,
            Operation::Delete => self.prepare_delete(query)?,
        };
        Ok(rendered.into_parts())
    }

    fn prepare_select(&self, query: &Query) -> Result<Rendered, TranslateError> {
        let table = self.table(query, Operation::Select)?;
        let columns = if query.columns.is_empty() {
            Rendered::text("*")
        } else {
            self.strategy.render_columns(&query.columns)
        };

        let mut buf = RenderBuffer::new();
        buf.push("select")
            .push(columns)
            .push("from")
            .push(table)
            .push_opt(self.where_segment(query)?)
            .push_opt(self.strategy.render_order(&query.order))
            .push_opt(query.limit.as_ref().map(|l| format!("limit {l}")))
            .push_opt(self.strategy.render_offset(query.offset));
        Ok(buf.finish())
    }

    fn prepare_insert(&self, query: &Query) -> Result<Rendered, TranslateError> {
        let table = self.table(query, Operation::Insert)?;

        let mut buf = RenderBuffer::new();
        buf.push("insert into")
            .push(table)
            .push("(")
            .push(self.strategy.render_columns(&query.columns))
            .push(")")
            .push("values")
            .push("(")
            .push(self.strategy.render_values(&query.values))
            .push(")");
        Ok(buf.finish())
    }

    fn prepare_delete(&self, query: &Query) -> Result<Rendered, TranslateError> {
        let table = self.table(query, Operation::Delete)?;

        let mut buf = RenderBuffer::new();
        buf.push("delete from")
            .push(table)
            .push_opt(self.where_segment(query)?);
        Ok(buf.finish())
    }

    fn table(&self, query: &Query, operation: Operation) -> Result<Rendered, TranslateError> {
        match query.table.as_deref() {
            Some(table) if !table.is_empty() => Ok(self.strategy.render_table(table)),
            _ => Err(TranslateError::MissingTable(operation)),
        }
    }

    fn where_segment(&self, query: &Query) -> Result<Option<Segment>, TranslateError> {
        let Some(clause) = query.where_.as_ref() else {
            return Ok(None);
        };
        let rendered = self.strategy.render_clause(clause)?;
        Ok(Some(Segment::from(vec![
            Segment::from("where"),
            Segment::from(rendered),
        ])))
    }
}

/// 渲染单个值：`Raw` 原样输出，其余输出 `?` 并产生一个绑定。
pub(crate) fn render_value(value: &Value) -> Rendered {
    match value {
        Value::Raw(text) => Rendered::text(text.clone()),
        Value::Literal(_) | Value::Bind(_) => {
            Rendered::new("?", value.bound().into_iter().collect())
        }
    }
}

/// 两种方言共用的条件渲染：每个 AND/OR 节点恰好一对括号，NOT 不额外加括号。
pub fn render_clause(clause: &Clause) -> Result<Rendered, TranslateError> {
    match clause {
        Clause::Boolean { kind, children } => {
            if children.is_empty() {
                return Err(TranslateError::InvalidClause(format!(
                    "`{}` without children",
                    kind.as_str()
                )));
            }
            let mut buf = RenderBuffer::new();
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    buf.push(kind.as_str());
                }
                buf.push(render_clause(child)?);
            }
            Ok(buf.finish().parenthesized())
        }
        Clause::Negation { child } => {
            let mut buf = RenderBuffer::new();
            buf.push("not").push(render_clause(child)?);
            Ok(buf.finish())
        }
        Clause::Comparison {
            operator,
            column,
            right,
        } => {
            if column.trim().is_empty() {
                return Err(TranslateError::InvalidClause(format!(
                    "`{}` comparison without a column",
                    operator.as_str()
                )));
            }
            if let Value::Raw(text) = right
                && text.trim().is_empty()
            {
                return Err(TranslateError::InvalidClause(format!(
                    "`{column} {}` with a blank raw value",
                    operator.as_str()
                )));
            }
            let mut buf = RenderBuffer::new();
            buf.push(column.clone())
                .push(operator.as_str())
                .push(render_value(right));
            Ok(buf.finish())
        }
    }
}
