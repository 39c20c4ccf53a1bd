//! 方言渲染策略：`DefaultStrategy` 实现通用 SQL 风格，`CqlStrategy` 包装它并做 CQL 的差异化处理。

use crate::clause::Clause;
use crate::render_buffer::{RenderBuffer, Rendered};
use crate::translator::{TranslateError, render_clause, render_value};
use crate::value::Value;
use dyn_clone::DynClone;
use std::fmt;

/// 负责渲染方言相关的片段：列、表、值列表、条件、排序与 OFFSET。
pub trait DialectStrategy: DynClone + fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn render_columns(&self, columns: &[String]) -> Rendered;

    fn render_table(&self, table: &str) -> Rendered;

    /// 渲染 INSERT 值列表；格式错误的值槽会被跳过并记录告警。
    fn render_values(&self, values: &[Value]) -> Rendered;

    /// 渲染 WHERE 的顶层条件。
    fn render_clause(&self, clause: &Clause) -> Result<Rendered, TranslateError>;

    /// 没有排序列时返回 `None`。
    fn render_order(&self, order: &[String]) -> Option<Rendered>;

    fn render_offset(&self, offset: Option<u64>) -> Option<Rendered>;
}

dyn_clone::clone_trait_object!(DialectStrategy);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStrategy;

impl DialectStrategy for DefaultStrategy {
    fn name(&self) -> &'static str {
        "default"
    }

    fn render_columns(&self, columns: &[String]) -> Rendered {
        Rendered::text(columns.join(", "))
    }

    fn render_table(&self, table: &str) -> Rendered {
        Rendered::text(table)
    }

    fn render_values(&self, values: &[Value]) -> Rendered {
        let mut buf = RenderBuffer::with_separator(", ");
        for (slot, value) in values.iter().enumerate() {
            if let Value::Raw(text) = value
                && text.trim().is_empty()
            {
                tracing::warn!(slot, "skipping malformed insert value: blank raw marker");
                continue;
            }
            buf.push(render_value(value));
        }
        buf.finish()
    }

    fn render_clause(&self, clause: &Clause) -> Result<Rendered, TranslateError> {
        render_clause(clause)
    }

    fn render_order(&self, order: &[String]) -> Option<Rendered> {
        if order.is_empty() {
            return None;
        }
        Some(Rendered::text(format!("order by {}", order.join(", "))))
    }

    fn render_offset(&self, offset: Option<u64>) -> Option<Rendered> {
        offset.map(|n| Rendered::text(format!("offset {n}")))
    }
}

/// CQL：复用 `DefaultStrategy`，只去掉顶层 WHERE 条件最外层的一对括号。
#[derive(Debug, Clone, Default)]
pub struct CqlStrategy {
    inner: DefaultStrategy,
}

impl CqlStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DialectStrategy for CqlStrategy {
    fn name(&self) -> &'static str {
        "cql"
    }

    fn render_columns(&self, columns: &[String]) -> Rendered {
        self.inner.render_columns(columns)
    }

    fn render_table(&self, table: &str) -> Rendered {
        self.inner.render_table(table)
    }

    fn render_values(&self, values: &[Value]) -> Rendered {
        self.inner.render_values(values)
    }

    fn render_clause(&self, clause: &Clause) -> Result<Rendered, TranslateError> {
        let rendered = self.inner.render_clause(clause)?;
        if !matches!(clause, Clause::Boolean { .. }) {
            return Ok(rendered);
        }
        Ok(strip_outer_parens(rendered))
    }

    fn render_order(&self, order: &[String]) -> Option<Rendered> {
        self.inner.render_order(order)
    }

    fn render_offset(&self, offset: Option<u64>) -> Option<Rendered> {
        self.inner.render_offset(offset)
    }
}

fn strip_outer_parens(mut rendered: Rendered) -> Rendered {
    let text = &rendered.text;
    if text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        rendered.text = text[1..text.len() - 1].to_string();
    }
    rendered
}
