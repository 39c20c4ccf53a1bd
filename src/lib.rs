//! halo-query：可组合的查询 DSL，按 SQL / CQL 方言渲染参数化语句与绑定参数。
//!
//! ```
//! use halo_query::{Dialect, QueryBuilder, and, eq, gt};
//!
//! let qb = QueryBuilder::with_dialect(Dialect::Default)
//!     .select(["mango", "papaya"])
//!     .from("fruit")
//!     .where_(and([eq("colour", "orange"), gt("size", 20)]))
//!     .limit(3);
//!
//! let (sql, binds) = qb.build().unwrap();
//! assert_eq!(sql, "select mango, papaya from fruit where (colour = ? and size > ?) limit 3");
//! assert_eq!(binds.len(), 2);
//! ```

pub mod builder;
pub mod clause;
pub mod dialect;
#[cfg(test)]
mod dialect_tests;
pub mod macros;
#[cfg(test)]
mod macros_tests;
pub mod query;
pub mod render_buffer;
pub mod strategy;
pub mod translator;
pub mod value;

pub use crate::builder::{QueryBuilder, query};
pub use crate::clause::{BoolKind, Clause, Operator, and, eq, ge, gt, le, lt, ne, not, or};
pub use crate::dialect::{
    DefaultDialectGuard, Dialect, default_dialect, set_default_dialect, set_default_dialect_scoped,
};
pub use crate::macros::IntoStrings;
pub use crate::query::{Limit, Operation, Query};
pub use crate::render_buffer::{RenderBuffer, Rendered, Segment};
pub use crate::strategy::{CqlStrategy, DefaultStrategy, DialectStrategy};
pub use crate::translator::{TranslateError, Translator, render_clause};
pub use crate::value::{SqlValue, Value, bind, literal, raw};
