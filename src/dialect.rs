//! Dialect（方言）：按名称选择渲染策略，并维护进程级默认方言。

use crate::strategy::{CqlStrategy, DefaultStrategy, DialectStrategy};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// 通用 SQL 风格：保留 WHERE 最外层括号，支持 ORDER BY / OFFSET。
    Default,
    /// Cassandra CQL：去掉 WHERE 最外层括号。
    #[default]
    Cql,
}

static DEFAULT_DIALECT: AtomicU8 = AtomicU8::new(Dialect::Cql as u8);
static DEFAULT_DIALECT_LOCK: Mutex<()> = Mutex::new(());

impl Dialect {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Default,
            _ => Self::Cql,
        }
    }

    /// 按名称解析（大小写不敏感）。未知名称回退到 `Default`，不是错误。
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case("cql") {
            Self::Cql
        } else if ["mysql", "sql", "default"]
            .iter()
            .any(|n| name.eq_ignore_ascii_case(n))
        {
            Self::Default
        } else {
            tracing::debug!(dialect = name, "unknown dialect name, falling back to default");
            Self::Default
        }
    }

    /// 该方言对应的渲染策略。
    pub fn strategy(self) -> Box<dyn DialectStrategy> {
        match self {
            Self::Default => Box::new(DefaultStrategy),
            Self::Cql => Box::new(CqlStrategy::default()),
        }
    }
}

impl FromStr for Dialect {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl From<&str> for Dialect {
    fn from(s: &str) -> Self {
        Self::from_name(s)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Default => "default",
            Self::Cql => "cql",
        };
        f.write_str(s)
    }
}

/// 当前进程默认方言（初始为 CQL）。新建的 builder 会捕获它。
pub fn default_dialect() -> Dialect {
    Dialect::from_u8(DEFAULT_DIALECT.load(Ordering::Relaxed))
}

/// 设置进程默认方言，返回旧值。
pub fn set_default_dialect(dialect: Dialect) -> Dialect {
    let old = DEFAULT_DIALECT.swap(dialect as u8, Ordering::Relaxed);
    Dialect::from_u8(old)
}

/// 修改默认方言的 RAII guard（持有全局锁，避免并行测试互相干扰）。
pub struct DefaultDialectGuard {
    _lock: MutexGuard<'static, ()>,
    old: Dialect,
}

impl Drop for DefaultDialectGuard {
    fn drop(&mut self) {
        set_default_dialect(self.old);
    }
}

/// 在一个作用域内临时设置默认方言，退出作用域后自动恢复。
pub fn set_default_dialect_scoped(dialect: Dialect) -> DefaultDialectGuard {
    let lock = DEFAULT_DIALECT_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_dialect(dialect);
    DefaultDialectGuard { _lock: lock, old }
}
