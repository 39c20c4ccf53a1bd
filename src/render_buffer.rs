//! RenderBuffer：把一串可选片段拼成一条语句，同时按顺序收集绑定参数。

use crate::value::SqlValue;
use std::borrow::Cow;

/// 渲染结果：语句文本与按 `?` 顺序排列的绑定参数。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub text: String,
    pub binds: Vec<SqlValue>,
}

impl Rendered {
    pub fn new(text: impl Into<String>, binds: Vec<SqlValue>) -> Self {
        Self {
            text: text.into(),
            binds,
        }
    }

    /// 只有文本、没有绑定的片段。
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Vec::new())
    }

    /// 用一对括号包住文本。
    pub fn parenthesized(self) -> Self {
        Self {
            text: format!("({})", self.text),
            binds: self.binds,
        }
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.text, self.binds)
    }
}

/// 语句片段。
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Text(Cow<'static, str>),
    Rendered(Rendered),
    Nested(Vec<Segment>),
}

impl From<&'static str> for Segment {
    fn from(s: &'static str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<Rendered> for Segment {
    fn from(r: Rendered) -> Self {
        Self::Rendered(r)
    }
}

impl From<Vec<Segment>> for Segment {
    fn from(v: Vec<Segment>) -> Self {
        Self::Nested(v)
    }
}

#[derive(Debug, Clone)]
pub struct RenderBuffer {
    sep: &'static str,
    segments: Vec<Segment>,
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBuffer {
    /// 片段之间用一个空格连接。
    pub fn new() -> Self {
        Self::with_separator(" ")
    }

    pub fn with_separator(sep: &'static str) -> Self {
        Self {
            sep,
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: impl Into<Segment>) -> &mut Self {
        self.segments.push(segment.into());
        self
    }

    /// 可选片段：`None` 直接丢弃。
    pub fn push_opt<S: Into<Segment>>(&mut self, segment: Option<S>) -> &mut Self {
        if let Some(s) = segment {
            self.segments.push(s.into());
        }
        self
    }

    pub fn extend<S: Into<Segment>>(&mut self, segments: impl IntoIterator<Item = S>) -> &mut Self {
        self.segments.extend(segments.into_iter().map(Into::into));
        self
    }

    /// 展开嵌套片段，跳过空文本，文本用分隔符连接，绑定参数按片段顺序拼接。
    pub fn finish(self) -> Rendered {
        let mut out = Rendered::default();
        let mut first = true;
        for segment in self.segments {
            flatten_into(segment, self.sep, &mut first, &mut out);
        }
        out
    }
}

fn flatten_into(segment: Segment, sep: &str, first: &mut bool, out: &mut Rendered) {
    let text = match segment {
        Segment::Nested(inner) => {
            for s in inner {
                flatten_into(s, sep, first, out);
            }
            return;
        }
        Segment::Text(t) => t,
        Segment::Rendered(r) => {
            out.binds.extend(r.binds);
            Cow::Owned(r.text)
        }
    };

    if text.is_empty() {
        return;
    }
    if !*first {
        out.text.push_str(sep);
    }
    out.text.push_str(&text);
    *first = false;
}

#[cfg(test)]
mod tests {
    use super::{RenderBuffer, Rendered, Segment};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn drops_absent_segments() {
        let mut buf = RenderBuffer::new();
        buf.push("delete from")
            .push("aquarium")
            .push_opt(None::<Rendered>)
            .push_opt(Some("limit 3"));
        assert_eq!(buf.finish(), Rendered::text("delete from aquarium limit 3"));
    }

    #[test]
    fn flattens_nested_and_keeps_bind_order() {
        let mut buf = RenderBuffer::new();
        buf.push("where").push(vec![
            Segment::from(Rendered::new("a = ?", vec![SqlValue::I64(1)])),
            Segment::from("and"),
            Segment::from(vec![Segment::from(Rendered::new(
                "b = ?",
                vec![SqlValue::I64(2)],
            ))]),
        ]);

        let out = buf.finish();
        assert_eq!(out.text, "where a = ? and b = ?");
        assert_eq!(out.binds, vec![SqlValue::I64(1), SqlValue::I64(2)]);
    }

    #[test]
    fn custom_separator_skips_empty_text() {
        let mut buf = RenderBuffer::with_separator(", ");
        buf.extend(["zip", "", "zap"]);
        assert_eq!(buf.finish().text, "zip, zap");
    }
}
