//! 模板编译与渲染
//!
//! 模板中的 `{名称}` 为占位符，`{{` 和 `}}` 表示字面量大括号。
//! 占位符在编译时解析为列下标，渲染时不再查找名称。

use seed_shared::{FixtureError, Result};

use crate::models::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(usize),
}

/// 占位符替换方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// 原始值，用于字段模板
    Raw,
    /// SQL 字面量，用于语句模板
    SqlLiteral { escape_strings: bool },
}

/// 编译后的模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// 编译模板，占位符只能引用 `columns` 中的名称
    pub fn compile(source: &str, columns: &[&str]) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') | None => {
                                return Err(FixtureError::Template {
                                    message: format!("未闭合的占位符: {}", source),
                                });
                            }
                            Some(ch) => name.push(ch),
                        }
                    }

                    let name = name.trim();
                    if name.is_empty() {
                        return Err(FixtureError::Template {
                            message: format!("空占位符: {}", source),
                        });
                    }
                    let index = columns.iter().position(|c| *c == name).ok_or_else(|| {
                        FixtureError::UnknownPlaceholder {
                            placeholder: name.to_string(),
                        }
                    })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(index));
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(FixtureError::Template {
                        message: format!("多余的 '}}': {}", source),
                    });
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// 按表名和列名推导标准 INSERT 语句模板
    ///
    /// `INSERT INTO <table> (<c1>, <c2>) VALUES ({c1}, {c2});`
    pub fn insert_statement(table: &str, columns: &[&str]) -> Self {
        let mut segments = vec![Segment::Literal(format!(
            "INSERT INTO {} ({}) VALUES (",
            table,
            columns.join(", ")
        ))];

        for index in 0..columns.len() {
            if index > 0 {
                segments.push(Segment::Literal(", ".to_string()));
            }
            segments.push(Segment::Placeholder(index));
        }
        segments.push(Segment::Literal(");".to_string()));

        Self { segments }
    }

    /// 渲染模板
    ///
    /// # Panics
    ///
    /// `values` 必须覆盖编译时使用的全部列，长度不足时 panic。
    /// 通过 `FixtureGenerator` 调用时总能满足这一点。
    pub fn render(&self, values: &[Value], substitution: Substitution) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(index) => {
                    let value = &values[*index];
                    match substitution {
                        Substitution::Raw => out.push_str(&value.to_string()),
                        Substitution::SqlLiteral { escape_strings } => {
                            out.push_str(&value.to_sql_literal(escape_strings))
                        }
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQL: Substitution = Substitution::SqlLiteral {
        escape_strings: false,
    };

    #[test]
    fn test_insert_statement() {
        let template = Template::insert_statement("Bookings", &["EventId", "UserId"]);
        let rendered = template.render(&[Value::Integer(7), Value::Integer(12)], SQL);

        assert_eq!(
            rendered,
            "INSERT INTO Bookings (EventId, UserId) VALUES (7, 12);"
        );
    }

    #[test]
    fn test_compile_matches_derived_template() {
        let columns = ["Name", "Genre"];
        let compiled = Template::compile(
            "INSERT INTO Communities (Name, Genre) VALUES ({Name}, {Genre});",
            &columns,
        )
        .unwrap();

        assert_eq!(compiled, Template::insert_statement("Communities", &columns));
    }

    #[test]
    fn test_text_values_are_quoted_in_statements() {
        let template = Template::insert_statement("Communities", &["Name", "Genre"]);
        let rendered = template.render(&[Value::from("Vibe Vault"), Value::from("Jazz")], SQL);

        assert_eq!(
            rendered,
            "INSERT INTO Communities (Name, Genre) VALUES ('Vibe Vault', 'Jazz');"
        );
    }

    #[test]
    fn test_raw_substitution() {
        let template = Template::compile("Join us for {Genre} nights.", &["Name", "Genre"]).unwrap();
        let rendered = template.render(&[Value::from("x"), Value::from("Blues")], Substitution::Raw);

        assert_eq!(rendered, "Join us for Blues nights.");
    }

    #[test]
    #[should_panic]
    fn test_render_with_missing_values_panics() {
        let template = Template::insert_statement("Bookings", &["EventId", "UserId"]);
        template.render(&[Value::Integer(7)], SQL);
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::compile("{{literal}} {Id}", &["Id"]).unwrap();
        assert_eq!(
            template.render(&[Value::Integer(1)], Substitution::Raw),
            "{literal} 1"
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = Template::compile("VALUES ({Venue});", &["EventId"]).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_PLACEHOLDER");
    }

    #[test]
    fn test_unbalanced_braces() {
        assert_eq!(
            Template::compile("VALUES ({EventId);", &["EventId"])
                .unwrap_err()
                .code(),
            "TEMPLATE_ERROR"
        );
        assert_eq!(
            Template::compile("VALUES (EventId});", &["EventId"])
                .unwrap_err()
                .code(),
            "TEMPLATE_ERROR"
        );
        assert_eq!(
            Template::compile("VALUES ({});", &["EventId"])
                .unwrap_err()
                .code(),
            "TEMPLATE_ERROR"
        );
    }
}
