use std::fmt::Write as _;
use std::str::FromStr;

/// The SQL flavour a repository talks to.
///
/// Statements are authored once, ANSI style: `?` for every bind parameter and
/// double quotes around identifiers that collide with reserved words
/// (`"user"`, `"key"`). [`Dialect::prepare`] turns such a statement into what
/// the configured backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Numbered placeholders (`$1`, `$2`, ...), double-quoted identifiers.
    Postgres,
    /// Positional `?` placeholders, back-tick identifiers.
    MySql,
    /// Positional `?` placeholders, double-quoted identifiers.
    Sqlite,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Rewrites placeholders and identifier quotes for this dialect.
    ///
    /// Anything inside a single-quoted string literal is copied verbatim, so a
    /// literal `'?'` or `'"'` survives untouched. An escaped quote (`''`)
    /// closes and reopens the literal, which keeps the state consistent.
    pub fn prepare(self, sql: &str) -> String {
        let mut out = String::with_capacity(sql.len() + 8);
        let mut in_literal = false;
        let mut next = 1usize;

        for c in sql.chars() {
            match c {
                '\'' => {
                    in_literal = !in_literal;
                    out.push(c);
                }
                '?' if !in_literal && self == Dialect::Postgres => {
                    let _ = write!(out, "${}", next);
                    next += 1;
                }
                '"' if !in_literal && self == Dialect::MySql => out.push('`'),
                _ => out.push(c),
            }
        }
        out
    }

    /// `INSERT` that silently skips rows whose primary key already exists.
    pub fn insert_ignore(self, table: &str, columns: &[&str]) -> String {
        let cols = columns.join(", ");
        let params = vec!["?"; columns.len()].join(", ");
        let sql = match self {
            Dialect::MySql => format!("INSERT IGNORE INTO {} ({}) VALUES ({})", table, cols, params),
            Dialect::Postgres | Dialect::Sqlite => format!(
                "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT DO NOTHING",
                table, cols, params
            ),
        };
        self.prepare(&sql)
    }
}

impl FromStr for Dialect {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pgx" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            other => Err(anyhow::anyhow!("unsupported database engine: {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPDATE_SHELF: &str = "UPDATE shelf SET title = ?, path = ? WHERE id = ?";

    #[test]
    fn test_postgres_numbers_placeholders_in_order() {
        assert_eq!(
            Dialect::Postgres.prepare(UPDATE_SHELF),
            "UPDATE shelf SET title = $1, path = $2 WHERE id = $3"
        );
    }

    #[test]
    fn test_mysql_and_sqlite_keep_positional_placeholders() {
        assert_eq!(Dialect::MySql.prepare(UPDATE_SHELF), UPDATE_SHELF);
        assert_eq!(Dialect::Sqlite.prepare(UPDATE_SHELF), UPDATE_SHELF);
    }

    #[test]
    fn test_statement_without_placeholders_is_unchanged() {
        let sql = "SELECT id, title FROM section";
        assert_eq!(Dialect::Postgres.prepare(sql), sql);
    }

    #[test]
    fn test_identifier_quotes() {
        let sql = r#"SELECT "key", value FROM setting WHERE "key" = ?"#;
        assert_eq!(Dialect::MySql.prepare(sql), "SELECT `key`, value FROM setting WHERE `key` = ?");
        assert_eq!(Dialect::Postgres.prepare(sql), r#"SELECT "key", value FROM setting WHERE "key" = $1"#);
        assert_eq!(Dialect::Sqlite.prepare(sql), sql);
    }

    #[test]
    fn test_string_literals_are_not_rewritten() {
        let sql = r#"SELECT '?', 'say "hi"', 'it''s ?' FROM link WHERE id = ?"#;
        assert_eq!(
            Dialect::Postgres.prepare(sql),
            r#"SELECT '?', 'say "hi"', 'it''s ?' FROM link WHERE id = $1"#
        );
        assert_eq!(
            Dialect::MySql.prepare(sql),
            r#"SELECT '?', 'say "hi"', 'it''s ?' FROM link WHERE id = ?"#
        );
    }

    #[test]
    fn test_many_placeholders() {
        let sql = vec!["?"; 12].join(",");
        let prepared = Dialect::Postgres.prepare(&sql);
        assert!(prepared.starts_with("$1,$2,"));
        assert!(prepared.ends_with(",$11,$12"));
    }

    #[test]
    fn test_insert_ignore() {
        assert_eq!(
            Dialect::MySql.insert_ignore("setting", &[r#""key""#, "value"]),
            "INSERT IGNORE INTO setting (`key`, value) VALUES (?, ?)"
        );
        assert_eq!(
            Dialect::Postgres.insert_ignore("setting", &[r#""key""#, "value"]),
            r#"INSERT INTO setting ("key", value) VALUES ($1, $2) ON CONFLICT DO NOTHING"#
        );
    }

    #[test]
    fn test_parse_engine() {
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!(" MySQL ".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("sqlite".parse::<Dialect>().unwrap(), Dialect::Sqlite);

        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(err.to_string().contains("unsupported database engine"));
    }
}
