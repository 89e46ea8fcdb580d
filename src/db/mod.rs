//! Connection handling and schema bootstrap.
//!
//! The backend is picked once at startup from a [`ConnectionConfig`]; all
//! repositories share one `sqlx` [`AnyPool`] and the matching [`Dialect`].

mod dialect;

pub use dialect::Dialect;

use std::time::Duration;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// Everything needed to open the pool, resolved from configuration.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub dialect: Dialect,
    pub url: String,
}

impl ConnectionConfig {
    pub fn new(dialect: Dialect, url: impl Into<String>) -> Self {
        Self { dialect, url: url.into() }
    }

    /// The URL with the password of the user-info part masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        if !self.url.contains('@') {
            return self.url.clone();
        }
        match url::Url::parse(&self.url) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "***".to_owned(),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:")
    }
}

pub async fn connect(cfg: &ConnectionConfig, max_connections: u32) -> anyhow::Result<AnyPool> {
    sqlx::any::install_default_drivers();

    let dialect = cfg.dialect;
    let mut options = AnyPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                if dialect == Dialect::Sqlite {
                    sqlx::query("PRAGMA foreign_keys=ON;").execute(&mut *conn).await?;
                    let _ = sqlx::query("PRAGMA busy_timeout=10000;").execute(&mut *conn).await;
                }
                Ok(())
            })
        });

    // An in-memory SQLite database lives and dies with its single connection
    if cfg.is_in_memory() {
        options = options.max_connections(1).min_connections(1).idle_timeout(None).max_lifetime(None);
    }

    tracing::debug!("Connecting to {}", cfg.redacted_url());
    let pool = options.connect(&cfg.url).await?;
    tracing::info!(driver = dialect.name(), "Database connected");
    Ok(pool)
}

const SCHEMA: [(&str, &str); 5] = [
    (
        "user",
        r#"CREATE TABLE IF NOT EXISTS "user" (
            id VARCHAR(36) NOT NULL PRIMARY KEY,
            email VARCHAR(255) NOT NULL,
            first_name VARCHAR(255) NOT NULL,
            last_name VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL
        )"#,
    ),
    (
        "shelf",
        r#"CREATE TABLE IF NOT EXISTS shelf (
            id VARCHAR(36) NOT NULL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            path VARCHAR(255) NOT NULL,
            domain VARCHAR(255) NOT NULL,
            description TEXT NOT NULL,
            theme VARCHAR(255) NOT NULL,
            icon TEXT NOT NULL,
            user_id VARCHAR(36) NOT NULL,
            FOREIGN KEY (user_id) REFERENCES "user"(id)
        )"#,
    ),
    (
        "section",
        r#"CREATE TABLE IF NOT EXISTS section (
            id VARCHAR(36) NOT NULL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            shelf_id VARCHAR(36) NOT NULL,
            FOREIGN KEY (shelf_id) REFERENCES shelf(id)
        )"#,
    ),
    (
        "link",
        r#"CREATE TABLE IF NOT EXISTS link (
            id VARCHAR(36) NOT NULL PRIMARY KEY,
            title VARCHAR(255) NOT NULL,
            link TEXT NOT NULL,
            icon TEXT NOT NULL,
            color VARCHAR(64) NOT NULL,
            section_id VARCHAR(36) NOT NULL,
            FOREIGN KEY (section_id) REFERENCES section(id)
        )"#,
    ),
    (
        "setting",
        r#"CREATE TABLE IF NOT EXISTS setting (
            "key" VARCHAR(255) NOT NULL,
            language_code VARCHAR(16) NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY ("key", language_code)
        )"#,
    ),
];

/// Settings every installation starts with (English, everything hidden).
pub const DEFAULT_SETTINGS: [(&str, &str); 11] = [
    ("about", ""),
    ("about_show", "false"),
    ("contact", ""),
    ("contact_show", "false"),
    ("imprint", ""),
    ("imprint_show", "false"),
    ("terms_of_use", ""),
    ("terms_of_use_show", "false"),
    ("privacy_policy", ""),
    ("privacy_policy_show", "false"),
    ("redirect_to_dashboard", "false"),
];

/// Creates missing tables and seeds the default settings. Safe to run on every start.
pub async fn init_db(pool: &AnyPool, dialect: Dialect) -> anyhow::Result<()> {
    tracing::info!("Applying DB schema...");

    for (table, ddl) in SCHEMA {
        sqlx::query(&dialect.prepare(ddl))
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("Migration failed for table {}: {}", table, e))?;
    }

    // MySQL indexes foreign key columns on its own and lacks CREATE INDEX IF NOT EXISTS
    if dialect != Dialect::MySql {
        let indexes = [
            ("idx_shelf_user", "CREATE INDEX IF NOT EXISTS idx_shelf_user ON shelf(user_id)"),
            ("idx_section_shelf", "CREATE INDEX IF NOT EXISTS idx_section_shelf ON section(shelf_id)"),
            ("idx_link_section", "CREATE INDEX IF NOT EXISTS idx_link_section ON link(section_id)"),
        ];
        for (name, ddl) in indexes {
            if let Err(e) = sqlx::query(ddl).execute(pool).await {
                tracing::warn!("Failed to create index {}: {}", name, e);
            }
        }
    }

    let insert = dialect.insert_ignore("setting", &[r#""key""#, "language_code", "value"]);
    for (key, value) in DEFAULT_SETTINGS {
        sqlx::query(&insert).bind(key).bind("en").bind(value).execute(pool).await?;
    }

    tracing::info!("DB schema ready");
    Ok(())
}
