use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Connection settings for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "root".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 3306,
            name: "posts_db".to_string(),
            max_connections: 25,
            min_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// MySQL connection URL built from the individual settings.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Open the connection pool and verify the database is reachable.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to database..."
    );

    let opts = ConnectOptions::new(config.url())
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .to_owned();

    let db = Database::connect(opts).await?;
    db.ping().await?;

    tracing::info!(
        "Database connected (pool: {}..{})",
        config.min_connections,
        config.max_connections
    );

    Ok(db)
}
