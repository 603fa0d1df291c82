use tokio_postgres::Client;
use tokio_postgres::Error as E;

/// Status queries used to verify loads. Table names come from the
/// compile-time constants in schema.rs, never from user input.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    async fn rows(&self, table: &str) -> Result<i64, E>;
    async fn exists(&self, table: &str) -> Result<bool, E>;
}

#[async_trait::async_trait]
impl Check for Client {
    async fn rows(&self, table: &str) -> Result<i64, E> {
        let sql = format!("SELECT COUNT(*) FROM {t}", t = table);
        Ok(self.query_one(&sql, &[]).await?.get::<_, i64>(0))
    }
    async fn exists(&self, table: &str) -> Result<bool, E> {
        const SQL: &str =
            "SELECT 1 FROM information_schema.tables WHERE table_name = $1";
        Ok(self.query_opt(SQL, &[&table]).await?.is_some())
    }
}
