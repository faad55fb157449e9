/// Database layer for pguser
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use pguser_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config)?;
///     Ok(())
/// }
/// ```

pub mod pool;
