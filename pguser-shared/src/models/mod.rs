/// Database models for pguser
///
/// # Models
///
/// - `user`: User records (first name, last name)
///
/// # Example
///
/// ```no_run
/// use pguser_shared::models::user::User;
/// use pguser_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default())?;
///
/// for user in User::list(&pool).await? {
///     println!("Hello, {} {}!", user.first_name, user.last_name);
/// }
/// # Ok(())
/// # }
/// ```

pub mod user;
