use crate::cart::Cart;
use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqlitePool, SqlitePoolOptions},
    Sqlite,
};

/// Storage key for the serialized cart, carried over from the browser
/// localStorage slot it replaces.
pub const CART_KEY: &str = "shoppingCart";

pub async fn create_db_pool(db_url: &str) -> Result<SqlitePool> {
    // Create database if it doesn't exist
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        Sqlite::create_database(db_url).await?;
    }

    // One connection is all a single-user store needs, and a `:memory:`
    // database only exists on the connection that created it.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(db_url)
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

/// Serialize the cart and overwrite whatever was stored under the key.
pub async fn save_cart(pool: &SqlitePool, cart: &Cart) -> Result<()> {
    let value = serde_json::to_string(cart)?;

    sqlx::query(
        r#"
        INSERT INTO storage (key, value)
        VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(CART_KEY)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

/// Restore the persisted cart. An absent key and an unparseable value both
/// read as an empty cart; no error is surfaced for either.
pub async fn load_cart(pool: &SqlitePool) -> Result<Cart> {
    let record = sqlx::query_as::<_, (String,)>(
        r#"
        SELECT value
        FROM storage
        WHERE key = ?
        "#,
    )
    .bind(CART_KEY)
    .fetch_optional(pool)
    .await?;

    Ok(record
        .and_then(|(value,)| serde_json::from_str(&value).ok())
        .unwrap_or_default())
}

#[cfg(test)]
pub async fn create_test_pool() -> Result<SqlitePool> {
    create_db_pool("sqlite::memory:").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_empty_cart() -> Result<()> {
        let pool = create_test_pool().await?;
        let cart = load_cart(&pool).await?;
        assert!(cart.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn save_then_load_round_trips_order_and_quantities() -> Result<()> {
        let pool = create_test_pool().await?;

        let mut cart = Cart::new();
        cart.add(7);
        cart.add(7);
        cart.add(3);
        save_cart(&pool, &cart).await?;

        let restored = load_cart(&pool).await?;
        assert_eq!(restored, cart);
        Ok(())
    }

    #[tokio::test]
    async fn save_overwrites_the_previous_value() -> Result<()> {
        let pool = create_test_pool().await?;

        let mut cart = Cart::new();
        cart.add(1);
        save_cart(&pool, &cart).await?;

        cart.empty();
        cart.add(2);
        save_cart(&pool, &cart).await?;

        let restored = load_cart(&pool).await?;
        assert_eq!(restored.lines().len(), 1);
        assert_eq!(restored.lines()[0].id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn unparseable_value_reads_as_empty_cart() -> Result<()> {
        let pool = create_test_pool().await?;

        sqlx::query("INSERT INTO storage (key, value) VALUES (?, ?)")
            .bind(CART_KEY)
            .bind("{definitely not a cart")
            .execute(&pool)
            .await?;

        let cart = load_cart(&pool).await?;
        assert!(cart.is_empty());
        Ok(())
    }
}
