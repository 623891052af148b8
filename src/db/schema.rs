use sqlx::PgPool;

const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id            BIGSERIAL PRIMARY KEY,
    customer_name TEXT NOT NULL DEFAULT '',
    product_name  TEXT NOT NULL DEFAULT '',
    quantity      INTEGER NOT NULL DEFAULT 0,
    price         DOUBLE PRECISION NOT NULL DEFAULT 0
)
"#;

/// Create the `orders` table if it does not exist yet
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing orders schema...");
    sqlx::query(CREATE_ORDERS_TABLE).execute(pool).await?;
    tracing::info!("Orders schema ready");
    Ok(())
}
