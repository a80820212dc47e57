/**
 * Database Seeder Entry Point
 *
 * Wipes and reseeds the database named by DATABASE_URL. Unlike the server,
 * the seeder refuses to run without a database.
 */

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| "DATABASE_URL must be set to seed the database")?;

    tracing::info!("Connecting to database...");
    let pool = sqlx::PgPool::connect(&database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    dapphunt::backend::seed::run_seed(&pool).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("The seeder requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin dapphunt-seed --features ssr");
    std::process::exit(1);
}
