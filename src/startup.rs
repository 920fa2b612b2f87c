use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::{config::Config, error::AppError};

/// Connects to the database and sets up the schema.
///
/// Opens a connection pool using the URL from configuration with SQL statement logging
/// disabled, then runs `setup_db` so the tables exist before the connection is handed out.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with schema in place
/// - `Err(AppError::DbErr)` - Failed to connect or to create the schema
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    setup_db(&db).await?;

    Ok(db)
}

/// Creates the users, groups and group member tables.
///
/// Runs the pending migrations in order, so the users table always exists before the
/// tables that reference it. Already applied migrations are skipped and every table is
/// created with `IF NOT EXISTS`, so calling this repeatedly is safe.
///
/// # Returns
/// - `Ok(())` - Schema is up to date
/// - `Err(AppError::DbErr)` - A migration failed
pub async fn setup_db(db: &DatabaseConnection) -> Result<(), AppError> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;

    tracing::info!("Database schema is up to date");

    Ok(())
}
