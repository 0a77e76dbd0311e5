use crate::server::{catalog::TemplateCatalog, config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations, which also seed the active event
/// slot. This function must complete successfully before any event operation can run.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the event template catalog.
///
/// Uses the file at `EVENT_TEMPLATES_PATH` when configured, otherwise the catalog compiled
/// into the binary. Either way every template is validated before the bot starts.
///
/// # Returns
/// - `Ok(TemplateCatalog)` - Validated catalog
/// - `Err(AppError::ConfigErr)` - File missing, malformed or containing an invalid template
pub fn load_template_catalog(config: &Config) -> Result<TemplateCatalog, AppError> {
    let catalog = match &config.event_templates_path {
        Some(path) => {
            tracing::info!("Loading event templates from {}", path);
            TemplateCatalog::from_file(path)?
        }
        None => TemplateCatalog::builtin()?,
    };

    tracing::info!("Loaded {} event templates", catalog.all().len());

    Ok(catalog)
}
