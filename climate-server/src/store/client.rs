//! SQLite-backed measurement store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::domain::{
    AggregateRow, DateRange, Precipitation, TOBS_CUTOFF_DATE, TemperatureObservation,
    TemperatureStats,
};

use super::error::StoreError;

/// Default maximum pooled connections.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

const PRECIPITATION_SQL: &str = "SELECT date, prcp FROM measurement";

const STATIONS_SQL: &str = "SELECT DISTINCT station FROM station";

const TOBS_SQL: &str = "SELECT tobs, date FROM measurement WHERE date >= ?1";

// ?1 is the canonical start date, ?2 the optional inclusive end date.
const AGGREGATE_SQL: &str = r#"
    SELECT
        MIN(tobs) AS tmin,
        AVG(tobs) AS tavg,
        MAX(tobs) AS tmax,
        COUNT(tobs) AS observations,
        (SELECT COUNT(*) FROM measurement
            WHERE REPLACE(LOWER(date), ' ', '') = ?1) AS start_matches
    FROM measurement
    WHERE date >= ?1 AND (?2 IS NULL OR date <= ?2)
"#;

const MEASUREMENT_SCHEMA: &str = r#"
    CREATE TABLE measurement (
        id INTEGER PRIMARY KEY,
        station TEXT,
        date TEXT,
        prcp FLOAT,
        tobs FLOAT
    )
"#;

const STATION_SCHEMA: &str = r#"
    CREATE TABLE station (
        id INTEGER PRIMARY KEY,
        station TEXT,
        name TEXT,
        latitude FLOAT,
        longitude FLOAT,
        elevation FLOAT
    )
"#;

/// Configuration for the store connection pool.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection string, e.g. `sqlite:Resources/hawaii.sqlite`
    pub database_url: String,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// How long a request waits for a free connection
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    /// Create a new config for the given connection string.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }

    /// Set the pool size.
    pub fn with_max_connections(mut self, n: u32) -> Self {
        self.max_connections = n;
        self
    }

    /// Set the acquire timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }
}

/// Read-only gateway to the measurement and station tables.
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Build the pool for an existing store.
    ///
    /// The store is opened read-only and never created. Connections are made
    /// lazily, so an unreachable store shows up as [`StoreError::Unavailable`]
    /// on the first query rather than here.
    pub fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|source| StoreError::InvalidUrl {
                url: config.database_url.clone(),
                source,
            })?
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy_with(options);

        info!(
            url = %config.database_url,
            max_connections = config.max_connections,
            "Configured measurement store"
        );

        Ok(Self { pool })
    }

    /// Open a private in-memory store with empty tables.
    ///
    /// Used to build fixtures; seed it with [`insert_measurement`] and
    /// [`insert_station`].
    ///
    /// [`insert_measurement`]: ClimateStore::insert_measurement
    /// [`insert_station`]: ClimateStore::insert_station
    pub async fn open_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // Every in-memory connection is its own database, so pin exactly one.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        sqlx::query(MEASUREMENT_SCHEMA).execute(&pool).await?;
        sqlx::query(STATION_SCHEMA).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Add a measurement row to a fixture store.
    pub async fn insert_measurement(
        &self,
        station: &str,
        date: &str,
        prcp: Option<f64>,
        tobs: f64,
    ) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(station)
        .bind(date)
        .bind(prcp)
        .bind(tobs)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Add a station row to a fixture store.
    pub async fn insert_station(&self, station: &str, name: &str) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO station (station, name) VALUES (?1, ?2)")
            .bind(station)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Check that the store answers a trivial query.
    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    /// Every `(date, prcp)` pair, unfiltered, in store order.
    pub async fn precipitation(&self) -> Result<Vec<Precipitation>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Precipitation>(PRECIPITATION_SQL)
            .fetch_all(&mut *conn)
            .await?;

        debug!(rows = rows.len(), "Fetched precipitation");
        Ok(rows)
    }

    /// Every distinct station identifier.
    pub async fn stations(&self) -> Result<Vec<String>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let stations = sqlx::query_scalar::<_, String>(STATIONS_SQL)
            .fetch_all(&mut *conn)
            .await?;

        debug!(rows = stations.len(), "Fetched stations");
        Ok(stations)
    }

    /// Every `(tobs, date)` pair on or after [`TOBS_CUTOFF_DATE`].
    pub async fn temperature_observations(
        &self,
    ) -> Result<Vec<TemperatureObservation>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, TemperatureObservation>(TOBS_SQL)
            .bind(TOBS_CUTOFF_DATE)
            .fetch_all(&mut *conn)
            .await?;

        debug!(
            rows = rows.len(),
            cutoff = TOBS_CUTOFF_DATE,
            "Fetched temperature observations"
        );
        Ok(rows)
    }

    /// Min, mean and max temperature over a date range.
    ///
    /// Returns `Ok(None)` when no measurement's date equals the range's start
    /// date, or when the range holds no observations.
    pub async fn temperature_stats(
        &self,
        range: &DateRange,
    ) -> Result<Option<TemperatureStats>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, AggregateRow>(AGGREGATE_SQL)
            .bind(range.start.as_str())
            .bind(range.end.as_ref().map(|end| end.as_str()))
            .fetch_one(&mut *conn)
            .await?;

        debug!(
            start = %range.start,
            end = range.end.as_ref().map(|end| end.as_str()),
            observations = row.observations,
            start_matches = row.start_matches,
            "Computed temperature aggregate"
        );
        Ok(row.into_stats())
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
