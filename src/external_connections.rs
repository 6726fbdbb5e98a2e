use sqlx::SqliteConnection;

/// A handle to an open database connection which driven adapters borrow to run queries
pub trait ConnectionHandle {
    fn borrow_connection(&mut self) -> &mut SqliteConnection;
}

/// Owns the clients used to reach systems outside this service. Business logic only ever sees
/// this trait, so driven adapters can be swapped for fakes in tests.
pub trait ExternalConnectivity {
    type DbHandle<'cxn_borrow>: ConnectionHandle + Send
    where
        Self: 'cxn_borrow;

    async fn database_cxn(&mut self) -> Result<Self::DbHandle<'_>, anyhow::Error>;
}
