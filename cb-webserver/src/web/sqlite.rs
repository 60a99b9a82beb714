use anyhow::Result as Fallible;
use cb_db_sqlite::{Connections as ConnectionPool, DbReadOnly, DbReadWrite};
use rocket::{
    outcome::try_outcome,
    request::{FromRequest, Outcome},
    Request, State,
};

/// Newtype around the connection pool so that route handlers can take
/// it as a request guard.
#[derive(Clone)]
pub struct Connections(ConnectionPool);

impl Connections {
    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        self.0.shared()
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        self.0.exclusive()
    }

    /// The underlying pool, as the application flows expect it.
    pub fn pool(&self) -> &ConnectionPool {
        &self.0
    }
}

impl From<ConnectionPool> for Connections {
    fn from(conn: ConnectionPool) -> Self {
        Self(conn)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Connections {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        Outcome::Success(connections.inner().clone())
    }
}
