use tokio_postgres::Client;
use tokio_postgres::Config;
use tokio_postgres::Error as E;
use tokio_postgres::NoTls;

/// Connection parameters mirror the local docker-compose Postgres service.
const HOST: &str = "localhost";
const PORT: u16 = 5433;
const DBNAME: &str = "bigdatatools1";
const USER: &str = "psqluser";
const PASS: &str = "psqlpass";

/// Open a database connection and return the client.
/// DB_URL overrides the fixed container parameters when set.
/// The connection task is spawned onto the runtime and runs until
/// the client drops, on every exit path.
pub async fn db() -> Result<Client, E> {
    log::info!("connecting to database");
    let (client, connection) = match std::env::var("DB_URL") {
        Ok(ref url) => tokio_postgres::connect(url, NoTls).await?,
        Err(_) => {
            Config::default()
                .host(HOST)
                .port(PORT)
                .dbname(DBNAME)
                .user(USER)
                .password(PASS)
                .connect(NoTls)
                .await?
        }
    };
    tokio::spawn(connection);
    let version = client.query_one("SELECT version()", &[]).await?;
    log::info!("database connected: {}", version.get::<_, &str>(0));
    Ok(client)
}
