use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub listen_port: String,
    pub db_host: String,
    pub db_port: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_sslmode: String,
    pub database_pool_max_connections: u32,
    pub database_pool_max_lifetime_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .set_default("listen_port", "8080")?
            .set_default("db_host", "localhost")?
            .set_default("db_port", "5434")?
            .set_default("db_user", "jobtrackr")?
            .set_default("db_password", "jobtrackr_password")?
            .set_default("db_name", "jobtrackr")?
            .set_default("db_sslmode", "disable")?
            .set_default("database_pool_max_connections", "10")?
            .set_default("database_pool_max_lifetime_secs", "1800")?
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name, self.db_sslmode
        )
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_materialize_without_env() {
        let s = Settings::new().expect("defaults should be enough");
        assert_eq!(s.db_sslmode, "disable");
        assert_eq!(s.database_pool_max_connections, 10);
        assert_eq!(s.database_pool_max_lifetime_secs, 1800);
    }

    #[test]
    fn database_url_carries_every_part() {
        let s = Settings::new().expect("defaults should be enough");
        let url = s.database_url();
        assert!(url.starts_with("postgres://"));
        assert!(url.contains(&format!("@{}:{}/", s.db_host, s.db_port)));
        assert!(url.ends_with(&format!("{}?sslmode={}", s.db_name, s.db_sslmode)));
    }
}
