
use crate::{Error, Result};
use std::{env, net::SocketAddr, str::FromStr, sync::OnceLock};

const DEFAULT_WEB_ADDR: &str = "0.0.0.0:3000";

pub fn config() -> &'static Config {
    static INSTANCE: OnceLock<Config> = OnceLock::new();

    INSTANCE.get_or_init(|| {
        Config::load_from_env().unwrap_or_else(|e| {
            panic!("FATAL - UNABLE TO LOAD CONFIG - Cause: {e:?}")
        })
    })
}

/// Process settings, read once from the environment.
///
/// `SERVICE_WEB_ADDR` overrides the listen address. Left unset, the server
/// binds `0.0.0.0:3000`.
#[allow(non_snake_case)]
#[derive(Debug)]
pub struct Config {
    pub WEB_ADDR: SocketAddr,
}

impl Config {
    fn load_from_env() -> Result<Config> {
        Ok(Config {
            WEB_ADDR: get_env_parse("SERVICE_WEB_ADDR", DEFAULT_WEB_ADDR)?,
        })
    }
}

fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse<T: FromStr>(name: &'static str, default: &str) -> Result<T> {
    get_env_or(name, default)
        .parse::<T>()
        .map_err(|_| Error::ConfigWrongFormat(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[serial]
    #[test]
    fn test_load_default_addr() {
        env::remove_var("SERVICE_WEB_ADDR");
        let config = Config::load_from_env().unwrap();
        assert_eq!(config.WEB_ADDR, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    }

    #[serial]
    #[test]
    fn test_load_addr_from_env() {
        env::set_var("SERVICE_WEB_ADDR", "127.0.0.1:8081");
        let config = Config::load_from_env().unwrap();
        env::remove_var("SERVICE_WEB_ADDR");
        assert_eq!(config.WEB_ADDR.port(), 8081);
    }

    #[serial]
    #[test]
    fn test_load_bad_addr() {
        env::set_var("SERVICE_WEB_ADDR", "not-an-addr");
        let res = Config::load_from_env();
        env::remove_var("SERVICE_WEB_ADDR");
        assert!(matches!(res, Err(Error::ConfigWrongFormat("SERVICE_WEB_ADDR"))));
    }
}
