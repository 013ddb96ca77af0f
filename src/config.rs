use std::{env, path::PathBuf};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("MOOD_DATA_DIR").ok(), env::var("PORT").ok())
    }

    fn from_vars(data_dir: Option<String>, port: Option<String>) -> Self {
        Self {
            data_dir: data_dir
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            port: port
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_vars(Some("/tmp/moods".into()), Some("eighty".into()));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/moods"));
        assert_eq!(config.port, 8080);

        let config = Config::from_vars(Some("  ".into()), Some(" 3000 ".into()));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.port, 3000);
    }
}
