use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::{Money, RoomNumber};

pub mod domain;

pub use crate::domain::ReservationManager;

#[derive(Clone, Debug, Deserialize)]
pub struct HotelConfig {
    pub name: String,
    pub logger: Logger,
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
}

impl HotelConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("hotel.toml")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::with_prefix("HOTEL").separator("_"))
            .build()?
            .try_deserialize::<HotelConfig>()
    }

    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<HotelConfig>()
    }
}

/// 起動時に登録される部屋
#[serde_as]
#[derive(Clone, Debug, Deserialize)]
pub struct RoomSeed {
    pub number: RoomNumber,
    pub kind: String,
    #[serde_as(as = "DisplayFromStr")]
    pub price: Money,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logger {
    pub level: Level,
}

#[derive(Clone, Debug, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Currency;

    use super::*;

    const SAMPLE: &str = r#"
        name = "Refugio dos Sonhos"

        [logger]
        level = "DEBUG"

        [[rooms]]
        number = 101
        kind = "single"
        price = "200.00 BRL"

        [[rooms]]
        number = 102
        kind = "double"
        price = "300 BRL"
    "#;

    #[test]
    fn test_parse_config() {
        let config = HotelConfig::parse(SAMPLE).unwrap();
        assert_eq!(config.name, "Refugio dos Sonhos");
        assert_eq!(tracing::Level::from(&config.logger.level), tracing::Level::DEBUG);
        assert_eq!(config.rooms.len(), 2);
        assert_eq!(config.rooms[0].number, RoomNumber::from(101));
        assert_eq!(config.rooms[0].kind, "single");
        assert_eq!(config.rooms[0].price, Money::new(20000, Currency::BRL));
        assert_eq!(config.rooms[1].price, Money::new(30000, Currency::BRL));
    }

    #[test]
    fn test_parse_config_rejects_bad_price() {
        let toml = r#"
            name = "x"

            [logger]
            level = "INFO"

            [[rooms]]
            number = 1
            kind = "single"
            price = "-10.00 BRL"
        "#;
        assert!(HotelConfig::parse(toml).is_err());
    }

    #[test]
    fn test_seeded_manager() {
        let config = HotelConfig::parse(SAMPLE).unwrap();
        let manager = ReservationManager::from_config(&config);
        let numbers = manager
            .list_rooms()
            .iter()
            .map(|r| *r.number())
            .collect::<Vec<_>>();
        assert_eq!(numbers, vec![101, 102]);
        assert!(manager.list_rooms().iter().all(|r| r.is_available()));
    }
}
