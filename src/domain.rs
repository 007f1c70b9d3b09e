pub mod client;
pub mod manager;
pub mod money;
pub mod reservation;
pub mod room;

use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display},
    ops::Deref,
    str::FromStr,
};
use uuid::Uuid;

pub use self::client::*;
pub use self::manager::*;
pub use self::money::*;
pub use self::reservation::*;
pub use self::room::*;

pub trait Id:
    Copy
    + Eq
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
{
    type Inner: FromStr;

    fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<Self::Inner>().ok().map(Self::from)
    }
}

pub trait Entity {
    type Id: Id;

    fn id(&self) -> Self::Id;
}

/// ID生成器
pub struct IdGenerator(Box<dyn FnMut() -> Uuid + Send>);

impl IdGenerator {
    pub fn new<F>(gen: F) -> Self
    where
        F: FnMut() -> Uuid + Send + 'static,
    {
        Self(Box::new(gen))
    }

    /// ランダムなUUID(v4)を生成する
    pub fn random() -> Self {
        Self::new(Uuid::new_v4)
    }

    /// 1から順に連番のUUIDを生成する
    pub fn sequential() -> Self {
        let mut counter = 0u128;
        Self::new(move || {
            counter += 1;
            Uuid::from_u128(counter)
        })
    }

    pub fn generate<T>(&mut self) -> T
    where
        T: From<Uuid>,
    {
        T::from((self.0)())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::random()
    }
}

impl Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdGenerator")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::sequential();
        let a: ClientId = gen.generate();
        let b: ReservationId = gen.generate();
        assert_eq!(*a, Uuid::from_u128(1));
        assert_eq!(*b, Uuid::from_u128(2));
    }

    #[test]
    fn test_random_ids_differ() {
        let mut gen = IdGenerator::default();
        let a: ClientId = gen.generate();
        let b: ClientId = gen.generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_parse() {
        let id = ClientId::parse(" 00000000-0000-0000-0000-000000000001 ");
        assert_eq!(id, Some(ClientId::from(Uuid::from_u128(1))));
        assert_eq!(ClientId::parse("nonexistent-id"), None);
        assert_eq!(RoomNumber::parse("101"), Some(RoomNumber::from(101)));
    }
}
