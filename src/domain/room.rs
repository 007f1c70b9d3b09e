use std::fmt;

use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, Id, Money};

/// 部屋番号
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref,
)]
pub struct RoomNumber(u32);

impl Id for RoomNumber {
    type Inner = u32;
}

/// 部屋エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    number: RoomNumber,
    kind: String,
    nightly_price: Money,
    available: bool,
}

impl Room {
    pub fn new(number: RoomNumber, kind: String, nightly_price: Money) -> Self {
        Self {
            number,
            kind,
            nightly_price,
            available: true,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn nightly_price(&self) -> &Money {
        &self.nightly_price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn occupy(&mut self) {
        self.available = false;
    }

    pub(crate) fn release(&mut self) {
        self.available = true;
    }
}

impl Entity for Room {
    type Id = RoomNumber;

    fn id(&self) -> Self::Id {
        self.number
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.available {
            true => "Available",
            false => "Occupied",
        };
        write!(
            f,
            "Room {} - {} - {} - {}",
            self.number, self.kind, self.nightly_price, status
        )
    }
}
