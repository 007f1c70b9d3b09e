use std::fmt;

use chrono::NaiveDate;
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ClientId, Entity, Id, RoomNumber};

/// 予約ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref,
)]
pub struct ReservationId(Uuid);

impl Id for ReservationId {
    type Inner = Uuid;
}

impl ReservationId {
    /// 表示用の先頭8文字
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_owned()
    }
}

/// 予約の状態
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

/// 予約エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: ReservationId,
    client_id: ClientId,
    room_number: RoomNumber,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: ReservationStatus,
}

impl Reservation {
    /// チェックアウトがチェックイン以前でも受け付ける
    pub fn create(
        id: ReservationId,
        client_id: ClientId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Self {
        Self {
            id,
            client_id,
            room_number,
            check_in,
            check_out,
            status: ReservationStatus::Active,
        }
    }

    pub fn cancel(&mut self) -> Result<(), ReservationError> {
        self.validate_cancelled()?;
        self.status = ReservationStatus::Cancelled;
        Ok(())
    }

    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    fn validate_cancelled(&self) -> Result<(), ReservationError> {
        match self.status {
            ReservationStatus::Active => Ok(()),
            ReservationStatus::Cancelled => Err(ReservationError::AlreadyCancelled),
        }
    }
}

impl Entity for Reservation {
    type Id = ReservationId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {} - Room {} - {} to {} - {}",
            self.id.short(),
            self.room_number,
            self.check_in,
            self.check_out,
            self.status
        )
    }
}

/// 予約エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ReservationError {
    /// 予約は既にキャンセルされています
    #[display(fmt = "Reservation is already cancelled")]
    AlreadyCancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reservation() -> Reservation {
        Reservation::create(
            ReservationId::from(Uuid::from_u128(0xabcdef12_0000_0000_0000_000000000001)),
            ClientId::from(Uuid::from_u128(1)),
            RoomNumber::from(101),
            date(2024, 1, 10),
            date(2024, 1, 12),
        )
    }

    #[test]
    fn test_reservation_create() {
        let reservation = reservation();
        assert_eq!(reservation.status(), ReservationStatus::Active);
        assert!(reservation.is_active());
        assert_eq!(reservation.room_number(), RoomNumber::from(101));
        assert_eq!(reservation.check_in(), date(2024, 1, 10));
        assert_eq!(reservation.check_out(), date(2024, 1, 12));
    }

    #[test]
    fn test_reservation_cancel_once() {
        let mut reservation = reservation();
        assert_eq!(reservation.cancel(), Ok(()));
        assert_eq!(reservation.status(), ReservationStatus::Cancelled);
        assert_eq!(reservation.cancel(), Err(ReservationError::AlreadyCancelled));
        assert_eq!(reservation.status(), ReservationStatus::Cancelled);
    }

    #[test]
    fn test_reservation_accepts_reversed_dates() {
        let reservation = Reservation::create(
            ReservationId::from(Uuid::from_u128(2)),
            ClientId::from(Uuid::from_u128(1)),
            RoomNumber::from(102),
            date(2024, 3, 5),
            date(2024, 3, 1),
        );
        assert!(reservation.check_out() < reservation.check_in());
        assert!(reservation.is_active());
    }

    #[test]
    fn test_reservation_display() {
        assert_eq!(
            reservation().to_string(),
            "Reservation abcdef12 - Room 101 - 2024-01-10 to 2024-01-12 - Active"
        );
    }
}
