use std::fmt;

use chrono::NaiveDate;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{
    Client, ClientError, ClientId, Entity, IdGenerator, Reservation, ReservationError,
    ReservationId, Room, RoomNumber,
};
use crate::HotelConfig;

/// 予約マネージャ
///
/// 顧客、部屋、予約を登録順に保持する。部屋の重複予約は空室フラグのみで防ぎ、
/// 日付の重なりは判定しない。
#[derive(Debug, Default)]
pub struct ReservationManager {
    clients: Vec<Client>,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    /// 予約ごとに確保した部屋の `rooms` 上の位置
    room_slots: Vec<usize>,
    ids: IdGenerator,
}

impl ReservationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    /// 設定ファイルの部屋を登録した状態で生成する
    pub fn from_config(config: &HotelConfig) -> Self {
        let mut manager = Self::new();
        for seed in &config.rooms {
            manager.add_room(Room::new(seed.number, seed.kind.clone(), seed.price));
        }
        info!("{}: {}室を登録しました", config.name, manager.rooms.len());
        manager
    }

    /// 顧客を追加する
    pub fn add_client(&mut self, client: Client) {
        debug!("顧客を追加: {}", client.id());
        self.clients.push(client);
    }

    /// 顧客を作成して追加する
    pub fn register_client(
        &mut self,
        name: String,
        phone: String,
        email: String,
    ) -> Result<Client, ClientError> {
        let client = Client::create(self.ids.generate(), name, phone, email)?;
        self.add_client(client.clone());
        Ok(client)
    }

    /// 部屋を追加する
    pub fn add_room(&mut self, room: Room) {
        debug!("部屋を追加: {}", room);
        self.rooms.push(room);
    }

    /// 予約を作成する
    pub fn create_reservation(
        &mut self,
        client_id: ClientId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Reservation, ManagerError> {
        if !self.clients.iter().any(|c| c.id() == client_id) {
            warn!("予約失敗: 顧客 {} が見つかりません", client_id);
            return Err(ManagerError::ClientNotFound { id: client_id });
        }
        let index = match self
            .rooms
            .iter()
            .position(|r| r.number() == room_number && r.is_available())
        {
            Some(index) => index,
            None => {
                warn!("予約失敗: 部屋 {} は予約できません", room_number);
                return Err(self.unavailable(room_number));
            }
        };
        let reservation =
            Reservation::create(self.ids.generate(), client_id, room_number, check_in, check_out);
        self.rooms[index].occupy();
        self.reservations.push(reservation.clone());
        self.room_slots.push(index);
        info!("予約を作成: {}", reservation);
        Ok(reservation)
    }

    /// 予約をキャンセルする
    pub fn cancel_reservation(&mut self, id: ReservationId) -> Result<(), ManagerError> {
        let index = match self
            .reservations
            .iter()
            .position(|r| r.id() == id && r.is_active())
        {
            Some(index) => index,
            None => {
                warn!("キャンセル失敗: 有効な予約 {} が見つかりません", id);
                return Err(self.inactive(id));
            }
        };
        self.reservations[index].cancel().map_err(|e| match e {
            ReservationError::AlreadyCancelled => ManagerError::AlreadyCancelled { id },
        })?;
        self.rooms[self.room_slots[index]].release();
        info!("予約をキャンセル: {}", id);
        Ok(())
    }

    pub fn list_reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn list_clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn list_rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_available())
    }

    pub fn client(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    pub fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number() == number)
    }

    pub fn reservation(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id() == id)
    }

    /// 予約に顧客と部屋を結び付けた表示用データ
    pub fn details<'a>(&'a self, reservation: &'a Reservation) -> Option<ReservationDetails<'a>> {
        Some(ReservationDetails {
            reservation,
            client: self.client(reservation.client_id())?,
            room: self.booked_room(reservation)?,
        })
    }

    /// 現在の状態の写し
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            rooms: &self.rooms,
            clients: &self.clients,
            reservations: &self.reservations,
        }
    }

    fn booked_room(&self, reservation: &Reservation) -> Option<&Room> {
        let index = self
            .reservations
            .iter()
            .position(|r| r.id() == reservation.id())?;
        self.rooms.get(*self.room_slots.get(index)?)
    }

    fn unavailable(&self, number: RoomNumber) -> ManagerError {
        match self.rooms.iter().any(|r| r.number() == number) {
            true => ManagerError::RoomUnavailable { number },
            false => ManagerError::RoomNotFound { number },
        }
    }

    fn inactive(&self, id: ReservationId) -> ManagerError {
        match self.reservations.iter().any(|r| r.id() == id) {
            true => ManagerError::AlreadyCancelled { id },
            false => ManagerError::ReservationNotFound { id },
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReservationDetails<'a> {
    pub reservation: &'a Reservation,
    pub client: &'a Client,
    pub room: &'a Room,
}

impl fmt::Display for ReservationDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Room {} - {} to {} - {}",
            self.client.name(),
            self.room.number(),
            self.reservation.check_in(),
            self.reservation.check_out(),
            self.reservation.status()
        )
    }
}

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub rooms: &'a [Room],
    pub clients: &'a [Client],
    pub reservations: &'a [Reservation],
}

/// 予約マネージャのエラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum ManagerError {
    /// 顧客が見つかりません
    #[display(fmt = "Client {} not found", id)]
    ClientNotFound { id: ClientId },
    /// 部屋が見つかりません
    #[display(fmt = "Room {} not found", number)]
    RoomNotFound { number: RoomNumber },
    /// 部屋が空いていません
    #[display(fmt = "Room {} is not available", number)]
    RoomUnavailable { number: RoomNumber },
    /// 予約が見つかりません
    #[display(fmt = "Reservation {} not found", id)]
    ReservationNotFound { id: ReservationId },
    /// 予約は既にキャンセルされています
    #[display(fmt = "Reservation {} is already cancelled", id)]
    AlreadyCancelled { id: ReservationId },
}
