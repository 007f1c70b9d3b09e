use chrono::NaiveDate;
use derive_more::{Display, Error};
use hotel::domain::{ClientId, Id, ReservationId, RoomNumber};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const HELP: &str = "\
rooms                                           list every room
available                                       list available rooms
clients                                         list clients
add-client <name> | <phone> | <email>           register a client
book <client-id> <room> <check-in> <check-out>  create a reservation (dates as YYYY-MM-DD)
reservations                                    list reservations
cancel <reservation-id>                         cancel a reservation
export                                          print all data as JSON
help                                            show this help
quit                                            exit";

/// フロントの操作
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Rooms,
    Available,
    Clients,
    AddClient {
        name: String,
        phone: String,
        email: String,
    },
    Book {
        client_id: ClientId,
        room_number: RoomNumber,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    Reservations,
    Cancel {
        reservation_id: ReservationId,
    },
    Export,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };
        match name {
            "rooms" => Ok(Command::Rooms),
            "available" => Ok(Command::Available),
            "clients" => Ok(Command::Clients),
            "reservations" => Ok(Command::Reservations),
            "export" => Ok(Command::Export),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "add-client" => Self::parse_add_client(rest),
            "book" => Self::parse_book(rest),
            "cancel" => Self::parse_cancel(rest),
            "" => Err(CommandError::Empty),
            _ => Err(CommandError::Unknown {
                name: name.to_owned(),
            }),
        }
    }

    fn parse_add_client(rest: &str) -> Result<Self, CommandError> {
        let fields = rest.split('|').map(str::trim).collect::<Vec<_>>();
        match fields.as_slice() {
            [name, phone, email] => Ok(Command::AddClient {
                name: (*name).to_owned(),
                phone: (*phone).to_owned(),
                email: (*email).to_owned(),
            }),
            _ => Err(CommandError::Usage {
                usage: "add-client <name> | <phone> | <email>",
            }),
        }
    }

    fn parse_book(rest: &str) -> Result<Self, CommandError> {
        let args = rest.split_whitespace().collect::<Vec<_>>();
        match args.as_slice() {
            [client_id, room_number, check_in, check_out] => Ok(Command::Book {
                client_id: ClientId::parse(client_id).ok_or(CommandError::InvalidId)?,
                room_number: RoomNumber::parse(room_number)
                    .ok_or(CommandError::InvalidRoomNumber)?,
                check_in: parse_date(check_in)?,
                check_out: parse_date(check_out)?,
            }),
            _ => Err(CommandError::Usage {
                usage: "book <client-id> <room> <check-in> <check-out>",
            }),
        }
    }

    fn parse_cancel(rest: &str) -> Result<Self, CommandError> {
        let args = rest.split_whitespace().collect::<Vec<_>>();
        match args.as_slice() {
            [reservation_id] => Ok(Command::Cancel {
                reservation_id: ReservationId::parse(reservation_id)
                    .ok_or(CommandError::InvalidId)?,
            }),
            _ => Err(CommandError::Usage {
                usage: "cancel <reservation-id>",
            }),
        }
    }
}

pub fn parse_date(text: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(CommandError::InvalidDate)
}

/// 入力エラー
#[derive(Error, Display, Debug, PartialEq)]
pub enum CommandError {
    #[display(fmt = "Empty command")]
    Empty,
    #[display(fmt = "Unknown command: {} (try `help`)", name)]
    Unknown { name: String },
    #[display(fmt = "Usage: {}", usage)]
    Usage { usage: &'static str },
    #[display(fmt = "Invalid id")]
    InvalidId,
    #[display(fmt = "Invalid room number")]
    InvalidRoomNumber,
    /// 日付の形式が不正です
    #[display(fmt = "Invalid date: {}", _0)]
    InvalidDate(#[error(source)] chrono::ParseError),
}
