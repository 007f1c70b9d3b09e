mod command;

use std::{
    error::Error,
    io::{self, BufRead, Write},
};

use hotel::{domain::Entity, HotelConfig, ReservationManager};
use tracing::{error, info, Level};

use crate::command::{Command, HELP};

fn main() {
    match HotelConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .with_writer(io::stderr)
                .init();
            if let Err(error) = run(&config) {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt().with_writer(io::stderr).init();
            error!("設定の読み込みに失敗しました: {}", error)
        }
    }
}

fn run(config: &HotelConfig) -> Result<(), Box<dyn Error>> {
    let mut desk = Desk::new(ReservationManager::from_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{} - type `help` for commands", config.name)?;
    for line in stdin.lock().lines() {
        if !desk.handle(&line?, &mut stdout)? {
            break;
        }
        stdout.flush()?;
    }
    info!("終了します");
    Ok(())
}

/// 入力行を予約マネージャの操作に変換する
struct Desk {
    manager: ReservationManager,
}

impl Desk {
    fn new(manager: ReservationManager) -> Self {
        Self { manager }
    }

    /// `quit` で `false` を返す
    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        if line.trim().is_empty() {
            return Ok(true);
        }
        match Command::parse(line) {
            Ok(Command::Quit) => return Ok(false),
            Ok(command) => self.execute(command, out)?,
            Err(e) => writeln!(out, "error: {}", e)?,
        }
        Ok(true)
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Rooms => {
                for room in self.manager.list_rooms() {
                    writeln!(out, "{}", room)?;
                }
            }
            Command::Available => {
                for room in self.manager.available_rooms() {
                    writeln!(out, "{}", room)?;
                }
            }
            Command::Clients => {
                for client in self.manager.list_clients() {
                    writeln!(
                        out,
                        "{} {} - {} - {}",
                        client.id(),
                        client.name(),
                        client.email(),
                        client.phone()
                    )?;
                }
            }
            Command::AddClient { name, phone, email } => {
                match self.manager.register_client(name, phone, email) {
                    Ok(client) => writeln!(out, "added {} {}", client.id(), client)?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                }
            }
            Command::Book {
                client_id,
                room_number,
                check_in,
                check_out,
            } => match self
                .manager
                .create_reservation(client_id, room_number, check_in, check_out)
            {
                Ok(reservation) => writeln!(out, "booked {}", reservation.id())?,
                Err(e) => writeln!(out, "error: {}", e)?,
            },
            Command::Reservations => {
                for reservation in self.manager.list_reservations() {
                    match self.manager.details(reservation) {
                        Some(details) => writeln!(out, "{} {}", reservation.id(), details)?,
                        None => writeln!(out, "{} {}", reservation.id(), reservation)?,
                    }
                }
            }
            Command::Cancel { reservation_id } => {
                match self.manager.cancel_reservation(reservation_id) {
                    Ok(()) => writeln!(out, "cancelled {}", reservation_id)?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                }
            }
            Command::Export => {
                let json = serde_json::to_string_pretty(&self.manager.snapshot())
                    .map_err(io::Error::from)?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }
}
