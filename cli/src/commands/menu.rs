//! # hotelrs Interactive Menu
//!
//! File: cli/src/commands/menu.rs
//!
//! ## Overview
//!
//! `hotelrs menu` runs a numbered front-desk menu until the user chooses
//! `Exit` or input ends:
//!
//! ```text
//! --- HOTEL MENU ---
//! 1) Show all rooms
//! 2) Search available rooms
//! 3) Book a room
//! 4) Cancel reservation
//! 5) View my reservations
//! 6) Pay for reservation
//! 7) Save data
//! 8) Load data
//! 9) Exit
//! ```
//!
//! Unlike the one-shot subcommands, the menu only writes the snapshot when
//! asked to (option 7), and option 8 discards in-memory changes in favour of
//! the saved file. A failed action prints `Error: ...` and returns to the menu.
//!
//! ## Architecture
//!
//! The loop is generic over `BufRead` and `Write`; `handle_menu` wires it to
//! stdin/stdout, tests feed it a byte slice and read back a `Vec<u8>`.
//!
use super::session::{Origin, Session};
use crate::booking::{engine, model::Category};
use crate::common::ui;
use crate::core::error::{HotelError, Result};
use chrono::NaiveDate;
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const MENU: &str = "\n--- HOTEL MENU ---
1) Show all rooms
2) Search available rooms
3) Book a room
4) Cancel reservation
5) View my reservations
6) Pay for reservation
7) Save data
8) Load data
9) Exit";

#[derive(Parser, Debug)]
#[command(about = "Run the interactive front-desk menu")]
pub struct MenuArgs {}

pub fn handle_menu(_args: MenuArgs, session: &mut Session) -> Result<()> {
    info!("Handling menu command");
    let stdin = io::stdin();
    run_menu(session, stdin.lock(), io::stdout().lock())
}

/// Whether the loop should keep going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub fn run_menu<R: BufRead, W: Write>(session: &mut Session, input: R, out: W) -> Result<()> {
    let mut menu = Menu {
        session,
        input,
        out,
        dirty: false,
    };
    menu.greet()?;
    loop {
        writeln!(menu.out, "{}", MENU)?;
        let Some(choice) = menu.prompt("Choose: ")? else {
            break;
        };
        match menu.step(&choice) {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => break,
            Err(e) => {
                warn!("Menu action '{}' failed: {:#}", choice, e);
                writeln!(menu.out, "Error: {}", e)?;
            }
        }
    }
    menu.farewell()
}

struct Menu<'s, R, W> {
    session: &'s mut Session,
    input: R,
    out: W,
    dirty: bool,
}

impl<R: BufRead, W: Write> Menu<'_, R, W> {
    fn greet(&mut self) -> Result<()> {
        match self.session.origin() {
            Origin::Loaded => writeln!(
                self.out,
                "Loaded data from {}",
                self.session.data_file().display()
            )?,
            Origin::Seeded => writeln!(self.out, "Starting with seeded hotel data.")?,
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        if self.dirty {
            writeln!(
                self.out,
                "Unsaved changes were discarded (use option 7 to save)."
            )?;
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints `label` and reads one trimmed line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Menu input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn step(&mut self, choice: &str) -> Result<Step> {
        match choice {
            "1" => self.show_rooms(),
            "2" => self.search(),
            "3" => self.book(),
            "4" => self.cancel(),
            "5" => self.view_reservations(),
            "6" => self.pay(),
            "7" => self.save(),
            "8" => self.load(),
            "9" => Ok(Step::Exit),
            _ => {
                writeln!(self.out, "Unknown option.")?;
                Ok(Step::Continue)
            }
        }
    }

    fn show_rooms(&mut self) -> Result<Step> {
        let rooms = engine::rooms(&self.session.hotel);
        ui::write_rooms(&mut self.out, rooms, "The hotel has no rooms.")?;
        Ok(Step::Continue)
    }

    fn search(&mut self) -> Result<Step> {
        let Some(category) = self.prompt("Category (STANDARD/DELUXE/SUITE or ALL): ")? else {
            return Ok(Step::Exit);
        };
        let category = Category::parse_filter(&category)?;
        let Some((from, to)) = self.prompt_range()? else {
            return Ok(Step::Exit);
        };
        let available = engine::search(&self.session.hotel, category, from, to);
        ui::write_rooms(&mut self.out, available, "No rooms available.")?;
        Ok(Step::Continue)
    }

    fn book(&mut self) -> Result<Step> {
        let Some(guest) = self.prompt("Guest name: ")? else {
            return Ok(Step::Exit);
        };
        if guest.is_empty() {
            return Err(HotelError::ArgumentParsing("Guest name cannot be empty.".into()).into());
        }
        let Some(room) = self.prompt("Room id: ")? else {
            return Ok(Step::Exit);
        };
        let room_id = parse_room_id(&room)?;
        let Some((from, to)) = self.prompt_range()? else {
            return Ok(Step::Exit);
        };
        let Some(pay_now) = self.prompt("Pay now? (yes/no): ")? else {
            return Ok(Step::Exit);
        };
        let pay_now = pay_now.eq_ignore_ascii_case("yes") || pay_now.eq_ignore_ascii_case("y");

        let reservation = engine::book(&mut self.session.hotel, &guest, room_id, from, to, pay_now)?;
        self.dirty = true;
        writeln!(self.out, "Booked: {}", reservation)?;
        Ok(Step::Continue)
    }

    fn cancel(&mut self) -> Result<Step> {
        let Some(id) = self.prompt("Reservation id to cancel: ")? else {
            return Ok(Step::Exit);
        };
        if engine::cancel(&mut self.session.hotel, &id) {
            self.dirty = true;
            writeln!(self.out, "Cancelled.")?;
        } else {
            writeln!(self.out, "Cancel failed (id not found).")?;
        }
        Ok(Step::Continue)
    }

    fn view_reservations(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Guest name to search reservations: ")? else {
            return Ok(Step::Exit);
        };
        let found = engine::reservations_for_guest(&self.session.hotel, &name);
        ui::write_reservations(
            &mut self.out,
            found,
            &format!("No reservations found for {}", name),
        )?;
        Ok(Step::Continue)
    }

    fn pay(&mut self) -> Result<Step> {
        let Some(id) = self.prompt("Reservation id to pay: ")? else {
            return Ok(Step::Exit);
        };
        if engine::pay(&mut self.session.hotel, &id) {
            self.dirty = true;
            writeln!(self.out, "Payment successful (simulated).")?;
        } else {
            writeln!(self.out, "Payment failed (id not found).")?;
        }
        Ok(Step::Continue)
    }

    fn save(&mut self) -> Result<Step> {
        self.session.save()?;
        self.dirty = false;
        writeln!(self.out, "Saved to {}", self.session.data_file().display())?;
        Ok(Step::Continue)
    }

    fn load(&mut self) -> Result<Step> {
        self.session.reload()?;
        self.dirty = false;
        writeln!(self.out, "Loaded from {}", self.session.data_file().display())?;
        Ok(Step::Continue)
    }

    /// Reads a from/to pair. Check-out must come after check-in.
    fn prompt_range(&mut self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let Some(from) = self.prompt("From (yyyy-MM-dd): ")? else {
            return Ok(None);
        };
        let from = parse_date(&from)?;
        let Some(to) = self.prompt("To (yyyy-MM-dd): ")? else {
            return Ok(None);
        };
        let to = parse_date(&to)?;
        super::ensure_valid_range(from, to)?;
        Ok(Some((from, to)))
    }
}

fn parse_date(input: &str) -> std::result::Result<NaiveDate, HotelError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        HotelError::ArgumentParsing(format!("Invalid date '{}'. Expected YYYY-MM-DD.", input))
    })
}

fn parse_room_id(input: &str) -> std::result::Result<u32, HotelError> {
    input
        .parse()
        .map_err(|_| HotelError::ArgumentParsing(format!("Invalid room id '{}'.", input)))
}
