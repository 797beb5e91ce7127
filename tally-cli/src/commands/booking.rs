//! Booking store subcommands

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::*;
use serde_json::to_string_pretty;
use std::path::Path;
use tally_booking::{BookingService, JsonDirStorage};

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Register a new customer
    Create {
        #[arg(value_name = "ID")]
        customer_id: String,
        name: String,
        phone_number: String,
    },

    /// Print a customer
    Show {
        #[arg(value_name = "ID")]
        customer_id: String,
    },

    /// Change a customer's name or phone number
    Update {
        #[arg(value_name = "ID")]
        customer_id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        phone_number: Option<String>,
    },

    /// Remove a customer
    Delete {
        #[arg(value_name = "ID")]
        customer_id: String,
    },

    /// Print every customer
    List,
}

#[derive(Subcommand)]
pub enum HotelAction {
    /// Register a new hotel
    Create {
        name: String,
        num_rooms: u32,
        ubication: String,
    },

    /// Print a hotel
    Show { name: String },

    /// Change a hotel's room count or location
    Update {
        name: String,

        #[arg(long)]
        num_rooms: Option<u32>,

        #[arg(long)]
        ubication: Option<String>,
    },

    /// Remove a hotel
    Delete { name: String },

    /// Print every hotel
    List,
}

#[derive(Subcommand)]
pub enum ReservationAction {
    /// Book a room; prints the new reservation code
    Create {
        customer_id: String,
        hotel_name: String,
        room: String,
    },

    /// Print a reservation
    Show {
        #[arg(value_name = "CODE")]
        reservation_code: String,
    },

    /// Mark a reservation inactive
    Cancel {
        #[arg(value_name = "CODE")]
        reservation_code: String,
    },

    /// Remove a reservation
    Delete {
        #[arg(value_name = "CODE")]
        reservation_code: String,
    },

    /// Print every reservation
    List,
}

fn open(data_dir: &Path) -> Result<BookingService<JsonDirStorage>> {
    Ok(BookingService::open(JsonDirStorage::new(data_dir))?)
}

fn created(kind: &str, key: &str) {
    println!("{} {} '{}'", "Created".green().bold(), kind, key.cyan());
}

fn removed(kind: &str, key: &str, found: bool) -> Result<()> {
    if !found {
        bail!("{kind} '{key}' not found");
    }
    println!("{} {} '{}'", "Deleted".green().bold(), kind, key.cyan());
    Ok(())
}

pub fn customer_command(action: CustomerAction, data_dir: &Path) -> Result<()> {
    let mut booking = open(data_dir)?;

    match action {
        CustomerAction::Create {
            customer_id,
            name,
            phone_number,
        } => {
            booking.create_customer(&customer_id, &name, &phone_number)?;
            created("customer", &customer_id);
        }
        CustomerAction::Show { customer_id } => match booking.show_customer(&customer_id) {
            Some(customer) => println!("{}", to_string_pretty(customer)?),
            None => bail!("customer '{customer_id}' not found"),
        },
        CustomerAction::Update {
            customer_id,
            name,
            phone_number,
        } => {
            let customer =
                booking.update_customer(&customer_id, name.as_deref(), phone_number.as_deref())?;
            println!("{}", to_string_pretty(&customer)?);
        }
        CustomerAction::Delete { customer_id } => {
            let found = booking.delete_customer(&customer_id)?;
            removed("customer", &customer_id, found)?;
        }
        CustomerAction::List => println!("{}", to_string_pretty(booking.list_customers())?),
    }
    Ok(())
}

pub fn hotel_command(action: HotelAction, data_dir: &Path) -> Result<()> {
    let mut booking = open(data_dir)?;

    match action {
        HotelAction::Create {
            name,
            num_rooms,
            ubication,
        } => {
            booking.create_hotel(&name, num_rooms, &ubication)?;
            created("hotel", &name);
        }
        HotelAction::Show { name } => match booking.show_hotel(&name) {
            Some(hotel) => println!("{}", to_string_pretty(hotel)?),
            None => bail!("hotel '{name}' not found"),
        },
        HotelAction::Update {
            name,
            num_rooms,
            ubication,
        } => {
            let hotel = booking.update_hotel(&name, num_rooms, ubication.as_deref())?;
            println!("{}", to_string_pretty(&hotel)?);
        }
        HotelAction::Delete { name } => {
            let found = booking.delete_hotel(&name)?;
            removed("hotel", &name, found)?;
        }
        HotelAction::List => println!("{}", to_string_pretty(booking.list_hotels())?),
    }
    Ok(())
}

pub fn reservation_command(action: ReservationAction, data_dir: &Path) -> Result<()> {
    let mut booking = open(data_dir)?;

    match action {
        ReservationAction::Create {
            customer_id,
            hotel_name,
            room,
        } => {
            let reservation = booking.create_reservation(&customer_id, &hotel_name, &room)?;
            created("reservation", &reservation.reservation_code);
        }
        ReservationAction::Show { reservation_code } => {
            match booking.show_reservation(&reservation_code) {
                Some(reservation) => println!("{}", to_string_pretty(reservation)?),
                None => bail!("reservation '{reservation_code}' not found"),
            }
        }
        ReservationAction::Cancel { reservation_code } => {
            booking.cancel_reservation(&reservation_code)?;
            println!(
                "{} reservation '{}'",
                "Cancelled".yellow().bold(),
                reservation_code.cyan()
            );
        }
        ReservationAction::Delete { reservation_code } => {
            let found = booking.delete_reservation(&reservation_code)?;
            removed("reservation", &reservation_code, found)?;
        }
        ReservationAction::List => println!("{}", to_string_pretty(booking.list_reservations())?),
    }
    Ok(())
}
