//! JSON output for programmatic use.
//!
//! Records serialize with the same camelCase fields used by catalog files.

use crate::domain::Restaurant;
use std::io::{self, Write};

fn to_io(e: serde_json::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

pub(super) fn print_restaurant_json<W: Write>(
    w: &mut W,
    restaurant: &Restaurant,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, restaurant).map_err(to_io)?;
    writeln!(w)
}

pub(super) fn print_restaurants_json<W: Write>(
    w: &mut W,
    restaurants: &[&Restaurant],
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, restaurants).map_err(to_io)?;
    writeln!(w)
}
