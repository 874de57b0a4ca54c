//! Interactive address prompts

use std::io::{self, BufRead, Write};

use domain::Address;

/// Ask for an address until a non-blank line is entered
///
/// Returns `None` when input ends before an address was given.
pub fn prompt_address<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<Address>> {
    loop {
        write!(out, "Enter {label} address: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(None);
        }

        match Address::new(line) {
            Ok(address) => return Ok(Some(address)),
            Err(e) => writeln!(out, "{e}, please try again.")?,
        }
    }
}

/// Use the address from the command line if given, otherwise prompt for it
pub fn resolve_address_input<R: BufRead, W: Write>(
    preset: Option<String>,
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<Address>> {
    if let Some(text) = preset {
        if let Ok(address) = Address::new(text) {
            return Ok(Some(address));
        }
        writeln!(out, "The {label} address given on the command line is empty.")?;
    }
    prompt_address(input, out, label)
}
