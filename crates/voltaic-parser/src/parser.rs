//! Line-oriented netlist parsing.
//!
//! The dialect is a `.circuit` / `.end` block of element lines, one element
//! per line, `#` starting a comment anywhere:
//!
//! ```text
//! .circuit
//! R1 n1 n2 2        # resistor: name, two nodes, ohms
//! V1 n1 GND dc 10   # voltage source: name, two nodes, dc, volts
//! I1 n2 GND dc 1    # current source: name, two nodes, dc, amperes
//! .end
//! ```
//!
//! Text outside the block is ignored. Values accept engineering suffixes
//! (`1k`, `10MEG`, `100n`). The element kind is the leading letter of the
//! name, case-insensitive; only R, V, and I exist in this dialect.

use voltaic_core::units::parse_value;
use voltaic_core::{Element, Net};

use crate::error::{Error, Result};

/// Parse netlist text into an element list, in source order.
pub fn parse(source: &str) -> Result<Vec<Element>> {
    let mut elements = Vec::new();
    let mut in_block = false;
    let mut terminated = false;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        if text.eq_ignore_ascii_case(".circuit") {
            in_block = true;
        } else if text.eq_ignore_ascii_case(".end") {
            if !in_block {
                return Err(Error::NeverStarted);
            }
            terminated = true;
            break;
        } else if in_block {
            elements.push(parse_element_line(line, text)?);
        }
    }

    if !terminated {
        return Err(Error::Unterminated);
    }

    Ok(elements)
}

fn parse_element_line(line: usize, text: &str) -> Result<Element> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let name = tokens[0];
    let kind = name
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or(' ');

    match kind {
        'R' => {
            let [a, b, value] = expect_fields::<3>(line, name, &tokens[1..])?;
            Ok(Element::resistor(
                name,
                Net::parse(a),
                Net::parse(b),
                numeric(line, value)?,
            ))
        }
        'V' => {
            let [a, b, source_type, value] = expect_fields::<4>(line, name, &tokens[1..])?;
            check_dc(line, source_type)?;
            Ok(Element::voltage_source(
                name,
                Net::parse(a),
                Net::parse(b),
                numeric(line, value)?,
            ))
        }
        'I' => {
            let [a, b, source_type, value] = expect_fields::<4>(line, name, &tokens[1..])?;
            check_dc(line, source_type)?;
            Ok(Element::current_source(
                name,
                Net::parse(a),
                Net::parse(b),
                numeric(line, value)?,
            ))
        }
        _ => Err(Error::UnknownElement {
            line,
            name: name.to_string(),
        }),
    }
}

/// Require exactly `N` fields after the element name.
fn expect_fields<'a, const N: usize>(
    line: usize,
    name: &str,
    fields: &[&'a str],
) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(fields).map_err(|_| Error::Syntax {
        line,
        message: format!(
            "{} takes {} fields after the name, found {}",
            name,
            N,
            fields.len()
        ),
    })
}

fn check_dc(line: usize, source_type: &str) -> Result<()> {
    if source_type.eq_ignore_ascii_case("dc") {
        Ok(())
    } else {
        Err(Error::UnsupportedSourceType {
            line,
            source_type: source_type.to_string(),
        })
    }
}

fn numeric(line: usize, token: &str) -> Result<f64> {
    parse_value(token).ok_or_else(|| Error::InvalidValue {
        line,
        value: token.to_string(),
    })
}
