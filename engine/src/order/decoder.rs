//! Order text decoder.
//!
//! Grammar, case-insensitive with single spaces between tokens:
//!
//! ```text
//! A|F SRC-DST                 move
//! A|F SRC H                   hold
//! A|F BY S A|F SRC-DST        support a move
//! A|F BY S A|F AT             support a hold
//! F BY C A SRC-DST            convoy
//! ```
//!
//! Decoding is purely syntactic: a well-formed order naming an unknown
//! territory decodes successfully and carries the invalid-territory
//! sentinel, so it simply matches no unit during application. Diplomacy
//! treats semantically bad orders as "hold by default", never as errors.

use thiserror::Error;

use crate::board::territory::Territory;
use crate::board::unit::UnitType;

use super::{Convoy, Hold, HoldSupport, Move, MoveSupport, Order};

/// A syntactically malformed order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid order: {0}")]
    Malformed(String),
    #[error("invalid unit type: {0}")]
    InvalidUnitType(String),
    #[error("only a fleet can convoy: {0}")]
    ConvoyByArmy(String),
}

/// Decodes one line of order text submitted by the given nation.
pub fn decode(nation: &str, text: &str) -> Result<Order, ParseError> {
    let lowered = text.to_ascii_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    match tokens.len() {
        2 => decode_move(nation, &tokens).map(Order::Move),
        3 => decode_hold(nation, &tokens),
        5 => match tokens[2] {
            "s" => decode_support(nation, &tokens),
            "c" => decode_convoy(nation, &tokens, text),
            _ => Err(ParseError::Malformed(text.to_string())),
        },
        _ => Err(ParseError::Malformed(text.to_string())),
    }
}

/// Decodes `A|F SRC-DST` from a two-token slice.
fn decode_move(nation: &str, tokens: &[&str]) -> Result<Move, ParseError> {
    let unit_type = unit_type(tokens[0])?;
    let (from, to) = split_route(tokens.join(" "), tokens[1])?;
    Ok(Move {
        nation: nation.to_string(),
        unit_type,
        from,
        to,
    })
}

fn decode_hold(nation: &str, tokens: &[&str]) -> Result<Order, ParseError> {
    let unit_type = unit_type(tokens[0])?;
    if tokens[2] != "h" {
        return Err(ParseError::Malformed(tokens.join(" ")));
    }
    Ok(Order::Hold(Hold {
        nation: nation.to_string(),
        unit_type,
        at: Territory::from_abbr(tokens[1]),
    }))
}

fn decode_support(nation: &str, tokens: &[&str]) -> Result<Order, ParseError> {
    let unit_type = unit_type(tokens[0])?;
    let by = Territory::from_abbr(tokens[1]);
    if tokens[4].contains('-') {
        let supported = decode_move(nation, &tokens[3..])?;
        return Ok(Order::SupportMove(MoveSupport {
            nation: nation.to_string(),
            unit_type,
            by,
            from: supported.from,
            to: supported.to,
        }));
    }
    self::unit_type(tokens[3])?;
    Ok(Order::SupportHold(HoldSupport {
        nation: nation.to_string(),
        unit_type,
        by,
        at: Territory::from_abbr(tokens[4]),
    }))
}

fn decode_convoy(nation: &str, tokens: &[&str], original: &str) -> Result<Order, ParseError> {
    if unit_type(tokens[0])? != UnitType::Fleet {
        return Err(ParseError::ConvoyByArmy(original.to_string()));
    }
    if !tokens[4].contains('-') {
        return Err(ParseError::Malformed(original.to_string()));
    }
    let convoyed = decode_move(nation, &tokens[3..])?;
    Ok(Order::Convoy(Convoy {
        nation: nation.to_string(),
        by: Territory::from_abbr(tokens[1]),
        from: convoyed.from,
        to: convoyed.to,
    }))
}

fn split_route(order: String, token: &str) -> Result<(Territory, Territory), ParseError> {
    let mut parts = token.splitn(2, '-');
    let (from, to) = match (parts.next(), parts.next()) {
        (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
        _ => return Err(ParseError::Malformed(order)),
    };
    Ok((Territory::from_abbr(from), Territory::from_abbr(to)))
}

fn unit_type(token: &str) -> Result<UnitType, ParseError> {
    if token.len() != 1 {
        return Err(ParseError::InvalidUnitType(token.to_string()));
    }
    UnitType::from_letter(token.chars().next().unwrap())
        .ok_or_else(|| ParseError::InvalidUnitType(token.to_string()))
}
