//! A [`Slot`] is a rectangular region of the chip, identified by a
//! canonical name encoding its lower-left and upper-right coordinates on the
//! coordinate grid: `CR_X{x}Y{y}_To_CR_X{x+1}Y{y+1}`.
//!
//! The name is the sole interchange token for a slot across the component
//! boundary (spec.md §6), so parsing and formatting live together here.

use std::fmt;

/// A rectangular chip region, identified by the lower-left coordinate of its
/// 1x1 footprint on the half-coordinate grid (the grid step is 2, see
/// spec.md §4.A).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot
{
	pub x: u32,
	pub y: u32,
}

impl Slot
{
	pub fn new(x: u32, y: u32) -> Slot
	{
		Slot{ x, y }
	}

	/// Parses a canonical slot name of the form
	/// `CR_X{x}Y{y}_To_CR_X{x+1}Y{y+1}`, returning `None` if the string does
	/// not match that structure or the two halves are inconsistent.
	pub fn parse(name: &str) -> Option<Slot>
	{
		let mut halves = name.splitn(2, "_To_");
		let lower = halves.next()?;
		let upper = halves.next()?;
		let (lx, ly) = parse_corner(lower)?;
		let (ux, uy) = parse_corner(upper)?;
		if ux != lx + 1 || uy != ly + 1
		{
			return None;
		}
		Some(Slot::new(lx, ly))
	}

	/// The canonical name of this slot, as used across the component
	/// boundary in bridge specifications and results.
	pub fn name(&self) -> String
	{
		format!("{}", self)
	}
}

impl fmt::Display for Slot
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "CR_X{}Y{}_To_CR_X{}Y{}", self.x, self.y, self.x + 1, self.y + 1)
	}
}

/// Parses one `CR_X{x}Y{y}` corner, returning `(x, y)`.
fn parse_corner(s: &str) -> Option<(u32, u32)>
{
	let s = s.strip_prefix("CR_X")?;
	let (x_str, rest) = s.split_once('Y')?;
	let x: u32 = x_str.parse().ok()?;
	let y: u32 = rest.parse().ok()?;
	Some((x, y))
}
