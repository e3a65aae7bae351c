//! Module containing all error types returned by the routing core.

use thiserror::Error;

/// Every fatal condition the routing core can report. The core is
/// functionally pure from the caller's point of view: on any of these,
/// no partial result is emitted and nothing is retried internally.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error
{
	/// A bridge referenced a slot name not present in the grid.
	#[error("unknown slot {slot:?} referenced by bridge {bridge:?}")]
	UnknownSlot
	{
		bridge: String,
		slot: String,
	},

	/// Enumeration produced an empty candidate set for some bridge.
	#[error("no candidate path found for bridge {bridge:?}")]
	NoCandidatePath
	{
		bridge: String,
	},

	/// The solver reported a non-optimal status (infeasible, unbounded, or
	/// a solver-internal error).
	#[error("routing LP was not solved to optimality: {diagnostic}")]
	RoutingInfeasible
	{
		diagnostic: String,
	},

	/// The LP optimum contains a path variable outside the integrality
	/// tolerance. This signals that the continuous-relaxation design
	/// choice (spec.md §9) failed for this instance.
	#[error("fractional solution for bridge {bridge:?}: path variable value {value}")]
	FractionalSolution
	{
		bridge: String,
		value: f64,
	},

	/// The sum of minimum widths crossing some edge already exceeds its
	/// capacity, before any routing is attempted.
	#[error("edge {edge:?} capacity {capacity} already exceeded by inputs (minimum required {required})")]
	CapacityExceededByInputs
	{
		edge: String,
		capacity: u32,
		required: u32,
	},
}
