//! Device descriptors: the grid extent and the three boundary-capacity
//! constants a target device contributes to the [`crate::graph`] builder.
//!
//! Per the design note in spec.md §9, there is no process-wide singleton
//! device: callers build a [`DeviceTable`] for the [`DeviceId`] they target
//! and thread it explicitly through graph construction.

/// Identifies a target device. Only the reference U250-class device is
/// built in, but the table is keyed by this identifier so other devices can
/// be added without touching the graph builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceId
{
	U250,
}

/// The named constants a device contributes to routing: its slot grid
/// extent, the SLR-seam schedule, and the three boundary capacities from
/// spec.md §6.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceTable
{
	pub device: DeviceId,
	/// x-coordinates of slot lower-left corners, e.g. `[0,2,4,6]`.
	pub xs: Vec<u32>,
	/// y-coordinates of slot lower-left corners, e.g. `[0,2,4,...,14]`.
	pub ys: Vec<u32>,
	/// Capacity in bits of a vertical-boundary edge (horizontal neighbours).
	pub vertical_boundary_capacity: u32,
	/// Capacity in bits of a horizontal-boundary edge that crosses an SLR seam.
	pub slr_crossing_boundary_capacity: u32,
	/// Capacity in bits of a horizontal-boundary edge that does not cross an SLR seam.
	pub non_slr_crossing_horizontal_boundary_capacity: u32,
	/// Maximum number of bends (spec.md §4.B) allowed on an enumerated path.
	pub bend_count_limit: usize,
	/// The `y` values such that the seam between the slot row at `y` and the
	/// slot row at `y+2` is an SLR crossing.
	pub slr_seams: Vec<u32>,
}

impl DeviceTable
{
	/// Builds the constants table for a given device.
	pub fn for_device(device: DeviceId) -> DeviceTable
	{
		match device
		{
			DeviceId::U250 => DeviceTable{
				device,
				xs: vec![0, 2, 4, 6],
				ys: (0..16).step_by(2).collect(),
				vertical_boundary_capacity: 5280,
				slr_crossing_boundary_capacity: 5760,
				non_slr_crossing_horizontal_boundary_capacity: 9440,
				bend_count_limit: 2,
				slr_seams: vec![2, 6, 10],
			},
		}
	}

	/// Whether the horizontal boundary between the row at `lower_y` and the
	/// row at `lower_y + 2` is an SLR crossing.
	pub fn is_slr_seam(&self, lower_y: u32) -> bool
	{
		self.slr_seams.contains(&lower_y)
	}
}
