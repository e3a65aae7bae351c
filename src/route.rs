//! Top-level orchestration (spec.md §5 / SPEC_FULL.md §5): the sole
//! public entry point. Owns the routing graph, the per-bridge candidate
//! sets, and the LP variable table for the duration of one invocation and
//! drops them all before returning the result map.

use std::collections::{BTreeMap, HashMap};

use crate::bridge::{self, BridgeSpec};
use crate::device::DeviceTable;
use crate::error::Error;
use crate::graph::{self, RoutingGraph};
use crate::ilp;
use crate::path::RoutingPath;
use crate::result;

/// Routes every bridge against a device's grid, returning the mapping
/// from bridge name to its ordered intermediate-slot list.
///
/// Runs the [`CapacityExceededByInputs`](Error::CapacityExceededByInputs)
/// pre-check before building the LP (spec.md §7): it is cheap relative to
/// enumeration and solving, so it always runs, unlike the optional
/// framing in spec.md.
pub fn route(table: &DeviceTable, bridges: &[BridgeSpec]) -> Result<BTreeMap<String, Vec<String>>, Error>
{
	let graph = graph::build(table);
	let catalogue = bridge::catalogue(&graph, bridges, table.bend_count_limit)?;
	check_capacity(&catalogue, &graph)?;
	let selection = ilp::solve(&catalogue, &graph)?;
	Ok(result::emit(&selection, &graph))
}

/// Same as [`route`], but additionally takes a `logical_vertex -> slot`
/// mapping (spec.md §6, input 3) and projects every bridge's endpoints
/// through it before resolution.
pub fn route_with_logical_vertices(table: &DeviceTable, bridges: &[BridgeSpec], logical_vertex_to_slot: &BTreeMap<String, String>) -> Result<BTreeMap<String, Vec<String>>, Error>
{
	let projected: Vec<BridgeSpec> = bridges.iter()
		.map(|spec| bridge::resolve_logical_vertices(spec, logical_vertex_to_slot))
		.collect();
	route(table, &projected)
}

/// Pre-check: for every routing edge, the minimum width that must cross
/// it -- summed over bridges every one of whose candidate paths uses that
/// edge, so no routing decision can avoid it -- must not already exceed
/// its capacity (spec.md §7).
fn check_capacity(catalogue: &BTreeMap<String, Vec<RoutingPath>>, graph: &RoutingGraph) -> Result<(), Error>
{
	let mut required: HashMap<crate::graph::EdgeId, u32> = HashMap::new();
	for paths in catalogue.values()
	{
		let width = paths[0].width_bits;
		let mut common: Option<std::collections::BTreeSet<crate::graph::EdgeId>> = None;
		for path in paths
		{
			let edges: std::collections::BTreeSet<_> = path.edges(graph).into_iter().collect();
			common = Some(match common
			{
				None => edges,
				Some(acc) => acc.intersection(&edges).copied().collect(),
			});
		}
		for edge_id in common.unwrap_or_default()
		{
			*required.entry(edge_id).or_insert(0) += width;
		}
	}

	for (edge_id, required_width) in required
	{
		let capacity = graph.edge(edge_id).capacity;
		if required_width > capacity
		{
			return Err(Error::CapacityExceededByInputs{
				edge: format!("{:?}", edge_id),
				capacity,
				required: required_width,
			});
		}
	}
	Ok(())
}
