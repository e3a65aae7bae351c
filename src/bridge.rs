//! The bridge catalogue (spec.md §4.C): resolves logical bridge
//! specifications against the routing graph and drives the enumerator
//! once per bridge.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::graph::RoutingGraph;
use crate::path::{self, RoutingPath};

/// A logical data connection to be routed, as supplied by a caller
/// (spec.md §6). This is the serializable interchange form; slot names are
/// validated and resolved into graph vertices by [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeSpec
{
	pub name: String,
	pub src_slot: String,
	pub dst_slot: String,
	pub width_bits: u32,
}

/// A bridge with its endpoints already resolved to [`crate::graph::VertexId`]s.
#[derive(Clone, Copy, Debug)]
pub struct Bridge
{
	pub src: crate::graph::VertexId,
	pub dst: crate::graph::VertexId,
	pub width_bits: u32,
}

/// Projects a `logical_vertex -> slot name` mapping onto a [`BridgeSpec`]
/// whose `src_slot`/`dst_slot` are logical vertex names, returning a new
/// `BridgeSpec` with slot names a caller's device grid actually hosts.
///
/// Used when the caller supplies logical graph entities rather than slot
/// names directly (spec.md §6, input 3). Entries absent from the mapping
/// are passed through unchanged, on the assumption they are already slot
/// names.
pub fn resolve_logical_vertices(spec: &BridgeSpec, logical_vertex_to_slot: &BTreeMap<String, String>) -> BridgeSpec
{
	BridgeSpec{
		name: spec.name.clone(),
		src_slot: logical_vertex_to_slot.get(&spec.src_slot).cloned().unwrap_or_else(|| spec.src_slot.clone()),
		dst_slot: logical_vertex_to_slot.get(&spec.dst_slot).cloned().unwrap_or_else(|| spec.dst_slot.clone()),
		width_bits: spec.width_bits,
	}
}

/// Resolves a [`BridgeSpec`]'s slot names against the routing graph,
/// failing with [`Error::UnknownSlot`] if either endpoint is not a slot on
/// the grid.
pub fn resolve(graph: &RoutingGraph, spec: &BridgeSpec) -> Result<Bridge, Error>
{
	let src = graph.vertex_for_slot_name(&spec.src_slot).ok_or_else(|| Error::UnknownSlot{
		bridge: spec.name.clone(),
		slot: spec.src_slot.clone(),
	})?;
	let dst = graph.vertex_for_slot_name(&spec.dst_slot).ok_or_else(|| Error::UnknownSlot{
		bridge: spec.name.clone(),
		slot: spec.dst_slot.clone(),
	})?;
	Ok(Bridge{ src, dst, width_bits: spec.width_bits })
}

/// Resolves every bridge and enumerates its candidate paths, in order.
/// Bridges are processed independently (spec.md §4.C); ordering of the
/// input list does not affect the result, only the iteration order of the
/// returned map, which is a deterministic `BTreeMap` keyed by bridge name.
pub fn catalogue(graph: &RoutingGraph, specs: &[BridgeSpec], bend_max: usize) -> Result<BTreeMap<String, Vec<RoutingPath>>, Error>
{
	let mut result = BTreeMap::new();
	for spec in specs
	{
		let bridge = resolve(graph, spec)?;
		let paths = path::find_all_paths(graph, bridge.src, bridge.dst, bridge.width_bits, &spec.name, bend_max);
		log::debug!("bridge {:?}: {} candidate path(s)", spec.name, paths.len());
		if paths.is_empty()
		{
			return Err(Error::NoCandidatePath{ bridge: spec.name.clone() });
		}
		result.insert(spec.name.clone(), paths);
	}
	Ok(result)
}
