//! The result emitter (spec.md §4.F): maps each bridge name to the
//! ordered list of intermediate slots its selected path traverses.

use std::collections::BTreeMap;

use crate::graph::RoutingGraph;
use crate::ilp::Selection;

/// For every bridge, the ordered intermediate slot names of its selected
/// path -- source and destination excluded. Uses a `BTreeMap` so that
/// serialization and iteration order are deterministic run-to-run
/// (testable property 8, spec.md §8).
pub fn emit(selection: &Selection, graph: &RoutingGraph) -> BTreeMap<String, Vec<String>>
{
	selection.paths.iter()
		.map(|(bridge, path)|
		{
			// A same-slot bridge (src_slot == dst_slot) enumerates to the
			// one-vertex path `[src]`; there is nothing to slice between
			// source and destination, so the intermediate list is empty
			// rather than a panic, matching the original source's
			// forgiving `[1:-1]` slice on a single-element list.
			let intermediates: &[crate::graph::VertexId] = if path.vertices.len() <= 2
			{
				&[]
			}
			else
			{
				&path.vertices[1..path.vertices.len() - 1]
			};
			let names: Vec<String> = intermediates.iter()
				.map(|&v| graph.vertex(v).slot.name())
				.collect();
			(bridge.clone(), names)
		})
		.collect()
}
