//! Breadth-first candidate path enumeration between a source and a
//! destination slot (spec.md §4.B).

use std::collections::VecDeque;

use crate::graph::{EdgeId, RoutingGraph, VertexId};

/// An ordered sequence of [`crate::graph::RoutingVertex`]es from a bridge's
/// source to its destination.
///
/// Path identity is `bridge_name || "_" || joined vertex names` (spec.md
/// §3): two candidates of distinct bridges that traverse the same vertices
/// are distinct paths, so identity carries the owning bridge's name rather
/// than relying on the vertex sequence alone.
#[derive(Clone, Debug)]
pub struct RoutingPath
{
	pub bridge_name: String,
	pub vertices: Vec<VertexId>,
	pub width_bits: u32,
	pub bend_count: usize,
}

impl RoutingPath
{
	/// Number of vertices in the path, source and destination included.
	pub fn length(&self) -> usize
	{
		self.vertices.len()
	}

	pub fn source(&self) -> VertexId
	{
		self.vertices[0]
	}

	pub fn destination(&self) -> VertexId
	{
		*self.vertices.last().expect("a path always has at least one vertex")
	}

	/// The edges implied by consecutive vertex pairs. Every adjacent pair
	/// resolves to exactly one shared [`crate::graph::RoutingEdge`]
	/// (spec.md §3 invariants).
	pub fn edges(&self, graph: &RoutingGraph) -> Vec<EdgeId>
	{
		self.vertices.windows(2)
			.map(|pair| graph.edge_between(pair[0], pair[1]).expect("consecutive path vertices must be neighbours"))
			.collect()
	}

	/// `bridge_name || "_" || joined vertex slot names`, the path identity
	/// from spec.md §3.
	pub fn identity(&self, graph: &RoutingGraph) -> String
	{
		let names: Vec<String> = self.vertices.iter().map(|&v| graph.vertex(v).slot.name()).collect();
		format!("{}_{}", self.bridge_name, names.join("_"))
	}
}

/// A partial path under construction by the enumeration queue.
struct PartialPath
{
	vertices: Vec<VertexId>,
	bend_count: usize,
}

/// Whether three consecutive vertices (`prev`, `curr`, `next`) form a bend:
/// neither collinear vertically (same x) nor horizontally (same y).
///
/// A one-vertex prefix passes `prev == curr` here, which always satisfies
/// one of the collinearity checks for the first real hop -- so the first
/// hop never contributes a bend, matching spec.md §4.B rule 3.
fn is_bend(graph: &RoutingGraph, prev: VertexId, curr: VertexId, next: VertexId) -> bool
{
	let prev_slot = graph.vertex(prev).slot;
	let curr_slot = graph.vertex(curr).slot;
	let next_slot = graph.vertex(next).slot;
	if prev_slot.x == curr_slot.x && next_slot.x == curr_slot.x
	{
		false
	}
	else if prev_slot.y == curr_slot.y && next_slot.y == curr_slot.y
	{
		false
	}
	else
	{
		true
	}
}

/// Hamming distance between two slots, using half-coordinates (the grid
/// step is 2).
fn hamming_distance(graph: &RoutingGraph, a: VertexId, b: VertexId) -> usize
{
	let a = graph.vertex(a).slot;
	let b = graph.vertex(b).slot;
	let dx = (a.x as i64 - b.x as i64).unsigned_abs() as usize / 2;
	let dy = (a.y as i64 - b.y as i64).unsigned_abs() as usize / 2;
	dx + dy
}

/// Enumerates every candidate path from `src` to `dst` for a bridge named
/// `bridge_name` of width `width_bits`, subject to the length and
/// bend-count bounds of spec.md §4.B.
///
/// `length_limit` is computed once from the Hamming distance at the
/// initial (one-vertex) path and held constant for the whole call -- it is
/// not recomputed per child, per the design note in spec.md §9(ii).
pub fn find_all_paths(graph: &RoutingGraph, src: VertexId, dst: VertexId, width_bits: u32, bridge_name: &str, bend_max: usize) -> Vec<RoutingPath>
{
	let length_limit = hamming_distance(graph, src, dst) + 4;

	let mut queue = VecDeque::new();
	queue.push_back(PartialPath{ vertices: vec![src], bend_count: 0 });

	let mut results = Vec::new();
	while let Some(partial) = queue.pop_front()
	{
		let tail = *partial.vertices.last().unwrap();
		if tail == dst
		{
			results.push(RoutingPath{
				bridge_name: bridge_name.to_string(),
				vertices: partial.vertices,
				width_bits,
				bend_count: partial.bend_count,
			});
			continue;
		}
		if partial.vertices.len() >= length_limit
		{
			continue;
		}

		let prev = if partial.vertices.len() == 1 { tail } else { partial.vertices[partial.vertices.len() - 2] };
		for &next in &graph.vertex(tail).neighbours
		{
			if next == prev
			{
				continue;
			}
			let bend_count = partial.bend_count + usize::from(is_bend(graph, prev, tail, next));
			if bend_count > bend_max
			{
				continue;
			}
			let mut vertices = partial.vertices.clone();
			vertices.push(next);
			queue.push_back(PartialPath{ vertices, bend_count });
		}
	}

	debug_assert_eq!(
		{
			let mut identities: Vec<String> = results.iter().map(|p| p.identity(graph)).collect();
			identities.sort();
			identities.dedup();
			identities.len()
		},
		results.len(),
		"path enumeration produced duplicate candidates for bridge {bridge_name}"
	);

	results
}
