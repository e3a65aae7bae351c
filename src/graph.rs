//! The static, capacity-annotated routing graph (spec.md §4.A): one vertex
//! per slot, one edge per legal inter-slot boundary hop.
//!
//! Vertices and edges are kept in owning arenas on [`RoutingGraph`] and
//! referred to everywhere else by stable [`VertexId`]/[`EdgeId`] indices,
//! per the design note in spec.md §9 on breaking the cyclic vertex-edge
//! reference structure of the original source. This mirrors the teacher
//! topology's own convention of addressing routers by plain `usize` index.

use std::collections::BTreeMap;

use crate::device::DeviceTable;
use crate::slot::Slot;

/// Index of a [`RoutingVertex`] within a [`RoutingGraph`]'s vertex arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// Index of a [`RoutingEdge`] within a [`RoutingGraph`]'s edge arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// The capacity class a [`RoutingEdge`] was built from. Every horizontal
/// boundary belongs to exactly one of `SlrCrossing`/`NonSlrCrossing` (the
/// Open Question in spec.md §9(i) is resolved against the overlapping-loop
/// duplication in the original source: no boundary is built twice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass
{
	VerticalBoundary,
	SlrCrossingHorizontal,
	NonSlrCrossingHorizontal,
}

/// A slot lifted into the routing graph.
#[derive(Clone, Debug)]
pub struct RoutingVertex
{
	pub slot: Slot,
	pub edges: Vec<EdgeId>,
	pub neighbours: Vec<VertexId>,
}

/// An undirected link between two [`RoutingVertex`]es.
#[derive(Clone, Debug)]
pub struct RoutingEdge
{
	pub endpoints: (VertexId, VertexId),
	pub capacity: u32,
	pub class: EdgeClass,
}

impl RoutingEdge
{
	/// Returns the other endpoint of this edge, given one of its vertices.
	pub fn other(&self, v: VertexId) -> VertexId
	{
		if self.endpoints.0 == v { self.endpoints.1 } else { self.endpoints.0 }
	}
}

/// The immutable routing graph built once per invocation (spec.md §3/§5).
#[derive(Clone, Debug)]
pub struct RoutingGraph
{
	vertices: Vec<RoutingVertex>,
	edges: Vec<RoutingEdge>,
	slot_to_vertex: BTreeMap<Slot, VertexId>,
}

impl RoutingGraph
{
	pub fn vertex(&self, id: VertexId) -> &RoutingVertex
	{
		&self.vertices[id.0]
	}

	pub fn edge(&self, id: EdgeId) -> &RoutingEdge
	{
		&self.edges[id.0]
	}

	pub fn num_vertices(&self) -> usize
	{
		self.vertices.len()
	}

	pub fn edges_iter(&self) -> impl Iterator<Item = (EdgeId, &RoutingEdge)>
	{
		self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
	}

	/// Looks up the vertex hosting a given slot, if any.
	pub fn vertex_for_slot(&self, slot: Slot) -> Option<VertexId>
	{
		self.slot_to_vertex.get(&slot).copied()
	}

	/// Looks up the vertex hosting the slot named `name`, accepting the
	/// canonical `CR_X{x}Y{y}_To_CR_X{x+1}Y{y+1}` form.
	pub fn vertex_for_slot_name(&self, name: &str) -> Option<VertexId>
	{
		Slot::parse(name).and_then(|slot| self.vertex_for_slot(slot))
	}

	/// The unique edge joining two neighbouring vertices, if they are in
	/// fact neighbours. Every adjacent pair of vertices along a
	/// [`crate::path::RoutingPath`] resolves to exactly one such edge
	/// (spec.md §3 invariants).
	pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<EdgeId>
	{
		self.vertex(a).edges.iter().copied().find(|&eid| self.edge(eid).other(a) == b)
	}

	fn add_vertex(&mut self, slot: Slot) -> VertexId
	{
		let id = VertexId(self.vertices.len());
		self.vertices.push(RoutingVertex{ slot, edges: Vec::new(), neighbours: Vec::new() });
		self.slot_to_vertex.insert(slot, id);
		id
	}

	fn add_edge(&mut self, a: VertexId, b: VertexId, capacity: u32, class: EdgeClass)
	{
		let id = EdgeId(self.edges.len());
		self.edges.push(RoutingEdge{ endpoints: (a, b), capacity, class });
		self.vertices[a.0].edges.push(id);
		self.vertices[b.0].edges.push(id);
		self.vertices[a.0].neighbours.push(b);
		self.vertices[b.0].neighbours.push(a);
	}
}

/// Builds the routing graph for a device: one vertex per slot on the grid,
/// plus the three classes of boundary edges from spec.md §4.A.
pub fn build(table: &DeviceTable) -> RoutingGraph
{
	let mut graph = RoutingGraph{ vertices: Vec::new(), edges: Vec::new(), slot_to_vertex: BTreeMap::new() };

	for &x in &table.xs
	{
		for &y in &table.ys
		{
			graph.add_vertex(Slot::new(x, y));
		}
	}
	log::debug!("built {} routing vertices for device {:?}", graph.num_vertices(), table.device);

	// Vertical boundaries: horizontally adjacent slots at the same y.
	for &y in &table.ys
	{
		for window in table.xs.windows(2)
		{
			let (left_x, right_x) = (window[0], window[1]);
			let left = graph.vertex_for_slot(Slot::new(left_x, y)).expect("left slot must exist");
			let right = graph.vertex_for_slot(Slot::new(right_x, y)).expect("right slot must exist");
			graph.add_edge(left, right, table.vertical_boundary_capacity, EdgeClass::VerticalBoundary);
		}
	}

	// Horizontal boundaries: vertically adjacent slots at the same x.
	// Each boundary is classified exactly once, as either an SLR crossing
	// or not -- see the Open Question resolution in spec.md §9(i).
	for &x in &table.xs
	{
		for window in table.ys.windows(2)
		{
			let (lower_y, upper_y) = (window[0], window[1]);
			let lower = graph.vertex_for_slot(Slot::new(x, lower_y)).expect("lower slot must exist");
			let upper = graph.vertex_for_slot(Slot::new(x, upper_y)).expect("upper slot must exist");
			let (capacity, class) = if table.is_slr_seam(lower_y)
			{
				(table.slr_crossing_boundary_capacity, EdgeClass::SlrCrossingHorizontal)
			}
			else
			{
				(table.non_slr_crossing_horizontal_boundary_capacity, EdgeClass::NonSlrCrossingHorizontal)
			};
			graph.add_edge(lower, upper, capacity, class);
		}
	}
	log::debug!("built {} routing edges for device {:?}", graph.edges.len(), table.device);

	graph
}
