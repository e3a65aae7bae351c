//! The ILP formulator and solver driver (spec.md §4.D/§4.E), collapsed
//! into one module since the variable table the formulator builds is
//! consumed directly by the driver in the same function scope -- the
//! pattern this codebase family's other `good_lp`-based ILP schedulers
//! follow.

use std::collections::BTreeMap;

use good_lp::{constraint, variable, Expression, ProblemVariables, Solution, SolverModel, Variable};
use good_lp::solvers::microlp::microlp;

use crate::error::Error;
use crate::graph::RoutingGraph;
use crate::path::RoutingPath;

/// Path variables are continuous in `[0, 1]`, not declared binary:
/// integrality is expected to emerge from the LP's structural properties
/// (unit-simplex one-path-per-bridge constraints, small integer widths,
/// strictly positive costs) and is checked post-hoc, not assumed. This is
/// a load-bearing design choice, not an approximation -- see spec.md §9.
const INTEGRALITY_TOLERANCE: f64 = 1e-4;

/// The selected path for every bridge, after the LP has been solved and
/// its solution verified integral.
#[derive(Clone, Debug)]
pub struct Selection
{
	pub paths: BTreeMap<String, RoutingPath>,
}

/// One path's LP variable, kept alongside the `(bridge, path-index)` it
/// came from so the solution can be mapped back to candidate paths.
struct PathVar
{
	bridge: String,
	path_index: usize,
	var: Variable,
}

/// Builds and solves the path-selection LP of spec.md §4.D, then applies
/// the integrality and one-path-per-bridge post-conditions of §4.E.
pub fn solve(catalogue: &BTreeMap<String, Vec<RoutingPath>>, graph: &RoutingGraph) -> Result<Selection, Error>
{
	let mut problem = ProblemVariables::new();
	let mut path_vars = Vec::new();
	// Cache each candidate's implied edge list once; both the capacity
	// constraints and the objective need it.
	let mut edge_lists: BTreeMap<(String, usize), Vec<crate::graph::EdgeId>> = BTreeMap::new();

	for (bridge, paths) in catalogue
	{
		for (index, path) in paths.iter().enumerate()
		{
			let var = problem.add(variable().min(0.0).max(1.0));
			path_vars.push(PathVar{ bridge: bridge.clone(), path_index: index, var });
			edge_lists.insert((bridge.clone(), index), path.edges(graph));
		}
	}

	let mut objective = Expression::from(0.0);
	for pv in &path_vars
	{
		let path = &catalogue[&pv.bridge][pv.path_index];
		let coefficient = path.length() as f64 * path.width_bits as f64;
		objective += coefficient * pv.var;
	}

	let mut model = problem.minimise(objective).using(microlp);

	// One-path-per-bridge.
	for (bridge, paths) in catalogue
	{
		let mut expr = Expression::from(0.0);
		for index in 0..paths.len()
		{
			let var = path_vars.iter().find(|pv| &pv.bridge == bridge && pv.path_index == index).expect("every (bridge, index) has a variable").var;
			expr += var;
		}
		model.add_constraint(constraint!(expr == 1.0));
	}

	// Edge capacity: sum of width * x over every candidate that uses the
	// edge, bounded by its capacity.
	for (edge_id, edge) in graph.edges_iter()
	{
		let mut expr = Expression::from(0.0);
		let mut any = false;
		for pv in &path_vars
		{
			let edges = &edge_lists[&(pv.bridge.clone(), pv.path_index)];
			if edges.contains(&edge_id)
			{
				let path = &catalogue[&pv.bridge][pv.path_index];
				expr += path.width_bits as f64 * pv.var;
				any = true;
			}
		}
		if any
		{
			model.add_constraint(constraint!(expr <= edge.capacity as f64));
		}
	}

	log::info!("solving routing LP: {} bridges, {} path variables", catalogue.len(), path_vars.len());
	let solution = model.solve().map_err(|err| Error::RoutingInfeasible{ diagnostic: err.to_string() })?;

	let mut selected = BTreeMap::new();
	for (bridge, paths) in catalogue
	{
		let mut chosen: Option<usize> = None;
		for index in 0..paths.len()
		{
			let var = path_vars.iter().find(|pv| &pv.bridge == bridge && pv.path_index == index).expect("every (bridge, index) has a variable").var;
			let value = solution.value(var);
			let rounded = value.round();
			if (value - rounded).abs() >= INTEGRALITY_TOLERANCE
			{
				return Err(Error::FractionalSolution{ bridge: bridge.clone(), value });
			}
			if rounded >= 0.5
			{
				assert!(chosen.is_none(), "bridge {bridge:?} had more than one path round to 1");
				chosen = Some(index);
			}
		}
		let index = chosen.expect("one-path-per-bridge constraint guarantees exactly one selection");
		selected.insert(bridge.clone(), paths[index].clone());
	}

	log::info!("routing LP solved: {} bridges routed", selected.len());
	Ok(Selection{ paths: selected })
}
