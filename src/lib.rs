/*!
slotroute
=====

The global inter-slot routing core of a dataflow-accelerator partitioning
compiler. Given a target device's slot grid and a list of point-to-point
data bridges between slots, the crate decides, for every bridge, which
chain of adjacent slots it traverses.

The pipeline, leaves-first:

* [`device`] / [`slot`] -- the device constant tables and the slot name
  grammar.
* [`graph`] -- builds the capacity-annotated routing graph once per
  invocation (one vertex per slot, one edge per legal inter-slot hop).
* [`path`] -- breadth-first candidate path enumeration between a source
  and a destination slot, under length and bend-count bounds.
* [`bridge`] -- resolves a caller's bridge specifications against the
  graph and drives the enumerator once per bridge.
* [`ilp`] -- builds and solves the path-selection linear program: one
  path per bridge, per-edge capacity, minimise total wire area.
* [`result`] -- maps each bridge name to its selected path's intermediate
  slots.
* [`route`] -- the single public entry point tying the above together.

# Usage

```no_run
use slotroute::bridge::BridgeSpec;
use slotroute::device::{DeviceId, DeviceTable};

let table = DeviceTable::for_device(DeviceId::U250);
let bridges = vec![BridgeSpec{
	name: "b0".to_string(),
	src_slot: "CR_X0Y0_To_CR_X1Y1".to_string(),
	dst_slot: "CR_X2Y0_To_CR_X3Y1".to_string(),
	width_bits: 32,
}];
let routed = slotroute::route::route(&table, &bridges).expect("routing should succeed");
for (name, intermediates) in &routed
{
	println!("{name}: {intermediates:?}");
}
```

Placement inside a slot, timing-driven optimisation, dynamic re-routing,
online updates, a GUI, and multi-chip routing are out of scope: this
crate only decides the sequence of slots a bridge hops through. Turning
that decision into place-and-route command files, per-slot wrapper RTL,
or JSON results is left to external collaborators.
*/

pub mod bridge;
pub mod device;
pub mod error;
pub mod graph;
pub mod ilp;
pub mod path;
pub mod result;
pub mod route;
pub mod slot;

pub use error::Error;

/// The crate version, as recorded in `Cargo.toml`.
pub fn get_version_number() -> &'static str
{
	match option_env!("CARGO_PKG_VERSION")
	{
		Some(version) => version,
		_ => "?",
	}
}
