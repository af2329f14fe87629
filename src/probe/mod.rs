//! Probe domain: collision layers, ray probes and the shared combat sensing.

pub mod combat;
mod layers;
mod spatial;

#[cfg(test)]
pub(crate) mod testing;

pub use combat::{PROBE_EPSILON, Probe, ProbeHit, ProbeRay};
pub use layers::{GameLayer, mask_includes, terrain_mask};
pub use spatial::{ActorProbe, HealthOwners, ProbeWorld};
