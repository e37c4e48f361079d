//! Application services built on the ports.
//!
//! Services take their collaborators as trait objects and never reach for
//! concrete infrastructure.

mod doctor;
mod resolver;

pub use doctor::{DoctorReport, diagnose};
pub use resolver::{
    AbiChoice, AbiSource, ResolutionPlan, ResolveError, ResolveOptions, Resolver,
    collect_fingerprint,
};
