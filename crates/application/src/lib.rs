//! Stencil Application - Substitution engine
//!
//! Scans templates for `${variable}` references and replaces them with values
//! from a [`VariableSource`](stencil_domain::VariableSource).

pub mod substitution;

pub use substitution::{Substitutor, substitute};
