//! Game implementations built on the core types and `RulesEngine`.

pub mod pentago;
