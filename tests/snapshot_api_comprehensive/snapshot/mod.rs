//! DocumentSnapshot tests

mod basic_ops;
mod edge_cases;
mod path_ops;
