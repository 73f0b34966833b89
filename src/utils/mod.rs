pub mod ancestor;
pub mod cousins;
pub mod depth;
pub mod path_sum;
pub mod search;
