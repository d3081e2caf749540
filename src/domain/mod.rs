// Domain layer: vacancy model, salary rules, filters and ports. No I/O here.

pub mod filter;
pub mod model;
pub mod ports;
pub mod salary;
