//! Command implementations

mod scan;

pub use scan::scan;
