/// External (serializable) representations of the solutions.
pub mod ext_repr;

/// All logic for converting an input line into items
pub mod import;

/// All logic for exporting solutions into external representations
pub mod export;

/// Textual report of a packing
pub mod report;
