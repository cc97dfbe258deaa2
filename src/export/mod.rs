// History export — paginated PDF document and server-generated CSV.
//
// Layout is a pure function over the record list (layout.rs); the genpdf
// backend (pdf.rs) only renders what the layout produced. The CSV path
// never builds rows locally — the History Store owns that format.

pub mod csv;
pub mod layout;
pub mod pdf;
