pub mod resolve;
pub mod table;

pub use resolve::{resolve, resolve_int, resolve_string};
pub use table::{CellValue, DELIMITER_CANDIDATES, RawTable, Row, parse_table};
