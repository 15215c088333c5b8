//! Source documents that feed candidate issues
//!
//! - [`template`]: a single issue from a front-matter markdown file
//! - [`sheet`]: spreadsheet rows decoded into column-keyed records
//! - [`proposal`]: spreadsheet rows turned into dApp proposal issues

pub mod proposal;
pub mod sheet;
pub mod template;

pub use proposal::{find_duplicate_names, proposal_candidate, DuplicateName};
pub use sheet::{combine, read_workbook, SheetData, SheetRecord};
pub use template::{load_template, parse_template};
