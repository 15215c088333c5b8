//! dApp proposals from spreadsheet rows
//!
//! Each row describes one idea. The idea-name column is required for a row
//! to be actionable; everything else falls back to placeholder text.

use crate::source::sheet::SheetRecord;
use crate::types::CandidateIssue;
use std::collections::HashMap;

/// Column holding the idea name
pub const NAME_COLUMN: &str = "dApp idea/use case";
/// Column holding the idea description
pub const DESCRIPTION_COLUMN: &str = "Description";
/// Column explaining why the idea fits the platform
pub const FIT_COLUMN: &str = "Why Midnight? / How does Midnight fit?";
/// Column listing existing examples in the space
pub const EXISTING_EXAMPLES_COLUMN: &str = "Existing examples";
/// Column stating whether the idea was built before
pub const BUILT_BEFORE_COLUMN: &str = "Has it been built before?";
/// Column with further examples
pub const EXAMPLES_COLUMN: &str = "Examples?";
/// Column naming the vertical
pub const VERTICAL_COLUMN: &str = "Vertical";

/// Prefix for every proposal title
pub const TITLE_PREFIX: &str = "[dApp Proposal] ";

/// Labels applied to every proposal
pub const PROPOSAL_LABELS: [&str; 3] = ["dapp proposal", "idea", "community"];

const TBD: &str = "To be determined";
const NA: &str = "N/A";

/// Spreadsheet rows preceding the first record (the header row), plus one
/// for 1-based numbering
const ROW_OFFSET: usize = 2;

/// An idea name appearing on more than one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateName {
    /// Name as first written (trimmed)
    pub name: String,
    /// Spreadsheet row numbers sharing the name
    pub rows: Vec<usize>,
}

/// Title for a proposal row, `None` when the idea name is blank
pub fn proposal_title(record: &SheetRecord) -> Option<String> {
    record
        .get(NAME_COLUMN)
        .map(|name| format!("{TITLE_PREFIX}{name}"))
}

/// Turn a proposal row into a candidate issue
///
/// A row without an idea name yields a candidate with an empty title and
/// body, which reconciliation skips without touching the network.
pub fn proposal_candidate(record: &SheetRecord) -> CandidateIssue {
    let Some(title) = proposal_title(record) else {
        return CandidateIssue {
            title: String::new(),
            body: String::new(),
            labels: Vec::new(),
        };
    };

    CandidateIssue {
        title,
        body: proposal_body(record),
        labels: PROPOSAL_LABELS.iter().map(ToString::to_string).collect(),
    }
}

/// Render the proposal issue body
pub fn proposal_body(record: &SheetRecord) -> String {
    let field = |column: &str, fallback: &'static str| -> String {
        record.get(column).unwrap_or(fallback).to_string()
    };

    let name = field(NAME_COLUMN, "Unnamed dApp");
    let vertical = field(VERTICAL_COLUMN, "General");
    let description = field(DESCRIPTION_COLUMN, TBD);
    let fit = field(FIT_COLUMN, TBD);
    let built_before = field(BUILT_BEFORE_COLUMN, TBD);
    let existing = field(EXISTING_EXAMPLES_COLUMN, NA);
    let examples = field(EXAMPLES_COLUMN, NA);

    format!(
        "**Give your dApp a name or working title:** {name}

**One-sentence summary of the idea:** {description}

### 🔍 Problem Statement
**What problem does this solve or what opportunity does it unlock?**
{description}

**Why does this dApp need to exist? What user pain or need is it addressing?**
{fit}

### 🌐 Target Users
**Who would use this dApp?**
To be determined based on use case analysis

**How would they benefit from Midnight's data-protection features?**
To be determined based on use case requirements

### 🔧 Core Functionality
**What are the key features or actions users would take in the app?**
Based on the concept: {description}

**Key features to be developed:**
To be assessed based on requirements analysis

### 🔐 Privacy & ZK Usage
**How would you leverage Midnight's privacy features or zero-knowledge technology?**
{fit}

### 📦 Technical Considerations
**Do you have a preferred tech stack or prior implementation?**
- Frontend: To be determined
- Smart contracts: To be determined
- Backend: To be determined

**Any integrations or infrastructure required?**
- Additional requirements to be assessed

### 📈 Maturity & Next Steps
- [x] Idea stage
- [ ] I'm building this and want feedback
- [ ] I'm looking for collaborators
- [ ] I'd like help from the Midnight team

### 🔗 Related Resources
**Has it been built before?** {built_before}

**Existing examples in the space:** {existing}

**Examples:** {examples}

**Additional resources:** To be determined

---
*Vertical: {vertical}*"
    )
}

/// Find idea names shared by several rows (case-insensitive, trimmed)
///
/// Groups come back in order of first appearance; row numbers are
/// spreadsheet rows, counting the header.
pub fn find_duplicate_names(records: &[SheetRecord]) -> Vec<DuplicateName> {
    let mut groups: Vec<DuplicateName> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (i, record) in records.iter().enumerate() {
        let Some(name) = record.get(NAME_COLUMN) else {
            continue;
        };
        let row = i + ROW_OFFSET;
        match index.get(&name.to_lowercase()) {
            Some(&group) => groups[group].rows.push(row),
            None => {
                index.insert(name.to_lowercase(), groups.len());
                groups.push(DuplicateName {
                    name: name.to_string(),
                    rows: vec![row],
                });
            }
        }
    }

    groups.retain(|g| g.rows.len() > 1);
    groups
}
