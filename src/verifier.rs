//! Page-shape tripwires for the "Who We Are" page.
//!
//! The page states its meeting times only in prose. Rather than parse that
//! prose, the times are pinned here and the prose is compared verbatim against
//! what it said when the times were pinned. Any difference in element counts
//! or text is a [`StructureFailure`], and the page yields no meetings.
//!
//! Expected layout of the section (paths relative to the section `div`):
//!
//! ```text
//! div
//! ├── h2            "Board"
//! ├── p, ul         board time text, board dates
//! ├── p, ul         general membership time text, dates
//! ├── p, ul         advisory council time text, dates
//! └── div
//!     ├── p         LAC time text
//!     ├── p ...
//!     └── div
//!         ├── ul    LAC dates
//!         └── p     remote meeting statement
//! ```

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, instrument};

use crate::errors::StructureFailure;
use crate::html::{descendants_at, list_lines, own_text_nodes, text_content};
use crate::models::{Category, MeetingTimeSet};

macro_rules! selector {
    ($query:expr) => {{
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($query).unwrap());
        &SELECTOR
    }};
}

pub const SECTION_HEADING: &str = "Board";

const EXPECTED_TIME_TEXT: [(Category, &str); 4] = [
    (
        Category::Board,
        "ACLA Board meetings (6:30 pm unless otherwise noted)",
    ),
    (Category::General, "General Membership meetings (7:00 pm)"),
    (Category::Advisory, "(10:00 am)"),
    (Category::Lac, "(10:00 am)"),
];

const REMOTE_STATEMENT: &str = "meetings will be held remotely";

const TOP_PARAGRAPHS: &[&str] = &["p"];
const NESTED_PARAGRAPHS: &[&str] = &["div", "p"];
const TOP_LISTS: &[&str] = &["ul"];
const NESTED_LISTS: &[&str] = &["div", "div", "ul"];
const REMOTE_PARAGRAPHS: &[&str] = &["div", "div", "p"];

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("pinned meeting time is a valid time of day")
}

/// The meeting times the page prose is pinned to.
pub fn pinned_times() -> MeetingTimeSet {
    MeetingTimeSet {
        board: at(18, 30),
        general: at(19, 0),
        advisory: at(10, 0),
        lac: at(10, 0),
    }
}

/// Schedule lines of every series, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleLines {
    pub board: Vec<String>,
    pub general: Vec<String>,
    pub advisory: Vec<String>,
    pub lac: Vec<String>,
}

impl ScheduleLines {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Board => &self.board,
            Category::General => &self.general,
            Category::Advisory => &self.advisory,
            Category::Lac => &self.lac,
        }
    }
}

/// Find the single `div` whose `h2` reads `heading`.
///
/// One of the `h2`'s own text nodes must equal `heading` exactly; text inside
/// child markup or padded with whitespace does not count.
#[instrument(level = "debug", skip(document))]
pub fn locate_section<'a>(
    document: &'a Html,
    heading: &str,
) -> Result<ElementRef<'a>, StructureFailure> {
    let sections: Vec<ElementRef<'a>> = document
        .select(selector!("div > h2"))
        .filter(|h2| own_text_nodes(*h2).any(|text| text == heading))
        .filter_map(|h2| h2.parent().and_then(ElementRef::wrap))
        .collect();

    match sections.as_slice() {
        [section] => Ok(*section),
        _ => Err(StructureFailure::SectionCount {
            heading: heading.to_string(),
            found: sections.len(),
        }),
    }
}

/// Check the meeting-time prose and return the pinned times.
#[instrument(level = "debug", skip_all)]
pub fn verify_and_extract(section: ElementRef<'_>) -> Result<MeetingTimeSet, StructureFailure> {
    let top = descendants_at(section, TOP_PARAGRAPHS);
    if top.len() != 3 {
        return Err(StructureFailure::ParagraphCount {
            location: "p",
            expected: "exactly 3",
            found: top.len(),
        });
    }

    let nested = descendants_at(section, NESTED_PARAGRAPHS);
    if nested.len() < 2 {
        return Err(StructureFailure::ParagraphCount {
            location: "div/p",
            expected: "at least 2",
            found: nested.len(),
        });
    }

    let paragraphs = top.iter().chain(nested.iter().take(1));
    for (paragraph, (category, expected)) in paragraphs.zip(EXPECTED_TIME_TEXT) {
        let found = text_content(*paragraph);
        if found != expected {
            return Err(StructureFailure::TimeText {
                category,
                expected,
                found,
            });
        }
    }

    debug!("Meeting time text matches pinned times");
    Ok(pinned_times())
}

/// Require the statement that meetings are held remotely.
///
/// Every record is emitted with a remote location; if the statement goes away
/// that location can no longer be trusted.
#[instrument(level = "debug", skip_all)]
pub fn verify_remote_statement(section: ElementRef<'_>) -> Result<(), StructureFailure> {
    let paragraphs = descendants_at(section, REMOTE_PARAGRAPHS);
    let [paragraph] = paragraphs.as_slice() else {
        return Err(StructureFailure::RemoteStatementCount {
            location: "div/div/p",
            found: paragraphs.len(),
        });
    };

    let found = text_content(*paragraph);
    if !found.contains(REMOTE_STATEMENT) {
        return Err(StructureFailure::RemoteStatementMissing {
            location: "div/div/p",
            needle: REMOTE_STATEMENT,
            found,
        });
    }
    Ok(())
}

/// Check the date list counts and collect each series' lines.
#[instrument(level = "debug", skip_all)]
pub fn schedule_lines(section: ElementRef<'_>) -> Result<ScheduleLines, StructureFailure> {
    let top = descendants_at(section, TOP_LISTS);
    let [board, general, advisory] = top.as_slice() else {
        return Err(StructureFailure::ListCount {
            location: "ul",
            expected: 3,
            found: top.len(),
        });
    };

    let nested = descendants_at(section, NESTED_LISTS);
    let [lac] = nested.as_slice() else {
        return Err(StructureFailure::ListCount {
            location: "div/div/ul",
            expected: 1,
            found: nested.len(),
        });
    };

    Ok(ScheduleLines {
        board: list_lines(*board),
        general: list_lines(*general),
        advisory: list_lines(*advisory),
        lac: list_lines(*lac),
    })
}
