// src/domain/status.rs

use crate::catalog::Section;
use tracing::debug;

/// Enrollment availability, declared most blocking first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusKind {
    Closed,
    Waitlisted,
    Open,
    Unknown,
}

/// Raw catalog status strings, matched case-insensitively after trimming.
/// Anything not listed here is `Unknown`.
const STATUS_TABLE: &[(&str, StatusKind)] = &[
    ("open", StatusKind::Open),
    ("waitlist", StatusKind::Waitlisted),
    ("waitlisted", StatusKind::Waitlisted),
    ("closed", StatusKind::Closed),
    ("cancelled", StatusKind::Closed),
];

impl StatusKind {
    pub fn from_raw(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return StatusKind::Unknown;
        };
        let needle = raw.trim();
        STATUS_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(needle))
            .map(|(_, kind)| *kind)
            .unwrap_or_else(|| {
                debug!(raw, "unrecognized section status");
                StatusKind::Unknown
            })
    }

    pub fn of_section(section: &Section) -> Self {
        Self::from_raw(section.status.as_deref())
    }

    /// Visual priority, 0 = most blocking.
    pub fn severity(self) -> u8 {
        match self {
            StatusKind::Closed => 0,
            StatusKind::Waitlisted => 1,
            StatusKind::Open => 2,
            StatusKind::Unknown => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusKind::Closed => "Closed",
            StatusKind::Waitlisted => "Waitlist",
            StatusKind::Open => "Open",
            StatusKind::Unknown => "Unknown",
        }
    }

    /// Color token the presentation layer paints the label with.
    pub fn color(self) -> &'static str {
        match self {
            StatusKind::Closed => "red",
            StatusKind::Waitlisted => "orange",
            StatusKind::Open => "green",
            StatusKind::Unknown => "grey",
        }
    }
}

/// Course-level status: Open if any section is open, then Waitlisted, then
/// Closed, otherwise Unknown.
pub fn aggregate(sections: &[Section]) -> StatusKind {
    aggregate_kinds(sections.iter().map(StatusKind::of_section))
}

pub fn aggregate_kinds<I>(kinds: I) -> StatusKind
where
    I: IntoIterator<Item = StatusKind>,
{
    let (mut waitlisted, mut closed) = (false, false);
    for kind in kinds {
        match kind {
            StatusKind::Open => return StatusKind::Open,
            StatusKind::Waitlisted => waitlisted = true,
            StatusKind::Closed => closed = true,
            StatusKind::Unknown => {}
        }
    }

    if waitlisted {
        StatusKind::Waitlisted
    } else if closed {
        StatusKind::Closed
    } else {
        StatusKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(statuses: &[&str]) -> Vec<Section> {
        statuses
            .iter()
            .map(|s| Section {
                status: Some(s.to_string()),
                ..Section::default()
            })
            .collect()
    }

    #[test]
    fn open_section_wins() {
        assert_eq!(aggregate(&sections(&["Open", "Closed"])), StatusKind::Open);
        assert_eq!(aggregate(&sections(&["Closed", "WaitList", "Open"])), StatusKind::Open);
    }

    #[test]
    fn waitlist_beats_closed() {
        assert_eq!(aggregate(&sections(&["WaitList", "Closed"])), StatusKind::Waitlisted);
        assert_eq!(aggregate(&sections(&["Closed", "Closed"])), StatusKind::Closed);
    }

    #[test]
    fn empty_and_garbage_are_unknown() {
        assert_eq!(aggregate(&[]), StatusKind::Unknown);
        assert_eq!(aggregate(&sections(&["Garbage"])), StatusKind::Unknown);
        assert_eq!(aggregate(&[Section::default()]), StatusKind::Unknown);
    }

    #[test]
    fn garbage_does_not_mask_known_statuses() {
        assert_eq!(aggregate(&sections(&["???", "Closed"])), StatusKind::Closed);
    }

    #[test]
    fn raw_mapping_ignores_case_and_whitespace() {
        assert_eq!(StatusKind::from_raw(Some(" open ")), StatusKind::Open);
        assert_eq!(StatusKind::from_raw(Some("WAITLISTED")), StatusKind::Waitlisted);
        assert_eq!(StatusKind::from_raw(Some("Cancelled")), StatusKind::Closed);
        assert_eq!(StatusKind::from_raw(None), StatusKind::Unknown);
    }

    #[test]
    fn severity_follows_declaration_order() {
        let mut kinds = vec![
            StatusKind::Unknown,
            StatusKind::Open,
            StatusKind::Closed,
            StatusKind::Waitlisted,
        ];
        kinds.sort();
        let ranks: Vec<u8> = kinds.iter().map(|k| k.severity()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        assert_eq!(StatusKind::Open.color(), "green");
    }
}
