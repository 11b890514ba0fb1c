//! Classification results for a single day.

use serde::{Deserialize, Serialize};

/// Festival label returned for an ordinary Saturday or Sunday.
pub const WEEKEND_LABEL: &str = "周末";
/// Festival label returned for an ordinary Monday to Friday.
pub const WORKDAY_LABEL: &str = "工作日";
/// Label for a day off declared by a custom work schedule.
pub const REST_DAY_LABEL: &str = "休息日";
/// Label for a weekend workday declared by a custom work schedule.
pub const MAKEUP_DAY_LABEL: &str = "补班";

/// The four mutually exclusive ways a day can be classified.
///
/// # Example
///
/// ```
/// use cn_workday::models::DayKind;
///
/// assert!(DayKind::ShiftedWorkday.is_workday());
/// assert!(!DayKind::Weekend.is_workday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A weekend day redesignated as a workday.
    ShiftedWorkday,
    /// A statutory holiday.
    Holiday,
    /// An ordinary Saturday or Sunday.
    Weekend,
    /// An ordinary Monday to Friday.
    Workday,
}

impl DayKind {
    /// Whether work is mandated on a day of this kind.
    pub fn is_workday(self) -> bool {
        matches!(self, DayKind::ShiftedWorkday | DayKind::Workday)
    }
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::ShiftedWorkday => write!(f, "ShiftedWorkday"),
            DayKind::Holiday => write!(f, "Holiday"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Workday => write!(f, "Workday"),
        }
    }
}

/// The verdict for one day: its kind plus the human-readable festival label.
///
/// This is the value stored in the classification cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayClassification {
    /// How the day is classified.
    pub kind: DayKind,
    /// A holiday name, a shifted-workday name, [`WEEKEND_LABEL`] or [`WORKDAY_LABEL`].
    pub festival: &'static str,
}

impl DayClassification {
    /// Classification of a day with no table entry.
    pub fn ordinary(is_weekend: bool) -> Self {
        if is_weekend {
            Self {
                kind: DayKind::Weekend,
                festival: WEEKEND_LABEL,
            }
        } else {
            Self {
                kind: DayKind::Workday,
                festival: WORKDAY_LABEL,
            }
        }
    }

    /// Whether work is mandated on this day.
    pub fn is_workday(&self) -> bool {
        self.kind.is_workday()
    }
}
