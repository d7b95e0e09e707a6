use chrono::{DateTime, Duration, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

// course
//  ├── name
//  ├── deptCourseId      (string, sometimes a bare number)
//  ├── description
//  ├── subjectCode
//  │    ├── code
//  │    └── school
//  └── sections[]
//       ├── code, registrationNumber, type, instructors[]
//       ├── status       (free-form: "Open", "Closed", "WaitList", ...)
//       ├── notes
//       ├── waitlistTotal
//       └── meetings[]
//            ├── beginDate
//            └── minutesDuration

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub dept_course_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub subject_code: Option<SubjectCode>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubjectCode {
    #[serde(default, deserialize_with = "lenient_text")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_number: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    pub section_type: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub instructors: Vec<String>,

    /// Raw enrollment status; unknown values are tolerated here and
    /// classified later.
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub waitlist_total: Option<i64>,
    #[serde(default)]
    pub meetings: Option<Vec<Meeting>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    #[serde(default, deserialize_with = "lenient_string")]
    pub begin_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub minutes_duration: Option<i64>,
}

impl Meeting {
    pub fn begin(&self) -> Option<NaiveDateTime> {
        self.begin_date.as_deref().and_then(parse_timestamp)
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        let length = Duration::try_minutes(self.minutes_duration?)?;
        self.begin()?.checked_add_signed(length)
    }
}

/// `{ "name": ... }` entries of the school and subject directories.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NamedEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// school code -> entry
pub type SchoolDirectory = HashMap<String, NamedEntry>;
/// school code -> subject code -> entry
pub type SubjectDirectory = HashMap<String, HashMap<String, NamedEntry>>;

/// Catalog timestamps come as "2020-09-03 09:30:00"; RFC 3339 is accepted too.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

// Query strings carry the id as text, so numeric ids are normalized to strings.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integers that sometimes arrive quoted. Anything else reads as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// Null entries and non-text entries are dropped; numbers keep their digits.
fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Vec<Value> = nullable_vec(deserializer)?;
    Ok(values
        .into_iter()
        .filter_map(|value| match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}
