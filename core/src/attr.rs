use std::borrow::Cow;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed vocabulary of assignment attribute keys.
///
/// Keys are deliberately NOT free-form strings: downstream consumers match on
/// them, so new keys are an API change. The one open-ended member is the
/// numbered `Exercise(n)` family used when a strength instruction names more
/// than one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKey {
    Name,
    Activity,
    Task,
    Distance,
    Pace,
    StartingPace,
    FinishingPace,
    Duration,
    Intensity,
    Time,
    Date,
    Location,
    Calories,
    HeartRate,
    Sets,
    Reps,
    Weight,
    Exercise,
    /// `Exercise 1`, `Exercise 2`, … — per-exercise detail lines (1-based)
    ExerciseN(u8),
    Stroke,
    MaxDuration,
    Cadence,
    WorkDuration,
    RestDuration,
    TotalDuration,
    Rounds,
    Rest,
    Equipment,
    Notes,
    Segment,
}

impl AttrKey {
    /// Display label used on the wire and in UIs.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            AttrKey::Name => Cow::Borrowed("Name"),
            AttrKey::Activity => Cow::Borrowed("Activity"),
            AttrKey::Task => Cow::Borrowed("Task"),
            AttrKey::Distance => Cow::Borrowed("Distance"),
            AttrKey::Pace => Cow::Borrowed("Pace"),
            AttrKey::StartingPace => Cow::Borrowed("Starting Pace"),
            AttrKey::FinishingPace => Cow::Borrowed("Finishing Pace"),
            AttrKey::Duration => Cow::Borrowed("Duration"),
            AttrKey::Intensity => Cow::Borrowed("Intensity"),
            AttrKey::Time => Cow::Borrowed("Time"),
            AttrKey::Date => Cow::Borrowed("Date"),
            AttrKey::Location => Cow::Borrowed("Location"),
            AttrKey::Calories => Cow::Borrowed("Calories"),
            AttrKey::HeartRate => Cow::Borrowed("Heart Rate"),
            AttrKey::Sets => Cow::Borrowed("Sets"),
            AttrKey::Reps => Cow::Borrowed("Reps"),
            AttrKey::Weight => Cow::Borrowed("Weight"),
            AttrKey::Exercise => Cow::Borrowed("Exercise"),
            AttrKey::ExerciseN(n) => Cow::Owned(format!("Exercise {n}")),
            AttrKey::Stroke => Cow::Borrowed("Stroke"),
            AttrKey::MaxDuration => Cow::Borrowed("Max Duration"),
            AttrKey::Cadence => Cow::Borrowed("Cadence"),
            AttrKey::WorkDuration => Cow::Borrowed("Work Duration"),
            AttrKey::RestDuration => Cow::Borrowed("Rest Duration"),
            AttrKey::TotalDuration => Cow::Borrowed("Total Duration"),
            AttrKey::Rounds => Cow::Borrowed("Rounds"),
            AttrKey::Rest => Cow::Borrowed("Rest"),
            AttrKey::Equipment => Cow::Borrowed("Equipment"),
            AttrKey::Notes => Cow::Borrowed("Notes"),
            AttrKey::Segment => Cow::Borrowed("Segment"),
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        let key = match label {
            "Name" => AttrKey::Name,
            "Activity" => AttrKey::Activity,
            "Task" => AttrKey::Task,
            "Distance" => AttrKey::Distance,
            "Pace" => AttrKey::Pace,
            "Starting Pace" => AttrKey::StartingPace,
            "Finishing Pace" => AttrKey::FinishingPace,
            "Duration" => AttrKey::Duration,
            "Intensity" => AttrKey::Intensity,
            "Time" => AttrKey::Time,
            "Date" => AttrKey::Date,
            "Location" => AttrKey::Location,
            "Calories" => AttrKey::Calories,
            "Heart Rate" => AttrKey::HeartRate,
            "Sets" => AttrKey::Sets,
            "Reps" => AttrKey::Reps,
            "Weight" => AttrKey::Weight,
            "Exercise" => AttrKey::Exercise,
            "Stroke" => AttrKey::Stroke,
            "Max Duration" => AttrKey::MaxDuration,
            "Cadence" => AttrKey::Cadence,
            "Work Duration" => AttrKey::WorkDuration,
            "Rest Duration" => AttrKey::RestDuration,
            "Total Duration" => AttrKey::TotalDuration,
            "Rounds" => AttrKey::Rounds,
            "Rest" => AttrKey::Rest,
            "Equipment" => AttrKey::Equipment,
            "Notes" => AttrKey::Notes,
            "Segment" => AttrKey::Segment,
            other => {
                let n = other.strip_prefix("Exercise ")?.parse().ok()?;
                AttrKey::ExerciseN(n)
            }
        };
        Some(key)
    }
}

impl Serialize for AttrKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for AttrKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        AttrKey::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown attribute key '{label}'")))
    }
}

impl utoipa::PartialSchema for AttrKey {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        String::schema()
    }
}

impl utoipa::ToSchema for AttrKey {}

/// One extracted attribute: a closed-vocabulary key and a display-ready value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Attribute {
    pub key: AttrKey,
    pub value: String,
}

/// One fully-resolved workout record for a single (athlete, day, segment)
/// combination. Attribute order is meaningful and preserved.
#[derive(Debug, Clone, Default, PartialEq, utoipa::ToSchema)]
pub struct Assignment {
    pub attributes: Vec<Attribute>,
}

impl Assignment {
    /// Append an attribute when a value was extracted; absent values are
    /// simply never recorded.
    pub(crate) fn push_opt(&mut self, key: AttrKey, value: Option<String>) {
        if let Some(value) = value {
            self.attributes.push(Attribute { key, value });
        }
    }

    pub(crate) fn push(&mut self, key: AttrKey, value: impl Into<String>) {
        self.attributes.push(Attribute {
            key,
            value: value.into(),
        });
    }

    pub fn has_key(&self, key: AttrKey) -> bool {
        self.attributes.iter().any(|a| a.key == key)
    }

    pub fn get(&self, key: AttrKey) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Filled attributes that count toward confidence: everything except the
    /// always-present Name / Activity / Task trio.
    pub(crate) fn optional_filled(&self) -> usize {
        self.attributes
            .iter()
            .filter(|a| !matches!(a.key, AttrKey::Name | AttrKey::Activity | AttrKey::Task))
            .count()
    }
}

impl Serialize for Assignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Assignment", 1)?;
        state.serialize_field("attributes", &self.attributes)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Assignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            attributes: Vec<Attribute>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Ok(Assignment {
            attributes: raw.attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_roundtrip() {
        for key in [
            AttrKey::HeartRate,
            AttrKey::StartingPace,
            AttrKey::ExerciseN(3),
            AttrKey::Segment,
        ] {
            assert_eq!(AttrKey::from_label(&key.label()), Some(key));
        }
        assert_eq!(AttrKey::from_label("Exercise 12"), Some(AttrKey::ExerciseN(12)));
        assert_eq!(AttrKey::from_label("Mystery"), None);
    }

    #[test]
    fn attribute_wire_shape() {
        let attr = Attribute {
            key: AttrKey::HeartRate,
            value: "Zone 2".to_string(),
        };
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json, serde_json::json!({"key": "Heart Rate", "value": "Zone 2"}));
    }

    #[test]
    fn optional_filled_skips_core_trio() {
        let mut a = Assignment::default();
        a.push(AttrKey::Name, "Alex");
        a.push(AttrKey::Activity, "Running");
        a.push(AttrKey::Task, "Easy run");
        a.push(AttrKey::Distance, "10 km");
        a.push(AttrKey::Pace, "5:30/km");
        assert_eq!(a.optional_filled(), 2);
    }
}
