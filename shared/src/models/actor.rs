//! Actor Model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::{non_blank, optional_text};

/// Actor gender as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Capitalized form shown on cards and detail views
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(format!("Unknown gender: {other}")),
        }
    }
}

fn optional_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.and_then(|s| s.parse().ok()))
}

/// Actor entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    #[serde(default, deserialize_with = "optional_text")]
    pub name: Option<String>,
    /// ISO date, `YYYY-MM-DD`
    #[serde(default, deserialize_with = "optional_text")]
    pub birthdate: Option<String>,
    #[serde(default, deserialize_with = "optional_gender")]
    pub gender: Option<Gender>,
    /// Portrait image URL
    #[serde(default, deserialize_with = "optional_text")]
    pub image: Option<String>,
    #[serde(default)]
    pub movies: Vec<MovieRef>,
}

impl Actor {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Age in whole years on `today`; `None` without a parseable birthdate
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let birthdate = self.birthdate.as_deref()?;
        let born = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d").ok()?;
        today.years_since(born)
    }
}

/// Movie as referenced from an actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRef {
    pub id: i64,
    pub title: String,
}

/// Create/update actor payload (POST and PATCH share the shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorPayload {
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<Gender>,
    /// Movie titles, resolved by the backend
    pub movies: Vec<String>,
    pub image: Option<String>,
}

impl ActorPayload {
    /// Build from raw form text; blank fields become `None`
    pub fn new(
        name: &str,
        birthdate: &str,
        gender: Option<Gender>,
        movies: Vec<String>,
        image: &str,
    ) -> Self {
        Self {
            name: non_blank(name),
            birthdate: non_blank(birthdate),
            gender,
            movies,
            image: non_blank(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(birthdate: Option<&str>) -> Actor {
        Actor {
            id: 1,
            name: Some("Tilda Swinton".into()),
            birthdate: birthdate.map(String::from),
            gender: Some(Gender::Female),
            image: None,
            movies: vec![],
        }
    }

    #[test]
    fn test_age_on() {
        let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(actor(Some("1960-11-05")).age_on(today), Some(64));
        assert_eq!(actor(Some("1960-11-06")).age_on(today), Some(63));
        assert_eq!(actor(None).age_on(today), None);
        assert_eq!(actor(Some("not a date")).age_on(today), None);
    }

    #[test]
    fn test_unknown_gender_reads_as_absent() {
        let json = r#"{"id": 3, "name": "X", "birthdate": null, "gender": "other", "image": null, "movies": []}"#;
        let actor: Actor = serde_json::from_str(json).unwrap();
        assert_eq!(actor.gender, None);
    }

    #[test]
    fn test_gender_label() {
        assert_eq!("FEMALE".parse::<Gender>().unwrap().label(), "Female");
        assert_eq!(Gender::Male.to_string(), "Male");
    }

    #[test]
    fn test_payload_serializes_gender_lowercase() {
        let payload = ActorPayload::new("Tilda", "", Some(Gender::Female), vec![], "");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["gender"], "female");
        assert_eq!(value["birthdate"], serde_json::Value::Null);
        assert_eq!(value["movies"], serde_json::json!([]));
    }
}
