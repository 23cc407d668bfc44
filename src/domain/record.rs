use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;
use crate::validation::{format_birthday, parse_birthday, validate_phone};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,

    #[serde(default)]
    pub phones: Vec<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_birthday",
        deserialize_with = "deserialize_birthday"
    )]
    pub birthday: Option<NaiveDate>,
}

impl Record {
    pub fn new(name: &str) -> Self {
        Record {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<(), AppError> {
        validate_phone(phone)?;
        self.phones.push(phone.to_string());
        Ok(())
    }

    pub fn replace_phones(&mut self, phone: &str) -> Result<(), AppError> {
        validate_phone(phone)?;
        self.phones = vec![phone.to_string()];
        Ok(())
    }

    pub fn set_birthday(&mut self, text: &str) -> Result<(), AppError> {
        self.birthday = Some(parse_birthday(text)?);
        Ok(())
    }

    pub fn phones_display(&self) -> String {
        self.phones.join(", ")
    }

    pub fn birthday_display(&self) -> Option<String> {
        self.birthday.as_ref().map(format_birthday)
    }
}

fn serialize_birthday<S>(birthday: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match birthday {
        Some(date) => serializer.serialize_str(&format_birthday(date)),
        None => serializer.serialize_none(),
    }
}

fn deserialize_birthday<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(s) => parse_birthday(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
