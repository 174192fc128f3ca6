use serde::Deserialize;

use crate::utils::{deserialize_optional_string_or_i32, deserialize_string_or_i32};

/// Body of `POST /questions`. Every field is optional here so that missing text can be
/// reported as unprocessable instead of as a malformed payload.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestion {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_i32")]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_string_or_i32")]
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBody {
    #[serde(default)]
    pub search_term: Option<String>,
}

/// Body of `POST /gameplay`.
#[derive(Debug, Deserialize)]
pub struct QuizBody {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_string_or_i32")]
    pub id: i32,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
