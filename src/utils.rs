/// Deserialize a value that may be either a JSON number or a string containing a number.
/// Quiz clients send category ids both ways.
pub fn deserialize_string_or_i32<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = i32;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(E::custom)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i32, E> {
            v.trim().parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

/// Same as [`deserialize_string_or_i32`], but `null` and missing fields become `None`.
pub fn deserialize_optional_string_or_i32<'de, D: serde::Deserializer<'de>>(
    d: D,
) -> Result<Option<i32>, D::Error> {
    #[derive(serde::Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_string_or_i32")] i32);

    let value: Option<Wrapper> = serde::Deserialize::deserialize(d)?;
    Ok(value.map(|Wrapper(v)| v))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[serde(deserialize_with = "super::deserialize_string_or_i32")]
        id: i32,
        #[serde(default, deserialize_with = "super::deserialize_optional_string_or_i32")]
        category: Option<i32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let body: Body = serde_json::from_str(r#"{"id": 3, "category": "2"}"#).unwrap();
        assert_eq!(body.id, 3);
        assert_eq!(body.category, Some(2));

        let body: Body = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(body.id, 1);
        assert_eq!(body.category, None);
    }

    #[test]
    fn null_category_is_none() {
        let body: Body = serde_json::from_str(r#"{"id": 0, "category": null}"#).unwrap();
        assert_eq!(body.category, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Body>(r#"{"id": "science"}"#).is_err());
        assert!(serde_json::from_str::<Body>(r#"{"id": 1.5}"#).is_err());
    }
}
