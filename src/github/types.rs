use serde::{Deserialize, Deserializer};

/// One entry of the GitHub users listing.
///
/// Only the fields the fetch demo renders are kept; everything else in the
/// payload is ignored. Missing or `null` fields decode as empty strings so a
/// single incomplete entry does not reject the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubUser {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub login: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_decode_as_empty() {
        let users: Vec<GithubUser> = serde_json::from_str(
            r#"[{"login":"ghost","avatar_url":null},{"avatar_url":"u2"},{}]"#,
        )
        .unwrap();
        assert_eq!(users[0].login, "ghost");
        assert_eq!(users[0].avatar_url, "");
        assert_eq!(users[1].login, "");
        assert_eq!(users[1].avatar_url, "u2");
        assert_eq!(users[2], GithubUser { login: String::new(), avatar_url: String::new() });
    }
}
