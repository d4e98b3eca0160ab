use crate::prelude::*;

/// An in memory [`FFIInfoDictionary`], for hosts which rather hand over
/// their configuration as a JSON object of strings than implement the
/// lookup themselves.
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct InfoDictionary {
    entries: HashMap<String, String>,
}

impl InfoDictionary {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
                .collect(),
        }
    }

    pub fn from_json(json: impl AsRef<[u8]>) -> Result<Self, ConfigurationError> {
        serde_json::from_slice(json.as_ref()).map_err(|e| {
            ConfigurationError::InvalidInfoDictionaryJSON {
                underlying: e.to_string(),
            }
        })
    }
}

impl FFIInfoDictionary for InfoDictionary {
    fn object_for_info_dictionary_key(&self, key: String) -> Option<String> {
        self.entries.get(&key).cloned()
    }
}
