//! Bucket listing types.

use serde::{Deserialize, Serialize};

use crate::api::constants::ACT_LIST;

/// Action envelope sent in the body of bucket requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionMsg<V> {
    pub action: String,
    pub value: V,
}

/// Options for a single list-objects page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ListObjectsMsg {
    /// Only list objects whose names start with this prefix
    #[serde(default)]
    pub prefix: String,
    /// Max entries per page (0 = cluster default)
    #[serde(rename = "pagesize", default)]
    pub page_size: u32,
    /// Comma-separated object properties to return
    #[serde(default)]
    pub props: String,
    /// Listing session id returned by the first page
    #[serde(default)]
    pub uuid: String,
    /// Token of the next page, empty for the first one
    #[serde(default)]
    pub continuation_token: String,
}

impl ListObjectsMsg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_props(mut self, props: impl Into<String>) -> Self {
        self.props = props.into();
        self
    }

    /// Continue an existing listing.
    pub fn with_continuation(mut self, uuid: impl Into<String>, token: impl Into<String>) -> Self {
        self.uuid = uuid.into();
        self.continuation_token = token.into();
        self
    }

    /// Wrap into the `list` action envelope.
    pub fn into_action(self) -> ActionMsg<ListObjectsMsg> {
        ActionMsg {
            action: ACT_LIST.to_string(),
            value: self,
        }
    }
}

/// One object in a bucket listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BucketEntry {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub checksum: String,
    /// Last access time as reported by the cluster
    #[serde(default)]
    pub atime: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub target_url: String,
    #[serde(default)]
    pub copies: u32,
    #[serde(default)]
    pub flags: u32,
}

/// One page of a bucket listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BucketList {
    #[serde(default)]
    pub uuid: String,
    /// Empty when this is the last page
    #[serde(default)]
    pub continuation_token: String,
    #[serde(default)]
    pub flags: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<BucketEntry>,
}

impl BucketList {
    pub fn is_last_page(&self) -> bool {
        self.continuation_token.is_empty()
    }
}

// The cluster sends `"entries": null` for an empty page.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<BucketEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<BucketEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_action_serialize() {
        let action = ListObjectsMsg::new()
            .with_prefix("train/")
            .with_page_size(100)
            .into_action();
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "list",
                "value": {
                    "prefix": "train/",
                    "pagesize": 100,
                    "props": "",
                    "uuid": "",
                    "continuation_token": ""
                }
            })
        );
    }

    #[test]
    fn test_bucket_list_deserialize() {
        let json = r#"{
            "uuid": "lst-1",
            "continuation_token": "obj-2",
            "flags": 0,
            "entries": [
                {"name": "obj-1", "size": 42, "checksum": "abc", "version": "1"},
                {"name": "obj-2"}
            ]
        }"#;
        let list: BucketList = serde_json::from_str(json).unwrap();
        assert_eq!(list.uuid, "lst-1");
        assert!(!list.is_last_page());
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].size, 42);
        assert_eq!(list.entries[1].size, 0);
        assert!(list.entries[1].checksum.is_empty());
    }

    #[test]
    fn test_bucket_list_null_entries() {
        let json = r#"{"uuid": "", "continuation_token": "", "flags": 0, "entries": null}"#;
        let list: BucketList = serde_json::from_str(json).unwrap();
        assert!(list.entries.is_empty());
        assert!(list.is_last_page());
    }
}
