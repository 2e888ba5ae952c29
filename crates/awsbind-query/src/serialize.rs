//! EC2 query serialization: flattening request shapes into form parameters.
//!
//! Every request shape implements [`QuerySerialize`]. Serialization is
//! driven by a key prefix: the top-level request starts with an empty prefix,
//! structure members append `.{Name}`, and list elements append `.{N}`
//! (1-based). Absent optionals and empty lists write nothing.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::blob::Blob;

/// Ordered set of query parameters for one action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Start a parameter set with `Action` and `Version`.
    #[must_use]
    pub fn new(action: &str, version: &str) -> Self {
        let mut params = Self::default();
        params.push("Action", action);
        params.push("Version", version);
        params
    }

    /// Flatten `request` into a new parameter set for `action`.
    #[must_use]
    pub fn for_request<T: QuerySerialize + ?Sized>(action: &str, version: &str, request: &T) -> Self {
        let mut params = Self::new(action, version);
        request.serialize_query("", &mut params);
        params
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters, including `Action` and `Version`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameter has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn to_form_body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.params {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

/// Trait for writing a value into EC2 query parameters under a key prefix.
pub trait QuerySerialize {
    /// Write this value's parameters below `prefix`.
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams);
}

/// Join a structure prefix and a member name.
///
/// # Examples
///
/// ```
/// use awsbind_query::member_key;
///
/// assert_eq!(member_key("", "DryRun"), "DryRun");
/// assert_eq!(member_key("Filter.1", "Name"), "Filter.1.Name");
/// ```
#[must_use]
pub fn member_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}.{name}")
    }
}

impl QuerySerialize for String {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(prefix, self.as_str());
    }
}

impl QuerySerialize for bool {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(prefix, if *self { "true" } else { "false" });
    }
}

macro_rules! display_query_serialize {
    ($($ty:ty),*) => {
        $(
            impl QuerySerialize for $ty {
                fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
                    params.push(prefix, self.to_string());
                }
            }
        )*
    };
}

display_query_serialize!(i32, i64, f32, f64);

impl QuerySerialize for DateTime<Utc> {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(prefix, self.to_rfc3339_opts(SecondsFormat::Millis, true));
    }
}

impl QuerySerialize for Blob {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        params.push(prefix, self.to_base64());
    }
}

impl<T: QuerySerialize> QuerySerialize for Option<T> {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        if let Some(value) = self {
            value.serialize_query(prefix, params);
        }
    }
}

impl<T: QuerySerialize> QuerySerialize for Vec<T> {
    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
        for (i, item) in self.iter().enumerate() {
            item.serialize_query(&format!("{prefix}.{}", i + 1), params);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[derive(Default)]
    struct Filter {
        name: Option<String>,
        values: Vec<String>,
    }

    impl QuerySerialize for Filter {
        fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
            self.name.serialize_query(&member_key(prefix, "Name"), params);
            self.values
                .serialize_query(&member_key(prefix, "Value"), params);
        }
    }

    #[derive(Default)]
    struct DescribeThings {
        dry_run: Option<bool>,
        filters: Vec<Filter>,
        ids: Vec<String>,
        max_results: Option<i32>,
    }

    impl QuerySerialize for DescribeThings {
        fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {
            self.dry_run
                .serialize_query(&member_key(prefix, "DryRun"), params);
            self.filters
                .serialize_query(&member_key(prefix, "Filter"), params);
            self.ids.serialize_query(&member_key(prefix, "ThingId"), params);
            self.max_results
                .serialize_query(&member_key(prefix, "MaxResults"), params);
        }
    }

    #[test]
    fn test_should_start_with_action_and_version() {
        let params = QueryParams::for_request("DescribeThings", "2014-10-01", &DescribeThings::default());
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_form_body(), "Action=DescribeThings&Version=2014-10-01");
    }

    #[test]
    fn test_should_flatten_nested_lists_with_one_based_indices() {
        let request = DescribeThings {
            dry_run: Some(false),
            filters: vec![
                Filter {
                    name: Some("instance-state-name".into()),
                    values: vec!["running".into(), "stopped".into()],
                },
                Filter {
                    name: Some("tag:Name".into()),
                    values: vec![],
                },
            ],
            ids: vec!["i-1".into()],
            max_results: None,
        };
        let params = QueryParams::for_request("DescribeThings", "2014-10-01", &request);
        let pairs: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Action", "DescribeThings"),
                ("Version", "2014-10-01"),
                ("DryRun", "false"),
                ("Filter.1.Name", "instance-state-name"),
                ("Filter.1.Value.1", "running"),
                ("Filter.1.Value.2", "stopped"),
                ("Filter.2.Name", "tag:Name"),
                ("ThingId.1", "i-1"),
            ]
        );
        assert_eq!(params.get("MaxResults"), None);
    }

    #[test]
    fn test_should_form_encode_reserved_characters() {
        let mut params = QueryParams::new("CreateTags", "2014-10-01");
        params.push("Tag.1.Value", "a b&c=d/é");
        assert_eq!(
            params.to_form_body(),
            "Action=CreateTags&Version=2014-10-01&Tag.1.Value=a+b%26c%3Dd%2F%C3%A9"
        );
    }

    #[test]
    fn test_should_format_scalars() {
        let mut params = QueryParams::default();
        Utc.with_ymd_and_hms(2014, 10, 21, 21, 45, 26)
            .unwrap()
            .serialize_query("StartTime", &mut params);
        0.25_f64.serialize_query("SpotPrice", &mut params);
        Blob::new(b"hello".to_vec()).serialize_query("UserData", &mut params);
        assert_eq!(params.get("StartTime"), Some("2014-10-21T21:45:26.000Z"));
        assert_eq!(params.get("SpotPrice"), Some("0.25"));
        assert_eq!(params.get("UserData"), Some("aGVsbG8="));
    }
}
