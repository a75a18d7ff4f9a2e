//! Filter state lives in the URL. Everything here reads or rewrites
//! query pairs; nothing is stored elsewhere.

use crate::job::Job;

/// Free-text search parameter.
pub const SEARCH_PARAM: &str = "q";

/// Comma-joined list of selected type tags.
pub const TYPE_PARAM: &str = "type";

/// Current selections, derived from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub q: String,
    pub types: Vec<String>,
}

impl FilterState {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let q = first_value(pairs, SEARCH_PARAM).unwrap_or_default().to_string();
        let types = first_value(pairs, TYPE_PARAM)
            .map(split_types)
            .unwrap_or_default();

        Self { q, types }
    }

    /// The text to search for, or `None` when the box is empty.
    pub fn search_text(&self) -> Option<&str> {
        if self.q.is_empty() {
            None
        } else {
            Some(&self.q)
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.types.iter().any(|t| t == tag)
    }

    /// Keeps jobs whose type is selected, or every job when nothing is.
    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter()
            .filter(|job| self.types.is_empty() || self.is_selected(&job.job_type))
            .collect()
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn split_types(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Removes `item` if present, appends it otherwise.
pub fn add_or_remove(list: &[String], item: &str) -> Vec<String> {
    if list.iter().any(|x| x == item) {
        list.iter().filter(|x| *x != item).cloned().collect()
    } else {
        let mut next = list.to_vec();
        next.push(item.to_string());
        next
    }
}

/// Query pairs after toggling `tag` in the `type` parameter.
///
/// Other parameters are kept as they are, in order. The `type` entry keeps
/// its position and disappears once no tag is left.
pub fn toggle_type_query(pairs: &[(String, String)], tag: &str) -> Vec<(String, String)> {
    let current = FilterState::from_pairs(pairs);
    let joined = add_or_remove(&current.types, tag).join(",");

    let mut out = Vec::with_capacity(pairs.len() + 1);
    let mut written = false;
    for (k, v) in pairs {
        if k != TYPE_PARAM {
            out.push((k.clone(), v.clone()));
        } else if !written {
            written = true;
            if !joined.is_empty() {
                out.push((k.clone(), joined.clone()));
            }
        }
    }
    if !written && !joined.is_empty() {
        out.push((TYPE_PARAM.to_string(), joined));
    }
    out
}

/// Percent-encoded query string, without the leading `?`.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
