use std::fmt;

/// Query parameter carrying one breadcrumb element; repeated in order.
pub const NAVIGATION_PARAM: &str = "n";

/// Breadcrumb value object: the ordered navigation chain `[a0, ..., an]`
///
/// The last element is the focal node, every earlier element is a collapsed
/// ancestor. A breadcrumb is derived from request parameters alone and is never
/// stored server-side; equal parameters always produce equal breadcrumbs.
///
/// Invariant: the path is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Breadcrumb {
    path: Vec<String>,
}

impl Breadcrumb {
    /// Resolves the requested node sequence into a breadcrumb.
    ///
    /// An empty request falls back to `[default_root]`. Otherwise the sequence is
    /// taken verbatim: no deduplication, and the chain is not required to follow
    /// actual edges.
    pub fn resolve(requested: Vec<String>, default_root: &str) -> Self {
        if requested.is_empty() {
            Self {
                path: vec![default_root.to_string()],
            }
        } else {
            Self { path: requested }
        }
    }

    /// Extracts the ordered `n` values from a raw `application/x-www-form-urlencoded` query.
    ///
    /// Other keys are ignored, `+` decodes to a space, and pairs that are not valid
    /// percent-encoded UTF-8 are skipped.
    pub fn query_nodes(raw_query: Option<&str>) -> Vec<String> {
        let Some(raw_query) = raw_query else {
            return Vec::new();
        };

        raw_query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = decode_component(key)?;
                if key != NAVIGATION_PARAM {
                    return None;
                }
                decode_component(value)
            })
            .collect()
    }

    /// The focal node
    pub fn focus(&self) -> &str {
        // The path is non-empty by construction.
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// The element right before the focal node, if any
    pub fn predecessor(&self) -> Option<&str> {
        self.path
            .len()
            .checked_sub(2)
            .map(|index| self.path[index].as_str())
    }

    /// Every element before the focal node, outermost first
    pub fn ancestors(&self) -> &[String] {
        &self.path[..self.path.len() - 1]
    }

    pub fn nodes(&self) -> &[String] {
        &self.path
    }

    /// Number of elements, focal node included; never zero
    pub(crate) fn len(&self) -> usize {
        self.path.len()
    }

    /// The breadcrumb cut back to `[a0, ..., a_index]`, re-focusing on `a_index`.
    ///
    /// An index past the end returns the breadcrumb unchanged.
    pub fn truncated(&self, index: usize) -> Self {
        let end = (index + 1).min(self.path.len());
        Self {
            path: self.path[..end].to_vec(),
        }
    }

    /// The breadcrumb with `node` appended as the new focus
    pub fn extended(&self, node: &str) -> Self {
        let mut path = self.path.clone();
        path.push(node.to_string());
        Self { path }
    }

    /// Relative link re-entering the navigator at this breadcrumb
    pub fn to_href(&self) -> String {
        let query = self
            .path
            .iter()
            .map(|node| format!("{}={}", NAVIGATION_PARAM, urlencoding::encode(node)))
            .collect::<Vec<_>>()
            .join("&");
        format!("/?{}", query)
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" > "))
    }
}

fn decode_component(component: &str) -> Option<String> {
    let plus_as_space = component.replace('+', " ");
    urlencoding::decode(&plus_as_space)
        .ok()
        .map(|decoded| decoded.into_owned())
}
