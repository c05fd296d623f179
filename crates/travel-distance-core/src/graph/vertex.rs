use std::fmt;

use serde::Serialize;

/// A named location in the route graph.
///
/// Labels are folded to lowercase on construction, so `Vertex::with("Vega")`
/// and `Vertex::with("VEGA")` are the same vertex everywhere: as map keys,
/// in sets and inside paths. No other normalization is applied; surrounding
/// whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    /// Create a vertex from a label
    pub fn with(label: impl AsRef<str>) -> Self {
        Self {
            label: label.as_ref().to_lowercase(),
        }
    }

    /// The canonical (lowercase) label
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::with(label)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vertex: {}]", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;
    use std::hash::{Hash, Hasher};

    fn hash_of(vertex: &Vertex) -> u64 {
        let mut hasher = DefaultHasher::new();
        vertex.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_label_is_lowercased() {
        let vertex = Vertex::with("Solar System");
        assert_eq!(vertex.label(), "solar system");
    }

    #[test]
    fn test_same_label_other_case_is_equal() {
        let sirius = Vertex::with("Sirius");
        let other = Vertex::with("sirIUS");

        assert_eq!(sirius, other);
        assert_eq!(hash_of(&sirius), hash_of(&other));
    }

    #[test]
    fn test_whitespace_is_preserved() {
        assert_eq!(Vertex::with(" ").label(), " ");
        assert_eq!(Vertex::with(""), Vertex::with(""));
        assert_ne!(Vertex::with(" vega"), Vertex::with("vega"));
    }

    #[test]
    fn test_independent_vertices_dedupe_in_set() {
        let set: HashSet<Vertex> = ["Vega", "VEGA", "vega", "Sirius"]
            .into_iter()
            .map(Vertex::with)
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vertex::with("Vega").to_string(), "[Vertex: vega]");
    }
}
