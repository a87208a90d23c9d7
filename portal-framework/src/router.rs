use std::collections::HashMap;

pub type Params = HashMap<String, String>;

/// A path pattern such as `/admin/:section`; `:name` segments capture.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    pattern: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();

        RoutePattern {
            pattern: pattern.to_string(),
            segments,
        }
    }

    /// Params captured from `path`, or `None` if it does not match.
    /// Matching is case sensitive and ignores empty segments.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path_segments: Vec<&str> = split(path).collect();

        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();

        for (pattern_seg, path_seg) in self.segments.iter().zip(path_segments) {
            match pattern_seg {
                Segment::Literal(lit) if lit != path_seg => return None,
                Segment::Literal(_) => {}
                Segment::Param(name) => {
                    params.insert(name.clone(), path_seg.to_string());
                }
            }
        }

        Some(params)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
