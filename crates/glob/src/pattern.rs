use std::path::PathBuf;

const GLOB_META_CHARS: &[char] = &['*', '?', '[', '{'];

fn is_separator(char: char) -> bool {
    char == '/' || (cfg!(windows) && char == '\\')
}

fn has_glob_meta(segment: &str) -> bool {
    segment.contains(GLOB_META_CHARS)
}

fn is_explicit_dot(segment: &str) -> bool {
    segment.starts_with('.') && segment != "." && segment != ".."
}

/// A glob pattern split into the literal directory to walk from and the part to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    /// Whether the pattern started with `!`.
    pub negated: bool,
    /// Leading segments without glob syntax. Absolute when the pattern is absolute.
    pub base: PathBuf,
    /// Remaining segments joined by `/`, or `None` for a fully literal pattern.
    pub glob: Option<String>,
    /// Number of segments in `glob` that explicitly start with `.`.
    pub explicit_dots: usize,
    /// Deepest level the walk needs to reach, `None` when `**` is involved.
    pub max_depth: Option<usize>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let (negated, body) = match raw.strip_prefix('!') {
            Some(body) => (true, body),
            None => (false, raw),
        };

        let mut base = PathBuf::new();
        if body.starts_with(is_separator) {
            base.push(std::path::MAIN_SEPARATOR_STR);
        }

        let mut glob_segments = Vec::new();
        for (index, segment) in body.split(is_separator).enumerate() {
            if segment.is_empty() || segment == "." {
                continue;
            }
            if !glob_segments.is_empty() || has_glob_meta(segment) {
                glob_segments.push(segment);
                continue;
            }
            if cfg!(windows) && index == 0 && segment.ends_with(':') {
                base.push(format!("{segment}{}", std::path::MAIN_SEPARATOR));
                continue;
            }
            base.push(segment);
        }

        if glob_segments.is_empty() {
            return Pattern { negated, base, glob: None, explicit_dots: 0, max_depth: Some(0) };
        }

        let explicit_dots = glob_segments.iter().filter(|segment| is_explicit_dot(segment)).count();
        let max_depth = if glob_segments.iter().any(|segment| segment.contains("**")) {
            None
        } else {
            Some(glob_segments.len())
        };

        Pattern { negated, base, glob: Some(glob_segments.join("/")), explicit_dots, max_depth }
    }

    /// The pattern as matched against a whole matched path, used for exclusions.
    pub fn full_glob(&self) -> String {
        let base = self.base.to_string_lossy().replace('\\', "/");
        match (&self.glob, base.is_empty()) {
            (Some(glob), true) => glob.clone(),
            (Some(glob), false) => format!("{}/{glob}", base.trim_end_matches('/')),
            (None, _) => base,
        }
    }
}
