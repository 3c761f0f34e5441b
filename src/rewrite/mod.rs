//! In-place rewriting of lattice-size parameters.
//!
//! Four assignments are recognised (`glob_x`, `glob_y`, `glob_z`, `glob_t`), each
//! replaced at most once, plus the composite `XcT` token used in file and run names.

pub mod diff;
pub mod pattern;
pub mod splice;

pub use diff::{changed_lines, LineChange};
pub use pattern::{find_assignment, Assignment, Parameter};
pub use splice::{replace_first_literal, splice_range};

use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::error::ChangeSizeResult;
use crate::utils::fs::{read_file_to_string, write_file_sync};

/// The two replacement values supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteValues {
    /// Used for glob_x, glob_y and glob_z
    pub spatial: String,
    /// Used for glob_t
    pub temporal: String,
}

impl RewriteValues {
    pub fn new(spatial: impl Into<String>, temporal: impl Into<String>) -> Self {
        Self {
            spatial: spatial.into(),
            temporal: temporal.into(),
        }
    }

    /// Value a parameter is rewritten to
    pub fn value_for(&self, parameter: Parameter) -> &str {
        if parameter.is_temporal() {
            &self.temporal
        } else {
            &self.spatial
        }
    }

    /// Composite `XcT` token built from the replacement values
    pub fn composite(&self) -> String {
        composite_token(&self.spatial, &self.temporal)
    }
}

/// Builds the `<x>c<t>` token
pub fn composite_token(x: &str, t: &str) -> String {
    format!("{}c{}", x, t)
}

/// What a substitution touched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Parameter(Parameter),
    Composite,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Target::Parameter(p) => write!(f, "{}", p),
            Target::Composite => f.write_str("composite token"),
        }
    }
}

/// A single applied edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub target: Target,
    pub old: String,
    pub new: String,
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: '{}' -> '{}'", self.target, self.old, self.new)
    }
}

/// Result of a rewrite
#[derive(Debug, Clone)]
pub struct RewriteResult {
    /// Rewritten content
    pub content: String,
    /// Edits that were applied, in order
    pub substitutions: Vec<Substitution>,
    /// Non-fatal notes generated while rewriting
    pub notes: Vec<String>,
    /// Whether the content differs from the input
    pub changes_made: bool,
}

impl RewriteResult {
    /// Whether a given target was rewritten
    pub fn touched(&self, target: Target) -> bool {
        self.substitutions.iter().any(|s| s.target == target)
    }
}

/// Rewrites the parameters of `content`.
///
/// Steps run in a fixed order (x, y, z, t, composite). A step runs only if its
/// assignment exists in the untouched input, and then splices the first match in
/// the buffer left by the previous step. The composite token is built from the values
/// found in the untouched input and only replaced if that literal text still
/// appears after the four primary edits.
pub fn rewrite(content: &str, values: &RewriteValues) -> RewriteResult {
    let original_x = find_assignment(Parameter::X, content);
    let original_t = find_assignment(Parameter::T, content);

    let mut buffer = content.to_string();
    let mut substitutions = Vec::new();
    let mut notes = Vec::new();

    for parameter in Parameter::ALL {
        // Presence is judged on the input so an inserted value cannot enable a later step.
        if find_assignment(parameter, content).is_none() {
            debug!("No assignment for {}, skipping", parameter);
            continue;
        }
        let Some(found) = find_assignment(parameter, &buffer) else {
            debug!("Assignment for {} no longer present, skipping", parameter);
            continue;
        };

        let replacement = parameter.assignment(values.value_for(parameter));
        debug!(
            "Replacing '{}' at bytes {}..{} with '{}'",
            found.text, found.span.start, found.span.end, replacement
        );
        buffer = splice_range(&buffer, found.span.clone(), &replacement);
        substitutions.push(Substitution {
            target: Target::Parameter(parameter),
            old: found.text,
            new: replacement,
        });
    }

    if let (Some(x), Some(t)) = (&original_x, &original_t) {
        let old_token = composite_token(&x.value, &t.value);
        let new_token = values.composite();

        match replace_first_literal(&buffer, &old_token, &new_token) {
            Some(updated) => {
                debug!("Replacing composite token '{}' with '{}'", old_token, new_token);
                buffer = updated;
                substitutions.push(Substitution {
                    target: Target::Composite,
                    old: old_token,
                    new: new_token,
                });
            }
            None => {
                debug!("Composite token '{}' not present", old_token);
                notes.push(format!(
                    "Composite token '{}' not found after rewriting; left unchanged",
                    old_token
                ));
            }
        }
    }

    let changes_made = buffer != content;
    RewriteResult {
        content: buffer,
        substitutions,
        notes,
        changes_made,
    }
}

/// Reads `path`, rewrites it, and writes the result back over the same file
pub fn rewrite_file(path: impl AsRef<Path>, values: &RewriteValues) -> ChangeSizeResult<RewriteResult> {
    let path = path.as_ref();
    let content = read_file_to_string(path)?;

    let result = rewrite(&content, values);

    if tracing::enabled!(tracing::Level::DEBUG) {
        for line in changed_lines(&content, &result.content) {
            debug!("{}", line);
        }
    }

    write_file_sync(path, &result.content)?;

    info!(
        "Rewrote {} ({} substitution(s))",
        path.display(),
        result.substitutions.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn values(spatial: &str, temporal: &str) -> RewriteValues {
        RewriteValues::new(spatial, temporal)
    }

    #[test]
    fn test_rewrite_single_parameter() {
        let result = rewrite("glob_x = 5\n", &values("9", "3"));
        assert_eq!(result.content, "glob_x = 9\n");
        assert!(result.changes_made);
        assert_eq!(result.substitutions.len(), 1);
        assert_eq!(result.substitutions[0].old, "glob_x = 5");
    }

    #[test]
    fn test_rewrite_all_parameters_and_composite() {
        let content = "glob_x = 5\nglob_y = 5\nglob_z = 5\nglob_t = 2\nname = conf_5c2.dat\n";
        let result = rewrite(content, &values("9", "3"));

        assert_eq!(
            result.content,
            "glob_x = 9\nglob_y = 9\nglob_z = 9\nglob_t = 3\nname = conf_9c3.dat\n"
        );
        assert!(result.touched(Target::Composite));
        assert!(result.notes.is_empty());
        assert_eq!(result.substitutions.len(), 5);
    }

    #[test]
    fn test_spacing_is_normalised() {
        let result = rewrite("glob_t=12\nglob_y   =\t4\n", &values("6", "24"));
        assert_eq!(result.content, "glob_t = 24\nglob_y = 6\n");
    }

    #[test]
    fn test_absent_parameter_is_not_inserted() {
        let content = "glob_x = 4\nglob_z = 4\n";
        let result = rewrite(content, &values("8", "16"));

        assert_eq!(result.content, "glob_x = 8\nglob_z = 8\n");
        assert!(!result.content.contains("glob_y"));
        assert!(!result.touched(Target::Parameter(Parameter::Y)));
        // no glob_t in the input, so the composite step never runs
        assert!(result.notes.is_empty());
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let content = "glob_z = 4\nglob_z = 4\nglob_z = 7\n";
        let result = rewrite(content, &values("8", "16"));
        assert_eq!(result.content, "glob_z = 8\nglob_z = 4\nglob_z = 7\n");
    }

    #[test]
    fn test_only_first_composite_is_replaced() {
        let content = "glob_x = 4\nglob_t = 8\nin = 4c8\nout = 4c8\n";
        let result = rewrite(content, &values("6", "12"));
        assert_eq!(
            result.content,
            "glob_x = 6\nglob_t = 12\nin = 6c12\nout = 4c8\n"
        );
    }

    #[test]
    fn test_missing_composite_is_noted() {
        let content = "glob_x = 4\nglob_t = 8\n";
        let result = rewrite(content, &values("6", "12"));
        assert_eq!(result.content, "glob_x = 6\nglob_t = 12\n");
        assert!(!result.touched(Target::Composite));
        assert_eq!(result.notes.len(), 1);
        assert!(result.notes[0].contains("4c8"));
    }

    #[test]
    fn test_composite_searches_modified_buffer() {
        // The old token "4c8" only exists after the glob_x edit inserts it.
        let content = "glob_x = 4\nglob_t = 8\n";
        let result = rewrite(content, &values("4c8", "8"));
        assert_eq!(result.content, "glob_x = 4c8c8\nglob_t = 8\n");
        assert!(result.touched(Target::Composite));
    }

    #[test]
    fn test_inserted_value_does_not_enable_later_step() {
        let content = "glob_x = 2\n";
        let result = rewrite(content, &values("4\nglob_t = 1", "9"));

        assert_eq!(result.content, "glob_x = 4\nglob_t = 1\n");
        assert!(!result.touched(Target::Parameter(Parameter::T)));
        assert_eq!(result.substitutions.len(), 1);
    }

    #[test]
    fn test_values_are_inserted_verbatim() {
        let result = rewrite("glob_y = 2\n", &values("N_s", "N_t"));
        assert_eq!(result.content, "glob_y = N_s\n");
    }

    #[test]
    fn test_unmatched_input_is_unchanged() {
        let content = "beta = 5.6\nkappa = 0.1575\n";
        let result = rewrite(content, &values("8", "16"));
        assert_eq!(result.content, content);
        assert!(!result.changes_made);
        assert!(result.substitutions.is_empty());
    }

    #[test]
    fn test_rewrite_is_idempotent_for_primary_patterns() {
        let content = "glob_x = 5\nglob_y = 5\nglob_z = 5\nglob_t = 2\ntag 5c2\n";
        let v = values("9", "3");

        let first = rewrite(content, &v);
        let second = rewrite(&first.content, &v);
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_rewrite_file_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lattice.in");
        std::fs::write(&path, "glob_x = 5\nglob_t = 2\nout = run_5c2\n").unwrap();

        let result = rewrite_file(&path, &values("9", "3")).unwrap();
        assert!(result.changes_made);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "glob_x = 9\nglob_t = 3\nout = run_9c3\n");
    }

    #[test]
    fn test_rewrite_file_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.in");

        let err = rewrite_file(&path, &values("9", "3")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ChangeSizeError::Io { path: Some(ref p), .. } if *p == path
        ));
        assert!(!path.exists());
    }
}
