use regex::Regex;
use std::fmt;
use std::ops::Range;

/// Lattice-size parameters recognised in a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Spatial extent along x
    X,
    /// Spatial extent along y
    Y,
    /// Spatial extent along z
    Z,
    /// Temporal extent
    T,
}

// Assignment patterns. The digits are captured so the composite token can be rebuilt.
use lazy_static::lazy_static;

lazy_static! {
    static ref GLOB_X: Regex = Regex::new(r"glob_x[ \t]*=[ \t]*([0-9]+)").unwrap();
    static ref GLOB_Y: Regex = Regex::new(r"glob_y[ \t]*=[ \t]*([0-9]+)").unwrap();
    static ref GLOB_Z: Regex = Regex::new(r"glob_z[ \t]*=[ \t]*([0-9]+)").unwrap();
    static ref GLOB_T: Regex = Regex::new(r"glob_t[ \t]*=[ \t]*([0-9]+)").unwrap();
}

impl Parameter {
    /// All parameters, in the order they are rewritten
    pub const ALL: [Parameter; 4] = [Parameter::X, Parameter::Y, Parameter::Z, Parameter::T];

    /// Name of the variable as it appears in the file
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::X => "glob_x",
            Parameter::Y => "glob_y",
            Parameter::Z => "glob_z",
            Parameter::T => "glob_t",
        }
    }

    /// Compiled `name = digits` pattern
    pub fn regex(&self) -> &'static Regex {
        match self {
            Parameter::X => &GLOB_X,
            Parameter::Y => &GLOB_Y,
            Parameter::Z => &GLOB_Z,
            Parameter::T => &GLOB_T,
        }
    }

    /// Whether this parameter takes the temporal replacement value
    pub fn is_temporal(&self) -> bool {
        matches!(self, Parameter::T)
    }

    /// Canonical assignment text for a new value
    pub fn assignment(&self, value: &str) -> String {
        format!("{} = {}", self.name(), value)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A located `name = digits` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Which parameter was matched
    pub parameter: Parameter,
    /// Byte range of the whole assignment in the searched text
    pub span: Range<usize>,
    /// Full matched text, e.g. `glob_x  =  16`
    pub text: String,
    /// The integer literal exactly as written
    pub value: String,
}

/// Finds the first assignment of `parameter` in `text`
pub fn find_assignment(parameter: Parameter, text: &str) -> Option<Assignment> {
    let caps = parameter.regex().captures(text)?;
    let whole = caps.get(0)?;
    let digits = caps.get(1)?;

    Some(Assignment {
        parameter,
        span: whole.range(),
        text: whole.as_str().to_string(),
        value: digits.as_str().to_string(),
    })
}
