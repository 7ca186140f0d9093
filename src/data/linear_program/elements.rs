//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::Display;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Default for Objective {
    fn default() -> Self {
        Objective::Maximize
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        })
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::Objective;

    #[test]
    fn direction() {
        assert_eq!(Objective::default(), Objective::Maximize);
        assert_eq!(Objective::Maximize.to_string(), "max");
        assert_eq!(Objective::Minimize.to_string(), "min");
    }
}
