use std::{fmt, str::FromStr};

/// Selects the explicit update rule used by [`solve`](super::solve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Method {
    /// First-order forward Euler. See [`euler`](super::euler).
    #[default]
    Euler,

    /// Second-order Runge-Kutta (midpoint). See [`midpoint`](super::midpoint).
    Midpoint,

    /// Position Verlet with central-difference velocity. See [`verlet`](super::verlet).
    Verlet,
}

/// Error returned when a string names no known [`Method`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown integration method `{0}`, expected one of: euler, midpoint, rk2, verlet")]
pub struct ParseMethodError(String);

impl Method {
    /// All methods, in order of increasing accuracy on smooth problems.
    pub const ALL: [Method; 3] = [Method::Euler, Method::Midpoint, Method::Verlet];

    /// Order of the method's global error in the step size.
    #[must_use]
    pub fn order(self) -> u32 {
        match self {
            Method::Euler => 1,
            Method::Midpoint | Method::Verlet => 2,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Euler => "euler",
            Method::Midpoint => "midpoint",
            Method::Verlet => "verlet",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euler" => Ok(Method::Euler),
            "midpoint" | "rk2" => Ok(Method::Midpoint),
            "verlet" => Ok(Method::Verlet),
            _ => Err(ParseMethodError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("euler".parse(), Ok(Method::Euler));
        assert_eq!("RK2".parse(), Ok(Method::Midpoint));
        assert_eq!(" verlet ".parse(), Ok(Method::Verlet));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "rk4".parse::<Method>().unwrap_err();
        assert!(err.to_string().contains("rk4"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn euler_is_first_order() {
        assert_eq!(Method::Euler.order(), 1);
        assert_eq!(Method::Midpoint.order(), 2);
    }
}
