use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Congressional chamber.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chamber {
    /// US House of Representatives.
    #[serde(rename = "House of Representatives", alias = "House", alias = "house")]
    House,

    /// US Senate.
    #[serde(rename = "Senate", alias = "senate")]
    Senate,
}
impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Chamber::House => "House of Representatives",
                Chamber::Senate => "Senate",
            }
        )
    }
}
impl FromStr for Chamber {
    type Err = ();

    /// Accepts the short forms used on the command line as well as the
    /// chamber labels Congress.gov puts on member terms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" | "h" | "house of representatives" => Ok(Chamber::House),
            "senate" | "s" => Ok(Chamber::Senate),
            _ => Err(()),
        }
    }
}
