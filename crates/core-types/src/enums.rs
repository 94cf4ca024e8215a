use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The label of a player's kind, as exposed in the `TipoJugador` field and
/// stored in the `tipo_jugador` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoJugador {
    #[serde(rename = "Actual")]
    Actual,
    #[serde(rename = "Histórico")]
    Historico,
}

impl TipoJugador {
    pub const ALL: [TipoJugador; 2] = [TipoJugador::Actual, TipoJugador::Historico];

    pub fn as_str(&self) -> &'static str {
        match self {
            TipoJugador::Actual => "Actual",
            TipoJugador::Historico => "Histórico",
        }
    }
}

impl fmt::Display for TipoJugador {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipoJugador {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Actual" => Ok(TipoJugador::Actual),
            // The unaccented spelling is accepted too.
            "Histórico" | "Historico" => Ok(TipoJugador::Historico),
            other => Err(CoreError::InvalidValue(
                "TipoJugador".to_string(),
                other.to_string(),
            )),
        }
    }
}
