use crate::enums::TipoJugador;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Primary key type shared by every table.
pub type Id = i32;

/// A sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deporte {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "Nombre")]
    pub nombre: String,
}

/// A team, joined with the name of its sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipo {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Logo")]
    pub logo: Option<String>,
    #[serde(rename = "Pais")]
    pub pais: Option<String>,
    #[serde(rename = "Ciudad")]
    pub ciudad: Option<String>,
    #[serde(rename = "EstadioArena")]
    pub estadio_arena: Option<String>,
    #[serde(rename = "AnioFundacion")]
    pub anio_fundacion: Option<i32>,
    #[serde(rename = "NumeroCampeonatos")]
    pub numero_campeonatos: Option<i32>,
    #[serde(rename = "ID_Deporte")]
    pub id_deporte: Id,
    #[serde(rename = "DeporteNombre")]
    pub deporte_nombre: String,
}

/// A player, joined with its team. The kind-specific fields are flattened
/// next to the base fields and tagged by `TipoJugador`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jugador {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Posicion")]
    pub posicion: Option<String>,
    #[serde(rename = "Nacionalidad")]
    pub nacionalidad: Option<String>,
    #[serde(rename = "Imagen")]
    pub imagen: Option<String>,
    #[serde(rename = "ID_Equipo")]
    pub id_equipo: Id,
    #[serde(rename = "NombreEquipo")]
    pub nombre_equipo: Option<String>,
    #[serde(rename = "ID_Deporte")]
    pub id_deporte: Option<Id>,
    #[serde(flatten)]
    pub tipo: PlayerKind,
}

impl Jugador {
    pub fn tipo_jugador(&self) -> TipoJugador {
        self.tipo.tipo_jugador()
    }
}

/// A player is either still active or a historical figure, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "TipoJugador")]
pub enum PlayerKind {
    #[serde(rename = "Actual")]
    Actual(JugadorActual),
    #[serde(rename = "Histórico")]
    Historico(JugadorHistorico),
}

impl PlayerKind {
    pub fn tipo_jugador(&self) -> TipoJugador {
        match self {
            PlayerKind::Actual(_) => TipoJugador::Actual,
            PlayerKind::Historico(_) => TipoJugador::Historico,
        }
    }

    pub fn as_actual(&self) -> Option<&JugadorActual> {
        match self {
            PlayerKind::Actual(actual) => Some(actual),
            PlayerKind::Historico(_) => None,
        }
    }

    pub fn as_historico(&self) -> Option<&JugadorHistorico> {
        match self {
            PlayerKind::Historico(historico) => Some(historico),
            PlayerKind::Actual(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JugadorActual {
    #[serde(rename = "NumeroCamiseta")]
    pub numero_camiseta: i32,
    #[serde(rename = "Edad")]
    pub edad: i32,
    #[serde(
        rename = "Altura",
        default,
        with = "crate::decimal::float_option"
    )]
    pub altura: Option<Decimal>,
    #[serde(rename = "Peso", default, with = "crate::decimal::float_option")]
    pub peso: Option<Decimal>,
    #[serde(rename = "Universidad", default)]
    pub universidad: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JugadorHistorico {
    #[serde(rename = "AniosActivos")]
    pub anios_activos: String,
    #[serde(rename = "LogroPrincipal", default)]
    pub logro_principal: Option<String>,
}

/// A named statistic of a player, joined with the player's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estadistica {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "ID_Jugador")]
    pub id_jugador: Id,
    #[serde(rename = "TipoEstadistica")]
    pub tipo_estadistica: String,
    #[serde(rename = "Valor", with = "rust_decimal::serde::float")]
    pub valor: Decimal,
    #[serde(rename = "JugadorNombre")]
    pub jugador_nombre: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn jugador(tipo: PlayerKind) -> Jugador {
        Jugador {
            id: 7,
            nombre: "Michael Jordan".to_string(),
            posicion: Some("Escolta".to_string()),
            nacionalidad: Some("Estados Unidos".to_string()),
            imagen: None,
            id_equipo: 3,
            nombre_equipo: Some("Chicago Bulls".to_string()),
            id_deporte: Some(2),
            tipo,
        }
    }

    #[test]
    fn current_player_serializes_flat_with_tag() {
        let value = serde_json::to_value(jugador(PlayerKind::Actual(JugadorActual {
            numero_camiseta: 23,
            edad: 30,
            altura: Some(dec!(1.98)),
            peso: None,
            universidad: Some("North Carolina".to_string()),
        })))
        .unwrap();

        assert_eq!(value["TipoJugador"], json!("Actual"));
        assert_eq!(value["NumeroCamiseta"], json!(23));
        assert_eq!(value["Altura"], json!(1.98));
        assert_eq!(value["ID_Equipo"], json!(3));
        assert!(value.get("AniosActivos").is_none());
    }

    #[test]
    fn current_player_without_measurements_round_trips_through_json() {
        let original = jugador(PlayerKind::Actual(JugadorActual {
            numero_camiseta: 23,
            edad: 30,
            altura: None,
            peso: None,
            universidad: None,
        }));
        let text = serde_json::to_string(&original).unwrap();
        assert!(text.contains("\"Altura\":null"));

        let parsed: Jugador = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn current_player_measurements_parse_from_json_numbers() {
        let parsed: Jugador = serde_json::from_value(json!({
            "ID": 7,
            "Nombre": "Michael Jordan",
            "ID_Equipo": 3,
            "TipoJugador": "Actual",
            "NumeroCamiseta": 23,
            "Edad": 30,
            "Altura": 1.98,
            "Peso": 98
        }))
        .unwrap();

        let PlayerKind::Actual(actual) = parsed.tipo else {
            panic!("expected a current player");
        };
        assert_eq!(actual.altura, Some(dec!(1.98)));
        assert_eq!(actual.peso, Some(dec!(98)));
        assert_eq!(actual.universidad, None);
    }

    #[test]
    fn historical_player_round_trips_through_json() {
        let original = jugador(PlayerKind::Historico(JugadorHistorico {
            anios_activos: "1984-2003".to_string(),
            logro_principal: Some("6 anillos".to_string()),
        }));
        let text = serde_json::to_string(&original).unwrap();
        assert!(text.contains("\"TipoJugador\":\"Histórico\""));

        let parsed: Jugador = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.tipo_jugador(), TipoJugador::Historico);
    }

    #[test]
    fn statistic_value_is_a_json_number() {
        let stat = Estadistica {
            id: 1,
            id_jugador: 7,
            tipo_estadistica: "Puntos por partido".to_string(),
            valor: dec!(30.1),
            jugador_nombre: "Michael Jordan".to_string(),
        };
        let value = serde_json::to_value(&stat).unwrap();
        assert_eq!(value["Valor"], json!(30.1));
    }
}
