//! Request payloads accepted by the API and their validated forms.
//!
//! Payload structs are deliberately loose (every field optional) so that a
//! request with missing fields still deserializes and can be answered with a
//! precise list of violations instead of a generic parse failure. The
//! `validate*` methods are the only way to obtain the strict `Nuevo*` /
//! `Cambios*` values that the repository accepts.

use crate::error::CoreError;
use crate::structs::{Id, JugadorActual, JugadorHistorico, PlayerKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A string field counts as present only if it has non-blank content.
fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// --- Deporte ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeporteInput {
    #[serde(rename = "Nombre", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NuevoDeporte {
    pub nombre: String,
}

impl DeporteInput {
    pub fn validate(self) -> Result<NuevoDeporte, CoreError> {
        match non_blank(self.nombre) {
            Some(nombre) => Ok(NuevoDeporte { nombre }),
            None => Err(CoreError::missing("El nombre es requerido")),
        }
    }
}

// --- Equipo ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipoInput {
    #[serde(rename = "Nombre", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(rename = "Logo", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(rename = "Pais", skip_serializing_if = "Option::is_none")]
    pub pais: Option<String>,
    #[serde(rename = "Ciudad", skip_serializing_if = "Option::is_none")]
    pub ciudad: Option<String>,
    #[serde(rename = "EstadioArena", skip_serializing_if = "Option::is_none")]
    pub estadio_arena: Option<String>,
    #[serde(rename = "AnioFundacion", skip_serializing_if = "Option::is_none")]
    pub anio_fundacion: Option<i32>,
    #[serde(rename = "NumeroCampeonatos", skip_serializing_if = "Option::is_none")]
    pub numero_campeonatos: Option<i32>,
    #[serde(rename = "ID_Deporte", skip_serializing_if = "Option::is_none")]
    pub id_deporte: Option<Id>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NuevoEquipo {
    pub nombre: String,
    pub logo: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub estadio_arena: Option<String>,
    pub anio_fundacion: Option<i32>,
    pub numero_campeonatos: Option<i32>,
    pub id_deporte: Id,
}

impl EquipoInput {
    /// Used for both create and update: a team always needs a name and a sport.
    pub fn validate(self) -> Result<NuevoEquipo, CoreError> {
        let (Some(nombre), Some(id_deporte)) = (non_blank(self.nombre), self.id_deporte) else {
            return Err(CoreError::missing("Nombre y ID_Deporte son requeridos"));
        };
        Ok(NuevoEquipo {
            nombre,
            logo: self.logo,
            pais: self.pais,
            ciudad: self.ciudad,
            estadio_arena: self.estadio_arena,
            anio_fundacion: self.anio_fundacion,
            numero_campeonatos: self.numero_campeonatos,
            id_deporte,
        })
    }
}

// --- Estadistica ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstadisticaInput {
    #[serde(rename = "ID_Jugador", skip_serializing_if = "Option::is_none")]
    pub id_jugador: Option<Id>,
    #[serde(rename = "TipoEstadistica", skip_serializing_if = "Option::is_none")]
    pub tipo_estadistica: Option<String>,
    #[serde(
        rename = "Valor",
        default,
        with = "crate::decimal::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub valor: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NuevaEstadistica {
    pub id_jugador: Id,
    pub tipo_estadistica: String,
    pub valor: Decimal,
}

impl EstadisticaInput {
    pub fn validate(self) -> Result<NuevaEstadistica, CoreError> {
        match (self.id_jugador, non_blank(self.tipo_estadistica), self.valor) {
            (Some(id_jugador), Some(tipo_estadistica), Some(valor)) => Ok(NuevaEstadistica {
                id_jugador,
                tipo_estadistica,
                valor,
            }),
            _ => Err(CoreError::missing(
                "ID_Jugador, TipoEstadistica y Valor son requeridos",
            )),
        }
    }
}

// --- Jugador ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JugadorInput {
    #[serde(rename = "Nombre", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(rename = "Posicion", skip_serializing_if = "Option::is_none")]
    pub posicion: Option<String>,
    #[serde(rename = "Nacionalidad", skip_serializing_if = "Option::is_none")]
    pub nacionalidad: Option<String>,
    #[serde(rename = "Imagen", skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,
    #[serde(rename = "ID_Equipo", skip_serializing_if = "Option::is_none")]
    pub id_equipo: Option<Id>,
    #[serde(rename = "esJugadorActual", skip_serializing_if = "Option::is_none")]
    pub es_jugador_actual: Option<bool>,
    #[serde(rename = "NumeroCamiseta", skip_serializing_if = "Option::is_none")]
    pub numero_camiseta: Option<i32>,
    #[serde(rename = "Edad", skip_serializing_if = "Option::is_none")]
    pub edad: Option<i32>,
    #[serde(
        rename = "Altura",
        default,
        with = "crate::decimal::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub altura: Option<Decimal>,
    #[serde(
        rename = "Peso",
        default,
        with = "crate::decimal::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub peso: Option<Decimal>,
    #[serde(rename = "Universidad", skip_serializing_if = "Option::is_none")]
    pub universidad: Option<String>,
    #[serde(rename = "AniosActivos", skip_serializing_if = "Option::is_none")]
    pub anios_activos: Option<String>,
    #[serde(rename = "LogroPrincipal", skip_serializing_if = "Option::is_none")]
    pub logro_principal: Option<String>,
}

/// A validated player ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NuevoJugador {
    pub nombre: String,
    pub posicion: Option<String>,
    pub nacionalidad: Option<String>,
    pub imagen: Option<String>,
    pub id_equipo: Id,
    pub tipo: PlayerKind,
}

/// A validated player update. `None` base fields keep their stored value;
/// the kind is always replaced as a whole.
#[derive(Debug, Clone, PartialEq)]
pub struct CambiosJugador {
    pub nombre: Option<String>,
    pub posicion: Option<String>,
    pub nacionalidad: Option<String>,
    pub imagen: Option<String>,
    pub id_equipo: Option<Id>,
    pub tipo: PlayerKind,
}

impl JugadorInput {
    pub fn validate_create(self) -> Result<NuevoJugador, CoreError> {
        let mut errores = Vec::new();
        if !present(&self.nombre) {
            errores.push("El nombre es requerido".to_string());
        }
        if self.id_equipo.is_none() {
            errores.push("El ID del equipo es requerido".to_string());
        }
        if self.es_jugador_actual.is_none() {
            errores.push("Es necesario especificar si es jugador actual".to_string());
        }
        self.check_kind_fields(&mut errores);
        if !errores.is_empty() {
            return Err(invalid_player(errores));
        }

        let tipo = self.kind()?;
        match (non_blank(self.nombre), self.id_equipo) {
            (Some(nombre), Some(id_equipo)) => Ok(NuevoJugador {
                nombre,
                posicion: self.posicion,
                nacionalidad: self.nacionalidad,
                imagen: self.imagen,
                id_equipo,
                tipo,
            }),
            _ => Err(invalid_player(vec!["El nombre es requerido".to_string()])),
        }
    }

    /// An update only requires the fields of the kind the player is being set to.
    /// An absent `esJugadorActual` selects the historical kind.
    pub fn validate_update(self) -> Result<CambiosJugador, CoreError> {
        let mut errores = Vec::new();
        if self.nombre.is_some() && !present(&self.nombre) {
            errores.push("El nombre es requerido".to_string());
        }
        self.check_kind_fields(&mut errores);
        if !errores.is_empty() {
            return Err(invalid_player(errores));
        }

        let tipo = self.kind()?;
        Ok(CambiosJugador {
            nombre: non_blank(self.nombre),
            posicion: self.posicion,
            nacionalidad: self.nacionalidad,
            imagen: self.imagen,
            id_equipo: self.id_equipo,
            tipo,
        })
    }

    fn is_current(&self) -> bool {
        self.es_jugador_actual.unwrap_or(false)
    }

    fn check_kind_fields(&self, errores: &mut Vec<String>) {
        if self.is_current() {
            if self.numero_camiseta.is_none() {
                errores.push("El número de camiseta es requerido".to_string());
            }
            if self.edad.is_none() {
                errores.push("La edad es requerida".to_string());
            }
        } else if !present(&self.anios_activos) {
            errores.push("Los años activos son requeridos".to_string());
        }
    }

    fn kind(&self) -> Result<PlayerKind, CoreError> {
        if self.is_current() {
            match (self.numero_camiseta, self.edad) {
                (Some(numero_camiseta), Some(edad)) => Ok(PlayerKind::Actual(JugadorActual {
                    numero_camiseta,
                    edad,
                    altura: self.altura,
                    peso: self.peso,
                    universidad: self.universidad.clone(),
                })),
                _ => Err(invalid_player(vec![
                    "El número de camiseta es requerido".to_string(),
                ])),
            }
        } else {
            match non_blank(self.anios_activos.clone()) {
                Some(anios_activos) => Ok(PlayerKind::Historico(JugadorHistorico {
                    anios_activos,
                    logro_principal: self.logro_principal.clone(),
                })),
                None => Err(invalid_player(vec![
                    "Los años activos son requeridos".to_string(),
                ])),
            }
        }
    }
}

fn invalid_player(errores: Vec<String>) -> CoreError {
    CoreError::Validation {
        message: errores.join("; "),
        errores,
    }
}
