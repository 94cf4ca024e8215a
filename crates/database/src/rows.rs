//! Row shapes returned by the SQL queries and their conversion into the
//! domain types of `core-types`.

use crate::error::DbError;
use core_types::{
    Deporte, Equipo, Estadistica, Id, Jugador, JugadorActual, JugadorHistorico, PlayerKind,
    TipoJugador,
};
use rust_decimal::Decimal;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DbDeporte {
    pub id: Id,
    pub nombre: String,
}

impl From<DbDeporte> for Deporte {
    fn from(row: DbDeporte) -> Self {
        Deporte {
            id: row.id,
            nombre: row.nombre,
        }
    }
}

/// `equipo` joined with `deporte` for the sport name.
#[derive(Debug, Clone, FromRow)]
pub struct DbEquipo {
    pub id: Id,
    pub nombre: String,
    pub logo: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub estadio_arena: Option<String>,
    pub anio_fundacion: Option<i32>,
    pub numero_campeonatos: Option<i32>,
    pub id_deporte: Id,
    pub deporte_nombre: String,
}

impl From<DbEquipo> for Equipo {
    fn from(row: DbEquipo) -> Self {
        Equipo {
            id: row.id,
            nombre: row.nombre,
            logo: row.logo,
            pais: row.pais,
            ciudad: row.ciudad,
            estadio_arena: row.estadio_arena,
            anio_fundacion: row.anio_fundacion,
            numero_campeonatos: row.numero_campeonatos,
            id_deporte: row.id_deporte,
            deporte_nombre: row.deporte_nombre,
        }
    }
}

/// `jugador` left-joined with `equipo`. The kind columns are all nullable at
/// the SQL level; `tipo_jugador` says which of them are meaningful.
#[derive(Debug, Clone, FromRow)]
pub struct DbJugador {
    pub id: Id,
    pub nombre: String,
    pub posicion: Option<String>,
    pub nacionalidad: Option<String>,
    pub imagen: Option<String>,
    pub id_equipo: Id,
    pub nombre_equipo: Option<String>,
    pub id_deporte: Option<Id>,
    pub tipo_jugador: String,
    pub numero_camiseta: Option<i32>,
    pub edad: Option<i32>,
    pub altura: Option<Decimal>,
    pub peso: Option<Decimal>,
    pub universidad: Option<String>,
    pub anios_activos: Option<String>,
    pub logro_principal: Option<String>,
}

impl TryFrom<DbJugador> for Jugador {
    type Error = DbError;

    fn try_from(row: DbJugador) -> Result<Self, Self::Error> {
        let tipo_jugador: TipoJugador = row
            .tipo_jugador
            .parse()
            .map_err(|e| DbError::CorruptRow(format!("jugador {}: {}", row.id, e)))?;

        let tipo = match tipo_jugador {
            TipoJugador::Actual => match (row.numero_camiseta, row.edad) {
                (Some(numero_camiseta), Some(edad)) => PlayerKind::Actual(JugadorActual {
                    numero_camiseta,
                    edad,
                    altura: row.altura,
                    peso: row.peso,
                    universidad: row.universidad,
                }),
                _ => {
                    return Err(DbError::CorruptRow(format!(
                        "jugador {} is 'Actual' without NumeroCamiseta/Edad",
                        row.id
                    )));
                }
            },
            TipoJugador::Historico => match row.anios_activos {
                Some(anios_activos) => PlayerKind::Historico(JugadorHistorico {
                    anios_activos,
                    logro_principal: row.logro_principal,
                }),
                None => {
                    return Err(DbError::CorruptRow(format!(
                        "jugador {} is 'Histórico' without AniosActivos",
                        row.id
                    )));
                }
            },
        };

        Ok(Jugador {
            id: row.id,
            nombre: row.nombre,
            posicion: row.posicion,
            nacionalidad: row.nacionalidad,
            imagen: row.imagen,
            id_equipo: row.id_equipo,
            nombre_equipo: row.nombre_equipo,
            id_deporte: row.id_deporte,
            tipo,
        })
    }
}

/// `estadisticas` joined with `jugador` for the player name.
#[derive(Debug, Clone, FromRow)]
pub struct DbEstadistica {
    pub id: Id,
    pub id_jugador: Id,
    pub tipo_estadistica: String,
    pub valor: Decimal,
    pub jugador_nombre: String,
}

impl From<DbEstadistica> for Estadistica {
    fn from(row: DbEstadistica) -> Self {
        Estadistica {
            id: row.id,
            id_jugador: row.id_jugador,
            tipo_estadistica: row.tipo_estadistica,
            valor: row.valor,
            jugador_nombre: row.jugador_nombre,
        }
    }
}

/// The kind-specific columns of a `jugador` row, as bound in INSERT/UPDATE.
/// Columns of the other kind are always `None`, so writing a kind also
/// clears whatever the previous kind had stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KindColumns {
    pub tipo_jugador: &'static str,
    pub numero_camiseta: Option<i32>,
    pub edad: Option<i32>,
    pub altura: Option<Decimal>,
    pub peso: Option<Decimal>,
    pub universidad: Option<String>,
    pub anios_activos: Option<String>,
    pub logro_principal: Option<String>,
}

impl From<&PlayerKind> for KindColumns {
    fn from(kind: &PlayerKind) -> Self {
        match kind {
            PlayerKind::Actual(actual) => KindColumns {
                tipo_jugador: TipoJugador::Actual.as_str(),
                numero_camiseta: Some(actual.numero_camiseta),
                edad: Some(actual.edad),
                altura: actual.altura,
                peso: actual.peso,
                universidad: actual.universidad.clone(),
                ..Default::default()
            },
            PlayerKind::Historico(historico) => KindColumns {
                tipo_jugador: TipoJugador::Historico.as_str(),
                anios_activos: Some(historico.anios_activos.clone()),
                logro_principal: historico.logro_principal.clone(),
                ..Default::default()
            },
        }
    }
}
