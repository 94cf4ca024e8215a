//! # Deportes Core Types
//!
//! The shared vocabulary of the workspace: the read models returned by the
//! API (`Deporte`, `Equipo`, `Jugador`, `Estadistica`), the request payloads
//! accepted by it, and the presence validation that turns a payload into a
//! value the database layer can persist.
//!
//! Every type keeps the PascalCase wire names of the public JSON API
//! (`ID`, `Nombre`, `ID_Equipo`, ...), so the same structs are used by the
//! server and by the API client.

pub mod decimal;
pub mod enums;
pub mod error;
pub mod payloads;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::TipoJugador;
pub use error::CoreError;
pub use payloads::{
    CambiosJugador, DeporteInput, EquipoInput, EstadisticaInput, JugadorInput, NuevaEstadistica,
    NuevoDeporte, NuevoEquipo, NuevoJugador,
};
pub use structs::{
    Deporte, Equipo, Estadistica, Id, Jugador, JugadorActual, JugadorHistorico, PlayerKind,
};
