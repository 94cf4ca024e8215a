#![allow(dead_code)]

//! Test harness: an in-memory `SportsRepository` with the same observable
//! behaviour as the PostgreSQL one (foreign keys, not-found on zero rows,
//! statistics removed with their player), and a helper that serves the real
//! router on an ephemeral port.

use async_trait::async_trait;
use core_types::{
    CambiosJugador, Deporte, Equipo, Estadistica, Id, Jugador, NuevaEstadistica, NuevoDeporte,
    NuevoEquipo, NuevoJugador,
};
use database::{DbError, SportsRepository};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use web_server::AppState;

pub const ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Default)]
struct Tables {
    next_id: Id,
    writes: usize,
    broken: bool,
    deportes: BTreeMap<Id, NuevoDeporte>,
    equipos: BTreeMap<Id, NuevoEquipo>,
    jugadores: BTreeMap<Id, NuevoJugador>,
    estadisticas: BTreeMap<Id, NuevaEstadistica>,
}

impl Tables {
    fn next_id(&mut self) -> Id {
        self.next_id += 1;
        self.next_id
    }

    fn check(&self) -> Result<(), DbError> {
        if self.broken {
            Err(DbError::CorruptRow("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn equipo(&self, id: Id, e: &NuevoEquipo) -> Option<Equipo> {
        let deporte = self.deportes.get(&e.id_deporte)?;
        Some(Equipo {
            id,
            nombre: e.nombre.clone(),
            logo: e.logo.clone(),
            pais: e.pais.clone(),
            ciudad: e.ciudad.clone(),
            estadio_arena: e.estadio_arena.clone(),
            anio_fundacion: e.anio_fundacion,
            numero_campeonatos: e.numero_campeonatos,
            id_deporte: e.id_deporte,
            deporte_nombre: deporte.nombre.clone(),
        })
    }

    fn jugador(&self, id: Id, j: &NuevoJugador) -> Jugador {
        let equipo = self.equipos.get(&j.id_equipo);
        Jugador {
            id,
            nombre: j.nombre.clone(),
            posicion: j.posicion.clone(),
            nacionalidad: j.nacionalidad.clone(),
            imagen: j.imagen.clone(),
            id_equipo: j.id_equipo,
            nombre_equipo: equipo.map(|e| e.nombre.clone()),
            id_deporte: equipo.map(|e| e.id_deporte),
            tipo: j.tipo.clone(),
        }
    }

    fn estadistica(&self, id: Id, s: &NuevaEstadistica) -> Option<Estadistica> {
        let jugador = self.jugadores.get(&s.id_jugador)?;
        Some(Estadistica {
            id,
            id_jugador: s.id_jugador,
            tipo_estadistica: s.tipo_estadistica.clone(),
            valor: s.valor,
            jugador_nombre: jugador.nombre.clone(),
        })
    }

    fn jugadores_where(&self, keep: impl Fn(&NuevoJugador) -> bool) -> Vec<Jugador> {
        let mut jugadores: Vec<Jugador> = self
            .jugadores
            .iter()
            .filter(|(_, j)| keep(j))
            .map(|(id, j)| self.jugador(*id, j))
            .collect();
        jugadores.sort_by(|a, b| a.nombre.cmp(&b.nombre).then(a.id.cmp(&b.id)));
        jugadores
    }
}

fn fk(constraint: &str) -> DbError {
    DbError::ForeignKeyViolation(constraint.to_string())
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRepository {
    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Number of successful mutations so far.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// Makes every subsequent call fail with an internal error.
    pub fn break_storage(&self) {
        self.lock().broken = true;
    }

    pub fn player_count(&self) -> usize {
        self.lock().jugadores.len()
    }

    pub fn statistic_count(&self) -> usize {
        self.lock().estadisticas.len()
    }
}

#[async_trait]
impl SportsRepository for MemoryRepository {
    async fn ping(&self) -> Result<(), DbError> {
        self.lock().check()
    }

    async fn list_deportes(&self) -> Result<Vec<Deporte>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.deportes
            .iter()
            .map(|(id, d)| Deporte {
                id: *id,
                nombre: d.nombre.clone(),
            })
            .collect())
    }

    async fn get_deporte(&self, id: Id) -> Result<Deporte, DbError> {
        let t = self.lock();
        t.check()?;
        t.deportes
            .get(&id)
            .map(|d| Deporte {
                id,
                nombre: d.nombre.clone(),
            })
            .ok_or(DbError::NotFound)
    }

    async fn create_deporte(&self, deporte: &NuevoDeporte) -> Result<Id, DbError> {
        let mut t = self.lock();
        t.check()?;
        let id = t.next_id();
        t.deportes.insert(id, deporte.clone());
        t.writes += 1;
        Ok(id)
    }

    async fn update_deporte(&self, id: Id, deporte: &NuevoDeporte) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        let slot = t.deportes.get_mut(&id).ok_or(DbError::NotFound)?;
        *slot = deporte.clone();
        t.writes += 1;
        Ok(())
    }

    async fn delete_deporte(&self, id: Id) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.deportes.contains_key(&id) {
            return Err(DbError::NotFound);
        }
        if t.equipos.values().any(|e| e.id_deporte == id) {
            return Err(fk("equipo_id_deporte_fkey"));
        }
        t.deportes.remove(&id);
        t.writes += 1;
        Ok(())
    }

    async fn list_equipos(&self) -> Result<Vec<Equipo>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.equipos
            .iter()
            .filter_map(|(id, e)| t.equipo(*id, e))
            .collect())
    }

    async fn get_equipo(&self, id: Id) -> Result<Equipo, DbError> {
        let t = self.lock();
        t.check()?;
        t.equipos
            .get(&id)
            .and_then(|e| t.equipo(id, e))
            .ok_or(DbError::NotFound)
    }

    async fn create_equipo(&self, equipo: &NuevoEquipo) -> Result<Id, DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.deportes.contains_key(&equipo.id_deporte) {
            return Err(fk("equipo_id_deporte_fkey"));
        }
        let id = t.next_id();
        t.equipos.insert(id, equipo.clone());
        t.writes += 1;
        Ok(id)
    }

    async fn update_equipo(&self, id: Id, equipo: &NuevoEquipo) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.equipos.contains_key(&id) {
            return Err(DbError::NotFound);
        }
        if !t.deportes.contains_key(&equipo.id_deporte) {
            return Err(fk("equipo_id_deporte_fkey"));
        }
        t.equipos.insert(id, equipo.clone());
        t.writes += 1;
        Ok(())
    }

    async fn delete_equipo(&self, id: Id) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.equipos.contains_key(&id) {
            return Err(DbError::NotFound);
        }
        if t.jugadores.values().any(|j| j.id_equipo == id) {
            return Err(fk("jugador_id_equipo_fkey"));
        }
        t.equipos.remove(&id);
        t.writes += 1;
        Ok(())
    }

    async fn list_jugadores(&self) -> Result<Vec<Jugador>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.jugadores_where(|_| true))
    }

    async fn list_jugadores_por_equipo(&self, id_equipo: Id) -> Result<Vec<Jugador>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.jugadores_where(|j| j.id_equipo == id_equipo))
    }

    async fn get_jugador(&self, id: Id) -> Result<Jugador, DbError> {
        let t = self.lock();
        t.check()?;
        t.jugadores
            .get(&id)
            .map(|j| t.jugador(id, j))
            .ok_or(DbError::NotFound)
    }

    async fn create_jugador(&self, jugador: &NuevoJugador) -> Result<Id, DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.equipos.contains_key(&jugador.id_equipo) {
            return Err(fk("jugador_id_equipo_fkey"));
        }
        let id = t.next_id();
        t.jugadores.insert(id, jugador.clone());
        t.writes += 1;
        Ok(id)
    }

    async fn update_jugador(&self, id: Id, cambios: &CambiosJugador) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.jugadores.contains_key(&id) {
            return Err(DbError::NotFound);
        }
        if let Some(id_equipo) = cambios.id_equipo {
            if !t.equipos.contains_key(&id_equipo) {
                return Err(fk("jugador_id_equipo_fkey"));
            }
        }
        let jugador = t.jugadores.get_mut(&id).ok_or(DbError::NotFound)?;
        if let Some(nombre) = &cambios.nombre {
            jugador.nombre = nombre.clone();
        }
        if let Some(posicion) = &cambios.posicion {
            jugador.posicion = Some(posicion.clone());
        }
        if let Some(nacionalidad) = &cambios.nacionalidad {
            jugador.nacionalidad = Some(nacionalidad.clone());
        }
        if let Some(imagen) = &cambios.imagen {
            jugador.imagen = Some(imagen.clone());
        }
        if let Some(id_equipo) = cambios.id_equipo {
            jugador.id_equipo = id_equipo;
        }
        jugador.tipo = cambios.tipo.clone();
        t.writes += 1;
        Ok(())
    }

    async fn delete_jugador(&self, id: Id) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if t.jugadores.remove(&id).is_none() {
            return Err(DbError::NotFound);
        }
        t.estadisticas.retain(|_, s| s.id_jugador != id);
        t.writes += 1;
        Ok(())
    }

    async fn list_estadisticas(&self) -> Result<Vec<Estadistica>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.estadisticas
            .iter()
            .filter_map(|(id, s)| t.estadistica(*id, s))
            .collect())
    }

    async fn list_estadisticas_por_jugador(
        &self,
        id_jugador: Id,
    ) -> Result<Vec<Estadistica>, DbError> {
        let t = self.lock();
        t.check()?;
        Ok(t.estadisticas
            .iter()
            .filter(|(_, s)| s.id_jugador == id_jugador)
            .filter_map(|(id, s)| t.estadistica(*id, s))
            .collect())
    }

    async fn get_estadistica(&self, id: Id) -> Result<Estadistica, DbError> {
        let t = self.lock();
        t.check()?;
        t.estadisticas
            .get(&id)
            .and_then(|s| t.estadistica(id, s))
            .ok_or(DbError::NotFound)
    }

    async fn create_estadistica(&self, estadistica: &NuevaEstadistica) -> Result<Id, DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.jugadores.contains_key(&estadistica.id_jugador) {
            return Err(fk("estadisticas_id_jugador_fkey"));
        }
        let id = t.next_id();
        t.estadisticas.insert(id, estadistica.clone());
        t.writes += 1;
        Ok(id)
    }

    async fn update_estadistica(
        &self,
        id: Id,
        estadistica: &NuevaEstadistica,
    ) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if !t.estadisticas.contains_key(&id) {
            return Err(DbError::NotFound);
        }
        if !t.jugadores.contains_key(&estadistica.id_jugador) {
            return Err(fk("estadisticas_id_jugador_fkey"));
        }
        t.estadisticas.insert(id, estadistica.clone());
        t.writes += 1;
        Ok(())
    }

    async fn delete_estadistica(&self, id: Id) -> Result<(), DbError> {
        let mut t = self.lock();
        t.check()?;
        if t.estadisticas.remove(&id).is_none() {
            return Err(DbError::NotFound);
        }
        t.writes += 1;
        Ok(())
    }
}

/// Serves the real router over `repo` on an ephemeral local port and
/// returns its base URL.
pub async fn spawn_app(repo: MemoryRepository) -> String {
    let app = web_server::app(AppState::new(repo), ORIGIN).unwrap();
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}
