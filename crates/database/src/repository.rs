use crate::rows::{DbDeporte, DbEquipo, DbEstadistica, DbJugador, KindColumns};
use crate::DbError;
use async_trait::async_trait;
use core_types::{
    CambiosJugador, Deporte, Equipo, Estadistica, Id, Jugador, NuevaEstadistica, NuevoDeporte,
    NuevoEquipo, NuevoJugador,
};
use sqlx::postgres::PgPool;

/// The data access contract the web layer is written against.
///
/// Lookups of a single row and writes addressed by id return
/// `DbError::NotFound` when no row matched. Writes that break a foreign key
/// return `DbError::ForeignKeyViolation`.
#[async_trait]
pub trait SportsRepository: Send + Sync {
    /// Cheap round trip used to check connectivity.
    async fn ping(&self) -> Result<(), DbError>;

    // --- Deporte ---
    async fn list_deportes(&self) -> Result<Vec<Deporte>, DbError>;
    async fn get_deporte(&self, id: Id) -> Result<Deporte, DbError>;
    async fn create_deporte(&self, deporte: &NuevoDeporte) -> Result<Id, DbError>;
    async fn update_deporte(&self, id: Id, deporte: &NuevoDeporte) -> Result<(), DbError>;
    async fn delete_deporte(&self, id: Id) -> Result<(), DbError>;

    // --- Equipo ---
    async fn list_equipos(&self) -> Result<Vec<Equipo>, DbError>;
    async fn get_equipo(&self, id: Id) -> Result<Equipo, DbError>;
    async fn create_equipo(&self, equipo: &NuevoEquipo) -> Result<Id, DbError>;
    async fn update_equipo(&self, id: Id, equipo: &NuevoEquipo) -> Result<(), DbError>;
    async fn delete_equipo(&self, id: Id) -> Result<(), DbError>;

    // --- Jugador ---
    async fn list_jugadores(&self) -> Result<Vec<Jugador>, DbError>;
    async fn list_jugadores_por_equipo(&self, id_equipo: Id) -> Result<Vec<Jugador>, DbError>;
    async fn get_jugador(&self, id: Id) -> Result<Jugador, DbError>;
    async fn create_jugador(&self, jugador: &NuevoJugador) -> Result<Id, DbError>;
    async fn update_jugador(&self, id: Id, cambios: &CambiosJugador) -> Result<(), DbError>;
    /// Removes the player together with its statistics.
    async fn delete_jugador(&self, id: Id) -> Result<(), DbError>;

    // --- Estadisticas ---
    async fn list_estadisticas(&self) -> Result<Vec<Estadistica>, DbError>;
    async fn list_estadisticas_por_jugador(
        &self,
        id_jugador: Id,
    ) -> Result<Vec<Estadistica>, DbError>;
    async fn get_estadistica(&self, id: Id) -> Result<Estadistica, DbError>;
    async fn create_estadistica(&self, estadistica: &NuevaEstadistica) -> Result<Id, DbError>;
    async fn update_estadistica(
        &self,
        id: Id,
        estadistica: &NuevaEstadistica,
    ) -> Result<(), DbError>;
    async fn delete_estadistica(&self, id: Id) -> Result<(), DbError>;
}

const SELECT_EQUIPO: &str = r#"
    SELECT
        e.id, e.nombre, e.logo, e.pais, e.ciudad, e.estadio_arena,
        e.anio_fundacion, e.numero_campeonatos, e.id_deporte,
        d.nombre AS deporte_nombre
    FROM equipo AS e
    JOIN deporte AS d ON e.id_deporte = d.id
"#;

const SELECT_JUGADOR: &str = r#"
    SELECT
        j.id, j.nombre, j.posicion, j.nacionalidad, j.imagen, j.id_equipo,
        e.nombre AS nombre_equipo, e.id_deporte,
        j.tipo_jugador, j.numero_camiseta, j.edad, j.altura, j.peso, j.universidad,
        j.anios_activos, j.logro_principal
    FROM jugador AS j
    LEFT JOIN equipo AS e ON j.id_equipo = e.id
"#;

const SELECT_ESTADISTICA: &str = r#"
    SELECT
        s.id, s.id_jugador, s.tipo_estadistica, s.valor,
        j.nombre AS jugador_nombre
    FROM estadisticas AS s
    JOIN jugador AS j ON s.id_jugador = j.id
"#;

/// Turns the affected-row count of an UPDATE/DELETE into `NotFound` when
/// nothing matched.
fn expect_affected(rows_affected: u64) -> Result<(), DbError> {
    if rows_affected == 0 {
        Err(DbError::NotFound)
    } else {
        Ok(())
    }
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the PostgreSQL database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_jugadores(
        &self,
        filter: &str,
        bind: Option<Id>,
    ) -> Result<Vec<Jugador>, DbError> {
        let sql = format!("{SELECT_JUGADOR} {filter} ORDER BY j.nombre, j.id");
        let mut query = sqlx::query_as::<_, DbJugador>(&sql);
        if let Some(id) = bind {
            query = query.bind(id);
        }
        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(Jugador::try_from).collect()
    }
}

#[async_trait]
impl SportsRepository for DbRepository {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // ==========================================================================
    // Deporte
    // ==========================================================================

    async fn list_deportes(&self) -> Result<Vec<Deporte>, DbError> {
        let rows = sqlx::query_as::<_, DbDeporte>("SELECT id, nombre FROM deporte ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Deporte::from).collect())
    }

    async fn get_deporte(&self, id: Id) -> Result<Deporte, DbError> {
        let row = sqlx::query_as::<_, DbDeporte>("SELECT id, nombre FROM deporte WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn create_deporte(&self, deporte: &NuevoDeporte) -> Result<Id, DbError> {
        let id = sqlx::query_scalar::<_, Id>("INSERT INTO deporte (nombre) VALUES ($1) RETURNING id")
            .bind(&deporte.nombre)
            .fetch_one(&self.pool)
            .await?;
        tracing::debug!(id, "Deporte created.");
        Ok(id)
    }

    async fn update_deporte(&self, id: Id, deporte: &NuevoDeporte) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE deporte SET nombre = $1 WHERE id = $2")
            .bind(&deporte.nombre)
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result.rows_affected())
    }

    async fn delete_deporte(&self, id: Id) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM deporte WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result.rows_affected())
    }

    // ==========================================================================
    // Equipo
    // ==========================================================================

    async fn list_equipos(&self) -> Result<Vec<Equipo>, DbError> {
        let sql = format!("{SELECT_EQUIPO} ORDER BY e.id");
        let rows = sqlx::query_as::<_, DbEquipo>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Equipo::from).collect())
    }

    async fn get_equipo(&self, id: Id) -> Result<Equipo, DbError> {
        let sql = format!("{SELECT_EQUIPO} WHERE e.id = $1");
        let row = sqlx::query_as::<_, DbEquipo>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn create_equipo(&self, equipo: &NuevoEquipo) -> Result<Id, DbError> {
        let id = sqlx::query_scalar::<_, Id>(
            r#"
            INSERT INTO equipo (
                nombre, logo, pais, ciudad, estadio_arena,
                anio_fundacion, numero_campeonatos, id_deporte
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&equipo.nombre)
        .bind(&equipo.logo)
        .bind(&equipo.pais)
        .bind(&equipo.ciudad)
        .bind(&equipo.estadio_arena)
        .bind(equipo.anio_fundacion)
        .bind(equipo.numero_campeonatos)
        .bind(equipo.id_deporte)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id, "Equipo created.");
        Ok(id)
    }

    async fn update_equipo(&self, id: Id, equipo: &NuevoEquipo) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE equipo
            SET nombre = $1, logo = $2, pais = $3, ciudad = $4, estadio_arena = $5,
                anio_fundacion = $6, numero_campeonatos = $7, id_deporte = $8
            WHERE id = $9
            "#,
        )
        .bind(&equipo.nombre)
        .bind(&equipo.logo)
        .bind(&equipo.pais)
        .bind(&equipo.ciudad)
        .bind(&equipo.estadio_arena)
        .bind(equipo.anio_fundacion)
        .bind(equipo.numero_campeonatos)
        .bind(equipo.id_deporte)
        .bind(id)
        .execute(&self.pool)
        .await?;
        expect_affected(result.rows_affected())
    }

    async fn delete_equipo(&self, id: Id) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM equipo WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result.rows_affected())
    }

    // ==========================================================================
    // Jugador
    // ==========================================================================

    async fn list_jugadores(&self) -> Result<Vec<Jugador>, DbError> {
        self.fetch_jugadores("", None).await
    }

    async fn list_jugadores_por_equipo(&self, id_equipo: Id) -> Result<Vec<Jugador>, DbError> {
        self.fetch_jugadores("WHERE j.id_equipo = $1", Some(id_equipo))
            .await
    }

    async fn get_jugador(&self, id: Id) -> Result<Jugador, DbError> {
        let sql = format!("{SELECT_JUGADOR} WHERE j.id = $1");
        let row = sqlx::query_as::<_, DbJugador>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        row.try_into()
    }

    async fn create_jugador(&self, jugador: &NuevoJugador) -> Result<Id, DbError> {
        let kind = KindColumns::from(&jugador.tipo);
        let id = sqlx::query_scalar::<_, Id>(
            r#"
            INSERT INTO jugador (
                nombre, posicion, nacionalidad, imagen, id_equipo,
                tipo_jugador, numero_camiseta, edad, altura, peso, universidad,
                anios_activos, logro_principal
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&jugador.nombre)
        .bind(&jugador.posicion)
        .bind(&jugador.nacionalidad)
        .bind(&jugador.imagen)
        .bind(jugador.id_equipo)
        .bind(kind.tipo_jugador)
        .bind(kind.numero_camiseta)
        .bind(kind.edad)
        .bind(kind.altura)
        .bind(kind.peso)
        .bind(kind.universidad)
        .bind(kind.anios_activos)
        .bind(kind.logro_principal)
        .fetch_one(&self.pool)
        .await?;
        tracing::debug!(id, tipo = kind.tipo_jugador, "Jugador created.");
        Ok(id)
    }

    async fn update_jugador(&self, id: Id, cambios: &CambiosJugador) -> Result<(), DbError> {
        // Base fields the caller left out keep their stored value. The kind
        // columns are always rewritten, which clears the previous kind.
        let kind = KindColumns::from(&cambios.tipo);
        let result = sqlx::query(
            r#"
            UPDATE jugador
            SET nombre = COALESCE($1, nombre),
                posicion = COALESCE($2, posicion),
                nacionalidad = COALESCE($3, nacionalidad),
                imagen = COALESCE($4, imagen),
                id_equipo = COALESCE($5, id_equipo),
                tipo_jugador = $6,
                numero_camiseta = $7,
                edad = $8,
                altura = $9,
                peso = $10,
                universidad = $11,
                anios_activos = $12,
                logro_principal = $13
            WHERE id = $14
            "#,
        )
        .bind(&cambios.nombre)
        .bind(&cambios.posicion)
        .bind(&cambios.nacionalidad)
        .bind(&cambios.imagen)
        .bind(cambios.id_equipo)
        .bind(kind.tipo_jugador)
        .bind(kind.numero_camiseta)
        .bind(kind.edad)
        .bind(kind.altura)
        .bind(kind.peso)
        .bind(kind.universidad)
        .bind(kind.anios_activos)
        .bind(kind.logro_principal)
        .bind(id)
        .execute(&self.pool)
        .await?;
        expect_affected(result.rows_affected())
    }

    async fn delete_jugador(&self, id: Id) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;

        let stats = sqlx::query("DELETE FROM estadisticas WHERE id_jugador = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM jugador WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(DbError::NotFound);
        }

        tx.commit().await?;
        tracing::debug!(id, estadisticas = stats.rows_affected(), "Jugador deleted.");
        Ok(())
    }

    // ==========================================================================
    // Estadisticas
    // ==========================================================================

    async fn list_estadisticas(&self) -> Result<Vec<Estadistica>, DbError> {
        let sql = format!("{SELECT_ESTADISTICA} ORDER BY s.id");
        let rows = sqlx::query_as::<_, DbEstadistica>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Estadistica::from).collect())
    }

    async fn list_estadisticas_por_jugador(
        &self,
        id_jugador: Id,
    ) -> Result<Vec<Estadistica>, DbError> {
        let sql = format!("{SELECT_ESTADISTICA} WHERE s.id_jugador = $1 ORDER BY s.id");
        let rows = sqlx::query_as::<_, DbEstadistica>(&sql)
            .bind(id_jugador)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Estadistica::from).collect())
    }

    async fn get_estadistica(&self, id: Id) -> Result<Estadistica, DbError> {
        let sql = format!("{SELECT_ESTADISTICA} WHERE s.id = $1");
        let row = sqlx::query_as::<_, DbEstadistica>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn create_estadistica(&self, estadistica: &NuevaEstadistica) -> Result<Id, DbError> {
        let id = sqlx::query_scalar::<_, Id>(
            r#"
            INSERT INTO estadisticas (id_jugador, tipo_estadistica, valor)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(estadistica.id_jugador)
        .bind(&estadistica.tipo_estadistica)
        .bind(estadistica.valor)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update_estadistica(
        &self,
        id: Id,
        estadistica: &NuevaEstadistica,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE estadisticas
            SET id_jugador = $1, tipo_estadistica = $2, valor = $3
            WHERE id = $4
            "#,
        )
        .bind(estadistica.id_jugador)
        .bind(&estadistica.tipo_estadistica)
        .bind(estadistica.valor)
        .bind(id)
        .execute(&self.pool)
        .await?;
        expect_affected(result.rows_affected())
    }

    async fn delete_estadistica(&self, id: Id) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM estadisticas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        expect_affected(result.rows_affected())
    }
}
