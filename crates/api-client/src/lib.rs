use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{
    Deporte, DeporteInput, Equipo, EquipoInput, Estadistica, EstadisticaInput, Id, Jugador,
    JugadorInput,
};
use reqwest::{Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Serialize};

pub mod error;
pub mod pages;
pub mod responses;

// --- Public API ---
pub use pages::{load_page, Page, PageState, PageView, Theme};
pub use responses::{ApiErrorResponse, WriteResponse};

/// Where the server listens by default.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// The abstract interface of the Deportes API.
/// Pages are loaded through this trait so they can be driven by a fake in tests.
#[async_trait]
pub trait SportsApi: Send + Sync {
    async fn list_deportes(&self) -> Result<Vec<Deporte>, ApiError>;
    async fn get_deporte(&self, id: Id) -> Result<Deporte, ApiError>;
    async fn list_equipos(&self) -> Result<Vec<Equipo>, ApiError>;
    async fn get_equipo(&self, id: Id) -> Result<Equipo, ApiError>;
    async fn list_jugadores(&self) -> Result<Vec<Jugador>, ApiError>;
    async fn list_jugadores_por_equipo(&self, id_equipo: Id) -> Result<Vec<Jugador>, ApiError>;
    async fn get_jugador(&self, id: Id) -> Result<Jugador, ApiError>;
    async fn list_estadisticas_por_jugador(
        &self,
        id_jugador: Id,
    ) -> Result<Vec<Estadistica>, ApiError>;
}

/// A reqwest-backed client for a running Deportes server.
#[derive(Debug, Clone)]
pub struct DeportesClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DeportesClient {
    /// `base_url` is the server root, e.g. `http://localhost:3000`. A root
    /// mounted under a path prefix is kept whether or not it ends in `/`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url =
            Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let url = self
            .base_url
            .join(&format!("api{path}"))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(self.client.request(method, url))
    }

    /// Sends the request and decodes a 2xx body as `T`. Any other status
    /// becomes `ApiError::Status`, carrying the API's message when it sent one.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            serde_json::from_str::<T>(&text).map_err(|e| ApiError::Deserialization(e.to_string()))
        } else {
            let api_message = serde_json::from_str::<ApiErrorResponse>(&text)
                .ok()
                .map(|body| body.message);
            Err(ApiError::status(status.as_u16(), api_message))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<WriteResponse, ApiError> {
        let request = self.request(method, path)?.json(body);
        self.execute(request).await
    }

    async fn delete(&self, path: &str) -> Result<WriteResponse, ApiError> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await
    }

    // --- Writes ---

    pub async fn create_deporte(&self, input: &DeporteInput) -> Result<WriteResponse, ApiError> {
        self.send(Method::POST, "/deportes", input).await
    }

    pub async fn update_deporte(
        &self,
        id: Id,
        input: &DeporteInput,
    ) -> Result<WriteResponse, ApiError> {
        self.send(Method::PUT, &format!("/deportes/{id}"), input).await
    }

    pub async fn delete_deporte(&self, id: Id) -> Result<WriteResponse, ApiError> {
        self.delete(&format!("/deportes/{id}")).await
    }

    pub async fn create_equipo(&self, input: &EquipoInput) -> Result<WriteResponse, ApiError> {
        self.send(Method::POST, "/equipos", input).await
    }

    pub async fn update_equipo(
        &self,
        id: Id,
        input: &EquipoInput,
    ) -> Result<WriteResponse, ApiError> {
        self.send(Method::PUT, &format!("/equipos/{id}"), input).await
    }

    pub async fn delete_equipo(&self, id: Id) -> Result<WriteResponse, ApiError> {
        self.delete(&format!("/equipos/{id}")).await
    }

    pub async fn create_jugador(&self, input: &JugadorInput) -> Result<WriteResponse, ApiError> {
        self.send(Method::POST, "/jugadores", input).await
    }

    pub async fn update_jugador(
        &self,
        id: Id,
        input: &JugadorInput,
    ) -> Result<WriteResponse, ApiError> {
        self.send(Method::PUT, &format!("/jugadores/{id}"), input).await
    }

    pub async fn delete_jugador(&self, id: Id) -> Result<WriteResponse, ApiError> {
        self.delete(&format!("/jugadores/{id}")).await
    }

    pub async fn list_estadisticas(&self) -> Result<Vec<Estadistica>, ApiError> {
        self.get("/estadisticas").await
    }

    pub async fn get_estadistica(&self, id: Id) -> Result<Estadistica, ApiError> {
        self.get(&format!("/estadisticas/{id}")).await
    }

    pub async fn create_estadistica(
        &self,
        input: &EstadisticaInput,
    ) -> Result<WriteResponse, ApiError> {
        self.send(Method::POST, "/estadisticas", input).await
    }

    pub async fn update_estadistica(
        &self,
        id: Id,
        input: &EstadisticaInput,
    ) -> Result<WriteResponse, ApiError> {
        self.send(Method::PUT, &format!("/estadisticas/{id}"), input)
            .await
    }

    pub async fn delete_estadistica(&self, id: Id) -> Result<WriteResponse, ApiError> {
        self.delete(&format!("/estadisticas/{id}")).await
    }

    /// `GET /api/health`, true when the server answers `OK`.
    pub async fn health(&self) -> Result<bool, ApiError> {
        let response = self.request(Method::GET, "/health")?.send().await?;
        Ok(response.status().is_success() && response.text().await? == "OK")
    }
}

#[async_trait]
impl SportsApi for DeportesClient {
    async fn list_deportes(&self) -> Result<Vec<Deporte>, ApiError> {
        self.get("/deportes").await
    }

    async fn get_deporte(&self, id: Id) -> Result<Deporte, ApiError> {
        self.get(&format!("/deportes/{id}")).await
    }

    async fn list_equipos(&self) -> Result<Vec<Equipo>, ApiError> {
        self.get("/equipos").await
    }

    async fn get_equipo(&self, id: Id) -> Result<Equipo, ApiError> {
        self.get(&format!("/equipos/{id}")).await
    }

    async fn list_jugadores(&self) -> Result<Vec<Jugador>, ApiError> {
        self.get("/jugadores").await
    }

    async fn list_jugadores_por_equipo(&self, id_equipo: Id) -> Result<Vec<Jugador>, ApiError> {
        self.get(&format!("/jugadores/equipo/{id_equipo}")).await
    }

    async fn get_jugador(&self, id: Id) -> Result<Jugador, ApiError> {
        self.get(&format!("/jugadores/{id}")).await
    }

    async fn list_estadisticas_por_jugador(
        &self,
        id_jugador: Id,
    ) -> Result<Vec<Estadistica>, ApiError> {
        self.get(&format!("/estadisticas/jugador/{id_jugador}"))
            .await
    }
}
