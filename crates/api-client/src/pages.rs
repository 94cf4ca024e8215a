//! Page view-models for browsing the API.
//!
//! A page is addressed by a path (`/`, `/teams/:id`, `/clubs/:id`, ...),
//! loaded once with all of its fetches running concurrently, and ends up
//! either `Ready` with its data or `Failed` with one flat message.

use crate::error::ApiError;
use crate::SportsApi;
use core_types::{Deporte, Equipo, Estadistica, Id, Jugador, TipoJugador};
use std::fmt;
use std::str::FromStr;

/// Sport ids used by the `/soccerteams` and `/basketballteams` shortcuts.
pub const SOCCER: Id = 1;
pub const BASKETBALL: Id = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Teams { deporte: Id },
    Club { equipo: Id },
    Player { jugador: Id },
}

impl Page {
    /// Resolves a client path. Unknown paths and non-numeric ids give `None`.
    pub fn parse(path: &str) -> Option<Page> {
        let path = path.trim().trim_end_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(Page::Home),
            ["soccerteams"] => Some(Page::Teams { deporte: SOCCER }),
            ["basketballteams"] => Some(Page::Teams {
                deporte: BASKETBALL,
            }),
            ["teams", id] => id.parse().ok().map(|deporte| Page::Teams { deporte }),
            ["clubs", id] => id.parse().ok().map(|equipo| Page::Club { equipo }),
            ["players", id] => id.parse().ok().map(|jugador| Page::Player { jugador }),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Teams { deporte } => format!("/teams/{deporte}"),
            Page::Club { equipo } => format!("/clubs/{equipo}"),
            Page::Player { jugador } => format!("/players/{jugador}"),
        }
    }
}

/// The lifecycle of a page. It starts `Loading` and settles exactly once.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> PageState<T> {
    /// Settles a loading page with the outcome of its fetch. A page that
    /// already settled keeps its state.
    pub fn resolve(self, outcome: Result<T, ApiError>) -> Self {
        match self {
            PageState::Loading => match outcome {
                Ok(data) => PageState::Ready(data),
                Err(e) => PageState::Failed(e.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub deportes: Vec<Deporte>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamsView {
    pub deporte: Deporte,
    pub equipos: Vec<Equipo>,
}

/// A club with its roster split the way the club page tabs show it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClubView {
    pub equipo: Equipo,
    pub actuales: Vec<Jugador>,
    pub historicos: Vec<Jugador>,
}

impl ClubView {
    pub fn roster(&self, tipo: TipoJugador) -> &[Jugador] {
        match tipo {
            TipoJugador::Actual => &self.actuales,
            TipoJugador::Historico => &self.historicos,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerView {
    pub jugador: Jugador,
    pub estadisticas: Vec<Estadistica>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Home(HomeView),
    Teams(TeamsView),
    Club(ClubView),
    Player(PlayerView),
}

/// Loads `page` once and returns its settled state.
pub async fn load_page(api: &dyn SportsApi, page: &Page) -> PageState<PageView> {
    PageState::Loading.resolve(fetch(api, page).await)
}

async fn fetch(api: &dyn SportsApi, page: &Page) -> Result<PageView, ApiError> {
    match *page {
        Page::Home => {
            let deportes = api.list_deportes().await?;
            Ok(PageView::Home(HomeView { deportes }))
        }
        Page::Teams { deporte } => {
            let (deporte, equipos) =
                futures::join!(api.get_deporte(deporte), api.list_equipos());
            let deporte = deporte?;
            let equipos = equipos?
                .into_iter()
                .filter(|e| e.id_deporte == deporte.id)
                .collect();
            Ok(PageView::Teams(TeamsView { deporte, equipos }))
        }
        Page::Club { equipo } => {
            let (equipo, jugadores) =
                futures::join!(api.get_equipo(equipo), api.list_jugadores_por_equipo(equipo));
            let equipo = equipo?;
            let (actuales, historicos) = jugadores?
                .into_iter()
                .partition(|j| j.tipo.tipo_jugador() == TipoJugador::Actual);
            Ok(PageView::Club(ClubView {
                equipo,
                actuales,
                historicos,
            }))
        }
        Page::Player { jugador } => {
            let (jugador, estadisticas) = futures::join!(
                api.get_jugador(jugador),
                api.list_estadisticas_por_jugador(jugador)
            );
            Ok(PageView::Player(PlayerView {
                jugador: jugador?,
                estadisticas: estadisticas?,
            }))
        }
    }
}

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn background(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#121212",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Theme::Light => "#333333",
            Theme::Dark => "#e0e0e0",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?}, expected dark or light")),
        }
    }
}
