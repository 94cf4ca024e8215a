//! Terminal rendering of browsed pages.

use api_client::pages::{ClubView, HomeView, PlayerView, TeamsView};
use api_client::{PageView, Theme};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use core_types::{Jugador, PlayerKind, TipoJugador};
use std::fmt::Display;

/// Renders a loaded page as one or more titled tables.
pub fn render_page(view: &PageView, theme: Theme) -> String {
    match view {
        PageView::Home(home) => render_home(home, theme),
        PageView::Teams(teams) => render_teams(teams, theme),
        PageView::Club(club) => render_club(club, theme),
        PageView::Player(player) => render_player(player, theme),
    }
}

fn table(theme: Theme, header: &[&str]) -> Table {
    let color = if theme.is_dark() {
        Color::Cyan
    } else {
        Color::DarkBlue
    };
    let mut table = Table::new();
    table
        .load_preset(if theme.is_dark() {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        })
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            header
                .iter()
                .map(|h| Cell::new(h).fg(color).add_attribute(Attribute::Bold)),
        );
    table
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn render_home(home: &HomeView, theme: Theme) -> String {
    let mut table = table(theme, &["ID", "Deporte"]);
    for deporte in &home.deportes {
        table.add_row(vec![deporte.id.to_string(), deporte.nombre.clone()]);
    }
    format!("Deportes\n{table}")
}

fn render_teams(teams: &TeamsView, theme: Theme) -> String {
    let mut table = table(
        theme,
        &["ID", "Equipo", "País", "Ciudad", "Estadio/Arena", "Fundación", "Campeonatos"],
    );
    for equipo in &teams.equipos {
        table.add_row(vec![
            equipo.id.to_string(),
            equipo.nombre.clone(),
            opt(&equipo.pais),
            opt(&equipo.ciudad),
            opt(&equipo.estadio_arena),
            opt(&equipo.anio_fundacion),
            opt(&equipo.numero_campeonatos),
        ]);
    }
    format!("Equipos de {}\n{table}", teams.deporte.nombre)
}

fn roster_table(jugadores: &[Jugador], tipo: TipoJugador, theme: Theme) -> Table {
    let mut table = match tipo {
        TipoJugador::Actual => table(theme, &["ID", "Nombre", "Número", "Posición", "Edad"]),
        TipoJugador::Historico => table(
            theme,
            &["ID", "Nombre", "Posición", "Años activos", "Logro principal"],
        ),
    };
    for jugador in jugadores {
        let mut row = vec![jugador.id.to_string(), jugador.nombre.clone()];
        match &jugador.tipo {
            PlayerKind::Actual(actual) => row.extend([
                actual.numero_camiseta.to_string(),
                opt(&jugador.posicion),
                actual.edad.to_string(),
            ]),
            PlayerKind::Historico(historico) => row.extend([
                opt(&jugador.posicion),
                historico.anios_activos.clone(),
                opt(&historico.logro_principal),
            ]),
        }
        table.add_row(row);
    }
    table
}

fn render_club(club: &ClubView, theme: Theme) -> String {
    let equipo = &club.equipo;
    let mut out = format!("{} ({})\n", equipo.nombre, equipo.deporte_nombre);
    for (label, value) in [
        ("País", opt(&equipo.pais)),
        ("Ciudad", opt(&equipo.ciudad)),
        ("Estadio/Arena", opt(&equipo.estadio_arena)),
        ("Fundación", opt(&equipo.anio_fundacion)),
        ("Campeonatos", opt(&equipo.numero_campeonatos)),
    ] {
        if !value.is_empty() {
            out.push_str(&format!("{label}: {value}\n"));
        }
    }
    for tipo in TipoJugador::ALL {
        let roster = roster_table(club.roster(tipo), tipo, theme);
        out.push_str(&format!("\nJugadores ({tipo})\n{roster}\n"));
    }
    out
}

fn render_player(player: &PlayerView, theme: Theme) -> String {
    let jugador = &player.jugador;
    let mut details = table(theme, &["Campo", "Valor"]);
    let mut rows = vec![
        ("Tipo", jugador.tipo_jugador().to_string()),
        ("Equipo", opt(&jugador.nombre_equipo)),
        ("Posición", opt(&jugador.posicion)),
        ("Nacionalidad", opt(&jugador.nacionalidad)),
    ];
    match &jugador.tipo {
        PlayerKind::Actual(actual) => rows.extend([
            ("Número de camiseta", actual.numero_camiseta.to_string()),
            ("Edad", actual.edad.to_string()),
            ("Altura", opt(&actual.altura)),
            ("Peso", opt(&actual.peso)),
            ("Universidad", opt(&actual.universidad)),
        ]),
        PlayerKind::Historico(historico) => rows.extend([
            ("Años activos", historico.anios_activos.clone()),
            ("Logro principal", opt(&historico.logro_principal)),
        ]),
    }
    for (campo, valor) in rows {
        details.add_row(vec![campo.to_string(), valor]);
    }

    let mut stats = table(theme, &["Estadística", "Valor"]);
    for estadistica in &player.estadisticas {
        stats.add_row(vec![
            estadistica.tipo_estadistica.clone(),
            estadistica.valor.to_string(),
        ]);
    }
    format!("{}\n{details}\n\nEstadísticas\n{stats}", jugador.nombre)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Deporte, Equipo, Estadistica, JugadorActual, JugadorHistorico};
    use rust_decimal_macros::dec;

    fn equipo() -> Equipo {
        Equipo {
            id: 3,
            nombre: "Boston Celtics".to_string(),
            logo: None,
            pais: Some("USA".to_string()),
            ciudad: Some("Boston".to_string()),
            estadio_arena: Some("TD Garden".to_string()),
            anio_fundacion: Some(1946),
            numero_campeonatos: Some(18),
            id_deporte: 2,
            deporte_nombre: "Baloncesto".to_string(),
        }
    }

    fn jugador(id: i32, nombre: &str, tipo: PlayerKind) -> Jugador {
        Jugador {
            id,
            nombre: nombre.to_string(),
            posicion: Some("Alero".to_string()),
            nacionalidad: None,
            imagen: None,
            id_equipo: 3,
            nombre_equipo: Some("Boston Celtics".to_string()),
            id_deporte: Some(2),
            tipo,
        }
    }

    #[test]
    fn home_lists_every_sport() {
        let view = PageView::Home(HomeView {
            deportes: vec![
                Deporte {
                    id: 1,
                    nombre: "Fútbol".to_string(),
                },
                Deporte {
                    id: 2,
                    nombre: "Baloncesto".to_string(),
                },
            ],
        });
        let out = render_page(&view, Theme::Light);
        assert!(out.starts_with("Deportes\n"));
        assert!(out.contains("Fútbol"));
        assert!(out.contains("Baloncesto"));
    }

    #[test]
    fn club_shows_both_rosters() {
        let view = PageView::Club(ClubView {
            equipo: equipo(),
            actuales: vec![jugador(
                1,
                "Jayson Tatum",
                PlayerKind::Actual(JugadorActual {
                    numero_camiseta: 0,
                    edad: 26,
                    altura: Some(dec!(2.03)),
                    peso: None,
                    universidad: Some("Duke".to_string()),
                }),
            )],
            historicos: vec![jugador(
                2,
                "Larry Bird",
                PlayerKind::Historico(JugadorHistorico {
                    anios_activos: "1979-1992".to_string(),
                    logro_principal: Some("3 campeonatos".to_string()),
                }),
            )],
        });
        let out = render_page(&view, Theme::Dark);
        assert!(out.starts_with("Boston Celtics (Baloncesto)\n"));
        assert!(out.contains("Estadio/Arena: TD Garden"));
        assert!(out.contains("Jugadores (Actual)"));
        assert!(out.contains("Jugadores (Histórico)"));
        assert!(out.contains("Jayson Tatum"));
        assert!(out.contains("1979-1992"));
    }

    #[test]
    fn player_lists_statistics() {
        let view = PageView::Player(PlayerView {
            jugador: jugador(
                2,
                "Larry Bird",
                PlayerKind::Historico(JugadorHistorico {
                    anios_activos: "1979-1992".to_string(),
                    logro_principal: None,
                }),
            ),
            estadisticas: vec![Estadistica {
                id: 9,
                id_jugador: 2,
                tipo_estadistica: "Puntos por partido".to_string(),
                valor: dec!(24.3),
                jugador_nombre: "Larry Bird".to_string(),
            }],
        });
        let out = render_page(&view, Theme::Light);
        assert!(out.contains("Histórico"));
        assert!(out.contains("Puntos por partido"));
        assert!(out.contains("24.3"));
        assert!(!out.contains("Número de camiseta"));
    }
}
