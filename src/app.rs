//! Interactive explorer: pick a query in the menu, see it drawn on the map.

use std::collections::HashSet;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use itertools::Itertools;
use ratatui::{
    DefaultTerminal, Frame,
    prelude::*,
    widgets::{
        Block, Paragraph, Wrap,
        canvas::{Canvas, Line as CanvasLine},
    },
};
use tracing::{debug, info};

use crate::graph::{FlightNetwork, Route, SpanningTree, Traversal};
use crate::layout::{NetworkLayout, SETTLE_STEPS};
use crate::menu::{Menu, MenuItem, MenuSignal, MenuState};

pub const BFS_ITEM: &str = "Breadth-first search";
pub const DISTANCE_ITEM: &str = "Shortest distance";
pub const MST_ITEM: &str = "Minimum spanning tree";
pub const SUMMARY_ITEM: &str = "Network summary";

/// Last query answered, kept for drawing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Traversal(Traversal),
    Route(Route),
    Unreachable { from: String, to: String },
    SpanningTree { start: String, tree: SpanningTree },
    Summary { cities: usize, flights: usize },
}

impl Outcome {
    /// City pairs to highlight on the map.
    pub fn highlighted_legs(&self) -> HashSet<(String, String)> {
        let pairs: Vec<(&str, &str)> = match self {
            Outcome::Traversal(t) => t.tree_edges().collect(),
            Outcome::Route(r) => r.legs().collect(),
            Outcome::SpanningTree { tree, .. } => tree
                .edges()
                .iter()
                .map(|e| (e.source.as_str(), e.destination.as_str()))
                .collect(),
            Outcome::Unreachable { .. } | Outcome::Summary { .. } => Vec::new(),
        };
        pairs
            .into_iter()
            .flat_map(|(a, b)| [(a.to_string(), b.to_string()), (b.to_string(), a.to_string())])
            .collect()
    }

    pub fn describe(&self) -> String {
        match self {
            Outcome::Traversal(t) => format!(
                "BFS from {}: {}",
                t.start().unwrap_or_default(),
                t.order.iter().join(" -> ")
            ),
            Outcome::Route(r) => format!(
                "Shortest distance {}: {} via {}",
                r.cities
                    .first()
                    .zip(r.cities.last())
                    .map(|(a, b)| format!("{a} -> {b}"))
                    .unwrap_or_default(),
                r.distance,
                r.cities.iter().join(" -> ")
            ),
            Outcome::Unreachable { from, to } => format!("{to} cannot be reached from {from}"),
            Outcome::SpanningTree { start, tree } => format!(
                "Minimum spanning tree from {start}: {tree} (total distance {})",
                tree.total_weight()
            ),
            Outcome::Summary { cities, flights } => {
                format!("{cities} cities, {flights} flights")
            }
        }
    }
}

pub struct App {
    network: FlightNetwork,
    layout: NetworkLayout,
    menu: MenuState,
    outcome: Option<Outcome>,
    exit: bool,
}

impl App {
    pub fn new(network: FlightNetwork) -> Self {
        let layout = NetworkLayout::settle(&network, SETTLE_STEPS);
        let menu = MenuState::new(menu_items(&network));
        Self {
            network,
            layout,
            menu,
            outcome: None,
            exit: false,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        info!(cities = self.network.len(), "explorer started");
        while !self.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.exit = true,
            KeyCode::Up | KeyCode::Char('k') => self.menu.up(),
            KeyCode::Down | KeyCode::Char('j') => self.menu.down(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
                if let MenuSignal::Selected(path) = self.menu.enter() {
                    self.answer(&path);
                }
            }
            KeyCode::Left | KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('h') => {
                self.menu.back()
            }
            _ => {}
        }
    }

    /// Runs the query named by a menu path.
    pub fn answer(&mut self, path: &[String]) {
        debug!(?path, "query selected");
        let path: Vec<&str> = path.iter().map(String::as_str).collect();
        self.outcome = match path.as_slice() {
            [BFS_ITEM, start] => Some(Outcome::Traversal(self.network.bfs_tree(start))),
            [DISTANCE_ITEM, from, to] => Some(match self.network.shortest_route(from, to) {
                Some(route) => Outcome::Route(route),
                None => Outcome::Unreachable {
                    from: from.to_string(),
                    to: to.to_string(),
                },
            }),
            [MST_ITEM, start] => Some(Outcome::SpanningTree {
                start: start.to_string(),
                tree: self.network.minimum_spanning_tree_from(start),
            }),
            [SUMMARY_ITEM] => Some(Outcome::Summary {
                cities: self.network.len(),
                flights: self.network.flight_count(),
            }),
            _ => None,
        };
    }

    fn draw(&mut self, frame: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).areas(frame.area());
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(30), Constraint::Min(0)]).areas(body);

        let title = match self.menu.breadcrumb() {
            crumbs if crumbs.is_empty() => " Queries ".to_string(),
            crumbs => format!(" {} ", crumbs.join(" / ")),
        };
        frame.render_stateful_widget(
            Menu::new()
                .block(Block::bordered().title(title))
                .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan)),
            left,
            &mut self.menu,
        );

        self.draw_map(frame, right);

        let text = self
            .outcome
            .as_ref()
            .map(Outcome::describe)
            .unwrap_or_else(|| "Choose a query.".to_string());
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(" Result  (j/k move, enter open, esc back, q quit) ")),
            footer,
        );
    }

    fn draw_map(&self, frame: &mut Frame, area: Rect) {
        let ([x0, x1], [y0, y1]) = self.layout.bounds();
        let highlighted = self
            .outcome
            .as_ref()
            .map(Outcome::highlighted_legs)
            .unwrap_or_default();

        let mut legs = Vec::new();
        for flight in self.network.flights() {
            let (Some(a), Some(b)) = (
                self.network.vertex_id(&flight.source),
                self.network.vertex_id(&flight.destination),
            ) else {
                continue;
            };
            let (Some((ax, ay)), Some((bx, by))) = (self.layout.position(a), self.layout.position(b))
            else {
                continue;
            };
            let lit = highlighted.contains(&(flight.source.clone(), flight.destination.clone()));
            legs.push((ax, ay, bx, by, lit, flight.weight));
        }

        let labels: Vec<(f64, f64, String, bool)> = self
            .network
            .cities()
            .enumerate()
            .filter_map(|(id, name)| {
                let (x, y) = self.layout.position(id)?;
                let lit = highlighted.iter().any(|(a, _)| a == name);
                Some((x, y, name.to_string(), lit))
            })
            .collect();

        let canvas = Canvas::default()
            .block(Block::bordered().title(" Flights "))
            .marker(symbols::Marker::Braille)
            .x_bounds([x0, x1])
            .y_bounds([y0, y1])
            .paint(|ctx| {
                for &(ax, ay, bx, by, lit, _) in &legs {
                    ctx.draw(&CanvasLine {
                        x1: ax,
                        y1: ay,
                        x2: bx,
                        y2: by,
                        color: if lit { Color::Yellow } else { Color::DarkGray },
                    });
                }
                ctx.layer();
                for &(ax, ay, bx, by, _, weight) in &legs {
                    ctx.print(
                        (ax + bx) / 2.0,
                        (ay + by) / 2.0,
                        Line::styled(weight.to_string(), Style::default().fg(Color::Gray)),
                    );
                }
                for (x, y, name, lit) in &labels {
                    let style = if *lit {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    ctx.print(*x, *y, Line::styled(name.clone(), style));
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Menu tree offering every query over the cities of `network`.
pub fn menu_items(network: &FlightNetwork) -> Vec<MenuItem> {
    let cities: Vec<&str> = network.cities().collect();
    let leaves = || cities.iter().map(|c| MenuItem::leaf(c)).collect::<Vec<_>>();

    vec![
        MenuItem::new(BFS_ITEM, leaves()),
        MenuItem::new(
            DISTANCE_ITEM,
            cities.iter().map(|c| MenuItem::new(c, leaves())).collect(),
        ),
        MenuItem::new(MST_ITEM, leaves()),
        MenuItem::leaf(SUMMARY_ITEM),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let mut g = FlightNetwork::new();
        g.add_edge("1", "5", 4);
        g.add_edge("1", "4", 1);
        g.add_edge("4", "5", 9);
        g.add_edge("Oslo", "Bergen", 2);
        App::new(g)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn menu_lists_queries_over_every_city() {
        let items = menu_items(&app().network);

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].children.len(), 5);
        assert_eq!(items[1].children[0].children.len(), 5);
        assert!(items[3].children.is_empty());
    }

    #[test]
    fn keys_drive_a_distance_query() {
        let mut app = app();

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.outcome(),
            Some(&Outcome::Route(Route {
                distance: 4,
                cities: vec!["1".to_string(), "5".to_string()],
            }))
        );
        assert_eq!(app.menu().depth(), 2);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn unreachable_cities_are_reported() {
        let mut app = app();
        app.answer(&[DISTANCE_ITEM.to_string(), "1".to_string(), "Oslo".to_string()]);

        let outcome = app.outcome().unwrap();
        assert_eq!(outcome.describe(), "Oslo cannot be reached from 1");
        assert!(outcome.highlighted_legs().is_empty());
    }

    #[test]
    fn spanning_tree_legs_are_highlighted_both_ways() {
        let mut app = app();
        app.answer(&[MST_ITEM.to_string(), "5".to_string()]);

        let outcome = app.outcome().unwrap();
        assert_eq!(
            outcome.describe(),
            "Minimum spanning tree from 5: [[5, 1], [1, 4]] (total distance 5)"
        );
        let legs = outcome.highlighted_legs();
        assert!(legs.contains(&("1".to_string(), "5".to_string())));
        assert!(legs.contains(&("5".to_string(), "1".to_string())));
        assert!(!legs.contains(&("4".to_string(), "5".to_string())));
    }

    #[test]
    fn summary_and_traversal_descriptions() {
        let mut app = app();

        app.answer(&[SUMMARY_ITEM.to_string()]);
        assert_eq!(app.outcome().unwrap().describe(), "5 cities, 4 flights");

        app.answer(&[BFS_ITEM.to_string(), "4".to_string()]);
        assert_eq!(app.outcome().unwrap().describe(), "BFS from 4: 4 -> 1 -> 5");
    }

    #[test]
    fn draws_without_panicking() {
        let mut app = app();
        app.answer(&[BFS_ITEM.to_string(), "1".to_string()]);
        let mut terminal = Terminal::new(backend::TestBackend::new(80, 24)).unwrap();

        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
