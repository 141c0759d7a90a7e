//! Shared pieces of the `hue-walk` demo: command-line arguments, the built-in
//! level, and text rendering of distance tables and paths.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;

use hue_core::{ColorGrid, ParseError, Point};
use hue_paths::{CellGraph, GraphError, LogicalPath, WeightGraph, WeightOptions};

/// Built-in level, one character per raw tile, top row first. Two tiles per
/// logical cell in each direction.
pub const DEMO_MAP: &str = "\
GGGGBBBBGGGGRRRR
GGGGBBBBGGGGRRRR
GGRRRRBBGGRRRRGG
GGRRRRBBGGRRRRGG
BBRRGGGGYYYYRRGG
BBRRGGGGYYYYRRGG
BBBBGGYYYYBBBBGG
BBBBGGYYYYBBBBGG
GGGGGGYYBBBBRRRR
GGGGGGYYBBBBRRRR";

/// Locked gates of [`DEMO_MAP`], in logical space.
pub const DEMO_GATES: [Point; 1] = [Point::new(3, 2)];

/// Walk a color-teleport map: print distances, a path and seeker moves.
#[derive(Debug, Clone, Parser)]
#[command(name = "hue-walk", about = "Walk a color-teleport map")]
pub struct Args {
    /// ASCII color map, top row first. Defaults to the built-in level.
    pub map_file: Option<PathBuf>,
    /// Source cell, as X,Y in logical space.
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    pub from: Point,
    /// Cell to draw a shortest path to.
    #[arg(long, value_parser = parse_point)]
    pub to: Option<Point>,
    /// Locked gate; repeat for several.
    #[arg(long = "gate", value_parser = parse_point)]
    pub gates: Vec<Point>,
    /// Hop ceiling, 0 for unlimited.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub max: i32,
    /// Ignore links between non-adjacent cells.
    #[arg(long)]
    pub no_teleport: bool,
    /// Goal for the seeker; repeat for several.
    #[arg(long, value_parser = parse_point)]
    pub seek: Vec<Point>,
    /// Number of seeker ticks to simulate.
    #[arg(long, default_value_t = 8)]
    pub ticks: usize,
}

impl Args {
    /// Table options selected by `--max` and `--no-teleport`.
    pub fn options(&self) -> WeightOptions {
        WeightOptions::default()
            .with_max_distance(self.max)
            .with_teleport(!self.no_teleport)
    }
}

/// Parse `X,Y`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}

/// Load the tiles named by `args`, or the built-in level.
pub fn load_tiles(args: &Args) -> Result<ColorGrid<char>, DemoError> {
    let text = match &args.map_file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.clone(),
            source,
        })?,
        None => DEMO_MAP.to_string(),
    };
    Ok(ColorGrid::parse(&text)?)
}

/// One character per logical cell, top row first: the hop count (base 36)
/// of accessible cells, `#` for blocked cells and `.` for the rest.
pub fn render_distances(weights: &WeightGraph<'_>) -> String {
    let graph = weights.graph();
    render_cells(graph, |p| {
        if graph.is_blocked(p) {
            return '#';
        }
        match weights.lookup_distance(p) {
            Some(d) => char::from_digit(d.min(35) as u32, 36).unwrap_or('+'),
            None => '.',
        }
    })
}

/// The path drawn over the grid: `S` start, `E` end, `*` in between.
pub fn render_path(graph: &CellGraph, path: &LogicalPath) -> String {
    render_cells(graph, |p| {
        if path.start() == Some(p) {
            'S'
        } else if path.end() == Some(p) {
            'E'
        } else if path.points().contains(&p) {
            '*'
        } else if graph.is_blocked(p) {
            '#'
        } else {
            '.'
        }
    })
}

fn render_cells(graph: &CellGraph, mut f: impl FnMut(Point) -> char) -> String {
    let mut out = String::new();
    for y in (0..graph.size_y()).rev() {
        for x in 0..graph.size_x() {
            out.push(f(Point::new(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Errors surfaced by the demo binary.
#[derive(Debug)]
pub enum DemoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Map(ParseError),
    Graph(GraphError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Map(e) => write!(f, "{e}"),
            Self::Graph(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Map(e) => Some(e),
            Self::Graph(e) => Some(e),
        }
    }
}

impl From<ParseError> for DemoError {
    fn from(e: ParseError) -> Self {
        Self::Map(e)
    }
}

impl From<GraphError> for DemoError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}
