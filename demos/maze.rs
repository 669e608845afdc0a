//! Terminal maze demo.
//!
//! Solves the built-in map and prints it with the path overlaid as `·`.
//!
//! Run: `cargo run --bin maze` (A*), `cargo run --bin maze -- --bfs`,
//! optionally with explicit endpoints: `cargo run --bin maze -- x0 y0 x1 y1`.

use std::collections::HashSet;
use std::process::ExitCode;

use labyrinth_core::{CellKind, Grid, Point};
use labyrinth_search::{AStar, BreadthFirst, Problem, SearchEngine, SearchResult};

const MAP: &str = "
##############################
#         #              #   #
# ####    ########       #   #
#  o #    #              #   #
#    ###     #####  ######   #
#      #   ###   #           #
#      #     #   #  #  #   ###
#     #####    #    #  # x   #
#              #       #     #
##############################
";

fn main() -> ExitCode {
    let mut use_bfs = false;
    let mut coords: Vec<i32> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--bfs" => use_bfs = true,
            "--astar" => use_bfs = false,
            other => match other.parse() {
                Ok(n) => coords.push(n),
                Err(_) => {
                    eprintln!("unrecognized argument: {other}");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    let grid = match Grid::parse(MAP) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("bad map: {e}");
            return ExitCode::FAILURE;
        }
    };

    let problem = match coords.as_slice() {
        [] => Problem::from_grid(grid),
        &[x0, y0, x1, y1] => {
            match Problem::with_endpoints(grid, Point::new(x0, y0), Point::new(x1, y1)) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("bad query: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        _ => {
            eprintln!("expected no coordinates or exactly four: x0 y0 x1 y1");
            return ExitCode::FAILURE;
        }
    };

    let result = if use_bfs {
        BreadthFirst::new().search(&problem)
    } else {
        AStar::new().search(&problem)
    };

    match result {
        SearchResult::Found(path) => {
            print!("{}", render(&problem, &path));
            println!("path length: {} steps", path.len() - 1);
            ExitCode::SUCCESS
        }
        SearchResult::NotFound => {
            eprintln!("no path from {} to {}", problem.start(), problem.goal());
            ExitCode::FAILURE
        }
    }
}

/// Render the grid as text with the solved path overlaid.
fn render(problem: &Problem, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let grid = problem.grid();
    let mut out = String::new();
    for (y, row) in grid.rows().enumerate() {
        for (x, &kind) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            let ch = if p == problem.start() {
                'o'
            } else if p == problem.goal() {
                'x'
            } else if on_path.contains(&p) {
                '·'
            } else if kind == CellKind::Wall {
                '#'
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
