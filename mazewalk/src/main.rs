//! Command-line pattern-maze solver.
//!
//! Reads a maze file — entry symbol, wall symbol, pattern string, then
//! the maze rows — finds a pattern-constrained path between the two
//! entry points, and prints the resulting grid.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;

use mazewalk_core::{Maze, MazeError, Pattern};
use mazewalk_paths::{Walker, render_path};

/// Find a pattern-constrained path through a character maze.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze file: entry symbol, wall symbol, pattern, then the maze rows
    file: PathBuf,

    /// Path to output file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// The four sections of a maze file.
struct MazeFile {
    entry: char,
    wall: char,
    pattern: String,
    rows: Vec<String>,
}

fn parse_maze_file(text: &str) -> anyhow::Result<MazeFile> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    if lines.len() < 4 {
        bail!(
            "maze file needs an entry symbol, a wall symbol, a pattern and at least one row; got {} line(s)",
            lines.len()
        );
    }
    let entry = single_char(lines[0]).context("entry symbol line")?;
    let wall = single_char(lines[1]).context("wall symbol line")?;
    let pattern = lines[2].to_string();
    let rows = lines[3..].iter().map(|line| line.to_string()).collect();
    Ok(MazeFile {
        entry,
        wall,
        pattern,
        rows,
    })
}

fn single_char(line: &str) -> anyhow::Result<char> {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => bail!("expected a single character, got {line:?}"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let input = parse_maze_file(&text)?;

    let maze = Maze::new(input.entry, input.wall, &input.rows)?;
    let mut pattern = Pattern::new(&input.pattern)?;

    let (source, destination) = match maze.find_entry_points() {
        Ok(pair) => pair,
        Err(MazeError::NoEntry { .. }) => {
            println!("Maze has no entry/exit points");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "Finding path in maze shape of (rows, cols):({}, {}), using path pattern: '{pattern}'",
        maze.height(),
        maze.width()
    );
    println!("...");

    let mut walker = Walker::new(maze.size());
    let outcome = walker.walk(&maze, &mut pattern, source, destination);
    println!("{outcome}");

    if outcome.found() {
        let rendered = render_path(&maze, walker.path());
        for line in &rendered {
            println!("{line}");
        }
        if let Some(out) = &args.output {
            let mut data = rendered.join("\n");
            data.push('\n');
            fs::write(out, data).with_context(|| format!("writing {}", out.display()))?;
            println!("Results written to {}", out.display());
        }
    }
    Ok(())
}
