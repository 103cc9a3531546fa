use mazewalk_core::Point;

use crate::walker::PatternPather;

/// Symbol used for non-path cells in rendered output.
pub const FILL: char = '_';

/// Project `path` onto a blank grid of the pather's shape.
///
/// Every cell is [`FILL`] except the path cells, which keep their
/// original symbol. Returns one `String` per row. An empty path yields
/// an all-fill grid.
pub fn render_path<P: PatternPather>(pather: &P, path: &[Point]) -> Vec<String> {
    let size = pather.size();
    let width = size.x.max(0) as usize;
    let height = size.y.max(0) as usize;
    let mut rows = vec![vec![FILL; width]; height];
    for &p in path {
        // Out-of-grid points have no symbol and are skipped.
        if let Some(sym) = pather.symbol(p) {
            rows[p.y as usize][p.x as usize] = sym;
        }
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::{Maze, Pattern};

    use crate::walker::Walker;

    #[test]
    fn empty_path_is_all_fill() {
        let m = Maze::new('E', '#', &["EaaE", "####"]).unwrap();
        let rendered = render_path(&m, &[]);
        assert_eq!(rendered, vec!["____", "____"]);
    }

    #[test]
    fn path_cells_keep_their_symbol() {
        let m = Maze::new('E', '#', &["Ea#", "#a#", "#aE"]).unwrap();
        let mut pattern = Pattern::new("a").unwrap();
        let (source, destination) = m.find_entry_points().unwrap();
        let mut walker = Walker::new(m.size());
        let outcome = walker.walk(&m, &mut pattern, source, destination);
        assert!(outcome.found());

        let rendered = render_path(&m, walker.path());
        assert_eq!(rendered, vec!["Ea_", "_a_", "_aE"]);
    }

    #[test]
    fn full_corridor_renders_as_input() {
        let m = Maze::new('E', '#', &["EaaE"]).unwrap();
        let mut pattern = Pattern::new("a").unwrap();
        let (source, destination) = m.find_entry_points().unwrap();
        let mut walker = Walker::new(m.size());
        walker.walk(&m, &mut pattern, source, destination);

        let rendered = render_path(&m, walker.path());
        assert_eq!(rendered, vec!["EaaE"]);
    }
}
