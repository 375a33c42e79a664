use crate::harmony::Coloring;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Path, Rectangle, Text};

const CELL: f64 = 24.0;
const MARGIN: f64 = 10.0;

fn color(c: u8) -> &'static str {
    match c {
        b'R' => "#ff8080",
        b'G' => "#80ff80",
        _ => "#8080ff",
    }
}

/// Draws the grid, one square per light. With `show_diagonals`, the diagonal
/// and anti-diagonal through every red light are drawn as well.
pub fn render_grid(coloring: &Coloring, show_diagonals: bool) -> String {
    let n = coloring.n();
    let size = n as f64 * CELL;
    let mut document = Document::new()
        .set("width", size + 2.0 * MARGIN)
        .set("height", size + 2.0 * MARGIN)
        .set("viewBox", (-MARGIN, -MARGIN, size + 2.0 * MARGIN, size + 2.0 * MARGIN));

    let grid = coloring.to_grid();
    for (i, row) in grid.iter().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            let rect = Rectangle::new()
                .set("x", j as f64 * CELL)
                .set("y", i as f64 * CELL)
                .set("width", CELL)
                .set("height", CELL)
                .set("fill", color(c))
                .set("stroke", "black")
                .set("stroke-width", 1)
                .set("title", format!("({}, {}) {}", i, j, c as char));
            document = document.add(rect);
            if c != b'B' {
                let dot = Circle::new()
                    .set("cx", (j as f64 + 0.5) * CELL)
                    .set("cy", (i as f64 + 0.5) * CELL)
                    .set("r", CELL * 0.3)
                    .set("fill", "white")
                    .set("stroke", "black");
                document = document.add(dot);
            }
        }
    }

    if show_diagonals {
        for (i, &j) in coloring.red.iter().enumerate() {
            let (x, y) = ((j as f64 + 0.5) * CELL, (i as f64 + 0.5) * CELL);
            // Clip both lines to the grid.
            let down = (size - x).min(size - y);
            let up = x.min(y);
            let anti_down = x.min(size - y);
            let anti_up = (size - x).min(y);
            let data = Data::new()
                .move_to((x - up, y - up))
                .line_to((x + down, y + down))
                .move_to((x + anti_up, y - anti_up))
                .line_to((x - anti_down, y + anti_down));
            let path = Path::new()
                .set("fill", "none")
                .set("stroke", "#c00000")
                .set("stroke-width", 1)
                .set("opacity", 0.5)
                .set("d", data);
            document = document.add(path);
        }
    }

    if n <= 40 {
        for i in 0..n {
            let label = Text::new(i.to_string())
                .set("x", -2.0)
                .set("y", (i as f64 + 0.7) * CELL)
                .set("text-anchor", "end")
                .set("font-size", "10px");
            document = document.add(label);
        }
    }

    document.to_string()
}

#[cfg(test)]
mod tests {
    use crate::harmony::{Input, solve};
    use crate::svg;

    #[test]
    fn test_svg_render_small_grid() {
        let c = solve(&Input { n: 5 }).unwrap();
        let svg_str = svg::render_grid(&c, true);
        assert!(svg_str.contains("<svg"));
        assert_eq!(svg_str.matches("<rect").count(), 25);
        assert_eq!(svg_str.matches("<circle").count(), 10);
        assert_eq!(svg_str.matches("<path").count(), 5);
    }

    #[test]
    fn test_svg_render_without_diagonals() {
        let c = solve(&Input { n: 4 }).unwrap();
        let svg_str = svg::render_grid(&c, false);
        assert!(svg_str.contains("<svg"));
        assert!(!svg_str.contains("<path"));
    }
}
