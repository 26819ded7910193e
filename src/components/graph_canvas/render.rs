use crate::graph::Position;

pub const ARROW_SIZE: f64 = 8.0;

/// Geometry of one edge, already clipped to the vertex circles.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeShape {
	Line {
		start: Position,
		end: Position,
		head: [Position; 3],
	},
	/// Edge from a vertex to itself, drawn as a loop above the circle.
	Loop { path: String, head: [Position; 3] },
}

/// Shape for the edge `from -> to`, `None` when two distinct vertices sit
/// on the same spot and no direction can be drawn.
pub fn edge_shape(from: Position, to: Position, self_loop: bool, radius: f64) -> Option<EdgeShape> {
	if self_loop {
		return Some(loop_shape(from, radius));
	}

	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = from.distance(&to);
	if dist < 0.001 {
		return None;
	}

	let (ux, uy) = (dx / dist, dy / dist);
	let start = Position::new(from.x + ux * radius, from.y + uy * radius);
	let end = Position::new(
		to.x - ux * (radius + ARROW_SIZE),
		to.y - uy * (radius + ARROW_SIZE),
	);
	let tip = Position::new(to.x - ux * radius, to.y - uy * radius);

	Some(EdgeShape::Line {
		start,
		end,
		head: arrow_head(tip, (ux, uy)),
	})
}

fn loop_shape(at: Position, radius: f64) -> EdgeShape {
	let (half, rise) = (radius * 0.5, radius * 3.0_f64.sqrt() * 0.5);
	let start = Position::new(at.x - half, at.y - rise);
	let tip = Position::new(at.x + half, at.y - rise);
	let (c1, c2) = (
		Position::new(at.x - 1.5 * radius, at.y - 3.0 * radius),
		Position::new(at.x + 1.5 * radius, at.y - 3.0 * radius),
	);

	let (dx, dy) = (tip.x - c2.x, tip.y - c2.y);
	let len = (dx * dx + dy * dy).sqrt();
	let path = format!(
		"M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}",
		start.x, start.y, c1.x, c1.y, c2.x, c2.y, tip.x, tip.y
	);

	EdgeShape::Loop {
		path,
		head: arrow_head(tip, (dx / len, dy / len)),
	}
}

/// Triangle pointing along `(ux, uy)` with its tip at `tip`.
fn arrow_head(tip: Position, (ux, uy): (f64, f64)) -> [Position; 3] {
	let (back_x, back_y) = (tip.x - ux * ARROW_SIZE, tip.y - uy * ARROW_SIZE);
	let (px, py) = (-uy * ARROW_SIZE * 0.5, ux * ARROW_SIZE * 0.5);
	[
		tip,
		Position::new(back_x + px, back_y + py),
		Position::new(back_x - px, back_y - py),
	]
}

/// Value for an SVG `points` attribute.
pub fn points(corners: &[Position]) -> String {
	corners
		.iter()
		.map(|p| format!("{:.2},{:.2}", p.x, p.y))
		.collect::<Vec<_>>()
		.join(" ")
}
