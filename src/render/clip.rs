use crate::foundation::core::{Point, Rect};

/// Clip the polyline through `points` to `rect`.
///
/// Returns the visible runs; a run breaks wherever the line leaves the rectangle.
pub(crate) fn clip_polyline(points: &[Point], rect: Rect) -> Vec<Vec<Point>> {
    let mut runs: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();

    for pair in points.windows(2) {
        match clip_segment(pair[0], pair[1], rect) {
            Some((a, b)) => {
                let continues = current
                    .last()
                    .is_some_and(|last| same_point(*last, a));
                if !continues {
                    if current.len() >= 2 {
                        runs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(a);
                }
                current.push(b);
            }
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

/// Liang-Barsky clip of segment `a -> b` against `rect`.
pub(crate) fn clip_segment(a: Point, b: Point, rect: Rect) -> Option<(Point, Point)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let checks = [
        (-dx, a.x - rect.x0),
        (dx, rect.x1 - a.x),
        (-dy, a.y - rect.y0),
        (dy, rect.y1 - a.y),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point::new(a.x + dx * t, a.y + dy * t);
    Some((at(t0), at(t1)))
}

fn same_point(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[cfg(test)]
#[path = "../../tests/unit/render/clip.rs"]
mod tests;
