use waygraph_core::Vec2;

/// Which lattice cells count as neighbours when wiring up a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Neighborhood {
    /// Left, right, up and down.
    #[default]
    Adjacent,
    /// The four diagonal cells only.
    Diagonal,
    /// Axis-aligned and diagonal cells.
    All,
}

impl Neighborhood {
    /// Append the neighbours of cell `(x, y)` in a `width` x `height`
    /// lattice into `buf` as `(row-major index, cost)` pairs. The caller
    /// clears `buf` before calling.
    ///
    /// Horizontal steps cost `spacing.x`, vertical steps `spacing.y` and
    /// diagonal steps the length of `spacing`.
    pub fn neighbors(
        self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        spacing: Vec2,
        buf: &mut Vec<(usize, f64)>,
    ) {
        if x >= width || y >= height {
            return;
        }
        match self {
            Self::Adjacent => adjacent(x, y, width, height, spacing, buf),
            Self::Diagonal => diagonal(x, y, width, height, spacing, buf),
            Self::All => {
                adjacent(x, y, width, height, spacing, buf);
                diagonal(x, y, width, height, spacing, buf);
            }
        }
    }
}

fn adjacent(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    spacing: Vec2,
    buf: &mut Vec<(usize, f64)>,
) {
    let idx = y * width + x;
    let (dx, dy) = (spacing.x.abs(), spacing.y.abs());
    if x > 0 {
        buf.push((idx - 1, dx));
    }
    if x + 1 < width {
        buf.push((idx + 1, dx));
    }
    if y > 0 {
        buf.push((idx - width, dy));
    }
    if y + 1 < height {
        buf.push((idx + width, dy));
    }
}

fn diagonal(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    spacing: Vec2,
    buf: &mut Vec<(usize, f64)>,
) {
    let idx = y * width + x;
    let d = spacing.length();
    let (left, right) = (x > 0, x + 1 < width);
    let (top, bottom) = (y > 0, y + 1 < height);
    if left && top {
        buf.push((idx - width - 1, d));
    }
    if left && bottom {
        buf.push((idx + width - 1, d));
    }
    if right && top {
        buf.push((idx + 1 - width, d));
    }
    if right && bottom {
        buf.push((idx + width + 1, d));
    }
}
