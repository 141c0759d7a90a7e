use hue_core::Point;

/// An ordered walk through logical cells, source first, target last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalPath {
    points: Vec<Point>,
}

impl LogicalPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a point to the beginning of the path.
    pub fn prepend(&mut self, p: Point) {
        self.points.insert(0, p);
    }

    /// Add a point to the end of the path.
    pub fn append(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of hops walked, one less than the number of points.
    pub fn hops(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// The cell after the start, i.e. the single move an agent makes toward
    /// the end. `None` for paths shorter than two points.
    pub fn next_step(&self) -> Option<Point> {
        self.points.get(1).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for LogicalPath {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for LogicalPath {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LogicalPath {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
