// File: crates/graph-core/src/series.rs
// Summary: Series model (titled numeric values) and the aggregate accessors the renderer reads.

/// Aggregates a renderer needs from a plotted dataset.
///
/// `min`, `max` and `avg` are `None` for an empty series.
pub trait SeriesStats {
    fn values(&self) -> &[f64];
    fn min(&self) -> Option<f64>;
    fn max(&self) -> Option<f64>;
    fn avg(&self) -> Option<f64>;

    /// Reference lines a chart body should draw for this series.
    fn marks(&self) -> SeriesMarks { SeriesMarks::default() }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesKind {
    #[default]
    Bar,
    Line,
}

/// Optional reference lines drawn by chart bodies on top of the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeriesMarks {
    pub average: bool,
    pub minimum: bool,
    pub maximum: bool,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub title: String,
    pub values: Vec<f64>,
    pub kind: SeriesKind,
    pub marks: SeriesMarks,
}

impl Series {
    pub fn new(title: impl Into<String>, values: Vec<f64>) -> Self {
        Self { title: title.into(), values, kind: SeriesKind::default(), marks: SeriesMarks::default() }
    }

    pub fn with_kind(mut self, kind: SeriesKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_marks(mut self, marks: SeriesMarks) -> Self {
        self.marks = marks;
        self
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

impl SeriesStats for Series {
    fn values(&self) -> &[f64] { &self.values }

    fn min(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }

    fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    fn avg(&self) -> Option<f64> {
        if self.values.is_empty() { return None; }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    fn marks(&self) -> SeriesMarks { self.marks }
}
