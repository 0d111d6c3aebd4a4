use rustc_hash::FxHashMap;
use serde::Serialize;

/// Raw time units per second in the time field of a data line
pub const TIME_DIVISOR: f64 = 1_000_000.0;

/// One named curve: parallel size and time sequences
///
/// `sizes` and `times` always have the same length; samples are only added
/// through [`Series::push`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    sizes: Vec<u64>,
    times: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sizes: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Append one sample, `time` in seconds
    pub fn push(&mut self, size: u64, time: f64) {
        self.sizes.push(size);
        self.times.push(time);
    }

    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Elapsed times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// (size, seconds) pairs in recorded order
    pub fn points(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.sizes.iter().copied().zip(self.times.iter().copied())
    }

    fn clear(&mut self) {
        self.sizes.clear();
        self.times.clear();
    }
}

/// Insertion-ordered mapping from series label to [`Series`]
///
/// Iteration follows the order in which labels were first seen, which is the
/// order series are drawn in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeriesMap {
    series: Vec<Series>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl SeriesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a series for `label` and return its position.
    ///
    /// A label that already exists is emptied in place, keeping its position.
    pub fn start(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            self.series[idx].clear();
            return idx;
        }
        let idx = self.series.len();
        self.series.push(Series::new(label));
        self.index.insert(label.to_string(), idx);
        idx
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn get(&self, label: &str) -> Option<&Series> {
        self.index.get(label).map(|&idx| &self.series[idx])
    }

    pub(crate) fn get_index_mut(&mut self, idx: usize) -> Option<&mut Series> {
        self.series.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl<'a> IntoIterator for &'a SeriesMap {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Series> for SeriesMap {
    /// Later series with a repeated label replace earlier ones in place
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        let mut map = SeriesMap::new();
        for series in iter {
            let idx = map.start(&series.label);
            map.series[idx] = series;
        }
        map
    }
}
