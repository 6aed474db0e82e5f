/// Paired (x, y) observations in file order, stored as parallel columns.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Samples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// 1-based source line of each sample, 0 when not read from a file.
    pub lines: Vec<u64>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let mut samples = Self::new();
        for &(x, y) in pairs {
            samples.push(x, y, 0);
        }
        samples
    }

    pub fn push(&mut self, x: f64, y: f64, line: u64) {
        self.xs.push(x);
        self.ys.push(y);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<u64> {
        self.lines.get(index).copied().filter(|&l| l > 0)
    }

    /// Copies out the columns at `indices`, keeping their order.
    pub fn select(&self, indices: &[usize]) -> (Vec<f64>, Vec<f64>) {
        indices.iter().map(|&i| (self.xs[i], self.ys[i])).unzip()
    }
}
