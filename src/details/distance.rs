/// Metric that is computed as a distance, with the similarity derived from it.
pub trait DistanceMetricUsize {
    fn maximum(&self, len1: usize, len2: usize) -> usize;

    fn _distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>;

    fn _similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> usize
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let maximum = self.maximum(s1.len(), s2.len());
        maximum - self._distance(s1, s2)
    }
}

pub trait NormalizedMetricUsize {
    fn _normalized_distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>;

    fn _normalized_similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>;
}

impl<T: DistanceMetricUsize> NormalizedMetricUsize for T {
    fn _normalized_distance<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        let maximum = self.maximum(s1.len(), s2.len());
        if maximum == 0 {
            return 0.0;
        }

        let dist = self._distance(s1, s2);
        (dist as f64 / maximum as f64).clamp(0.0, 1.0)
    }

    fn _normalized_similarity<Elem1, Elem2>(&self, s1: &[Elem1], s2: &[Elem2]) -> f64
    where
        Elem1: PartialEq<Elem2>,
        Elem2: PartialEq<Elem1>,
    {
        1.0 - self._normalized_distance(s1, s2)
    }
}
