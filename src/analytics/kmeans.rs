//! Seeded k-means over 2-D points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub type Point = [f64; 2];

/// Result of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster index per input point.
    pub assignments: Vec<usize>,
    /// One centroid per cluster; a cluster that lost all its points keeps
    /// its last centroid.
    pub centroids: Vec<Point>,
    /// Assignment passes performed.
    pub iterations: usize,
}

impl Clustering {
    /// Number of points assigned to each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.centroids.len()];
        for &c in &self.assignments {
            sizes[c] += 1;
        }
        sizes
    }
}

/// Lloyd's algorithm with k-means++ seeding from a fixed RNG seed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeans {
    pub k: usize,
    pub seed: u64,
    pub max_iterations: usize,
}

impl Default for KMeans {
    fn default() -> Self {
        Self {
            k: 3,
            seed: 42,
            max_iterations: 300,
        }
    }
}

fn squared_distance(a: &Point, b: &Point) -> f64 {
    (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)
}

/// Index of the nearest centroid; the lowest index wins ties.
fn nearest(point: &Point, centroids: &[Point]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (j, c) in centroids.iter().enumerate() {
        let d = squared_distance(point, c);
        if d < best_dist {
            best_dist = d;
            best = j;
        }
    }
    best
}

impl KMeans {
    pub fn new(k: usize, seed: u64, max_iterations: usize) -> Self {
        Self {
            k,
            seed,
            max_iterations,
        }
    }

    /// Partition `points` into `k` clusters. Identical input and seed always
    /// give identical assignments.
    pub fn fit(&self, points: &[Point]) -> Clustering {
        if points.is_empty() || self.k == 0 {
            return Clustering {
                assignments: vec![0; points.len()],
                centroids: Vec::new(),
                iterations: 0,
            };
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centroids = self.initial_centroids(points, &mut rng);
        let mut assignments = vec![usize::MAX; points.len()];
        let mut iterations = 0;

        while iterations < self.max_iterations {
            iterations += 1;

            let mut changed = false;
            for (slot, p) in assignments.iter_mut().zip(points) {
                let c = nearest(p, &centroids);
                if *slot != c {
                    *slot = c;
                    changed = true;
                }
            }
            if !changed {
                break;
            }

            let mut sums = vec![[0.0f64; 2]; self.k];
            let mut counts = vec![0usize; self.k];
            for (&c, p) in assignments.iter().zip(points) {
                sums[c][0] += p[0];
                sums[c][1] += p[1];
                counts[c] += 1;
            }
            for (j, centroid) in centroids.iter_mut().enumerate() {
                if counts[j] > 0 {
                    let n = counts[j] as f64;
                    *centroid = [sums[j][0] / n, sums[j][1] / n];
                }
            }
        }

        log::debug!(
            "k-means (k={}) finished after {iterations} iterations on {} points",
            self.k,
            points.len()
        );

        Clustering {
            assignments,
            centroids,
            iterations,
        }
    }

    /// k-means++ seeding: each further centroid is drawn with probability
    /// proportional to its squared distance from the closest chosen one.
    fn initial_centroids(&self, points: &[Point], rng: &mut StdRng) -> Vec<Point> {
        let mut centroids = Vec::with_capacity(self.k);
        centroids.push(points[rng.gen_range(0..points.len())]);

        while centroids.len() < self.k {
            let weights: Vec<f64> = points
                .iter()
                .map(|p| {
                    centroids
                        .iter()
                        .map(|c| squared_distance(p, c))
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
            let total: f64 = weights.iter().sum();

            // Every point coincides with a centroid already.
            if total <= 0.0 {
                centroids.push(points[rng.gen_range(0..points.len())]);
                continue;
            }

            let target = rng.gen::<f64>() * total;
            let mut cumulative = 0.0;
            let mut chosen = points.len() - 1;
            for (i, w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative > target && *w > 0.0 {
                    chosen = i;
                    break;
                }
            }
            centroids.push(points[chosen]);
        }
        centroids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs() -> Vec<Point> {
        vec![
            [10.0, 5.0],
            [12.0, 6.0],
            [11.0, 4.0],
            [200.0, 100.0],
            [205.0, 102.0],
            [198.0, 99.0],
            [20.0, 340.0],
            [22.0, 350.0],
            [18.0, 345.0],
        ]
    }

    #[test]
    fn separates_well_spaced_blobs() {
        let result = KMeans::default().fit(&blobs());
        let a = &result.assignments;
        assert_eq!(a[0], a[1]);
        assert_eq!(a[1], a[2]);
        assert_eq!(a[3], a[4]);
        assert_eq!(a[4], a[5]);
        assert_eq!(a[6], a[7]);
        assert_eq!(a[7], a[8]);
        assert_ne!(a[0], a[3]);
        assert_ne!(a[3], a[6]);
        assert_ne!(a[0], a[6]);
        assert_eq!(result.sizes(), vec![3, 3, 3]);
    }

    #[test]
    fn centroids_are_cluster_means() {
        let points = blobs();
        let result = KMeans::default().fit(&points);
        for (j, centroid) in result.centroids.iter().enumerate() {
            let members: Vec<&Point> = points
                .iter()
                .zip(&result.assignments)
                .filter(|&(_, &c)| c == j)
                .map(|(p, _)| p)
                .collect();
            let n = members.len() as f64;
            let mean_x = members.iter().map(|p| p[0]).sum::<f64>() / n;
            let mean_y = members.iter().map(|p| p[1]).sum::<f64>() / n;
            assert!((centroid[0] - mean_x).abs() < 1e-9);
            assert!((centroid[1] - mean_y).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_same_assignments() {
        let points: Vec<Point> = (0..60)
            .map(|i| [((i * 37) % 300) as f64, ((i * 53) % 365) as f64])
            .collect();
        let km = KMeans::new(3, 42, 300);
        assert_eq!(km.fit(&points), km.fit(&points));
    }

    #[test]
    fn identical_points_do_not_panic() {
        let points = vec![[5.0, 5.0]; 6];
        let result = KMeans::default().fit(&points);
        assert_eq!(result.assignments, vec![0; 6]);
        assert_eq!(result.centroids.len(), 3);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let km = KMeans::new(3, 1, 1);
        assert_eq!(km.fit(&blobs()).iterations, 1);
    }

    #[test]
    fn empty_input_yields_empty_clustering() {
        let result = KMeans::default().fit(&[]);
        assert!(result.assignments.is_empty());
        assert_eq!(result.iterations, 0);
    }
}
