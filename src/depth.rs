//! Depth buckets used to color earthquake markers.

use serde::Serialize;

/// One of the six fixed depth ranges (kilometers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthBucket {
    UpTo10,
    UpTo30,
    UpTo50,
    UpTo70,
    UpTo90,
    Deeper,
}

/// Buckets in ascending order. The last one is open-ended.
pub const DEPTH_BUCKETS: [DepthBucket; 6] = [
    DepthBucket::UpTo10,
    DepthBucket::UpTo30,
    DepthBucket::UpTo50,
    DepthBucket::UpTo70,
    DepthBucket::UpTo90,
    DepthBucket::Deeper,
];

impl DepthBucket {
    /// Inclusive upper bound, `None` for the catch-all bucket.
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            DepthBucket::UpTo10 => Some(10.0),
            DepthBucket::UpTo30 => Some(30.0),
            DepthBucket::UpTo50 => Some(50.0),
            DepthBucket::UpTo70 => Some(70.0),
            DepthBucket::UpTo90 => Some(90.0),
            DepthBucket::Deeper => None,
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            DepthBucket::UpTo10 => "#98EE00",
            DepthBucket::UpTo30 => "#D4EE00",
            DepthBucket::UpTo50 => "#EECC00",
            DepthBucket::UpTo70 => "#EE9C00",
            DepthBucket::UpTo90 => "#EA822C",
            DepthBucket::Deeper => "#EA2C2C",
        }
    }

    /// Lower bound as shown in the legend. The first bucket has no real lower
    /// bound; -10 km is the shallowest depth the feed reports.
    pub const fn legend_label(self) -> &'static str {
        match self {
            DepthBucket::UpTo10 => "-10",
            DepthBucket::UpTo30 => "10",
            DepthBucket::UpTo50 => "30",
            DepthBucket::UpTo70 => "50",
            DepthBucket::UpTo90 => "70",
            DepthBucket::Deeper => "90",
        }
    }

    /// First bucket whose upper bound is >= `depth`. NaN falls through to
    /// the catch-all.
    pub fn for_depth(depth: f64) -> DepthBucket {
        DEPTH_BUCKETS
            .iter()
            .copied()
            .find(|bucket| bucket.upper_bound().is_some_and(|bound| depth <= bound))
            .unwrap_or(DepthBucket::Deeper)
    }
}

/// Marker color for an earthquake at `depth` kilometers.
pub fn classify(depth: f64) -> &'static str {
    DepthBucket::for_depth(depth).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_values_belong_to_lower_bucket() {
        assert_eq!(classify(10.0), "#98EE00");
        assert_eq!(classify(30.0), "#D4EE00");
        assert_eq!(classify(50.0), "#EECC00");
        assert_eq!(classify(70.0), "#EE9C00");
        assert_eq!(classify(90.0), "#EA822C");
    }

    #[test]
    fn values_just_above_threshold_move_up() {
        assert_eq!(classify(10.01), "#D4EE00");
        assert_eq!(classify(90.0001), "#EA2C2C");
        assert_eq!(classify(95.0), "#EA2C2C");
    }

    #[test]
    fn negative_and_extreme_depths() {
        assert_eq!(classify(-3.2), "#98EE00");
        assert_eq!(classify(f64::NEG_INFINITY), "#98EE00");
        assert_eq!(classify(700.0), "#EA2C2C");
        assert_eq!(classify(f64::INFINITY), "#EA2C2C");
        assert_eq!(classify(f64::NAN), "#EA2C2C");
    }

    #[test]
    fn every_depth_maps_to_a_known_color() {
        let colors: Vec<&str> = DEPTH_BUCKETS.iter().map(|b| b.color()).collect();
        let mut depth = -50.0;
        while depth < 200.0 {
            assert!(colors.contains(&classify(depth)), "depth {depth}");
            depth += 0.25;
        }
    }

    #[test]
    fn buckets_are_ascending() {
        let bounds: Vec<f64> = DEPTH_BUCKETS.iter().filter_map(|b| b.upper_bound()).collect();
        assert_eq!(bounds.len(), 5);
        assert!(bounds.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DEPTH_BUCKETS[5].upper_bound(), None);
    }
}
