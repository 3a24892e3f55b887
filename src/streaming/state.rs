//! Point-in-time report of estimator settings and occupancy.

use std::fmt;

use crate::core::EstimatorConfig;

/// Configuration values plus current history length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateReport {
    pub capacity: usize,
    pub length: usize,
    pub pattern_length: usize,
    pub similarity_radius: f64,
    pub auto_recompute: bool,
    pub warn_on_insufficient_data: bool,
}

impl StateReport {
    pub fn new(config: &EstimatorConfig, length: usize) -> Self {
        Self {
            capacity: config.capacity(),
            length,
            pattern_length: config.pattern_length(),
            similarity_radius: config.similarity_radius(),
            auto_recompute: config.auto_recompute(),
            warn_on_insufficient_data: config.warn_on_insufficient_data(),
        }
    }
}

/// One `name value` line per attribute; flags print as `0`/`1`.
impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pattern_length {}", self.pattern_length)?;
        writeln!(f, "similarity_radius {}", self.similarity_radius)?;
        writeln!(f, "auto_recompute {}", self.auto_recompute as u8)?;
        writeln!(f, "capacity {}", self.capacity)?;
        writeln!(f, "length {}", self.length)?;
        write!(
            f,
            "warn_on_insufficient_data {}",
            self.warn_on_insufficient_data as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_reflects_config() {
        let config = EstimatorConfig::builder()
            .capacity(20)
            .pattern_length(2)
            .similarity_radius(0.25)
            .warn_on_insufficient_data(false)
            .build()
            .unwrap();
        let report = StateReport::new(&config, 7);

        assert_eq!(report.capacity, 20);
        assert_eq!(report.length, 7);
        assert_eq!(report.pattern_length, 2);
        assert_eq!(report.similarity_radius, 0.25);
        assert!(report.auto_recompute);
        assert!(!report.warn_on_insufficient_data);
    }

    #[test]
    fn display_lists_one_attribute_per_line() {
        let report = StateReport::new(&EstimatorConfig::default(), 3);
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "pattern_length 3",
                "similarity_radius 1",
                "auto_recompute 1",
                "capacity 50",
                "length 3",
                "warn_on_insufficient_data 1",
            ]
        );
    }
}
